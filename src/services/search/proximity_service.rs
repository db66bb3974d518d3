//! # 주변 레스토랑 검색 서비스
//!
//! 사용자가 저장해 둔 위치를 기준으로 반경 안의 레스토랑을 가까운 순으로 조회합니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! find_nearby(user_id, radius)
//!   ├─ 사용자 조회 ──────────── 없음 → NotFound("Add Location first")
//!   ├─ currentLocation 확인 ─── 없음 → PreconditionFailed("Add Location first")
//!   ├─ $near 쿼리 (타임아웃) ── 초과 → DatabaseError
//!   └─ page_size로 자르기 ───── 0건 → NearbyOutcome::Empty
//! ```
//!
//! 위치가 없는 경우는 저장소 쿼리를 한 번도 실행하지 않습니다.

use std::sync::Arc;
use std::time::Instant;
use actix_web::rt::time::timeout;
use crate::{
    config::SearchConfig,
    core::{errors::ADD_LOCATION_FIRST, AppError, AppResult},
    domain::{entities::restaurants::Restaurant, models::geo::SearchRadius},
    repositories::{RestaurantStore, UserStore},
};

/// 주변 검색 결과
///
/// 0건은 에러가 아니라 별도의 결과입니다. 호출자는 이 값을 보고 반경 확장 여부를 결정합니다.
#[derive(Debug)]
pub enum NearbyOutcome {
    /// 가까운 순으로 정렬된 1건 이상의 결과 (최대 page_size)
    Found(Vec<Restaurant>),
    /// 반경 안에 레스토랑이 없음
    Empty,
}

/// 주변 레스토랑 검색 서비스
pub struct ProximityService {
    users: Arc<dyn UserStore>,
    restaurants: Arc<dyn RestaurantStore>,
    config: SearchConfig,
}

impl ProximityService {
    pub fn new(
        users: Arc<dyn UserStore>,
        restaurants: Arc<dyn RestaurantStore>,
        config: SearchConfig,
    ) -> Self {
        Self { users, restaurants, config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// 사용자 위치 기준 반경 안의 레스토랑을 조회합니다.
    ///
    /// # Arguments
    ///
    /// * `user_id` - 검색하는 사용자 ID
    /// * `radius` - 검색 반경 (이미 보정된 값)
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 사용자가 존재하지 않음. 메시지는 위치 미등록과 같습니다
    /// * `AppError::PreconditionFailed` - 사용자가 위치를 저장한 적 없음
    /// * `AppError::DatabaseError` - 저장소 오류 또는 쿼리 타임아웃 (재시도 가능)
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let radius = SearchRadius::from_query(Some("5000"), service.config());
    ///
    /// match service.find_nearby(&user_id, radius).await? {
    ///     NearbyOutcome::Found(list) => println!("{}곳 발견", list.len()),
    ///     NearbyOutcome::Empty => println!("반경을 넓혀 다시 검색"),
    /// }
    /// ```
    pub async fn find_nearby(
        &self,
        user_id: &str,
        radius: SearchRadius,
    ) -> AppResult<NearbyOutcome> {
        let user = self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| {
                log::debug!("존재하지 않는 사용자의 주변 검색: {}", user_id);
                AppError::NotFound(ADD_LOCATION_FIRST.to_string())
            })?;

        let origin = user.current_location.ok_or_else(|| {
            log::debug!("위치 미등록 사용자의 주변 검색: {}", user_id);
            AppError::PreconditionFailed(ADD_LOCATION_FIRST.to_string())
        })?;

        let started = Instant::now();
        let query = self.restaurants.find_near(&origin, radius, self.config.page_size);

        let mut restaurants = match timeout(self.config.query_timeout, query).await {
            Ok(Ok(restaurants)) => restaurants,
            Ok(Err(e)) => {
                log::error!("주변 검색 실패: 사용자 {}, 반경 {}m: {}", user_id, radius.meters(), e);
                return Err(e);
            }
            Err(_) => {
                log::warn!(
                    "주변 검색 타임아웃: 사용자 {}, 반경 {}m, 제한 {:?}",
                    user_id,
                    radius.meters(),
                    self.config.query_timeout
                );
                return Err(AppError::DatabaseError(format!(
                    "proximity query exceeded {:?}",
                    self.config.query_timeout
                )));
            }
        };

        restaurants.truncate(self.config.page_size.max(0) as usize);

        log::info!(
            "주변 검색: 사용자 {}, 반경 {}m, {}건, {:?}",
            user_id,
            radius.meters(),
            restaurants.len(),
            started.elapsed()
        );

        if restaurants.is_empty() {
            Ok(NearbyOutcome::Empty)
        } else {
            Ok(NearbyOutcome::Found(restaurants))
        }
    }
}
