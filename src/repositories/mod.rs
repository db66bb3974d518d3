//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스는 구체 타입 대신 [`UserStore`], [`RestaurantStore`] 트레이트에 의존합니다.
//! 운영 환경에서는 MongoDB 구현체가 주입되고, 테스트에서는 메모리 구현체가 주입됩니다.
//!
//! # 구현체
//!
//! | 트레이트 | 운영 구현 | 컬렉션 |
//! |----------|-----------|--------|
//! | [`UserStore`] | [`users::UserRepository`] | `users` |
//! | [`RestaurantStore`] | [`restaurants::RestaurantRepository`] | `restaurants` |
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::{users::UserRepository, UserStore};
//!
//! let users: Arc<dyn UserStore> = Arc::new(UserRepository::new(&database));
//! let user = users.find_by_id("507f1f77bcf86cd799439011").await?;
//! ```

use async_trait::async_trait;
use crate::core::AppResult;
use crate::domain::entities::restaurants::Restaurant;
use crate::domain::entities::users::User;
use crate::domain::models::geo::{GeoPoint, SearchRadius};

pub mod users;
pub mod restaurants;

#[cfg(test)]
pub mod memory;

/// 사용자 저장소
#[async_trait]
pub trait UserStore: Send + Sync {
    /// ID로 사용자 조회. ID 형식이 잘못되면 `ValidationError`입니다.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// 현재 위치를 원자적으로 덮어쓰고 갱신된 문서를 돌려줍니다.
    ///
    /// 사용자가 없으면 `Ok(None)`입니다.
    async fn update_location(&self, id: &str, point: GeoPoint) -> AppResult<Option<User>>;
}

/// 레스토랑 저장소
#[async_trait]
pub trait RestaurantStore: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Restaurant>>;

    /// `origin`에서 `radius` 안에 있는 레스토랑을 가까운 순으로 최대 `limit`건 조회합니다.
    ///
    /// 위치가 없는 레스토랑은 결과에 포함되지 않습니다.
    async fn find_near(
        &self,
        origin: &GeoPoint,
        radius: SearchRadius,
        limit: i64,
    ) -> AppResult<Vec<Restaurant>>;

    /// 매장 위치를 원자적으로 덮어씁니다.
    async fn update_location(&self, id: &str, point: GeoPoint) -> AppResult<Option<Restaurant>>;

    /// 평점 하나를 누적하고 평균을 다시 계산합니다.
    async fn add_rating(&self, id: &str, rating: i64) -> AppResult<Option<Restaurant>>;
}
