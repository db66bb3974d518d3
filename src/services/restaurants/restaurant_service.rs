//! # 레스토랑 서비스
//!
//! 레스토랑 상세 조회, 매장 위치 등록, 평점 누적을 담당합니다.
//! 매장 위치는 해당 레스토랑 운영자 본인만 바꿀 수 있습니다.

use std::sync::Arc;
use crate::{
    config::roles,
    core::{AppError, AppResult},
    domain::{
        dto::restaurants::response::{RatingResponse, RestaurantDetailResponse},
        models::{
            auth::AuthenticatedUser,
            geo::{Coordinates, GeoPoint},
        },
    },
    repositories::RestaurantStore,
};

/// 허용되는 별점 범위
pub const RATING_RANGE: std::ops::RangeInclusive<i64> = 1..=5;

pub struct RestaurantService {
    restaurants: Arc<dyn RestaurantStore>,
}

impl RestaurantService {
    pub fn new(restaurants: Arc<dyn RestaurantStore>) -> Self {
        Self { restaurants }
    }

    /// 레스토랑 프로필, 메뉴, 특가를 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 잘못된 ID 형식
    /// * `AppError::NotFound` - 레스토랑 없음
    pub async fn get_details(&self, restaurant_id: &str) -> AppResult<RestaurantDetailResponse> {
        let restaurant = self.restaurants
            .find_by_id(restaurant_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Restaurant not found".to_string()))?;

        Ok(RestaurantDetailResponse::from(restaurant))
    }

    /// 매장 위치를 덮어씁니다.
    ///
    /// # Arguments
    ///
    /// * `principal` - 요청한 주체. `restaurant` 역할이고 `restaurant_id`와 같아야 함
    /// * `restaurant_id` - 대상 레스토랑 ID
    /// * `coordinates` - 검증된 위도/경도
    ///
    /// # Errors
    ///
    /// * `AppError::AuthorizationError` - 본인 레스토랑이 아님
    /// * `AppError::NotFound` - 레스토랑 없음
    pub async fn set_location(
        &self,
        principal: &AuthenticatedUser,
        restaurant_id: &str,
        coordinates: Coordinates,
    ) -> AppResult<RestaurantDetailResponse> {
        principal.ensure_owner(roles::RESTAURANT, restaurant_id)?;

        let updated = self.restaurants
            .update_location(restaurant_id, GeoPoint::from(coordinates))
            .await?
            .ok_or_else(|| AppError::NotFound("Restaurant not found".to_string()))?;

        log::info!(
            "레스토랑 위치 저장: {} (lat {}, lon {})",
            restaurant_id,
            coordinates.latitude(),
            coordinates.longitude()
        );

        Ok(RestaurantDetailResponse::from(updated))
    }

    /// 별점 하나를 누적하고 갱신된 평균을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 별점이 1 ~ 5 범위를 벗어남
    /// * `AppError::NotFound` - 레스토랑 없음
    pub async fn add_rating(&self, restaurant_id: &str, rating: i64) -> AppResult<RatingResponse> {
        if !RATING_RANGE.contains(&rating) {
            return Err(AppError::ValidationError(
                "rating must be between 1 and 5".to_string(),
            ));
        }

        let updated = self.restaurants
            .add_rating(restaurant_id, rating)
            .await?
            .ok_or_else(|| AppError::NotFound("Restaurant not found".to_string()))?;

        log::info!(
            "평점 등록: {} (+{}, 평균 {:.2}, {}건)",
            restaurant_id,
            rating,
            updated.average_rating,
            updated.rating_count
        );

        Ok(RatingResponse::from(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;
    use crate::domain::entities::restaurants::Restaurant;
    use crate::repositories::memory::InMemoryStore;

    fn setup() -> (Arc<InMemoryStore>, RestaurantService, String) {
        let store = Arc::new(InMemoryStore::new());
        let id = store.insert_restaurant(Restaurant::new("Ministry of Crab", "hello@crab.lk"));
        (store.clone(), RestaurantService::new(store), id)
    }

    fn principal(id: &str, role: &str) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: id.to_string(),
            roles: vec![role.to_string()],
        }
    }

    #[actix_web::test]
    async fn test_owner_can_set_location() {
        let (_, service, id) = setup();
        let coords = Coordinates::new(6.9271, 79.8612).unwrap();

        let detail = service
            .set_location(&principal(&id, roles::RESTAURANT), &id, coords)
            .await
            .unwrap();

        assert_eq!(detail.location, Some(coords));
    }

    #[actix_web::test]
    async fn test_other_principal_cannot_set_location() {
        let (_, service, id) = setup();
        let coords = Coordinates::new(6.9271, 79.8612).unwrap();
        let other = ObjectId::new().to_hex();

        let as_other = service.set_location(&principal(&other, roles::RESTAURANT), &id, coords).await;
        let as_user = service.set_location(&principal(&id, roles::USER), &id, coords).await;

        assert!(matches!(as_other, Err(AppError::AuthorizationError(_))));
        assert!(matches!(as_user, Err(AppError::AuthorizationError(_))));
    }

    #[actix_web::test]
    async fn test_add_rating_updates_average() {
        let (_, service, id) = setup();

        service.add_rating(&id, 5).await.unwrap();
        let response = service.add_rating(&id, 4).await.unwrap();

        assert_eq!(response.rating_count, 2);
        assert_eq!(response.average_rating, 4.5);
    }

    #[actix_web::test]
    async fn test_add_rating_rejects_out_of_range() {
        let (_, service, id) = setup();

        assert!(matches!(service.add_rating(&id, 0).await, Err(AppError::ValidationError(_))));
        assert!(matches!(service.add_rating(&id, 6).await, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_get_details_for_missing_restaurant() {
        let (_, service, _) = setup();

        let result = service.get_details(&ObjectId::new().to_hex()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
