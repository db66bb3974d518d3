//! # 사용자 위치 서비스
//!
//! 사용자의 현재 위치를 저장합니다. 사용자당 위치는 하나이며 이력은 남기지 않고
//! 항상 덮어씁니다. 동시에 들어온 두 요청은 저장소의 단일 문서 원자 업데이트에 의해
//! 나중에 도착한 쪽이 남습니다.

use std::sync::Arc;
use crate::{
    core::{AppError, AppResult},
    domain::{
        dto::users::response::UserResponse,
        models::geo::{Coordinates, GeoPoint},
    },
    repositories::UserStore,
};

/// 사용자 위치 저장 서비스
pub struct LocationService {
    users: Arc<dyn UserStore>,
}

impl LocationService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// 사용자의 현재 위치를 덮어쓰고 갱신된 사용자 정보를 반환합니다.
    ///
    /// 같은 좌표로 여러 번 호출해도 저장 상태는 동일합니다.
    ///
    /// # Arguments
    ///
    /// * `user_id` - 대상 사용자 ID (ObjectId 문자열)
    /// * `coordinates` - 검증된 위도/경도
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 잘못된 ID 형식
    /// * `AppError::NotFound` - 사용자가 존재하지 않음
    /// * `AppError::DatabaseError` - 저장소 오류
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let coords = Coordinates::new(6.9271, 79.8612)?;
    /// let user = location_service.set_location(&user_id, coords).await?;
    /// assert_eq!(user.latitude, Some(6.9271));
    /// ```
    pub async fn set_location(
        &self,
        user_id: &str,
        coordinates: Coordinates,
    ) -> AppResult<UserResponse> {
        let updated = self.users
            .update_location(user_id, GeoPoint::from(coordinates))
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        log::info!(
            "사용자 위치 저장: {} (lat {}, lon {})",
            user_id,
            coordinates.latitude(),
            coordinates.longitude()
        );

        Ok(UserResponse::from(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::User;
    use crate::repositories::memory::InMemoryStore;
    use mongodb::bson::oid::ObjectId;

    fn service_with_user() -> (Arc<InMemoryStore>, LocationService, String) {
        let store = Arc::new(InMemoryStore::new());
        let user_id = store.insert_user(User::new("kasun", "kasun@example.com"));
        let service = LocationService::new(store.clone());
        (store, service, user_id)
    }

    #[actix_web::test]
    async fn test_set_location_round_trips_coordinates() {
        let (store, service, user_id) = service_with_user();

        let response = service
            .set_location(&user_id, Coordinates::new(6.9, 79.8).unwrap())
            .await
            .unwrap();

        assert_eq!(response.latitude, Some(6.9));
        assert_eq!(response.longitude, Some(79.8));

        let stored = store.user(&user_id).unwrap().current_location.unwrap();
        assert_eq!(stored.longitude(), 79.8);
        assert_eq!(stored.to_coordinates(), Coordinates::new(6.9, 79.8).unwrap());
    }

    #[actix_web::test]
    async fn test_set_location_is_idempotent_and_overwrites() {
        let (store, service, user_id) = service_with_user();
        let colombo = Coordinates::new(6.9271, 79.8612).unwrap();
        let kandy = Coordinates::new(7.2906, 80.6337).unwrap();

        service.set_location(&user_id, colombo).await.unwrap();
        service.set_location(&user_id, colombo).await.unwrap();
        assert_eq!(store.user(&user_id).unwrap().current_location, Some(GeoPoint::from(colombo)));

        service.set_location(&user_id, kandy).await.unwrap();
        assert_eq!(store.user(&user_id).unwrap().current_location, Some(GeoPoint::from(kandy)));
    }

    #[actix_web::test]
    async fn test_set_location_for_missing_user() {
        let (_, service, _) = service_with_user();
        let missing = ObjectId::new().to_hex();

        let result = service.set_location(&missing, Coordinates::new(0.0, 0.0).unwrap()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));

        let result = service.set_location("bogus", Coordinates::new(0.0, 0.0).unwrap()).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
