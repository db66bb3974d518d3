//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션에 대한 MongoDB 데이터 액세스입니다.
//! 이 서비스가 사용자 문서에 쓰는 필드는 `currentLocation` 하나뿐입니다.

use async_trait::async_trait;
use mongodb::{
    bson::{self, doc, oid::ObjectId, DateTime},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::{
    core::{AppError, AppResult},
    db::Database,
    domain::entities::users::User,
    domain::models::geo::GeoPoint,
    repositories::UserStore,
};

/// 사용자 데이터 액세스 리포지토리
///
/// ## 인덱스
///
/// - `currentLocation` (`2dsphere`)
/// - `username` (unique)
/// - `email` (unique)
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = UserRepository::new(&database);
/// repo.create_indexes().await?;
///
/// let point = GeoPoint::from(Coordinates::new(6.9271, 79.8612)?);
/// let updated = repo.update_location(&user_id, point).await?;
/// ```
#[derive(Clone)]
pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    pub const COLLECTION: &'static str = "users";

    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<User>(Self::COLLECTION),
        }
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다. 인덱스 이름은 기존 컬렉션에
    /// 이미 만들어져 있는 이름과 같게 맞춰 두어, 재실행해도 충돌하지 않습니다.
    ///
    /// # 주의사항
    ///
    /// - 중복 이메일/사용자명이 이미 있는 경우 유니크 인덱스 생성 실패
    /// - `2dsphere` 인덱스가 없으면 `$near` 쿼리 자체가 실패
    pub async fn create_indexes(&self) -> AppResult<()> {
        let location_index = IndexModel::builder()
            .keys(doc! { "currentLocation": "2dsphere" })
            .options(IndexOptions::builder()
                .name("currentLocation_2dsphere".to_string())
                .build())
            .build();

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_1".to_string())
                .build())
            .build();

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_1".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([location_index, username_index, email_index])
            .await
            .map_err(AppError::from)?;

        Ok(())
    }
}

pub(crate) fn parse_object_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
}

pub(crate) fn point_to_bson(point: &GeoPoint) -> AppResult<bson::Bson> {
    bson::to_bson(point)
        .map_err(|e| AppError::InternalError(format!("위치 직렬화 실패: {}", e)))
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let object_id = parse_object_id(id)?;

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(AppError::from)
    }

    async fn update_location(&self, id: &str, point: GeoPoint) -> AppResult<Option<User>> {
        let object_id = parse_object_id(id)?;

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": {
                    "currentLocation": point_to_bson(&point)?,
                    "updatedAt": DateTime::now(),
                } },
            )
            .with_options(options)
            .await
            .map_err(AppError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::geo::Coordinates;

    #[test]
    fn test_parse_object_id_rejects_garbage() {
        assert!(parse_object_id("507f1f77bcf86cd799439011").is_ok());
        assert!(matches!(parse_object_id("not-an-id"), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_point_to_bson_is_geojson() {
        let point = GeoPoint::from(Coordinates::new(6.9, 79.8).unwrap());

        assert_eq!(
            point_to_bson(&point).unwrap(),
            bson::Bson::Document(doc! { "type": "Point", "coordinates": [79.8, 6.9] })
        );
    }
}
