//! # 레스토랑 리포지토리 구현
//!
//! `restaurants` 컬렉션에 대한 MongoDB 데이터 액세스입니다.
//! 거리 계산과 정렬은 `2dsphere` 인덱스와 `$near` 연산자에 위임하며,
//! 애플리케이션 코드에는 거리 공식이 없습니다.

use std::time::Duration;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, DateTime, Document},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::{
    core::{AppError, AppResult},
    db::Database,
    domain::entities::restaurants::Restaurant,
    domain::models::geo::{GeoPoint, SearchRadius},
    repositories::users::user_repo::{parse_object_id, point_to_bson},
    repositories::RestaurantStore,
};

/// 주변 검색 필터 문서를 만듭니다.
///
/// ```json
/// {
///   "location": {
///     "$near": {
///       "$geometry": { "type": "Point", "coordinates": [lon, lat] },
///       "$maxDistance": 5000
///     }
///   }
/// }
/// ```
///
/// `$near`는 구면 거리 기준으로 가까운 순 정렬까지 수행합니다.
pub fn near_filter(origin: &GeoPoint, radius: SearchRadius) -> Document {
    doc! {
        "location": {
            "$near": {
                "$geometry": {
                    "type": "Point",
                    "coordinates": [origin.longitude(), origin.latitude()],
                },
                "$maxDistance": i64::from(radius.meters()),
            }
        }
    }
}

/// 평점 누적 파이프라인 업데이트
///
/// 합계와 개수를 먼저 갱신한 뒤 같은 업데이트 안에서 평균을 계산하므로,
/// 동시에 들어온 평점이 서로를 덮어쓰지 않습니다.
pub fn rating_pipeline(rating: i64) -> Vec<Document> {
    vec![
        doc! { "$set": {
            "ratingTotal": { "$add": [{ "$ifNull": ["$ratingTotal", 0] }, rating] },
            "ratingCount": { "$add": [{ "$ifNull": ["$ratingCount", 0] }, 1] },
        } },
        doc! { "$set": {
            "averageRating": { "$divide": ["$ratingTotal", "$ratingCount"] },
            "updatedAt": "$$NOW",
        } },
    ]
}

/// 레스토랑 데이터 액세스 리포지토리
///
/// ## 인덱스
///
/// - `location` (`2dsphere`)
/// - `officialEmail` (unique)
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = RestaurantRepository::new(&database, Duration::from_secs(5));
/// let origin = user.current_location.unwrap();
/// let nearby = repo.find_near(&origin, radius, 10).await?;
/// ```
#[derive(Clone)]
pub struct RestaurantRepository {
    collection: Collection<Restaurant>,
    /// 서버 측 쿼리 실행 제한 시간 (`maxTimeMS`)
    query_timeout: Duration,
}

impl RestaurantRepository {
    pub const COLLECTION: &'static str = "restaurants";

    pub fn new(database: &Database, query_timeout: Duration) -> Self {
        Self {
            collection: database.get_database().collection::<Restaurant>(Self::COLLECTION),
            query_timeout,
        }
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// `location`의 `2dsphere` 인덱스가 없으면 `$near` 쿼리가 실패하므로
    /// 서버 시작 전에 반드시 호출합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let location_index = IndexModel::builder()
            .keys(doc! { "location": "2dsphere" })
            .options(IndexOptions::builder()
                .name("location_2dsphere".to_string())
                .build())
            .build();

        let email_index = IndexModel::builder()
            .keys(doc! { "officialEmail": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("officialEmail_1".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([location_index, email_index])
            .await
            .map_err(AppError::from)?;

        Ok(())
    }

    async fn find_one_and_update(
        &self,
        id: &str,
        update: impl Into<mongodb::options::UpdateModifications>,
    ) -> AppResult<Option<Restaurant>> {
        let object_id = parse_object_id(id)?;

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(doc! { "_id": object_id }, update)
            .with_options(options)
            .await
            .map_err(AppError::from)
    }
}

#[async_trait]
impl RestaurantStore for RestaurantRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Restaurant>> {
        let object_id = parse_object_id(id)?;

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(AppError::from)
    }

    async fn find_near(
        &self,
        origin: &GeoPoint,
        radius: SearchRadius,
        limit: i64,
    ) -> AppResult<Vec<Restaurant>> {
        let cursor = self.collection
            .find(near_filter(origin, radius))
            .limit(limit)
            .max_time(self.query_timeout)
            .await
            .map_err(AppError::from)?;

        cursor
            .try_collect()
            .await
            .map_err(AppError::from)
    }

    async fn update_location(&self, id: &str, point: GeoPoint) -> AppResult<Option<Restaurant>> {
        let update = doc! { "$set": {
            "location": point_to_bson(&point)?,
            "updatedAt": DateTime::now(),
        } };

        self.find_one_and_update(id, update).await
    }

    async fn add_rating(&self, id: &str, rating: i64) -> AppResult<Option<Restaurant>> {
        self.find_one_and_update(id, rating_pipeline(rating)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;
    use crate::domain::models::geo::Coordinates;

    #[test]
    fn test_near_filter_uses_longitude_first() {
        let origin = GeoPoint::from(Coordinates::new(6.9271, 79.8612).unwrap());
        let radius = SearchRadius::bounded(5_000, &SearchConfig::default());

        let expected = doc! {
            "location": {
                "$near": {
                    "$geometry": { "type": "Point", "coordinates": [79.8612, 6.9271] },
                    "$maxDistance": 5_000_i64,
                }
            }
        };

        assert_eq!(near_filter(&origin, radius), expected);
    }

    #[test]
    fn test_rating_pipeline_recomputes_average_after_totals() {
        let pipeline = rating_pipeline(4);

        assert_eq!(pipeline.len(), 2);
        assert!(pipeline[0].get_document("$set").unwrap().contains_key("ratingTotal"));
        assert!(pipeline[1].get_document("$set").unwrap().contains_key("averageRating"));
    }
}
