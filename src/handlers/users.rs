//! # User HTTP Handlers
//!
//! 사용자 현재 위치 저장과 주변 레스토랑 검색 엔드포인트입니다.
//! 두 라우트 모두 `user` 역할 토큰이 필요하며, 경로의 `{id}`가 토큰 주체와 같아야 합니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/user/{id}/current-location` | 현재 위치 저장 | 200 OK |
//! | `GET` | `/api/v1/user/{id}/nearest-restaurant?distance=<m>` | 주변 레스토랑 검색 | 200 OK / 412 |
//!
//! ## "더 넓게 검색" 흐름
//!
//! 서버는 세션을 저장하지 않습니다. 응답의 `nextRadiusMeters`를 다음 요청의
//! `distance`로 보내면 반경이 한 단계씩 늘어나고, 최대 반경에 도달하면 `null`이 됩니다.
//!
//! ```text
//! GET ...?distance=5000   → radiusMeters 5000,  nextRadiusMeters 10000
//! GET ...?distance=10000  → radiusMeters 10000, nextRadiusMeters 15000
//! ...
//! GET ...?distance=50000  → radiusMeters 50000, nextRadiusMeters null
//! ```

use actix_web::{web, HttpResponse, get, post};
use validator::Validate;
use crate::config::roles;
use crate::core::errors::AppError;
use crate::domain::dto::restaurants::response::{NearbyRestaurantsResponse, RestaurantSummary};
use crate::domain::dto::users::request::{LocationRequest, NearbyQuery};
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::search::{NearbyOutcome, ProximityService, SearchSession};
use crate::services::users::LocationService;

/// 현재 위치 저장 핸들러
///
/// # 엔드포인트
///
/// `POST /api/v1/user/{id}/current-location`
///
/// # 요청 본문
///
/// ```json
/// { "latitude": 6.9271, "longitude": 79.8612 }
/// ```
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "_id": "507f1f77bcf86cd799439011",
///   "username": "nimal",
///   "email": "nimal@example.com",
///   "currentLocation": { "type": "Point", "coordinates": [79.8612, 6.9271] },
///   "latitude": 6.9271,
///   "longitude": 79.8612
/// }
/// ```
///
/// ## 실패 사례
///
/// - 400: 좌표 범위 초과, 잘못된 본문
/// - 403: 다른 사용자의 위치 변경 시도
/// - 404: 사용자 없음
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/user/507f1f77bcf86cd799439011/current-location \
///   -H "Authorization: Bearer {token}" \
///   -H "Content-Type: application/json" \
///   -d '{"latitude": 6.9271, "longitude": 79.8612}'
/// ```
#[post("/{id}/current-location")]
pub async fn add_current_location(
    user_id: web::Path<String>,
    principal: AuthenticatedUser,
    payload: web::Json<LocationRequest>,
    location_service: web::Data<LocationService>,
) -> Result<HttpResponse, AppError> {
    principal.ensure_owner(roles::USER, &user_id)?;

    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;
    let coordinates = payload.to_coordinates()?;

    let response = location_service.set_location(&user_id, coordinates).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 주변 레스토랑 검색 핸들러
///
/// 저장된 현재 위치에서 `distance` 미터 안의 레스토랑을 가까운 순으로 최대 10개 반환합니다.
///
/// # 엔드포인트
///
/// `GET /api/v1/user/{id}/nearest-restaurant?distance=<m>`
///
/// # 쿼리 파라미터
///
/// - `distance`: 검색 반경(미터). 없거나 숫자가 아니면 기본 반경, 최대 반경 초과 시 최대 반경
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "restaurants": [ { "_id": "...", "title": "Ministry of Crab", "averageRating": 4.5, "...": "..." } ],
///   "radiusMeters": 5000,
///   "nextRadiusMeters": 10000
/// }
/// ```
///
/// ## 결과 없음 (200 OK)
/// ```json
/// {
///   "restaurants": [],
///   "radiusMeters": 5000,
///   "nextRadiusMeters": 10000,
///   "message": "No restaurant nearby"
/// }
/// ```
///
/// ## 위치 미등록 (412 Precondition Failed)
/// ```json
/// { "error": "precondition_failed", "message": "Add Location first", "restaurants": [] }
/// ```
#[get("/{id}/nearest-restaurant")]
pub async fn show_nearest_restaurant(
    user_id: web::Path<String>,
    principal: AuthenticatedUser,
    query: NearbyQuery,
    proximity_service: web::Data<ProximityService>,
) -> Result<HttpResponse, AppError> {
    principal.ensure_owner(roles::USER, &user_id)?;

    let config = proximity_service.config();
    let session = SearchSession::resume(query.radius(config), config);
    let next_radius = session.next_radius();

    let response = match session.search(&proximity_service, &user_id).await? {
        NearbyOutcome::Found(restaurants) => NearbyRestaurantsResponse::found(
            restaurants.into_iter().map(RestaurantSummary::from).collect(),
            session.radius(),
            next_radius,
        ),
        NearbyOutcome::Empty => NearbyRestaurantsResponse::empty(session.radius(), next_radius),
    };

    Ok(HttpResponse::Ok().json(response))
}
