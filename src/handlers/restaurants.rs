//! # Restaurant HTTP Handlers
//!
//! | 메서드 | 경로 | 인증 | 설명 |
//! |--------|------|------|------|
//! | `GET` | `/api/v1/restaurant/{id}` | 없음 | 프로필, 메뉴, 특가 조회 |
//! | `POST` | `/api/v1/restaurant/{id}/location` | `restaurant` 본인 | 매장 위치 저장 |
//! | `POST` | `/api/v1/restaurant/{id}/addrating` | `user` | 별점 등록 |
//!
//! 위치/평점 라우트는 리소스마다 다른 역할을 요구하므로 `#[post]` 매크로 대신
//! 라우트 설정에서 `web::resource`로 등록합니다.

use actix_web::{web, HttpResponse, get};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::restaurants::request::RatingRequest;
use crate::domain::dto::users::request::LocationRequest;
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::restaurants::RestaurantService;

/// 레스토랑 상세 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /api/v1/restaurant/{id}`
///
/// # 실패 사례
///
/// - 400: 잘못된 ID 형식
/// - 404: 레스토랑 없음
#[get("/{id}")]
pub async fn get_restaurant(
    restaurant_id: web::Path<String>,
    restaurant_service: web::Data<RestaurantService>,
) -> Result<HttpResponse, AppError> {
    let detail = restaurant_service.get_details(&restaurant_id).await?;

    Ok(HttpResponse::Ok().json(detail))
}

/// 매장 위치 저장 핸들러
///
/// `POST /api/v1/restaurant/{id}/location`
///
/// ```json
/// { "latitude": 6.9271, "longitude": 79.8612 }
/// ```
pub async fn update_restaurant_location(
    restaurant_id: web::Path<String>,
    principal: AuthenticatedUser,
    payload: web::Json<LocationRequest>,
    restaurant_service: web::Data<RestaurantService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;
    let coordinates = payload.to_coordinates()?;

    let detail = restaurant_service
        .set_location(&principal, &restaurant_id, coordinates)
        .await?;

    Ok(HttpResponse::Ok().json(detail))
}

/// 별점 등록 핸들러
///
/// `POST /api/v1/restaurant/{id}/addrating`
///
/// ```json
/// { "rating": 4 }
/// ```
///
/// 응답은 갱신된 `averageRating`, `ratingCount`입니다.
pub async fn add_rating(
    restaurant_id: web::Path<String>,
    principal: AuthenticatedUser,
    payload: web::Json<RatingRequest>,
    restaurant_service: web::Data<RestaurantService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    log::debug!("별점 요청: 사용자 {} → 레스토랑 {}", principal.user_id, restaurant_id);
    let response = restaurant_service
        .add_rating(&restaurant_id, payload.rating)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}
