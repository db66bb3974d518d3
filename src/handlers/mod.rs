//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 경로/본문을 추출하고 검증한 뒤 `web::Data`로 주입된 서비스에 위임하며,
//! 모든 실패는 [`AppError`](crate::core::AppError)로 반환되어 JSON 에러 응답이 됩니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Web, Mobile)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Middlewares - JWT 검증, 역할 확인
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리
//! ├─────────────────────────────────────────────┤
//!   Services - 위치 저장, 주변 검색, 평점
//! ├─────────────────────────────────────────────┤
//!   Repositories - MongoDB 2dsphere 쿼리
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`users`**: 현재 위치 저장, 주변 레스토랑 검색
//! - **`restaurants`**: 상세 조회, 매장 위치 저장, 별점 등록
//!
//! ## 핸들러 작성 패턴
//!
//! ```rust,ignore
//! #[post("/{id}/current-location")]
//! pub async fn add_current_location(
//!     user_id: web::Path<String>,
//!     principal: AuthenticatedUser,
//!     payload: web::Json<LocationRequest>,
//!     location_service: web::Data<LocationService>,
//! ) -> Result<HttpResponse, AppError> {
//!     principal.ensure_owner(roles::USER, &user_id)?;
//!     payload.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;
//!     let response = location_service.set_location(&user_id, payload.to_coordinates()?).await?;
//!     Ok(HttpResponse::Ok().json(response))
//! }
//! ```

pub mod users;
pub mod restaurants;
