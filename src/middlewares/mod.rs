//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: Bearer` 헤더 또는 `access_token` 쿠키에서 JWT 추출
//! - 인증 주체를 request extension에 저장
//! - 역할(`user`, `restaurant`) 요구사항 검증
//!
//! # 사용 방법
//!
//! ## 특정 스코프에만 적용
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! App::new()
//!     .service(
//!         web::scope("/api/v1/user")
//!             .wrap(AuthMiddleware::required_with_role(roles::USER))
//!             .service(add_current_location)
//!     )
//! ```
//!
//! ## 리소스 단위 적용
//! ```rust,ignore
//! web::resource("/{id}/location")
//!     .wrap(AuthMiddleware::required_with_role(roles::RESTAURANT))
//!     .route(web::post().to(update_restaurant_location))
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
pub use auth_inner::ACCESS_TOKEN_COOKIE;
