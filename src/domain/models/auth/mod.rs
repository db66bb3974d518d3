//! 인증 주체 모델
//!
//! - [`authenticated_user`] - 검증된 토큰의 주체 (핸들러 추출자)
//! - [`authentication_request`] - 라우트가 요구하는 역할

pub mod authenticated_user;
pub mod authentication_request;

pub use authenticated_user::AuthenticatedUser;
pub use authentication_request::RequiredRole;
