//! 인증 서비스 모듈
//!
//! 가입/로그인은 외부 서비스가 담당하며, 이 모듈은 그 서비스가 발급한
//! JWT(`access_token` 쿠키 또는 Bearer 헤더)를 검증합니다.
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - 만료 시간(`exp`) 검증
//! - 역할(`roles`) 클레임 기반 라우트 보호
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::TokenService;
//!
//! let token_service = TokenService::from_env();
//! let claims = token_service.verify_token(token)?;
//! ```

pub mod token_service;

pub use token_service::*;
