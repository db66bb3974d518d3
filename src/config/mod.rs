//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//! `main`에서 `PROFILE`에 맞는 `.env` 파일을 읽은 뒤 각 설정 구조체가 값을 조회합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, MongoDB, Rate Limiting 설정
//! - [`auth_config`] - JWT 검증 설정과 주체 역할 상수
//! - [`search_config`] - 주변 음식점 검색 반경/페이지/타임아웃 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # MongoDB
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="appete"
//!
//! # JWT (로그인 서비스와 동일한 값)
//! export JWT_SECRET="your-super-secret-key"
//!
//! # 검색
//! export SEARCH_MAX_RADIUS_METERS="50000"
//! ```

pub mod data_config;
pub mod auth_config;
pub mod search_config;

pub use data_config::*;
pub use auth_config::*;
pub use search_config::*;
