//! # Core Module
//!
//! 계층 전체가 공유하는 기반 타입을 모아둔 모듈입니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **재시도 판단**: 저장소 장애만 재시도 가능으로 분류

pub mod errors;

pub use errors::{AppError, AppResult};
