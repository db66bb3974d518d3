//! # Domain Models Module
//!
//! 영속성 엔티티와 구별되는 값 객체와 인증 모델을 정의합니다.
//!
//! ## Entities vs Models 구분
//!
//! ### Entities (`../entities/`)
//! - **영속성**: MongoDB 문서로 직접 저장되는 객체
//! - **정체성**: `_id`로 식별
//! - **예시**: `User`, `Restaurant`
//!
//! ### Models (`./`)
//! - **값 객체**: 식별자보다 값 자체가 중요
//! - **검증**: 생성 시점에 불변식을 확인
//! - **예시**: `Coordinates`, `GeoPoint`, `SearchRadius`, `TokenClaims`
//!
//! ## 모듈 구성
//!
//! - [`geo`] - 좌표, GeoJSON 점, 검색 반경
//! - [`auth`] - 인증된 주체와 역할 요구사항
//! - [`token`] - JWT 클레임

pub mod geo;
pub mod auth;
pub mod token;

pub use geo::{Coordinates, GeoPoint, SearchRadius};
