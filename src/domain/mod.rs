//! # Domain Layer Module
//!
//! 비즈니스 규칙과 데이터 형태를 담당하는 도메인 계층입니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities   - MongoDB 문서 (User, Restaurant)
//! ├── dto        - 요청/응답 계약
//! └── models     - 값 객체 (좌표, GeoJSON 점, 검색 반경, 인증 주체)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 좌표 순서 규칙
//!
//! 도메인 바깥(HTTP 본문, 응답, 서비스 인자)에서는 항상 `Coordinates { latitude, longitude }`를
//! 사용하고, `[경도, 위도]` 배열은 엔티티에 저장되는 `GeoPoint` 안에만 존재합니다.
//!
//! ```rust,ignore
//! use crate::domain::models::{Coordinates, GeoPoint};
//!
//! let coords = Coordinates::new(6.9271, 79.8612)?;
//! user.current_location = Some(GeoPoint::from(coords));
//! ```

pub mod entities;
pub mod dto;
pub mod models;
