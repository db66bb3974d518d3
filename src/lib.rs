//! Appete 레스토랑 탐색 백엔드
//!
//! 사용자의 현재 위치를 저장하고, 그 위치에서 가까운 레스토랑을 반경 단위로 찾아주는
//! Rust 기반 서비스입니다. 거리 계산과 정렬은 MongoDB `2dsphere` 인덱스의 `$near`에 맡깁니다.
//!
//! # Features
//!
//! - **위치 저장**: 사용자/레스토랑 위치를 GeoJSON 점(`[경도, 위도]`)으로 저장
//! - **주변 검색**: 반경 안의 레스토랑을 가까운 순으로 최대 10개 반환
//! - **반경 확장**: 기본 5km에서 5km씩, 최대 50km까지 "더 넓게 검색"
//! - **레스토랑**: 상세 조회, 매장 위치 등록, 별점 누적
//! - **JWT 인증**: Bearer 헤더 또는 `access_token` 쿠키 검증, 역할 기반 접근 제어
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore / RestaurantStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB 2dsphere│ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use appete_backend::services::search::{NearbyOutcome, ProximityService, SearchSession};
//!
//! let session = SearchSession::new(proximity.config());
//! match session.search(&proximity, &user_id).await? {
//!     NearbyOutcome::Found(restaurants) => { /* 가까운 순 */ }
//!     NearbyOutcome::Empty => { /* session.expand() 후 재검색 */ }
//! }
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod middlewares;
