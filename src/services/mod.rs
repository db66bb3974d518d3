//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소 트레이트(`Arc<dyn UserStore>`, `Arc<dyn RestaurantStore>`)를 주입받아 생성되고,
//! `main`에서 `web::Data`로 등록되어 핸들러와 공유됩니다.
//!
//! # Features
//!
//! - 사용자 현재 위치 저장 ([`users::LocationService`])
//! - 주변 레스토랑 검색과 반경 확장 ([`search::ProximityService`], [`search::SearchSession`])
//! - 레스토랑 상세/위치/평점 ([`restaurants::RestaurantService`])
//! - JWT 검증 ([`auth::TokenService`])
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::search::ProximityService;
//!
//! let proximity = web::Data::new(ProximityService::new(users, restaurants, SearchConfig::from_env()));
//! App::new().app_data(proximity.clone());
//! ```

pub mod users;
pub mod search;
pub mod restaurants;
pub mod auth;
