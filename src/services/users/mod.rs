//! 사용자 관련 서비스
//!
//! [`LocationService`](location_service::LocationService)가 사용자 현재 위치 저장을 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::LocationService;
//!
//! let service = LocationService::new(user_store);
//! let user = service.set_location(&user_id, coordinates).await?;
//! ```

pub mod location_service;

pub use location_service::LocationService;
