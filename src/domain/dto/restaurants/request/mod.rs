//! 레스토랑 요청 DTO
//!
//! 매장 위치 등록은 사용자 위치와 같은 [`LocationRequest`](crate::domain::dto::users::request::LocationRequest)를 사용합니다.

pub mod rating_request;

pub use rating_request::RatingRequest;
