//! # Data Transfer Objects
//!
//! HTTP 계층과 서비스 계층 사이의 API 계약을 정의합니다.
//! 엔티티를 그대로 내보내지 않고 DTO로 변환하여 `ObjectId`를 문자열로 바꾸고
//! 내부 필드(평점 합계, 타임스탬프 등)를 숨깁니다.
//!
//! ## 모듈 구성
//!
//! | 모듈 | 요청 | 응답 |
//! |------|------|------|
//! | [`users`] | `LocationRequest` | `UserResponse` |
//! | [`restaurants`] | `RatingRequest` | `RestaurantSummary`, `RestaurantDetailResponse`, `NearbyRestaurantsResponse`, `RatingResponse` |
//!
//! ## 직렬화 규칙
//!
//! - 필드 이름은 camelCase (기존 SPA와 호환)
//! - 식별자는 `_id` 문자열
//! - 좌표는 `{latitude, longitude}` 이름 있는 쌍, 단 `UserResponse.currentLocation`은 GeoJSON 그대로

pub mod users;
pub mod restaurants;
