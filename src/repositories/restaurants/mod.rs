//! 레스토랑 데이터 액세스 계층
//!
//! [`RestaurantRepository`](restaurant_repo::RestaurantRepository)가 MongoDB `restaurants`
//! 컬렉션에 대해 [`RestaurantStore`](crate::repositories::RestaurantStore)를 구현합니다.

pub mod restaurant_repo;

pub use restaurant_repo::{near_filter, RestaurantRepository};
