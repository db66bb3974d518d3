//! 레스토랑 관련 서비스

pub mod restaurant_service;

pub use restaurant_service::RestaurantService;
