//! 레스토랑 응답 DTO

pub mod restaurant_response;
pub mod nearby_response;

pub use restaurant_response::{
    MenuItemResponse, RatingResponse, RestaurantDetailResponse, RestaurantSummary,
    SpecialDealResponse,
};
pub use nearby_response::{NearbyRestaurantsResponse, NO_RESTAURANT_NEARBY};
