//! 사용자 요청 DTO

pub mod location_request;
pub mod nearby_query;

pub use location_request::LocationRequest;
pub use nearby_query::NearbyQuery;
