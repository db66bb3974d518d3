use serde::Serialize;
use crate::domain::dto::restaurants::response::RestaurantSummary;
use crate::domain::models::geo::SearchRadius;

/// 반경 안에 레스토랑이 없을 때 함께 내려가는 안내 문구
pub const NO_RESTAURANT_NEARBY: &str = "No restaurant nearby";

/// 주변 레스토랑 검색 응답
///
/// 결과가 0건이어도 200 응답입니다. 클라이언트는 `message` 유무로 빈 결과를 구분하고
/// `nextRadiusMeters`로 "더 넓게 검색"을 다시 요청합니다. 최대 반경에 도달하면
/// `nextRadiusMeters`는 `null`입니다.
///
/// ```json
/// {
///   "restaurants": [],
///   "radiusMeters": 5000,
///   "nextRadiusMeters": 10000,
///   "message": "No restaurant nearby"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyRestaurantsResponse {
    /// 가까운 순으로 정렬된 결과
    pub restaurants: Vec<RestaurantSummary>,
    pub radius_meters: SearchRadius,
    pub next_radius_meters: Option<SearchRadius>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl NearbyRestaurantsResponse {
    pub fn found(
        restaurants: Vec<RestaurantSummary>,
        radius: SearchRadius,
        next_radius: Option<SearchRadius>,
    ) -> Self {
        Self {
            restaurants,
            radius_meters: radius,
            next_radius_meters: next_radius,
            message: None,
        }
    }

    pub fn empty(radius: SearchRadius, next_radius: Option<SearchRadius>) -> Self {
        Self {
            restaurants: Vec::new(),
            radius_meters: radius,
            next_radius_meters: next_radius,
            message: Some(NO_RESTAURANT_NEARBY.to_string()),
        }
    }
}
