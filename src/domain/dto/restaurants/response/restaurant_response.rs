use serde::{Deserialize, Serialize};
use crate::domain::entities::restaurants::{MenuItem, Restaurant, SpecialDeal};
use crate::domain::models::geo::Coordinates;

/// 주변 검색 결과 한 건
///
/// 목록 카드에 필요한 필드만 담습니다. 메뉴 전체는 상세 조회에서 내려갑니다.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub about: Option<String>,
    pub hotline: Option<String>,
    pub official_email: String,
    pub cover_photo: Option<String>,
    pub profile_picture: Option<String>,
    pub average_rating: f64,
    pub location: Option<Coordinates>,
    pub has_special_deals: bool,
}

impl From<Restaurant> for RestaurantSummary {
    fn from(restaurant: Restaurant) -> Self {
        let has_special_deals = restaurant.has_special_deals();

        Self {
            id: restaurant.id_string().unwrap_or_default(),
            title: restaurant.title,
            about: restaurant.about,
            hotline: restaurant.hotline,
            official_email: restaurant.official_email,
            cover_photo: restaurant.cover_photo,
            profile_picture: restaurant.profile_picture,
            average_rating: restaurant.average_rating,
            location: restaurant.location.map(|p| p.to_coordinates()),
            has_special_deals,
        }
    }
}

/// 메뉴 항목 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemResponse {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub item_name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Option<String>,
    pub photo: Option<String>,
}

impl From<MenuItem> for MenuItemResponse {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.id.map(|id| id.to_hex()),
            item_name: item.item_name,
            description: item.description,
            price: item.price,
            category: item.category,
            photo: item.photo,
        }
    }
}

/// 특가 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialDealResponse {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub name: String,
    pub deal_description: Option<String>,
    #[serde(rename = "price_discount")]
    pub price_discount: Option<String>,
    pub photo: Option<String>,
}

impl From<SpecialDeal> for SpecialDealResponse {
    fn from(deal: SpecialDeal) -> Self {
        Self {
            id: deal.id.map(|id| id.to_hex()),
            name: deal.name,
            deal_description: deal.deal_description,
            price_discount: deal.price_discount,
            photo: deal.photo,
        }
    }
}

/// 레스토랑 상세 응답 (프로필, 메뉴, 특가)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDetailResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub official_email: String,
    pub about: Option<String>,
    pub hotline: Option<String>,
    pub cover_photo: Option<String>,
    pub profile_picture: Option<String>,
    pub location: Option<Coordinates>,
    pub menu: Vec<MenuItemResponse>,
    pub special_deals: Vec<SpecialDealResponse>,
    pub average_rating: f64,
    pub rating_count: i64,
}

impl From<Restaurant> for RestaurantDetailResponse {
    fn from(restaurant: Restaurant) -> Self {
        Self {
            id: restaurant.id_string().unwrap_or_default(),
            title: restaurant.title,
            official_email: restaurant.official_email,
            about: restaurant.about,
            hotline: restaurant.hotline,
            cover_photo: restaurant.cover_photo,
            profile_picture: restaurant.profile_picture,
            location: restaurant.location.map(|p| p.to_coordinates()),
            menu: restaurant.menu.into_iter().map(Into::into).collect(),
            special_deals: restaurant.special_deals.into_iter().map(Into::into).collect(),
            average_rating: restaurant.average_rating,
            rating_count: restaurant.rating_count,
        }
    }
}

/// 평점 등록 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub average_rating: f64,
    pub rating_count: i64,
}

impl From<Restaurant> for RatingResponse {
    fn from(restaurant: Restaurant) -> Self {
        Self {
            id: restaurant.id_string().unwrap_or_default(),
            average_rating: restaurant.average_rating,
            rating_count: restaurant.rating_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::geo::GeoPoint;
    use mongodb::bson::oid::ObjectId;

    fn sample() -> Restaurant {
        let mut restaurant = Restaurant::new("Ministry of Crab", "hello@crab.lk");
        restaurant.id = Some(ObjectId::new());
        restaurant.location = Some(GeoPoint::from(Coordinates::new(6.9271, 79.8612).unwrap()));
        restaurant.special_deals.push(SpecialDeal {
            id: None,
            name: "Lunch".to_string(),
            deal_description: None,
            price_discount: Some("20%".to_string()),
            photo: None,
        });
        restaurant
    }

    #[test]
    fn test_summary_uses_named_coordinates() {
        let json = serde_json::to_value(RestaurantSummary::from(sample())).unwrap();

        assert_eq!(json["location"]["latitude"], 6.9271);
        assert_eq!(json["location"]["longitude"], 79.8612);
        assert_eq!(json["hasSpecialDeals"], true);
        assert_eq!(json["officialEmail"], "hello@crab.lk");
    }

    #[test]
    fn test_detail_carries_deals_with_original_field_name() {
        let json = serde_json::to_value(RestaurantDetailResponse::from(sample())).unwrap();

        assert_eq!(json["specialDeals"][0]["price_discount"], "20%");
        assert_eq!(json["menu"], serde_json::json!([]));
        assert!(json.get("password").is_none());
    }
}
