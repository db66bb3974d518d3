//! Restaurant Entity Implementation
//!
//! `restaurants` 컬렉션 문서입니다. 메뉴와 특가 목록은 문서 안에 내장되며,
//! 평점은 누적 합계/개수와 평균을 함께 저장합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use crate::domain::models::geo::{lenient_point, GeoPoint};

/// 레스토랑 엔티티
///
/// `location`이 없는 레스토랑은 주변 검색 결과에서 제외될 뿐 에러가 아닙니다.
/// 로그인 자격 증명(`password`)은 이 구조체에 포함되지 않으므로 응답으로 새어 나갈 수 없습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 상호명
    #[serde(default)]
    pub title: String,
    /// 공식 이메일 (unique)
    #[serde(default)]
    pub official_email: String,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub hotline: Option<String>,
    #[serde(default)]
    pub cover_photo: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    /// 매장 위치. 비어 있거나 깨진 값은 `None`으로 읽힙니다.
    #[serde(
        default,
        deserialize_with = "lenient_point",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<GeoPoint>,
    #[serde(default)]
    pub menu: Vec<MenuItem>,
    #[serde(default)]
    pub special_deals: Vec<SpecialDeal>,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub rating_count: i64,
    #[serde(default)]
    pub rating_total: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}

/// 메뉴 항목
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// 가격. 문자열로 저장된 값도 읽고, 해석할 수 없으면 0으로 둡니다.
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: f64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
}

/// 특가 항목
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialDeal {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub deal_description: Option<String>,
    /// 화면에 "{값} OFF"로 표시되는 할인 문구. 숫자로 저장된 문서도 있습니다.
    #[serde(
        rename = "price_discount",
        default,
        deserialize_with = "text_or_number"
    )]
    pub price_discount: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
}

impl Restaurant {
    /// 위치와 메뉴가 없는 새 레스토랑을 만듭니다.
    pub fn new(title: impl Into<String>, official_email: impl Into<String>) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            title: title.into(),
            official_email: official_email.into(),
            about: None,
            hotline: None,
            cover_photo: None,
            profile_picture: None,
            location: None,
            menu: Vec::new(),
            special_deals: Vec::new(),
            average_rating: 0.0,
            rating_count: 0,
            rating_total: 0,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn has_special_deals(&self) -> bool {
        !self.special_deals.is_empty()
    }
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Integer(i64),
        Number(f64),
    }

    Ok(Option::<TextOrNumber>::deserialize(deserializer)?.map(|v| match v {
        TextOrNumber::Text(s) => s,
        TextOrNumber::Integer(n) => n.to_string(),
        TextOrNumber::Number(n) => n.to_string(),
    }))
}

fn lenient_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Price {
        Number(f64),
        Text(String),
        Other(IgnoredAny),
    }

    let price = match Price::deserialize(deserializer)? {
        Price::Number(n) => Some(n),
        Price::Text(s) => s.trim().parse::<f64>().ok(),
        Price::Other(_) => None,
    };

    Ok(price.filter(|n| n.is_finite()).unwrap_or(0.0))
}
