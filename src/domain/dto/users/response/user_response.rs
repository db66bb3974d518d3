use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::User;
use crate::domain::models::geo::GeoPoint;

/// 사용자 응답 DTO
///
/// 위치 등록 후 갱신된 사용자 레코드를 돌려줄 때 사용합니다.
/// `currentLocation`은 저장 형태 그대로(`[lon, lat]`) 내려가며,
/// 같은 값을 `latitude`/`longitude`로도 제공합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    pub profile_picture: Option<String>,
    pub current_location: Option<GeoPoint>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            username,
            email,
            profile_picture,
            current_location,
            ..
        } = user;

        let coordinates = current_location.map(|p| p.to_coordinates());

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            username,
            email,
            profile_picture,
            current_location,
            latitude: coordinates.map(|c| c.latitude()),
            longitude: coordinates.map(|c| c.longitude()),
        }
    }
}
