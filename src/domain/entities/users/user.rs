//! User Entity Implementation
//!
//! `users` 컬렉션 문서입니다. 가입/로그인은 외부 서비스가 담당하므로
//! 이 서비스는 비밀번호를 읽지도 쓰지도 않습니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::domain::models::geo::{lenient_point, GeoPoint};

/// 사용자 엔티티
///
/// 필드 이름은 기존 컬렉션과 맞추기 위해 camelCase로 저장됩니다.
/// `currentLocation`은 가입 시점에는 없고, 위치 등록 API로만 설정/덮어쓰기 됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름 (unique)
    #[serde(default)]
    pub username: String,
    /// 사용자 이메일 (unique)
    #[serde(default)]
    pub email: String,
    /// 프로필 이미지 URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    /// 현재 위치. 비어 있거나 깨진 값은 `None`으로 읽힙니다.
    #[serde(
        default,
        deserialize_with = "lenient_point",
        skip_serializing_if = "Option::is_none"
    )]
    pub current_location: Option<GeoPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}

impl User {
    /// 위치가 없는 새 사용자를 만듭니다.
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username: username.into(),
            email: email.into(),
            profile_picture: None,
            current_location: None,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
