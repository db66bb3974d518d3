//! # 위치 등록 요청 DTO
//!
//! 사용자 현재 위치와 레스토랑 매장 위치 등록에 함께 쓰이는 요청 본문입니다.
//! 클라이언트는 사람이 읽는 순서대로 `latitude`, `longitude`를 보내고,
//! 저장 순서(경도, 위도)로의 변환은 도메인 계층에서만 일어납니다.
//!
//! ## 검증 규칙
//!
//! - `latitude`: -90 ~ 90
//! - `longitude`: -180 ~ 180
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! #[post("/{id}/current-location")]
//! async fn add_current_location(payload: web::Json<LocationRequest>) -> Result<HttpResponse, AppError> {
//!     payload.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;
//!     let coordinates = payload.to_coordinates()?;
//!     // ...
//! }
//! ```

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::core::AppError;
use crate::domain::models::geo::Coordinates;

/// 위치 등록 요청
///
/// ```json
/// { "latitude": 6.9271, "longitude": 79.8612 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LocationRequest {
    #[validate(range(min = -90.0, max = 90.0, message = "latitude must be between -90 and 90"))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0, message = "longitude must be between -180 and 180"))]
    pub longitude: f64,
}

impl LocationRequest {
    /// 검증된 좌표로 변환합니다.
    pub fn to_coordinates(&self) -> Result<Coordinates, AppError> {
        Coordinates::new(self.latitude, self.longitude)
    }
}
