//! 위치 관련 값 객체
//!
//! 사람이 읽는 순서(위도, 경도)와 저장소가 요구하는 순서(경도, 위도)가 반대이므로
//! 경계마다 이름 있는 구조체를 사용하고, 배열 형태로의 변환은 [`GeoPoint`]에서만 일어납니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let here = Coordinates::new(6.9271, 79.8612)?;
//! let point = GeoPoint::from(here);
//!
//! assert_eq!(point.longitude(), 79.8612);
//! assert_eq!(point.to_coordinates(), here);
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use crate::config::SearchConfig;
use crate::core::AppError;

/// 검증된 위도/경도 쌍
///
/// [`Coordinates::new`]를 통해서만 만들 수 있으며 항상 다음을 만족합니다.
///
/// - 두 값 모두 유한한 실수
/// - `latitude ∈ [-90, 90]`
/// - `longitude ∈ [-180, 180]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// 위도/경도를 검증하여 좌표를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 유한하지 않거나 범위를 벗어난 값
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, AppError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(AppError::ValidationError(
                "latitude and longitude must be finite numbers".to_string(),
            ));
        }

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(AppError::ValidationError(format!(
                "latitude must be between -90 and 90, got {}",
                latitude
            )));
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(AppError::ValidationError(format!(
                "longitude must be between -180 and 180, got {}",
                longitude
            )));
        }

        Ok(Self { latitude, longitude })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// GeoJSON 도형 종류. 이 서비스는 점만 다룹니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeometryKind {
    Point,
}

/// 저장소에 기록되는 GeoJSON 점
///
/// `coordinates`는 `[경도, 위도]` 순서입니다. `2dsphere` 인덱스와 `$near`
/// 쿼리가 이 형태를 요구합니다.
///
/// ```json
/// { "type": "Point", "coordinates": [79.8612, 6.9271] }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(rename = "type")]
    kind: GeometryKind,
    coordinates: [f64; 2],
}

impl GeoPoint {
    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }

    /// 저장 형태를 다시 이름 있는 좌표로 되돌립니다.
    pub fn to_coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude(),
            longitude: self.longitude(),
        }
    }
}

impl From<Coordinates> for GeoPoint {
    fn from(c: Coordinates) -> Self {
        Self {
            kind: GeometryKind::Point,
            coordinates: [c.longitude, c.latitude],
        }
    }
}

/// 저장된 점을 관대하게 읽는 역직렬화 함수
///
/// 기존 컬렉션에는 `{ "coordinates": [] }`처럼 반쯤 채워진 위치가 남아 있을 수 있습니다.
/// 그런 값은 디코딩 실패가 아니라 "위치 없음"(`None`)으로 취급합니다.
///
/// ```rust,ignore
/// #[serde(default, deserialize_with = "lenient_point")]
/// pub current_location: Option<GeoPoint>,
/// ```
pub fn lenient_point<'de, D>(deserializer: D) -> Result<Option<GeoPoint>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct RawPoint {
        #[serde(rename = "type", default)]
        kind: Option<String>,
        #[serde(default)]
        coordinates: Vec<f64>,
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StoredPoint {
        Point(RawPoint),
        Other(serde::de::IgnoredAny),
    }

    let stored = Option::<StoredPoint>::deserialize(deserializer)?;

    let point = match stored {
        Some(StoredPoint::Point(raw)) => {
            let kind_ok = raw.kind.as_deref().map_or(true, |k| k == "Point");
            match (kind_ok, raw.coordinates.as_slice()) {
                (true, [lon, lat]) => Coordinates::new(*lat, *lon).ok().map(GeoPoint::from),
                _ => None,
            }
        }
        Some(StoredPoint::Other(_)) | None => None,
    };

    Ok(point)
}

/// 주변 검색 반경 (미터)
///
/// 항상 `1..=max_radius_meters` 범위의 값을 가집니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SearchRadius(u32);

impl SearchRadius {
    /// 쿼리 문자열의 `distance` 값을 반경으로 변환합니다.
    ///
    /// 잘못된 입력은 거부하지 않고 보정합니다.
    ///
    /// | 입력 | 결과 |
    /// |------|------|
    /// | 없음, 숫자 아님, `NaN`/`inf`, 1 미만 | 기본 반경 |
    /// | 소수 | 소수점 이하 버림 |
    /// | 최대 반경 초과 | 최대 반경 |
    pub fn from_query(raw: Option<&str>, config: &SearchConfig) -> Self {
        let meters = raw
            .map(str::trim)
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|m| m.is_finite() && *m >= 1.0)
            .map(|m| m.min(config.max_radius_meters as f64) as u32)
            .unwrap_or(config.default_radius_meters);

        Self::bounded(meters, config)
    }

    /// 설정 범위 안으로 잘라낸 반경을 만듭니다.
    pub fn bounded(meters: u32, config: &SearchConfig) -> Self {
        Self(meters.clamp(1, config.max_radius_meters.max(1)))
    }

    pub fn meters(self) -> u32 {
        self.0
    }
}
