use std::future::{ready, Ready};
use actix_web::{web, Error, FromRequest, HttpRequest};
use crate::config::SearchConfig;
use crate::domain::models::geo::SearchRadius;

/// 주변 레스토랑 검색 쿼리 (`?distance=<m>`)
///
/// 숫자가 아닌 값도 400 없이 기본 반경으로 보정해야 하므로 문자열 그대로 받습니다.
#[derive(Debug, Clone, Default)]
pub struct NearbyQuery {
    pub distance: Option<String>,
}

impl NearbyQuery {
    /// 쿼리 문자열에서 첫 번째 `distance` 값을 읽습니다.
    ///
    /// 같은 키가 여러 번 오거나 쿼리 문자열을 해석할 수 없어도 실패하지 않습니다.
    pub fn from_query_string(query: &str) -> Self {
        let distance = web::Query::<Vec<(String, String)>>::from_query(query)
            .map(|pairs| {
                pairs
                    .into_inner()
                    .into_iter()
                    .find(|(key, _)| key == "distance")
                    .map(|(_, value)| value)
            })
            .unwrap_or_else(|e| {
                log::debug!("쿼리 문자열 해석 실패, 기본 반경 사용: {}", e);
                None
            });

        Self { distance }
    }

    pub fn radius(&self, config: &SearchConfig) -> SearchRadius {
        SearchRadius::from_query(self.distance.as_deref(), config)
    }
}

/// 쿼리 추출은 항상 성공합니다. 잘못된 값은 반경 계산 단계에서 기본값으로 보정됩니다.
impl FromRequest for NearbyQuery {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        ready(Ok(Self::from_query_string(req.query_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_from_query() {
        let config = SearchConfig::default();

        let absent = NearbyQuery::default();
        let garbage = NearbyQuery { distance: Some("far".to_string()) };
        let explicit = NearbyQuery { distance: Some("10000".to_string()) };

        assert_eq!(absent.radius(&config).meters(), 5_000);
        assert_eq!(garbage.radius(&config).meters(), 5_000);
        assert_eq!(explicit.radius(&config).meters(), 10_000);
    }

    #[test]
    fn test_repeated_distance_uses_first_value() {
        let config = SearchConfig::default();

        let repeated = NearbyQuery::from_query_string("distance=10000&distance=20000");
        let empty = NearbyQuery::from_query_string("");
        let other_keys = NearbyQuery::from_query_string("page=2&distance=15000");

        assert_eq!(repeated.radius(&config).meters(), 10_000);
        assert_eq!(empty.radius(&config).meters(), 5_000);
        assert_eq!(other_keys.radius(&config).meters(), 15_000);
    }
}
