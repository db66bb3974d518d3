//! 주변 음식점 검색 설정
//!
//! 기본 반경, 확장 단위, 최대 반경, 페이지 크기, 쿼리 타임아웃을 관리합니다.
//! 반경 단위는 모두 미터입니다.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// 설정으로 지정할 수 있는 페이지 크기의 상한
pub const MAX_PAGE_SIZE: i64 = 50;

/// 주변 검색 설정
///
/// # Environment Variables
///
/// | 변수 | 기본값 |
/// |------|--------|
/// | `SEARCH_DEFAULT_RADIUS_METERS` | 5000 |
/// | `SEARCH_RADIUS_INCREMENT_METERS` | 5000 |
/// | `SEARCH_MAX_RADIUS_METERS` | 50000 |
/// | `SEARCH_PAGE_SIZE` | 10 (최대 50) |
/// | `SEARCH_QUERY_TIMEOUT_MS` | 5000 |
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// 반경을 지정하지 않았을 때 사용하는 값
    pub default_radius_meters: u32,
    /// "더 보기" 한 번에 늘어나는 반경
    pub radius_increment_meters: u32,
    /// 반경 확장의 상한
    pub max_radius_meters: u32,
    /// 한 번의 검색에서 돌려주는 최대 결과 수
    pub page_size: i64,
    /// 저장소 쿼리 한 번에 허용하는 시간
    pub query_timeout: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_radius_meters: 5_000,
            radius_increment_meters: 5_000,
            max_radius_meters: 50_000,
            page_size: 10,
            query_timeout: Duration::from_millis(5_000),
        }
    }
}

impl SearchConfig {
    /// 환경 변수에서 검색 설정을 로드합니다.
    ///
    /// 파싱에 실패한 값은 기본값으로 대체하고 에러 로그를 남깁니다.
    /// 서로 모순되는 값(기본 반경 > 최대 반경 등)은 [`SearchConfig::normalized`]에서 보정합니다.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            default_radius_meters: read_env(
                "SEARCH_DEFAULT_RADIUS_METERS",
                defaults.default_radius_meters,
            ),
            radius_increment_meters: read_env(
                "SEARCH_RADIUS_INCREMENT_METERS",
                defaults.radius_increment_meters,
            ),
            max_radius_meters: read_env("SEARCH_MAX_RADIUS_METERS", defaults.max_radius_meters),
            page_size: read_env("SEARCH_PAGE_SIZE", defaults.page_size),
            query_timeout: Duration::from_millis(read_env(
                "SEARCH_QUERY_TIMEOUT_MS",
                defaults.query_timeout.as_millis() as u64,
            )),
        }
        .normalized();

        log::info!("검색 설정 로드됨: {:?}", config);
        config
    }

    /// 값들 사이의 관계를 보정합니다.
    ///
    /// - 모든 반경과 확장 단위는 최소 1m
    /// - 기본 반경은 최대 반경을 넘지 않음
    /// - 페이지 크기는 `1..=MAX_PAGE_SIZE`
    /// - 타임아웃은 최소 1ms
    pub fn normalized(mut self) -> Self {
        self.max_radius_meters = self.max_radius_meters.max(1);
        self.default_radius_meters = self
            .default_radius_meters
            .clamp(1, self.max_radius_meters);
        self.radius_increment_meters = self.radius_increment_meters.max(1);
        self.page_size = self.page_size.clamp(1, MAX_PAGE_SIZE);
        if self.query_timeout.is_zero() {
            self.query_timeout = Duration::from_millis(1);
        }
        self
    }
}

fn read_env<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or_else(|e| {
            log::error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_defaults() {
        let config = SearchConfig::default();

        assert_eq!(config.default_radius_meters, 5_000);
        assert_eq!(config.radius_increment_meters, 5_000);
        assert_eq!(config.page_size, 10);
        assert!(config.max_radius_meters >= config.default_radius_meters);
    }

    #[test]
    fn test_normalized_repairs_inconsistent_values() {
        let config = SearchConfig {
            default_radius_meters: 80_000,
            radius_increment_meters: 0,
            max_radius_meters: 20_000,
            page_size: 500,
            query_timeout: Duration::ZERO,
        }
        .normalized();

        assert_eq!(config.default_radius_meters, 20_000);
        assert_eq!(config.radius_increment_meters, 1);
        assert_eq!(config.page_size, MAX_PAGE_SIZE);
        assert_eq!(config.query_timeout, Duration::from_millis(1));
    }

    #[test]
    fn test_normalized_keeps_valid_config() {
        let config = SearchConfig::default();
        assert_eq!(config.clone().normalized(), config);
    }
}
