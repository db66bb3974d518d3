//! 인증 관련 설정 모듈
//!
//! 가입/로그인은 외부 협력 서비스가 담당하고, 이 서비스는 발급된 JWT를
//! 검증만 합니다. 두 쪽이 같은 비밀키와 만료 정책을 공유해야 합니다.

use std::env;

/// 토큰이 담고 있는 주체의 종류
///
/// 일반 사용자와 레스토랑 운영자는 가입 경로가 분리되어 있으며,
/// JWT `roles` 클레임에 아래 문자열 중 하나가 들어갑니다.
pub mod roles {
    /// 음식점을 검색하는 일반 사용자
    pub const USER: &str = "user";
    /// 자신의 레스토랑 프로필을 관리하는 운영자
    pub const RESTAURANT: &str = "restaurant";
}

/// JWT 설정을 관리하는 구조체
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 환경 변수가 설정되지 않은 경우 개발용 기본값을 사용하며 경고 로그를 남깁니다.
    ///
    /// ```bash
    /// export JWT_SECRET="$(openssl rand -base64 32)"
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "appete-dev-secret".to_string()
        })
    }

    /// 액세스 토큰의 만료 시간 (시간 단위, 기본값 1시간)
    ///
    /// 로그인 쿠키(`access_token`)의 만료 시간과 동일하게 맞춥니다.
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "1".to_string())
            .parse()
            .unwrap_or(1)
    }
}
