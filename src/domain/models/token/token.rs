//! JWT 인증 토큰 클레임
//!
//! 로그인 서비스가 발급하고 이 서비스가 검증하는 토큰의 페이로드입니다.
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// 개인정보 보호를 위해 최소한의 정보만 포함합니다.
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (사용자 또는 레스토랑 ID)
/// - `roles`: 주체 역할 (`["user"]` 또는 `["restaurant"]`)
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 토큰의 주체
    pub sub: String,
    /// 주체 역할 목록
    #[serde(default)]
    pub roles: Vec<String>,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}
