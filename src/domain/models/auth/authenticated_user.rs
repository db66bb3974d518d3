use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::core::AppError;

/// JWT 토큰에서 추출된 주체 정보
///
/// `AuthMiddleware`가 검증에 성공하면 요청 extension에 저장하며,
/// 핸들러에서는 추출자로 바로 받을 수 있습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 또는 레스토랑의 고유 ID (`sub` 클레임)
    pub user_id: String,

    /// 주체 역할 목록
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    /// 특정 역할을 보유하고 있는지 확인
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// 경로의 레코드 ID와 토큰 주체가 같은 역할/ID인지 확인합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthorizationError` - 다른 주체의 레코드이거나 역할이 다름
    pub fn ensure_owner(&self, role: &str, record_id: &str) -> Result<(), AppError> {
        if self.has_role(role) && self.user_id == record_id {
            Ok(())
        } else {
            log::warn!(
                "소유자 검증 실패: 주체 {} ({:?}), 대상 {} ({})",
                self.user_id, self.roles, record_id, role
            );
            Err(AppError::AuthorizationError(
                "You can update only your account!".to_string(),
            ))
        }
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "인증되지 않은 요청입니다".to_string(),
            )
            .into())),
        }
    }
}
