//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use crate::core::AppError;
use crate::domain::models::auth::{AuthenticatedUser, RequiredRole};
use crate::services::auth::TokenService;

/// 로그인 서비스가 설정하는 토큰 쿠키 이름
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub required_role: RequiredRole,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let required_role = self.required_role.clone();

        Box::pin(async move {
            // 등록된 TokenService가 없으면 환경 변수 설정으로 생성
            let token_service = req
                .app_data::<web::Data<TokenService>>()
                .map(|data| data.get_ref().clone())
                .unwrap_or_else(TokenService::from_env);

            let user = match authenticate(&req, &token_service) {
                Ok(user) => user,
                Err(err) => {
                    log::warn!("인증 실패: {} {} ({})", req.method(), req.path(), err);
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
            };

            if !required_role.is_satisfied(&user.roles) {
                log::warn!(
                    "권한 부족: 주체 ID {} ({:?}), 필요 권한: {:?}",
                    user.user_id, user.roles, required_role
                );
                let response = AppError::AuthorizationError("접근 권한이 부족합니다".to_string())
                    .error_response();
                let (req, _) = req.into_parts();
                return Ok(ServiceResponse::new(req, response).map_into_right_body());
            }

            log::debug!("인증 성공: 주체 ID {}", user.user_id);
            req.extensions_mut().insert(user);

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청에서 JWT 토큰을 추출하고 검증
///
/// `Authorization: Bearer` 헤더를 우선하고, 없으면 `access_token` 쿠키를 사용합니다.
fn authenticate(
    req: &ServiceRequest,
    token_service: &TokenService,
) -> Result<AuthenticatedUser, AppError> {
    let header_token = req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok());

    let claims = match header_token {
        Some(header) => token_service.verify_token(token_service.extract_bearer_token(header)?)?,
        None => {
            let cookie = req.cookie(ACCESS_TOKEN_COOKIE).ok_or_else(|| {
                AppError::AuthenticationError("유효한 인증 토큰이 필요합니다".to_string())
            })?;
            token_service.verify_token(cookie.value())?
        }
    };

    Ok(AuthenticatedUser {
        user_id: claims.sub,
        roles: claims.roles,
    })
}
