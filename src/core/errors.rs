//! # Application Error Handling System
//!
//! 서비스 전역에서 사용하는 통합 에러 타입입니다.
//! `thiserror`로 에러 메시지를 정의하고 `actix_web::ResponseError`를 구현하여
//! 핸들러에서 `?` 한 번으로 일관된 JSON 에러 응답을 만들 수 있습니다.
//!
//! ## 에러 분류
//!
//! | 변형 | 의미 | HTTP |
//! |------|------|------|
//! | `ValidationError` | 잘못된 입력값 (좌표 범위, ID 형식 등) | 400 |
//! | `AuthenticationError` | 토큰 없음 / 만료 / 서명 불일치 | 401 |
//! | `AuthorizationError` | 본인 레코드가 아님, 역할 부족 | 403 |
//! | `NotFound` | 사용자 또는 레스토랑 없음 | 404 |
//! | `PreconditionFailed` | 위치를 저장하기 전에 주변 검색 | 412 |
//! | `DatabaseError` | 저장소 연결 불가 / 타임아웃 (재시도 가능) | 503 |
//! | `InternalError` | 예상하지 못한 시스템 오류 | 500 |
//!
//! 검색 결과가 0건인 경우는 에러가 아닙니다. 서비스 계층에서
//! `NearbyOutcome::Empty`로 표현되며 200 응답으로 내려갑니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! let user = user_store.find_by_id(&user_id).await?
//!     .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use mongodb::error::ErrorKind;
use thiserror::Error;

/// 위치 미등록 상태에서 주변 검색을 시도했을 때 클라이언트에게 전달되는 메시지
pub const ADD_LOCATION_FIRST: &str = "Add Location first";

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 저장소(MongoDB) 관련 에러
    ///
    /// 연결 실패, 쿼리 타임아웃 등 재시도 가능한 인프라 오류입니다.
    /// 세부 내용은 로그에만 남기고 클라이언트에게는 일반 메시지만 전달합니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러
    #[error("Not found: {0}")]
    NotFound(String),

    /// 선행 조건 미충족 (예: 위치를 먼저 등록해야 함)
    #[error("Precondition failed: {0}")]
    PreconditionFailed(String),

    /// 인증 실패 에러
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트가 같은 요청을 다시 보내도 되는 에러인지 여부
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::DatabaseError(_))
    }

    /// 응답 본문의 `error` 필드에 들어가는 기계 판독용 코드
    pub fn code(&self) -> &'static str {
        match self {
            AppError::DatabaseError(_) => "unavailable",
            AppError::ValidationError(_) => "invalid_argument",
            AppError::NotFound(_) => "not_found",
            AppError::PreconditionFailed(_) => "precondition_failed",
            AppError::AuthenticationError(_) => "authentication_required",
            AppError::AuthorizationError(_) => "forbidden",
            AppError::InternalError(_) => "internal_error",
        }
    }

    /// 클라이언트에게 노출해도 되는 메시지
    ///
    /// 저장소/내부 에러는 원인 문자열을 숨기고 고정 문구를 사용합니다.
    fn public_message(&self) -> String {
        match self {
            AppError::DatabaseError(_) => {
                "Service temporarily unavailable, please retry".to_string()
            }
            AppError::InternalError(_) => "Internal server error".to_string(),
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::PreconditionFailed(msg)
            | AppError::AuthenticationError(msg)
            | AppError::AuthorizationError(msg) => msg.clone(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::PreconditionFailed(_) => StatusCode::PRECONDITION_FAILED,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::DatabaseError(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 위치 미등록(412) 응답에는 빈 `restaurants` 배열을 함께 담아
    /// 클라이언트가 목록을 비우고 안내 메시지를 표시할 수 있게 합니다.
    fn error_response(&self) -> HttpResponse {
        let mut body = serde_json::json!({
            "error": self.code(),
            "message": self.public_message(),
        });

        if let AppError::PreconditionFailed(_) = self {
            body["restaurants"] = serde_json::json!([]);
        }

        HttpResponse::build(self.status_code()).json(body)
    }
}

/// MongoDB 에러 분류
///
/// BSON 직렬화/역직렬화 실패는 저장된 문서 형식의 문제이므로 다시 시도해도 결과가 같습니다.
/// 이 경우만 `InternalError`(500)로, 나머지 연결/타임아웃/서버 오류는 `DatabaseError`(503)로 변환합니다.
impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        match e.kind.as_ref() {
            ErrorKind::BsonDeserialization(_) | ErrorKind::BsonSerialization(_) => {
                log::error!("문서 변환 실패: {}", e);
                AppError::InternalError(e.to_string())
            }
            _ => AppError::DatabaseError(e.to_string()),
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("latitude out of range".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("User not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_authorization_error_response() {
        let error = AppError::AuthorizationError("You can update only your account!".to_string());

        assert_eq!(error.error_response().status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_only_database_error_is_retryable() {
        assert!(AppError::DatabaseError("timeout".to_string()).is_retryable());
        assert!(!AppError::NotFound("x".to_string()).is_retryable());
        assert!(!AppError::PreconditionFailed("x".to_string()).is_retryable());
        assert!(!AppError::ValidationError("x".to_string()).is_retryable());
    }

    #[actix_web::test]
    async fn test_database_error_hides_details() {
        let error = AppError::DatabaseError("connection refused at 10.0.0.3:27017".to_string());
        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let bytes = to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["error"], "unavailable");
        assert!(!body["message"].as_str().unwrap().contains("10.0.0.3"));
    }

    #[actix_web::test]
    async fn test_precondition_failed_carries_empty_list() {
        let error = AppError::PreconditionFailed(ADD_LOCATION_FIRST.to_string());
        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::PRECONDITION_FAILED);

        let bytes = to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["message"], ADD_LOCATION_FIRST);
        assert_eq!(body["restaurants"], serde_json::json!([]));
    }

    #[derive(Debug, serde::Deserialize)]
    #[allow(dead_code)]
    struct Named {
        name: String,
    }

    #[test]
    fn test_malformed_document_is_internal_error() {
        let decode = mongodb::bson::from_document::<Named>(mongodb::bson::doc! {}).unwrap_err();
        let error = AppError::from(mongodb::error::Error::from(decode));

        assert!(matches!(error, AppError::InternalError(_)));
        assert!(!error.is_retryable());
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_connection_failure_is_retryable() {
        let io = std::io::Error::other("connection refused");
        let error = AppError::from(mongodb::error::Error::from(io));

        assert!(matches!(error, AppError::DatabaseError(_)));
        assert!(error.is_retryable());
        assert_eq!(error.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
