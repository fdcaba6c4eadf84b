//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 Google OAuth / Drive
//! 업스트림 에러를 일관된 HTTP 응답으로 변환합니다.
//!
//! ## 상태 코드 매핑
//!
//! | 에러 | 상태 코드 |
//! |------|-----------|
//! | `ValidationError` | 400 |
//! | `UnsupportedMediaType` | 400 (`mimeType` 포함) |
//! | `AuthenticationError` | 401 |
//! | `UpstreamAuthError` | 401 |
//! | `NotFound` | 404 |
//! | `ExternalServiceError` | 500 |
//!
//! ## 환경별 메시지
//!
//! 개발 환경에서는 응답 본문에 `details` 필드로 내부 메시지가 포함되고,
//! 프로덕션에서는 일반화된 메시지만 반환됩니다. 정책은 시작 시
//! [`init_error_details`] 로 한 번만 결정됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn rename(filename: &str) -> Result<(), AppError> {
//!     if filename.trim().is_empty() {
//!         return Err(AppError::ValidationError("파일 이름이 필요합니다".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use actix_web::http::StatusCode;
use once_cell::sync::OnceCell;
use thiserror::Error;

/// 에러 응답에 내부 메시지를 노출할지 여부 (시작 시 한 번 설정)
static EXPOSE_ERROR_DETAILS: OnceCell<bool> = OnceCell::new();

/// 에러 상세 노출 정책을 설정합니다.
///
/// 두 번째 호출부터는 무시됩니다.
pub fn init_error_details(expose: bool) {
    if EXPOSE_ERROR_DETAILS.set(expose).is_err() {
        log::debug!("에러 상세 노출 정책이 이미 설정되어 있습니다");
    }
}

fn expose_error_details() -> bool {
    EXPOSE_ERROR_DETAILS.get().copied().unwrap_or(false)
}

/// 애플리케이션 전역 에러 타입
///
/// 핸들러에서 그대로 반환하면 자동으로 HTTP 응답으로 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 필수 입력값 누락 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 세션 쿠키 누락 또는 무효 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 업스트림이 리소스를 찾지 못함 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 텍스트로 다룰 수 없는 파일 형식 (400 Bad Request)
    #[error("Unsupported media type: {mime_type}")]
    UnsupportedMediaType { mime_type: String },

    /// OAuth 프로바이더의 토큰 발급/갱신 실패 (401 Unauthorized)
    #[error("Upstream auth error: {0}")]
    UpstreamAuthError(String),

    /// 외부 서비스 에러 (500 Internal Server Error)
    #[error("External service error: {0}")]
    ExternalServiceError(String),
}

impl AppError {
    /// 클라이언트에게 항상 보여줄 수 있는 일반화된 메시지
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "Invalid request",
            AppError::AuthenticationError(_) => "Not authenticated",
            AppError::NotFound(_) => "File not found",
            AppError::UnsupportedMediaType { .. } => "Unsupported file type",
            AppError::UpstreamAuthError(_) => "Authentication with Google failed",
            AppError::ExternalServiceError(_) => "Upstream service error",
        }
    }

    /// JSON 에러 본문을 만듭니다.
    ///
    /// `UnsupportedMediaType` 은 환경과 무관하게 `mimeType` 을 함께 반환하고,
    /// `expose_details` 가 참일 때만 내부 메시지를 `details` 로 덧붙입니다.
    pub fn error_body(&self, expose_details: bool) -> serde_json::Value {
        let mut body = serde_json::json!({
            "error": self.public_message()
        });

        if let AppError::UnsupportedMediaType { mime_type } = self {
            body["mimeType"] = serde_json::Value::String(mime_type.clone());
        }

        if expose_details {
            body["details"] = serde_json::Value::String(self.to_string());
        }

        body
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedMediaType { .. } => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::UpstreamAuthError(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ExternalServiceError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(self.error_body(expose_error_details()))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
