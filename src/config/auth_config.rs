//! # Authentication Configuration Module
//!
//! Google OAuth 2.0 클라이언트와 Drive API 엔드포인트 설정을 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"
//! export GOOGLE_REDIRECT_URI="https://api.yourdomain.com/auth/callback"
//! ```
//!
//! `GOOGLE_REDIRECT_URI` 는 개발 환경에서만 기본값
//! (`http://localhost:8080/auth/callback`) 이 적용됩니다.
//!
//! ## 선택 환경 변수
//!
//! 테스트 서버를 가리키도록 업스트림 주소를 바꿀 수 있습니다.
//!
//! ```bash
//! export GOOGLE_AUTH_URI="https://accounts.google.com/o/oauth2/v2/auth"
//! export GOOGLE_TOKEN_URI="https://oauth2.googleapis.com/token"
//! export GOOGLE_USERINFO_URI="https://www.googleapis.com/oauth2/v2/userinfo"
//! export DRIVE_API_BASE="https://www.googleapis.com/drive/v3"
//! export DRIVE_UPLOAD_BASE="https://www.googleapis.com/upload/drive/v3"
//! ```

use super::{ConfigError, EnvLookup, Environment};

/// Drive 파일 생성 앱 권한과 "연결 앱" 설치 권한
pub const DRIVE_SCOPES: [&str; 2] = [
    "https://www.googleapis.com/auth/drive.file",
    "https://www.googleapis.com/auth/drive.install",
];

/// Google OAuth 2.0 클라이언트 설정
///
/// Google Cloud Console 에서 발급한 OAuth 클라이언트 정보와 프로바이더 엔드포인트입니다.
///
/// ## 보안 고려사항
///
/// - `client_secret`은 로그에 출력하지 않습니다 (`Debug` 출력에서도 가려집니다)
/// - 프로덕션에서는 HTTPS redirect URI만 사용하세요
#[derive(Clone)]
pub struct GoogleOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub auth_uri: String,
    pub token_uri: String,
    pub userinfo_uri: String,
}

impl std::fmt::Debug for GoogleOAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleOAuthConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri)
            .field("auth_uri", &self.auth_uri)
            .field("token_uri", &self.token_uri)
            .field("userinfo_uri", &self.userinfo_uri)
            .finish()
    }
}

impl GoogleOAuthConfig {
    pub(crate) fn resolve(
        environment: Environment,
        lookup: &EnvLookup<'_>,
    ) -> Result<Self, ConfigError> {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let redirect_uri = match lookup("GOOGLE_REDIRECT_URI") {
            Some(uri) => uri,
            None if environment.is_production() => {
                return Err(ConfigError::Missing("GOOGLE_REDIRECT_URI"));
            }
            None => "http://localhost:8080/auth/callback".to_string(),
        };

        Ok(Self {
            client_id: required("GOOGLE_CLIENT_ID")?,
            client_secret: required("GOOGLE_CLIENT_SECRET")?,
            redirect_uri,
            auth_uri: lookup("GOOGLE_AUTH_URI")
                .unwrap_or_else(|| "https://accounts.google.com/o/oauth2/v2/auth".to_string()),
            token_uri: lookup("GOOGLE_TOKEN_URI")
                .unwrap_or_else(|| "https://oauth2.googleapis.com/token".to_string()),
            userinfo_uri: lookup("GOOGLE_USERINFO_URI")
                .unwrap_or_else(|| "https://www.googleapis.com/oauth2/v2/userinfo".to_string()),
        })
    }

    /// 공백으로 구분된 scope 문자열
    pub fn scope(&self) -> String {
        DRIVE_SCOPES.join(" ")
    }
}

/// Drive REST API 엔드포인트 설정
#[derive(Debug, Clone)]
pub struct DriveApiConfig {
    /// 메타데이터/다운로드 기준 주소 (`.../drive/v3`)
    pub api_base: String,
    /// 미디어 업로드 기준 주소 (`.../upload/drive/v3`)
    pub upload_base: String,
}

impl DriveApiConfig {
    pub(crate) fn resolve(lookup: &EnvLookup<'_>) -> Self {
        Self {
            api_base: lookup("DRIVE_API_BASE")
                .unwrap_or_else(|| "https://www.googleapis.com/drive/v3".to_string())
                .trim_end_matches('/')
                .to_string(),
            upload_base: lookup("DRIVE_UPLOAD_BASE")
                .unwrap_or_else(|| "https://www.googleapis.com/upload/drive/v3".to_string())
                .trim_end_matches('/')
                .to_string(),
        }
    }
}

impl Default for DriveApiConfig {
    fn default() -> Self {
        Self::resolve(&|_: &str| None)
    }
}
