//! # Google OAuth 2.0 인증 서비스
//!
//! Drive 접근 권한을 얻기 위한 Authorization Code Flow 를 처리합니다.
//! 서버는 사용자 계정을 저장하지 않으며, 발급된 토큰 쌍은 쿠키로만 클라이언트에 전달됩니다.
//!
//! ```text
//! 브라우저                      서버                              Google
//!    │ GET /auth/google/url      │                                  │
//!    ├──────────────────────────►│ build_authorization_url          │
//!    │◄──────── {url} ───────────┤                                  │
//!    │──────────────── 동의 화면 ───────────────────────────────────►│
//!    │◄────────────── redirect ?code&state ─────────────────────────┤
//!    │ GET /auth/callback        │                                  │
//!    ├──────────────────────────►│ exchange_code ──────────────────►│
//!    │                           │◄──── access/refresh token ───────┤
//!    │◄── 302 frontend + state ──┤ (쿠키 발급)                        │
//! ```
//!
//! `state` 에는 CSRF 토큰이 아니라 로그인 후 돌아갈 프론트엔드 경로가 그대로 담깁니다.

use std::sync::Arc;

use crate::config::GoogleOAuthConfig;
use crate::domain::models::{CredentialPair, GoogleUserInfo};
use crate::errors::{AppError, AppResult};
use crate::services::auth::oauth_client::OAuthProvider;

/// 코드 교환 성공 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub credentials: CredentialPair,
    /// `frontend_base + state`
    pub redirect_url: String,
}

/// Google OAuth 인증 플로우 서비스
#[derive(Clone)]
pub struct GoogleAuthService {
    config: GoogleOAuthConfig,
    frontend_base: String,
    provider: Arc<dyn OAuthProvider>,
}

impl GoogleAuthService {
    pub fn new(
        config: GoogleOAuthConfig,
        frontend_base: impl Into<String>,
        provider: Arc<dyn OAuthProvider>,
    ) -> Self {
        Self {
            config,
            frontend_base: frontend_base.into(),
            provider,
        }
    }

    /// Google 동의 화면 URL 생성
    ///
    /// 리프레시 토큰을 항상 받기 위해 `access_type=offline`, `prompt=consent` 를 붙입니다.
    ///
    /// ```text
    /// https://accounts.google.com/o/oauth2/v2/auth?
    ///   client_id=...&redirect_uri=...&response_type=code&
    ///   access_type=offline&prompt=consent&
    ///   scope=https%3A%2F%2Fwww.googleapis.com%2Fauth%2Fdrive.file%20...&
    ///   state=%2Ffiles%2Fabc
    /// ```
    pub fn build_authorization_url(&self, return_path: &str) -> String {
        let scope = self.config.scope();
        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("response_type", "code"),
            ("access_type", "offline"),
            ("prompt", "consent"),
            ("scope", scope.as_str()),
            ("state", return_path),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.config.auth_uri, query_string)
    }

    /// Authorization Code 를 토큰 쌍으로 교환합니다.
    ///
    /// # 에러
    ///
    /// * `ValidationError` - `code` 또는 `state` 가 비어 있음 (업스트림 호출 없음)
    /// * `UpstreamAuthError` - 교환 실패, 또는 응답에 두 토큰 중 하나라도 없음
    pub async fn exchange_code(&self, code: &str, state: &str) -> AppResult<LoginOutcome> {
        if code.trim().is_empty() || state.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Authorization code와 state가 필요합니다".to_string(),
            ));
        }

        let token = self.provider.exchange_code(code).await?;

        let (access_token, refresh_token) = match (token.access_token, token.refresh_token) {
            (Some(access), Some(refresh)) if !access.is_empty() && !refresh.is_empty() => {
                (access, refresh)
            }
            _ => {
                log::warn!("Google 토큰 응답에 access/refresh 토큰이 누락됨");
                return Err(AppError::UpstreamAuthError(
                    "토큰 응답에 access_token 또는 refresh_token 이 없습니다".to_string(),
                ));
            }
        };

        log::info!("Google OAuth 코드 교환 성공");

        Ok(LoginOutcome {
            credentials: CredentialPair::new(access_token, refresh_token),
            redirect_url: format!("{}{}", self.frontend_base, state),
        })
    }

    /// 리프레시 토큰으로 새 액세스 토큰을 발급받습니다.
    ///
    /// 리프레시 토큰이 없으면 업스트림을 호출하지 않고 `AuthenticationError` 를 반환합니다.
    pub async fn refresh_access_token(&self, refresh_token: Option<&str>) -> AppResult<String> {
        let refresh_token = match refresh_token {
            Some(token) if !token.is_empty() => token,
            _ => {
                return Err(AppError::AuthenticationError(
                    "리프레시 토큰이 없습니다".to_string(),
                ));
            }
        };

        let token = self.provider.refresh_token(refresh_token).await?;

        match token.access_token {
            Some(access_token) if !access_token.is_empty() => {
                log::info!("Google 액세스 토큰 갱신 성공");
                Ok(access_token)
            }
            _ => Err(AppError::UpstreamAuthError(
                "갱신 응답에 access_token 이 없습니다".to_string(),
            )),
        }
    }

    pub async fn fetch_current_user(&self, access_token: Option<&str>) -> AppResult<GoogleUserInfo> {
        match access_token {
            Some(token) if !token.is_empty() => self.provider.fetch_user_info(token).await,
            _ => Err(AppError::AuthenticationError(
                "액세스 토큰이 없습니다".to_string(),
            )),
        }
    }

    /// 두 쿠키가 모두 있으면 로그인 상태로 봅니다. 토큰 유효성은 확인하지 않습니다.
    pub fn check_status(credentials: Option<&CredentialPair>) -> bool {
        credentials.is_some()
    }
}
