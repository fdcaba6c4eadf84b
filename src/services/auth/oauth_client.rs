//! Google OAuth 2.0 프로바이더 클라이언트
//!
//! 토큰 엔드포인트(코드 교환, 토큰 갱신)와 사용자 정보 엔드포인트 호출을 담당합니다.
//! 자격 증명은 호출마다 인자로 전달되며 클라이언트에 저장되지 않습니다.

use async_trait::async_trait;

use crate::config::GoogleOAuthConfig;
use crate::domain::models::{GoogleTokenResponse, GoogleUserInfo};
use crate::errors::{AppError, AppResult};

/// OAuth 프로바이더 인터페이스
#[async_trait]
pub trait OAuthProvider: Send + Sync {
    /// Authorization code 를 토큰으로 교환합니다 (`grant_type=authorization_code`).
    async fn exchange_code(&self, code: &str) -> AppResult<GoogleTokenResponse>;

    /// 리프레시 토큰으로 새 액세스 토큰을 발급받습니다 (`grant_type=refresh_token`).
    async fn refresh_token(&self, refresh_token: &str) -> AppResult<GoogleTokenResponse>;

    /// 액세스 토큰 소유자의 프로필을 조회합니다.
    async fn fetch_user_info(&self, access_token: &str) -> AppResult<GoogleUserInfo>;
}

/// reqwest 기반 Google OAuth 클라이언트
#[derive(Clone)]
pub struct GoogleOAuthClient {
    client: reqwest::Client,
    config: GoogleOAuthConfig,
}

impl GoogleOAuthClient {
    pub fn new(client: reqwest::Client, config: GoogleOAuthConfig) -> Self {
        Self { client, config }
    }

    async fn request_token(&self, params: &[(&str, &str)], action: &str) -> AppResult<GoogleTokenResponse> {
        let response = self
            .client
            .post(&self.config.token_uri)
            .form(params)
            .send()
            .await
            .map_err(|e| AppError::UpstreamAuthError(format!("Google {} 요청 실패: {}", action, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            log::warn!("Google {} 실패 - 상태: {}, 응답: {}", action, status, error_text);
            return Err(AppError::UpstreamAuthError(format!(
                "Google {} 실패 ({}): {}",
                action, status, error_text
            )));
        }

        response
            .json::<GoogleTokenResponse>()
            .await
            .map_err(|e| AppError::UpstreamAuthError(format!("Google {} 응답 파싱 실패: {}", action, e)))
    }
}

#[async_trait]
impl OAuthProvider for GoogleOAuthClient {
    async fn exchange_code(&self, code: &str) -> AppResult<GoogleTokenResponse> {
        let params = [
            ("code", code),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ];

        self.request_token(&params, "토큰 교환").await
    }

    async fn refresh_token(&self, refresh_token: &str) -> AppResult<GoogleTokenResponse> {
        let params = [
            ("refresh_token", refresh_token),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("grant_type", "refresh_token"),
        ];

        self.request_token(&params, "토큰 갱신").await
    }

    async fn fetch_user_info(&self, access_token: &str) -> AppResult<GoogleUserInfo> {
        let response = self
            .client
            .get(&self.config.userinfo_uri)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 사용자 정보 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            log::warn!("Google 사용자 정보 조회 실패 - 상태: {}", status);
            return Err(AppError::ExternalServiceError(format!(
                "Google 사용자 정보 조회 실패 ({}): {}",
                status, error_text
            )));
        }

        response
            .json::<GoogleUserInfo>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 사용자 정보 파싱 실패: {}", e)))
    }
}
