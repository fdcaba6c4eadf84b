//! Google OAuth 토큰 엔드포인트 응답

use serde::Deserialize;

/// Google OAuth 2.0 토큰 교환/갱신 응답
///
/// 인증 코드 교환 시에는 `prompt=consent` 덕분에 `refresh_token` 이 함께 오지만,
/// 갱신 응답에는 보통 포함되지 않으므로 두 토큰 모두 선택 필드로 둡니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GoogleTokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}
