//! 인증 요청 관련 DTO

use serde::Deserialize;
use validator::Validate;

/// `GET /auth/google/url` 쿼리 파라미터
#[derive(Debug, Deserialize)]
pub struct AuthUrlQuery {
    /// 로그인 후 돌아갈 프론트엔드 경로 (없으면 `/`)
    #[serde(rename = "returnUrl")]
    pub return_url: Option<String>,
}

impl AuthUrlQuery {
    pub fn return_path(&self) -> &str {
        self.return_url
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .unwrap_or("/")
    }
}

/// OAuth 콜백 쿼리 파라미터 구조체
///
/// `code` 와 `state` 가 빠진 요청은 업스트림 호출 없이 400 으로 거부합니다.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct OAuthCallbackQuery {
    #[validate(required(message = "Authorization code가 필요합니다"), length(min = 1, message = "Authorization code가 필요합니다"))]
    pub code: Option<String>,

    #[validate(required(message = "State가 필요합니다"), length(min = 1, message = "State가 필요합니다"))]
    pub state: Option<String>,

    /// 에러가 있을 경우 (사용자가 거부했거나 에러 발생)
    pub error: Option<String>,
    pub error_description: Option<String>,
}
