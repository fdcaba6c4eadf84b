//! 인증 응답 DTO

use serde::Serialize;

use crate::domain::models::GoogleUserInfo;

/// OAuth 로그인 URL 응답
#[derive(Debug, Serialize)]
pub struct AuthUrlResponse {
    /// 브라우저를 보낼 Google 인증 페이지의 전체 URL
    pub url: String,
}

/// 현재 사용자 정보 응답 (`GET /api/auth/user`)
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct UserProfileResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub picture: Option<String>,
}

impl From<GoogleUserInfo> for UserProfileResponse {
    fn from(user: GoogleUserInfo) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            picture: user.picture,
        }
    }
}

/// 단순 성공 응답 (`{"success": true}`)
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
