//! 세션 자격 증명
//!
//! OAuth 콜백에서 생성되어 클라이언트 쿠키에만 보관되는 토큰 쌍입니다.
//! 서버는 요청 사이에 어떤 상태도 유지하지 않습니다.

/// 액세스 토큰과 리프레시 토큰 쌍
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl CredentialPair {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

// 토큰 값이 로그에 남지 않도록 Debug 출력을 가립니다.
impl std::fmt::Debug for CredentialPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialPair")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}
