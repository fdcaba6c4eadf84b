//! 세션 쿠키 저장소
//!
//! 액세스/리프레시 토큰을 HTTP-only 쿠키로 발급, 삭제, 조회합니다.
//! 쿠키 값은 토큰 원문이며 전송 구간 TLS 와 HTTP-only 플래그 외의 암호화는 없습니다.
//!
//! | 쿠키 | Max-Age |
//! |------|---------|
//! | `accessToken` | 3600초 (1시간) |
//! | `refreshToken` | 2592000초 (30일) |

use actix_web::cookie::time::Duration;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::{HttpRequest, HttpResponseBuilder};

use crate::config::CookieConfig;
use crate::domain::models::CredentialPair;

pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";
pub const ACCESS_TOKEN_MAX_AGE_SECS: i64 = 60 * 60;
pub const REFRESH_TOKEN_MAX_AGE_SECS: i64 = 30 * 24 * 60 * 60;

/// 환경별 속성이 적용된 세션 쿠키를 만드는 저장소
#[derive(Debug, Clone)]
pub struct SessionCookieStore {
    config: CookieConfig,
}

impl SessionCookieStore {
    pub fn new(config: CookieConfig) -> Self {
        Self { config }
    }

    fn build_cookie(&self, name: &'static str, value: String, max_age_secs: i64) -> Cookie<'static> {
        Cookie::build(name, value)
            .path("/")
            .domain(self.config.domain.clone())
            .secure(self.config.secure)
            .http_only(true)
            .same_site(SameSite::Lax)
            .max_age(Duration::seconds(max_age_secs))
            .finish()
    }

    pub fn access_cookie(&self, access_token: &str) -> Cookie<'static> {
        self.build_cookie(ACCESS_TOKEN_COOKIE, access_token.to_string(), ACCESS_TOKEN_MAX_AGE_SECS)
    }

    pub fn refresh_cookie(&self, refresh_token: &str) -> Cookie<'static> {
        self.build_cookie(REFRESH_TOKEN_COOKIE, refresh_token.to_string(), REFRESH_TOKEN_MAX_AGE_SECS)
    }

    /// 두 세션 쿠키를 모두 발급합니다.
    pub fn set_session_cookies(&self, response: &mut HttpResponseBuilder, credentials: &CredentialPair) {
        response.cookie(self.access_cookie(&credentials.access_token));
        response.cookie(self.refresh_cookie(&credentials.refresh_token));
    }

    /// 토큰 갱신 시 액세스 토큰 쿠키만 다시 발급합니다.
    pub fn set_access_cookie(&self, response: &mut HttpResponseBuilder, access_token: &str) {
        response.cookie(self.access_cookie(access_token));
    }

    /// 두 세션 쿠키를 만료시킵니다.
    ///
    /// 브라우저가 같은 쿠키로 인식하도록 발급 시와 동일한 도메인/경로를 사용합니다.
    pub fn clear_session_cookies(&self, response: &mut HttpResponseBuilder) {
        for name in [ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE] {
            let mut cookie = self.build_cookie(name, String::new(), 0);
            cookie.make_removal();
            response.cookie(cookie);
        }
    }

    /// 두 쿠키가 모두 있을 때만 토큰 쌍을 반환합니다.
    pub fn read_session_cookies(request: &HttpRequest) -> Option<CredentialPair> {
        let access_token = Self::read_access_token(request)?;
        let refresh_token = Self::read_refresh_token(request)?;
        Some(CredentialPair::new(access_token, refresh_token))
    }

    pub fn read_access_token(request: &HttpRequest) -> Option<String> {
        read_cookie(request, ACCESS_TOKEN_COOKIE)
    }

    pub fn read_refresh_token(request: &HttpRequest) -> Option<String> {
        read_cookie(request, REFRESH_TOKEN_COOKIE)
    }
}

fn read_cookie(request: &HttpRequest, name: &str) -> Option<String> {
    request
        .cookie(name)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}
