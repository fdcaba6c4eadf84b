//! 요청 단위 인증 세션
//!
//! 세션 미들웨어가 `accessToken` 쿠키에서 추출하여 Request Extensions 에 저장하고,
//! 핸들러는 이 값을 업스트림 호출의 자격 증명으로 그대로 전달합니다.
//! 프로세스 전역 클라이언트에 토큰을 저장하지 않기 때문에 동시 요청 간에
//! 자격 증명이 섞이지 않습니다.

use std::future::{ready, Ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::errors::AppError;

/// 현재 요청의 Google 액세스 토큰
#[derive(Clone)]
pub struct AuthenticatedSession {
    access_token: String,
}

impl AuthenticatedSession {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }

    /// 업스트림 `Authorization: Bearer` 헤더에 사용할 토큰
    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

impl std::fmt::Debug for AuthenticatedSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticatedSession")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// ActixWeb FromRequest trait 구현
///
/// 세션 미들웨어가 적용되지 않은 라우트에서 사용하면 401 을 반환합니다.
impl FromRequest for AuthenticatedSession {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedSession>() {
            Some(session) => ready(Ok(session.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "인증되지 않은 요청입니다".to_string(),
            ))),
        }
    }
}
