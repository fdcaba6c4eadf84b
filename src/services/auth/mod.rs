//! 인증 서비스 모듈
//!
//! # Features
//!
//! - Google OAuth 2.0 인증 URL 생성, 인증 코드 교환, 액세스 토큰 갱신
//! - 사용자 프로필 조회
//! - `accessToken` / `refreshToken` HTTP-only 세션 쿠키 발급/삭제/조회
//!
//! # Security
//!
//! - 토큰은 HTTP-only, `SameSite=Lax` 쿠키에만 저장
//! - 프로덕션에서는 `Secure` 쿠키와 서브도메인 공유 도메인 사용
//! - `prompt=consent` 로 매 로그인마다 리프레시 토큰 발급 보장

pub mod google_auth_service;
pub mod oauth_client;
pub mod session_cookie_service;

pub use google_auth_service::*;
pub use oauth_client::*;
pub use session_cookie_service::*;
