//! 코테 백엔드
//!
//! Google OAuth 로그인과 Google Drive 파일 접근을 대신 수행하는 HTTP 프록시입니다.
//! 브라우저는 Google 토큰을 HTTP-only 쿠키로만 보관하고, 서버는 요청마다 쿠키의
//! 액세스 토큰으로 Drive API 를 호출합니다. 서버 측 세션 저장소는 없습니다.
//!
//! # Features
//!
//! - **OAuth 2.0**: Google 동의 화면 URL 생성, 코드 교환, 토큰 갱신
//! - **쿠키 세션**: `accessToken` / `refreshToken` HTTP-only 쿠키
//! - **Drive 프록시**: 별표 조회/토글, 텍스트 파일 읽기/쓰기, 이름 변경
//! - **MIME 허용 목록**: 텍스트로 다룰 수 있는 파일만 내용 조회 허용
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트, 보안 헤더, 세션 미들웨어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답, 쿠키 발급
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← OAuth 플로우, Drive 파일 규칙
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← Drive REST API / OAuth 엔드포인트 (reqwest)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use cote_backend::config::AppConfig;
//! use cote_backend::routes::configure_all_routes;
//!
//! let config = AppConfig::from_env()?;
//! let app = App::new()
//!     .app_data(auth_service.clone())
//!     .app_data(cookie_store.clone())
//!     .app_data(drive_service.clone())
//!     .configure(configure_all_routes);
//! ```

pub mod config;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;

#[cfg(test)]
mod testing;
