//! 미들웨어 모듈
//!
//! # 제공 미들웨어
//!
//! ### 세션 미들웨어 (SessionMiddleware)
//! - `accessToken` 쿠키에서 Google 액세스 토큰 추출
//! - [`AuthenticatedSession`](crate::domain::models::AuthenticatedSession) 을 request extension 에 저장
//! - 쿠키가 없으면 핸들러와 업스트림 호출 없이 401 반환
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::middlewares::SessionMiddleware;
//!
//! web::scope("/api/drive")
//!     .wrap(SessionMiddleware::required())
//!     .service(get_star)
//! ```

pub mod session_middleware;
mod session_inner;

pub use session_middleware::SessionMiddleware;
