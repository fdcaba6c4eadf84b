//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 시작 시 한 번 생성되어 `web::Data` 로 공유됩니다. 서비스가 들고 있는
//! 것은 설정과 업스트림 클라이언트뿐이며, 사용자 자격 증명은 항상 메서드 인자로
//! 전달됩니다.
//!
//! - [`auth`] - Google OAuth 플로우와 세션 쿠키
//! - [`drive`] - Drive 파일 게이트웨이
//!
//! # Examples
//!
//! ```rust,ignore
//! use cote_backend::services::{auth::GoogleAuthService, drive::DriveService};
//!
//! let url = auth_service.build_authorization_url("/files/abc");
//! let starred = drive_service.toggle_star(&session, "abc").await?;
//! ```

pub mod auth;
pub mod drive;
