//! 도메인 모델 모듈
//!
//! - [`session`] - 쿠키에 저장되는 자격 증명과 요청 단위 인증 세션
//! - [`oauth`] - Google OAuth 토큰/사용자 정보 응답
//! - [`drive`] - Drive 파일 메타데이터 투영

pub mod drive;
pub mod oauth;
pub mod session;

pub use drive::{DRIVE_FILE_FIELDS, DriveFile, DriveFileUpdate};
pub use oauth::{GoogleTokenResponse, GoogleUserInfo};
pub use session::{AuthenticatedSession, CredentialPair};
