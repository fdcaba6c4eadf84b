//! HTTP 요청/응답 DTO 모듈
//!
//! - [`auth`] - OAuth 로그인 URL, 콜백 쿼리, 사용자 정보
//! - [`drive`] - 파일 내용/이름/별표 요청과 응답
//! - [`system`] - 헬스 체크

pub mod auth;
pub mod drive;
pub mod system;

pub use auth::{AuthUrlQuery, AuthUrlResponse, OAuthCallbackQuery, SuccessResponse, UserProfileResponse};
pub use drive::{
    FileContentResponse, FileRenamedResponse, FileUpdatedResponse, RenameFileRequest,
    StarResponse, UpdateContentRequest,
};
pub use system::PingResponse;
