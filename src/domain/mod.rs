//! # Domain Layer
//!
//! 요청 단위로만 존재하는 도메인 값들을 정의합니다. 이 서비스는 아무것도
//! 저장하지 않으며, 파일과 메타데이터의 원본은 항상 Google Drive 입니다.
//!
//! - [`models`] - 세션 자격 증명, OAuth 토큰, Drive 파일 메타데이터
//! - [`dto`] - HTTP 요청/응답 본문

pub mod dto;
pub mod models;

pub use dto::{
    AuthUrlQuery, AuthUrlResponse, FileContentResponse, FileRenamedResponse, FileUpdatedResponse,
    OAuthCallbackQuery, PingResponse, RenameFileRequest, StarResponse, SuccessResponse,
    UpdateContentRequest, UserProfileResponse,
};
pub use models::{
    AuthenticatedSession, CredentialPair, DRIVE_FILE_FIELDS, DriveFile, DriveFileUpdate,
    GoogleTokenResponse, GoogleUserInfo,
};
