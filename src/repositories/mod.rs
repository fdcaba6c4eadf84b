//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 이 서비스의 데이터 원본은 Google Drive 하나뿐이므로, 리포지토리는 Drive REST API
//! 호출을 캡슐화합니다. 모든 메서드는 호출마다 요청자의 액세스 토큰을 인자로 받고,
//! 리포지토리 인스턴스 자체에는 자격 증명을 저장하지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use cote_backend::repositories::drive::{DriveRepository, GoogleDriveRepository};
//!
//! let repo = GoogleDriveRepository::new(reqwest::Client::new(), config.drive.clone());
//! let file = repo.get_metadata(session.access_token(), "1AbC").await?;
//! ```

pub mod drive;

pub use drive::{DriveRepository, GoogleDriveRepository};
