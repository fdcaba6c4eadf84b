//! Drive 파일 메타데이터 모델
//!
//! https://developers.google.com/drive/api/reference/rest/v3/files#File
//! 중 이 서비스가 요청하는 필드만 정의합니다.

use serde::{Deserialize, Serialize};

/// 메타데이터 조회에 사용하는 `fields` 파라미터
pub const DRIVE_FILE_FIELDS: &str = "id,name,mimeType,starred";

/// Drive 파일 메타데이터 (캐시하지 않는 읽기 전용 투영)
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub starred: bool,
}

/// 메타데이터 부분 수정 요청 본문 (`PATCH files/{id}`)
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct DriveFileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starred: Option<bool>,
}

impl DriveFileUpdate {
    pub fn starred(starred: bool) -> Self {
        Self {
            starred: Some(starred),
            ..Default::default()
        }
    }

    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}
