//! Drive 파일 응답 DTO

use serde::Serialize;

/// 별표 상태 응답
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct StarResponse {
    pub starred: bool,
}

/// 파일 내용 응답 (`GET /api/drive/files/{id}`)
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct FileContentResponse {
    pub filename: String,
    pub content: String,
    pub starred: bool,
}

/// 내용 저장 후 응답
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileUpdatedResponse {
    pub id: String,
    pub name: String,
    pub mime_type: String,
}

/// 이름 변경 후 응답
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct FileRenamedResponse {
    pub id: String,
    pub name: String,
}
