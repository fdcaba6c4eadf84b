//! Drive 파일 요청 DTO

use serde::Deserialize;
use validator::{Validate, ValidationError};

/// 파일 내용 덮어쓰기 요청 (`PUT /api/drive/files/{id}/content`)
///
/// 빈 문자열도 유효한 내용이지만, `content` 키가 없으면 거부합니다.
#[derive(Debug, Deserialize)]
pub struct UpdateContentRequest {
    pub content: Option<String>,
}

/// 파일 이름 변경 요청 (`PUT /api/drive/files/{id}`)
#[derive(Debug, Deserialize, Validate)]
pub struct RenameFileRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    pub filename: String,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("파일 이름이 필요합니다".into());
        return Err(error);
    }
    Ok(())
}
