//! # Drive 파일 서비스
//!
//! 인증된 세션의 액세스 토큰으로 Drive 파일의 별표, 내용, 이름을 읽고 씁니다.
//! 모든 업스트림 호출은 [`DriveRepository`] 를 거치며 토큰은 호출마다 인자로 전달됩니다.
//!
//! ## 텍스트 파일 제한
//!
//! 내용 조회는 MIME 타입이 텍스트 허용 목록([`is_text_like`])을 통과한 경우에만
//! 본문을 내려받습니다. 내용 저장은 기존 MIME 타입을 그대로 사용하여 업로드하며
//! 허용 목록을 다시 검사하지 않습니다.

use std::sync::Arc;

use crate::domain::dto::{FileContentResponse, FileRenamedResponse, FileUpdatedResponse};
use crate::domain::models::{AuthenticatedSession, DriveFileUpdate};
use crate::errors::{AppError, AppResult};
use crate::repositories::DriveRepository;
use crate::utils::is_text_like;

#[derive(Clone)]
pub struct DriveService {
    repo: Arc<dyn DriveRepository>,
}

impl DriveService {
    pub fn new(repo: Arc<dyn DriveRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_star(&self, session: &AuthenticatedSession, file_id: &str) -> AppResult<bool> {
        let file = self.repo.get_metadata(session.access_token(), file_id).await?;
        Ok(file.starred)
    }

    /// 현재 별표 상태를 읽고 반대 값을 기록한 뒤 새 상태를 반환합니다.
    ///
    /// 읽기와 쓰기 사이에 잠금이 없으므로 동시 요청은 마지막 쓰기가 남습니다.
    pub async fn toggle_star(&self, session: &AuthenticatedSession, file_id: &str) -> AppResult<bool> {
        let token = session.access_token();
        let current = self.repo.get_metadata(token, file_id).await?;

        let updated = self
            .repo
            .update_metadata(token, file_id, &DriveFileUpdate::starred(!current.starred))
            .await?;

        log::debug!("별표 변경 - 파일: {}, {} -> {}", file_id, current.starred, updated.starred);
        Ok(updated.starred)
    }

    /// 텍스트 파일의 이름, 내용, 별표 상태를 반환합니다.
    ///
    /// # 에러
    ///
    /// * `UnsupportedMediaType` - 허용 목록 밖의 MIME 타입 (본문 다운로드 없음)
    /// * `NotFound` / `ExternalServiceError` - 업스트림 실패
    pub async fn get_content(
        &self,
        session: &AuthenticatedSession,
        file_id: &str,
    ) -> AppResult<FileContentResponse> {
        let token = session.access_token();
        let file = self.repo.get_metadata(token, file_id).await?;

        if !is_text_like(&file.mime_type) {
            log::info!("텍스트가 아닌 파일 요청 거부 - 파일: {}, 타입: {}", file_id, file.mime_type);
            return Err(AppError::UnsupportedMediaType {
                mime_type: file.mime_type,
            });
        }

        let content = self.repo.download_text(token, file_id).await?;

        Ok(FileContentResponse {
            filename: file.name,
            content,
            starred: file.starred,
        })
    }

    /// 파일 본문을 덮어씁니다. 업로드 Content-Type 은 기존 파일의 MIME 타입입니다.
    pub async fn set_content(
        &self,
        session: &AuthenticatedSession,
        file_id: &str,
        content: String,
    ) -> AppResult<FileUpdatedResponse> {
        let token = session.access_token();
        let current = self.repo.get_metadata(token, file_id).await?;

        let updated = self
            .repo
            .upload_content(token, file_id, &current.mime_type, content)
            .await?;

        log::info!("파일 내용 저장 완료 - 파일: {}", updated.id);

        Ok(FileUpdatedResponse {
            id: updated.id,
            name: updated.name,
            mime_type: updated.mime_type,
        })
    }

    pub async fn rename(
        &self,
        session: &AuthenticatedSession,
        file_id: &str,
        filename: &str,
    ) -> AppResult<FileRenamedResponse> {
        if filename.trim().is_empty() {
            return Err(AppError::ValidationError("파일 이름이 필요합니다".to_string()));
        }

        let updated = self
            .repo
            .update_metadata(session.access_token(), file_id, &DriveFileUpdate::rename(filename))
            .await?;

        Ok(FileRenamedResponse {
            id: updated.id,
            name: updated.name,
        })
    }
}
