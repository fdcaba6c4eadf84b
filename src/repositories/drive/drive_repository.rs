//! Google Drive 파일 리포지토리
//!
//! Drive v3 REST API 의 `files` 리소스 중 메타데이터 조회/수정, 미디어 다운로드,
//! 미디어 업로드만 사용합니다.
//!
//! ## 에러 매핑
//!
//! - 업스트림 404 → [`AppError::NotFound`]
//! - 그 외 모든 실패(전송 오류, 비정상 상태 코드, 응답 파싱 실패) →
//!   [`AppError::ExternalServiceError`]
//!
//! 재시도나 타임아웃 재정의 없이 한 번의 실패를 그대로 호출자에게 돌려줍니다.

use async_trait::async_trait;
use reqwest::{header, StatusCode};

use crate::config::DriveApiConfig;
use crate::domain::models::{DRIVE_FILE_FIELDS, DriveFile, DriveFileUpdate};
use crate::errors::{AppError, AppResult};

/// Drive 파일 접근 인터페이스
///
/// 서비스 계층은 이 trait 에만 의존하므로 테스트에서는 메모리 기반 구현으로 교체합니다.
#[async_trait]
pub trait DriveRepository: Send + Sync {
    /// 파일 메타데이터 (`id,name,mimeType,starred`) 조회
    async fn get_metadata(&self, access_token: &str, file_id: &str) -> AppResult<DriveFile>;

    /// 메타데이터 부분 수정 후 수정된 메타데이터 반환
    async fn update_metadata(
        &self,
        access_token: &str,
        file_id: &str,
        update: &DriveFileUpdate,
    ) -> AppResult<DriveFile>;

    /// 파일 본문을 텍스트로 다운로드
    async fn download_text(&self, access_token: &str, file_id: &str) -> AppResult<String>;

    /// 파일 본문을 주어진 MIME 타입으로 덮어쓰기
    async fn upload_content(
        &self,
        access_token: &str,
        file_id: &str,
        mime_type: &str,
        content: String,
    ) -> AppResult<DriveFile>;
}

/// reqwest 기반 Drive REST API 구현
///
/// `reqwest::Client` 는 커넥션 풀만 공유하며 인증 정보는 요청마다 `bearer_auth` 로 붙입니다.
#[derive(Clone)]
pub struct GoogleDriveRepository {
    client: reqwest::Client,
    config: DriveApiConfig,
}

impl GoogleDriveRepository {
    pub fn new(client: reqwest::Client, config: DriveApiConfig) -> Self {
        Self { client, config }
    }

    fn file_url(&self, file_id: &str) -> String {
        format!("{}/files/{}", self.config.api_base, urlencoding::encode(file_id))
    }

    fn upload_url(&self, file_id: &str) -> String {
        format!("{}/files/{}", self.config.upload_base, urlencoding::encode(file_id))
    }

    async fn parse_file(response: reqwest::Response, file_id: &str) -> AppResult<DriveFile> {
        response.json::<DriveFile>().await.map_err(|e| {
            AppError::ExternalServiceError(format!("Drive 응답 파싱 실패 ({}): {}", file_id, e))
        })
    }
}

/// 업스트림 응답 상태를 검사하여 실패를 AppError 로 변환합니다.
async fn ensure_success(
    response: reqwest::Response,
    file_id: &str,
    action: &str,
) -> AppResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();

    if status == StatusCode::NOT_FOUND {
        log::warn!("Drive 파일 없음 - 작업: {}, 파일: {}", action, file_id);
        return Err(AppError::NotFound(format!("Drive file {}", file_id)));
    }

    log::error!(
        "Drive {} 실패 - 파일: {}, 상태: {}, 응답: {}",
        action, file_id, status, body
    );
    Err(AppError::ExternalServiceError(format!(
        "Drive {} 실패 ({}): {}",
        action, status, body
    )))
}

fn transport_error(action: &str, e: reqwest::Error) -> AppError {
    AppError::ExternalServiceError(format!("Drive {} 요청 실패: {}", action, e))
}

#[async_trait]
impl DriveRepository for GoogleDriveRepository {
    async fn get_metadata(&self, access_token: &str, file_id: &str) -> AppResult<DriveFile> {
        let response = self
            .client
            .get(self.file_url(file_id))
            .bearer_auth(access_token)
            .query(&[("fields", DRIVE_FILE_FIELDS)])
            .send()
            .await
            .map_err(|e| transport_error("메타데이터 조회", e))?;

        let response = ensure_success(response, file_id, "메타데이터 조회").await?;
        Self::parse_file(response, file_id).await
    }

    async fn update_metadata(
        &self,
        access_token: &str,
        file_id: &str,
        update: &DriveFileUpdate,
    ) -> AppResult<DriveFile> {
        let response = self
            .client
            .patch(self.file_url(file_id))
            .bearer_auth(access_token)
            .query(&[("fields", DRIVE_FILE_FIELDS)])
            .json(update)
            .send()
            .await
            .map_err(|e| transport_error("메타데이터 수정", e))?;

        let response = ensure_success(response, file_id, "메타데이터 수정").await?;
        Self::parse_file(response, file_id).await
    }

    async fn download_text(&self, access_token: &str, file_id: &str) -> AppResult<String> {
        let response = self
            .client
            .get(self.file_url(file_id))
            .bearer_auth(access_token)
            .query(&[("alt", "media")])
            .send()
            .await
            .map_err(|e| transport_error("내용 다운로드", e))?;

        let response = ensure_success(response, file_id, "내용 다운로드").await?;
        response.text().await.map_err(|e| {
            AppError::ExternalServiceError(format!("Drive 내용 읽기 실패 ({}): {}", file_id, e))
        })
    }

    async fn upload_content(
        &self,
        access_token: &str,
        file_id: &str,
        mime_type: &str,
        content: String,
    ) -> AppResult<DriveFile> {
        let response = self
            .client
            .patch(self.upload_url(file_id))
            .bearer_auth(access_token)
            .query(&[("uploadType", "media"), ("fields", DRIVE_FILE_FIELDS)])
            .header(header::CONTENT_TYPE, mime_type)
            .body(content)
            .send()
            .await
            .map_err(|e| transport_error("내용 업로드", e))?;

        let response = ensure_success(response, file_id, "내용 업로드").await?;
        Self::parse_file(response, file_id).await
    }
}
