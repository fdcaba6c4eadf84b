//! Drive File HTTP Handlers
//!
//! 모든 엔드포인트는 `SessionMiddleware` 뒤에서 동작하며, 요청의
//! [`AuthenticatedSession`] 이 업스트림 자격 증명으로 그대로 전달됩니다.
use actix_web::{get, put, web, HttpResponse};
use validator::Validate;

use crate::domain::models::AuthenticatedSession;
use crate::domain::{RenameFileRequest, StarResponse, UpdateContentRequest};
use crate::errors::AppError;
use crate::services::drive::DriveService;

/// 별표 상태 조회
///
/// # Endpoint
/// `GET /api/drive/files/{id}/star`
#[get("/files/{file_id}/star")]
pub async fn get_star(
    file_id: web::Path<String>,
    session: AuthenticatedSession,
    drive_service: web::Data<DriveService>,
) -> Result<HttpResponse, AppError> {
    let starred = drive_service.get_star(&session, &file_id).await?;
    Ok(HttpResponse::Ok().json(StarResponse { starred }))
}

/// 별표 토글
///
/// # Endpoint
/// `PUT /api/drive/files/{id}/star`
#[put("/files/{file_id}/star")]
pub async fn toggle_star(
    file_id: web::Path<String>,
    session: AuthenticatedSession,
    drive_service: web::Data<DriveService>,
) -> Result<HttpResponse, AppError> {
    let starred = drive_service.toggle_star(&session, &file_id).await?;
    Ok(HttpResponse::Ok().json(StarResponse { starred }))
}

/// 텍스트 파일 내용 조회
///
/// # Endpoint
/// `GET /api/drive/files/{id}`
#[get("/files/{file_id}")]
pub async fn get_file(
    file_id: web::Path<String>,
    session: AuthenticatedSession,
    drive_service: web::Data<DriveService>,
) -> Result<HttpResponse, AppError> {
    let content = drive_service.get_content(&session, &file_id).await?;
    Ok(HttpResponse::Ok().json(content))
}

/// 파일 내용 저장
///
/// # Endpoint
/// `PUT /api/drive/files/{id}/content`
#[put("/files/{file_id}/content")]
pub async fn update_content(
    file_id: web::Path<String>,
    payload: web::Json<UpdateContentRequest>,
    session: AuthenticatedSession,
    drive_service: web::Data<DriveService>,
) -> Result<HttpResponse, AppError> {
    let content = payload
        .into_inner()
        .content
        .ok_or_else(|| AppError::ValidationError("content 필드가 필요합니다".to_string()))?;

    let updated = drive_service.set_content(&session, &file_id, content).await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// 파일 이름 변경
///
/// # Endpoint
/// `PUT /api/drive/files/{id}`
#[put("/files/{file_id}")]
pub async fn rename_file(
    file_id: web::Path<String>,
    payload: web::Json<RenameFileRequest>,
    session: AuthenticatedSession,
    drive_service: web::Data<DriveService>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let renamed = drive_service
        .rename(&session, &file_id, &payload.filename)
        .await?;
    Ok(HttpResponse::Ok().json(renamed))
}
