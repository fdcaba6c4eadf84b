//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 `web::Data` 로 주입된 서비스를 호출하고, 결과를 JSON 응답이나
//! 쿠키/리다이렉트로 변환하는 일만 합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Browser (Frontend)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP + Cookie
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - OAuth 플로우, Drive 파일 규칙          ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories / OAuth Client - Google API       ← Upstream Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`auth`**: OAuth 로그인과 세션 쿠키
//!   - 로그인 URL (`GET /auth/google/url`)
//!   - OAuth 콜백 (`GET /auth/callback`)
//!   - 토큰 갱신, 상태, 사용자, 로그아웃 (`/api/auth/*`)
//!
//! - **`drive`**: Drive 파일 엔드포인트 (`/api/drive/files/*`)
//!
//! ## 에러 처리
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>` 를 반환하며, `AppError` 의
//! `ResponseError` 구현이 상태 코드와 JSON 본문을 결정합니다.
//!
//! ```rust,ignore
//! #[get("/files/{file_id}/star")]
//! pub async fn get_star(
//!     file_id: web::Path<String>,
//!     session: AuthenticatedSession,
//!     drive_service: web::Data<DriveService>,
//! ) -> Result<HttpResponse, AppError> {
//!     let starred = drive_service.get_star(&session, &file_id).await?;
//!     Ok(HttpResponse::Ok().json(StarResponse { starred }))
//! }
//! ```

pub mod auth;
pub mod drive;
