//! 테스트 전용 메모리 기반 업스트림 구현과 설정

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

use actix_web::web;
use async_trait::async_trait;

use crate::config::AppConfig;
use crate::domain::models::{DriveFile, DriveFileUpdate, GoogleTokenResponse, GoogleUserInfo};
use crate::errors::{AppError, AppResult};
use crate::repositories::DriveRepository;
use crate::services::auth::{GoogleAuthService, OAuthProvider, SessionCookieStore};
use crate::services::drive::DriveService;

pub fn test_config() -> AppConfig {
    let vars: HashMap<&str, &str> = HashMap::from([
        ("ENVIRONMENT", "test"),
        ("GOOGLE_CLIENT_ID", "test-client"),
        ("GOOGLE_CLIENT_SECRET", "test-secret"),
        ("GOOGLE_REDIRECT_URI", "http://api.test/auth/callback"),
        ("GOOGLE_AUTH_URI", "http://accounts.test/auth"),
        ("FRONTEND_URL", "http://frontend.test/"),
    ]);
    let lookup = |key: &str| vars.get(key).map(|v| v.to_string());

    AppConfig::from_lookup(&lookup).expect("test config")
}

/// 라우트 테스트에 등록할 `web::Data` 묶음
pub struct TestState {
    pub auth: web::Data<GoogleAuthService>,
    pub cookies: web::Data<SessionCookieStore>,
    pub drive: web::Data<DriveService>,
}

impl TestState {
    pub fn new(provider: Arc<MockOAuthProvider>, repo: Arc<MockDriveRepository>) -> Self {
        let config = test_config();

        Self {
            auth: web::Data::new(GoogleAuthService::new(
                config.google,
                config.frontend.base_url,
                provider,
            )),
            cookies: web::Data::new(SessionCookieStore::new(config.cookies)),
            drive: web::Data::new(DriveService::new(repo)),
        }
    }
}

/// 호출 횟수를 기록하는 OAuth 프로바이더
pub struct MockOAuthProvider {
    exchange_response: Option<GoogleTokenResponse>,
    refresh_response: Option<GoogleTokenResponse>,
    user: Option<GoogleUserInfo>,
    exchange_calls: AtomicUsize,
    refresh_calls: AtomicUsize,
    user_info_calls: AtomicUsize,
}

impl Default for MockOAuthProvider {
    fn default() -> Self {
        Self {
            exchange_response: Some(GoogleTokenResponse {
                access_token: Some("access-token".to_string()),
                refresh_token: Some("refresh-token".to_string()),
                expires_in: Some(3599),
                token_type: Some("Bearer".to_string()),
                scope: None,
            }),
            refresh_response: Some(GoogleTokenResponse {
                access_token: Some("refreshed-access-token".to_string()),
                expires_in: Some(3599),
                ..Default::default()
            }),
            user: Some(GoogleUserInfo {
                id: "1234567890".to_string(),
                email: "user@cote.test".to_string(),
                name: "Cote User".to_string(),
                picture: Some("https://lh3.googleusercontent.com/a/photo".to_string()),
            }),
            exchange_calls: AtomicUsize::new(0),
            refresh_calls: AtomicUsize::new(0),
            user_info_calls: AtomicUsize::new(0),
        }
    }
}

impl MockOAuthProvider {
    pub fn with_exchange_response(response: GoogleTokenResponse) -> Self {
        Self {
            exchange_response: Some(response),
            ..Default::default()
        }
    }

    /// 모든 요청을 거부하는 프로바이더 (만료/폐기된 토큰)
    pub fn rejecting() -> Self {
        Self {
            exchange_response: None,
            refresh_response: None,
            user: None,
            ..Default::default()
        }
    }

    pub fn exchange_calls(&self) -> usize {
        self.exchange_calls.load(Ordering::SeqCst)
    }

    pub fn refresh_calls(&self) -> usize {
        self.refresh_calls.load(Ordering::SeqCst)
    }

    pub fn user_info_calls(&self) -> usize {
        self.user_info_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.exchange_calls() + self.refresh_calls() + self.user_info_calls()
    }
}

#[async_trait]
impl OAuthProvider for MockOAuthProvider {
    async fn exchange_code(&self, _code: &str) -> AppResult<GoogleTokenResponse> {
        self.exchange_calls.fetch_add(1, Ordering::SeqCst);
        self.exchange_response
            .clone()
            .ok_or_else(|| AppError::UpstreamAuthError("invalid_grant".to_string()))
    }

    async fn refresh_token(&self, _refresh_token: &str) -> AppResult<GoogleTokenResponse> {
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);
        self.refresh_response
            .clone()
            .ok_or_else(|| AppError::UpstreamAuthError("invalid_grant".to_string()))
    }

    async fn fetch_user_info(&self, _access_token: &str) -> AppResult<GoogleUserInfo> {
        self.user_info_calls.fetch_add(1, Ordering::SeqCst);
        self.user
            .clone()
            .ok_or_else(|| AppError::ExternalServiceError("userinfo 401".to_string()))
    }
}

/// 파일 메타데이터와 본문을 메모리에 보관하는 Drive 리포지토리
#[derive(Default)]
pub struct MockDriveRepository {
    files: Mutex<HashMap<String, (DriveFile, String)>>,
    last_token: Mutex<Option<String>>,
    last_upload: Mutex<Option<(String, String)>>,
    metadata_calls: AtomicUsize,
    update_calls: AtomicUsize,
    download_calls: AtomicUsize,
    upload_calls: AtomicUsize,
}

impl MockDriveRepository {
    pub fn with_files(files: Vec<(DriveFile, &str)>) -> Self {
        let files = files
            .into_iter()
            .map(|(file, content)| (file.id.clone(), (file, content.to_string())))
            .collect();

        Self {
            files: Mutex::new(files),
            ..Default::default()
        }
    }

    pub fn download_calls(&self) -> usize {
        self.download_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.metadata_calls.load(Ordering::SeqCst)
            + self.update_calls.load(Ordering::SeqCst)
            + self.download_calls()
            + self.upload_calls.load(Ordering::SeqCst)
    }

    pub fn last_token(&self) -> Option<String> {
        self.last_token.lock().unwrap().clone()
    }

    /// 마지막 업로드의 (파일 ID, Content-Type)
    pub fn last_upload(&self) -> Option<(String, String)> {
        self.last_upload.lock().unwrap().clone()
    }

    pub fn content_of(&self, file_id: &str) -> Option<String> {
        self.files
            .lock()
            .unwrap()
            .get(file_id)
            .map(|(_, content)| content.clone())
    }

    fn record_token(&self, access_token: &str) {
        *self.last_token.lock().unwrap() = Some(access_token.to_string());
    }

    fn not_found(file_id: &str) -> AppError {
        AppError::NotFound(format!("Drive file {}", file_id))
    }
}

#[async_trait]
impl DriveRepository for MockDriveRepository {
    async fn get_metadata(&self, access_token: &str, file_id: &str) -> AppResult<DriveFile> {
        self.metadata_calls.fetch_add(1, Ordering::SeqCst);
        self.record_token(access_token);

        self.files
            .lock()
            .unwrap()
            .get(file_id)
            .map(|(file, _)| file.clone())
            .ok_or_else(|| Self::not_found(file_id))
    }

    async fn update_metadata(
        &self,
        access_token: &str,
        file_id: &str,
        update: &DriveFileUpdate,
    ) -> AppResult<DriveFile> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.record_token(access_token);

        let mut files = self.files.lock().unwrap();
        let (file, _) = files.get_mut(file_id).ok_or_else(|| Self::not_found(file_id))?;

        if let Some(name) = &update.name {
            file.name = name.clone();
        }
        if let Some(starred) = update.starred {
            file.starred = starred;
        }

        Ok(file.clone())
    }

    async fn download_text(&self, access_token: &str, file_id: &str) -> AppResult<String> {
        self.download_calls.fetch_add(1, Ordering::SeqCst);
        self.record_token(access_token);

        self.content_of(file_id).ok_or_else(|| Self::not_found(file_id))
    }

    async fn upload_content(
        &self,
        access_token: &str,
        file_id: &str,
        mime_type: &str,
        content: String,
    ) -> AppResult<DriveFile> {
        self.upload_calls.fetch_add(1, Ordering::SeqCst);
        self.record_token(access_token);

        let mut files = self.files.lock().unwrap();
        let (file, stored) = files.get_mut(file_id).ok_or_else(|| Self::not_found(file_id))?;
        *stored = content;
        *self.last_upload.lock().unwrap() = Some((file_id.to_string(), mime_type.to_string()));

        Ok(file.clone())
    }
}
