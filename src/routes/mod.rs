//! API 라우트 설정 모듈
//!
//! 헬스 체크, OAuth/세션, Drive 파일 엔드포인트를 기능별 스코프로 등록합니다.
//!
//! # Route Groups
//!
//! | 스코프 | 미들웨어 | 비고 |
//! |--------|----------|------|
//! | `/ping` | - | 헬스 체크 |
//! | `/auth` | 보안 헤더 | 로그인 URL, OAuth 콜백 |
//! | `/api/auth` | 보안 헤더 | 토큰 갱신, 상태, 사용자, 로그아웃 |
//! | `/api/drive` | `SessionMiddleware` | 액세스 토큰 쿠키 필수 |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::web;
//!
//! let mut cfg = web::ServiceConfig::new();
//! configure_all_routes(&mut cfg);
//! ```

use crate::domain::PingResponse;
use crate::errors::AppError;
use crate::handlers;
use crate::middlewares::SessionMiddleware;
use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::http::header;
use actix_web::{middleware, web, HttpRequest};

/// 모든 라우트를 설정합니다
///
/// 핸들러는 `web::Data` 로 등록된 `GoogleAuthService`, `SessionCookieStore`,
/// `DriveService` 를 사용하므로 `App` 에 세 값이 모두 등록되어 있어야 합니다.
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new()
///     .app_data(auth_service.clone())
///     .app_data(cookie_store.clone())
///     .app_data(drive_service.clone())
///     .configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // 추출기 실패도 AppError JSON 형식으로 응답
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));
    cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler));

    // Health check endpoint
    cfg.service(ping);

    // Feature-specific routes
    configure_auth_routes(cfg);
    configure_drive_routes(cfg);
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("JSON 본문 파싱 실패: {} {}: {}", req.method(), req.path(), err);
    AppError::ValidationError(err.to_string()).into()
}

fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("쿼리 파싱 실패: {} {}: {}", req.method(), req.path(), err);
    AppError::ValidationError(err.to_string()).into()
}

/// 인증 스코프에 붙는 보안 헤더
fn security_headers() -> middleware::DefaultHeaders {
    middleware::DefaultHeaders::new()
        .add((header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
        .add((header::X_FRAME_OPTIONS, "DENY"))
        .add((header::X_XSS_PROTECTION, "1; mode=block"))
        .add((header::STRICT_TRANSPORT_SECURITY, "max-age=31536000; includeSubDomains"))
}

/// 인증 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// ## OAuth (Google)
/// - `GET /auth/google/url` - Google 동의 화면 URL 생성
/// - `GET /auth/callback` - Google OAuth 콜백 처리
///
/// ## 세션
/// - `POST /api/auth/refresh` - 액세스 토큰 갱신
/// - `GET /api/auth/status` - 로그인 여부
/// - `GET /api/auth/user` - 현재 사용자 정보
/// - `POST /api/auth/logout` - 로그아웃
///
/// # Examples
///
/// ```bash
/// # Google OAuth 시작
/// curl "http://localhost:8080/auth/google/url?returnUrl=/files/abc"
///
/// # 토큰 갱신
/// curl -X POST http://localhost:8080/api/auth/refresh \
///   --cookie "refreshToken=1//0g..."
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .wrap(security_headers())
            .service(handlers::auth::google_auth_url)
            .service(handlers::auth::oauth_callback)
    );

    cfg.service(
        web::scope("/api/auth")
            .wrap(security_headers())
            .service(handlers::auth::refresh)
            .service(handlers::auth::status)
            .service(handlers::auth::current_user)
            .service(handlers::auth::logout)
    );
}

/// Drive 파일 라우트를 설정합니다
///
/// 스코프 전체가 `SessionMiddleware` 뒤에 있으므로 `accessToken` 쿠키가 없는 요청은
/// 업스트림 호출 없이 401 로 끝납니다.
///
/// ```bash
/// curl http://localhost:8080/api/drive/files/1AbC/star \
///   --cookie "accessToken=ya29..."
/// ```
fn configure_drive_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/drive")
            .wrap(SessionMiddleware::required())
            .service(handlers::drive::get_star)
            .service(handlers::drive::toggle_star)
            .service(handlers::drive::update_content)
            .service(handlers::drive::get_file)
            .service(handlers::drive::rename_file)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/ping
/// ```
///
/// Response:
/// ```json
/// { "pong": true, "timestamp": "2026-01-01T00:00:00Z" }
/// ```
#[actix_web::get("/ping")]
async fn ping() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(PingResponse::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::cookie::time::Duration;
    use actix_web::cookie::Cookie;
    use actix_web::http::{Method, StatusCode};
    use actix_web::{test, App};

    use crate::domain::models::DriveFile;
    use crate::services::auth::{ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE};
    use crate::testing::{MockDriveRepository, MockOAuthProvider, TestState};

    macro_rules! test_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data($state.auth.clone())
                    .app_data($state.cookies.clone())
                    .app_data($state.drive.clone())
                    .configure(configure_all_routes),
            )
            .await
        };
    }

    fn markdown_and_pdf() -> Arc<MockDriveRepository> {
        Arc::new(MockDriveRepository::with_files(vec![
            (
                DriveFile {
                    id: "doc".to_string(),
                    name: "notes.md".to_string(),
                    mime_type: "text/markdown".to_string(),
                    starred: false,
                },
                "# Notes",
            ),
            (
                DriveFile {
                    id: "pdf".to_string(),
                    name: "paper.pdf".to_string(),
                    mime_type: "application/pdf".to_string(),
                    starred: false,
                },
                "%PDF-1.7",
            ),
        ]))
    }

    #[actix_web::test]
    async fn test_ping() {
        let state = TestState::new(Arc::new(MockOAuthProvider::default()), markdown_and_pdf());
        let app = test_app!(state);

        let req = test::TestRequest::get().uri("/ping").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["pong"], true);
        assert!(body["timestamp"].is_string());
    }

    #[actix_web::test]
    async fn test_access_cookie_routes_reject_without_upstream_calls() {
        let provider = Arc::new(MockOAuthProvider::default());
        let repo = markdown_and_pdf();
        let state = TestState::new(provider.clone(), repo.clone());
        let app = test_app!(state);

        let routes = [
            (Method::GET, "/api/auth/user"),
            (Method::GET, "/api/drive/files/doc/star"),
            (Method::PUT, "/api/drive/files/doc/star"),
            (Method::GET, "/api/drive/files/doc"),
            (Method::PUT, "/api/drive/files/doc/content"),
            (Method::PUT, "/api/drive/files/doc"),
        ];

        for (method, uri) in routes {
            let req = test::TestRequest::default()
                .method(method.clone())
                .uri(uri)
                .set_json(serde_json::json!({ "content": "x", "filename": "x.md" }))
                .to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{} {}", method, uri);
        }

        assert_eq!(provider.total_calls(), 0);
        assert_eq!(repo.total_calls(), 0);
    }

    #[actix_web::test]
    async fn test_callback_sets_cookies_and_redirects() {
        let provider = Arc::new(MockOAuthProvider::default());
        let state = TestState::new(provider.clone(), markdown_and_pdf());
        let app = test_app!(state);

        let req = test::TestRequest::get()
            .uri("/auth/callback?code=4%2F0Ab&state=%2Ffiles%2Fdoc")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(
            res.headers().get(header::LOCATION).unwrap(),
            "http://frontend.test/files/doc"
        );

        let cookies: Vec<Cookie<'_>> = res.response().cookies().collect();
        let access = cookies.iter().find(|c| c.name() == ACCESS_TOKEN_COOKIE).unwrap();
        let refresh = cookies.iter().find(|c| c.name() == REFRESH_TOKEN_COOKIE).unwrap();
        assert_eq!(access.value(), "access-token");
        assert_eq!(access.max_age(), Some(Duration::seconds(3600)));
        assert_eq!(refresh.value(), "refresh-token");
        assert_eq!(refresh.max_age(), Some(Duration::seconds(2_592_000)));
        assert_eq!(provider.exchange_calls(), 1);
    }

    #[actix_web::test]
    async fn test_callback_without_state_is_bad_request() {
        let provider = Arc::new(MockOAuthProvider::default());
        let state = TestState::new(provider.clone(), markdown_and_pdf());
        let app = test_app!(state);

        for uri in ["/auth/callback?code=4%2F0Ab", "/auth/callback?state=%2F", "/auth/callback"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{}", uri);
        }

        assert_eq!(provider.total_calls(), 0);
    }

    #[actix_web::test]
    async fn test_callback_with_denied_consent() {
        let provider = Arc::new(MockOAuthProvider::default());
        let state = TestState::new(provider.clone(), markdown_and_pdf());
        let app = test_app!(state);

        let req = test::TestRequest::get()
            .uri("/auth/callback?error=access_denied&state=%2F")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(provider.total_calls(), 0);
    }

    #[actix_web::test]
    async fn test_auth_routes_carry_security_headers() {
        let state = TestState::new(Arc::new(MockOAuthProvider::default()), markdown_and_pdf());
        let app = test_app!(state);

        let req = test::TestRequest::get()
            .uri("/auth/google/url?returnUrl=%2Ffiles%2Fdoc")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers().get(header::X_CONTENT_TYPE_OPTIONS).unwrap(), "nosniff");
        assert_eq!(res.headers().get(header::X_FRAME_OPTIONS).unwrap(), "DENY");
        assert_eq!(res.headers().get(header::X_XSS_PROTECTION).unwrap(), "1; mode=block");
        assert_eq!(
            res.headers().get(header::STRICT_TRANSPORT_SECURITY).unwrap(),
            "max-age=31536000; includeSubDomains"
        );

        let body: serde_json::Value = test::read_body_json(res).await;
        let url = body["url"].as_str().unwrap();
        assert!(url.contains("state=%2Ffiles%2Fdoc"));

        let req = test::TestRequest::get().uri("/api/auth/status").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(res.headers().get(header::X_FRAME_OPTIONS).unwrap(), "DENY");
    }

    #[actix_web::test]
    async fn test_refresh_without_cookie_skips_upstream() {
        let provider = Arc::new(MockOAuthProvider::default());
        let state = TestState::new(provider.clone(), markdown_and_pdf());
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/auth/refresh")
            .cookie(Cookie::new(ACCESS_TOKEN_COOKIE, "expired"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(provider.total_calls(), 0);
    }

    #[actix_web::test]
    async fn test_refresh_reissues_access_cookie_only() {
        let provider = Arc::new(MockOAuthProvider::default());
        let state = TestState::new(provider.clone(), markdown_and_pdf());
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/auth/refresh")
            .cookie(Cookie::new(REFRESH_TOKEN_COOKIE, "refresh-token"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let cookies: Vec<Cookie<'static>> = res.response().cookies().map(Cookie::into_owned).collect();
        assert_eq!(cookies.len(), 1);
        assert_eq!(cookies[0].name(), ACCESS_TOKEN_COOKIE);
        assert_eq!(cookies[0].value(), "refreshed-access-token");

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body, serde_json::json!({ "success": true }));
        assert_eq!(provider.refresh_calls(), 1);
    }

    #[actix_web::test]
    async fn test_status_requires_both_cookies() {
        let state = TestState::new(Arc::new(MockOAuthProvider::default()), markdown_and_pdf());
        let app = test_app!(state);

        let req = test::TestRequest::get()
            .uri("/api/auth/status")
            .cookie(Cookie::new(ACCESS_TOKEN_COOKIE, "a"))
            .cookie(Cookie::new(REFRESH_TOKEN_COOKIE, "r"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri("/api/auth/status")
            .cookie(Cookie::new(ACCESS_TOKEN_COOKIE, "a"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_current_user_profile() {
        let state = TestState::new(Arc::new(MockOAuthProvider::default()), markdown_and_pdf());
        let app = test_app!(state);

        let req = test::TestRequest::get()
            .uri("/api/auth/user")
            .cookie(Cookie::new(ACCESS_TOKEN_COOKIE, "access-token"))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["email"], "user@cote.test");
        assert_eq!(body["name"], "Cote User");
    }

    #[actix_web::test]
    async fn test_logout_clears_cookies() {
        let state = TestState::new(Arc::new(MockOAuthProvider::default()), markdown_and_pdf());
        let app = test_app!(state);

        let req = test::TestRequest::post().uri("/api/auth/logout").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let cookies: Vec<Cookie<'_>> = res.response().cookies().collect();
        assert_eq!(cookies.len(), 2);
        assert!(cookies.iter().all(|c| c.value().is_empty() && c.max_age() == Some(Duration::ZERO)));
    }

    #[actix_web::test]
    async fn test_drive_file_content_and_mime_gate() {
        let repo = markdown_and_pdf();
        let state = TestState::new(Arc::new(MockOAuthProvider::default()), repo.clone());
        let app = test_app!(state);

        let req = test::TestRequest::get()
            .uri("/api/drive/files/doc")
            .cookie(Cookie::new(ACCESS_TOKEN_COOKIE, "access-token"))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            body,
            serde_json::json!({ "filename": "notes.md", "content": "# Notes", "starred": false })
        );

        let req = test::TestRequest::get()
            .uri("/api/drive/files/pdf")
            .cookie(Cookie::new(ACCESS_TOKEN_COOKIE, "access-token"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["mimeType"], "application/pdf");
        assert_eq!(repo.download_calls(), 1);
    }

    #[actix_web::test]
    async fn test_drive_star_rename_and_content_updates() {
        let repo = markdown_and_pdf();
        let state = TestState::new(Arc::new(MockOAuthProvider::default()), repo.clone());
        let app = test_app!(state);
        let cookie = || Cookie::new(ACCESS_TOKEN_COOKIE, "access-token");

        let req = test::TestRequest::put()
            .uri("/api/drive/files/doc/star")
            .cookie(cookie())
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, serde_json::json!({ "starred": true }));

        let req = test::TestRequest::put()
            .uri("/api/drive/files/doc/content")
            .cookie(cookie())
            .set_json(serde_json::json!({ "content": "# Updated" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            body,
            serde_json::json!({ "id": "doc", "name": "notes.md", "mimeType": "text/markdown" })
        );
        assert_eq!(repo.content_of("doc").as_deref(), Some("# Updated"));

        let req = test::TestRequest::put()
            .uri("/api/drive/files/doc")
            .cookie(cookie())
            .set_json(serde_json::json!({ "filename": "  " }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::put()
            .uri("/api/drive/files/doc")
            .cookie(cookie())
            .set_json(serde_json::json!({ "filename": "renamed.md" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, serde_json::json!({ "id": "doc", "name": "renamed.md" }));
    }

    #[actix_web::test]
    async fn test_content_update_without_content_field_keeps_file() {
        let repo = markdown_and_pdf();
        let state = TestState::new(Arc::new(MockOAuthProvider::default()), repo.clone());
        let app = test_app!(state);

        let req = test::TestRequest::put()
            .uri("/api/drive/files/doc/content")
            .cookie(Cookie::new(ACCESS_TOKEN_COOKIE, "access-token"))
            .set_json(serde_json::json!({ "text": "typo key" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "Invalid request");
        assert_eq!(repo.total_calls(), 0);
        assert_eq!(repo.content_of("doc").as_deref(), Some("# Notes"));
    }

    #[actix_web::test]
    async fn test_content_update_accepts_explicit_empty_string() {
        let repo = markdown_and_pdf();
        let state = TestState::new(Arc::new(MockOAuthProvider::default()), repo.clone());
        let app = test_app!(state);

        let req = test::TestRequest::put()
            .uri("/api/drive/files/doc/content")
            .cookie(Cookie::new(ACCESS_TOKEN_COOKIE, "access-token"))
            .set_json(serde_json::json!({ "content": "" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(repo.content_of("doc").as_deref(), Some(""));
    }

    #[actix_web::test]
    async fn test_malformed_json_body_returns_json_error() {
        let repo = markdown_and_pdf();
        let state = TestState::new(Arc::new(MockOAuthProvider::default()), repo.clone());
        let app = test_app!(state);

        let req = test::TestRequest::put()
            .uri("/api/drive/files/doc")
            .cookie(Cookie::new(ACCESS_TOKEN_COOKIE, "access-token"))
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{\"filename\": ")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(res.headers().get(header::CONTENT_TYPE).unwrap(), "application/json");
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "Invalid request");
        assert_eq!(repo.total_calls(), 0);
    }

    #[actix_web::test]
    async fn test_malformed_query_returns_json_error() {
        let provider = Arc::new(MockOAuthProvider::default());
        let state = TestState::new(provider.clone(), markdown_and_pdf());
        let app = test_app!(state);

        let req = test::TestRequest::get()
            .uri("/auth/callback?code=a&code=b&state=%2F")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "Invalid request");
        assert_eq!(provider.total_calls(), 0);
    }

    #[actix_web::test]
    async fn test_rename_keeps_filename_as_sent() {
        let repo = markdown_and_pdf();
        let state = TestState::new(Arc::new(MockOAuthProvider::default()), repo.clone());
        let app = test_app!(state);

        let req = test::TestRequest::put()
            .uri("/api/drive/files/doc")
            .cookie(Cookie::new(ACCESS_TOKEN_COOKIE, "access-token"))
            .set_json(serde_json::json!({ "filename": "  a.txt" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, serde_json::json!({ "id": "doc", "name": "  a.txt" }));
    }

    #[actix_web::test]
    async fn test_unknown_drive_file_is_not_found() {
        let state = TestState::new(Arc::new(MockOAuthProvider::default()), markdown_and_pdf());
        let app = test_app!(state);

        let req = test::TestRequest::get()
            .uri("/api/drive/files/missing/star")
            .cookie(Cookie::new(ACCESS_TOKEN_COOKIE, "access-token"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
