//! Authentication HTTP Handlers
//!
//! Google OAuth 로그인과 쿠키 세션 관리 엔드포인트입니다.
//!
//! # Endpoints
//!
//! - `GET /auth/google/url` - 동의 화면 URL 생성
//! - `GET /auth/callback` - 코드 교환, 쿠키 발급, 프론트엔드로 리다이렉트
//! - `POST /api/auth/refresh` - 액세스 토큰 갱신
//! - `GET /api/auth/status` - 로그인 여부 (쿠키 존재만 확인)
//! - `GET /api/auth/user` - Google 프로필 조회
//! - `POST /api/auth/logout` - 쿠키 삭제
use actix_web::{get, http::header, post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::domain::{AuthUrlQuery, AuthUrlResponse, OAuthCallbackQuery, SuccessResponse, UserProfileResponse};
use crate::errors::AppError;
use crate::services::auth::{GoogleAuthService, SessionCookieStore};

/// Google OAuth 로그인 URL 생성 핸들러
///
/// # Endpoint
/// `GET /auth/google/url?returnUrl={path}`
#[get("/google/url")]
pub async fn google_auth_url(
    query: web::Query<AuthUrlQuery>,
    auth_service: web::Data<GoogleAuthService>,
) -> Result<HttpResponse, AppError> {
    let url = auth_service.build_authorization_url(query.return_path());

    Ok(HttpResponse::Ok().json(AuthUrlResponse { url }))
}

/// Google OAuth 콜백 처리 핸들러
///
/// 교환에 성공하면 두 세션 쿠키를 발급하고 `frontend_base + state` 로 302 리다이렉트합니다.
///
/// # Endpoint
/// `GET /auth/callback?code={code}&state={state}`
#[get("/callback")]
pub async fn oauth_callback(
    query: web::Query<OAuthCallbackQuery>,
    auth_service: web::Data<GoogleAuthService>,
    cookies: web::Data<SessionCookieStore>,
) -> Result<HttpResponse, AppError> {
    // 에러 체크 (사용자가 거부했거나 에러 발생)
    if let Some(error) = &query.error {
        let error_msg = query.error_description
            .as_deref()
            .unwrap_or("OAuth 인증이 취소되었거나 실패했습니다");
        log::warn!("Google OAuth 에러: {} - {}", error, error_msg);
        return Err(AppError::UpstreamAuthError(format!("{}: {}", error, error_msg)));
    }

    // 유효성 검사
    query.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let code = query.code.as_deref().unwrap_or_default();
    let state = query.state.as_deref().unwrap_or_default();

    let outcome = auth_service.exchange_code(code, state).await?;

    let mut response = HttpResponse::Found();
    cookies.set_session_cookies(&mut response, &outcome.credentials);
    response.insert_header((header::LOCATION, outcome.redirect_url));

    log::info!("Google OAuth 로그인 완료, 프론트엔드로 리다이렉트");
    Ok(response.finish())
}

/// 액세스 토큰 갱신 핸들러
///
/// 리프레시 토큰 쿠키로 새 액세스 토큰을 받아 액세스 토큰 쿠키만 다시 발급합니다.
///
/// # Endpoint
/// `POST /api/auth/refresh`
#[post("/refresh")]
pub async fn refresh(
    req: HttpRequest,
    auth_service: web::Data<GoogleAuthService>,
    cookies: web::Data<SessionCookieStore>,
) -> Result<HttpResponse, AppError> {
    let refresh_token = SessionCookieStore::read_refresh_token(&req);

    let access_token = auth_service
        .refresh_access_token(refresh_token.as_deref())
        .await?;

    let mut response = HttpResponse::Ok();
    cookies.set_access_cookie(&mut response, &access_token);
    Ok(response.json(SuccessResponse::ok()))
}

/// 로그인 상태 확인 핸들러
///
/// # Endpoint
/// `GET /api/auth/status`
#[get("/status")]
pub async fn status(req: HttpRequest) -> Result<HttpResponse, AppError> {
    let credentials = SessionCookieStore::read_session_cookies(&req);

    if GoogleAuthService::check_status(credentials.as_ref()) {
        Ok(HttpResponse::Ok().finish())
    } else {
        Err(AppError::AuthenticationError("세션 쿠키가 없습니다".to_string()))
    }
}

/// 현재 사용자 정보 조회 핸들러
///
/// # Endpoint
/// `GET /api/auth/user`
#[get("/user")]
pub async fn current_user(
    req: HttpRequest,
    auth_service: web::Data<GoogleAuthService>,
) -> Result<HttpResponse, AppError> {
    let access_token = SessionCookieStore::read_access_token(&req);

    let user = auth_service
        .fetch_current_user(access_token.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(UserProfileResponse::from(user)))
}

/// 로그아웃 핸들러
///
/// 쿠키만 삭제하며 Google 토큰을 폐기하지는 않습니다.
///
/// # Endpoint
/// `POST /api/auth/logout`
#[post("/logout")]
pub async fn logout(cookies: web::Data<SessionCookieStore>) -> Result<HttpResponse, AppError> {
    let mut response = HttpResponse::Ok();
    cookies.clear_session_cookies(&mut response);
    Ok(response.json(SuccessResponse::ok()))
}
