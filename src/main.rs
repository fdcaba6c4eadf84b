//! 코테 백엔드 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! Google OAuth 로그인과 Drive 파일 프록시 API 를 쿠키 세션으로 제공합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use cote_backend::config::AppConfig;
use cote_backend::errors::init_error_details;
use cote_backend::repositories::GoogleDriveRepository;
use cote_backend::routes::configure_all_routes;
use cote_backend::services::auth::{GoogleAuthService, GoogleOAuthClient, SessionCookieStore};
use cote_backend::services::drive::DriveService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 코테 백엔드 시작중...");

    let config = AppConfig::from_env().map_err(|e| {
        error!("설정 로드 실패: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    init_error_details(config.expose_error_details());
    info!("실행 환경: {:?}", config.environment);

    start_http_server(config).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다. 업스트림 HTTP 클라이언트는
/// 모든 워커가 커넥션 풀을 공유하도록 한 번만 생성합니다.
///
/// # Errors
///
/// * `std::io::Error` - HTTP 클라이언트 생성 실패, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(config: AppConfig) -> io::Result<()> {
    let bind_address = config.server.bind_address();

    let http_client = reqwest::Client::builder()
        .user_agent(concat!("cote_backend/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| {
            error!("HTTP 클라이언트 생성 실패: {}", e);
            io::Error::other(e)
        })?;

    let oauth_client = Arc::new(GoogleOAuthClient::new(http_client.clone(), config.google.clone()));
    let drive_repository = Arc::new(GoogleDriveRepository::new(http_client, config.drive.clone()));

    let auth_service = web::Data::new(GoogleAuthService::new(
        config.google.clone(),
        config.frontend.base_url.clone(),
        oauth_client,
    ));
    let cookie_store = web::Data::new(SessionCookieStore::new(config.cookies.clone()));
    let drive_service = web::Data::new(DriveService::new(drive_repository));
    let frontend_origin = config.frontend.base_url.clone();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/ping", bind_address);

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors(&frontend_origin);

        App::new()
            .app_data(auth_service.clone())
            .app_data(cookie_store.clone())
            .app_data(drive_service.clone())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// # Examples
///
/// ```bash
/// PROFILE=dev cargo run
/// ```
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_default();

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=cote_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// 프론트엔드 오리진만 허용하며, 세션 쿠키 전송을 위해 자격 증명을 지원합니다.
fn configure_cors(frontend_origin: &str) -> Cors {
    Cors::default()
        // 허용할 Origin 설정
        .allowed_origin(frontend_origin)

        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "PUT", "OPTIONS"])

        // 허용할 헤더
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])

        // 자격 증명(쿠키 등) 지원
        .supports_credentials()

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
