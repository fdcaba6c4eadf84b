//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 시작 시점에 한 번 읽어 [`AppConfig`] 로 묶습니다.
//! 각 서비스는 시작 시점에 필요한 하위 설정(`google`, `drive`, `cookies`)을
//! 복사해 생성되며, 요청 처리 중에는 환경 변수를 다시 읽지 않습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩, 쿠키, 프론트엔드 주소
//! - [`auth_config`] - Google OAuth 클라이언트, Drive API 엔드포인트
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use cote_backend::config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! println!("Server will bind to {}", config.server.bind_address());
//! ```

pub mod auth_config;
pub mod data_config;

pub use auth_config::*;
pub use data_config::*;

use thiserror::Error;

/// 환경 변수 조회 함수 (테스트에서는 HashMap 기반 조회로 대체)
pub(crate) type EnvLookup<'a> = dyn Fn(&str) -> Option<String> + 'a;

/// 설정 로드 실패
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
}

/// 애플리케이션 전체 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub google: GoogleOAuthConfig,
    pub drive: DriveApiConfig,
    pub cookies: CookieConfig,
    pub frontend: FrontendConfig,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|key: &str| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: &EnvLookup<'_>) -> Result<Self, ConfigError> {
        let environment = Environment::resolve(lookup);

        Ok(Self {
            environment,
            server: ServerConfig::resolve(lookup),
            google: GoogleOAuthConfig::resolve(environment, lookup)?,
            drive: DriveApiConfig::resolve(lookup),
            cookies: CookieConfig::resolve(environment, lookup)?,
            frontend: FrontendConfig::resolve(environment, lookup)?,
        })
    }

    /// 개발 환경에서만 에러 상세 메시지를 노출합니다.
    pub fn expose_error_details(&self) -> bool {
        matches!(self.environment, Environment::Development)
    }
}
