//! 실행 환경 및 서버/쿠키 설정 관리 모듈
//!
//! 실행 환경에 따라 달라지는 쿠키 속성(`Secure`, `Domain`)과 서버 바인딩,
//! 프론트엔드 주소를 관리합니다.

use super::{ConfigError, EnvLookup};

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// 개발 환경 - localhost 쿠키, 상세 에러 메시지
    Development,
    /// 테스트 환경
    Test,
    /// 프로덕션 환경 - Secure 쿠키, 일반화된 에러 메시지
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub(crate) fn resolve(lookup: &EnvLookup<'_>) -> Self {
        let raw = lookup("ENVIRONMENT")
            .or_else(|| lookup("NODE_ENV"))
            .unwrap_or_else(|| "production".to_string());
        Self::from_str(&raw)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값은 `Production`으로 취급합니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// `HOST` (기본값 `0.0.0.0`), `PORT` (기본값 `8080`) 를 읽습니다.
    pub(crate) fn resolve(lookup: &EnvLookup<'_>) -> Self {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        Self { host, port }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 세션 쿠키 속성 설정
///
/// 프로덕션에서는 `Secure` 플래그와 서브도메인 간 공유를 위한 `Domain` 을 사용하고,
/// 개발 환경에서는 `localhost` 도메인에 비보안 쿠키를 사용합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieConfig {
    pub secure: bool,
    pub domain: String,
}

impl CookieConfig {
    pub(crate) fn resolve(
        environment: Environment,
        lookup: &EnvLookup<'_>,
    ) -> Result<Self, ConfigError> {
        if environment.is_production() {
            let domain = lookup("COOKIE_DOMAIN")
                .filter(|d| !d.trim().is_empty())
                .ok_or(ConfigError::Missing("COOKIE_DOMAIN"))?;
            Ok(Self { secure: true, domain })
        } else {
            Ok(Self::development())
        }
    }

    pub fn development() -> Self {
        Self {
            secure: false,
            domain: "localhost".to_string(),
        }
    }
}

/// 프론트엔드 주소 설정
///
/// OAuth 콜백 후 리다이렉트의 기준 주소이자 CORS 허용 오리진입니다.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    pub base_url: String,
}

impl FrontendConfig {
    pub(crate) fn resolve(
        environment: Environment,
        lookup: &EnvLookup<'_>,
    ) -> Result<Self, ConfigError> {
        let base_url = match lookup("FRONTEND_URL") {
            Some(url) => url,
            None if environment.is_production() => {
                return Err(ConfigError::Missing("FRONTEND_URL"));
            }
            None => "http://localhost:3000".to_string(),
        };

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}
