//! 시스템 엔드포인트 DTO

use chrono::{DateTime, Utc};
use serde::Serialize;

/// `GET /ping` 응답
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub pong: bool,
    pub timestamp: DateTime<Utc>,
}

impl PingResponse {
    pub fn now() -> Self {
        Self {
            pong: true,
            timestamp: Utc::now(),
        }
    }
}
