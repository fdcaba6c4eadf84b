//! Google 사용자 정보 모델

use serde::{Deserialize, Serialize};

/// `oauth2/v2/userinfo` 응답
///
/// 프로필 권한 범위에 따라 일부 필드가 빠질 수 있으므로 `id` 외에는 기본값을 허용합니다.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct GoogleUserInfo {
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub picture: Option<String>,
}
