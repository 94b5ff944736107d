//! Authentication messages
//!
//! Bodies for `POST /api/rest/2.0/auth/token/full`.

use serde::{Deserialize, Serialize};

/// Default token lifetime requested from the server
pub const DEFAULT_TOKEN_VALIDITY_SECS: u32 = 3000;

/// Request for a full access token using username and password
#[derive(Serialize, Clone, Debug)]
pub struct FullTokenRequest {
    pub username: String,
    pub password: String,
    pub validity_time_in_sec: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<i64>,
}

/// Token issued by the server
#[derive(Deserialize, Clone, Debug)]
pub struct TokenResponse {
    pub token: String,
    #[serde(default)]
    pub creation_time_in_millis: Option<u64>,
    #[serde(default)]
    pub expiration_time_in_millis: Option<u64>,
    #[serde(default)]
    pub valid_for_user_id: Option<String>,
    #[serde(default)]
    pub valid_for_username: Option<String>,
}
