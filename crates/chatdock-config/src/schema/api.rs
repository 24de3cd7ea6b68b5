//! Remote endpoint configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://f1-card-tracker-backend-1.onrender.com";
pub const DEFAULT_API_PATH: &str = "/api/recognize";
pub const DEFAULT_MAX_TOKENS: u32 = 1500;

/// Where requests go and how long the transport may wait for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub path: String,
    pub max_tokens: u32,
    pub connect_timeout_secs: u32,
    pub timeout_secs: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            path: DEFAULT_API_PATH.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            connect_timeout_secs: 10,
            timeout_secs: 120,
        }
    }
}

impl ApiConfig {
    /// Full endpoint URL: base URL joined with the path, one slash between.
    pub fn endpoint_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.path.trim_start_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{path}")
        }
    }
}
