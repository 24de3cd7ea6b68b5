//! HTTP transport seam.
//!
//! The client only needs "POST this JSON with these headers and give me the
//! status and body back". Keeping that behind a trait lets hosts swap the
//! HTTP stack and lets tests script responses without a network.

mod http;

pub use http::HttpTransport;

use async_trait::async_trait;

use crate::{AiError, Headers};

/// Status and raw body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// POST `body` as JSON. A response with any status is `Ok`; only a
    /// failure to complete the exchange is `Err(AiError::Transport)`.
    async fn post_json(
        &self,
        url: &str,
        headers: &Headers,
        body: &serde_json::Value,
    ) -> Result<TransportResponse, AiError>;
}
