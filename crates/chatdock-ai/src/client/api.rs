//! Request/response exchange with the fallback retry.

use std::sync::Arc;

use tracing::{debug, warn};

use super::config::ClientConfig;
use crate::response::{interpret_response, parse_body};
use crate::transport::{ChatTransport, HttpTransport};
use crate::{AiError, ChatRequest, Headers};

/// Assistant text plus which request produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    pub used_fallback: bool,
}

pub struct ChatClient {
    config: ClientConfig,
    transport: Arc<dyn ChatTransport>,
}

impl ChatClient {
    pub fn new(config: ClientConfig, transport: Arc<dyn ChatTransport>) -> Self {
        Self { config, transport }
    }

    /// Client backed by a `reqwest` transport using the configured timeouts.
    pub fn with_http(config: ClientConfig) -> Result<Self, AiError> {
        let transport = HttpTransport::new(config.connect_timeout, config.timeout)?;
        Ok(Self::new(config, Arc::new(transport)))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send `request`; on an unsuccessful status retry once with
    /// [`ChatRequest::fallback`]. Transport failures and unreadable
    /// responses are returned without a retry.
    pub async fn complete(
        &self,
        request: &ChatRequest,
        headers: &Headers,
    ) -> Result<Completion, AiError> {
        match self.send(request, headers).await {
            Ok(text) => Ok(Completion {
                text,
                used_fallback: false,
            }),
            Err(AiError::Status { status, body }) => {
                warn!(status, %body, "primary chat request failed, trying fallback");
                let text = self.send(&request.fallback(), headers).await?;
                Ok(Completion {
                    text,
                    used_fallback: true,
                })
            }
            Err(e) => Err(e),
        }
    }

    async fn send(&self, request: &ChatRequest, headers: &Headers) -> Result<String, AiError> {
        let body = request.to_json();
        debug!(model = %request.model, messages = request.messages.len(), %body, "chat request");

        let response = self
            .transport
            .post_json(&self.config.endpoint_url, headers, &body)
            .await?;

        if !response.is_success() {
            return Err(AiError::status(response.status, &response.body));
        }

        let json = parse_body(&response.body)?;
        debug!(response = %json, "chat response");
        interpret_response(&json)
    }
}
