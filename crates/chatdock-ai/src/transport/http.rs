//! `reqwest`-backed transport.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::{ChatTransport, TransportResponse};
use crate::{AiError, Headers};

pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(connect_timeout: Duration, timeout: Duration) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .build()
            .map_err(|e| AiError::Transport(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http })
    }
}

/// reqwest appends `for url (...)` to its messages; the URL is dropped so
/// a port or path like `:5000` cannot steer error classification.
fn transport_error(e: reqwest::Error) -> AiError {
    AiError::Transport(e.without_url().to_string())
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn post_json(
        &self,
        url: &str,
        headers: &Headers,
        body: &serde_json::Value,
    ) -> Result<TransportResponse, AiError> {
        let mut request = self.http.post(url);
        // Headers go first so the auth provider's Content-Type is kept.
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(transport_error)?;

        debug!(status, bytes = text.len(), "chat endpoint responded");
        Ok(TransportResponse { status, body: text })
    }
}
