//! Wire protocol for the Chatdock backend.
//!
//! Provides:
//! - the request body sent to the chat endpoint, with its history-less
//!   fallback form
//! - interpretation of the response shapes the backend is known to return
//! - a `ChatTransport` seam with a `reqwest` implementation
//! - the error taxonomy and its user-facing classification

pub mod classify;
pub mod client;
pub mod request;
pub mod response;
pub mod transport;

use std::collections::BTreeMap;

pub use chatdock_common::ModelId;
pub use classify::{classify, ErrorCategory};
pub use client::{ChatClient, ClientConfig, Completion};
pub use request::ChatRequest;
pub use response::interpret_response;
pub use transport::{ChatTransport, HttpTransport, TransportResponse};

/// HTTP header name to value, as produced by an auth provider.
pub type Headers = BTreeMap<String, String>;

/// A message as it appears on the wire: role and content only.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Everything that can go wrong between building a request and reading
/// the assistant's text out of the response.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("authentication credential missing")]
    MissingCredential,
    #[error("network error: {0}")]
    Transport(String),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unexpected response format")]
    UnexpectedResponse,
    #[error("parse error: {0}")]
    Parse(String),
}

impl AiError {
    /// Build a `Status` error, keeping at most 200 characters of the body.
    pub fn status(status: u16, body: &str) -> Self {
        AiError::Status {
            status,
            body: body.chars().take(200).collect(),
        }
    }

    /// Category used to pick the message shown to the user.
    pub fn category(&self) -> ErrorCategory {
        match self {
            AiError::MissingCredential => ErrorCategory::Authentication,
            other => classify(&other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_serializes_role_lowercase() {
        let json = serde_json::to_value(Message::assistant("hi")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "assistant", "content": "hi"}));
    }

    #[test]
    fn status_error_truncates_body() {
        let body = "x".repeat(500);
        let err = AiError::status(502, &body);
        match &err {
            AiError::Status { status, body } => {
                assert_eq!(*status, 502);
                assert_eq!(body.len(), 200);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().starts_with("HTTP 502: "));
    }

    #[test]
    fn missing_credential_is_authentication() {
        assert_eq!(
            AiError::MissingCredential.category(),
            ErrorCategory::Authentication
        );
    }

    #[test]
    fn status_errors_classify_by_code() {
        assert_eq!(
            AiError::status(401, "unauthorized").category(),
            ErrorCategory::Authentication
        );
        assert_eq!(
            AiError::status(429, "slow down").category(),
            ErrorCategory::RateLimited
        );
        assert_eq!(
            AiError::status(404, "").category(),
            ErrorCategory::Unavailable
        );
        assert_eq!(
            AiError::status(500, "boom").category(),
            ErrorCategory::Server
        );
    }

    #[test]
    fn transport_errors_classify_as_network() {
        let err = AiError::Transport("error sending request for url".into());
        assert_eq!(err.category(), ErrorCategory::Network);
    }

    #[test]
    fn unexpected_response_is_generic() {
        assert_eq!(
            AiError::UnexpectedResponse.category(),
            ErrorCategory::Generic
        );
    }
}
