//! Maps failure text to the message shown in the chat panel.
//!
//! Classification inspects the error's text for substrings, so a status
//! code appearing anywhere in an error body (or a URL) can steer the
//! result. Callers holding a structured `AiError::Status` still go through
//! here to keep the wording consistent across failure kinds.

/// User-facing failure category, in match precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Authentication,
    RateLimited,
    Unavailable,
    Server,
    Network,
    Generic,
}

pub const AUTHENTICATION_ERROR: &str = "Authentication error. Please sign in again.";
pub const RATE_LIMIT_ERROR: &str = "Rate limit exceeded. Please wait a moment and try again.";
pub const UNAVAILABLE_ERROR: &str =
    "The assistant service is unavailable right now. Please try again later.";
pub const SERVER_ERROR: &str = "The assistant service hit a server error. Please try again later.";
pub const NETWORK_ERROR: &str = "Network error. Please check your connection and try again.";
pub const GENERIC_ERROR: &str = "Sorry, I encountered an error. Please try again.";

const NETWORK_MARKERS: [&str; 5] = [
    "fetch",
    "network",
    "connect",
    "timed out",
    "error sending request",
];

impl ErrorCategory {
    pub fn user_message(self) -> &'static str {
        match self {
            ErrorCategory::Authentication => AUTHENTICATION_ERROR,
            ErrorCategory::RateLimited => RATE_LIMIT_ERROR,
            ErrorCategory::Unavailable => UNAVAILABLE_ERROR,
            ErrorCategory::Server => SERVER_ERROR,
            ErrorCategory::Network => NETWORK_ERROR,
            ErrorCategory::Generic => GENERIC_ERROR,
        }
    }
}

/// Classify raw error text. First match wins: 401, 429, 404, 500, then
/// network-indicative wording, else generic.
pub fn classify(error_text: &str) -> ErrorCategory {
    if error_text.contains("401") {
        return ErrorCategory::Authentication;
    }
    if error_text.contains("429") {
        return ErrorCategory::RateLimited;
    }
    if error_text.contains("404") {
        return ErrorCategory::Unavailable;
    }
    if error_text.contains("500") {
        return ErrorCategory::Server;
    }
    let lower = error_text.to_lowercase();
    if NETWORK_MARKERS.iter().any(|m| lower.contains(m)) {
        return ErrorCategory::Network;
    }
    ErrorCategory::Generic
}
