//! Interpretation of the response shapes the backend returns.
//!
//! The backend has answered in several shapes over time: a Messages-API
//! style list of content blocks, a bare `analysis` string, a `message`
//! string, or a JSON string as the whole body. They are tried in that
//! order and the first one present wins.

use serde_json::Value;

use crate::AiError;

/// Parse a raw response body as JSON.
pub fn parse_body(text: &str) -> Result<Value, AiError> {
    serde_json::from_str(text).map_err(|e| AiError::Parse(e.to_string()))
}

/// Extract the assistant's text from a response body.
pub fn interpret_response(body: &Value) -> Result<String, AiError> {
    if let Some(blocks) = body
        .get("content")
        .and_then(Value::as_array)
        .filter(|blocks| !blocks.is_empty())
    {
        let text = blocks
            .iter()
            .filter(|b| b["type"] == "text")
            .filter_map(|b| b["text"].as_str())
            .collect::<Vec<_>>()
            .join("\n");
        return Ok(text);
    }

    if let Some(analysis) = body.get("analysis").and_then(Value::as_str) {
        return Ok(analysis.to_string());
    }

    if let Some(message) = body.get("message").and_then(Value::as_str) {
        return Ok(message.to_string());
    }

    if let Some(text) = body.as_str() {
        return Ok(text.to_string());
    }

    Err(AiError::UnexpectedResponse)
}
