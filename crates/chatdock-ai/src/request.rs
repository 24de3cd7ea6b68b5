//! Request body for the chat endpoint.

use serde::Serialize;

use crate::{Message, ModelId};

/// JSON body POSTed to the chat endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: ModelId,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    pub messages: Vec<Message>,
}

impl ChatRequest {
    /// Build a request from prior history plus the new user message.
    pub fn new(
        model: ModelId,
        max_tokens: u32,
        system: Option<String>,
        history: Vec<Message>,
        user_message: impl Into<String>,
    ) -> Self {
        let mut messages = history;
        messages.push(Message::user(user_message));
        Self {
            model,
            max_tokens,
            system,
            messages,
        }
    }

    /// Reduced body used after an unsuccessful primary call: same model and
    /// token limit, no system prompt, only the newest message.
    pub fn fallback(&self) -> Self {
        Self {
            model: self.model,
            max_tokens: self.max_tokens,
            system: None,
            messages: self.messages.last().cloned().into_iter().collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!(self)
    }
}
