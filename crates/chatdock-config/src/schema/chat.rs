//! Conversation behavior configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are an AI assistant integrated into an F1 card \
collection tracking application. Be helpful and knowledgeable about F1 cards, collecting, \
grading, and card values. Keep responses concise and relevant.";

/// Model selection, history window, and credential lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Wire id of the model selected at startup.
    pub default_model: String,
    /// How many stored messages precede the new one in a request.
    pub history_limit: u32,
    /// Used when no context provider is installed or it fails.
    pub default_system_prompt: String,
    /// Storage slot holding the bearer credential.
    pub credential_slot: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            default_model: chatdock_common::ModelId::default().wire_id().into(),
            history_limit: 10,
            default_system_prompt: DEFAULT_SYSTEM_PROMPT.into(),
            credential_slot: "f1-token".into(),
        }
    }
}
