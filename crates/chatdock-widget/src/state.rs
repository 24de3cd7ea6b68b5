//! Widget state owned by a `ChatSession`.

use chatdock_ai::{Message, ModelId};

use crate::message::ChatMessage;

#[derive(Debug, Clone)]
pub struct SessionState {
    pub(crate) is_open: bool,
    pub(crate) messages: Vec<ChatMessage>,
    pub(crate) draft_input: String,
    pub(crate) is_busy: bool,
    pub(crate) selected_model: ModelId,
}

impl SessionState {
    pub fn new(selected_model: ModelId) -> Self {
        Self {
            is_open: false,
            messages: Vec::new(),
            draft_input: String::new(),
            is_busy: false,
            selected_model,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn draft_input(&self) -> &str {
        &self.draft_input
    }

    pub fn is_busy(&self) -> bool {
        self.is_busy
    }

    pub fn selected_model(&self) -> ModelId {
        self.selected_model
    }

    /// Whether the send control should be enabled for the current draft.
    pub fn can_send(&self) -> bool {
        !self.is_busy && !self.draft_input.trim().is_empty()
    }

    /// Wire history for the next request: the last `limit` stored messages,
    /// with system notices dropped.
    pub(crate) fn history(&self, limit: usize) -> Vec<Message> {
        let start = self.messages.len().saturating_sub(limit);
        self.messages[start..]
            .iter()
            .filter_map(ChatMessage::to_wire)
            .collect()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(ModelId::default())
    }
}
