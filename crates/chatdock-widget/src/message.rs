//! A single entry in the chat transcript.

use chatdock_ai::{Message, Role};
use chatdock_common::MessageId;
use chrono::{DateTime, Utc};

/// Immutable once created; the transcript only ever appends these.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    id: MessageId,
    role: Role,
    content: String,
    created_at: DateTime<Utc>,
    is_error: bool,
    is_system_notice: bool,
}

impl ChatMessage {
    fn new(role: Role, content: String, is_error: bool, is_system_notice: bool) -> Self {
        Self {
            id: MessageId::new(),
            role,
            content,
            created_at: Utc::now(),
            is_error,
            is_system_notice,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content.into(), false, false)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content.into(), false, false)
    }

    /// Assistant-role message synthesized locally after a failed call.
    pub fn error(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content.into(), true, false)
    }

    /// Local notice; never sent to the endpoint.
    pub fn notice(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content.into(), false, true)
    }

    pub fn id(&self) -> &MessageId {
        &self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    pub fn is_system_notice(&self) -> bool {
        self.is_system_notice
    }

    /// Wire form (`{role, content}`), or `None` for system notices.
    pub fn to_wire(&self) -> Option<Message> {
        if self.is_system_notice {
            return None;
        }
        Some(Message {
            role: self.role,
            content: self.content.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_flags() {
        let user = ChatMessage::user("hi");
        assert_eq!(user.role(), Role::User);
        assert!(!user.is_error() && !user.is_system_notice());

        let error = ChatMessage::error("oops");
        assert_eq!(error.role(), Role::Assistant);
        assert!(error.is_error());
        assert!(!error.is_system_notice());

        let notice = ChatMessage::notice("Switched");
        assert_eq!(notice.role(), Role::Assistant);
        assert!(notice.is_system_notice());
        assert!(!notice.is_error());
    }

    #[test]
    fn notices_have_no_wire_form() {
        assert!(ChatMessage::notice("Switched").to_wire().is_none());
        assert_eq!(
            ChatMessage::error("oops").to_wire(),
            Some(Message::assistant("oops"))
        );
    }

    #[test]
    fn each_message_gets_its_own_id() {
        assert_ne!(ChatMessage::user("a").id(), ChatMessage::user("a").id());
    }
}
