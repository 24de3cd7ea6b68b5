//! The send path: preconditions, request construction, reconciliation.

use chatdock_ai::{AiError, ChatRequest};
use tracing::{debug, info, warn};

use super::guard::BusyGuard;
use super::manager::ChatSession;
use crate::message::ChatMessage;

impl ChatSession {
    /// Send `text` as a user message and append the assistant's reply.
    ///
    /// No-op if `text` is blank or a send is already in flight. Without a
    /// credential nothing is sent and an authentication error is appended
    /// instead. Otherwise exactly one user message and then exactly one
    /// assistant message (the reply or a friendly error) are appended.
    /// Failures never propagate to the caller.
    pub async fn send_message(&self, text: &str) {
        if text.trim().is_empty() {
            return;
        }
        let busy = self.lock().is_busy;
        if busy {
            debug!("send ignored, session is busy");
            return;
        }

        let headers = match self.auth.headers() {
            Ok(headers) => headers,
            Err(e) => {
                warn!("chat message not sent: {e}");
                let notice = AiError::MissingCredential.category().user_message();
                self.update(|s| s.messages.push(ChatMessage::error(notice)));
                return;
            }
        };

        let limit = self.settings.history_limit;
        let Some((busy, (model, history))) = BusyGuard::acquire(&self.state, |s| {
            let history = s.history(limit);
            s.messages.push(ChatMessage::user(text));
            s.draft_input.clear();
            (s.selected_model, history)
        }) else {
            debug!("send ignored, another send started first");
            return;
        };
        self.render();

        let request = ChatRequest::new(
            model,
            self.settings.max_tokens,
            Some(self.system_prompt()),
            history,
            text,
        );

        let reply = match self.client.complete(&request, &headers).await {
            Ok(completion) => {
                if completion.used_fallback {
                    info!("reply came from the history-less fallback request");
                }
                ChatMessage::assistant(completion.text)
            }
            Err(e) => {
                let category = e.category();
                warn!(error = %e, ?category, "chat request failed");
                ChatMessage::error(category.user_message())
            }
        };

        self.lock().messages.push(reply);
        drop(busy);
        self.render();
    }

    /// System prompt from the context provider, or the configured default
    /// when there is no provider or it fails.
    fn system_prompt(&self) -> String {
        let Some(ref provider) = self.context else {
            return self.settings.default_system_prompt.clone();
        };
        match provider.system_prompt() {
            Ok(prompt) => prompt,
            Err(e) => {
                warn!("{e}, using default system prompt");
                self.settings.default_system_prompt.clone()
            }
        }
    }
}
