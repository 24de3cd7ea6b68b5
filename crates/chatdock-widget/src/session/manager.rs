//! Session struct and the synchronous state operations.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chatdock_ai::{ChatClient, ModelId};
use tracing::{debug, info};

use crate::message::ChatMessage;
use crate::providers::{AuthProvider, ContextProvider};
use crate::state::SessionState;

/// Called with a fresh snapshot whenever the state changes.
pub type RenderHook = Box<dyn Fn(&SessionState) + Send + Sync>;

/// Request settings fixed at construction.
#[derive(Debug, Clone)]
pub(crate) struct SendSettings {
    pub(crate) max_tokens: u32,
    pub(crate) history_limit: usize,
    pub(crate) default_system_prompt: String,
}

/// The only writer of `SessionState`.
///
/// All methods take `&self`; the state lock is never held across an
/// `.await`, so a session can be shared between tasks.
pub struct ChatSession {
    pub(super) state: Mutex<SessionState>,
    pub(super) client: ChatClient,
    pub(super) context: Option<Arc<dyn ContextProvider>>,
    pub(super) auth: Arc<dyn AuthProvider>,
    pub(super) on_render: Option<RenderHook>,
    pub(super) settings: SendSettings,
}

impl ChatSession {
    pub(super) fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current state for readers.
    pub fn snapshot(&self) -> SessionState {
        self.lock().clone()
    }

    pub(super) fn render(&self) {
        if let Some(ref hook) = self.on_render {
            let snapshot = self.snapshot();
            hook(&snapshot);
        }
    }

    pub(super) fn update<T>(&self, f: impl FnOnce(&mut SessionState) -> T) -> T {
        let value = f(&mut *self.lock());
        self.render();
        value
    }

    /// Empty the transcript. Other fields are untouched.
    pub fn clear(&self) {
        debug!("clearing chat transcript");
        self.update(|s| s.messages.clear());
    }

    /// Flip the panel between open and closed; returns the new value.
    pub fn toggle_open(&self) -> bool {
        self.update(|s| {
            s.is_open = !s.is_open;
            s.is_open
        })
    }

    /// Switch model for subsequent sends and note the switch in the
    /// transcript. A send already in flight keeps the model it started with.
    pub fn select_model(&self, model: ModelId) {
        info!(model = %model, "switching model");
        self.update(|s| {
            s.selected_model = model;
            s.messages.push(ChatMessage::notice(format!(
                "Switched to {}.",
                model.display_name()
            )));
        });
    }

    /// Replace the draft input.
    pub fn set_draft(&self, text: impl Into<String>) {
        let text = text.into();
        self.update(|s| s.draft_input = text);
    }

    /// Keyboard handling for the input control: Enter sends the draft,
    /// Shift+Enter inserts a newline. Returns whether the key was consumed.
    pub async fn handle_key(&self, key: &str, shift: bool) -> bool {
        if key != "Enter" {
            return false;
        }
        if shift {
            self.update(|s| s.draft_input.push('\n'));
        } else {
            self.send_draft().await;
        }
        true
    }

    /// Send whatever is in the draft. No-op when blank or busy.
    pub async fn send_draft(&self) {
        let draft = {
            let state = self.lock();
            if !state.can_send() {
                return;
            }
            state.draft_input.clone()
        };
        self.send_message(&draft).await;
    }
}
