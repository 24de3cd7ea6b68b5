//! Pure projection of `SessionState` into a view tree.
//!
//! `build_view` decides what is on screen; `render_html` and `render_text`
//! only turn that tree into markup or terminal text.

mod html;
mod text;


pub use html::render_html;
pub use text::render_text;

use chatdock_ai::Role;
use chatdock_config::WidgetConfig;
use chrono::Local;

use crate::message::ChatMessage;
use crate::state::SessionState;

pub const SEND_HINT: &str = "Press Enter to send • Shift+Enter for new line";
pub const THINKING_LABEL: &str = "Thinking";

#[derive(Debug, Clone, PartialEq)]
pub enum WidgetView {
    /// Panel closed: only the launcher button.
    Launcher { title: String },
    Panel(PanelView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub title: String,
    pub model_badge: String,
    /// Shown instead of the list when there are no messages.
    pub greeting: Option<String>,
    pub messages: Vec<MessageView>,
    pub thinking: bool,
    pub input: InputView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Normal,
    Error,
    Notice,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessageView {
    pub role: Role,
    pub kind: MessageKind,
    pub content: String,
    /// Local `HH:MM`.
    pub time: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputView {
    pub placeholder: String,
    pub draft: String,
    pub input_disabled: bool,
    pub send_disabled: bool,
    pub send_label: &'static str,
    pub hint: &'static str,
}

pub fn build_view(state: &SessionState, widget: &WidgetConfig) -> WidgetView {
    if !state.is_open() {
        return WidgetView::Launcher {
            title: format!("Open {}", widget.title),
        };
    }

    let greeting = state
        .messages()
        .is_empty()
        .then(|| widget.greeting.clone());

    WidgetView::Panel(PanelView {
        title: widget.title.clone(),
        model_badge: state.selected_model().badge().to_string(),
        greeting,
        messages: state.messages().iter().map(message_view).collect(),
        thinking: state.is_busy(),
        input: InputView {
            placeholder: widget.placeholder.clone(),
            draft: state.draft_input().to_string(),
            input_disabled: state.is_busy(),
            send_disabled: !state.can_send(),
            send_label: if state.is_busy() { "⟳" } else { "→" },
            hint: SEND_HINT,
        },
    })
}

fn message_view(message: &ChatMessage) -> MessageView {
    let kind = if message.is_error() {
        MessageKind::Error
    } else if message.is_system_notice() {
        MessageKind::Notice
    } else {
        MessageKind::Normal
    };
    MessageView {
        role: message.role(),
        kind,
        content: message.content().to_string(),
        time: message
            .created_at()
            .with_timezone(&Local)
            .format("%H:%M")
            .to_string(),
    }
}
