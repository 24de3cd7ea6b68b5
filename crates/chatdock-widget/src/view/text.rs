//! Plain-text rendering for terminal hosts.

use chatdock_ai::Role;

use super::{MessageKind, WidgetView, THINKING_LABEL};

pub fn render_text(view: &WidgetView) -> String {
    let panel = match view {
        WidgetView::Launcher { title } => return format!("[🤖 {title}]\n"),
        WidgetView::Panel(panel) => panel,
    };

    let mut out = format!("── {} ({}) ──\n", panel.title, panel.model_badge);

    if let Some(ref greeting) = panel.greeting {
        out.push_str(&format!("👋 {greeting}\n"));
    }

    for message in &panel.messages {
        let who = match (message.role, message.kind) {
            (_, MessageKind::Notice) => "·",
            (_, MessageKind::Error) => "!",
            (Role::User, _) => "you",
            (Role::Assistant, _) => "ai",
        };
        let mut lines = message.content.lines();
        let first = lines.next().unwrap_or("");
        out.push_str(&format!("[{}] {who}: {first}\n", message.time));
        for line in lines {
            out.push_str(&format!("        {line}\n"));
        }
    }

    if panel.thinking {
        out.push_str(&format!("{THINKING_LABEL}...\n"));
    }

    let input = &panel.input;
    if !input.draft.is_empty() {
        out.push_str(&format!("> {}\n", input.draft));
    }
    out.push_str(&format!("{}\n", input.hint));
    out
}
