//! HTML fragment for embedding the widget in a page or webview.

use std::fmt::Write;

use chatdock_ai::Role;

use super::{MessageKind, MessageView, PanelView, WidgetView, THINKING_LABEL};

/// Escape text for use in element content and quoted attributes.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn disabled(flag: bool) -> &'static str {
    if flag {
        " disabled"
    } else {
        ""
    }
}

pub fn render_html(view: &WidgetView) -> String {
    match view {
        WidgetView::Launcher { title } => format!(
            r#"<button class="chatdock-launcher" data-action="toggle" title="{}">🤖</button>"#,
            escape(title)
        ),
        WidgetView::Panel(panel) => render_panel(panel),
    }
}

fn render_panel(panel: &PanelView) -> String {
    let mut html = String::new();
    html.push_str(r#"<div class="chatdock-panel">"#);

    let _ = write!(
        html,
        concat!(
            r#"<div class="chatdock-header">"#,
            r#"<span class="chatdock-title">{}</span>"#,
            r#"<span class="chatdock-badge">{}</span>"#,
            r#"<button data-action="clear" title="Clear chat">🗑️</button>"#,
            r#"<button data-action="toggle" title="Minimize">✕</button>"#,
            "</div>"
        ),
        escape(&panel.title),
        escape(&panel.model_badge)
    );

    html.push_str(r#"<div class="chatdock-messages">"#);
    if let Some(ref greeting) = panel.greeting {
        let _ = write!(
            html,
            r#"<div class="chatdock-greeting">{}</div>"#,
            escape(greeting)
        );
    }
    for message in &panel.messages {
        render_message(&mut html, message);
    }
    if panel.thinking {
        let _ = write!(
            html,
            r#"<div class="chatdock-msg assistant thinking">{THINKING_LABEL}…</div>"#
        );
    }
    html.push_str("</div>");

    let input = &panel.input;
    let _ = write!(
        html,
        concat!(
            r#"<div class="chatdock-input">"#,
            r#"<textarea placeholder="{}" rows="1"{}>{}</textarea>"#,
            r#"<button data-action="send"{}>{}</button>"#,
            r#"<div class="chatdock-hint">{}</div>"#,
            "</div>"
        ),
        escape(&input.placeholder),
        disabled(input.input_disabled),
        escape(&input.draft),
        disabled(input.send_disabled),
        input.send_label,
        escape(input.hint)
    );

    html.push_str("</div>");
    html
}

fn render_message(html: &mut String, message: &MessageView) {
    let role = match message.role {
        Role::User => "user",
        Role::Assistant => "assistant",
    };
    let kind = match message.kind {
        MessageKind::Normal => "",
        MessageKind::Error => " error",
        MessageKind::Notice => " notice",
    };
    let _ = write!(
        html,
        concat!(
            r#"<div class="chatdock-msg {}{}">"#,
            r#"<div class="chatdock-content">{}</div>"#,
            r#"<div class="chatdock-time">{}</div>"#,
            "</div>"
        ),
        role,
        kind,
        escape(&message.content),
        escape(&message.time)
    );
}
