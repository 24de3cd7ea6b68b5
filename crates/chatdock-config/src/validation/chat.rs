use std::sync::OnceLock;

use chatdock_common::ModelId;
use regex::Regex;

use crate::schema::ChatdockConfig;

use super::helpers::validate_range;

fn slot_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9_.\-]+$").expect("static regex"))
}

/// Validate model, history window, and credential slot.
pub(crate) fn validate_chat(errors: &mut Vec<String>, config: &ChatdockConfig) {
    let chat = &config.chat;
    validate_range(errors, "chat.history_limit", chat.history_limit, 0, 100);

    if let Err(e) = chat.default_model.parse::<ModelId>() {
        errors.push(format!("chat.default_model: {e}"));
    }

    if !slot_pattern().is_match(&chat.credential_slot) {
        errors.push(format!(
            "chat.credential_slot = {:?} may only contain letters, digits, '.', '_' and '-'",
            chat.credential_slot
        ));
    }
}
