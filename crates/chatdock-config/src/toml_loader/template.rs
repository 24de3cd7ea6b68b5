//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Chatdock Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[api]
# base_url = "https://f1-card-tracker-backend-1.onrender.com"
# path = "/api/recognize"
# max_tokens = 1500          # 1-8192
# connect_timeout_secs = 10  # 1-600
# timeout_secs = 120         # 1-600

[chat]
# default_model = "claude-3-haiku-20240307"
#   one of: claude-sonnet-4-20250514, claude-3-7-sonnet-20250219,
#           claude-opus-4-20250514, claude-3-haiku-20240307
# history_limit = 10         # 0-100
# credential_slot = "f1-token"
# default_system_prompt = "You are an AI assistant ..."

[widget]
# title = "AI Assistant"
# greeting = "Hi! I'm your F1 card collection assistant. ..."
# placeholder = "Ask about your collection..."
# start_open = false
"##
    .to_string()
}
