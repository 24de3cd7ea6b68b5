//! Panel copy and initial visibility.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub title: String,
    pub greeting: String,
    pub placeholder: String,
    pub start_open: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            title: "AI Assistant".into(),
            greeting: "Hi! I'm your F1 card collection assistant. I can help you with card \
                       values, collecting tips, and questions about your collection."
                .into(),
            placeholder: "Ask about your collection...".into(),
            start_open: false,
        }
    }
}
