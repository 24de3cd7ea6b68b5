//! Configuration schema types for Chatdock.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod api;
mod chat;
mod widget;

pub use api::*;
pub use chat::*;
pub use widget::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Chatdock.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatdockConfig {
    pub api: ApiConfig,
    pub chat: ChatConfig,
    pub widget: WidgetConfig,
}
