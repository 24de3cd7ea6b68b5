//! Full configuration validation.
//!
//! Each section has its own validator; this orchestrator calls them all and
//! collects every problem into a single `ConfigError`.

mod api;
mod chat;
mod helpers;


use crate::schema::ChatdockConfig;
use chatdock_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ChatdockConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    api::validate_api(&mut errors, config);
    chat::validate_chat(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
