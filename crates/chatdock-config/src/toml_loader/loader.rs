//! Reading `config.toml` into a [`ChatdockConfig`].

use crate::schema::ChatdockConfig;
use crate::validation;
use chatdock_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Parse the file at `path`. Absent keys keep their defaults.
///
/// Out-of-range values only produce a `warn!` here; [`crate::load_config_from`]
/// is the strict entry point.
pub fn load_from_path(path: &Path) -> Result<ChatdockConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "cannot read {}: {e}",
                path.display()
            )));
        }
    };

    let config: ChatdockConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;

    if let Err(e) = validation::validate(&config) {
        warn!("{}: {e}", path.display());
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// [`load_or_create`] at [`default_config_path`].
pub fn load_default() -> Result<ChatdockConfig, ConfigError> {
    load_or_create(&default_config_path()?)
}

/// First run writes the commented template to `path` and yields defaults.
pub(crate) fn load_or_create(path: &Path) -> Result<ChatdockConfig, ConfigError> {
    match load_from_path(path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config at {}, writing template", path.display());
            create_default_config(path)?;
            Ok(ChatdockConfig::default())
        }
        other => other,
    }
}
