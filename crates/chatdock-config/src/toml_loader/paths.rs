//! Where the config file lives.

use chatdock_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::info;

use super::template::default_config_toml;

/// `<config dir>/chatdock/config.toml`, with the config dir taken from
/// [`dirs::config_dir`].
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("chatdock").join("config.toml"))
        .ok_or_else(|| ConfigError::ParseError("no config directory on this platform".into()))
}

/// Write the template to `path`, creating parent directories. Overwrites.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
    }
    std::fs::write(path, default_config_toml()).map_err(|e| io_error(path, e))?;

    info!("wrote config template to {}", path.display());
    Ok(())
}

fn io_error(path: &Path, e: std::io::Error) -> ConfigError {
    ConfigError::ParseError(format!("cannot write {}: {e}", path.display()))
}
