use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failure to assemble a chat session from its configuration.
#[derive(Debug, thiserror::Error)]
pub enum ChatdockError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The HTTP transport could not be constructed.
    #[error("network error: {0}")]
    Network(String),
}
