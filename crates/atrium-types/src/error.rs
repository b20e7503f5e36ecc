//! Error types for the Atrium shell.

use std::io;

/// Errors produced by the Atrium framework.
#[derive(Debug, thiserror::Error)]
pub enum AtriumError {
    #[error("scene error: {0}")]
    Scene(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("service error: {0}")]
    Service(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, AtriumError>;
