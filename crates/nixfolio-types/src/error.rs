//! Error types for nixfolio.

use std::io;

/// Errors produced by the nixfolio framework.
///
/// User-facing shell messages live in `nixfolio_terminal::ShellError`; this
/// enum covers configuration, loading and lookup failures.
#[derive(Debug, thiserror::Error)]
pub enum NixfolioError {
    #[error("VFS error: {0}")]
    Vfs(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("application '{0}' not found")]
    UnknownApp(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, NixfolioError>;
