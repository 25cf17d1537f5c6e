//! User-input errors raised by builtins.
//!
//! The `Display` text of each variant is exactly the line the shell prints.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShellError {
    #[error("cd: no such file or directory: {0}")]
    NoSuchDirectory(String),

    #[error("cd: not a directory: {0}")]
    NotADirectory(String),

    #[error("cat: missing file operand")]
    MissingFileOperand,

    #[error("cat: {0}: No such file or directory")]
    NoSuchFile(String),

    #[error("ls: cannot access '{0}': No such file or directory")]
    CannotAccess(String),

    #[error("Error: Cannot access '{0}'")]
    CwdInaccessible(String),

    #[error("open: missing application name")]
    MissingAppName,

    #[error("open: application '{0}' not found")]
    UnknownApp(String),

    #[error("command not found: {0}")]
    CommandNotFound(String),

    #[error("help: no help topics match '{0}'")]
    NoHelpTopic(String),
}

/// Result type returned by builtins.
pub type ShellResult<T> = std::result::Result<T, ShellError>;
