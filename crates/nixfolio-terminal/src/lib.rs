//! Virtual shell: command interpreter, tab completion and terminal session.
//!
//! The shell is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered by name. The interpreter splits input
//! lines, resolves the command name, and dispatches `execute()` against an
//! `Environment` holding the filesystem, the window operations and the
//! `ShellState`. A `TerminalSession` turns key presses into lines and
//! writes the results as a terminal output stream.

pub mod ansi;
mod banner;
mod commands;
pub mod completion;
mod error;
mod interpreter;
pub mod prompt;
mod session;
mod shell;

/// Render the `fastfetch` banner for a shell.
pub use banner::fastfetch;
/// Register all built-in commands into a registry.
pub use commands::register_builtins;
/// Tab-completion candidates for a partial line.
pub use completion::suggest;
/// User-input error with the exact message the shell prints.
pub use error::{ShellError, ShellResult};
/// A single executable command trait.
pub use interpreter::Command;
/// Output produced by a command (text, nothing, or the clear signal).
pub use interpreter::CommandOutput;
/// Registry of available commands with dispatch.
pub use interpreter::CommandRegistry;
/// What a command may touch while it runs.
pub use interpreter::Environment;
/// Interactive session over a shell.
pub use session::{SessionState, TermOutput, TerminalSession};
/// Working directory, history and nix-shell flag of one shell.
pub use shell::ShellState;
