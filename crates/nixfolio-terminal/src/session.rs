//! Interactive terminal session: line buffer, key handling, output stream.

use nixfolio_types::AppId;
use nixfolio_types::input::{Key, KeyEvent};

use crate::banner;
use crate::completion::{self, last_token, name_prefix};
use crate::interpreter::{CommandOutput, CommandRegistry, Environment};
use crate::prompt;

/// Erases one character on screen.
const ERASE: &str = "\x08 \x08";

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Created, banner not written yet.
    Uninitialized,
    /// Accepting keys.
    Ready,
    /// The terminal window closed. Ignores all input.
    Closed,
}

/// One item of the session's output stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermOutput {
    /// Text for the screen, with `\r\n` line ends and ANSI escapes.
    Write(String),
    /// Erase the visible buffer.
    ClearScreen,
}

/// A terminal attached to a shell.
///
/// The session owns only what is local to one terminal instance: the line
/// buffer and the history cursor. Working directory, history and the
/// nix-shell flag live in the [`ShellState`](crate::ShellState) reached
/// through the [`Environment`] passed to each call.
#[derive(Debug)]
pub struct TerminalSession {
    registry: CommandRegistry,
    state: SessionState,
    buffer: String,
    /// Steps back from the newest history entry; `None` when not recalling.
    history_index: Option<usize>,
    output: Vec<TermOutput>,
}

impl TerminalSession {
    pub fn new() -> Self {
        Self::with_registry(CommandRegistry::with_builtins())
    }

    pub fn with_registry(registry: CommandRegistry) -> Self {
        Self {
            registry,
            state: SessionState::Uninitialized,
            buffer: String::new(),
            history_index: None,
            output: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The line typed so far.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Write the banner and first prompt. Only the first call does anything.
    pub fn start(&mut self, env: &mut Environment<'_>) {
        if self.state != SessionState::Uninitialized {
            return;
        }
        self.write(&crlf(&banner::fastfetch(env.shell)));
        self.write("\r\n");
        self.prompt(env);
        self.state = SessionState::Ready;
        log::info!("terminal session started in {}", env.shell.cwd);
    }

    /// Tear the session down. Further input is ignored.
    pub fn close(&mut self) {
        if self.state != SessionState::Closed {
            log::info!("terminal session closed");
        }
        self.state = SessionState::Closed;
        self.buffer.clear();
        self.history_index = None;
    }

    /// Take everything written since the last drain.
    pub fn drain_output(&mut self) -> Vec<TermOutput> {
        std::mem::take(&mut self.output)
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, event: KeyEvent, env: &mut Environment<'_>) {
        if self.state != SessionState::Ready {
            return;
        }
        match event.key {
            Key::Enter => self.enter(env),
            Key::Backspace => {
                if self.buffer.pop().is_some() {
                    self.write(ERASE);
                }
            }
            Key::ArrowUp => self.recall_older(env),
            Key::ArrowDown => self.recall_newer(env),
            Key::Tab => self.complete(env),
            Key::Char(c) if !event.modifiers.blocks_text() && !c.is_control() => {
                self.buffer.push(c);
                self.write(c.encode_utf8(&mut [0; 4]));
            }
            _ => {}
        }
    }

    fn enter(&mut self, env: &mut Environment<'_>) {
        self.write("\r\n");
        let line = self.buffer.trim().to_string();
        if !line.is_empty() {
            match self.registry.execute(&line, env) {
                CommandOutput::Clear => self.output.push(TermOutput::ClearScreen),
                CommandOutput::Text(text) if !text.is_empty() => {
                    self.write(&crlf(&text));
                    self.write("\r\n");
                }
                CommandOutput::Text(_) | CommandOutput::None => {}
            }
            self.history_index = None;
        }
        self.buffer.clear();

        if !env.windows.is_open(AppId::Terminal) {
            self.close();
            return;
        }
        self.prompt(env);
    }

    fn recall_older(&mut self, env: &Environment<'_>) {
        let next = self.history_index.map_or(0, |i| i + 1);
        if let Some(entry) = env.shell.recall(next) {
            let entry = entry.to_string();
            self.history_index = Some(next);
            self.replace_buffer(entry);
        }
    }

    fn recall_newer(&mut self, env: &Environment<'_>) {
        match self.history_index {
            None => {}
            Some(0) => {
                self.history_index = None;
                self.replace_buffer(String::new());
            }
            Some(i) => {
                let entry = env.shell.recall(i - 1).unwrap_or_default().to_string();
                self.history_index = Some(i - 1);
                self.replace_buffer(entry);
            }
        }
    }

    fn replace_buffer(&mut self, text: String) {
        let erase = ERASE.repeat(self.buffer.chars().count());
        self.write(&erase);
        self.write(&text);
        self.buffer = text;
    }

    fn complete(&mut self, env: &Environment<'_>) {
        let suggestions = completion::suggest(&self.buffer, &self.registry, env.vfs, &env.shell.cwd);
        match suggestions.as_slice() {
            [] => {}
            [only] => {
                let typed = name_prefix(last_token(&self.buffer)).len();
                let rest = only.get(typed..).unwrap_or_default().to_string();
                self.buffer.push_str(&rest);
                self.write(&rest);
            }
            many => {
                let listing = format!("\r\n{}\r\n", many.join("  "));
                self.write(&listing);
                self.prompt(env);
                let buffer = self.buffer.clone();
                self.write(&buffer);
            }
        }
    }

    fn prompt(&mut self, env: &Environment<'_>) {
        self.write(&prompt::render(env.shell));
    }

    fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        // Coalesce adjacent writes.
        if let Some(TermOutput::Write(last)) = self.output.last_mut() {
            last.push_str(text);
        } else {
            self.output.push(TermOutput::Write(text.to_string()));
        }
    }
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert bare `\n` line ends to `\r\n`.
fn crlf(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\n', "\r\n")
}
