//! Per-shell mutable state.

use nixfolio_types::config::DesktopConfig;

/// Everything a shell remembers between commands.
///
/// One value per independent shell. Builtins see it through
/// [`Environment::shell`](crate::Environment).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    /// Absolute, normalized working directory.
    pub cwd: String,
    /// Every non-empty line entered, oldest first.
    pub history: Vec<String>,
    /// Toggled by `nix-shell`; only changes the prompt.
    pub nix_shell: bool,
    pub user: String,
    pub hostname: String,
    pub home: String,
}

impl ShellState {
    /// A fresh shell sitting in `home`.
    pub fn new(user: impl Into<String>, hostname: impl Into<String>, home: impl Into<String>) -> Self {
        let home = home.into();
        Self {
            cwd: home.clone(),
            history: Vec::new(),
            nix_shell: false,
            user: user.into(),
            hostname: hostname.into(),
            home,
        }
    }

    pub fn from_config(config: &DesktopConfig) -> Self {
        Self::new(&config.user, &config.hostname, &config.home)
    }

    /// History entry `back` steps from the newest (0 = newest).
    pub fn recall(&self, back: usize) -> Option<&str> {
        let idx = self.history.len().checked_sub(back + 1)?;
        self.history.get(idx).map(String::as_str)
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::from_config(&DesktopConfig::default())
    }
}
