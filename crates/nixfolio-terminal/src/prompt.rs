//! Two-line prompt: working directory, then the input marker.

use crate::ansi::{BOLD, FOAM, RESET};
use crate::shell::ShellState;

/// `cwd` with a leading home directory shown as `~`.
///
/// Only whole path components are replaced, so `/home/hetavx` stays as is.
pub fn display_path(cwd: &str, home: &str) -> String {
    match cwd.strip_prefix(home) {
        Some("") => "~".to_string(),
        Some(rest) if rest.starts_with('/') && home != "/" => format!("~{rest}"),
        _ => cwd.to_string(),
    }
}

/// The prompt written after each command.
pub fn render(shell: &ShellState) -> String {
    let path = display_path(&shell.cwd, &shell.home);
    let nix = if shell.nix_shell {
        format!(" {BOLD}[nix]{RESET}")
    } else {
        String::new()
    };
    format!("{FOAM}{BOLD}{path}{RESET}{nix}\r\n{FOAM}❯{RESET} ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_is_tilde() {
        assert_eq!(display_path("/home/hetav", "/home/hetav"), "~");
        assert_eq!(display_path("/home/hetav/projects", "/home/hetav"), "~/projects");
    }

    #[test]
    fn outside_home_is_verbatim() {
        assert_eq!(display_path("/", "/home/hetav"), "/");
        assert_eq!(display_path("/home", "/home/hetav"), "/home");
    }

    #[test]
    fn partial_component_is_not_abbreviated() {
        assert_eq!(display_path("/home/hetavx", "/home/hetav"), "/home/hetavx");
    }

    #[test]
    fn nix_marker_follows_flag() {
        let mut shell = ShellState::default();
        assert!(!render(&shell).contains("[nix]"));
        shell.nix_shell = true;
        let p = render(&shell);
        assert!(p.contains("[nix]"));
        assert!(p.ends_with("❯\x1b[0m "));
        assert!(p.contains("\x1b[1m~\x1b[0m"));
    }
}
