//! End-to-end shell scenarios driven through key presses.

use nixfolio_terminal::{Environment, ShellState, TermOutput, TerminalSession};
use nixfolio_types::AppId;
use nixfolio_types::config::Theme;
use nixfolio_types::input::Key;
use nixfolio_vfs::{StaticVfs, Vfs};
use nixfolio_wm::WindowManager;

struct Desk {
    vfs: StaticVfs,
    wm: WindowManager,
    shell: ShellState,
    term: TerminalSession,
}

impl Desk {
    fn boot() -> Self {
        let mut desk = Self {
            vfs: StaticVfs::portfolio(),
            wm: WindowManager::new(Theme::Dark, false),
            shell: ShellState::default(),
            term: TerminalSession::new(),
        };
        desk.wm.open_window(AppId::Terminal);
        let mut env = Environment {
            vfs: &desk.vfs,
            windows: &mut desk.wm,
            shell: &mut desk.shell,
        };
        desk.term.start(&mut env);
        desk.term.drain_output();
        desk
    }

    fn press(&mut self, key: Key) {
        let mut env = Environment {
            vfs: &self.vfs,
            windows: &mut self.wm,
            shell: &mut self.shell,
        };
        self.term.handle_key(key.into(), &mut env);
    }

    /// Type a line, press Enter, and return what the command printed
    /// (between the echoed line and the next prompt).
    fn run(&mut self, line: &str) -> Vec<TermOutput> {
        for c in line.chars() {
            self.press(Key::Char(c));
        }
        self.term.drain_output();
        self.press(Key::Enter);
        self.term.drain_output()
    }

    fn run_text(&mut self, line: &str) -> String {
        let out = self.run(line);
        let [TermOutput::Write(text)] = out.as_slice() else {
            panic!("unexpected output for {line:?}: {out:?}");
        };
        let body = text.strip_prefix("\r\n").unwrap_or(text);
        match body.rfind("\r\n\x1b[38;2;156;207;216m\x1b[1m") {
            Some(end) => body[..end].to_string(),
            None => String::new(),
        }
    }
}

#[test]
fn cd_then_ls_lists_projects() {
    let mut desk = Desk::boot();
    assert_eq!(desk.run_text("cd /home/hetav/projects"), "");
    assert_eq!(desk.shell.cwd, "/home/hetav/projects");
    let listing = desk.run_text("ls");
    let names: Vec<&str> = listing
        .split("  ")
        .map(|n| n.trim_start_matches("\x1b[36m").trim_end_matches("\x1b[0m"))
        .collect();
    assert_eq!(
        names,
        [
            "qna-app",
            "clickify",
            "classroom-desktop",
            "nixos-config",
            "gentoo-dotfiles"
        ]
    );
}

#[test]
fn cat_readme_inside_project() {
    let mut desk = Desk::boot();
    desk.run("cd /home/hetav/projects/clickify");
    let text = desk.run_text("cat README.md");
    let expected = desk
        .vfs
        .root()
        .child("home")
        .and_then(|n| n.child("hetav"))
        .and_then(|n| n.child("projects"))
        .and_then(|n| n.child("clickify"))
        .and_then(|n| n.child("README.md"))
        .and_then(|n| n.content())
        .map(|s| s.replace('\n', "\r\n"));
    assert_eq!(Some(text), expected);
}

#[test]
fn open_files_focuses_with_fresh_z() {
    let mut desk = Desk::boot();
    let before = desk.wm.state().max_z_index;
    assert_eq!(desk.run_text("open files"), "Opening files...");
    let files = desk.wm.state().window(AppId::Files);
    assert!(files.is_open);
    assert_eq!(files.z_index, before + 1);
    assert_eq!(desk.wm.active_window(), Some(AppId::Files));
}

#[test]
fn clear_keeps_history_and_cwd() {
    let mut desk = Desk::boot();
    desk.run("cd documents");
    let history = desk.shell.history.clone();
    let out = desk.run("clear");
    assert!(out.contains(&TermOutput::ClearScreen));
    assert_eq!(desk.shell.cwd, "/home/hetav/documents");
    assert_eq!(desk.shell.history.len(), history.len() + 1);
    assert_eq!(desk.shell.history.last().map(String::as_str), Some("clear"));
}

#[test]
fn banner_is_not_in_history() {
    let mut desk = Desk::boot();
    assert!(desk.shell.history.is_empty());
    assert_eq!(desk.run_text("history"), "history");
}

#[test]
fn help_lists_commands_through_the_session() {
    let mut desk = Desk::boot();
    let text = desk.run_text("help");
    assert!(text.starts_with("\x1b[1mAvailable commands:"));
    assert!(text.contains("fastfetch, neofetch, microfetch"));
    assert!(text.contains("\r\n"));
}

#[test]
fn history_recall_scenario() {
    let mut desk = Desk::boot();
    for l in ["a", "b", "c"] {
        desk.run(l);
    }
    let mut recalled = Vec::new();
    for _ in 0..3 {
        desk.press(Key::ArrowUp);
        recalled.push(desk.term.buffer().to_string());
    }
    assert_eq!(recalled, ["c", "b", "a"]);
    desk.press(Key::ArrowDown);
    assert_eq!(desk.term.buffer(), "b");
}

#[test]
fn cat_on_directory_always_fails() {
    let mut desk = Desk::boot();
    for dir in ["/", "/home", "projects", "projects/qna-app", "."] {
        assert_eq!(
            desk.run_text(&format!("cat {dir}")),
            format!("cat: {dir}: No such file or directory")
        );
    }
}

#[test]
fn state_survives_a_new_session() {
    let mut desk = Desk::boot();
    desk.run("cd projects");
    desk.run("nix-shell");
    desk.run("exit");
    assert!(!desk.wm.state().window(AppId::Terminal).is_open);

    desk.wm.open_window(AppId::Terminal);
    desk.term = TerminalSession::new();
    let mut env = Environment {
        vfs: &desk.vfs,
        windows: &mut desk.wm,
        shell: &mut desk.shell,
    };
    desk.term.start(&mut env);
    let out = desk.term.drain_output();
    let [TermOutput::Write(text)] = out.as_slice() else {
        panic!("{out:?}");
    };
    assert!(text.contains("~/projects"));
    assert!(text.contains("[nix]"));
    assert_eq!(desk.shell.history.len(), 3);
}

#[test]
fn separate_shells_are_independent() {
    let mut one = Desk::boot();
    let mut two = Desk::boot();
    one.run("cd /");
    one.run("nix-shell");
    assert_eq!(two.shell.cwd, "/home/hetav");
    assert!(!two.shell.nix_shell);
    assert!(two.shell.history.is_empty());
    two.run("pwd");
    assert_eq!(one.shell.history, ["cd /", "nix-shell"]);
}
