//! Command trait, registry, and dispatch logic.

use nixfolio_vfs::Vfs;
use nixfolio_wm::WindowOps;

use crate::ansi::{BOLD, CYAN, RESET, paint};
use crate::error::{ShellError, ShellResult};
use crate::shell::ShellState;

/// Handled by the registry itself; cannot be replaced by a registered command.
const HELP: &str = "help";

/// Column the descriptions line up on in `help`.
const HELP_COLUMN: usize = 34;

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Text to print. May contain ANSI escapes and `\n`.
    Text(String),
    /// Command produced no visible output.
    None,
    /// Signal to erase the visible terminal buffer.
    Clear,
}

/// Everything a command may touch.
pub struct Environment<'a> {
    /// The filesystem tree.
    pub vfs: &'a dyn Vfs,
    /// Window operations, for `open` and `exit`.
    pub windows: &'a mut dyn WindowOps,
    /// Working directory, history and nix-shell flag.
    pub shell: &'a mut ShellState,
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "cd \[dir\]").
    fn usage(&self) -> &str;

    /// Execute the command with the given arguments and environment.
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> ShellResult<CommandOutput>;
}

/// Registry of available commands with dispatch.
///
/// Commands keep their registration order, which is also the order
/// completion offers them in.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every builtin.
    pub fn with_builtins() -> Self {
        let mut reg = Self::new();
        crate::commands::register_builtins(&mut reg);
        reg
    }

    /// Register a command. Replaces any existing command with the same name
    /// in place. A command named `help` is shadowed by the shell built-in.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        match self.commands.iter_mut().find(|c| c.name() == cmd.name()) {
            Some(slot) => *slot = cmd,
            None => self.commands.push(cmd),
        }
    }

    /// Look up a command by exact (case-sensitive) name.
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands
            .iter()
            .find(|c| c.name() == name)
            .map(|c| &**c)
    }

    /// Command names in registration order, then `help`.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands
            .iter()
            .map(|c| c.name())
            .filter(|name| *name != HELP)
            .chain(std::iter::once(HELP))
    }

    /// Parse and execute one input line.
    ///
    /// Blank lines do nothing and are not recorded. Every other line goes
    /// into history verbatim before dispatch, valid or not. Errors come
    /// back as their message text.
    pub fn execute(&self, line: &str, env: &mut Environment<'_>) -> CommandOutput {
        let mut parts = line.split_whitespace();
        let Some(name) = parts.next() else {
            return CommandOutput::None;
        };
        env.shell.history.push(line.to_string());
        let args: Vec<&str> = parts.collect();

        let result = if name == HELP {
            self.execute_help(&args)
        } else {
            match self.get(name) {
                Some(cmd) => {
                    log::debug!("exec {name} {args:?} in {}", env.shell.cwd);
                    cmd.execute(&args, env)
                }
                None => Err(ShellError::CommandNotFound(name.to_string())),
            }
        };
        result.unwrap_or_else(|e| {
            log::debug!("{name}: {e}");
            CommandOutput::Text(e.to_string())
        })
    }

    /// Built-in `help` command.
    ///
    /// Without arguments, one row per command. Adjacent commands sharing a
    /// description collapse into one row listing their names.
    fn execute_help(&self, args: &[&str]) -> ShellResult<CommandOutput> {
        if let Some(&name) = args.first() {
            let cmd = self
                .get(name)
                .filter(|c| c.name() != HELP)
                .ok_or_else(|| ShellError::NoHelpTopic(name.to_string()))?;
            return Ok(CommandOutput::Text(format!(
                "{}\n  {}\n  Usage: {}",
                paint(CYAN, cmd.name()),
                cmd.description(),
                cmd.usage()
            )));
        }

        let mut rows: Vec<(Vec<&dyn Command>, &str)> = Vec::new();
        for cmd in self.commands.iter().map(|c| &**c) {
            if cmd.name() == HELP {
                continue;
            }
            match rows.last_mut() {
                Some((group, desc)) if *desc == cmd.description() => group.push(cmd),
                _ => rows.push((vec![cmd], cmd.description())),
            }
        }

        let mut lines = vec![format!("{BOLD}Available commands:{RESET}")];
        for (group, desc) in rows {
            // Pad on the visible text, then colour the command word(s).
            let (label, painted) = match group.as_slice() {
                [cmd] => {
                    let usage = cmd.usage();
                    let rest = usage.strip_prefix(cmd.name()).unwrap_or("");
                    (
                        format!("{}{rest}", cmd.name()),
                        format!("{}{rest}", paint(CYAN, cmd.name())),
                    )
                }
                _ => {
                    let names = group.iter().map(|c| c.name()).collect::<Vec<_>>().join(", ");
                    let painted = paint(CYAN, &names);
                    (names, painted)
                }
            };
            let pad = HELP_COLUMN.saturating_sub(label.chars().count()).max(2);
            lines.push(format!("  {painted}{}{desc}", " ".repeat(pad)));
        }
        lines.push(String::new());
        lines.push(format!("Type '{}' for details.", paint(CYAN, "help <command>")));
        Ok(CommandOutput::Text(lines.join("\n")))
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use nixfolio_types::AppId;
    use nixfolio_vfs::StaticVfs;
    use nixfolio_wm::WindowManager;

    use super::*;

    struct Shout;
    impl Command for Shout {
        fn name(&self) -> &str {
            "shout"
        }
        fn description(&self) -> &str {
            "Upper-case the arguments"
        }
        fn usage(&self) -> &str {
            "shout <text>"
        }
        fn execute(&self, args: &[&str], _env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
            Ok(CommandOutput::Text(args.join(" ").to_uppercase()))
        }
    }

    fn run(reg: &CommandRegistry, shell: &mut ShellState, wm: &mut WindowManager, line: &str) -> CommandOutput {
        let vfs = StaticVfs::portfolio();
        let mut env = Environment {
            vfs: &vfs,
            windows: wm,
            shell,
        };
        reg.execute(line, &mut env)
    }

    #[test]
    fn dispatches_by_name() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(Shout));
        let mut shell = ShellState::default();
        let mut wm = WindowManager::default();
        assert_eq!(
            run(&reg, &mut shell, &mut wm, "  shout hi   there "),
            CommandOutput::Text("HI THERE".into())
        );
    }

    #[test]
    fn blank_line_is_silent_and_unrecorded() {
        let reg = CommandRegistry::with_builtins();
        let mut shell = ShellState::default();
        let mut wm = WindowManager::default();
        assert_eq!(run(&reg, &mut shell, &mut wm, "   "), CommandOutput::None);
        assert!(shell.history.is_empty());
    }

    #[test]
    fn unknown_command_is_recorded_and_reported() {
        let reg = CommandRegistry::with_builtins();
        let mut shell = ShellState::default();
        let mut wm = WindowManager::default();
        assert_eq!(
            run(&reg, &mut shell, &mut wm, "vim notes.txt"),
            CommandOutput::Text("command not found: vim".into())
        );
        assert_eq!(shell.history, ["vim notes.txt"]);
    }

    #[test]
    fn names_are_case_sensitive() {
        let reg = CommandRegistry::with_builtins();
        let mut shell = ShellState::default();
        let mut wm = WindowManager::default();
        assert_eq!(
            run(&reg, &mut shell, &mut wm, "LS"),
            CommandOutput::Text("command not found: LS".into())
        );
    }

    #[test]
    fn register_replaces_in_place() {
        let mut reg = CommandRegistry::with_builtins();
        let before: Vec<String> = reg.names().map(String::from).collect();
        struct Pwd2;
        impl Command for Pwd2 {
            fn name(&self) -> &str {
                "pwd"
            }
            fn description(&self) -> &str {
                ""
            }
            fn usage(&self) -> &str {
                ""
            }
            fn execute(&self, _: &[&str], _: &mut Environment<'_>) -> ShellResult<CommandOutput> {
                Ok(CommandOutput::Text("elsewhere".into()))
            }
        }
        reg.register(Box::new(Pwd2));
        let after: Vec<String> = reg.names().map(String::from).collect();
        assert_eq!(before, after);
        let mut shell = ShellState::default();
        let mut wm = WindowManager::default();
        assert_eq!(
            run(&reg, &mut shell, &mut wm, "pwd"),
            CommandOutput::Text("elsewhere".into())
        );
    }

    #[test]
    fn help_includes_registered_commands() {
        let mut reg = CommandRegistry::with_builtins();
        reg.register(Box::new(Shout));
        let mut shell = ShellState::default();
        let mut wm = WindowManager::default();
        let CommandOutput::Text(text) = run(&reg, &mut shell, &mut wm, "help") else {
            panic!("help produced no text");
        };
        let row = text.lines().find(|l| l.contains("shout")).unwrap();
        assert!(row.contains("\x1b[36mshout\x1b[0m <text>"));
        assert!(row.ends_with("Upper-case the arguments"));
        assert!(text.lines().last().unwrap().contains("help <command>"));
    }

    #[test]
    fn registered_help_does_not_shadow_builtin() {
        struct FakeHelp;
        impl Command for FakeHelp {
            fn name(&self) -> &str {
                "help"
            }
            fn description(&self) -> &str {
                "Not the real help"
            }
            fn usage(&self) -> &str {
                "help"
            }
            fn execute(&self, _: &[&str], _: &mut Environment<'_>) -> ShellResult<CommandOutput> {
                Ok(CommandOutput::Text("fake".into()))
            }
        }
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(FakeHelp));
        reg.register(Box::new(Shout));
        assert_eq!(reg.names().collect::<Vec<_>>(), ["shout", "help"]);
        let mut shell = ShellState::default();
        let mut wm = WindowManager::default();
        let CommandOutput::Text(text) = run(&reg, &mut shell, &mut wm, "help") else {
            panic!("help produced no text");
        };
        assert!(text.starts_with("\x1b[1mAvailable commands:"));
        assert!(!text.contains("Not the real help"));
    }

    #[test]
    fn builtins_reach_window_manager() {
        let reg = CommandRegistry::with_builtins();
        let mut shell = ShellState::default();
        let mut wm = WindowManager::new(Default::default(), false);
        run(&reg, &mut shell, &mut wm, "open about");
        assert_eq!(wm.active_window(), Some(AppId::About));
    }
}
