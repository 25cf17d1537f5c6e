//! Built-in commands for the nixfolio shell.

use nixfolio_types::AppId;
use nixfolio_vfs::resolve;

use crate::ansi::{CYAN, paint};
use crate::banner;
use crate::error::{ShellError, ShellResult};
use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};

/// Register all built-in commands into a registry, in completion order.
///
/// `help` is not among them: the registry answers it from this metadata.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(Box::new(FetchCmd("fastfetch")));
    reg.register(Box::new(FetchCmd("neofetch")));
    reg.register(Box::new(FetchCmd("microfetch")));
    reg.register(Box::new(LsCmd));
    reg.register(Box::new(CdCmd));
    reg.register(Box::new(CatCmd));
    reg.register(Box::new(ClearCmd));
    reg.register(Box::new(OpenCmd));
    reg.register(Box::new(NixShellCmd));
    reg.register(Box::new(WhoamiCmd));
    reg.register(Box::new(PwdCmd));
    reg.register(Box::new(EchoCmd));
    reg.register(Box::new(HistoryCmd));
    reg.register(Box::new(ExitCmd));
}

// ---------------------------------------------------------------------------
// fastfetch / neofetch / microfetch
// ---------------------------------------------------------------------------

struct FetchCmd(&'static str);
impl Command for FetchCmd {
    fn name(&self) -> &str {
        self.0
    }
    fn description(&self) -> &str {
        "Display system info"
    }
    fn usage(&self) -> &str {
        self.0
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        Ok(CommandOutput::Text(banner::fastfetch(env.shell)))
    }
}

// ---------------------------------------------------------------------------
// ls
// ---------------------------------------------------------------------------

struct LsCmd;
impl Command for LsCmd {
    fn name(&self) -> &str {
        "ls"
    }
    fn description(&self) -> &str {
        "List directory contents"
    }
    fn usage(&self) -> &str {
        "ls [path]"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        let cwd = env.shell.cwd.as_str();
        let entries = match args.first() {
            None => env
                .vfs
                .list_directory(cwd, cwd)
                .ok_or_else(|| ShellError::CwdInaccessible(cwd.to_string()))?,
            Some(&path) => match env.vfs.get_node(path, cwd) {
                Some(node) if node.is_file() => {
                    return Ok(CommandOutput::Text(node.name.clone()));
                }
                Some(node) => node.children().unwrap_or_default(),
                None => return Err(ShellError::CannotAccess(path.to_string())),
            },
        };
        if entries.is_empty() {
            return Ok(CommandOutput::None);
        }
        let names: Vec<String> = entries
            .iter()
            .map(|e| {
                if e.is_dir() {
                    paint(CYAN, &e.name)
                } else {
                    e.name.clone()
                }
            })
            .collect();
        Ok(CommandOutput::Text(names.join("  ")))
    }
}

// ---------------------------------------------------------------------------
// cd
// ---------------------------------------------------------------------------

struct CdCmd;
impl Command for CdCmd {
    fn name(&self) -> &str {
        "cd"
    }
    fn description(&self) -> &str {
        "Change directory"
    }
    fn usage(&self) -> &str {
        "cd [dir]"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        let Some(&target) = args.first() else {
            env.shell.cwd = env.shell.home.clone();
            return Ok(CommandOutput::None);
        };
        match env.vfs.get_node(target, &env.shell.cwd) {
            None => Err(ShellError::NoSuchDirectory(target.to_string())),
            Some(node) if !node.is_dir() => Err(ShellError::NotADirectory(target.to_string())),
            Some(_) => {
                env.shell.cwd = resolve(target, &env.shell.cwd);
                Ok(CommandOutput::None)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// cat
// ---------------------------------------------------------------------------

struct CatCmd;
impl Command for CatCmd {
    fn name(&self) -> &str {
        "cat"
    }
    fn description(&self) -> &str {
        "Display file contents"
    }
    fn usage(&self) -> &str {
        "cat <file>"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        let [path] = args else {
            return Err(ShellError::MissingFileOperand);
        };
        env.vfs
            .file_content(path, &env.shell.cwd)
            .map(|text| CommandOutput::Text(text.to_string()))
            .ok_or_else(|| ShellError::NoSuchFile((*path).to_string()))
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear terminal"
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        Ok(CommandOutput::Clear)
    }
}

// ---------------------------------------------------------------------------
// open
// ---------------------------------------------------------------------------

struct OpenCmd;
impl Command for OpenCmd {
    fn name(&self) -> &str {
        "open"
    }
    fn description(&self) -> &str {
        "Open an application"
    }
    fn usage(&self) -> &str {
        "open <app>"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        let Some(name) = args.first() else {
            return Err(ShellError::MissingAppName);
        };
        let id: AppId = name
            .parse()
            .map_err(|_| ShellError::UnknownApp(name.to_lowercase()))?;
        env.windows.open_window(id);
        log::info!("shell opened {id}");
        Ok(CommandOutput::Text(format!("Opening {id}...")))
    }
}

// ---------------------------------------------------------------------------
// nix-shell
// ---------------------------------------------------------------------------

struct NixShellCmd;
impl Command for NixShellCmd {
    fn name(&self) -> &str {
        "nix-shell"
    }
    fn description(&self) -> &str {
        "Toggle nix-shell mode"
    }
    fn usage(&self) -> &str {
        "nix-shell"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        env.shell.nix_shell = !env.shell.nix_shell;
        let msg = if env.shell.nix_shell {
            "Entering nix-shell..."
        } else {
            "Exiting nix-shell..."
        };
        Ok(CommandOutput::Text(msg.to_string()))
    }
}

// ---------------------------------------------------------------------------
// whoami / pwd / echo / history
// ---------------------------------------------------------------------------

struct WhoamiCmd;
impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        "whoami"
    }
    fn description(&self) -> &str {
        "Display current user"
    }
    fn usage(&self) -> &str {
        "whoami"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        Ok(CommandOutput::Text(env.shell.user.clone()))
    }
}

struct PwdCmd;
impl Command for PwdCmd {
    fn name(&self) -> &str {
        "pwd"
    }
    fn description(&self) -> &str {
        "Print working directory"
    }
    fn usage(&self) -> &str {
        "pwd"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        Ok(CommandOutput::Text(env.shell.cwd.clone()))
    }
}

struct EchoCmd;
impl Command for EchoCmd {
    fn name(&self) -> &str {
        "echo"
    }
    fn description(&self) -> &str {
        "Display text"
    }
    fn usage(&self) -> &str {
        "echo <text>"
    }
    fn execute(&self, args: &[&str], _env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        Ok(CommandOutput::Text(args.join(" ")))
    }
}

struct HistoryCmd;
impl Command for HistoryCmd {
    fn name(&self) -> &str {
        "history"
    }
    fn description(&self) -> &str {
        "Show command history"
    }
    fn usage(&self) -> &str {
        "history"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        Ok(CommandOutput::Text(env.shell.history.join("\n")))
    }
}

// ---------------------------------------------------------------------------
// exit
// ---------------------------------------------------------------------------

struct ExitCmd;
impl Command for ExitCmd {
    fn name(&self) -> &str {
        "exit"
    }
    fn description(&self) -> &str {
        "Close terminal"
    }
    fn usage(&self) -> &str {
        "exit"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        env.windows.close_window(AppId::Terminal);
        Ok(CommandOutput::None)
    }
}
