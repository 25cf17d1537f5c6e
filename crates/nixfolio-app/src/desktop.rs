//! The assembled desktop: filesystem, window manager, shell, terminal and
//! the Files window's browser.

use nixfolio_terminal::{Environment, ShellState, TermOutput, TerminalSession};
use nixfolio_types::config::DesktopConfig;
use nixfolio_types::error::{NixfolioError, Result};
use nixfolio_types::input::{KeyEvent, PointerEvent};
use nixfolio_types::{AppId, Frame};
use nixfolio_vfs::{StaticVfs, Vfs};
use nixfolio_wm::{ChromeTarget, Dock, GestureOutcome, GestureTracker, SystemState, WindowManager, WmEvent};

use crate::files::{Activation, FileBrowser};

/// All mutable desktop state.
///
/// The shell state outlives terminal sessions: closing and reopening the
/// terminal keeps the working directory, history and nix-shell flag.
#[derive(Debug)]
pub struct Desktop {
    config: DesktopConfig,
    vfs: StaticVfs,
    wm: WindowManager,
    shell: ShellState,
    terminal: Option<TerminalSession>,
    /// Output of a session torn down before it was drained.
    pending: Vec<TermOutput>,
    gestures: GestureTracker,
    dock: Dock,
    files: FileBrowser,
}

impl Desktop {
    pub fn new(config: DesktopConfig, vfs: StaticVfs) -> Self {
        let wm = WindowManager::new(config.theme, config.boot_animation);
        let shell = ShellState::from_config(&config);
        let gestures = GestureTracker::new(config.double_click_ms);
        let files = FileBrowser::new(&config.home);
        Self {
            config,
            vfs,
            wm,
            shell,
            terminal: None,
            pending: Vec::new(),
            gestures,
            dock: Dock::default(),
            files,
        }
    }

    /// Build from configuration, loading the filesystem tree it names.
    pub fn from_config(config: DesktopConfig) -> Result<Self> {
        let vfs = match &config.filesystem {
            Some(path) => StaticVfs::load(path)?,
            None => StaticVfs::portfolio(),
        };
        if !vfs.is_dir(&config.home, "/") {
            log::warn!("home directory {} does not exist in the tree", config.home);
        }
        Ok(Self::new(config, vfs))
    }

    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    pub fn state(&self) -> &SystemState {
        self.wm.state()
    }

    pub fn shell(&self) -> &ShellState {
        &self.shell
    }

    pub fn vfs(&self) -> &StaticVfs {
        &self.vfs
    }

    pub fn dock(&self) -> &Dock {
        &self.dock
    }

    /// Where the Files window is browsing.
    pub fn files(&self) -> &FileBrowser {
        &self.files
    }

    /// Files window: go to the parent directory.
    pub fn files_up(&mut self) {
        self.files.up();
    }

    /// Files window: jump to a breadcrumb or typed path.
    pub fn files_navigate(&mut self, path: &str) -> bool {
        self.files.navigate(&self.vfs, path)
    }

    /// Files window: activate an entry of the current directory. Files open
    /// in the editor.
    pub fn files_activate(&mut self, name: &str) -> Result<Activation> {
        let activation = self
            .files
            .activate(&self.vfs, name)
            .ok_or_else(|| NixfolioError::Vfs(format!("no such entry: {name}")))?;
        if let Activation::OpenFile { content, .. } = &activation {
            self.wm.open_in_editor(content);
        }
        Ok(activation)
    }

    /// Whether a live terminal session is attached.
    pub fn terminal_running(&self) -> bool {
        self.terminal.is_some()
    }

    /// Register a window manager listener.
    pub fn subscribe(&mut self, listener: impl FnMut(&WmEvent, &SystemState) + 'static) {
        self.wm.subscribe(listener);
    }

    /// Leave the boot screen.
    pub fn finish_boot(&mut self) {
        self.wm.set_booting(false);
    }

    /// Back to the boot screen with every window closed.
    pub fn reboot(&mut self) {
        self.wm.set_booting(true);
        self.sync();
    }

    pub fn toggle_theme(&mut self) {
        self.wm.toggle_theme();
    }

    /// Open an application, starting a terminal session when the terminal
    /// comes up without one.
    pub fn launch(&mut self, id: AppId) {
        log::info!("launch {id}");
        self.wm.open_window(id);
        self.sync();
    }

    /// Launch whatever sits in dock `slot`.
    pub fn launch_from_dock(&mut self, slot: usize) -> Option<AppId> {
        let id = self.dock.launch(&mut self.wm, slot)?;
        self.sync();
        Some(id)
    }

    /// Load a file into the editor and bring the editor up.
    pub fn open_file_in_editor(&mut self, path: &str) -> Result<()> {
        let text = self
            .vfs
            .file_content(path, &self.shell.cwd)
            .ok_or_else(|| NixfolioError::Vfs(format!("not a readable file: {path}")))?;
        self.wm.open_in_editor(text);
        Ok(())
    }

    /// Effective on-screen frame of a window.
    pub fn frame(&self, id: AppId) -> Frame {
        self.wm
            .frame(id, self.config.viewport(), self.config.topbar_height)
    }

    /// Topmost visible window under the point.
    pub fn window_at(&self, x: i32, y: i32) -> Option<AppId> {
        self.wm
            .state()
            .window_at(x, y, self.config.viewport(), self.config.topbar_height)
    }

    /// Route a pointer event on window chrome.
    pub fn handle_pointer(&mut self, event: PointerEvent, target: ChromeTarget) -> GestureOutcome {
        let outcome = self.gestures.handle_pointer(&mut self.wm, event, target);
        self.sync();
        outcome
    }

    /// Deliver a key to the terminal. Ignored when no session is attached.
    pub fn handle_key(&mut self, event: KeyEvent) {
        let Some(session) = self.terminal.as_mut() else {
            return;
        };
        let mut env = Environment {
            vfs: &self.vfs,
            windows: &mut self.wm,
            shell: &mut self.shell,
        };
        session.handle_key(event, &mut env);
        self.sync();
    }

    /// Terminal output written since the last call.
    ///
    /// Output left by a session that has just been torn down is still
    /// returned once.
    pub fn drain_terminal(&mut self) -> Vec<TermOutput> {
        let mut out = std::mem::take(&mut self.pending);
        if let Some(session) = self.terminal.as_mut() {
            out.extend(session.drain_output());
        }
        out
    }

    fn sync(&mut self) {
        self.sync_terminal();
        // A closed Files window reopens at home.
        if !self.wm.state().window(AppId::Files).is_open && self.files.path() != self.config.home {
            self.files = FileBrowser::new(&self.config.home);
        }
    }

    /// Attach a session when the terminal window is open and tear it down
    /// when it is not.
    fn sync_terminal(&mut self) {
        let open = self.wm.state().window(AppId::Terminal).is_open;
        if open && self.terminal.is_none() {
            let mut session = TerminalSession::new();
            let mut env = Environment {
                vfs: &self.vfs,
                windows: &mut self.wm,
                shell: &mut self.shell,
            };
            session.start(&mut env);
            self.terminal = Some(session);
        } else if !open && let Some(mut session) = self.terminal.take() {
            session.close();
            self.pending.extend(session.drain_output());
        }
    }
}
