//! The window manager: atomic transitions over [`SystemState`].

use std::fmt;

use nixfolio_types::config::Theme;
use nixfolio_types::error::Result;
use nixfolio_types::{AppId, Frame, Position, Size};

use crate::state::SystemState;

/// What a transition did. Sent to subscribers after the state is updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WmEvent {
    Opened(AppId),
    Closed { id: AppId, focus: Option<AppId> },
    Minimized { id: AppId, focus: Option<AppId> },
    MaximizeToggled { id: AppId, maximized: bool },
    Focused(AppId),
    Moved { id: AppId, position: Position },
    Resized { id: AppId, size: Size },
    ThemeChanged(Theme),
    BootChanged(bool),
    EditorContentChanged,
}

/// The window operations the shell is allowed to perform.
pub trait WindowOps {
    fn open_window(&mut self, id: AppId);
    fn close_window(&mut self, id: AppId);
    fn is_open(&self, id: AppId) -> bool;
}

type Listener = Box<dyn FnMut(&WmEvent, &SystemState)>;

/// Owner of the desktop state. No other code mutates window records.
pub struct WindowManager {
    state: SystemState,
    listeners: Vec<Listener>,
}

impl WindowManager {
    pub fn new(theme: Theme, is_booting: bool) -> Self {
        Self {
            state: SystemState::new(theme, is_booting),
            listeners: Vec::new(),
        }
    }

    /// Current state, for renderers.
    pub fn state(&self) -> &SystemState {
        &self.state
    }

    /// Current state as JSON, for renderers outside the process.
    pub fn snapshot_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.state)?)
    }

    /// Call `listener` after every transition with the event and new state.
    pub fn subscribe(&mut self, listener: impl FnMut(&WmEvent, &SystemState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn active_window(&self) -> Option<AppId> {
        self.state.active_window
    }

    /// Open (or re-raise) a window and focus it.
    pub fn open_window(&mut self, id: AppId) {
        let z = self.state.next_z();
        let w = self.state.window_mut(id);
        w.is_open = true;
        w.is_minimized = false;
        w.z_index = z;
        self.state.active_window = Some(id);
        log::debug!("open {id} z={z}");
        self.emit(WmEvent::Opened(id));
    }

    /// Close a window. Focus passes to the highest remaining visible window
    /// if the closed one had it.
    pub fn close_window(&mut self, id: AppId) {
        self.state.window_mut(id).is_open = false;
        if self.state.active_window == Some(id) {
            self.state.active_window = self.state.next_focus(Some(id));
        }
        let focus = self.state.active_window;
        log::debug!("close {id}, focus -> {focus:?}");
        self.emit(WmEvent::Closed { id, focus });
    }

    /// Minimize a window, handing focus on like [`close_window`](Self::close_window).
    pub fn minimize_window(&mut self, id: AppId) {
        self.state.window_mut(id).is_minimized = true;
        if self.state.active_window == Some(id) {
            self.state.active_window = self.state.next_focus(Some(id));
        }
        let focus = self.state.active_window;
        log::debug!("minimize {id}, focus -> {focus:?}");
        self.emit(WmEvent::Minimized { id, focus });
    }

    /// Toggle maximized. Focus, stacking and stored geometry are untouched.
    pub fn maximize_window(&mut self, id: AppId) {
        let w = self.state.window_mut(id);
        w.is_maximized = !w.is_maximized;
        let maximized = w.is_maximized;
        log::debug!("maximize {id} -> {maximized}");
        self.emit(WmEvent::MaximizeToggled { id, maximized });
    }

    /// Raise and focus an open window, restoring it if minimized.
    ///
    /// No-op if it already has focus or is closed.
    pub fn focus_window(&mut self, id: AppId) {
        if self.state.active_window == Some(id) {
            return;
        }
        if !self.state.window(id).is_open {
            log::debug!("focus {id} ignored: window is closed");
            return;
        }
        let z = self.state.next_z();
        let w = self.state.window_mut(id);
        w.z_index = z;
        w.is_minimized = false;
        self.state.active_window = Some(id);
        log::debug!("focus {id} z={z}");
        self.emit(WmEvent::Focused(id));
    }

    /// Store a new restored position. Ignored while maximized.
    pub fn update_window_position(&mut self, id: AppId, position: Position) -> bool {
        let w = self.state.window_mut(id);
        if w.is_maximized {
            log::debug!("move {id} ignored: window is maximized");
            return false;
        }
        w.position = position;
        self.emit(WmEvent::Moved { id, position });
        true
    }

    /// Store a new restored size. Ignored while maximized.
    pub fn update_window_size(&mut self, id: AppId, size: Size) -> bool {
        let w = self.state.window_mut(id);
        if w.is_maximized {
            log::debug!("resize {id} ignored: window is maximized");
            return false;
        }
        w.size = size;
        self.emit(WmEvent::Resized { id, size });
        true
    }

    /// Enter or leave the boot screen. Entering it (a reboot) resets every
    /// window to its closed default and clears focus. The z-index counter
    /// keeps counting.
    pub fn set_booting(&mut self, is_booting: bool) {
        self.state.is_booting = is_booting;
        if is_booting {
            self.state.reset_windows();
        }
        log::info!("booting = {is_booting}");
        self.emit(WmEvent::BootChanged(is_booting));
    }

    pub fn toggle_theme(&mut self) {
        self.state.theme = self.state.theme.toggled();
        let theme = self.state.theme;
        self.emit(WmEvent::ThemeChanged(theme));
    }

    pub fn set_editor_content(&mut self, content: impl Into<String>) {
        self.state.editor_content = content.into();
        self.emit(WmEvent::EditorContentChanged);
    }

    /// Load text into the editor and bring the editor up.
    pub fn open_in_editor(&mut self, content: impl Into<String>) {
        self.set_editor_content(content);
        self.open_window(AppId::Editor);
    }

    /// Effective frame of a window for the given viewport.
    pub fn frame(&self, id: AppId, viewport: Size, topbar_height: u32) -> Frame {
        self.state.frame(id, viewport, topbar_height)
    }

    fn emit(&mut self, event: WmEvent) {
        for listener in &mut self.listeners {
            listener(&event, &self.state);
        }
    }
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new(Theme::Dark, true)
    }
}

impl fmt::Debug for WindowManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowManager")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl WindowOps for WindowManager {
    fn open_window(&mut self, id: AppId) {
        WindowManager::open_window(self, id);
    }

    fn close_window(&mut self, id: AppId) {
        WindowManager::close_window(self, id);
    }

    fn is_open(&self, id: AppId) -> bool {
        self.state.window(id).is_open
    }
}
