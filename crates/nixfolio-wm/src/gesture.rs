//! Pointer gestures on window chrome.
//!
//! The renderer hit-tests each press and reports what was under the pointer
//! as a [`ChromeTarget`]. The tracker turns the press/move/release stream
//! into window manager operations: focus on press, maximize on double press
//! of a title bar, and move/resize sessions that commit on release.

use nixfolio_types::input::PointerEvent;
use nixfolio_types::{AppId, Position, Size};

use crate::manager::WindowManager;

/// Smallest size a resize can commit.
pub const MIN_WINDOW_SIZE: Size = Size::new(200, 120);

/// Default double press window in milliseconds.
pub const DEFAULT_DOUBLE_CLICK_MS: u64 = 250;

/// What a pointer press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeTarget {
    TitleBar(AppId),
    ResizeHandle(AppId),
    CloseButton(AppId),
    MinimizeButton(AppId),
    MaximizeButton(AppId),
    /// Window content area.
    Body(AppId),
    /// Empty desktop.
    Desktop,
}

/// What a pointer event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    None,
    Focused(AppId),
    MaximizeToggled(AppId),
    Closed(AppId),
    Minimized(AppId),
    DragStarted(AppId),
    /// In-flight move; the stored position is not touched until release.
    Dragging { id: AppId, preview: Position },
    Moved { id: AppId, position: Position },
    ResizeStarted(AppId),
    Resizing { id: AppId, preview: Size },
    Resized { id: AppId, size: Size },
}

#[derive(Debug, Clone, Copy)]
enum Session {
    Move {
        id: AppId,
        start: (i32, i32),
        origin: Position,
    },
    Resize {
        id: AppId,
        start: (i32, i32),
        origin: Size,
    },
}

impl Session {
    fn delta(start: (i32, i32), x: i32, y: i32) -> (i32, i32) {
        (x.saturating_sub(start.0), y.saturating_sub(start.1))
    }
}

/// Pointer state machine for window chrome.
#[derive(Debug, Clone)]
pub struct GestureTracker {
    double_click_ms: u64,
    last_title_press: Option<(AppId, u64)>,
    session: Option<Session>,
}

impl GestureTracker {
    pub fn new(double_click_ms: u64) -> Self {
        Self {
            double_click_ms,
            last_title_press: None,
            session: None,
        }
    }

    /// Whether a move or resize is in progress.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Feed one pointer event. `target` only matters for presses.
    pub fn handle_pointer(
        &mut self,
        wm: &mut WindowManager,
        event: PointerEvent,
        target: ChromeTarget,
    ) -> GestureOutcome {
        match event {
            PointerEvent::Down { x, y, time_ms } => self.press(wm, target, x, y, time_ms),
            PointerEvent::Move { x, y } => self.pointer_move(x, y),
            PointerEvent::Up { x, y } => self.release(wm, x, y),
        }
    }

    fn press(
        &mut self,
        wm: &mut WindowManager,
        target: ChromeTarget,
        x: i32,
        y: i32,
        time_ms: u64,
    ) -> GestureOutcome {
        self.session = None;
        // Only two consecutive presses on the same title bar make a double-click.
        if !matches!(target, ChromeTarget::TitleBar(_)) {
            self.last_title_press = None;
        }
        let id = match target {
            ChromeTarget::Desktop => return GestureOutcome::None,
            ChromeTarget::TitleBar(id)
            | ChromeTarget::ResizeHandle(id)
            | ChromeTarget::CloseButton(id)
            | ChromeTarget::MinimizeButton(id)
            | ChromeTarget::MaximizeButton(id)
            | ChromeTarget::Body(id) => id,
        };
        // Any press inside a window focuses it first.
        wm.focus_window(id);

        match target {
            ChromeTarget::CloseButton(_) => {
                wm.close_window(id);
                GestureOutcome::Closed(id)
            }
            ChromeTarget::MinimizeButton(_) => {
                wm.minimize_window(id);
                GestureOutcome::Minimized(id)
            }
            ChromeTarget::MaximizeButton(_) => {
                wm.maximize_window(id);
                GestureOutcome::MaximizeToggled(id)
            }
            ChromeTarget::TitleBar(_) => self.title_press(wm, id, x, y, time_ms),
            ChromeTarget::ResizeHandle(_) => {
                let w = wm.state().window(id);
                if w.is_maximized {
                    return GestureOutcome::Focused(id);
                }
                self.session = Some(Session::Resize {
                    id,
                    start: (x, y),
                    origin: w.size,
                });
                GestureOutcome::ResizeStarted(id)
            }
            ChromeTarget::Body(_) | ChromeTarget::Desktop => GestureOutcome::Focused(id),
        }
    }

    fn title_press(
        &mut self,
        wm: &mut WindowManager,
        id: AppId,
        x: i32,
        y: i32,
        time_ms: u64,
    ) -> GestureOutcome {
        let double = matches!(
            self.last_title_press,
            Some((prev, t)) if prev == id && time_ms.saturating_sub(t) <= self.double_click_ms
        );
        if double {
            self.last_title_press = None;
            wm.maximize_window(id);
            return GestureOutcome::MaximizeToggled(id);
        }
        self.last_title_press = Some((id, time_ms));

        let w = wm.state().window(id);
        if w.is_maximized {
            return GestureOutcome::Focused(id);
        }
        self.session = Some(Session::Move {
            id,
            start: (x, y),
            origin: w.position,
        });
        GestureOutcome::DragStarted(id)
    }

    /// Preview of the in-flight session at the given pointer position.
    pub fn pointer_move(&self, x: i32, y: i32) -> GestureOutcome {
        match self.session {
            None => GestureOutcome::None,
            Some(Session::Move { id, start, origin }) => {
                let (dx, dy) = Session::delta(start, x, y);
                GestureOutcome::Dragging {
                    id,
                    preview: origin.offset(dx, dy),
                }
            }
            Some(Session::Resize { id, start, origin }) => {
                let (dx, dy) = Session::delta(start, x, y);
                GestureOutcome::Resizing {
                    id,
                    preview: grow(origin, dx, dy),
                }
            }
        }
    }

    fn release(&mut self, wm: &mut WindowManager, x: i32, y: i32) -> GestureOutcome {
        let Some(session) = self.session.take() else {
            return GestureOutcome::None;
        };
        match session {
            Session::Move { id, start, origin } => {
                let (dx, dy) = Session::delta(start, x, y);
                let position = origin.offset(dx, dy);
                if wm.update_window_position(id, position) {
                    GestureOutcome::Moved { id, position }
                } else {
                    GestureOutcome::None
                }
            }
            Session::Resize { id, start, origin } => {
                let (dx, dy) = Session::delta(start, x, y);
                let size = grow(origin, dx, dy);
                if wm.update_window_size(id, size) {
                    GestureOutcome::Resized { id, size }
                } else {
                    GestureOutcome::None
                }
            }
        }
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(DEFAULT_DOUBLE_CLICK_MS)
    }
}

fn grow(origin: Size, dx: i32, dy: i32) -> Size {
    let dim = |base: u32, delta: i32| {
        let v = (i64::from(base) + i64::from(delta)).max(0);
        u32::try_from(v).unwrap_or(u32::MAX)
    };
    Size::new(dim(origin.width, dx), dim(origin.height, dy)).at_least(MIN_WINDOW_SIZE)
}
