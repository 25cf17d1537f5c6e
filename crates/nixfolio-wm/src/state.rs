//! Window records and the desktop-wide state they live in.

use nixfolio_types::config::Theme;
use nixfolio_types::{AppId, Frame, Position, Size};
use serde::{Deserialize, Serialize};

/// Starting value of the z-index counter. The first opened window gets 11.
pub const INITIAL_Z_INDEX: u64 = 10;

/// One application window. Records are never deleted, only closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowState {
    pub id: AppId,
    pub title: String,
    pub is_open: bool,
    pub is_minimized: bool,
    pub is_maximized: bool,
    pub z_index: u64,
    /// Restored position; unaffected by maximize.
    pub position: Position,
    /// Restored size; unaffected by maximize.
    pub size: Size,
}

impl WindowState {
    /// A closed window with the application's default geometry.
    pub fn closed(id: AppId) -> Self {
        Self {
            id,
            title: id.title().to_string(),
            is_open: false,
            is_minimized: false,
            is_maximized: false,
            z_index: 0,
            position: id.default_position(),
            size: id.default_size(),
        }
    }

    /// Open and not minimized: drawn on screen and eligible for focus.
    pub fn is_visible(&self) -> bool {
        self.is_open && !self.is_minimized
    }

    /// Stored geometry as a frame.
    pub fn restored_frame(&self) -> Frame {
        Frame::new(self.position, self.size)
    }
}

/// The whole desktop: every window plus UI-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemState {
    /// Indexed by [`AppId::index`].
    windows: [WindowState; AppId::COUNT],
    /// Focused window, if any.
    pub active_window: Option<AppId>,
    /// Highest z-index handed out so far. Never decreases.
    pub max_z_index: u64,
    pub theme: Theme,
    pub is_booting: bool,
    /// Text shown by the editor window.
    pub editor_content: String,
}

impl SystemState {
    pub fn new(theme: Theme, is_booting: bool) -> Self {
        Self {
            windows: AppId::ALL.map(WindowState::closed),
            active_window: None,
            max_z_index: INITIAL_Z_INDEX,
            theme,
            is_booting,
            editor_content: String::new(),
        }
    }

    pub fn window(&self, id: AppId) -> &WindowState {
        &self.windows[id.index()]
    }

    pub(crate) fn window_mut(&mut self, id: AppId) -> &mut WindowState {
        &mut self.windows[id.index()]
    }

    /// All windows in declaration order.
    pub fn windows(&self) -> impl Iterator<Item = &WindowState> {
        self.windows.iter()
    }

    /// Put every window back to its closed default record.
    pub(crate) fn reset_windows(&mut self) {
        self.windows = AppId::ALL.map(WindowState::closed);
        self.active_window = None;
    }

    /// Next z-index from the monotonic counter.
    pub(crate) fn next_z(&mut self) -> u64 {
        self.max_z_index += 1;
        self.max_z_index
    }

    /// The visible window with the highest z-index, ignoring `excluding`.
    ///
    /// z-indices of visible windows are unique, so there are no ties.
    pub fn next_focus(&self, excluding: Option<AppId>) -> Option<AppId> {
        self.windows()
            .filter(|w| Some(w.id) != excluding && w.is_visible())
            .max_by_key(|w| w.z_index)
            .map(|w| w.id)
    }

    /// Visible windows bottom to top: the order to paint them in.
    pub fn stacking_order(&self) -> Vec<AppId> {
        let mut visible: Vec<&WindowState> = self.windows().filter(|w| w.is_visible()).collect();
        visible.sort_by_key(|w| w.z_index);
        visible.into_iter().map(|w| w.id).collect()
    }

    /// Whether some visible window is maximized (the dock hides then).
    pub fn any_maximized(&self) -> bool {
        self.windows().any(|w| w.is_visible() && w.is_maximized)
    }

    /// Effective on-screen frame: the viewport below the top bar when
    /// maximized, the stored geometry otherwise.
    pub fn frame(&self, id: AppId, viewport: Size, topbar_height: u32) -> Frame {
        let w = self.window(id);
        if w.is_maximized {
            maximized_frame(viewport, topbar_height)
        } else {
            w.restored_frame()
        }
    }

    /// Topmost visible window whose frame contains the point.
    pub fn window_at(&self, x: i32, y: i32, viewport: Size, topbar_height: u32) -> Option<AppId> {
        self.stacking_order()
            .into_iter()
            .rev()
            .find(|&id| self.frame(id, viewport, topbar_height).contains(x, y))
    }
}

impl Default for SystemState {
    fn default() -> Self {
        Self::new(Theme::Dark, true)
    }
}

/// Geometry of a maximized window: full width, below the top bar.
pub fn maximized_frame(viewport: Size, topbar_height: u32) -> Frame {
    let y = i32::try_from(topbar_height).unwrap_or(i32::MAX);
    Frame::new(
        Position::new(0, y),
        Size::new(
            viewport.width,
            viewport.height.saturating_sub(topbar_height),
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size::new(1920, 1080);

    #[test]
    fn new_state_has_every_window_closed() {
        let s = SystemState::default();
        assert_eq!(s.windows().count(), AppId::COUNT);
        assert!(s.windows().all(|w| !w.is_open && w.z_index == 0));
        assert_eq!(s.active_window, None);
        assert_eq!(s.max_z_index, INITIAL_Z_INDEX);
        assert!(s.is_booting);
    }

    #[test]
    fn window_lookup_matches_id() {
        let s = SystemState::default();
        for id in AppId::ALL {
            assert_eq!(s.window(id).id, id);
            assert_eq!(s.window(id).title, id.title());
        }
    }

    #[test]
    fn next_focus_picks_highest_visible() {
        let mut s = SystemState::default();
        for (id, z) in [(AppId::Files, 11), (AppId::About, 13), (AppId::Editor, 12)] {
            let w = s.window_mut(id);
            w.is_open = true;
            w.z_index = z;
        }
        s.window_mut(AppId::About).is_minimized = true;
        assert_eq!(s.next_focus(None), Some(AppId::Editor));
        assert_eq!(s.next_focus(Some(AppId::Editor)), Some(AppId::Files));
    }

    #[test]
    fn next_focus_none_when_nothing_visible() {
        let s = SystemState::default();
        assert_eq!(s.next_focus(None), None);
    }

    #[test]
    fn stacking_order_is_bottom_to_top() {
        let mut s = SystemState::default();
        for (id, z) in [(AppId::Browser, 20), (AppId::Terminal, 15), (AppId::Files, 30)] {
            let w = s.window_mut(id);
            w.is_open = true;
            w.z_index = z;
        }
        assert_eq!(
            s.stacking_order(),
            [AppId::Terminal, AppId::Browser, AppId::Files]
        );
    }

    #[test]
    fn maximized_frame_sits_below_topbar() {
        let f = maximized_frame(VIEWPORT, 32);
        assert_eq!(f.position, Position::new(0, 32));
        assert_eq!(f.size, Size::new(1920, 1048));
    }

    #[test]
    fn frame_uses_stored_geometry_when_restored() {
        let mut s = SystemState::default();
        assert_eq!(
            s.frame(AppId::Terminal, VIEWPORT, 32),
            Frame::new(Position::new(100, 100), Size::new(800, 500))
        );
        s.window_mut(AppId::Terminal).is_maximized = true;
        assert_eq!(s.frame(AppId::Terminal, VIEWPORT, 32), maximized_frame(VIEWPORT, 32));
        assert_eq!(s.window(AppId::Terminal).position, Position::new(100, 100));
    }

    #[test]
    fn window_at_prefers_topmost() {
        let mut s = SystemState::default();
        // Terminal (100,100 800x500) and Files (150,150 900x600) overlap.
        for (id, z) in [(AppId::Terminal, 11), (AppId::Files, 12)] {
            let w = s.window_mut(id);
            w.is_open = true;
            w.z_index = z;
        }
        assert_eq!(s.window_at(200, 200, VIEWPORT, 32), Some(AppId::Files));
        assert_eq!(s.window_at(120, 120, VIEWPORT, 32), Some(AppId::Terminal));
        assert_eq!(s.window_at(5, 5, VIEWPORT, 32), None);
    }

    #[test]
    fn any_maximized_ignores_minimized() {
        let mut s = SystemState::default();
        let w = s.window_mut(AppId::Browser);
        w.is_open = true;
        w.is_maximized = true;
        w.is_minimized = true;
        assert!(!s.any_maximized());
        s.window_mut(AppId::Browser).is_minimized = false;
        assert!(s.any_maximized());
    }

    #[test]
    fn state_serializes_to_json() {
        let s = SystemState::default();
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["windows"][0]["id"], "terminal");
        assert_eq!(json["max_z_index"], 10);
        let back: SystemState = serde_json::from_value(json).unwrap();
        assert_eq!(back, s);
    }
}
