//! The launcher dock along the bottom edge.

use nixfolio_types::AppId;
use nixfolio_types::config::Theme;

use crate::manager::WindowManager;
use crate::state::SystemState;

/// One launcher slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DockItem {
    pub id: AppId,
    pub label: &'static str,
    /// Icon file name inside the themed icon directory.
    pub icon: &'static str,
}

impl DockItem {
    const fn new(id: AppId, label: &'static str, icon: &'static str) -> Self {
        Self { id, label, icon }
    }

    /// Icon URL for the given theme, e.g. `/icons/dark/terminal.svg`.
    pub fn icon_path(&self, theme: Theme) -> String {
        let dir = match theme {
            Theme::Dark => "dark",
            Theme::Light => "light",
        };
        format!("/icons/{dir}/{}", self.icon)
    }
}

const DEFAULT_ITEMS: [DockItem; 7] = [
    DockItem::new(AppId::Terminal, "Terminal", "terminal.svg"),
    DockItem::new(AppId::Files, "Files", "files.svg"),
    DockItem::new(AppId::Browser, "Browser", "browser.svg"),
    DockItem::new(AppId::Projects, "Projects", "code.svg"),
    DockItem::new(AppId::Editor, "Text Editor", "editor.svg"),
    DockItem::new(AppId::About, "About", "user.svg"),
    DockItem::new(AppId::Contact, "Contact", "contact.svg"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dock {
    items: Vec<DockItem>,
}

impl Dock {
    pub fn items(&self) -> &[DockItem] {
        &self.items
    }

    /// Open the app in `slot`. Returns the launched id, or `None` for an
    /// empty slot.
    pub fn launch(&self, wm: &mut WindowManager, slot: usize) -> Option<AppId> {
        let item = self.items.get(slot)?;
        log::debug!("dock launch {}", item.id);
        wm.open_window(item.id);
        Some(item.id)
    }

    /// Running indicator: the window is open (minimized counts).
    pub fn is_running(state: &SystemState, id: AppId) -> bool {
        state.window(id).is_open
    }

    /// The dock slides away while any visible window is maximized.
    pub fn is_hidden(state: &SystemState) -> bool {
        state.any_maximized()
    }
}

impl Default for Dock {
    fn default() -> Self {
        Self {
            items: DEFAULT_ITEMS.to_vec(),
        }
    }
}
