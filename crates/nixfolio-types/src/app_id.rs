//! The closed set of launchable applications.
//!
//! `AppId` is shared by the dock, the shell's `open` built-in and the window
//! manager. Adding an application means adding a variant here; every match
//! over it is then checked by the compiler.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NixfolioError;
use crate::geometry::{Position, Size};

/// One member of the fixed set of application kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppId {
    Terminal,
    Files,
    About,
    Projects,
    Contact,
    Editor,
    Browser,
    Resume,
}

impl AppId {
    /// Number of application kinds.
    pub const COUNT: usize = 8;

    /// Every application, in declaration order.
    pub const ALL: [AppId; Self::COUNT] = [
        AppId::Terminal,
        AppId::Files,
        AppId::About,
        AppId::Projects,
        AppId::Contact,
        AppId::Editor,
        AppId::Browser,
        AppId::Resume,
    ];

    /// Dense index in `0..COUNT`, stable across the process lifetime.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The identifier as typed at the shell (`open <id>`).
    pub const fn as_str(self) -> &'static str {
        match self {
            AppId::Terminal => "terminal",
            AppId::Files => "files",
            AppId::About => "about",
            AppId::Projects => "projects",
            AppId::Contact => "contact",
            AppId::Editor => "editor",
            AppId::Browser => "browser",
            AppId::Resume => "resume",
        }
    }

    /// Window title shown in the chrome.
    pub const fn title(self) -> &'static str {
        match self {
            AppId::Terminal => "Terminal",
            AppId::Files => "Files",
            AppId::About => "About",
            AppId::Projects => "Projects",
            AppId::Contact => "Contact",
            AppId::Editor => "Text Editor",
            AppId::Browser => "Web Browser",
            AppId::Resume => "Résumé",
        }
    }

    /// Restored-window position used when the window record is created.
    pub const fn default_position(self) -> Position {
        match self {
            AppId::Terminal | AppId::Projects | AppId::Editor => Position::new(100, 100),
            AppId::Files => Position::new(150, 150),
            AppId::About => Position::new(200, 200),
            AppId::Contact => Position::new(300, 200),
            AppId::Browser => Position::new(50, 50),
            AppId::Resume => Position::new(120, 60),
        }
    }

    /// Restored-window size used when the window record is created.
    pub const fn default_size(self) -> Size {
        match self {
            AppId::Terminal => Size::new(800, 500),
            AppId::Files => Size::new(900, 600),
            AppId::About => Size::new(500, 600),
            AppId::Projects => Size::new(1000, 700),
            AppId::Contact => Size::new(400, 500),
            AppId::Editor => Size::new(800, 600),
            AppId::Browser => Size::new(1024, 768),
            AppId::Resume => Size::new(850, 1000),
        }
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive parse (`open Files` is the same as `open files`).
impl FromStr for AppId {
    type Err = NixfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        AppId::ALL
            .into_iter()
            .find(|id| id.as_str() == lower)
            .ok_or(NixfolioError::UnknownApp(lower))
    }
}
