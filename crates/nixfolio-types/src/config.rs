//! Desktop configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! the stock portfolio desktop.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{NixfolioError, Result};
use crate::geometry::Size;

/// Colour scheme of the desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The other theme.
    pub const fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Top-level configuration (`nixfolio.toml`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    /// Login name shown by `whoami` and the banner.
    pub user: String,
    /// Host name shown in the banner.
    pub hostname: String,
    /// Home directory; `cd` with no argument returns here.
    pub home: String,
    /// Viewport width used for maximized windows.
    pub viewport_width: u32,
    /// Viewport height used for maximized windows.
    pub viewport_height: u32,
    /// Height of the top bar that maximized windows sit below.
    pub topbar_height: u32,
    /// Two title-bar presses closer than this count as a double click.
    pub double_click_ms: u64,
    /// Initial colour scheme.
    pub theme: Theme,
    /// Whether the desktop starts in the booting state.
    pub boot_animation: bool,
    /// Optional JSON file replacing the built-in filesystem tree.
    pub filesystem: Option<PathBuf>,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            user: "hetav".to_string(),
            hostname: "portfolio".to_string(),
            home: "/home/hetav".to_string(),
            viewport_width: 1920,
            viewport_height: 1080,
            topbar_height: 32,
            double_click_ms: 250,
            theme: Theme::Dark,
            boot_animation: true,
            filesystem: None,
        }
    }
}

impl DesktopConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: DesktopConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        log::debug!("Loaded config from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Viewport as a size.
    pub fn viewport(&self) -> Size {
        Size::new(self.viewport_width, self.viewport_height)
    }

    fn validate(&self) -> Result<()> {
        if !self.home.starts_with('/') {
            return Err(NixfolioError::Config(format!(
                "home must be an absolute path: {}",
                self.home
            )));
        }
        if self.topbar_height >= self.viewport_height {
            return Err(NixfolioError::Config(format!(
                "topbar_height {} leaves no room in a {}px viewport",
                self.topbar_height, self.viewport_height
            )));
        }
        Ok(())
    }
}
