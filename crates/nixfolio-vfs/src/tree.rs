//! The static tree implementation.

use std::collections::HashSet;
use std::path::Path;

use nixfolio_types::error::{NixfolioError, Result};

use crate::Vfs;
use crate::node::FsNode;
use crate::path::join_path;
use crate::seed;

/// An immutable, validated directory tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticVfs {
    root: FsNode,
}

impl StaticVfs {
    /// Wrap a tree after checking its invariants: the root is a directory,
    /// every name is a plain non-empty segment, and sibling names are unique.
    pub fn new(root: FsNode) -> Result<Self> {
        if !root.is_dir() {
            return Err(NixfolioError::Vfs("root must be a directory".to_string()));
        }
        validate_children(&root, "/")?;
        Ok(Self { root })
    }

    /// The built-in portfolio tree.
    pub fn portfolio() -> Self {
        Self {
            root: seed::portfolio_tree(),
        }
    }

    /// Parse a tree from JSON in the flat `{name, type, content|children}` shape.
    pub fn from_json(text: &str) -> Result<Self> {
        let root: FsNode = serde_json::from_str(text)?;
        Self::new(root)
    }

    /// Load a JSON tree from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let vfs = Self::from_json(&text)?;
        log::info!("Loaded filesystem tree from {}", path.display());
        Ok(vfs)
    }
}

impl Default for StaticVfs {
    fn default() -> Self {
        Self::portfolio()
    }
}

impl Vfs for StaticVfs {
    fn root(&self) -> &FsNode {
        &self.root
    }
}

fn validate_children(dir: &FsNode, dir_path: &str) -> Result<()> {
    let Some(children) = dir.children() else {
        return Ok(());
    };
    let mut seen = HashSet::new();
    for child in children {
        let name = child.name.as_str();
        if name.is_empty() || name == "." || name == ".." || name.contains('/') {
            return Err(NixfolioError::Vfs(format!(
                "invalid name {name:?} in {dir_path}"
            )));
        }
        if !seen.insert(name) {
            return Err(NixfolioError::Vfs(format!(
                "duplicate name {name:?} in {dir_path}"
            )));
        }
        validate_children(child, &join_path(dir_path, name))?;
    }
    Ok(())
}
