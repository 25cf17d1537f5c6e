//! File and directory nodes.

use serde::{Deserialize, Serialize};

/// A single node in the tree. Parents own their children exclusively.
///
/// Serialises to the flat shape `{"name": .., "type": "file", "content": ..}`
/// or `{"name": .., "type": "directory", "children": [..]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FsNode {
    pub name: String,
    #[serde(flatten)]
    pub kind: NodeKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeKind {
    File {
        #[serde(default)]
        content: String,
    },
    Directory {
        #[serde(default)]
        children: Vec<FsNode>,
    },
}

impl FsNode {
    pub fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File {
                content: content.into(),
            },
        }
    }

    pub fn dir(name: impl Into<String>, children: Vec<FsNode>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Directory { children },
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File { .. })
    }

    /// Children in declaration order, or `None` for a file.
    pub fn children(&self) -> Option<&[FsNode]> {
        match &self.kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File { .. } => None,
        }
    }

    /// File content, or `None` for a directory.
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::File { content } => Some(content),
            NodeKind::Directory { .. } => None,
        }
    }

    /// Direct child with exactly this name. Always `None` for files.
    pub fn child(&self, name: &str) -> Option<&FsNode> {
        self.children()?.iter().find(|c| c.name == name)
    }
}
