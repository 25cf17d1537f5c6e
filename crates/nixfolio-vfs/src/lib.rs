//! Virtual file system for the nixfolio shell.
//!
//! The tree is built once at startup and never mutated. All lookups take the
//! caller's current working directory explicitly; there is no global cwd.

mod node;
mod path;
mod seed;
mod tree;

pub use node::{FsNode, NodeKind};
pub use path::{join_path, parent_path, resolve};
pub use tree::StaticVfs;

/// Read-only access to a rooted directory tree.
///
/// Lookup misses are `None`; callers turn them into user-facing messages.
pub trait Vfs {
    /// The root directory node.
    fn root(&self) -> &FsNode;

    /// Resolve `path` against `cwd` and walk the tree to the node it names.
    ///
    /// Fails if any segment is absent or a file is traversed as a directory.
    fn get_node(&self, path: &str, cwd: &str) -> Option<&FsNode> {
        let absolute = resolve(path, cwd);
        let mut current = self.root();
        for segment in absolute.split('/').filter(|s| !s.is_empty()) {
            current = current.child(segment)?;
        }
        Some(current)
    }

    /// Children of the directory at `path`, in declaration order.
    fn list_directory(&self, path: &str, cwd: &str) -> Option<&[FsNode]> {
        self.get_node(path, cwd)?.children()
    }

    /// Content of the file at `path`.
    fn file_content(&self, path: &str, cwd: &str) -> Option<&str> {
        self.get_node(path, cwd)?.content()
    }

    /// Whether `path` names a directory.
    fn is_dir(&self, path: &str, cwd: &str) -> bool {
        self.get_node(path, cwd).is_some_and(FsNode::is_dir)
    }
}
