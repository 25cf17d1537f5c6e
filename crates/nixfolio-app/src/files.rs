//! Navigation state of the Files window.

use nixfolio_vfs::{FsNode, Vfs, join_path, parent_path, resolve};

/// What activating an entry did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Moved into a directory.
    Entered(String),
    /// A file was picked; its text goes to the editor.
    OpenFile { path: String, content: String },
}

/// Current directory of the Files window.
///
/// Separate from the shell's working directory: browsing never moves the
/// prompt and `cd` never moves the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBrowser {
    path: String,
}

impl FileBrowser {
    pub fn new(start: &str) -> Self {
        Self {
            path: resolve(start, "/"),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Entries of the current directory; empty if it has gone missing.
    pub fn entries<'v>(&self, vfs: &'v dyn Vfs) -> &'v [FsNode] {
        vfs.list_directory(&self.path, "/").unwrap_or_default()
    }

    pub fn can_go_up(&self) -> bool {
        self.path != "/"
    }

    /// Move to the parent directory. No-op at the root.
    pub fn up(&mut self) {
        self.path = parent_path(&self.path).to_string();
    }

    /// Jump to `path` (absolute, or relative to the current directory).
    /// Returns `false` and stays put unless it names a directory.
    pub fn navigate(&mut self, vfs: &dyn Vfs, path: &str) -> bool {
        let target = resolve(path, &self.path);
        if !vfs.is_dir(&target, "/") {
            return false;
        }
        self.path = target;
        true
    }

    /// `(name, path)` for every component of the current path, root excluded.
    pub fn breadcrumbs(&self) -> Vec<(&str, String)> {
        let mut dir = String::from("/");
        self.path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|name| {
                dir = join_path(&dir, name);
                (name, dir.clone())
            })
            .collect()
    }

    /// Activate the entry `name` of the current directory: enter a
    /// directory or hand back a file's content.
    pub fn activate(&mut self, vfs: &dyn Vfs, name: &str) -> Option<Activation> {
        let path = join_path(&self.path, name);
        let node = vfs.get_node(&path, "/")?;
        if node.is_dir() {
            self.path = path.clone();
            return Some(Activation::Entered(path));
        }
        let content = node.content().unwrap_or_default().to_string();
        Some(Activation::OpenFile { path, content })
    }
}

#[cfg(test)]
mod tests {
    use nixfolio_vfs::StaticVfs;

    use super::*;

    #[test]
    fn starts_at_normalized_path() {
        assert_eq!(FileBrowser::new("/home/hetav/").path(), "/home/hetav");
    }

    #[test]
    fn up_walks_to_root_and_stops() {
        let mut b = FileBrowser::new("/home/hetav");
        b.up();
        assert_eq!(b.path(), "/home");
        b.up();
        assert_eq!(b.path(), "/");
        assert!(!b.can_go_up());
        b.up();
        assert_eq!(b.path(), "/");
    }

    #[test]
    fn activate_enters_directories() {
        let vfs = StaticVfs::portfolio();
        let mut b = FileBrowser::new("/home/hetav");
        assert_eq!(
            b.activate(&vfs, "projects"),
            Some(Activation::Entered("/home/hetav/projects".into()))
        );
        assert!(b.entries(&vfs).iter().all(FsNode::is_dir));
    }

    #[test]
    fn activate_from_root_has_single_slash() {
        let vfs = StaticVfs::portfolio();
        let mut b = FileBrowser::new("/");
        assert_eq!(b.activate(&vfs, "home"), Some(Activation::Entered("/home".into())));
    }

    #[test]
    fn activate_file_returns_content_and_stays() {
        let vfs = StaticVfs::portfolio();
        let mut b = FileBrowser::new("/home/hetav/documents");
        let Some(Activation::OpenFile { path, content }) = b.activate(&vfs, "resume.txt") else {
            panic!("expected a file");
        };
        assert_eq!(path, "/home/hetav/documents/resume.txt");
        assert!(content.starts_with("Hetav Shah"));
        assert_eq!(b.path(), "/home/hetav/documents");
    }

    #[test]
    fn activate_missing_entry_is_none() {
        let vfs = StaticVfs::portfolio();
        let mut b = FileBrowser::new("/home/hetav");
        assert_eq!(b.activate(&vfs, "nope"), None);
        assert_eq!(b.path(), "/home/hetav");
    }

    #[test]
    fn navigate_rejects_files_and_missing_paths() {
        let vfs = StaticVfs::portfolio();
        let mut b = FileBrowser::new("/home/hetav");
        assert!(!b.navigate(&vfs, "documents/resume.txt"));
        assert!(!b.navigate(&vfs, "/nowhere"));
        assert!(b.navigate(&vfs, ".config"));
        assert_eq!(b.path(), "/home/hetav/.config");
        assert!(b.navigate(&vfs, "/"));
        assert_eq!(b.path(), "/");
    }

    #[test]
    fn breadcrumbs_accumulate_paths() {
        let b = FileBrowser::new("/home/hetav/projects");
        assert_eq!(
            b.breadcrumbs(),
            [
                ("home", "/home".to_string()),
                ("hetav", "/home/hetav".to_string()),
                ("projects", "/home/hetav/projects".to_string()),
            ]
        );
        assert!(FileBrowser::new("/").breadcrumbs().is_empty());
    }
}
