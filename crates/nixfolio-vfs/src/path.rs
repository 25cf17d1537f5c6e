//! Path normalization.
//!
//! Paths are `/`-separated. Resolution never fails: `..` above the root
//! clamps at `/`.

/// Resolve `path` against `cwd` into a normalized absolute path.
///
/// Absolute paths ignore `cwd`. Empty and `.` segments are dropped; `..`
/// pops the last pushed segment if there is one.
pub fn resolve(path: &str, cwd: &str) -> String {
    let relative_base = if path.starts_with('/') { "" } else { cwd };

    let mut parts: Vec<&str> = Vec::new();
    for segment in relative_base.split('/').chain(path.split('/')) {
        match segment {
            "" | "." => {},
            ".." => {
                parts.pop();
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", parts.join("/"))
    }
}

/// Parent of a normalized absolute path; the root is its own parent.
pub fn parent_path(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) | None => "/",
        Some(i) => &path[..i],
    }
}

/// Append one name to a normalized absolute directory path.
pub fn join_path(dir: &str, name: &str) -> String {
    if dir == "/" {
        format!("/{name}")
    } else {
        format!("{dir}/{name}")
    }
}
