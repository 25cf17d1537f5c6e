//! Tab completion over commands, application ids and paths.

use nixfolio_types::AppId;
use nixfolio_vfs::Vfs;

use crate::interpreter::CommandRegistry;

/// The token completion works on: everything after the last space.
pub fn last_token(partial: &str) -> &str {
    partial.rsplit(' ').next().unwrap_or(partial)
}

/// The part of `token` a candidate must start with: the name after the last
/// `/`, or the whole token.
pub fn name_prefix(token: &str) -> &str {
    token.rfind('/').map_or(token, |i| &token[i + 1..])
}

/// Candidates for the last token of `partial`, in source order.
///
/// `partial` is split on single spaces, so a trailing space starts a new,
/// empty token. A first token completes to command names; the second token
/// after `open` to application ids; anything else to entries of the
/// directory the token points into, with `/` appended to directories.
pub fn suggest(partial: &str, commands: &CommandRegistry, vfs: &dyn Vfs, cwd: &str) -> Vec<String> {
    let parts: Vec<&str> = partial.split(' ').collect();
    let last = last_token(partial);

    if parts.len() == 1 {
        return commands
            .names()
            .filter(|name| name.starts_with(last))
            .map(String::from)
            .collect();
    }

    if parts.len() == 2 && parts[0] == "open" {
        return AppId::ALL
            .iter()
            .map(|id| id.as_str())
            .filter(|name| name.starts_with(last))
            .map(String::from)
            .collect();
    }

    let dir = match last.rfind('/') {
        Some(0) => "/",
        Some(i) => &last[..i],
        None => ".",
    };
    let prefix = name_prefix(last);

    let Some(entries) = vfs.list_directory(dir, cwd) else {
        return Vec::new();
    };
    entries
        .iter()
        .filter(|e| e.name.starts_with(prefix))
        .map(|e| {
            if e.is_dir() {
                format!("{}/", e.name)
            } else {
                e.name.clone()
            }
        })
        .collect()
}
