//! Local path computation for targets.
//!
//! A target's local path is `root_dir/target` resolved to a canonical
//! absolute path (symlinks followed, `.`/`..` removed), then re-expressed
//! relative to the current working directory.

use std::env;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Computes the local path for `target` under `root_dir`.
///
/// The result is relative to the current working directory and may climb out
/// of it (leading `..` components) when `root_dir` does. Deterministic for a
/// fixed filesystem state and working directory.
pub fn static_path(root_dir: &Path, target: &str) -> io::Result<PathBuf> {
    let resolved = canonicalize_lenient(&root_dir.join(target))?;
    let cwd = fs::canonicalize(env::current_dir()?)?;
    Ok(relative_from(&resolved, &cwd))
}

/// `fs::canonicalize` that tolerates a missing tail: the longest existing
/// ancestor is canonicalized and the remaining components are resolved
/// lexically. The usual case is a target that has not been fetched yet.
pub fn canonicalize_lenient(path: &Path) -> io::Result<PathBuf> {
    match fs::canonicalize(path) {
        Ok(resolved) => Ok(resolved),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            let mut components = path.components();
            let last = components.next_back();
            let parent = components.as_path();
            let base = if parent.as_os_str().is_empty() {
                fs::canonicalize(env::current_dir()?)?
            } else {
                canonicalize_lenient(parent)?
            };
            Ok(match last {
                Some(Component::Normal(name)) => base.join(name),
                Some(Component::ParentDir) => match base.parent() {
                    Some(up) => up.to_path_buf(),
                    None => base,
                },
                // `.`, a root, or a prefix cannot itself be the missing part.
                _ => base,
            })
        }
        Err(e) => Err(e),
    }
}

/// Re-expresses `path` relative to `base`. Both must be absolute and
/// canonical. Equal paths yield `.`; a `base` that is not an ancestor of
/// `path` is climbed out of with `..` components.
pub fn relative_from(path: &Path, base: &Path) -> PathBuf {
    let mut path_components = path.components().peekable();
    let mut base_components = base.components().peekable();

    while let (Some(a), Some(b)) = (path_components.peek(), base_components.peek()) {
        if a != b {
            break;
        }
        path_components.next();
        base_components.next();
    }

    let mut relative = PathBuf::new();
    for _ in base_components {
        relative.push("..");
    }
    for component in path_components {
        relative.push(component.as_os_str());
    }
    if relative.as_os_str().is_empty() {
        relative.push(".");
    }
    relative
}
