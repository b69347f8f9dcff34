//! Path normalization utilities.
//!
//! - `normalize_path` - file system paths (canonicalize + fallback)
//! - `resolve_config_path` - `~` expansion, then resolve against a root

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Resolve a path taken from the config file.
///
/// Expands a leading `~`, then joins relative paths onto `root`.
///
/// # Example
/// ```ignore
/// resolve_config_path(Path::new("BadgeImages"), root)   // <root>/BadgeImages
/// resolve_config_path(Path::new("~/Badges"), root)      // $HOME/Badges
/// ```
pub fn resolve_config_path(path: &Path, root: &Path) -> PathBuf {
    let path = match path.to_str() {
        Some(raw) => PathBuf::from(shellexpand::tilde(raw).into_owned()),
        None => path.to_path_buf(),
    };
    if path.is_relative() {
        root.join(path)
    } else {
        path
    }
}

/// Find a file by searching upward from `start`
///
/// Walks up parent directories until `name` exists.
///
/// ```text
/// /home/user/app/BadgeImages/Countries/  ← start
/// /home/user/app/badge-import.toml       ← found!
/// ```
pub fn find_upward(start: &Path, name: &Path) -> Option<PathBuf> {
    if name.is_absolute() {
        return name.exists().then(|| name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
        current = current.parent()?;
    }
}
