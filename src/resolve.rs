//! Target Directory Resolution
//!
//! Expands `~` and resolves the user-supplied directory to a canonical
//! absolute path before any filesystem work starts.

use crate::errors::{Error, Result};
use std::path::{Component, Path, PathBuf};

/// Resolve a user-supplied directory string to a canonical absolute path.
///
/// The path must exist at the time of the call; a missing directory is the
/// one fatal condition of the whole program.
pub fn resolve_directory(input: &str) -> Result<PathBuf> {
    let expanded = expand_home(input);
    let absolute = normalize(&std::path::absolute(&expanded)?);

    if !absolute.exists() {
        return Err(Error::DirectoryNotFound(absolute));
    }

    // Resolves symlinks.
    Ok(std::fs::canonicalize(absolute)?)
}

/// Lexically strip `.` and `..` segments. `std::path::absolute` leaves them
/// in place, and canonicalize cannot run on a nonexistent path, so the
/// DirectoryNotFound error would otherwise carry the raw dotted form.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            // `..` at the root stays at the root.
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

fn expand_home(input: &str) -> PathBuf {
    if input == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = input.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(input)
}
