//! Candidate File Enumeration
//!
//! Recursive walk over the target directory yielding regular files with a
//! `.heic` extension, any letter casing.

use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Only the four-letter `heic` extension is selected. `.heif` is
/// deliberately not matched.
pub const HEIC_EXTENSION: &str = "heic";

pub fn is_heic(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(HEIC_EXTENSION))
        .unwrap_or(false)
}

/// Lazy, single-pass walk of `root` and all subdirectories.
///
/// Symlinked directories are not descended into. A symlink whose target is
/// a regular file still counts as a candidate. Unreadable entries are
/// skipped with a warning; the walk itself never fails. Traversal order is
/// filesystem-dependent.
pub fn heic_files(root: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| {
            entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file())
        })
        .filter(|entry| is_heic(entry.path()))
        .map(|entry| entry.into_path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::fs;

    fn touch(path: &Path) {
        fs::write(path, b"stub").unwrap();
    }

    #[test]
    fn test_is_heic() {
        assert!(is_heic(Path::new("photo.heic")));
        assert!(is_heic(Path::new("photo.HEIC")));
        assert!(is_heic(Path::new("photo.HeIc")));
        assert!(is_heic(Path::new("photo.heiC")));
        assert!(!is_heic(Path::new("photo.heif")));
        assert!(!is_heic(Path::new("photo.jpeg")));
        assert!(!is_heic(Path::new("photo.heic.bak")));
        assert!(!is_heic(Path::new("heic")));
    }

    #[test]
    fn test_discovers_all_casings_once() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.heic"));
        touch(&dir.path().join("b.HEIC"));
        touch(&dir.path().join("c.HeIc"));
        touch(&dir.path().join("d.heif"));
        touch(&dir.path().join("e.jpeg"));
        touch(&dir.path().join("noext"));

        let found: BTreeSet<String> = heic_files(dir.path())
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        let count = heic_files(dir.path()).count();

        assert_eq!(count, 3, "each match discovered exactly once");
        assert!(found.contains("a.heic"));
        assert!(found.contains("b.HEIC"));
        assert!(found.contains("c.HeIc"));
        assert!(!found.contains("d.heif"));
        assert!(!found.contains("e.jpeg"));
    }

    #[test]
    fn test_discovers_nested_files_at_any_depth() {
        let dir = tempfile::tempdir().unwrap();
        let deep = dir.path().join("sub").join("deeper");
        fs::create_dir_all(&deep).unwrap();
        touch(&dir.path().join("a.heic"));
        touch(&deep.join("b.heic"));

        let found: BTreeSet<PathBuf> = heic_files(dir.path()).collect();
        assert_eq!(found.len(), 2);
        assert!(found.contains(&dir.path().join("a.heic")));
        assert!(found.contains(&deep.join("b.heic")));
    }

    #[test]
    fn test_directories_named_heic_are_not_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("folder.heic")).unwrap();

        assert_eq!(heic_files(dir.path()).count(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directories_are_not_descended() {
        let outside = tempfile::tempdir().unwrap();
        touch(&outside.path().join("hidden.heic"));

        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.heic"));
        std::os::unix::fs::symlink(outside.path(), dir.path().join("linked")).unwrap();

        let found: Vec<PathBuf> = heic_files(dir.path()).collect();
        assert_eq!(found, vec![dir.path().join("a.heic")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_to_regular_file_is_a_candidate() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("target.bin"));
        std::os::unix::fs::symlink(dir.path().join("target.bin"), dir.path().join("alias.heic"))
            .unwrap();

        let found: BTreeSet<PathBuf> = heic_files(dir.path()).collect();
        assert_eq!(found.len(), 1);
        assert!(found.contains(&dir.path().join("alias.heic")));
    }

    #[test]
    fn test_empty_tree_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(heic_files(dir.path()).count(), 0);
    }
}
