// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Repository root discovery
//!
//! Pure filesystem walk, no git invocation. Worktrees and submodules keep
//! a `.git` file rather than a directory, so any `.git` entry counts.

use std::path::{Path, PathBuf};

/// Find the nearest repository root containing `path`.
///
/// Walks the parent directories of `path` upward until one holds a `.git`
/// entry. Returns `None` when the filesystem root is reached without a
/// match; "not found" is an expected outcome, never an error.
#[must_use]
pub fn find_repository_root(path: &Path) -> Option<PathBuf> {
    let mut dir = path.parent()?;

    while dir.parent().is_some() {
        if dir.join(".git").exists() {
            return Some(dir.to_path_buf());
        }
        dir = dir.parent()?;
    }

    None
}

/// Path of `file` relative to `root`, used to scope every git command.
///
/// Falls back to `file` unchanged when it does not live under `root`.
#[must_use]
pub fn relative_path(root: &Path, file: &Path) -> PathBuf {
    file.strip_prefix(root)
        .map_or_else(|_| file.to_path_buf(), Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_find_root_with_git_directory() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let root = dir.path().join("project");
        std::fs::create_dir_all(root.join(".git")).expect("create .git");
        std::fs::create_dir_all(root.join("src/deep")).expect("create dirs");

        let file = root.join("src/deep/main.rs");
        assert_eq!(find_repository_root(&file), Some(root));
    }

    #[test]
    fn test_find_root_nearest_wins() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let outer = dir.path().join("outer");
        let inner = outer.join("inner");
        std::fs::create_dir_all(outer.join(".git")).expect("create outer .git");
        std::fs::create_dir_all(inner.join(".git")).expect("create inner .git");
        std::fs::create_dir_all(inner.join("src")).expect("create dirs");

        let file = inner.join("src/lib.rs");
        assert_eq!(find_repository_root(&file), Some(inner));
    }

    #[test]
    fn test_find_root_accepts_git_file() {
        // Linked worktrees record their git dir in a plain file.
        let dir = tempfile::tempdir().expect("create temp dir");
        let root = dir.path().join("worktree");
        std::fs::create_dir_all(&root).expect("create dirs");
        std::fs::write(root.join(".git"), "gitdir: /elsewhere\n").expect("write .git file");

        let file = root.join("notes.txt");
        assert_eq!(find_repository_root(&file), Some(root));
    }

    #[test]
    fn test_find_root_not_found() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let file = dir.path().join("plain/notes.txt");
        std::fs::create_dir_all(file.parent().expect("parent")).expect("create dirs");

        assert_eq!(find_repository_root(&file), None);
    }

    #[test]
    fn test_relative_path_inside_root() {
        let root = Path::new("/repo");
        let file = Path::new("/repo/src/lib.rs");
        assert_eq!(relative_path(root, file), PathBuf::from("src/lib.rs"));
    }

    #[test]
    fn test_relative_path_outside_root() {
        let root = Path::new("/repo");
        let file = Path::new("/elsewhere/notes.txt");
        assert_eq!(relative_path(root, file), PathBuf::from("/elsewhere/notes.txt"));
    }
}
