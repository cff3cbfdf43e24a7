// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Content and diff retrieval at revisions

use std::path::Path;

use crate::error::GitError;
use crate::runner::GitRunner;

/// Fetch the content of `relative` as of `commit`, verbatim.
///
/// # Errors
///
/// Returns [`GitError`] when the show command cannot be spawned or exits
/// non-zero (e.g. the file did not exist at that revision).
pub async fn show_file_at<R: GitRunner + ?Sized>(
    runner: &R,
    root: &Path,
    commit: &str,
    relative: &Path,
) -> Result<String, GitError> {
    let args = vec![
        "show".to_string(),
        "--encoding=utf8".to_string(),
        format!("{commit}:{}", relative.to_string_lossy()),
    ];
    runner.run(&args, root).await
}

/// Diff `relative` between two revisions.
///
/// # Errors
///
/// Returns [`GitError`] when the diff command cannot be spawned or exits
/// non-zero.
pub async fn diff_revisions<R: GitRunner + ?Sized>(
    runner: &R,
    root: &Path,
    from: &str,
    to: &str,
    relative: &Path,
) -> Result<String, GitError> {
    let args = vec![
        "diff".to_string(),
        "--encoding=utf8".to_string(),
        from.to_string(),
        to.to_string(),
        "--".to_string(),
        relative.to_string_lossy().into_owned(),
    ];
    runner.run(&args, root).await
}

/// Diff `relative` against the working tree.
///
/// Used when one endpoint of a comparison is the live buffer, which has
/// no revision identifier to diff against.
///
/// # Errors
///
/// Returns [`GitError`] when the diff command cannot be spawned or exits
/// non-zero.
pub async fn diff_working_tree<R: GitRunner + ?Sized>(
    runner: &R,
    root: &Path,
    relative: &Path,
) -> Result<String, GitError> {
    let args = vec![
        "diff".to_string(),
        "--".to_string(),
        relative.to_string_lossy().into_owned(),
    ];
    runner.run(&args, root).await
}
