// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Content rendering into the editor surface
//!
//! Fetches revision content or diffs and swaps them into the host. A
//! failed fetch leaves the host untouched; the caller decides whether the
//! session goes on.

use std::path::Path;

use flashback_git::{GitRunner, HistoryRecord, diff_revisions, diff_working_tree, show_file_at};
use tracing::debug;

use crate::error::SessionError;
use crate::host::EditorHost;

/// Language tag applied to the content when a diff is shown
pub const DIFF_LANGUAGE: &str = "diff";

/// Placeholder content for a diff with no output
pub const NO_DIFFERENCES: &str = "No differences found";

/// Renders revision content and diffs for one file into a host
pub struct ContentRenderer<'a, R: GitRunner + ?Sized> {
    runner: &'a R,
    root: &'a Path,
    relative: &'a Path,
}

impl<'a, R: GitRunner + ?Sized> ContentRenderer<'a, R> {
    /// Renderer for the file at `relative` within `root`
    pub fn new(runner: &'a R, root: &'a Path, relative: &'a Path) -> Self {
        Self { runner, root, relative }
    }

    /// Replace the host content with the file as of `commit`.
    ///
    /// The display-language tag is left at the caller's discretion.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Render`] on command failure; the host
    /// content is left unchanged.
    pub async fn show_revision<H: EditorHost>(
        &self,
        host: &mut H,
        commit: &str,
    ) -> Result<(), SessionError> {
        let content = show_file_at(self.runner, self.root, commit, self.relative)
            .await
            .map_err(|source| SessionError::Render { source })?;

        host.replace_content(&content);
        Ok(())
    }

    /// Replace the host content with the diff between two selections and
    /// tag it as diff output.
    ///
    /// When either endpoint is the current-state sentinel the comparison
    /// runs against the working tree, since the live buffer has no
    /// revision identifier to diff against.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Render`] on command failure; the host
    /// content is left unchanged.
    pub async fn show_diff<H: EditorHost>(
        &self,
        host: &mut H,
        previous: &HistoryRecord,
        current: &HistoryRecord,
    ) -> Result<(), SessionError> {
        let output = if previous.is_current() || current.is_current() {
            debug!("diffing against the working tree");
            diff_working_tree(self.runner, self.root, self.relative).await
        } else {
            diff_revisions(
                self.runner,
                self.root,
                &previous.commit,
                &current.commit,
                self.relative,
            )
            .await
        }
        .map_err(|source| SessionError::Render { source })?;

        let content = if output.is_empty() {
            NO_DIFFERENCES
        } else {
            output.as_str()
        };
        host.replace_content(content);
        host.set_language(DIFF_LANGUAGE);
        Ok(())
    }
}
