// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for flashback-session

use flashback_git::GitError;
use thiserror::Error;

/// Errors raised while opening or driving a browsing session
///
/// `NoActiveEditor`, `NotInRepository` and `History` abort an invocation
/// before any editor state is touched; `Render` is surfaced to the user
/// while the session keeps accepting selections.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No active document to browse
    #[error("No active editor")]
    NoActiveEditor,

    /// The active file is not inside a git repository
    #[error("This file is not in a git repository: {path}")]
    NotInRepository {
        /// The file whose parent directories were searched
        path: String,
    },

    /// The history log could not be retrieved; the session never starts
    #[error("Can't get git log: {source}")]
    History {
        /// The underlying command failure
        #[source]
        source: GitError,
    },

    /// A show/diff render failed mid-session; content is left at its last
    /// successfully rendered state
    #[error("Error showing diff: {source}")]
    Render {
        /// The underlying command failure
        #[source]
        source: GitError,
    },
}
