// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for flashback-git

use thiserror::Error;

/// Errors that can occur while running git commands
#[derive(Debug, Error)]
pub enum GitError {
    /// The git binary could not be spawned
    #[error("Failed to run git: {source}")]
    Spawn {
        /// Underlying I/O error from the process spawn
        #[source]
        source: std::io::Error,
    },

    /// A git command exited with a non-zero status
    #[error("git {command} failed: {stderr}")]
    Command {
        /// The subcommand that failed (e.g. "log", "show", "diff")
        command: String,
        /// Captured standard error output
        stderr: String,
    },
}
