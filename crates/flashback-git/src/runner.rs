// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! External git process execution
//!
//! Commands are built as explicit argument lists and spawned without a
//! shell, so paths containing quotes, spaces or leading dashes cannot be
//! reinterpreted by the command line.

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::GitError;

/// Capability to run a git subcommand and capture its output
///
/// Implementations must not interpret `args` through a shell. The session
/// layer depends only on this trait, so tests can substitute a scripted
/// runner for the system binary.
#[async_trait]
pub trait GitRunner: Send + Sync {
    /// Run `git` with the given argument list in `cwd`, returning stdout.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::Spawn`] when the binary cannot be started and
    /// [`GitError::Command`] with the captured stderr when it exits
    /// non-zero.
    async fn run(&self, args: &[String], cwd: &Path) -> Result<String, GitError>;
}

/// Runs the system `git` binary
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemGitRunner;

#[async_trait]
impl GitRunner for SystemGitRunner {
    async fn run(&self, args: &[String], cwd: &Path) -> Result<String, GitError> {
        debug!(?args, cwd = %cwd.display(), "running git");

        let output = Command::new("git")
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| GitError::Spawn { source })?;

        if !output.status.success() {
            return Err(GitError::Command {
                command: args.first().cloned().unwrap_or_default(),
                stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
