// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! flashback-git: Git history retrieval for flashback
//!
//! This library crate builds log/show/diff commands for a single tracked
//! file, executes them through an injectable process runner, and parses
//! the log output back into structured history records.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use flashback_git::format::{self, FormatSettings};
//! use flashback_git::{SystemGitRunner, file_history, find_repository_root};
//!
//! # async fn demo() -> Result<(), flashback_git::GitError> {
//! let file = std::path::Path::new("src/lib.rs");
//! let root = find_repository_root(file).expect("inside a repository");
//! let pretty = format::resolve(&FormatSettings::default());
//!
//! let records = file_history(&SystemGitRunner, &root, file, &pretty).await?;
//! for record in records {
//!     println!("{} - {}", record.commit, record.label);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod format;
pub mod locate;
pub mod log;
pub mod record;
pub mod runner;
pub mod show;

pub use error::GitError;
pub use format::{DEFAULT_FORMAT, FormatSettings};
pub use locate::{find_repository_root, relative_path};
pub use log::{RECORD_DELIMITER, file_history, parse_history};
pub use record::{CURRENT_COMMIT, HistoryRecord};
pub use runner::{GitRunner, SystemGitRunner};
pub use show::{diff_revisions, diff_working_tree, show_file_at};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::GitError;
    pub use crate::format::FormatSettings;
    pub use crate::log::{file_history, parse_history};
    pub use crate::record::{CURRENT_COMMIT, HistoryRecord};
    pub use crate::runner::{GitRunner, SystemGitRunner};
}
