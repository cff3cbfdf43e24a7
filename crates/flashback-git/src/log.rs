// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! File history retrieval and log output parsing
//!
//! The log is queried with a configurable `--pretty=format:` string
//! suffixed by a record delimiter, then parsed back into structured
//! records. Parsing is tolerant: malformed chunks are dropped, never
//! failed on.

use std::path::Path;

use tracing::debug;

use crate::error::GitError;
use crate::locate::relative_path;
use crate::record::HistoryRecord;
use crate::runner::GitRunner;

/// Delimiter appended to the log format to separate records
pub const RECORD_DELIMITER: &str = "---";

/// Fetch the history of `file_path`, newest first.
///
/// `format` is a resolved log format (see [`crate::format::resolve`]);
/// the command is scoped to the file's path relative to `root`.
///
/// # Errors
///
/// Returns [`GitError`] when the log command cannot be spawned or exits
/// non-zero; the captured stderr is carried in the error. There is no
/// retry.
pub async fn file_history<R: GitRunner + ?Sized>(
    runner: &R,
    root: &Path,
    file_path: &Path,
    format: &str,
) -> Result<Vec<HistoryRecord>, GitError> {
    let relative = relative_path(root, file_path);
    let args = vec![
        "log".to_string(),
        format!("--pretty=format:{format}{RECORD_DELIMITER}"),
        "--".to_string(),
        relative.to_string_lossy().into_owned(),
    ];

    let output = runner.run(&args, root).await?;
    Ok(parse_history(&output))
}

/// Parse raw log output into records, preserving the log's native order.
///
/// The output is split on [`RECORD_DELIMITER`]; each chunk contributes up
/// to three lines: subject, commit-info and date-info, with wrapping
/// quote characters stripped and missing lines left empty. A chunk whose
/// commit identifier cannot be extracted is dropped silently, which also
/// swallows the empty trailing chunk the delimiter split produces.
#[must_use]
pub fn parse_history(output: &str) -> Vec<HistoryRecord> {
    output.split(RECORD_DELIMITER).filter_map(parse_chunk).collect()
}

fn parse_chunk(chunk: &str) -> Option<HistoryRecord> {
    let mut lines = chunk.trim().lines();
    let subject = strip_quotes(lines.next().unwrap_or(""));
    let commit_line = strip_quotes(lines.next().unwrap_or(""));
    let date_line = strip_quotes(lines.next().unwrap_or(""));

    // The commit id is the first bracketed token, looked up in the
    // commit-info line first and the subject second.
    let Some(commit) = bracketed(commit_line).or_else(|| bracketed(subject)) else {
        if !chunk.trim().is_empty() {
            debug!(chunk = chunk.trim(), "dropping log chunk without a commit id");
        }
        return None;
    };

    let label = if subject.is_empty() { commit_line } else { subject };
    let description = if commit_line.is_empty() { date_line } else { commit_line };

    Some(HistoryRecord {
        label: label.to_string(),
        description: description.to_string(),
        detail: date_line.to_string(),
        commit: commit.to_string(),
    })
}

/// Strip one wrapping quote character from each end independently.
fn strip_quotes(line: &str) -> &str {
    let line = line.strip_prefix('"').unwrap_or(line);
    line.strip_suffix('"').unwrap_or(line)
}

/// First non-empty `[...]` token in `line`.
fn bracketed(line: &str) -> Option<&str> {
    let mut rest = line;
    while let Some(start) = rest.find('[') {
        let tail = &rest[start + 1..];
        match tail.find(']') {
            Some(0) => rest = tail,
            Some(end) => return Some(&tail[..end]),
            None => return None,
        }
    }
    None
}
