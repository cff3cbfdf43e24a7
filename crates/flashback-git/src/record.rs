//! History record types

use serde::{Deserialize, Serialize};

/// Sentinel revision identifier for the live, possibly-uncommitted buffer
pub const CURRENT_COMMIT: &str = "CURRENT";

/// One entry in a file's history listing
///
/// Commit rows are produced by the log parser; the single current-state
/// entry is synthesized per browsing session and always presented first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Display subject, falling back to the commit-info line
    pub label: String,
    /// Secondary line, e.g. hash/author/email
    pub description: String,
    /// Tertiary line, e.g. date info
    pub detail: String,
    /// Revision identifier, or [`CURRENT_COMMIT`]
    pub commit: String,
}

impl HistoryRecord {
    /// Build the synthetic entry representing the unsaved editor buffer
    #[must_use]
    pub fn current() -> Self {
        Self {
            label: "Current State".to_string(),
            description: "Uncommitted changes".to_string(),
            detail: String::new(),
            commit: CURRENT_COMMIT.to_string(),
        }
    }

    /// Whether this record is the synthetic current-state entry
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.commit == CURRENT_COMMIT
    }
}
