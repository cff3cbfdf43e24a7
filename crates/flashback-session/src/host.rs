//! Editing-surface host abstraction
//!
//! The session logic needs exactly three capabilities from whatever hosts
//! the text being browsed: read the active document, replace the visible
//! content, and retag its display language. Keeping the surface this
//! narrow lets every component above it run against a fake host in tests.

use std::path::PathBuf;

/// A snapshot of the host's active document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Path of the file backing the document
    pub path: PathBuf,
    /// Full visible text, including unsaved edits
    pub text: String,
    /// Display-language tag (e.g. "rust", "diff", "plaintext")
    pub language: String,
}

/// Narrow interface to the editing surface
pub trait EditorHost {
    /// The currently active document, if any
    fn active_document(&self) -> Option<Document>;

    /// Replace the full visible content with `text`
    fn replace_content(&mut self, text: &str);

    /// Set the visible content's display-language tag
    fn set_language(&mut self, language: &str);
}
