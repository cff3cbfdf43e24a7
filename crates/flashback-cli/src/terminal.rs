// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Terminal editing surface and interactive picker
//!
//! The terminal stands in for an editor: the browsed file is the active
//! document, renders reprint the buffer, and a numbered prompt plays the
//! role of the picker.

use std::io::{self, BufRead, Write};
use std::path::Path;

use flashback_git::GitRunner;
use flashback_session::{BrowseSession, Document, EditorHost, SessionError};
use tracing::debug;

/// Editor host over a file loaded from disk
///
/// The buffer starts as the file's on-disk content; replacements reprint
/// the buffer so the user sees each render.
pub struct TerminalEditor {
    document: Option<Document>,
}

impl TerminalEditor {
    /// Load `file` as the active document.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the file cannot be read as text.
    pub fn open(file: &Path) -> io::Result<Self> {
        let text = std::fs::read_to_string(file)?;
        let language = language_for(file);

        Ok(Self {
            document: Some(Document {
                path: file.to_path_buf(),
                text,
                language,
            }),
        })
    }

    fn print_buffer(&self) {
        if let Some(document) = &self.document {
            println!();
            println!("── {} [{}]", document.path.display(), document.language);
            println!("{}", document.text);
        }
    }
}

impl EditorHost for TerminalEditor {
    fn active_document(&self) -> Option<Document> {
        self.document.clone()
    }

    fn replace_content(&mut self, text: &str) {
        if let Some(document) = self.document.as_mut() {
            document.text = text.to_string();
        }
        self.print_buffer();
    }

    fn set_language(&mut self, language: &str) {
        if let Some(document) = self.document.as_mut() {
            document.language = language.to_string();
        }
    }
}

/// Display-language tag for a file, derived from its extension
fn language_for(file: &Path) -> String {
    file.extension()
        .map_or_else(|| "plaintext".to_string(), |e| e.to_string_lossy().into_owned())
}

/// Drive the interactive picker until the user confirms or cancels.
///
/// Entering a number highlights that entry (previewing it per the
/// configured mode), `ok` or an empty line applies the highlighted entry,
/// `q` cancels and restores the buffer. Render failures are reported and
/// the picker keeps running.
///
/// # Errors
///
/// Propagates [`SessionError`] from the final confirm render.
pub async fn run_picker<H: EditorHost, R: GitRunner + ?Sized>(
    mut session: BrowseSession<'_, H, R>,
) -> Result<(), SessionError> {
    let records = session.records().to_vec();

    println!("Select a commit to view:");
    println!("{}", "─".repeat(60));
    for (i, record) in records.iter().enumerate() {
        println!("{:3}. {}", i + 1, record.label);
        if !record.description.is_empty() {
            println!("     {}", record.description);
        }
        if !record.detail.is_empty() {
            println!("     {}", record.detail);
        }
    }
    println!("{}", "─".repeat(60));
    println!("Enter a number to preview, 'ok' to apply the highlighted entry, 'q' to cancel.");

    // The picker highlights its first entry as soon as it opens; the
    // session consumes that synthetic event without rendering.
    session.highlight(records[0].clone()).await?;
    let mut highlighted = 0usize;

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut input = String::new();
        let read = match io::stdin().lock().read_line(&mut input) {
            Ok(read) => read,
            Err(e) => {
                debug!(error = %e, "stdin read failed");
                0
            }
        };
        if read == 0 {
            session.cancel();
            println!("Cancelled, buffer restored.");
            return Ok(());
        }

        match input.trim() {
            "q" | "quit" => {
                session.cancel();
                println!("Cancelled, buffer restored.");
                return Ok(());
            }
            "ok" | "" => {
                let record = records[highlighted].clone();
                session.confirm(record.clone()).await?;
                println!("Applied {}.", record.label);
                return Ok(());
            }
            entry => match entry.parse::<usize>() {
                Ok(n) if (1..=records.len()).contains(&n) => {
                    highlighted = n - 1;
                    if let Err(e) = session.highlight(records[highlighted].clone()).await {
                        eprintln!("{e}");
                    }
                }
                _ => println!("Invalid selection (1-{}, 'ok' or 'q').", records.len()),
            },
        }
    }
}
