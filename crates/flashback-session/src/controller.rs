// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Interactive history browsing sessions
//!
//! A session moves through `Idle -> Browsing -> {Applied, Cancelled}`.
//! Opening snapshots the active document and fetches the file's history;
//! highlight events drive renders; confirm and cancel consume the session
//! and restore what needs restoring.

use std::path::PathBuf;

use flashback_git::{self as git, GitRunner, HistoryRecord};
use tracing::{debug, info};

use crate::error::SessionError;
use crate::host::{Document, EditorHost};
use crate::render::ContentRenderer;
use crate::settings::Settings;

/// Highlight bookkeeping for the diff-between-two-selections mode
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Previously highlighted entry
    pub previous: Option<HistoryRecord>,
    /// Currently highlighted entry
    pub current: Option<HistoryRecord>,
    /// Set until the synthetic highlight fired on picker open is consumed
    ///
    /// Hosts deliver one highlight event synchronously when the picker
    /// opens, with no user intent behind it; it is skipped by flag rather
    /// than inferred from timing.
    pub first_highlight_event: bool,
}

/// One browsing session over the active document's history
///
/// Exclusive owner of the editor buffer and selection state for its
/// duration; dropped (or consumed by [`confirm`](Self::confirm) /
/// [`cancel`](Self::cancel)) when the picker closes.
pub struct BrowseSession<'a, H: EditorHost, R: GitRunner + ?Sized> {
    host: &'a mut H,
    runner: &'a R,
    root: PathBuf,
    relative: PathBuf,
    snapshot: Document,
    records: Vec<HistoryRecord>,
    state: SelectionState,
    extended_diff: bool,
    diff_shown: bool,
}

impl<'a, H: EditorHost, R: GitRunner + ?Sized> BrowseSession<'a, H, R> {
    /// Open a session over the host's active document.
    ///
    /// The document text and language tag are snapshotted once; edits made
    /// through the host afterwards are not tracked.
    ///
    /// # Errors
    ///
    /// Fails before any editor state is touched when there is no active
    /// document ([`SessionError::NoActiveEditor`]), the file is outside a
    /// repository ([`SessionError::NotInRepository`]) or the log cannot be
    /// retrieved ([`SessionError::History`]).
    pub async fn open(
        host: &'a mut H,
        runner: &'a R,
        settings: &Settings,
    ) -> Result<Self, SessionError> {
        let document = host.active_document().ok_or(SessionError::NoActiveEditor)?;

        let root = git::find_repository_root(&document.path).ok_or_else(|| {
            SessionError::NotInRepository {
                path: document.path.display().to_string(),
            }
        })?;
        let relative = git::relative_path(&root, &document.path);

        let format = git::format::resolve(&settings.format_settings());
        let history = git::file_history(runner, &root, &document.path, &format)
            .await
            .map_err(|source| SessionError::History { source })?;

        info!(
            records = history.len(),
            file = %relative.display(),
            "opened history session"
        );

        let mut records = Vec::with_capacity(history.len() + 1);
        records.push(HistoryRecord::current());
        records.extend(history);

        Ok(Self {
            host,
            runner,
            root,
            relative,
            snapshot: document,
            records,
            state: SelectionState {
                first_highlight_event: true,
                ..SelectionState::default()
            },
            extended_diff: settings.use_extended_diff,
            diff_shown: false,
        })
    }

    /// The presented entries: the current-state sentinel followed by the
    /// log's records, newest first.
    #[must_use]
    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    /// The selection state, exposed for inspection
    #[must_use]
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// React to a highlight change in the picker.
    ///
    /// With extended-diff mode off, or before a previous selection exists,
    /// the highlighted entry is shown on its own; otherwise the diff
    /// between the previous and current selections is shown.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Render`] when the underlying command fails.
    /// The session stays usable; content remains at its last successfully
    /// rendered state.
    pub async fn highlight(&mut self, record: HistoryRecord) -> Result<(), SessionError> {
        if self.state.first_highlight_event {
            self.state.first_highlight_event = false;
            debug!("ignoring the synthetic highlight fired on picker open");
            return Ok(());
        }

        self.state.previous = self.state.current.take();
        self.state.current = Some(record.clone());

        self.render_selection(&record).await
    }

    /// Confirm `record` and close the session.
    ///
    /// The final content is rendered under the same rule as highlight
    /// events; the snapshot's language tag comes back unless that final
    /// render was a diff.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Render`] when the final render fails.
    pub async fn confirm(mut self, record: HistoryRecord) -> Result<(), SessionError> {
        if self.state.current.as_ref() != Some(&record) {
            self.state.previous = self.state.current.take();
            self.state.current = Some(record.clone());
        }

        self.render_selection(&record).await?;

        if !self.diff_shown {
            self.host.set_language(&self.snapshot.language);
        }

        debug!(commit = %record.commit, "selection applied");
        Ok(())
    }

    /// Dismiss the session, restoring the snapshot text and language
    /// exactly and undoing all exploratory renders.
    pub fn cancel(self) {
        self.host.replace_content(&self.snapshot.text);
        self.host.set_language(&self.snapshot.language);
        debug!("session cancelled, snapshot restored");
    }

    async fn render_selection(&mut self, record: &HistoryRecord) -> Result<(), SessionError> {
        let renderer = ContentRenderer::new(self.runner, &self.root, &self.relative);

        match self.state.previous.clone() {
            Some(previous) if self.extended_diff => {
                renderer.show_diff(self.host, &previous, record).await?;
                self.diff_shown = true;
            }
            _ => {
                if record.is_current() {
                    self.host.replace_content(&self.snapshot.text);
                } else {
                    renderer.show_revision(self.host, &record.commit).await?;
                }
                self.diff_shown = false;
            }
        }

        Ok(())
    }
}
