// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! JSON-file-backed configuration provider
//!
//! Settings persist as a single JSON object keyed by configuration key.
//! A missing file is an empty configuration; every write lands on disk
//! immediately so a crash can't lose an applied settings form.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use flashback_session::{ConfigProvider, SettingsError};
use serde_json::{Map, Value};
use tracing::debug;

/// Configuration provider persisted as a JSON object on disk
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
    values: Map<String, Value>,
}

impl JsonFileProvider {
    /// Open the provider, loading existing values when the file exists.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Storage`] when the file exists but cannot
    /// be read or is not a JSON object.
    pub fn open(path: PathBuf) -> Result<Self, SettingsError> {
        let values = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => Map::new(),
            Ok(content) => serde_json::from_str(&content)
                .map_err(|e| SettingsError::Storage(format!("{}: {e}", path.display())))?,
            Err(e) if e.kind() == ErrorKind::NotFound => Map::new(),
            Err(e) => {
                return Err(SettingsError::Storage(format!("{}: {e}", path.display())));
            }
        };

        debug!(path = %path.display(), keys = values.len(), "settings store opened");
        Ok(Self { path, values })
    }

    /// The file this provider persists to
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn persist(&self) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| SettingsError::Storage(format!("{}: {e}", parent.display())))?;
        }

        let json = serde_json::to_string_pretty(&Value::Object(self.values.clone()))
            .map_err(|e| SettingsError::Storage(e.to_string()))?;
        fs::write(&self.path, json)
            .map_err(|e| SettingsError::Storage(format!("{}: {e}", self.path.display())))?;
        Ok(())
    }
}

impl ConfigProvider for JsonFileProvider {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), SettingsError> {
        self.values.insert(key.to_string(), value);
        self.persist()
    }
}
