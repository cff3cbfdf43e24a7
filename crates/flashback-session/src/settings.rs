// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Settings model, configuration provider and settings-panel protocol
//!
//! Configuration lives in host-provided storage addressed by string keys.
//! Reads are tolerant: an absent key or a value of the wrong type falls
//! back to the documented default instead of failing.

use flashback_git::{DEFAULT_FORMAT, FormatSettings};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Errors raised by configuration storage or the settings protocol
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The backing store could not be read or written
    #[error("Failed to persist settings: {0}")]
    Storage(String),

    /// An inbound settings message could not be decoded
    #[error("Invalid settings message: {0}")]
    InvalidMessage(#[from] serde_json::Error),
}

/// Host-provided mutable configuration access
pub trait ConfigProvider {
    /// Current value stored under `key`, if any
    fn get(&self, key: &str) -> Option<Value>;

    /// Store `value` under `key`
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Storage`] when the backing store rejects
    /// the write.
    fn set(&mut self, key: &str, value: Value) -> Result<(), SettingsError>;
}

/// In-memory configuration provider
///
/// Useful for tests and for embedding the session logic without a
/// persistent store.
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    values: serde_json::Map<String, Value>,
}

impl MemoryProvider {
    /// Create an empty provider
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigProvider for MemoryProvider {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), SettingsError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// User-facing settings, one field per configuration key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Use `commit_format` verbatim instead of the display toggles
    pub use_custom_format: bool,
    /// Raw log format string, in git placeholder syntax
    pub commit_format: String,
    /// Show the commit subject line
    pub show_subject: bool,
    /// Show the abbreviated hash
    pub show_hash: bool,
    /// Show the committer name
    pub show_author: bool,
    /// Show the committer email
    pub show_email: bool,
    /// Show the committer date
    pub show_date: bool,
    /// Show the relative date
    pub show_relative_date: bool,
    /// Diff between the two most recent selections instead of showing one
    pub use_extended_diff: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            use_custom_format: false,
            commit_format: DEFAULT_FORMAT.to_string(),
            show_subject: true,
            show_hash: true,
            show_author: true,
            show_email: true,
            show_date: true,
            show_relative_date: true,
            use_extended_diff: false,
        }
    }
}

impl Settings {
    /// Read every key from `provider`, falling back to the documented
    /// default when a key is absent or holds the wrong type.
    pub fn load<P: ConfigProvider + ?Sized>(provider: &P) -> Self {
        let defaults = Self::default();
        Self {
            use_custom_format: bool_key(provider, "useCustomFormat", defaults.use_custom_format),
            commit_format: string_key(provider, "commitFormat", defaults.commit_format),
            show_subject: bool_key(provider, "showSubject", defaults.show_subject),
            show_hash: bool_key(provider, "showHash", defaults.show_hash),
            show_author: bool_key(provider, "showAuthor", defaults.show_author),
            show_email: bool_key(provider, "showEmail", defaults.show_email),
            show_date: bool_key(provider, "showDate", defaults.show_date),
            show_relative_date: bool_key(provider, "showRelativeDate", defaults.show_relative_date),
            use_extended_diff: bool_key(provider, "useExtendedDiff", defaults.use_extended_diff),
        }
    }

    /// Persist every key through `provider`.
    ///
    /// # Errors
    ///
    /// Returns the first [`SettingsError`] reported by the provider.
    pub fn store<P: ConfigProvider + ?Sized>(&self, provider: &mut P) -> Result<(), SettingsError> {
        provider.set("useCustomFormat", Value::Bool(self.use_custom_format))?;
        provider.set("commitFormat", Value::String(self.commit_format.clone()))?;
        provider.set("showSubject", Value::Bool(self.show_subject))?;
        provider.set("showHash", Value::Bool(self.show_hash))?;
        provider.set("showAuthor", Value::Bool(self.show_author))?;
        provider.set("showEmail", Value::Bool(self.show_email))?;
        provider.set("showDate", Value::Bool(self.show_date))?;
        provider.set("showRelativeDate", Value::Bool(self.show_relative_date))?;
        provider.set("useExtendedDiff", Value::Bool(self.use_extended_diff))?;
        Ok(())
    }

    /// The log-format fields of these settings
    #[must_use]
    pub fn format_settings(&self) -> FormatSettings {
        FormatSettings {
            use_custom_format: self.use_custom_format,
            custom_format: self.commit_format.clone(),
            show_subject: self.show_subject,
            show_hash: self.show_hash,
            show_author: self.show_author,
            show_email: self.show_email,
            show_date: self.show_date,
            show_relative_date: self.show_relative_date,
        }
    }
}

fn bool_key<P: ConfigProvider + ?Sized>(provider: &P, key: &str, default: bool) -> bool {
    provider.get(key).and_then(|v| v.as_bool()).unwrap_or(default)
}

fn string_key<P: ConfigProvider + ?Sized>(provider: &P, key: &str, default: String) -> String {
    provider
        .get(key)
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or(default)
}

/// Inbound messages from the settings panel
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum SettingsMessage {
    /// Persist the attached settings form state
    SaveSettings {
        /// The full settings form state
        settings: Settings,
    },
}

/// Decode one settings-panel message and apply it through `provider`.
///
/// Returns the settings that were persisted.
///
/// # Errors
///
/// Returns [`SettingsError::InvalidMessage`] for undecodable input and
/// [`SettingsError::Storage`] when persisting fails.
pub fn handle_message<P: ConfigProvider + ?Sized>(
    provider: &mut P,
    raw: &str,
) -> Result<Settings, SettingsError> {
    let message: SettingsMessage = serde_json::from_str(raw)?;
    match message {
        SettingsMessage::SaveSettings { settings } => {
            settings.store(provider)?;
            debug!("settings saved");
            Ok(settings)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use similar_asserts::assert_eq;

    #[test]
    fn test_documented_defaults() {
        let settings = Settings::default();
        assert!(!settings.use_custom_format);
        assert_eq!(settings.commit_format, DEFAULT_FORMAT);
        assert!(settings.show_subject);
        assert!(settings.show_hash);
        assert!(settings.show_author);
        assert!(settings.show_email);
        assert!(settings.show_date);
        assert!(settings.show_relative_date);
        assert!(!settings.use_extended_diff);
    }

    #[test]
    fn test_load_from_empty_provider_yields_defaults() {
        let provider = MemoryProvider::new();
        assert_eq!(Settings::load(&provider), Settings::default());
    }

    #[test]
    fn test_load_reads_stored_values() {
        let mut provider = MemoryProvider::new();
        provider.set("useExtendedDiff", json!(true)).expect("set");
        provider.set("showEmail", json!(false)).expect("set");
        provider.set("commitFormat", json!("%H %s")).expect("set");

        let settings = Settings::load(&provider);
        assert!(settings.use_extended_diff);
        assert!(!settings.show_email);
        assert_eq!(settings.commit_format, "%H %s");
        // Untouched keys keep their defaults.
        assert!(settings.show_subject);
    }

    #[test]
    fn test_load_ignores_wrong_types() {
        let mut provider = MemoryProvider::new();
        provider.set("showHash", json!("yes")).expect("set");
        provider.set("commitFormat", json!(42)).expect("set");

        let settings = Settings::load(&provider);
        assert!(settings.show_hash);
        assert_eq!(settings.commit_format, DEFAULT_FORMAT);
    }

    #[test]
    fn test_store_then_load_roundtrip() {
        let settings = Settings {
            use_custom_format: true,
            commit_format: "%h %s".to_string(),
            show_author: false,
            use_extended_diff: true,
            ..Default::default()
        };

        let mut provider = MemoryProvider::new();
        settings.store(&mut provider).expect("store");

        assert_eq!(Settings::load(&provider), settings);
    }

    #[test]
    fn test_format_settings_projection() {
        let settings = Settings {
            commit_format: "%h".to_string(),
            show_relative_date: false,
            use_extended_diff: true,
            ..Default::default()
        };

        let format = settings.format_settings();
        assert_eq!(format.custom_format, "%h");
        assert!(!format.show_relative_date);
        assert!(format.show_subject);
    }

    #[test]
    fn test_save_settings_message_applied() {
        let raw = r#"{
            "command": "saveSettings",
            "settings": {
                "useCustomFormat": false,
                "commitFormat": "%s%n[%h] %cN (%ce)%n%cD (%cr)",
                "showSubject": true,
                "showHash": true,
                "showAuthor": false,
                "showEmail": false,
                "showDate": true,
                "showRelativeDate": true,
                "useExtendedDiff": true
            }
        }"#;

        let mut provider = MemoryProvider::new();
        let saved = handle_message(&mut provider, raw).expect("handle message");

        assert!(!saved.show_author);
        assert!(saved.use_extended_diff);
        assert_eq!(provider.get("useExtendedDiff"), Some(json!(true)));
        assert_eq!(provider.get("showAuthor"), Some(json!(false)));
    }

    #[test]
    fn test_partial_message_fills_defaults() {
        let raw = r#"{"command": "saveSettings", "settings": {"useExtendedDiff": true}}"#;

        let mut provider = MemoryProvider::new();
        let saved = handle_message(&mut provider, raw).expect("handle message");

        assert!(saved.use_extended_diff);
        assert!(saved.show_subject);
    }

    #[test]
    fn test_unknown_command_rejected() {
        let mut provider = MemoryProvider::new();
        let result = handle_message(&mut provider, r#"{"command": "reset"}"#);
        assert!(matches!(result, Err(SettingsError::InvalidMessage(_))));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let mut provider = MemoryProvider::new();
        let result = handle_message(&mut provider, "not json");
        assert!(matches!(result, Err(SettingsError::InvalidMessage(_))));
    }

    #[test]
    fn test_settings_json_uses_camel_case_keys() {
        let json = serde_json::to_string(&Settings::default()).expect("serialize");
        assert!(json.contains("\"useCustomFormat\""));
        assert!(json.contains("\"showRelativeDate\""));
        assert!(!json.contains("use_custom_format"));
    }
}
