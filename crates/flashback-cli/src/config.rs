//! Configuration for the flashback CLI
//!
//! This module provides the command-line surface: the browse and settings
//! commands, the settings-file location, and logging options.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Flashback - step through a file's git history from the terminal
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "flashback")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the settings file
    ///
    /// If the file doesn't exist it is created on the first save.
    /// Defaults to flashback/settings.json under the platform config
    /// directory.
    #[arg(short, long, env = "FLASHBACK_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    ///
    /// When enabled, every git invocation and render decision is logged
    /// to stderr.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Browse the history of a tracked file
    ///
    /// Opens an interactive picker over the file's commits plus a
    /// current-state entry. Highlighting an entry previews it; confirming
    /// applies it; quitting restores the buffer.
    Browse {
        /// File whose history to browse
        file: PathBuf,
    },

    /// Show or update the stored settings
    ///
    /// Without flags the current effective settings are printed as JSON.
    Settings {
        /// Apply a saveSettings message read from this file ('-' = stdin)
        ///
        /// Example message:
        ///   {"command": "saveSettings", "settings": {"useExtendedDiff": true}}
        #[arg(long)]
        apply: Option<PathBuf>,
    },
}

impl Config {
    /// Get the settings file path, using a default if not specified
    ///
    /// Default location is platform-specific:
    /// - macOS: ~/Library/Application Support/flashback/settings.json
    /// - Linux: ~/.config/flashback/settings.json
    /// - Windows: %APPDATA%\flashback\settings.json
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.settings.clone().unwrap_or_else(|| {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("flashback")
                .join("settings.json")
        })
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The browsed file doesn't exist
    /// - The settings parent directory cannot be created
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(Command::Browse { ref file }) = self.command {
            if !file.exists() {
                return Err(ConfigError::FileNotFound(file.clone()));
            }
            if !file.is_file() {
                return Err(ConfigError::NotAFile(file.clone()));
            }
        }

        let settings_path = self.settings_path();
        if let Some(parent) = settings_path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ConfigError::SettingsDirectoryCreateFailed(parent.to_path_buf(), e)
                })?;
            }
        }

        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Browsed file not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Browsed path is not a regular file
    #[error("Not a file: {0}")]
    NotAFile(PathBuf),

    /// Failed to create the settings directory
    #[error("Failed to create settings directory {0}: {1}")]
    SettingsDirectoryCreateFailed(PathBuf, std::io::Error),
}
