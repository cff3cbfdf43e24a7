//! flashback: step through a file's git history from the terminal
//!
//! This binary wires the terminal editor, the JSON settings store and the
//! system git runner into a browsing session.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use flashback_cli::config::{Command, Config};
use flashback_cli::store::JsonFileProvider;
use flashback_cli::terminal::{TerminalEditor, run_picker};
use flashback_git::SystemGitRunner;
use flashback_session::{BrowseSession, Settings, handle_message};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing subscriber; logs go to stderr so renders stay
    // readable on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    config.validate()?;

    let mut provider = JsonFileProvider::open(config.settings_path())?;

    match config.command {
        Some(Command::Browse { ref file }) => {
            let settings = Settings::load(&provider);
            let runner = SystemGitRunner;

            let mut editor = TerminalEditor::open(file)
                .with_context(|| format!("Failed to open {}", file.display()))?;

            let session = BrowseSession::open(&mut editor, &runner, &settings).await?;
            run_picker(session).await?;
        }
        Some(Command::Settings { ref apply }) => match apply {
            Some(path) => {
                let raw = read_message(path)?;
                let saved = handle_message(&mut provider, &raw)?;
                info!(path = %provider.path().display(), "settings updated");
                println!("{}", serde_json::to_string_pretty(&saved)?);
            }
            None => {
                let settings = Settings::load(&provider);
                println!("{}", serde_json::to_string_pretty(&settings)?);
            }
        },
        None => {
            use clap::CommandFactory;
            Config::command().print_help()?;
        }
    }

    Ok(())
}

/// Read a settings-panel message from a file, or stdin for `-`
fn read_message(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("Failed to read message from stdin")?;
        Ok(raw)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))
    }
}
