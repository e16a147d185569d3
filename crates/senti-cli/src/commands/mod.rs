//! CLI command definitions and handlers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use senti_core::{InferenceClient, Settings};

pub mod analyze;
pub mod interactive;
pub mod serve;

/// Senti - color-coded sentiment analysis backed by a remote model
#[derive(Parser)]
#[command(name = "senti")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a settings file (defaults to ./senti.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the sentiment backend (e.g. http://localhost:8000)
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a single text
    Analyze(analyze::AnalyzeArgs),

    /// Analyze texts one after another at a prompt
    Interactive,

    /// Serve the analyzer page in the browser
    Serve(serve::ServeArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let settings = self.settings()?;

        match self.command {
            Commands::Analyze(args) => analyze::execute(args, &settings).await,
            Commands::Interactive => interactive::execute(&settings).await,
            Commands::Serve(args) => serve::execute(args, &settings).await,
        }
    }

    /// Resolve settings: file and environment first, flags last.
    fn settings(&self) -> Result<Settings> {
        let loaded = Settings::load(self.config.as_deref()).context("Failed to load settings")?;
        let settings = apply_flags(loaded, self.backend_url.clone(), self.timeout);
        settings.validate().context("Invalid settings")?;

        tracing::debug!(
            backend = %settings.analyze_url(),
            timeout_secs = settings.timeout_secs,
            "Settings resolved"
        );
        Ok(settings)
    }
}

/// Build the HTTP client for the resolved settings.
pub(crate) fn client(settings: &Settings) -> Result<InferenceClient> {
    InferenceClient::from_settings(settings).context("Failed to create HTTP client")
}

/// Apply command-line overrides on top of file and environment settings.
pub(crate) fn apply_flags(
    mut settings: Settings,
    backend_url: Option<String>,
    timeout: Option<u64>,
) -> Settings {
    if let Some(url) = backend_url {
        settings.backend_url = url;
    }
    if let Some(secs) = timeout {
        settings.timeout_secs = secs;
    }
    settings
}
