//! Single-shot analysis command.

use anyhow::{Context, Result};
use clap::Args;
use std::io::Read;

use senti_core::{Orchestrator, Settings};

use crate::output::TerminalShell;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Text to analyze (read from stdin when omitted)
    pub text: Option<String>,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: AnalyzeArgs, settings: &Settings) -> Result<()> {
    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read text from stdin")?;
            buf
        }
    };

    let client = super::client(settings)?;
    let mut orchestrator = Orchestrator::new(client, settings.busy_message());
    let mut shell = TerminalShell::new(args.json);

    orchestrator.trigger(&text, &mut shell).await;

    Ok(())
}
