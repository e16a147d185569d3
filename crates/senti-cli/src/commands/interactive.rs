//! Prompt loop: one trigger cycle per entered line.

use anyhow::Result;
use colored::Colorize;
use dialoguer::Input;

use senti_core::{Orchestrator, Settings};

use crate::output::TerminalShell;

const QUIT_WORDS: &[&str] = &[":q", "quit", "exit"];

pub async fn execute(settings: &Settings) -> Result<()> {
    let client = super::client(settings)?;
    let mut orchestrator = Orchestrator::new(client, settings.busy_message());
    let mut shell = TerminalShell::new(false);

    println!();
    println!("  {}", settings.page.title.cyan().bold());
    println!("  {}", settings.page.caption.dimmed());
    println!();
    println!("  {}", format!("Type {} to leave.", QUIT_WORDS.join(", ")).dimmed());
    println!();

    loop {
        let text = match Input::<String>::new()
            .with_prompt("Enter your sentence")
            .allow_empty(true)
            .interact_text()
        {
            Ok(text) => text,
            // EOF or no terminal attached
            Err(e) => {
                tracing::debug!(error = %e, "Prompt closed");
                break;
            }
        };

        if QUIT_WORDS.contains(&text.trim()) {
            break;
        }

        orchestrator.trigger(&text, &mut shell).await;
    }

    Ok(())
}
