//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;

use senti_core::Settings;
use senti_web::state::AppState;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "8501")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Also write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs, settings: &Settings) -> Result<()> {
    let client = super::client(settings)?;
    let state = AppState::new(Arc::new(client), settings);

    println!();
    println!(
        "  {} {}",
        settings.page.title.cyan().bold(),
        "Web Server".bold()
    );
    println!();
    println!(
        "  {}    http://{}:{}",
        "Page".green(),
        args.host,
        args.port
    );
    println!(
        "  {} {}",
        "Backend".green(),
        settings.analyze_url()
    );
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    senti_web::run_server(state, &args.host, args.port).await?;

    Ok(())
}
