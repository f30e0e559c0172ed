//! Demanda CLI
//!
//! Chat advisor for demand forecasting and document questions.

use anyhow::Result;
use clap::Parser;
use demanda_core::Config;

mod app;
mod commands;

use app::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_level.into()),
        )
        .init();

    let config = Config::load()?;

    match cli.command {
        Commands::Ask { question } => commands::ask::run(&question.join(" "), &config).await,
        Commands::Chat => commands::chat::run(&config).await,
        Commands::Batch { file } => commands::batch::run(&file, &config).await,
        Commands::Config => commands::config::run(&config),
    }
}
