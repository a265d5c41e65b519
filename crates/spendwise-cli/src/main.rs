//! Spendwise CLI - Expense intelligence engine
//!
//! Usage:
//!   spendwise classify "uber to airport"      Categorize a description
//!   spendwise train --file corpus.csv         Retrain the classifier
//!   spendwise forecast 1000 1200 1400         Forecast next month
//!   spendwise behavior Bills=8000 Food=1000   Label spending behavior
//!   spendwise serve --port 5001               Start the JSON API

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = commands::load_config(cli.config.as_deref(), cli.model.as_deref())?;

    match cli.command {
        Commands::Classify { description, json } => {
            commands::cmd_classify(&config, &description.join(" "), json)
        }
        Commands::Train { file, json } => commands::cmd_train(&config, &file, json),
        Commands::Forecast { amounts, json } => commands::cmd_forecast(&amounts, json),
        Commands::Price { prices, json } => commands::cmd_price(&prices, json),
        Commands::Behavior { entries, json } => commands::cmd_behavior(&entries, json),
        Commands::Personality {
            entries,
            total,
            months,
            json,
        } => commands::cmd_personality(&entries, total, months, json),
        Commands::Status => commands::cmd_status(&config),
        Commands::Serve { host, port } => commands::cmd_serve(config, host, port).await,
    }
}
