//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Spendwise - Expense classification, forecasting and spending analysis
#[derive(Parser)]
#[command(name = "spendwise")]
#[command(about = "Expense intelligence engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to <data dir>/spendwise/config/spendwise.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Classifier artifact path (overrides config and SPENDWISE_MODEL_PATH)
    #[arg(long, global = true)]
    pub model: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Categorize an expense description
    Classify {
        /// Expense description (words are joined with spaces)
        #[arg(required = true)]
        description: Vec<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Retrain the classifier from a CSV corpus
    ///
    /// The file needs `description` and `category` columns. Any row missing
    /// either field rejects the whole file.
    Train {
        /// CSV file with labelled expenses
        #[arg(short, long)]
        file: PathBuf,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Forecast next month's total from monthly totals (oldest first)
    Forecast {
        /// Monthly totals
        amounts: Vec<f64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Predict the next price point and its trend
    Price {
        /// Observed prices, oldest first
        prices: Vec<f64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Label spending behavior from a category distribution
    Behavior {
        /// Entries as Category=amount (e.g. Bills=8000 Food=1000)
        entries: Vec<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Pick a spending persona from a category distribution
    Personality {
        /// Entries as Category=amount (e.g. Bills=7000 Food=2000)
        entries: Vec<String>,

        /// Total spend (defaults to the sum of the entries)
        #[arg(long)]
        total: Option<f64>,

        /// Number of months the distribution covers
        #[arg(long, default_value = "1")]
        months: u32,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show config and classifier status
    Status,

    /// Start the web server
    Serve {
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },
}
