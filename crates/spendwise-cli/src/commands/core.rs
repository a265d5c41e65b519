//! Shared command utilities
//!
//! - `load_config` - Resolve config with CLI overrides applied
//! - `open_engine` - Bootstrap the engine from config
//! - `parse_distribution` - Parse `Category=amount` arguments

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use spendwise_core::{Category, CategoryDistribution, Config, Engine};

/// Load config, then apply `--model`
pub fn load_config(config_path: Option<&Path>, model_path: Option<&Path>) -> Result<Config> {
    let mut config = Config::load(config_path).context("Failed to load config")?;
    if let Some(path) = model_path {
        config.model.path = path.to_path_buf();
    }
    Ok(config)
}

/// Load the saved classifier, or train on the seed corpus when allowed
pub fn open_engine(config: &Config) -> Result<Engine> {
    Engine::from_config(config).context("Failed to initialize engine")
}

/// Parse `Category=amount` entries into a distribution
///
/// Known category names are normalised to title case ("food" → "Food").
/// Other names are kept verbatim so extra buckets still count toward totals.
pub fn parse_distribution(entries: &[String]) -> Result<CategoryDistribution> {
    let mut dist = CategoryDistribution::new();

    for entry in entries {
        let Some((name, amount)) = entry.split_once('=') else {
            bail!("Expected Category=amount, got '{}'", entry);
        };
        let name = name.trim();
        if name.is_empty() {
            bail!("Missing category name in '{}'", entry);
        }
        let amount: f64 = amount
            .trim()
            .parse()
            .with_context(|| format!("Invalid amount in '{}'", entry))?;
        if !amount.is_finite() {
            bail!("Amounts must be finite numbers: '{}'", entry);
        }
        if amount < 0.0 {
            bail!("Amounts must not be negative: '{}'", entry);
        }

        match name.parse::<Category>() {
            Ok(category) => dist.insert(category.as_str(), amount),
            Err(_) => dist.insert(name, amount),
        }
    }

    Ok(dist)
}

/// Pretty-print a value as JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
