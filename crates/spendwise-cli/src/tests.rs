//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::fs;
use std::path::Path;

use clap::Parser;
use spendwise_core::{Category, Config, Engine, LocalArtifactStore, ModelOrigin};
use tempfile::TempDir;

use crate::cli::{Cli, Commands};
use crate::commands::{self, parse_distribution, read_corpus};

/// Config pointing the model at a temp directory
fn test_config(dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.model.path = dir.path().join("expense_model.json");
    config
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

// ========== Argument Parsing Tests ==========

#[test]
fn test_parse_classify_joins_words() {
    let cli = Cli::try_parse_from(["spendwise", "classify", "uber", "to", "airport"]).unwrap();
    match cli.command {
        Commands::Classify { description, json } => {
            assert_eq!(description.join(" "), "uber to airport");
            assert!(!json);
        }
        _ => panic!("expected classify"),
    }
}

#[test]
fn test_parse_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "spendwise",
        "status",
        "--model",
        "/tmp/model.json",
        "-v",
    ])
    .unwrap();
    assert!(cli.verbose);
    assert_eq!(cli.model.as_deref(), Some(Path::new("/tmp/model.json")));
}

#[test]
fn test_parse_personality_defaults() {
    let cli = Cli::try_parse_from(["spendwise", "personality", "Bills=7000", "Food=2000"]).unwrap();
    match cli.command {
        Commands::Personality {
            entries,
            total,
            months,
            json,
        } => {
            assert_eq!(entries.len(), 2);
            assert_eq!(total, None);
            assert_eq!(months, 1);
            assert!(!json);
        }
        _ => panic!("expected personality"),
    }
}

#[test]
fn test_parse_rejects_non_numeric_forecast() {
    assert!(Cli::try_parse_from(["spendwise", "forecast", "100", "lots"]).is_err());
}

// ========== Distribution Parsing Tests ==========

#[test]
fn test_parse_distribution_normalises_categories() {
    let dist = parse_distribution(&args(&["food=1200", "BILLS=800", "Chai/Sutta=150"])).unwrap();
    assert_eq!(dist.amount(Category::Food), 1200.0);
    assert_eq!(dist.amount(Category::Bills), 800.0);
    assert_eq!(dist.amount_of("Chai/Sutta"), 150.0);
    assert_eq!(dist.total(), 2150.0);
}

#[test]
fn test_parse_distribution_errors() {
    assert!(parse_distribution(&args(&["Food"])).is_err());
    assert!(parse_distribution(&args(&["=100"])).is_err());
    assert!(parse_distribution(&args(&["Food=abc"])).is_err());
    assert!(parse_distribution(&args(&["Food=-5"])).is_err());
}

#[test]
fn test_parse_distribution_rejects_non_finite() {
    assert!(parse_distribution(&args(&["Food=NaN"])).is_err());
    assert!(parse_distribution(&args(&["Food=inf"])).is_err());
    assert!(parse_distribution(&args(&["Bills=100", "Food=-inf"])).is_err());
}

#[test]
fn test_parse_distribution_empty() {
    assert!(parse_distribution(&[]).unwrap().is_empty());
}

// ========== Config Tests ==========

#[test]
fn test_load_config_model_override() {
    let dir = TempDir::new().unwrap();
    let config_path = write_file(&dir, "spendwise.toml", "[server]\nport = 6001\n");
    let model_path = dir.path().join("custom.json");

    let config =
        commands::load_config(Some(config_path.as_path()), Some(model_path.as_path())).unwrap();
    assert_eq!(config.model.path, model_path);
    assert_eq!(config.source.as_deref(), Some(config_path.as_path()));
}

#[test]
fn test_load_config_missing_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(commands::load_config(Some(missing.as_path()), None).is_err());
}

// ========== Training Tests ==========

#[test]
fn test_read_corpus() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "corpus.csv",
        "description,category,amount\nplumber visit, Bills ,120\nviolin lesson,Education,40\n",
    );

    let records = read_corpus(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].description.as_deref(), Some("plumber visit"));
    assert_eq!(records[0].category.as_deref(), Some("Bills"));
}

#[test]
fn test_cmd_train_persists_model() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);
    let path = write_file(
        &dir,
        "corpus.csv",
        "description,category\nplumber visit,Bills\nviolin lesson,Education\n",
    );

    commands::cmd_train(&config, &path, false).unwrap();
    assert!(config.model.path.exists());

    let store = LocalArtifactStore::new(&config.model.path);
    let engine = Engine::bootstrap(Box::new(store), false).unwrap();
    assert_eq!(engine.origin(), ModelOrigin::Loaded);
    assert_eq!(engine.model_info().unwrap().documents, 2);
}

#[test]
fn test_cmd_train_rejects_incomplete_rows() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);
    let path = write_file(
        &dir,
        "corpus.csv",
        "description,category\nplumber visit,Bills\nviolin lesson,\n",
    );

    assert!(commands::cmd_train(&config, &path, true).is_err());
    // Rejected before the engine opens, so no seed model is written
    assert!(!config.model.path.exists());
}

#[test]
fn test_cmd_train_missing_file() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);
    assert!(commands::cmd_train(&config, &dir.path().join("absent.csv"), false).is_err());
}

// ========== Analysis Command Tests ==========

#[test]
fn test_cmd_classify_seeds_model() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);

    commands::cmd_classify(&config, "mobile bill payment", true).unwrap();
    assert!(config.model.path.exists());
}

#[test]
fn test_cmd_forecast_and_price() {
    assert!(commands::cmd_forecast(&[1000.0, 1200.0, 1400.0, 1600.0], false).is_ok());
    assert!(commands::cmd_forecast(&[], true).is_ok());
    assert!(commands::cmd_price(&[50.0, 50.0, 50.0], false).is_ok());
}

#[test]
fn test_cmd_behavior_and_personality() {
    let entries = args(&["Bills=7000", "Food=2000"]);
    assert!(commands::cmd_behavior(&entries, false).is_ok());
    assert!(commands::cmd_personality(&entries, None, 3, false).is_ok());
    assert!(commands::cmd_personality(&entries, Some(9000.0), 3, true).is_ok());
    assert!(commands::cmd_behavior(&args(&["Bills"]), false).is_err());
}

#[test]
fn test_cmd_status_without_model() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);
    assert!(commands::cmd_status(&config).is_ok());
    // Status never seeds
    assert!(!config.model.path.exists());
}
