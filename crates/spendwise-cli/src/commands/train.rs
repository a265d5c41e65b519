//! Classifier training command

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use spendwise_core::{Config, ExpenseRecord, TrainingCorpus};

use super::{open_engine, print_json};

#[derive(Serialize)]
struct TrainOutput {
    message: &'static str,
    accuracy: f64,
    rows: usize,
}

/// Read `description,category` rows from a CSV file
pub fn read_corpus(path: &Path) -> Result<Vec<ExpenseRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<ExpenseRecord>().enumerate() {
        let record = row.with_context(|| format!("Invalid CSV row {}", index + 1))?;
        records.push(record);
    }
    Ok(records)
}

pub fn cmd_train(config: &Config, file: &Path, json: bool) -> Result<()> {
    let records = read_corpus(file)?;
    let rows = records.len();
    let corpus = TrainingCorpus::from_records(records)
        .with_context(|| format!("Training on {} rejected", file.display()))?;

    let engine = open_engine(config)?;
    let accuracy = engine
        .train(&corpus)
        .with_context(|| format!("Training on {} rejected", file.display()))?;

    if json {
        return print_json(&TrainOutput {
            message: "Training complete",
            accuracy,
            rows,
        });
    }

    println!("✅ Trained on {} expenses", rows);
    println!("   Accuracy: {:.1}%", accuracy * 100.0);
    println!("   Saved to: {}", config.model.path.display());
    Ok(())
}
