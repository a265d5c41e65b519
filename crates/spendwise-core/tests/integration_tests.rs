//! Integration tests for spendwise-core
//!
//! These tests drive the engine end to end: classification with and without
//! a trained model, forecasting, both analyzers, and artifact persistence.

use std::fs;
use std::sync::Arc;
use std::thread;

use spendwise_core::{
    seed_corpus, Behavior, Category, CategoryDistribution, ClassificationSource, Engine, Expense,
    Label, LocalArtifactStore, ModelOrigin, Persona, SpendingTag, TrainingCorpus, Trend,
};

fn dist(entries: &[(Category, f64)]) -> CategoryDistribution {
    entries.iter().copied().collect()
}

// =============================================================================
// Forecasting
// =============================================================================

#[test]
fn test_forecast_linear_series() {
    let engine = Engine::new();
    assert_eq!(engine.forecast_next(&[1000.0, 1200.0, 1400.0, 1600.0]), 1800.0);
}

#[test]
fn test_forecast_degenerate_series() {
    let engine = Engine::new();
    assert_eq!(engine.forecast_next(&[]), 0.0);
    for x in [0.0, 12.5, 4200.0] {
        assert_eq!(engine.forecast_next(&[x]), x);
    }
}

#[test]
fn test_predict_flat_price() {
    let forecast = Engine::new().predict_price(&[50.0, 50.0, 50.0, 50.0]);
    assert_eq!(forecast.predicted, 50.0);
    assert_eq!(forecast.trend, Trend::Stable);
}

// =============================================================================
// Classification
// =============================================================================

#[test]
fn test_keyword_precedence_regardless_of_training() {
    let untrained = Engine::new();
    let trained = Engine::new();
    trained.train(&seed_corpus()).unwrap();

    for engine in [&untrained, &trained] {
        let result = engine.classify("Uber ride to office");
        assert_eq!(result.label, Label::Category(Category::Travel));
        assert_eq!(result.source, ClassificationSource::Keyword);
    }
}

#[test]
fn test_untrained_unknown_is_uncategorized() {
    let result = Engine::new().classify("xyzzy unknown merchant");
    assert_eq!(result.label, Label::Uncategorized);
    assert_eq!(result.source, ClassificationSource::Fallback);
}

#[test]
fn test_seeded_model_covers_keyword_misses() {
    let engine = Engine::new();
    engine.train(&seed_corpus()).unwrap();

    let result = engine.classify("Mobile bill payment");
    assert_eq!(result.label, Label::Category(Category::Bills));
    assert_eq!(result.source, ClassificationSource::Model);

    assert_eq!(
        engine.classify("wrapped presents").label,
        Label::Category(Category::Other)
    );
}

#[test]
fn test_training_is_idempotent() {
    let engine = Engine::new();
    let probes = ["mobile bill payment", "misc expenses", "quokka", "zorbing session"];

    let first = engine.train(&seed_corpus()).unwrap();
    let before: Vec<_> = probes.iter().map(|p| engine.classify(p)).collect();
    let second = engine.train(&seed_corpus()).unwrap();
    let after: Vec<_> = probes.iter().map(|p| engine.classify(p)).collect();

    assert_eq!(first, second);
    assert_eq!(before, after);
}

#[test]
fn test_rejected_training_reports_error() {
    let engine = Engine::new();
    assert!(TrainingCorpus::new(Vec::new()).is_err());
    assert!(engine.train_records(Vec::new()).is_err());
    assert!(!engine.is_trained());
}

#[test]
fn test_classify_during_retraining() {
    let engine = Arc::new(Engine::new());
    engine.train(&seed_corpus()).unwrap();

    let alt = TrainingCorpus::new(vec![
        Expense::new("mobile plan", Category::Bills),
        Expense::new("misc odds", Category::Other),
    ])
    .unwrap();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                for _ in 0..200 {
                    let label = engine.classify("mobile bill").label;
                    assert_eq!(label, Label::Category(Category::Bills));
                }
            })
        })
        .collect();

    for i in 0..10 {
        let corpus = if i % 2 == 0 { alt.clone() } else { seed_corpus() };
        engine.train(&corpus).unwrap();
    }

    for reader in readers {
        reader.join().unwrap();
    }
    assert_eq!(engine.model_info().unwrap().version, 11);
}

// =============================================================================
// Analyzers
// =============================================================================

#[test]
fn test_behavior_conservative() {
    let analysis = Engine::new().analyze_behavior(&dist(&[
        (Category::Bills, 8000.0),
        (Category::Health, 2000.0),
        (Category::Food, 1000.0),
    ]));
    assert_eq!(analysis.behavior, Behavior::Conservative);
    let stable = analysis.stable_percent.unwrap();
    assert!((stable - 90.909).abs() < 0.001);
}

#[test]
fn test_behavior_aggressive_with_tags() {
    let analysis = Engine::new().analyze_behavior(&dist(&[
        (Category::Entertainment, 5000.0),
        (Category::Shopping, 3000.0),
        (Category::Food, 2000.0),
        (Category::Bills, 1000.0),
    ]));
    assert_eq!(analysis.behavior, Behavior::Aggressive);
    assert!(analysis.has_tag(SpendingTag::HighVariableSpend));
    assert!(analysis.has_tag(SpendingTag::EntertainmentHeavy));
    assert!(analysis.has_tag(SpendingTag::FrequentShopper));
}

#[test]
fn test_personality_saver_monk_priority() {
    let profile = Engine::new().analyze_personality(
        &dist(&[(Category::Bills, 7000.0), (Category::Food, 2000.0)]),
        9000.0,
        3,
    );
    assert_eq!(profile.persona, Persona::SaverMonk);
    assert_eq!(profile.emoji, "🧘");
}

#[test]
fn test_degenerate_distributions() {
    let engine = Engine::new();
    let empty = CategoryDistribution::new();
    assert_eq!(engine.analyze_behavior(&empty).behavior, Behavior::Unknown);
    assert_eq!(
        engine.analyze_personality(&empty, 0.0, 1).persona,
        Persona::Newcomer
    );
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn test_bootstrap_seeds_then_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spendwise").join("expense_model.json");

    let first = Engine::bootstrap(Box::new(LocalArtifactStore::new(&path)), true).unwrap();
    assert_eq!(first.origin(), ModelOrigin::Seeded);
    assert!(path.exists());
    let fingerprint = first.model_info().unwrap().fingerprint;

    let second = Engine::bootstrap(Box::new(LocalArtifactStore::new(&path)), true).unwrap();
    assert_eq!(second.origin(), ModelOrigin::Loaded);
    assert_eq!(second.model_info().unwrap().fingerprint, fingerprint);
    assert_eq!(
        second.classify("mobile bill payment").label,
        first.classify("mobile bill payment").label
    );
}

#[test]
fn test_bootstrap_recovers_from_corrupt_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("expense_model.json");
    fs::write(&path, b"\x80\x04 not a model").unwrap();

    let engine = Engine::bootstrap(Box::new(LocalArtifactStore::new(&path)), true).unwrap();
    assert_eq!(engine.origin(), ModelOrigin::Seeded);
    assert!(engine.is_trained());

    // The seeded artifact replaced the corrupt file
    let reloaded = Engine::bootstrap(Box::new(LocalArtifactStore::new(&path)), true).unwrap();
    assert_eq!(reloaded.origin(), ModelOrigin::Loaded);
}

#[test]
fn test_training_persists_new_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("expense_model.json");

    let engine = Engine::bootstrap(Box::new(LocalArtifactStore::new(&path)), true).unwrap();
    let corpus = TrainingCorpus::new(vec![
        Expense::new("plumber visit", Category::Bills),
        Expense::new("violin lesson", Category::Education),
    ])
    .unwrap();
    engine.train(&corpus).unwrap();

    let reloaded = Engine::bootstrap(Box::new(LocalArtifactStore::new(&path)), true).unwrap();
    let info = reloaded.model_info().unwrap();
    assert_eq!(info.documents, 2);
    assert_eq!(info.version, 2);
    assert_eq!(
        reloaded.classify("violin strings").label,
        Label::Category(Category::Education)
    );
}
