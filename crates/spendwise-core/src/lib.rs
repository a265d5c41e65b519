//! Spendwise Core Library
//!
//! Expense intelligence for the Spendwise personal finance service:
//! - Keyword matcher over a fixed, ordered category table
//! - TF-IDF + naive Bayes fallback classifier with atomic retraining
//! - Least-squares forecaster for monthly totals and price series
//! - Behavior and personality analyzers over category distributions
//! - Artifact store with seed-corpus bootstrap
//! - Layered configuration (embedded defaults, override file, environment)

pub mod classifier;
pub mod config;
pub mod engine;
pub mod error;
pub mod forecast;
pub mod insights;
pub mod keywords;
pub mod models;
pub mod seed;
pub mod store;

pub use classifier::{ArtifactInfo, ClassifierArtifact, TextClassifier};
pub use config::{Config, ModelConfig, ServerConfig};
pub use engine::{Engine, ModelOrigin};
pub use error::{Error, Result};
pub use forecast::{classify_price_trend, forecast_next, PriceForecast, Trend};
pub use insights::{
    Behavior, BehaviorAnalysis, BehaviorAnalyzer, Persona, PersonalityAnalyzer,
    PersonalityProfile, SpendingTag,
};
pub use keywords::KeywordMatcher;
pub use models::{
    Category, CategoryDistribution, Classification, ClassificationSource, Expense, ExpenseRecord,
    Label, TrainingCorpus,
};
pub use seed::seed_corpus;
pub use store::{ArtifactStore, LocalArtifactStore};
