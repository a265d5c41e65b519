//! Engine facade
//!
//! Bundles the keyword matcher, the statistical classifier, the forecaster
//! and both analyzers behind the operations the service layer calls. Shared
//! across threads as `Arc<Engine>`.

use std::sync::Mutex;

use tracing::{debug, info, warn};

use crate::classifier::{ArtifactInfo, TextClassifier};
use crate::config::Config;
use crate::error::Result;
use crate::forecast::{self, PriceForecast};
use crate::insights::{BehaviorAnalysis, BehaviorAnalyzer, PersonalityAnalyzer, PersonalityProfile};
use crate::keywords::KeywordMatcher;
use crate::models::{
    CategoryDistribution, Classification, ClassificationSource, ExpenseRecord, Label,
    TrainingCorpus,
};
use crate::seed::seed_corpus;
use crate::store::{ArtifactStore, LocalArtifactStore};

/// How the classifier got its artifact at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelOrigin {
    /// Loaded from the artifact store
    Loaded,
    /// Trained on the built-in seed corpus
    Seeded,
    /// No artifact; descriptions that miss the keyword table are uncategorized
    Untrained,
}

impl ModelOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Loaded => "loaded",
            Self::Seeded => "seeded",
            Self::Untrained => "untrained",
        }
    }
}

impl std::fmt::Display for ModelOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub struct Engine {
    keywords: KeywordMatcher,
    classifier: TextClassifier,
    behavior: BehaviorAnalyzer,
    personality: PersonalityAnalyzer,
    store: Option<Box<dyn ArtifactStore>>,
    origin: ModelOrigin,
    /// Held across fit and save so the store never lags the published artifact
    train_lock: Mutex<()>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Engine with an untrained classifier and no persistence
    pub fn new() -> Self {
        Self {
            keywords: KeywordMatcher::new(),
            classifier: TextClassifier::new(),
            behavior: BehaviorAnalyzer::new(),
            personality: PersonalityAnalyzer::new(),
            store: None,
            origin: ModelOrigin::Untrained,
            train_lock: Mutex::new(()),
        }
    }

    /// Build an engine from config: local artifact file plus seed fallback
    pub fn from_config(config: &Config) -> Result<Self> {
        let store = LocalArtifactStore::new(&config.model.path);
        Self::bootstrap(Box::new(store), config.model.seed_on_missing)
    }

    /// Load the stored artifact, or retrain from the seed corpus
    ///
    /// Any load failure (missing file, unreadable file, incompatible format)
    /// falls back to the seed corpus when `seed_on_missing` is set. The seeded
    /// artifact is saved back; a failed save is logged and otherwise ignored.
    pub fn bootstrap(store: Box<dyn ArtifactStore>, seed_on_missing: bool) -> Result<Self> {
        let mut engine = Self::new();

        let loaded = match store.load() {
            Ok(Some(artifact)) => match engine.classifier.replace_artifact(artifact) {
                Ok(()) => true,
                Err(e) => {
                    warn!("Ignoring artifact in {}: {}", store.location(), e);
                    false
                }
            },
            Ok(None) => {
                info!("No saved artifact in {} store", store.name());
                false
            }
            Err(e) => {
                warn!("Failed to load artifact from {}: {}", store.location(), e);
                false
            }
        };

        engine.store = Some(store);

        if loaded {
            engine.origin = ModelOrigin::Loaded;
        } else if seed_on_missing {
            info!("Training classifier on the built-in seed corpus");
            engine.train(&seed_corpus())?;
            engine.origin = ModelOrigin::Seeded;
        }

        Ok(engine)
    }

    /// Attach a store without loading from it
    pub fn with_store(mut self, store: Box<dyn ArtifactStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Keyword table first, statistical model second
    pub fn classify(&self, description: &str) -> Classification {
        if let Some(category) = self.keywords.match_description(description) {
            return Classification {
                label: category.into(),
                source: ClassificationSource::Keyword,
            };
        }

        let label = self.classifier.predict(description);
        let source = match label {
            Label::Category(_) => ClassificationSource::Model,
            Label::Uncategorized => ClassificationSource::Fallback,
        };
        debug!("Classified '{}' as {} ({})", description, label, source);

        Classification { label, source }
    }

    /// Rebuild the classifier from the full corpus, then persist it
    ///
    /// A rejected corpus leaves the current artifact in place. Save failures
    /// are logged; the new artifact stays published.
    pub fn train(&self, corpus: &TrainingCorpus) -> Result<f64> {
        let _guard = self.train_lock.lock().unwrap_or_else(|e| e.into_inner());
        let accuracy = self.classifier.fit(corpus)?;

        if let (Some(store), Some(artifact)) = (&self.store, self.classifier.current()) {
            if let Err(e) = store.save(&artifact) {
                warn!("Failed to save artifact to {}: {}", store.location(), e);
            }
        }

        Ok(accuracy)
    }

    /// Validate raw records, then train
    pub fn train_records(&self, records: Vec<ExpenseRecord>) -> Result<f64> {
        let corpus = TrainingCorpus::from_records(records)?;
        self.train(&corpus)
    }

    pub fn forecast_next(&self, monthly_totals: &[f64]) -> f64 {
        forecast::forecast_next(monthly_totals)
    }

    pub fn predict_price(&self, prices: &[f64]) -> PriceForecast {
        forecast::classify_price_trend(prices)
    }

    pub fn analyze_behavior(&self, dist: &CategoryDistribution) -> BehaviorAnalysis {
        self.behavior.analyze(dist)
    }

    pub fn analyze_personality(
        &self,
        dist: &CategoryDistribution,
        total_spend: f64,
        month_count: u32,
    ) -> PersonalityProfile {
        self.personality.analyze(dist, total_spend, month_count)
    }

    pub fn is_trained(&self) -> bool {
        self.classifier.has_artifact()
    }

    pub fn model_info(&self) -> Option<ArtifactInfo> {
        self.classifier.info()
    }

    pub fn origin(&self) -> ModelOrigin {
        self.origin
    }

    /// Display location of the attached store
    pub fn store_location(&self) -> Option<String> {
        self.store.as_ref().map(|s| s.location())
    }
}
