//! Statistical text classifier
//!
//! Fallback behind the keyword matcher: TF-IDF features fed to a multinomial
//! naive Bayes model, both rebuilt from scratch on every `fit`.
//!
//! ## Concurrency
//!
//! The fitted state lives in a single [`ClassifierArtifact`] behind
//! `RwLock<Option<Arc<_>>>`. `fit` builds the new artifact without holding
//! the slot, then publishes it with one write-lock swap, so a concurrent
//! `predict` sees either the old artifact or the new one. A separate mutex
//! keeps at most one `fit` in flight.

mod artifact;
mod bayes;
mod vectorizer;

use std::sync::{Arc, Mutex, RwLock};

use tracing::{info, warn};

use crate::error::Result;
use crate::models::{Label, TrainingCorpus};

pub use artifact::{fingerprint, ArtifactInfo, ClassifierArtifact, ARTIFACT_FORMAT_VERSION};
pub use bayes::MultinomialNb;
pub use vectorizer::{tokenize, SparseVector, TfIdfVectorizer};

/// Holder of the current classifier artifact
#[derive(Debug, Default)]
pub struct TextClassifier {
    slot: RwLock<Option<Arc<ClassifierArtifact>>>,
    /// Serialises retraining
    fit_lock: Mutex<()>,
}

impl TextClassifier {
    /// Create an untrained classifier
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the artifact from the full corpus and publish it
    ///
    /// Returns the in-sample accuracy. On error the current artifact is left
    /// untouched.
    pub fn fit(&self, corpus: &TrainingCorpus) -> Result<f64> {
        let _guard = self.fit_lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut artifact = ClassifierArtifact::train(corpus)?;
        artifact.version = self
            .current()
            .map(|a| a.version)
            .unwrap_or(0)
            .saturating_add(1);
        let accuracy = artifact.accuracy;

        info!(
            "Classifier trained on {} rows (accuracy {:.3}, version {})",
            artifact.documents, accuracy, artifact.version
        );
        self.publish(artifact);

        Ok(accuracy)
    }

    /// Most likely category, or `Uncategorized` when no usable artifact exists
    pub fn predict(&self, description: &str) -> Label {
        let Some(artifact) = self.current() else {
            warn!("Classifier untrained, '{}' left uncategorized", description);
            return Label::Uncategorized;
        };

        match artifact.predict(description) {
            Ok(category) => Label::Category(category),
            Err(e) => {
                warn!("Prediction failed for '{}': {}", description, e);
                Label::Uncategorized
            }
        }
    }

    /// Whether a usable artifact is published
    pub fn has_artifact(&self) -> bool {
        self.current().is_some()
    }

    /// Validate and publish an artifact built elsewhere (e.g. loaded from disk)
    pub fn replace_artifact(&self, artifact: ClassifierArtifact) -> Result<()> {
        artifact.validate()?;
        let _guard = self.fit_lock.lock().unwrap_or_else(|e| e.into_inner());
        self.publish(artifact);
        Ok(())
    }

    /// Snapshot of the current artifact
    pub fn current(&self) -> Option<Arc<ClassifierArtifact>> {
        self.slot.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn info(&self) -> Option<ArtifactInfo> {
        self.current().map(|a| a.info())
    }

    fn publish(&self, artifact: ClassifierArtifact) {
        let artifact = Arc::new(artifact);
        *self.slot.write().unwrap_or_else(|e| e.into_inner()) = Some(artifact);
    }
}
