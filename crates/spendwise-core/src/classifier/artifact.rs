//! Fitted classifier state
//!
//! A `ClassifierArtifact` is immutable once built. Retraining produces a new
//! artifact; the classifier swaps it in whole.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use super::bayes::MultinomialNb;
use super::vectorizer::TfIdfVectorizer;
use crate::error::{Error, Result};
use crate::models::{Category, TrainingCorpus};

/// Current on-disk format. Artifacts with any other value are rejected on load.
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

/// Vocabulary plus learned parameters, with training metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierArtifact {
    pub format_version: u32,
    /// Publish counter assigned by the classifier (0 until published)
    pub version: u64,
    pub trained_at: DateTime<Utc>,
    /// SHA-256 of the training corpus
    pub fingerprint: String,
    /// In-sample accuracy at training time
    pub accuracy: f64,
    /// Number of training rows
    pub documents: usize,
    vectorizer: TfIdfVectorizer,
    model: MultinomialNb,
}

/// Summary of an artifact for status displays and the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactInfo {
    pub version: u64,
    pub trained_at: DateTime<Utc>,
    pub fingerprint: String,
    pub accuracy: f64,
    pub documents: usize,
    pub vocabulary_size: usize,
    pub classes: Vec<Category>,
}

impl ClassifierArtifact {
    /// Build a fresh artifact from scratch on the full corpus
    pub fn train(corpus: &TrainingCorpus) -> Result<Self> {
        let descriptions: Vec<&str> = corpus
            .expenses()
            .iter()
            .map(|e| e.description.as_str())
            .collect();
        let labels: Vec<Category> = corpus.expenses().iter().map(|e| e.category).collect();

        let vectorizer = TfIdfVectorizer::fit(&descriptions)?;
        let features: Vec<_> = descriptions
            .iter()
            .map(|d| vectorizer.transform(d))
            .collect();
        let model = MultinomialNb::fit(&features, &labels, vectorizer.vocabulary_size())?;

        let correct = features
            .iter()
            .zip(&labels)
            .filter(|(x, y)| model.predict(x).as_ref() == Some(*y))
            .count();
        let accuracy = correct as f64 / labels.len() as f64;

        debug!(
            "Fitted {} rows: {} terms, classes {:?}",
            labels.len(),
            vectorizer.vocabulary_size(),
            model.classes()
        );

        Ok(Self {
            format_version: ARTIFACT_FORMAT_VERSION,
            version: 0,
            trained_at: Utc::now(),
            fingerprint: fingerprint(corpus),
            accuracy,
            documents: labels.len(),
            vectorizer,
            model,
        })
    }

    /// Highest-posterior category for a description
    pub fn predict(&self, description: &str) -> Result<Category> {
        let features = self.vectorizer.transform(description);
        self.model
            .predict(&features)
            .ok_or_else(|| Error::InvalidData("Model has no classes".to_string()))
    }

    /// Reject artifacts from another format or with inconsistent parameters
    pub fn validate(&self) -> Result<()> {
        if self.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(Error::IncompatibleArtifact(format!(
                "format version {} (expected {})",
                self.format_version, ARTIFACT_FORMAT_VERSION
            )));
        }
        self.vectorizer
            .validate()
            .and_then(|_| self.model.validate())
            .map_err(|e| Error::IncompatibleArtifact(e.to_string()))?;
        if self.vectorizer.vocabulary_size() != self.model.n_features() {
            return Err(Error::IncompatibleArtifact(format!(
                "vocabulary has {} terms but model expects {}",
                self.vectorizer.vocabulary_size(),
                self.model.n_features()
            )));
        }
        Ok(())
    }

    pub fn info(&self) -> ArtifactInfo {
        ArtifactInfo {
            version: self.version,
            trained_at: self.trained_at,
            fingerprint: self.fingerprint.clone(),
            accuracy: self.accuracy,
            documents: self.documents,
            vocabulary_size: self.vectorizer.vocabulary_size(),
            classes: self.model.classes().to_vec(),
        }
    }
}

/// SHA-256 over the ordered (description, category) pairs
pub fn fingerprint(corpus: &TrainingCorpus) -> String {
    let mut hasher = Sha256::new();
    for expense in corpus.expenses() {
        hasher.update(expense.description.as_bytes());
        hasher.update(b"\t");
        hasher.update(expense.category.as_str().as_bytes());
        hasher.update(b"\n");
    }
    hex::encode(hasher.finalize())
}
