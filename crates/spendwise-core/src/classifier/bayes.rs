//! Multinomial naive Bayes over TF-IDF features

use serde::{Deserialize, Serialize};

use super::vectorizer::SparseVector;
use crate::error::{Error, Result};
use crate::models::Category;

/// Additive (Laplace) smoothing
const ALPHA: f64 = 1.0;

/// Fitted multinomial naive Bayes parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultinomialNb {
    /// Classes seen in training, ordered by label
    classes: Vec<Category>,
    /// ln P(class)
    class_log_prior: Vec<f64>,
    /// ln P(feature | class), one row per class
    feature_log_prob: Vec<Vec<f64>>,
}

impl MultinomialNb {
    /// Fit on feature vectors and their labels
    pub fn fit(features: &[SparseVector], labels: &[Category], n_features: usize) -> Result<Self> {
        if features.len() != labels.len() {
            return Err(Error::Training(format!(
                "{} feature rows but {} labels",
                features.len(),
                labels.len()
            )));
        }
        if labels.is_empty() {
            return Err(Error::Training("No training rows".to_string()));
        }

        let mut classes: Vec<Category> = labels.to_vec();
        classes.sort_by_key(|c| c.as_str());
        classes.dedup();

        let mut class_count = vec![0.0; classes.len()];
        let mut feature_count = vec![vec![0.0; n_features]; classes.len()];

        for (row, label) in features.iter().zip(labels) {
            let Some(ci) = classes.iter().position(|c| c == label) else {
                continue;
            };
            class_count[ci] += 1.0;
            for &(j, weight) in row {
                if j >= n_features {
                    return Err(Error::Training(format!(
                        "Feature index {} out of range ({} features)",
                        j, n_features
                    )));
                }
                feature_count[ci][j] += weight;
            }
        }

        let n_rows = labels.len() as f64;
        let class_log_prior = class_count.iter().map(|n| (n / n_rows).ln()).collect();

        let feature_log_prob = feature_count
            .into_iter()
            .map(|counts| {
                let total: f64 = counts.iter().sum::<f64>() + ALPHA * n_features as f64;
                counts
                    .into_iter()
                    .map(|c| ((c + ALPHA) / total).ln())
                    .collect()
            })
            .collect();

        Ok(Self {
            classes,
            class_log_prior,
            feature_log_prob,
        })
    }

    /// Most likely class for a feature vector
    ///
    /// Ties go to the class that sorts first. An empty vector is scored on
    /// the priors alone.
    pub fn predict(&self, features: &SparseVector) -> Option<Category> {
        let mut best: Option<(Category, f64)> = None;

        for (ci, class) in self.classes.iter().enumerate() {
            let log_prob = &self.feature_log_prob[ci];
            let score = self.class_log_prior[ci]
                + features
                    .iter()
                    .map(|&(j, weight)| weight * log_prob.get(j).copied().unwrap_or(0.0))
                    .sum::<f64>();

            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((*class, score)),
            }
        }

        best.map(|(class, _)| class)
    }

    pub fn classes(&self) -> &[Category] {
        &self.classes
    }

    /// Number of features the model was fitted on
    pub fn n_features(&self) -> usize {
        self.feature_log_prob.first().map(Vec::len).unwrap_or(0)
    }

    /// Check internal consistency (used after loading from disk)
    pub fn validate(&self) -> Result<()> {
        let n = self.classes.len();
        if n == 0 {
            return Err(Error::InvalidData("Model has no classes".to_string()));
        }
        if self.class_log_prior.len() != n || self.feature_log_prob.len() != n {
            return Err(Error::InvalidData(
                "Model parameter shapes do not match class count".to_string(),
            ));
        }
        let width = self.n_features();
        if self.feature_log_prob.iter().any(|row| row.len() != width) {
            return Err(Error::InvalidData(
                "Model feature rows have different widths".to_string(),
            ));
        }
        Ok(())
    }
}
