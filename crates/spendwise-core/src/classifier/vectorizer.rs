//! TF-IDF vectorizer for expense descriptions

use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Tokens are runs of two or more word characters
const TOKEN_PATTERN: &str = r"\b\w\w+\b";

/// Common English words that carry no category signal
const STOP_WORDS: &[&str] = &[
    "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any", "are",
    "as", "at", "be", "been", "before", "being", "below", "between", "both", "but", "by", "can",
    "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "if", "in", "into", "is", "it", "its", "itself", "just", "me",
    "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once", "only",
    "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she", "should",
    "so", "some", "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then",
    "there", "these", "they", "this", "those", "through", "to", "too", "under", "until", "up",
    "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why",
    "will", "with", "would", "you", "your", "yours", "yourself", "yourselves",
];

fn token_regex() -> &'static Regex {
    static TOKEN_RE: OnceLock<Regex> = OnceLock::new();
    TOKEN_RE.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("valid regex"))
}

/// Split a description into lower-cased, stop-word-free tokens
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    token_regex()
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|token| !STOP_WORDS.contains(token))
        .map(str::to_string)
        .collect()
}

/// Sparse feature vector: (feature index, weight), sorted by index
pub type SparseVector = Vec<(usize, f64)>;

/// TF-IDF vectorizer with a sorted vocabulary and smoothed IDF weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfIdfVectorizer {
    /// Vocabulary: term -> feature index (indices follow lexicographic order)
    vocabulary: BTreeMap<String, usize>,
    /// Inverse document frequency per feature index
    idf: Vec<f64>,
}

impl TfIdfVectorizer {
    /// Fit the vocabulary and IDF weights on a set of documents
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Result<Self> {
        let n_documents = documents.len() as f64;
        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();

        for doc in documents {
            let unique: BTreeSet<String> = tokenize(doc.as_ref()).into_iter().collect();
            for token in unique {
                *document_frequency.entry(token).or_insert(0) += 1;
            }
        }

        if document_frequency.is_empty() {
            return Err(Error::Training(
                "Empty vocabulary: descriptions contain only stop words or no words".to_string(),
            ));
        }

        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(document_frequency.len());
        for (index, (term, df)) in document_frequency.into_iter().enumerate() {
            // IDF = ln((N + 1) / (df + 1)) + 1
            idf.push(((n_documents + 1.0) / (df as f64 + 1.0)).ln() + 1.0);
            vocabulary.insert(term, index);
        }

        Ok(Self { vocabulary, idf })
    }

    /// Transform a document into an L2-normalised TF-IDF vector
    ///
    /// Terms outside the vocabulary are ignored; a document with no known
    /// terms yields an empty vector.
    pub fn transform(&self, document: &str) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for token in tokenize(document) {
            if let Some(&index) = self.vocabulary.get(&token) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut features: SparseVector = counts
            .into_iter()
            .map(|(index, tf)| (index, tf * self.idf[index]))
            .collect();

        let norm = features.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, weight) in &mut features {
                *weight /= norm;
            }
        }

        features
    }

    /// Number of features (vocabulary size)
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Check internal consistency (used after loading from disk)
    pub fn validate(&self) -> Result<()> {
        if self.vocabulary.len() != self.idf.len() {
            return Err(Error::InvalidData(format!(
                "Vocabulary has {} terms but {} IDF weights",
                self.vocabulary.len(),
                self.idf.len()
            )));
        }
        if self.vocabulary.values().any(|&i| i >= self.idf.len()) {
            return Err(Error::InvalidData(
                "Vocabulary index out of range".to_string(),
            ));
        }
        Ok(())
    }
}
