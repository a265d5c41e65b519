//! Domain models for Spendwise

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::{Error, Result};

/// Spending categories
///
/// A fixed, closed set. Labels are always emitted in title case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Travel,
    Food,
    Entertainment,
    Bills,
    Health,
    Education,
    Shopping,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Travel => "Travel",
            Self::Food => "Food",
            Self::Entertainment => "Entertainment",
            Self::Bills => "Bills",
            Self::Health => "Health",
            Self::Education => "Education",
            Self::Shopping => "Shopping",
            Self::Other => "Other",
        }
    }

    /// Get all categories
    pub fn all() -> &'static [Category] {
        &[
            Self::Travel,
            Self::Food,
            Self::Entertainment,
            Self::Bills,
            Self::Health,
            Self::Education,
            Self::Shopping,
            Self::Other,
        ]
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "travel" => Ok(Self::Travel),
            "food" => Ok(Self::Food),
            "entertainment" => Ok(Self::Entertainment),
            "bills" => Ok(Self::Bills),
            "health" => Ok(Self::Health),
            "education" => Ok(Self::Education),
            "shopping" => Ok(Self::Shopping),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of classifying a description
///
/// `Uncategorized` is the sentinel returned when neither the keyword table
/// nor a usable statistical model produced a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Category(Category),
    Uncategorized,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Category(category) => category.as_str(),
            Self::Uncategorized => "Uncategorized",
        }
    }

    pub fn category(&self) -> Option<Category> {
        match self {
            Self::Category(category) => Some(*category),
            Self::Uncategorized => None,
        }
    }
}

impl From<Category> for Label {
    fn from(category: Category) -> Self {
        Self::Category(category)
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Which layer produced a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassificationSource {
    /// Matched the fixed keyword table
    Keyword,
    /// Predicted by the statistical classifier
    Model,
    /// No usable model; sentinel returned
    Fallback,
}

impl ClassificationSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Model => "model",
            Self::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for ClassificationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of classifying an expense description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    #[serde(rename = "category")]
    pub label: Label,
    pub source: ClassificationSource,
}

/// A labelled expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub description: String,
    pub category: Category,
}

impl Expense {
    pub fn new(description: impl Into<String>, category: Category) -> Self {
        Self {
            description: description.into(),
            category,
        }
    }
}

/// An expense record as received from outside the engine
///
/// Either field may be absent; [`TrainingCorpus::from_records`] rejects the
/// whole batch if any record is incomplete.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseRecord {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Ordered, non-empty list of labelled expenses used to fit the classifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingCorpus {
    expenses: Vec<Expense>,
}

impl TrainingCorpus {
    pub fn new(expenses: Vec<Expense>) -> Result<Self> {
        if expenses.is_empty() {
            return Err(Error::Training("Training corpus is empty".to_string()));
        }
        Ok(Self { expenses })
    }

    /// Wrap rows already known to be non-empty
    pub(crate) fn from_nonempty(expenses: Vec<Expense>) -> Self {
        debug_assert!(!expenses.is_empty());
        Self { expenses }
    }

    /// Validate raw records; any incomplete or unlabelled record rejects the batch
    pub fn from_records(records: Vec<ExpenseRecord>) -> Result<Self> {
        let mut expenses = Vec::with_capacity(records.len());

        for (index, record) in records.into_iter().enumerate() {
            let description = record.description.ok_or_else(|| {
                Error::Training(format!("Record {} is missing a description", index))
            })?;
            let category = record
                .category
                .ok_or_else(|| Error::Training(format!("Record {} is missing a category", index)))?
                .parse::<Category>()
                .map_err(|e| Error::Training(format!("Record {}: {}", index, e)))?;

            expenses.push(Expense {
                description,
                category,
            });
        }

        Self::new(expenses)
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

/// Category name → amount over some period
///
/// Keys are free-form so that buckets outside the closed [`Category`] set
/// (e.g. "Chai/Sutta") still count toward the total. Lookups follow one rule
/// everywhere: a key that is present contributes its value, an absent key
/// contributes zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryDistribution {
    amounts: BTreeMap<String, f64>,
}

impl CategoryDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert keyed by category
    pub fn with(mut self, category: Category, amount: f64) -> Self {
        self.insert(category.as_str(), amount);
        self
    }

    /// Set the amount for a bucket, replacing any previous value
    pub fn insert(&mut self, bucket: impl Into<String>, amount: f64) {
        self.amounts.insert(bucket.into(), amount);
    }

    /// Amount for an arbitrary bucket name, zero when absent
    pub fn amount_of(&self, bucket: &str) -> f64 {
        self.amounts.get(bucket).copied().unwrap_or(0.0)
    }

    /// Amount for a category, zero when absent
    pub fn amount(&self, category: Category) -> f64 {
        self.amount_of(category.as_str())
    }

    /// Sum of the amounts for a set of categories
    pub fn sum_of(&self, categories: &[Category]) -> f64 {
        categories.iter().map(|c| self.amount(*c)).sum()
    }

    /// Sum of every bucket, including ones outside the category set
    pub fn total(&self) -> f64 {
        self.amounts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.amounts.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<(Category, f64)> for CategoryDistribution {
    fn from_iter<I: IntoIterator<Item = (Category, f64)>>(iter: I) -> Self {
        let mut dist = Self::new();
        for (category, amount) in iter {
            dist.insert(category.as_str(), amount);
        }
        dist
    }
}

impl From<BTreeMap<String, f64>> for CategoryDistribution {
    fn from(amounts: BTreeMap<String, f64>) -> Self {
        Self { amounts }
    }
}
