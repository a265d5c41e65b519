//! Behavior Analyzer
//!
//! Splits a category distribution into stable and variable spending and
//! labels the mix:
//! - stable share > 70% → Conservative
//! - otherwise variable share > 70% → Aggressive
//! - otherwise Balanced
//!
//! Tags are computed independently of the label and of each other.

use crate::models::{Category, CategoryDistribution};

use super::types::{Behavior, BehaviorAnalysis, SpendingTag};

/// Categories treated as fixed commitments
pub const STABLE_CATEGORIES: &[Category] = &[Category::Bills, Category::Health, Category::Education];

/// Categories treated as discretionary
pub const VARIABLE_CATEGORIES: &[Category] = &[
    Category::Entertainment,
    Category::Shopping,
    Category::Travel,
    Category::Food,
];

const DOMINANT_SHARE: f64 = 0.7;
const HIGH_VARIABLE_SHARE: f64 = 0.6;
const HEAVY_CATEGORY_SHARE: f64 = 0.2;

/// Threshold classifier over a category distribution
#[derive(Debug, Clone, Copy, Default)]
pub struct BehaviorAnalyzer;

impl BehaviorAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, dist: &CategoryDistribution) -> BehaviorAnalysis {
        if dist.is_empty() {
            return BehaviorAnalysis::unknown();
        }

        let total = dist.total();
        let stable_sum = dist.sum_of(STABLE_CATEGORIES);
        let variable_sum = dist.sum_of(VARIABLE_CATEGORIES);

        // Shares are compared as `part > total * threshold` so a zero total
        // never divides and never trips a threshold.
        let behavior = if stable_sum > total * DOMINANT_SHARE {
            Behavior::Conservative
        } else if variable_sum > total * DOMINANT_SHARE {
            Behavior::Aggressive
        } else {
            Behavior::Balanced
        };

        let mut tags = Vec::new();
        if variable_sum > total * HIGH_VARIABLE_SHARE {
            tags.push(SpendingTag::HighVariableSpend);
        }
        if dist.amount(Category::Entertainment) > total * HEAVY_CATEGORY_SHARE {
            tags.push(SpendingTag::EntertainmentHeavy);
        }
        if dist.amount(Category::Shopping) > total * HEAVY_CATEGORY_SHARE {
            tags.push(SpendingTag::FrequentShopper);
        }

        BehaviorAnalysis {
            behavior,
            tags,
            stable_percent: Some(percent(stable_sum, total)),
            variable_percent: Some(percent(variable_sum, total)),
        }
    }
}

fn percent(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        part / total * 100.0
    } else {
        0.0
    }
}
