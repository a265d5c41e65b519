//! Personality Analyzer
//!
//! First-match cascade over spending ratios (each category / total spend):
//! 1. bills > 60% → Saver Monk
//! 2. food > 40% or entertainment > 30% → Comfort Spender
//! 3. shopping > 30% → Impulse Buyer
//! 4. otherwise → Balanced Planner
//!
//! An empty distribution or zero total spend yields Newcomer.

use tracing::debug;

use crate::models::{Category, CategoryDistribution};

use super::types::{Persona, PersonalityProfile};

/// Bucket folded into Food when computing the food ratio. Nothing in the
/// engine produces it; it only arrives from callers' distributions.
pub const FOOD_SYNONYM_BUCKET: &str = "Chai/Sutta";

const SAVER_BILLS_RATIO: f64 = 0.6;
const COMFORT_FOOD_RATIO: f64 = 0.4;
const COMFORT_ENTERTAINMENT_RATIO: f64 = 0.3;
const IMPULSE_SHOPPING_RATIO: f64 = 0.3;

#[derive(Debug, Clone, Copy, Default)]
pub struct PersonalityAnalyzer;

impl PersonalityAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Pick a persona for a distribution
    ///
    /// `total_spend` is supplied by the caller rather than summed from the
    /// distribution. `month_count` is accepted but does not affect the result.
    pub fn analyze(
        &self,
        dist: &CategoryDistribution,
        total_spend: f64,
        month_count: u32,
    ) -> PersonalityProfile {
        let persona = Self::classify(dist, total_spend);
        debug!(
            "Persona {} for total {:.2} over {} month(s)",
            persona, total_spend, month_count
        );
        persona.into()
    }

    fn classify(dist: &CategoryDistribution, total_spend: f64) -> Persona {
        if dist.is_empty() || total_spend == 0.0 {
            return Persona::Newcomer;
        }

        let food_ratio =
            (dist.amount(Category::Food) + dist.amount_of(FOOD_SYNONYM_BUCKET)) / total_spend;
        let entertainment_ratio = dist.amount(Category::Entertainment) / total_spend;
        let shopping_ratio = dist.amount(Category::Shopping) / total_spend;
        let bills_ratio = dist.amount(Category::Bills) / total_spend;

        if bills_ratio > SAVER_BILLS_RATIO {
            Persona::SaverMonk
        } else if food_ratio > COMFORT_FOOD_RATIO
            || entertainment_ratio > COMFORT_ENTERTAINMENT_RATIO
        {
            Persona::ComfortSpender
        } else if shopping_ratio > IMPULSE_SHOPPING_RATIO {
            Persona::ImpulseBuyer
        } else {
            Persona::BalancedPlanner
        }
    }
}
