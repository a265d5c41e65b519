//! Spending analyzers
//!
//! Two independent, stateless analyzers over a category distribution. Neither
//! calls the other.
//!
//! - **Behavior Analyzer** - Conservative / Aggressive / Balanced plus tags
//! - **Personality Analyzer** - a single persona with fixed copy
//!
//! ## Usage
//!
//! ```rust
//! use spendwise_core::insights::{Behavior, BehaviorAnalyzer, Persona, PersonalityAnalyzer};
//! use spendwise_core::models::{Category, CategoryDistribution};
//!
//! let dist = CategoryDistribution::new()
//!     .with(Category::Bills, 7000.0)
//!     .with(Category::Food, 2000.0);
//!
//! assert_eq!(BehaviorAnalyzer::new().analyze(&dist).behavior, Behavior::Conservative);
//! assert_eq!(PersonalityAnalyzer::new().analyze(&dist, 9000.0, 3).persona, Persona::SaverMonk);
//! ```

pub mod behavior;
pub mod personality;
pub mod types;

pub use behavior::{BehaviorAnalyzer, STABLE_CATEGORIES, VARIABLE_CATEGORIES};
pub use personality::{PersonalityAnalyzer, FOOD_SYNONYM_BUCKET};
pub use types::{Behavior, BehaviorAnalysis, Persona, PersonalityProfile, SpendingTag};
