//! Result types for the spending analyzers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse spending behavior label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Behavior {
    /// Most spending goes to stable categories (bills, health, education)
    Conservative,
    /// Most spending goes to variable categories
    Aggressive,
    /// Neither side dominates
    Balanced,
    /// No distribution to analyze
    Unknown,
}

impl Behavior {
    pub fn as_str(&self) -> &'static str {
        match self {
            Behavior::Conservative => "Conservative",
            Behavior::Aggressive => "Aggressive",
            Behavior::Balanced => "Balanced",
            Behavior::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Independent observations attached to a behavior analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpendingTag {
    #[serde(rename = "High Variable Spend")]
    HighVariableSpend,
    #[serde(rename = "Entertainment Heavy")]
    EntertainmentHeavy,
    #[serde(rename = "Frequent Shopper")]
    FrequentShopper,
}

impl SpendingTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpendingTag::HighVariableSpend => "High Variable Spend",
            SpendingTag::EntertainmentHeavy => "Entertainment Heavy",
            SpendingTag::FrequentShopper => "Frequent Shopper",
        }
    }
}

impl fmt::Display for SpendingTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Output of the behavior analyzer
///
/// Percentages are absent only for the `Unknown` (empty distribution) case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviorAnalysis {
    pub behavior: Behavior,
    pub tags: Vec<SpendingTag>,
    #[serde(rename = "stable_p", skip_serializing_if = "Option::is_none", default)]
    pub stable_percent: Option<f64>,
    #[serde(rename = "variable_p", skip_serializing_if = "Option::is_none", default)]
    pub variable_percent: Option<f64>,
}

impl BehaviorAnalysis {
    pub fn unknown() -> Self {
        Self {
            behavior: Behavior::Unknown,
            tags: Vec::new(),
            stable_percent: None,
            variable_percent: None,
        }
    }

    pub fn has_tag(&self, tag: SpendingTag) -> bool {
        self.tags.contains(&tag)
    }
}

/// Spending persona, mutually exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Persona {
    #[serde(rename = "Newcomer")]
    Newcomer,
    #[serde(rename = "Saver Monk")]
    SaverMonk,
    #[serde(rename = "Comfort Spender")]
    ComfortSpender,
    #[serde(rename = "Impulse Buyer")]
    ImpulseBuyer,
    #[serde(rename = "Balanced Planner")]
    BalancedPlanner,
}

impl Persona {
    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::Newcomer => "Newcomer",
            Persona::SaverMonk => "Saver Monk",
            Persona::ComfortSpender => "Comfort Spender",
            Persona::ImpulseBuyer => "Impulse Buyer",
            Persona::BalancedPlanner => "Balanced Planner",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Persona::Newcomer => "🐣",
            Persona::SaverMonk => "🧘",
            Persona::ComfortSpender => "🍔",
            Persona::ImpulseBuyer => "⚡",
            Persona::BalancedPlanner => "🎯",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Persona::Newcomer => "Start tracking to reveal your financial persona!",
            Persona::SaverMonk => "You prioritize essentials and keep a tight ship.",
            Persona::ComfortSpender => "You value quality of life and good experiences.",
            Persona::ImpulseBuyer => "You love the thrill of a new purchase!",
            Persona::BalancedPlanner => "A perfect mix of fun and responsibility.",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            Persona::Newcomer => "Add more expenses to see trends.",
            Persona::SaverMonk => "Don't forget to treat yourself once in a while!",
            Persona::ComfortSpender => "Try to cut one subscription or one order per week.",
            Persona::ImpulseBuyer => "Wait 24 hours before any non-essential purchase.",
            Persona::BalancedPlanner => "Keep it up! You are in the top 10% of budgeters.",
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Output of the personality analyzer: persona plus its fixed copy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalityProfile {
    #[serde(rename = "personality")]
    pub persona: Persona,
    pub emoji: &'static str,
    pub description: &'static str,
    pub advice: &'static str,
}

impl From<Persona> for PersonalityProfile {
    fn from(persona: Persona) -> Self {
        Self {
            persona,
            emoji: persona.emoji(),
            description: persona.description(),
            advice: persona.advice(),
        }
    }
}
