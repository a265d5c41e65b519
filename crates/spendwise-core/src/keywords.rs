//! Keyword matcher for expense descriptions
//!
//! First pass of classification. Descriptions are lower-cased and checked
//! against a fixed, ordered list of (category, keywords) rules. The first rule
//! with any keyword occurring as a substring wins. There is no scoring: when a
//! description mentions words from several categories, rule order decides.
//!
//! Order: Food, Travel, Entertainment, Bills, Health, Education, Shopping, Other.

use tracing::debug;

use crate::models::Category;

/// One entry of the keyword table
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub category: Category,
    pub keywords: &'static [&'static str],
}

const FOOD: &[&str] = &[
    "tomato",
    "potato",
    "onion",
    "vegetable",
    "milk",
    "bread",
    "egg",
    "grocery",
    "groceries",
    "zomato",
    "swiggy",
    "restaurant",
    "dinner",
    "lunch",
    "breakfast",
    "pizza",
    "burger",
    "fruit",
    "biryani",
    "maggi",
    "chai",
    "sutta",
    "tea",
    "coffee",
];

const TRAVEL: &[&str] = &[
    "uber",
    "ola",
    "taxi",
    "cab",
    "bus",
    "train",
    "flight",
    "petrol",
    "diesel",
    "fuel",
    "conveyance",
    "rickshaw",
    "auto",
    "rapido",
    "metro",
    "parking",
];

const ENTERTAINMENT: &[&str] = &[
    "netflix",
    "prime video",
    "disney",
    "hotstar",
    "movie",
    "cinema",
    "spotify",
    "music",
    "concert",
    "gaming",
    "pubg",
    "xbox",
    "ps5",
    "theatre",
    "clubbing",
    "party",
];

const BILLS: &[&str] = &[
    "recharge",
    "electricity",
    "water bill",
    "internet",
    "wifi",
    "rent",
    "maintenance",
    "postpaid",
    "prepaid",
    "gas cylinder",
    "broadband",
    "utility",
    "dth",
    "jio",
    "airtel",
];

const HEALTH: &[&str] = &[
    "doctor",
    "hospital",
    "medicine",
    "pharmacy",
    "gym",
    "workout",
    "fitness",
    "clinic",
    "medical",
    "lab test",
    "dentist",
    "yoga",
    "protein",
];

const EDUCATION: &[&str] = &[
    "fees",
    "school",
    "college",
    "tuition",
    "books",
    "stationary",
    "exam",
    "course",
    "udemy",
    "coursera",
    "library",
    "skillshare",
];

const SHOPPING: &[&str] = &[
    "amazon",
    "flipkart",
    "myntra",
    "shopping",
    "clothes",
    "tshirt",
    "jeans",
    "shoes",
    "laptop",
    "mobile phone",
    "mall",
    "fashion",
    "gadget",
    "meesho",
    "ajio",
];

const OTHER: &[&str] = &[
    "gift",
    "donation",
    "charity",
    "investment",
    "savings",
    "pocket money",
    "cash",
    "transfer",
    "interest",
    "tax",
    "puja",
    "diwali",
    "festival",
];

/// The built-in table, in priority order
pub const DEFAULT_RULES: &[KeywordRule] = &[
    KeywordRule {
        category: Category::Food,
        keywords: FOOD,
    },
    KeywordRule {
        category: Category::Travel,
        keywords: TRAVEL,
    },
    KeywordRule {
        category: Category::Entertainment,
        keywords: ENTERTAINMENT,
    },
    KeywordRule {
        category: Category::Bills,
        keywords: BILLS,
    },
    KeywordRule {
        category: Category::Health,
        keywords: HEALTH,
    },
    KeywordRule {
        category: Category::Education,
        keywords: EDUCATION,
    },
    KeywordRule {
        category: Category::Shopping,
        keywords: SHOPPING,
    },
    KeywordRule {
        category: Category::Other,
        keywords: OTHER,
    },
];

/// Ordered substring matcher over a static keyword table
#[derive(Debug, Clone, Copy)]
pub struct KeywordMatcher {
    rules: &'static [KeywordRule],
}

impl KeywordMatcher {
    pub fn new() -> Self {
        Self {
            rules: DEFAULT_RULES,
        }
    }

    /// Match a description against the table, first rule wins
    pub fn match_description(&self, description: &str) -> Option<Category> {
        let lowered = description.to_lowercase();

        for rule in self.rules {
            if let Some(keyword) = rule.keywords.iter().find(|kw| lowered.contains(*kw)) {
                debug!(
                    "Keyword '{}' matched '{}': {}",
                    keyword, description, rule.category
                );
                return Some(rule.category);
            }
        }

        None
    }

    /// The rules in priority order
    pub fn rules(&self) -> &'static [KeywordRule] {
        self.rules
    }
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        Self::new()
    }
}
