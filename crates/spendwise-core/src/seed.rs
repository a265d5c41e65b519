//! Built-in training corpus
//!
//! Used to train the classifier on first start when no persisted artifact is
//! available. Ten short descriptions per category.

use crate::models::{Category, Expense, TrainingCorpus};

use Category::*;

/// (description, category) rows, grouped by category
pub const SEED_ROWS: &[(&str, Category)] = &[
    ("uber", Travel),
    ("ola", Travel),
    ("taxi", Travel),
    ("cab", Travel),
    ("bus", Travel),
    ("train", Travel),
    ("flight", Travel),
    ("petrol", Travel),
    ("diesel", Travel),
    ("fuel", Travel),
    ("tomato", Food),
    ("potato", Food),
    ("onion", Food),
    ("vegetables", Food),
    ("grocery", Food),
    ("milk", Food),
    ("bread", Food),
    ("eggs", Food),
    ("zomato", Food),
    ("swiggy", Food),
    ("netflix", Entertainment),
    ("prime video", Entertainment),
    ("disney", Entertainment),
    ("hotstar", Entertainment),
    ("movie", Entertainment),
    ("cinema", Entertainment),
    ("spotify", Entertainment),
    ("music", Entertainment),
    ("concert", Entertainment),
    ("gaming", Entertainment),
    ("recharge", Bills),
    ("electricity", Bills),
    ("water bill", Bills),
    ("internet", Bills),
    ("wifi", Bills),
    ("rent", Bills),
    ("maintenance", Bills),
    ("mobile bill", Bills),
    ("postpaid", Bills),
    ("prepaid", Bills),
    ("doctor", Health),
    ("hospital", Health),
    ("medicine", Health),
    ("pharmacy", Health),
    ("gym", Health),
    ("workout", Health),
    ("fitness", Health),
    ("clinic", Health),
    ("medical", Health),
    ("lab test", Health),
    ("fees", Education),
    ("school", Education),
    ("college", Education),
    ("tuition", Education),
    ("books", Education),
    ("stationary", Education),
    ("exam", Education),
    ("course", Education),
    ("udemy", Education),
    ("coursera", Education),
    ("amazon", Shopping),
    ("flipkart", Shopping),
    ("myntra", Shopping),
    ("shopping", Shopping),
    ("clothes", Shopping),
    ("tshirt", Shopping),
    ("jeans", Shopping),
    ("shoes", Shopping),
    ("laptop", Shopping),
    ("mall", Shopping),
    ("gift", Other),
    ("donation", Other),
    ("charity", Other),
    ("misc", Other),
    ("investment", Other),
    ("savings", Other),
    ("pocket money", Other),
    ("cash", Other),
    ("transfer", Other),
    ("presents", Other),
];

pub fn seed_expenses() -> Vec<Expense> {
    SEED_ROWS
        .iter()
        .map(|(description, category)| Expense::new(*description, *category))
        .collect()
}

/// The seed rows as a training corpus
pub fn seed_corpus() -> TrainingCorpus {
    TrainingCorpus::from_nonempty(seed_expenses())
}
