use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{goal::Goal, transaction::Transaction};

/// Categories every new profile starts with.
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Food", "Fun", "Subscriptions", "Savings"];

/// One user's isolated financial dataset.
///
/// `balance` is derived: it always equals the sum of income amounts minus
/// the sum of expense amounts across `transactions`. `transactions` is
/// ordered newest-first; `categories` preserves insertion order and holds
/// no duplicates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub balance: f64,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub budgets: BTreeMap<String, f64>,
}

impl Profile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            balance: 0.0,
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            transactions: Vec::new(),
            goals: Vec::new(),
            budgets: BTreeMap::new(),
        }
    }

    /// Appends `category` to the category list unless already present.
    /// Existing order is preserved; a new category goes last.
    pub fn ensure_category(&mut self, category: &str) {
        if !self.categories.iter().any(|c| c == category) {
            self.categories.push(category.to_string());
        }
    }

    pub fn goal(&self, id: Uuid) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.id == id)
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }
}
