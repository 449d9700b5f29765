//! Derived spending figures used by budgets and the breakdown chart.

use crate::domain::{Profile, TransactionKind};

/// Total expense amount recorded against one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpend {
    pub category: String,
    pub spent: f64,
}

pub struct SummaryService;

impl SummaryService {
    /// Sum of expense amounts whose category matches `category` exactly
    /// (case-sensitive). Income never counts.
    pub fn spend_by_category(profile: &Profile, category: &str) -> f64 {
        profile
            .transactions
            .iter()
            .filter(|txn| txn.kind == TransactionKind::Expense && txn.category == category)
            .map(|txn| txn.amount)
            .sum()
    }

    /// Spend per category for every entry in the profile's category list,
    /// in list order. This feeds the breakdown chart.
    pub fn category_breakdown(profile: &Profile) -> Vec<CategorySpend> {
        profile
            .categories
            .iter()
            .map(|category| CategorySpend {
                category: category.clone(),
                spent: Self::spend_by_category(profile, category),
            })
            .collect()
    }
}
