//! Per-category spending limits.

use crate::domain::Profile;

use super::summary_service::SummaryService;

/// Spent-versus-limit figures for one budgeted category.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetProgress {
    pub category: String,
    pub limit: f64,
    pub spent: f64,
}

impl BudgetProgress {
    pub fn is_over(&self) -> bool {
        self.spent > self.limit
    }
}

pub struct BudgetService;

impl BudgetService {
    /// Sets or overwrites the limit for `category`.
    ///
    /// The category does not have to exist in the profile's category list
    /// and the amount is taken as-is; values arrive pre-validated from the
    /// collection layer.
    pub fn set(profile: &Profile, category: impl Into<String>, amount: f64) -> Profile {
        let mut updated = profile.clone();
        updated.budgets.insert(category.into(), amount);
        updated
    }

    /// Spent-versus-limit rows for every budgeted category.
    pub fn progress(profile: &Profile) -> Vec<BudgetProgress> {
        profile
            .budgets
            .iter()
            .map(|(category, limit)| BudgetProgress {
                category: category.clone(),
                limit: *limit,
                spent: SummaryService::spend_by_category(profile, category),
            })
            .collect()
    }
}
