//! Profile creation rules.

use crate::domain::Profile;

pub struct ProfileService;

impl ProfileService {
    /// Creates a profile seeded with the default categories, zero balance,
    /// and empty transactions, goals, and budgets.
    ///
    /// Returns `None` when `name` is empty after trimming; the caller is
    /// expected not to invoke this with empty input, so the miss is silent.
    pub fn create(name: &str) -> Option<Profile> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Profile::new(trimmed))
    }
}
