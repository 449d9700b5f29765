//! Pure operations over profiles.
//!
//! Every mutation borrows the old profile and returns a new value; the
//! caller (normally [`crate::core::ProfileBook`]) replaces its snapshot and
//! persists. None of these operations fail: inputs arrive pre-validated
//! from the collection layer and unknown ids are tolerated as no-ops.

pub mod budget_service;
pub mod goal_service;
pub mod profile_service;
pub mod summary_service;
pub mod transaction_service;

pub use budget_service::{BudgetProgress, BudgetService};
pub use goal_service::{GoalCompleted, GoalService};
pub use profile_service::ProfileService;
pub use summary_service::{CategorySpend, SummaryService};
pub use transaction_service::TransactionService;
