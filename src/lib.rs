//! Pocketbook: a pocket-money tracker for teenagers.
//!
//! Profiles record income and expense transactions, savings goals, and
//! per-category budgets. All state lives in a single JSON file under the
//! user's home directory; the CLI is a thin menu loop over the pure
//! services in [`core`].

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("pocketbook=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("Pocketbook tracing initialized.");
    });
}
