//! fintrack - Personal finance tracker core
//!
//! This library provides the core functionality for the fintrack
//! application: transaction entry, category-based budgeting against a
//! needs/wants/savings rule, savings goals, recurring bill reminders,
//! notifications, and reports.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management
//! - `error`: Custom error types
//! - `models`: Plain data records (transactions, goals, categories, ...)
//! - `services`: Pure logic (derived metrics, notification generation,
//!   goal progress, tips)
//! - `storage`: Single-snapshot JSON persistence
//! - `export`: Snapshot export/import
//! - `app`: The state container orchestrating mutations

pub mod app;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use app::App;
pub use error::{FinTrackError, FinTrackResult};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("fintrack=info".parse().expect("static directive"));

        fmt().with_env_filter(filter).init();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_tracing_does_not_panic() {
        super::init_tracing();
        super::init_tracing();
    }
}
