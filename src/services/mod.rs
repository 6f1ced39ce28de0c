//! Business logic layer
//!
//! Pure computations over the application state: derived metrics, the
//! notification generator, the goal progress updater, and the tip
//! collaborator seam.

pub mod goals;
pub mod metrics;
pub mod notifications;
pub mod tips;

pub use metrics::{BucketSpend, BucketTargets};
pub use tips::{TipProvider, FALLBACK_TIP};
