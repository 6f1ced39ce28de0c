//! Export and import of the application snapshot

pub mod json;

pub use json::{export_snapshot, export_snapshot_string, import_snapshot};
