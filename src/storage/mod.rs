//! Storage layer for fintrack
//!
//! The whole application state persists as one JSON snapshot under a
//! fixed file name. Loading never fails: a missing or unparseable
//! snapshot falls back to the default state, and partial snapshots
//! default field by field.

pub mod file_io;

pub use file_io::{read_json, write_json_atomic};

use std::path::{Path, PathBuf};

use crate::error::FinTrackResult;
use crate::models::AppState;

/// File name of the persisted snapshot
pub const SNAPSHOT_FILE: &str = "fintrack.json";

/// Persistence adapter for the application snapshot
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Create a store writing the snapshot under the given data directory
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SNAPSHOT_FILE),
        }
    }

    /// Path of the snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted state
    ///
    /// Never fails: a missing file yields the default state, and a
    /// corrupt one is logged and replaced by the default state. Partial
    /// snapshots default each missing field independently via serde.
    pub fn load(&self) -> AppState {
        match read_json::<AppState, _>(&self.path) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "snapshot unreadable, starting from default state"
                );
                AppState::default()
            }
        }
    }

    /// Persist the full state
    ///
    /// Callers treat a write failure as non-fatal: log and continue.
    pub fn save(&self, state: &AppState) -> FinTrackResult<()> {
        write_json_atomic(&self.path, state)
    }

    /// Remove the persisted snapshot; the caller reinitializes state
    pub fn erase_all(&self) -> FinTrackResult<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Transaction, TransactionKind};
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::new(temp_dir.path());

        let state = store.load();
        assert!(state.transactions.is_empty());
        assert_eq!(state.categories.len(), 8);
        assert_eq!(state.budget_rule.name, "50/30/20 Rule");
    }

    #[test]
    fn test_load_corrupt_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::new(temp_dir.path());
        std::fs::write(store.path(), "{{{ definitely not json").unwrap();

        let state = store.load();
        assert!(state.transactions.is_empty());
        assert_eq!(state.categories.len(), 8);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::new(temp_dir.path());

        let mut state = AppState::default();
        state
            .transactions
            .push(Transaction::new(TransactionKind::Income, Money::from_cents(1000)));
        store.save(&state).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.transactions.len(), 1);
        assert_eq!(loaded.transactions[0].id, state.transactions[0].id);
    }

    #[test]
    fn test_load_partial_snapshot_defaults_fields() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::new(temp_dir.path());
        std::fs::write(store.path(), r#"{"goals": [], "bills": []}"#).unwrap();

        let state = store.load();
        assert_eq!(state.categories.len(), 8);
        assert_eq!(state.settings.currency, "USD");
    }

    #[test]
    fn test_erase_all() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::new(temp_dir.path());

        store.save(&AppState::default()).unwrap();
        assert!(store.path().exists());

        store.erase_all().unwrap();
        assert!(!store.path().exists());

        // Erasing twice is fine
        store.erase_all().unwrap();
    }
}
