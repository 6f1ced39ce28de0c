//! Path management for fintrack
//!
//! ## Path Resolution Order
//!
//! 1. `FINTRACK_DATA_DIR` environment variable (if set)
//! 2. Platform data directory via `directories` (e.g.
//!    `~/.local/share/fintrack` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::FinTrackError;

/// Manages all paths used by fintrack
#[derive(Debug, Clone)]
pub struct FinTrackPaths {
    /// Base directory for all fintrack data
    base_dir: PathBuf,
}

impl FinTrackPaths {
    /// Create a new FinTrackPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, FinTrackError> {
        let base_dir = if let Ok(custom) = std::env::var("FINTRACK_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "fintrack")
                .ok_or_else(|| {
                    FinTrackError::Config("Could not determine a data directory".into())
                })?
                .data_dir()
                .to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create FinTrackPaths with a custom base directory (useful for
    /// testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base data directory
    pub fn data_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Ensure the data directory exists
    pub fn ensure_directories(&self) -> Result<(), FinTrackError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            FinTrackError::Io(format!(
                "Failed to create directory {}: {}",
                self.base_dir.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_with_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinTrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        assert_eq!(paths.data_dir(), &temp_dir.path().to_path_buf());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let paths = FinTrackPaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();
        assert!(nested.exists());
    }
}
