//! Snapshot export and import
//!
//! The export file has the same shape as the persisted snapshot. Import
//! replaces all in-memory state wholesale, but only when all five
//! mandatory top-level fields are present; otherwise it reports an error
//! and changes nothing. Optional fields (notifications, bills) default to
//! empty.

use std::io::Write;

use crate::error::{FinTrackError, FinTrackResult};
use crate::models::AppState;

/// Top-level fields an import payload must carry
pub const MANDATORY_FIELDS: [&str; 5] =
    ["transactions", "goals", "categories", "budgetRule", "settings"];

/// Write the full snapshot to `writer`
pub fn export_snapshot<W: Write>(state: &AppState, writer: &mut W, pretty: bool) -> FinTrackResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, state)
    } else {
        serde_json::to_writer(writer, state)
    }
    .map_err(|e| FinTrackError::Export(e.to_string()))?;

    Ok(())
}

/// Serialize the full snapshot to a string
pub fn export_snapshot_string(state: &AppState) -> FinTrackResult<String> {
    serde_json::to_string_pretty(state).map_err(|e| FinTrackError::Export(e.to_string()))
}

/// Parse an exported snapshot, validating the mandatory fields
pub fn import_snapshot(raw: &str) -> FinTrackResult<AppState> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| FinTrackError::Import(e.to_string()))?;

    let object = value
        .as_object()
        .ok_or_else(|| FinTrackError::Import("Snapshot must be a JSON object".into()))?;

    let missing: Vec<&str> = MANDATORY_FIELDS
        .iter()
        .copied()
        .filter(|field| !object.contains_key(*field))
        .collect();
    if !missing.is_empty() {
        return Err(FinTrackError::Import(format!(
            "Snapshot is missing mandatory fields: {}",
            missing.join(", ")
        )));
    }

    serde_json::from_value(value).map_err(|e| FinTrackError::Import(e.to_string()))
}
