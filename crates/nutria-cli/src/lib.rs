//! nutria-cli library root.
//!
//! File and configuration handling for the `nutria` binary, exposed so
//! integration tests can exercise it without spawning the process.

pub mod config;

use std::path::Path;

use nutria_core::PatientRecord;

/// Read and parse a record file. Fails only when the file cannot be read
/// or is not UTF-8 text.
pub fn load_record(path: &Path) -> eyre::Result<PatientRecord> {
    let bytes = std::fs::read(path)
        .map_err(|e| eyre::eyre!("failed to read record at {}: {e}", path.display()))?;
    let record = PatientRecord::from_bytes(&bytes)
        .map_err(|e| eyre::eyre!("failed to load record at {}: {e}", path.display()))?;
    tracing::info!(path = %path.display(), sections = record.len(), "record loaded");
    Ok(record)
}
