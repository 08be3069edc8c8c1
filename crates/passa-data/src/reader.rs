//! CSV loading for account exports.
//!
//! Reads the directory export, checks the required columns are present and
//! converts every row into an [`AccountRecord`] for downstream processing.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use passa_core::error::{AuditError, Result};
use passa_core::models::{AccountRecord, RawAccount, REQUIRED_COLUMNS};
use tracing::{debug, warn};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load every account from the CSV file at `path`.
pub fn load_accounts(path: &Path) -> Result<Vec<AccountRecord>> {
    let file = File::open(path).map_err(|source| AuditError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Reading account export {}", path.display());
    read_accounts(file)
}

/// Read accounts from any CSV source.
///
/// Cell text is kept exactly as supplied. Columns beyond the required ones
/// are ignored.
pub fn read_accounts<R: Read>(source: R) -> Result<Vec<AccountRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(source);

    let missing = missing_columns(reader.headers()?);
    if !missing.is_empty() {
        return Err(AuditError::MissingColumns(missing));
    }

    let mut records = Vec::new();
    for row in reader.deserialize::<RawAccount>() {
        records.push(AccountRecord::from_raw(row?));
    }

    let unparsed: usize = records.iter().map(AccountRecord::unparsed_field_count).sum();
    if unparsed > 0 {
        warn!(
            "{} elapsed-time values could not be parsed and are treated as unknown",
            unparsed
        );
    }
    debug!("Loaded {} account records", records.len());

    Ok(records)
}

/// Required columns absent from `headers`, in canonical order.
pub fn missing_columns(headers: &csv::StringRecord) -> Vec<String> {
    REQUIRED_COLUMNS
        .iter()
        .filter(|&&column| !headers.iter().any(|h| h == column))
        .map(|column| column.to_string())
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
