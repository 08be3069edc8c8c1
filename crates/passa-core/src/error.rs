use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the account auditor.
#[derive(Error, Debug)]
pub enum AuditError {
    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV document could not be parsed.
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// The input is missing one or more of the required columns.
    #[error("CSV must contain columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// No statistics can be defined over zero records.
    #[error("Insufficient data: no account records to analyse")]
    InsufficientData,

    /// A JSON export could not be serialised.
    #[error("Failed to serialise JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the passa crates.
pub type Result<T> = std::result::Result<T, AuditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = AuditError::FileRead {
            path: PathBuf::from("/some/accounts.csv"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read file"));
        assert!(msg.contains("/some/accounts.csv"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_missing_columns() {
        let err = AuditError::MissingColumns(vec!["Domain".to_string(), "Last Logon".to_string()]);
        assert_eq!(err.to_string(), "CSV must contain columns: Domain, Last Logon");
    }

    #[test]
    fn test_error_display_insufficient_data() {
        let err = AuditError::InsufficientData;
        assert_eq!(
            err.to_string(),
            "Insufficient data: no account records to analyse"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AuditError = io_err.into();
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid}").unwrap_err();
        let err: AuditError = json_err.into();
        assert!(err.to_string().contains("Failed to serialise JSON"));
    }
}
