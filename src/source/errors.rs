use std::path::PathBuf;

use csv::ErrorKind;
use thiserror::Error;

/// The input could not be opened at all. Always fatal.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Unable to open CSV file [{}]: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error
    },
    #[error("Unable to read the header row of CSV file [{}]: {source}", .path.display())]
    Header {
        path: PathBuf,
        source: csv::Error
    }
}

/// A single row could not be read.
#[derive(Debug, Error)]
pub enum RowError {
    /// The row is structurally broken; the rest of the file is still readable.
    #[error("Malformed row: {0}")]
    Malformed(String),
    /// The underlying reader failed; the rest of the file cannot be trusted.
    #[error("Read error: {0}")]
    Io(csv::Error)
}

impl From<csv::Error> for RowError {
    fn from(error: csv::Error) -> Self {
        if error.is_io_error() {
            return RowError::Io(error);
        }

        let message = match error.kind() {
            ErrorKind::UnequalLengths { expected_len, len, .. } => {
                format!("row has {len} fields but the header has {expected_len}")
            }
            ErrorKind::Utf8 { .. } => "row contains invalid UTF-8".to_string(),
            _ => error.to_string()
        };

        RowError::Malformed(message)
    }
}
