use thiserror::Error;

use crate::client::ClientError;
use crate::models::RecordError;
use crate::source::{RowError, SourceError};
use crate::types::RowIndex;

/// Failures that abort an import. Row-level problems are reported through
/// [`crate::pipeline::ImportOutcome`] instead.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("Unable to read row [{row}]: {source}")]
    Read {
        row: RowIndex,
        source: RowError
    },
    #[error("Row [{row}] no longer matches what was validated: {source}")]
    Record {
        row: RowIndex,
        source: RecordError
    },
    #[error("Unexpected error sending row [{row}]: {source}")]
    Submission {
        row: RowIndex,
        source: ClientError
    }
}

impl ImportError {
    /// Row the import stopped at, if it got as far as reading rows.
    pub fn row(&self) -> Option<RowIndex> {
        match self {
            ImportError::Source(_) => None,
            ImportError::Read { row, .. } | ImportError::Record { row, .. } | ImportError::Submission { row, .. } => Some(*row)
        }
    }
}
