use crate::client::SubmissionResponse;
use crate::types::{RowIndex, TransactionId};

/// Exit code for a run that ended in an [`crate::pipeline::ImportError`].
pub const FATAL_EXIT_CODE: u8 = 1;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    Validating,
    Submitting
}

/// Result of the validation pass.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FileValidation {
    Valid {
        rows: usize
    },
    Invalid {
        rows: usize,
        invalid_rows: usize
    },
    Cancelled
}

/// Counts from the submission pass.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct ImportSummary {
    pub attempted: usize,
    pub submitted: usize,
    pub rejected: usize
}

impl ImportSummary {
    pub fn record(&mut self, outcome: &SubmissionOutcome) {
        self.attempted += 1;

        match outcome {
            SubmissionOutcome::Submitted { .. } => self.submitted += 1,
            SubmissionOutcome::Rejected { .. } => self.rejected += 1
        }
    }
}

/// How an import ended, short of a fatal error.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ImportOutcome {
    /// Every row was sent. Individual rows may still have been rejected by the service.
    Succeeded(ImportSummary),
    /// At least one row failed validation, so nothing was sent.
    FileInvalid {
        rows: usize,
        invalid_rows: usize
    },
    /// Stopped at a row boundary. Rows already submitted stay submitted.
    Cancelled {
        phase: Phase,
        summary: ImportSummary
    }
}

impl ImportOutcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            ImportOutcome::Succeeded(_) => 0,
            ImportOutcome::FileInvalid { .. } => 2,
            ImportOutcome::Cancelled { .. } => 130
        }
    }
}

/// The ledger service's verdict on one row.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SubmissionOutcome {
    Submitted {
        row: RowIndex,
        transaction_id: TransactionId
    },
    Rejected {
        row: RowIndex,
        status_code: Option<u16>,
        message: Option<String>
    }
}

impl SubmissionOutcome {
    /// A response only counts as submitted when it is successful and names the new transaction.
    pub fn from_response(row: RowIndex, response: SubmissionResponse) -> Self {
        match response {
            SubmissionResponse { success: true, transaction_id: Some(transaction_id), .. } => {
                SubmissionOutcome::Submitted { row, transaction_id }
            }
            SubmissionResponse { status_code, message, .. } => {
                SubmissionOutcome::Rejected { row, status_code, message }
            }
        }
    }
}
