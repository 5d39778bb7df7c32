use tracing::{error, info};

use crate::client::SubmissionClient;
use crate::models::TransactionRecord;
use crate::pipeline::{Cancellation, FileValidation, ImportError, ImportOutcome, ImportSummary, Phase, SubmissionOutcome};
use crate::source::{RowError, RowSource};
use crate::transform::RecordTransformer;
use crate::validation::{Validation, Validator};

/// Validates a whole file, then submits it row by row.
///
/// The pipeline is the only component that reports: the validator and transformer
/// return values, and every row outcome is logged here with its row index.
pub struct ImportPipeline<C> {
    client: C,
    transformer: RecordTransformer,
    validator: Validator
}

impl<C: SubmissionClient> ImportPipeline<C> {
    pub fn new(client: C, transformer: RecordTransformer) -> Self {
        Self {
            client,
            transformer,
            validator: Validator::default()
        }
    }

    /// Runs both passes over `source`.
    ///
    /// # Errors
    /// Returns `ImportError` when the source cannot be opened or read, or when the
    /// submission client fails outright. A client failure stops the import at that
    /// row; rows before it remain submitted.
    pub async fn run<S: RowSource>(&self, source: &S, cancellation: &Cancellation) -> Result<ImportOutcome, ImportError> {
        info!("Importing");

        match self.validate_file(source, cancellation)? {
            FileValidation::Valid { rows } => {
                info!("All [{rows}] rows passed validation");
            }
            FileValidation::Invalid { rows, invalid_rows } => {
                error!("Validation errors found in [{invalid_rows}] of [{rows}] rows, nothing was submitted");
                return Ok(ImportOutcome::FileInvalid { rows, invalid_rows });
            }
            FileValidation::Cancelled => {
                info!("Import cancelled during validation, nothing was submitted");
                return Ok(ImportOutcome::Cancelled {
                    phase: Phase::Validating,
                    summary: ImportSummary::default()
                });
            }
        }

        self.submit_file(source, cancellation).await
    }

    /// Validates every row of `source` without submitting anything.
    ///
    /// Keeps going after an invalid row so that one run reports every problem in the file.
    pub fn validate_file<S: RowSource>(&self, source: &S, cancellation: &Cancellation) -> Result<FileValidation, ImportError> {
        let mut file_rows = source.open()?;
        let mut rows = 0;
        let mut invalid_rows = 0;

        for index in 0.. {
            if cancellation.is_cancelled() {
                return Ok(FileValidation::Cancelled);
            }

            let Some(row) = file_rows.next() else {
                break;
            };

            let validation = match row {
                Ok(row) => self.validator.validate(&row),
                Err(RowError::Malformed(message)) => Validation::malformed(message),
                Err(source) => return Err(ImportError::Read { row: index, source })
            };

            rows += 1;

            if !validation.is_valid() {
                invalid_rows += 1;
                error!("Validation errors found in row [{index}]: {}", validation.messages().join("; "));
            }
        }

        if invalid_rows > 0 {
            Ok(FileValidation::Invalid { rows, invalid_rows })
        } else {
            Ok(FileValidation::Valid { rows })
        }
    }

    async fn submit_file<S: RowSource>(&self, source: &S, cancellation: &Cancellation) -> Result<ImportOutcome, ImportError> {
        let mut file_rows = source.open()?;
        let mut summary = ImportSummary::default();

        for index in 0.. {
            if cancellation.is_cancelled() {
                info!("Import cancelled before row [{index}], [{}] rows already submitted were kept", summary.submitted);
                return Ok(ImportOutcome::Cancelled {
                    phase: Phase::Submitting,
                    summary
                });
            }

            let Some(row) = file_rows.next() else {
                break;
            };

            info!("Importing row [{index}]");

            let row = row.map_err(|source| ImportError::Read { row: index, source })?;
            let record = TransactionRecord::from_row(&row)
                .map_err(|source| ImportError::Record { row: index, source })?;
            let request = self.transformer.to_request(record);

            let response = match self.client.create_transaction(&request).await {
                Ok(response) => response,
                Err(source) => {
                    error!("Unexpected error sending import request for row [{index}]: {source}");
                    return Err(ImportError::Submission { row: index, source });
                }
            };

            let outcome = SubmissionOutcome::from_response(index, response);
            report(&outcome);
            summary.record(&outcome);
        }

        info!(
            "Import finished: [{}] rows attempted, [{}] submitted, [{}] rejected",
            summary.attempted, summary.submitted, summary.rejected
        );

        Ok(ImportOutcome::Succeeded(summary))
    }
}

fn report(outcome: &SubmissionOutcome) {
    match outcome {
        SubmissionOutcome::Submitted { row, transaction_id } => {
            info!("Transaction id [{transaction_id}] imported from row [{row}] successfully");
        }
        SubmissionOutcome::Rejected { row, status_code, message } => {
            error!(
                "Transaction imported from row [{row}] failed with status code [{}], message [{}]",
                status_code.map_or_else(|| "none".to_string(), |code| code.to_string()),
                message.as_deref().unwrap_or_default()
            );
        }
    }
}
