//! The two-pass import.
//!
//! Pass one validates every row of the file without contacting the ledger
//! service. Only when the whole file is clean does pass two re-open it and submit
//! the rows one at a time, in file order. A file with any bad row is never
//! partially imported.

mod cancellation;
mod errors;
mod import_pipeline;
mod outcome;

pub use cancellation::Cancellation;
pub use errors::ImportError;
pub use import_pipeline::ImportPipeline;
pub use outcome::{FileValidation, ImportOutcome, ImportSummary, Phase, SubmissionOutcome, FATAL_EXIT_CODE};
