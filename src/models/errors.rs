use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Row could not be bound to a transaction record: {0}")]
    Bind(#[from] csv::Error)
}
