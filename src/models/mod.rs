mod errors;
mod record;
mod request;

pub use errors::RecordError;
pub use record::{OptionalLeg, TransactionRecord, TransferLeg};
pub use request::{CreateTransactionRequest, MetadataEntry, TransferRequest};
