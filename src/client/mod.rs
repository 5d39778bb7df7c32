//! Access to the remote ledger service.
//!
//! The pipeline only needs one call, "create transaction", so the seam is a single
//! async trait. [`HttpSubmissionClient`] is the production implementation.

mod errors;
mod http_client;

use std::sync::Arc;

use async_trait::async_trait;

use crate::models::CreateTransactionRequest;
use crate::types::TransactionId;

pub use errors::ClientError;
pub use http_client::HttpSubmissionClient;

/// What the ledger service said about one request.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct SubmissionResponse {
    pub success: bool,
    pub transaction_id: Option<TransactionId>,
    pub status_code: Option<u16>,
    pub message: Option<String>
}

impl SubmissionResponse {
    pub fn created(transaction_id: impl Into<TransactionId>) -> Self {
        Self {
            success: true,
            transaction_id: Some(transaction_id.into()),
            ..Self::default()
        }
    }

    pub fn rejected(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            status_code: Some(status_code),
            message: Some(message.into()),
            ..Self::default()
        }
    }
}

#[async_trait]
pub trait SubmissionClient: Send + Sync {
    /// Submits one transaction.
    ///
    /// A business rejection by the service is `Ok` with `success == false`. `Err` means
    /// the call itself could not be completed and later calls are unlikely to fare better.
    async fn create_transaction(&self, request: &CreateTransactionRequest) -> Result<SubmissionResponse, ClientError>;
}

/// Lets one client be shared between several pipelines.
#[async_trait]
impl<T: SubmissionClient + ?Sized> SubmissionClient for Arc<T> {
    async fn create_transaction(&self, request: &CreateTransactionRequest) -> Result<SubmissionResponse, ClientError> {
        self.as_ref().create_transaction(request).await
    }
}
