use rust_decimal::Decimal;
use serde::Serialize;

use crate::types::Direction;

/// Body of the ledger service's create-transaction call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    pub source: String,
    pub source_type: String,
    pub description: String,
    pub merchant_tracking_number: String,
    pub merchant_tracking_url: String,
    pub processor_tracking_number: String,
    pub kfs_tracking_number: String,
    /// Ask the service to check every account string against the chart of accounts.
    pub validate_financial_segment_strings: bool,
    /// Post the transaction without waiting for manual approval.
    pub auto_approve: bool,
    pub transfers: Vec<TransferRequest>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<MetadataEntry>
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    /// Written as a JSON number with every digit of the decimal, never through `f64`.
    #[serde(serialize_with = "rust_decimal::serde::arbitrary_precision::serialize")]
    pub amount: Decimal,
    pub financial_segment_string: String,
    pub description: String,
    pub direction: Direction
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataEntry {
    pub name: String,
    pub value: String
}
