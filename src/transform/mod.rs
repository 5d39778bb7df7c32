#[cfg(test)]
mod tests;

use crate::models::{CreateTransactionRequest, MetadataEntry, OptionalLeg, TransactionRecord, TransferLeg, TransferRequest};

/// Maps validated records onto the ledger service's create-transaction request.
///
/// The two submission flags are run-wide settings and are stamped onto every request.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct RecordTransformer {
    validate_chart_of_accounts: bool,
    auto_approve: bool
}

impl RecordTransformer {
    pub fn new(validate_chart_of_accounts: bool, auto_approve: bool) -> Self {
        Self {
            validate_chart_of_accounts,
            auto_approve
        }
    }

    /// Builds the request for one record. Cannot fail: every value was parsed when the row was bound.
    pub fn to_request(&self, record: TransactionRecord) -> CreateTransactionRequest {
        let [first, second] = record.transfers;
        let mut transfers = vec![transfer(first), transfer(second)];
        transfers.extend(record.optional_transfers.into_iter().filter_map(optional_transfer));

        let metadata = if is_blank(&record.metadata_name) || is_blank(&record.metadata_value) {
            Vec::new()
        } else {
            vec![MetadataEntry {
                name: record.metadata_name,
                value: record.metadata_value
            }]
        };

        CreateTransactionRequest {
            source: record.source,
            source_type: record.source_type,
            description: record.description,
            merchant_tracking_number: record.merchant_tracking_number,
            merchant_tracking_url: record.merchant_tracking_url,
            processor_tracking_number: record.processor_tracking_number,
            kfs_tracking_number: record.kfs_tracking_number,
            validate_financial_segment_strings: self.validate_chart_of_accounts,
            auto_approve: self.auto_approve,
            transfers,
            metadata
        }
    }
}

fn transfer(leg: TransferLeg) -> TransferRequest {
    TransferRequest {
        amount: leg.amount,
        financial_segment_string: leg.account,
        description: leg.description,
        direction: leg.direction
    }
}

/// An optional leg is sent only when its amount, account and direction are all supplied.
/// Anything less is dropped whole, never sent in part.
fn optional_transfer(leg: OptionalLeg) -> Option<TransferRequest> {
    let (Some(amount), Some(direction)) = (leg.amount, leg.direction) else {
        return None;
    };

    if is_blank(&leg.account) {
        return None;
    }

    Some(TransferRequest {
        amount,
        financial_segment_string: leg.account,
        description: leg.description,
        direction
    })
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
