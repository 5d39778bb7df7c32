use super::RecordTransformer;

use std::str::FromStr;

use anyhow::Result;
use rust_decimal::Decimal;

use crate::models::{CreateTransactionRequest, MetadataEntry, TransactionRecord};
use crate::test_support::valid_row;
use crate::types::Direction;

fn transform(overrides: &[(&str, &str)]) -> Result<CreateTransactionRequest> {
    let record = TransactionRecord::from_row(&valid_row(overrides))?;
    Ok(RecordTransformer::default().to_request(record))
}

const LEG_2: &[(&str, &str)] = &[
    ("Amount2", "25.00"),
    ("CoA2", "3110-13U02-ADNO003-522202"),
    ("Description2", "Shipping"),
    ("Direction2", "Debit")
];

const LEG_3: &[(&str, &str)] = &[
    ("Amount3", "25.00"),
    ("CoA3", "3110-13U02-ADNO003-770002"),
    ("Description3", "Shipping"),
    ("Direction3", "Credit")
];

#[test]
fn test_base_fields_are_copied_verbatim() -> Result<()> {
    let request = transform(&[
        ("MerchantTrackingNumber", "ORDER-1"),
        ("MerchantTrackingUrl", "https://shop.example.edu/orders/1"),
        ("ProcessorTrackingNumber", "PROC-9"),
        ("KfsTrackingNumber", "KFS1"),
        ("TxnDescription", "Spring textbooks")
    ])?;

    assert_eq!(request.source, "Bookstore");
    assert_eq!(request.source_type, "Recharge");
    assert_eq!(request.description, "Spring textbooks");
    assert_eq!(request.merchant_tracking_number, "ORDER-1");
    assert_eq!(request.merchant_tracking_url, "https://shop.example.edu/orders/1");
    assert_eq!(request.processor_tracking_number, "PROC-9");
    assert_eq!(request.kfs_tracking_number, "KFS1");

    Ok(())
}

#[test]
fn test_required_legs_are_always_sent_in_order() -> Result<()> {
    let request = transform(&[])?;

    assert_eq!(request.transfers.len(), 2);
    assert_eq!(request.transfers[0].amount, Decimal::from_str("100.00")?);
    assert_eq!(request.transfers[0].financial_segment_string, "3110-13U02-ADNO003-522201");
    assert_eq!(request.transfers[0].description, "Textbook sale");
    assert_eq!(request.transfers[0].direction, Direction::Debit);
    assert_eq!(request.transfers[1].financial_segment_string, "3110-13U02-ADNO003-770000");
    assert_eq!(request.transfers[1].direction, Direction::Credit);

    Ok(())
}

#[test]
fn test_leg_count_follows_which_optional_legs_are_complete() -> Result<()> {
    let both: Vec<(&str, &str)> = LEG_2.iter().chain(LEG_3).copied().collect();

    assert_eq!(transform(&[])?.transfers.len(), 2);
    assert_eq!(transform(LEG_2)?.transfers.len(), 3);
    assert_eq!(transform(LEG_3)?.transfers.len(), 3);
    assert_eq!(transform(&both)?.transfers.len(), 4);

    Ok(())
}

#[test]
fn test_optional_leg_fields_are_mapped() -> Result<()> {
    let request = transform(LEG_2)?;

    assert_eq!(request.transfers[2].amount, Decimal::from_str("25.00")?);
    assert_eq!(request.transfers[2].financial_segment_string, "3110-13U02-ADNO003-522202");
    assert_eq!(request.transfers[2].description, "Shipping");
    assert_eq!(request.transfers[2].direction, Direction::Debit);

    Ok(())
}

// Deliberately replicated behaviour: an optional leg with any of amount, account or
// direction missing is dropped without complaint rather than rejected.
#[test]
fn test_partial_optional_leg_is_silently_excluded() -> Result<()> {
    let without_direction = transform(&[("Amount2", "25.00"), ("CoA2", "3110-13U02-ADNO003-522202")])?;
    let without_amount = transform(&[("CoA2", "3110-13U02-ADNO003-522202"), ("Direction2", "Debit")])?;
    let without_account = transform(&[("Amount3", "25.00"), ("Direction3", "Credit"), ("Description3", "Shipping")])?;

    assert_eq!(without_direction.transfers.len(), 2);
    assert_eq!(without_amount.transfers.len(), 2);
    assert_eq!(without_account.transfers.len(), 2);

    Ok(())
}

#[test]
fn test_description_is_not_part_of_the_leg_gate() -> Result<()> {
    let request = transform(&[("Amount2", "25.00"), ("CoA2", "3110-13U02-ADNO003-522202"), ("Direction2", "Credit")])?;

    assert_eq!(request.transfers.len(), 3);
    assert!(request.transfers[2].description.is_empty());

    Ok(())
}

#[test]
fn test_metadata_requires_both_name_and_value() -> Result<()> {
    assert!(transform(&[("MetaDataName", "Grant"), ("MetaDataValue", "")])?.metadata.is_empty());
    assert!(transform(&[("MetaDataName", ""), ("MetaDataValue", "NSF-42")])?.metadata.is_empty());
    assert!(transform(&[])?.metadata.is_empty());

    let request = transform(&[("MetaDataName", "Grant"), ("MetaDataValue", "NSF-42")])?;

    assert_eq!(request.metadata, vec![MetadataEntry {
        name: "Grant".to_string(),
        value: "NSF-42".to_string()
    }]);

    Ok(())
}

#[test]
fn test_submission_flags_come_from_the_transformer_not_the_row() -> Result<()> {
    let record = TransactionRecord::from_row(&valid_row(&[]))?;

    let default_request = RecordTransformer::default().to_request(record.clone());
    let flagged_request = RecordTransformer::new(true, true).to_request(record);

    assert!(!default_request.validate_financial_segment_strings);
    assert!(!default_request.auto_approve);
    assert!(flagged_request.validate_financial_segment_strings);
    assert!(flagged_request.auto_approve);

    Ok(())
}
