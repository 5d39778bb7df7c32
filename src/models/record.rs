use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer};

use crate::models::RecordError;
use crate::source::RawRow;
use crate::types::{parse_amount, Direction};

/// A validated input row.
///
/// Text fields the file leaves blank hold an empty string, mirroring what the
/// ledger service expects for "not supplied".
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub merchant_tracking_number: String,
    pub merchant_tracking_url: String,
    pub processor_tracking_number: String,
    /// Internal (KFS) tracking number, at most 10 characters.
    pub kfs_tracking_number: String,
    /// System the transaction originates from.
    pub source: String,
    pub source_type: String,
    pub description: String,
    /// Legs 0 and 1, present on every transaction.
    pub transfers: [TransferLeg; 2],
    /// Legs 2 and 3, kept as read. Whether they are submitted is decided at transform time.
    pub optional_transfers: [OptionalLeg; 2],
    pub metadata_name: String,
    pub metadata_value: String
}

impl TransactionRecord {
    /// Binds a row by column name.
    ///
    /// # Errors
    /// Returns `RecordError` if a required column is missing or a value cannot be
    /// parsed. Rows that passed validation always bind.
    pub fn from_row(row: &RawRow) -> Result<Self, RecordError> {
        let row: TransactionRow = row.deserialize()?;
        Ok(row.into())
    }
}

/// One debit or credit movement within a transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferLeg {
    pub amount: Decimal,
    /// Chart-of-accounts string the leg posts against.
    pub account: String,
    pub description: String,
    pub direction: Direction
}

/// A leg whose fields may each be missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionalLeg {
    pub amount: Option<Decimal>,
    pub account: String,
    pub description: String,
    pub direction: Option<Direction>
}

/// Column layout of the input file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct TransactionRow {
    #[serde(default)]
    merchant_tracking_number: String,
    #[serde(default)]
    merchant_tracking_url: String,
    #[serde(default)]
    processor_tracking_number: String,
    #[serde(default)]
    kfs_tracking_number: String,
    source: String,
    source_type: String,
    #[serde(default)]
    txn_description: String,

    #[serde(deserialize_with = "amount")]
    amount0: Decimal,
    #[serde(rename = "CoA0")]
    coa0: String,
    description0: String,
    direction0: Direction,

    #[serde(deserialize_with = "amount")]
    amount1: Decimal,
    #[serde(rename = "CoA1")]
    coa1: String,
    description1: String,
    direction1: Direction,

    #[serde(default, deserialize_with = "optional_amount")]
    amount2: Option<Decimal>,
    #[serde(rename = "CoA2", default)]
    coa2: String,
    #[serde(default)]
    description2: String,
    #[serde(default)]
    direction2: Option<Direction>,

    #[serde(default, deserialize_with = "optional_amount")]
    amount3: Option<Decimal>,
    #[serde(rename = "CoA3", default)]
    coa3: String,
    #[serde(default)]
    description3: String,
    #[serde(default)]
    direction3: Option<Direction>,

    #[serde(default)]
    meta_data_name: String,
    #[serde(default)]
    meta_data_value: String
}

impl From<TransactionRow> for TransactionRecord {
    fn from(row: TransactionRow) -> Self {
        Self {
            merchant_tracking_number: row.merchant_tracking_number,
            merchant_tracking_url: row.merchant_tracking_url,
            processor_tracking_number: row.processor_tracking_number,
            kfs_tracking_number: row.kfs_tracking_number,
            source: row.source,
            source_type: row.source_type,
            description: row.txn_description,
            transfers: [
                TransferLeg {
                    amount: row.amount0,
                    account: row.coa0,
                    description: row.description0,
                    direction: row.direction0
                },
                TransferLeg {
                    amount: row.amount1,
                    account: row.coa1,
                    description: row.description1,
                    direction: row.direction1
                }
            ],
            optional_transfers: [
                OptionalLeg {
                    amount: row.amount2,
                    account: row.coa2,
                    description: row.description2,
                    direction: row.direction2
                },
                OptionalLeg {
                    amount: row.amount3,
                    account: row.coa3,
                    description: row.description3,
                    direction: row.direction3
                }
            ],
            metadata_name: row.meta_data_name,
            metadata_value: row.meta_data_value
        }
    }
}

//NOTE: Amounts go through parse_amount rather than Decimal's own Deserialize so that binding
//      accepts exactly what the validator accepted
fn amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_amount(&value).map_err(de::Error::custom)
}

fn optional_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;

    value.filter(|value| !value.trim().is_empty())
        .map(|value| parse_amount(&value))
        .transpose()
        .map_err(de::Error::custom)
}
