use std::sync::Arc;

use csv::StringRecord;

use crate::source::RawRow;

/// Every column of the transaction file, in the order the fixtures write them.
pub const COLUMNS: &[&str] = &[
    "MerchantTrackingNumber", "MerchantTrackingUrl", "ProcessorTrackingNumber", "KfsTrackingNumber",
    "Source", "SourceType", "TxnDescription",
    "Amount0", "CoA0", "Description0", "Direction0",
    "Amount1", "CoA1", "Description1", "Direction1",
    "Amount2", "CoA2", "Description2", "Direction2",
    "Amount3", "CoA3", "Description3", "Direction3",
    "MetaDataName", "MetaDataValue"
];

const VALID_ROW: &[(&str, &str)] = &[
    ("Source", "Bookstore"),
    ("SourceType", "Recharge"),
    ("Amount0", "100.00"),
    ("CoA0", "3110-13U02-ADNO003-522201"),
    ("Description0", "Textbook sale"),
    ("Direction0", "Debit"),
    ("Amount1", "100.00"),
    ("CoA1", "3110-13U02-ADNO003-770000"),
    ("Description1", "Textbook sale"),
    ("Direction1", "Credit")
];

/// Cell values of a well-formed row, with `overrides` applied on top.
pub fn valid_values(overrides: &[(&str, &str)]) -> Vec<String> {
    COLUMNS.iter()
        .map(|column| {
            overrides.iter().chain(VALID_ROW)
                .find(|(name, _)| name == column)
                .map(|(_, value)| value.to_string())
                .unwrap_or_default()
        })
        .collect()
}

/// A well-formed row with `overrides` applied on top.
pub fn valid_row(overrides: &[(&str, &str)]) -> RawRow {
    RawRow::new(Arc::new(StringRecord::from(COLUMNS.to_vec())), StringRecord::from(valid_values(overrides)))
}

/// A row holding exactly the given columns.
pub fn sparse_row(cells: &[(&str, &str)]) -> RawRow {
    let headers: Vec<&str> = cells.iter().map(|(name, _)| *name).collect();
    let values: Vec<&str> = cells.iter().map(|(_, value)| *value).collect();
    RawRow::new(Arc::new(StringRecord::from(headers)), StringRecord::from(values))
}

/// CSV text with a header and one line per entry of `rows`, each a set of overrides on a valid row.
pub fn csv_content(rows: &[&[(&str, &str)]]) -> String {
    let mut content = COLUMNS.join(",");
    content.push('\n');

    for overrides in rows {
        content.push_str(&valid_values(overrides).join(","));
        content.push('\n');
    }

    content
}
