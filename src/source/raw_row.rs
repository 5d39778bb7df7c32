use std::sync::Arc;

use csv::StringRecord;
use serde::de::DeserializeOwned;

/// One data row of the input file, bound to the file's header row.
#[derive(Debug, Clone)]
pub struct RawRow {
    headers: Arc<StringRecord>,
    record: StringRecord
}

impl RawRow {
    pub fn new(headers: Arc<StringRecord>, record: StringRecord) -> Self {
        Self { headers, record }
    }

    /// Returns the value of the named column, or `None` when the file has no such column.
    pub fn get(&self, column: &str) -> Option<&str> {
        let position = self.headers.iter().position(|header| header == column)?;
        self.record.get(position)
    }

    /// Binds the row to a serde type by column name.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, csv::Error> {
        self.record.deserialize(Some(self.headers.as_ref()))
    }
}
