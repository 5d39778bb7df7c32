use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter, Trim};

use crate::source::{RawRow, RowError, RowSource, SourceError};

/// Reads rows from a header-bearing CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvRowSource {
    path: PathBuf
}

impl CsvRowSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RowSource for CsvRowSource {
    type Rows = CsvRows<BufReader<File>>;

    fn open(&self) -> Result<Self::Rows, SourceError> {
        let file = File::open(&self.path).map_err(|source| SourceError::Open {
            path: self.path.clone(),
            source
        })?;

        CsvRows::from_reader(BufReader::new(file)).map_err(|source| SourceError::Header {
            path: self.path.clone(),
            source
        })
    }
}

/// An open pass over a CSV input.
pub struct CsvRows<R> {
    headers: Arc<StringRecord>,
    records: StringRecordsIntoIter<R>
}

impl<R: Read> CsvRows<R> {
    /// Reads the header row eagerly so that an unreadable header fails the open, not the first row.
    pub fn from_reader(reader: R) -> Result<Self, csv::Error> {
        //NOTE: flexible stays off so that a row with the wrong number of fields surfaces as an error
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(reader);

        let headers = Arc::new(reader.headers()?.clone());

        Ok(Self {
            headers,
            records: reader.into_records()
        })
    }
}

impl<R: Read> Iterator for CsvRows<R> {
    type Item = Result<RawRow, RowError>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.records.next()?;

        Some(result
            .map(|record| RawRow::new(self.headers.clone(), record))
            .map_err(RowError::from))
    }
}
