mod csv_source;
mod errors;
mod raw_row;

pub use csv_source::CsvRowSource;
pub use errors::{RowError, SourceError};
pub use raw_row::RawRow;

/// A restartable, lazily-read sequence of rows.
///
/// Every call to `open` starts again from the first data row. The handle it
/// returns owns the underlying file, which is released when the handle is dropped.
pub trait RowSource {
    type Rows: Iterator<Item = Result<RawRow, RowError>>;

    fn open(&self) -> Result<Self::Rows, SourceError>;
}
