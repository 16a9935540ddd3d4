//! The row source abstraction consumed by the validator.

use std::convert::Infallible;
use std::io;

/// Anything that can produce every row of a table up front.
///
/// Row 0 is the header; every following row is a data row. Sources are read
/// once and fully materialized, there is no streaming mode.
pub trait RowSource {
    /// Error produced when rows cannot be obtained.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Reads all rows, header first.
    fn read_all(&mut self) -> Result<Vec<Vec<String>>, Self::Error>;
}

/// Rows that are already in memory. Reading clones them, so the same value
/// can be validated repeatedly.
impl RowSource for Vec<Vec<String>> {
    type Error = Infallible;

    fn read_all(&mut self) -> Result<Vec<Vec<String>>, Self::Error> {
        Ok(self.clone())
    }
}

/// A configured `csv` reader. When the reader was built with headers enabled
/// the header record is emitted as row 0, otherwise the first record already
/// is the header.
impl<R: io::Read> RowSource for csv::Reader<R> {
    type Error = csv::Error;

    fn read_all(&mut self) -> Result<Vec<Vec<String>>, Self::Error> {
        let mut rows = Vec::new();
        if self.has_headers() {
            let header = self.headers()?;
            if !header.is_empty() {
                rows.push(record_to_row(header));
            }
        }
        for record in self.records() {
            rows.push(record_to_row(&record?));
        }
        Ok(rows)
    }
}

pub(crate) fn record_to_row(record: &csv::StringRecord) -> Vec<String> {
    record.iter().map(str::to_string).collect()
}
