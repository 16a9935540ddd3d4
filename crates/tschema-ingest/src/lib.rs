//! Row sources for table schema validation.
//!
//! The validator needs exactly one thing from its input: every row as a list
//! of strings, header first. This crate defines that contract as
//! [`RowSource`] and provides the sources used in practice:
//!
//! - **In memory**: `Vec<Vec<String>>`
//! - **`csv` readers**: any configured `csv::Reader`
//! - **CSV files**: [`CsvSource`], with size and encoding checks up front
//!
//! # Example
//!
//! ```ignore
//! use tschema_ingest::{CsvSource, RowSource};
//!
//! let mut source = CsvSource::open("data/people.csv")?;
//! let rows = source.read_all()?;
//! let header = &rows[0];
//! ```

mod csv;
mod error;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === Row Sources ===
pub use source::RowSource;

// === CSV Reading ===
pub use crate::csv::{
    CsvSource, MAX_CSV_FILE_SIZE, check_file_size_with_limit, validate_encoding,
};
