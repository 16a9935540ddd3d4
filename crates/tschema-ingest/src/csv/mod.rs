//! CSV reading utilities.

mod reader;

pub use reader::{
    CsvSource, MAX_CSV_FILE_SIZE, check_file_size_with_limit, validate_encoding,
};
