//! File-backed CSV row source.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};
use crate::source::{RowSource, record_to_row};

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

const UTF8_BOM: char = '\u{feff}';

fn open_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

/// Check file size against a limit before loading.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

/// A CSV file read as raw string rows, header first.
///
/// Records are read without a header/data split and without width checks,
/// so ragged rows reach the validator intact.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    delimiter: u8,
    max_size: u64,
}

impl CsvSource {
    /// Opens a comma-delimited CSV file.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self {
            path: path.into(),
            delimiter: b',',
            max_size: MAX_CSV_FILE_SIZE,
        }
        .checked()
    }

    /// Uses a different field delimiter, e.g. `b';'` or `b'\t'`.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Re-checks the file against a custom size limit.
    pub fn with_max_size(mut self, max_size: u64) -> Result<Self> {
        self.max_size = max_size;
        self.checked()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn checked(self) -> Result<Self> {
        check_file_size_with_limit(&self.path, self.max_size)?;
        validate_encoding(&self.path)?;
        Ok(self)
    }
}

impl RowSource for CsvSource {
    type Error = IngestError;

    fn read_all(&mut self) -> Result<Vec<Vec<String>>> {
        let file = File::open(&self.path).map_err(|e| open_error(&self.path, e))?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_reader(file);

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|source| IngestError::Csv {
                path: self.path.clone(),
                source,
            })?;
            rows.push(record_to_row(&record));
        }

        if let Some(first) = rows.first_mut().and_then(|header| header.first_mut()) {
            if let Some(stripped) = first.strip_prefix(UTF8_BOM) {
                *first = stripped.to_string();
            }
        }

        tracing::debug!(
            path = %self.path.display(),
            rows = rows.len(),
            "read CSV rows"
        );
        Ok(rows)
    }
}
