//! Error types for validation runs.
//!
//! These are structural failures that stop a run. A cell that breaks a
//! constraint is not an error; it is recorded in the row results.

use thiserror::Error;

/// Errors that abort validation.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// The row source could not produce rows. The source's own error is
    /// surfaced unchanged and can be recovered with `downcast_ref`.
    #[error(transparent)]
    Source(Box<dyn std::error::Error + Send + Sync + 'static>),

    /// The source produced no rows at all, so there is no header.
    #[error("source data has no header row")]
    MissingHeader,

    /// A data row does not have one cell per header column.
    #[error("row {row} has {found} cells but the header has {expected} columns")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A field's pattern constraint is not a valid regular expression.
    #[error("invalid pattern '{pattern}' on field {field}: {source}")]
    InvalidPattern {
        field: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl ValidateError {
    pub(crate) fn from_source<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Source(Box::new(err))
    }
}

/// Result type for validation runs.
pub type Result<T> = std::result::Result<T, ValidateError>;
