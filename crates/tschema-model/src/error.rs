//! Error types for the schema model.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building, reading or writing a schema.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The in-memory schema could not be rendered as JSON.
    #[error("failed to serialize schema: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A schema document was not valid table schema JSON.
    #[error("failed to parse schema: {0}")]
    Parse(#[source] serde_json::Error),

    /// Failed to read a schema file.
    #[error("failed to read schema file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Two fields share a name.
    #[error("field name '{name}' is defined more than once")]
    DuplicateField { name: String },
}

/// Result type for schema model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModelError::DuplicateField {
            name: "foo".to_string(),
        };
        assert_eq!(err.to_string(), "field name 'foo' is defined more than once");
    }
}
