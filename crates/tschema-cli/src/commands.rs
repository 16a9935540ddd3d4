//! Command implementations, independent of argument parsing.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use tschema_ingest::CsvSource;
use tschema_model::Schema;
use tschema_validate::{RowValidationResult, ValidationOptions, ValidationSummary, validate_with};

use crate::sample::sample_schema;

/// Inputs for a validation run.
#[derive(Debug, Clone)]
pub struct ValidateRequest {
    pub schema_path: PathBuf,
    pub data_path: PathBuf,
    pub delimiter: u8,
    pub options: ValidationOptions,
}

/// Outcome of a validation run.
#[derive(Debug, Clone, Serialize)]
pub struct ValidateOutcome {
    pub summary: ValidationSummary,
    pub rows: Vec<RowValidationResult>,
}

impl ValidateOutcome {
    /// Row results paired with their 0-based data row index.
    pub fn indexed_rows(&self, only_invalid: bool) -> Vec<(usize, &RowValidationResult)> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| !only_invalid || !row.is_valid)
            .collect()
    }
}

/// Load a schema file and reject duplicate field names.
pub fn load_schema(path: &Path) -> Result<Schema> {
    let schema = Schema::from_path(path)
        .with_context(|| format!("load schema {}", path.display()))?;
    schema
        .check_field_names()
        .with_context(|| format!("check schema {}", path.display()))?;
    Ok(schema)
}

pub fn run_validate(request: &ValidateRequest) -> Result<ValidateOutcome> {
    let span = info_span!(
        "validate",
        data = %request.data_path.display(),
        schema = %request.schema_path.display()
    );
    let _guard = span.enter();
    let start = Instant::now();

    let schema = load_schema(&request.schema_path)?;
    let mut source = CsvSource::open(&request.data_path)
        .with_context(|| format!("open {}", request.data_path.display()))?
        .with_delimiter(request.delimiter);
    let rows = validate_with(&schema, &mut source, &request.options)
        .with_context(|| format!("validate {}", request.data_path.display()))?;

    let summary = ValidationSummary::from_results(&rows);
    info!(
        fields = schema.fields().len(),
        rows = summary.total_rows,
        invalid = summary.invalid_rows,
        duration_ms = start.elapsed().as_millis(),
        "run complete"
    );
    Ok(ValidateOutcome { summary, rows })
}

/// Canonical JSON for the schema at `path`, or for the built-in sample.
pub fn run_schema(path: Option<&Path>) -> Result<String> {
    let schema = match path {
        Some(path) => load_schema(path)?,
        None => sample_schema(),
    };
    schema.to_json_pretty().context("serialize schema")
}
