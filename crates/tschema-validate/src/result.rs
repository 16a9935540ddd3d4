//! Verdict types produced by the checks and the engine.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Name of the check that produced a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ConstraintName {
    // Kind checks
    String,
    Number,
    Boolean,
    List,

    // Declared constraints
    Required,
    Unique,
    Pattern,
    Enum,
    MinLength,
    MaxLength,
    Min,
    Max,
}

impl ConstraintName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::List => "list",
            Self::Required => "required",
            Self::Unique => "unique",
            Self::Pattern => "pattern",
            Self::Enum => "enum",
            Self::MinLength => "minLength",
            Self::MaxLength => "maxLength",
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}

impl fmt::Display for ConstraintName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict of one check against one cell.
///
/// For a pass only `constraint` and `is_valid` are meaningful; `header`,
/// `value` and `reason` are left empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellValidationResult {
    pub constraint: ConstraintName,
    pub header: String,
    pub value: String,
    pub reason: String,
    pub is_valid: bool,
}

impl CellValidationResult {
    pub fn pass(constraint: ConstraintName) -> Self {
        Self {
            constraint,
            header: String::new(),
            value: String::new(),
            reason: String::new(),
            is_valid: true,
        }
    }

    pub fn fail(
        constraint: ConstraintName,
        header: &str,
        value: &str,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            constraint,
            header: header.to_string(),
            value: value.to_string(),
            reason: reason.into(),
            is_valid: false,
        }
    }
}

/// Verdict on one data row.
///
/// Only failures are kept. `is_valid` is false iff `failures` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowValidationResult {
    /// The raw cells as read from the source.
    pub original: Vec<String>,
    /// Header name to cell value.
    pub parsed: BTreeMap<String, String>,
    pub is_valid: bool,
    pub failures: Vec<CellValidationResult>,
}

impl RowValidationResult {
    pub fn new(original: Vec<String>, parsed: BTreeMap<String, String>) -> Self {
        Self {
            original,
            parsed,
            is_valid: true,
            failures: Vec::new(),
        }
    }

    /// Cell value under `header`; a column missing from the source reads as
    /// the empty string.
    pub fn value(&self, header: &str) -> &str {
        self.parsed.get(header).map_or("", String::as_str)
    }

    /// Keeps `result` if it is a failure and marks the row invalid.
    pub fn record(&mut self, result: CellValidationResult) {
        if !result.is_valid {
            self.is_valid = false;
            self.failures.push(result);
        }
    }
}

/// Aggregate counts over a set of row results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationSummary {
    pub total_rows: usize,
    pub valid_rows: usize,
    pub invalid_rows: usize,
    pub failures_by_constraint: BTreeMap<ConstraintName, usize>,
}

impl ValidationSummary {
    pub fn from_results(results: &[RowValidationResult]) -> Self {
        let mut summary = Self {
            total_rows: results.len(),
            ..Self::default()
        };
        for row in results {
            if row.is_valid {
                summary.valid_rows += 1;
            } else {
                summary.invalid_rows += 1;
            }
            for failure in &row.failures {
                *summary
                    .failures_by_constraint
                    .entry(failure.constraint)
                    .or_insert(0) += 1;
            }
        }
        summary
    }

    pub fn failure_count(&self) -> usize {
        self.failures_by_constraint.values().sum()
    }

    pub fn is_valid(&self) -> bool {
        self.invalid_rows == 0
    }
}
