//! Two-pass validation engine.
//!
//! Pass 1 walks the rows and runs every cell check for every field, producing
//! one [`RowValidationResult`] per data row. Pass 2 takes ownership of those
//! results, adds uniqueness failures column by column, and hands them back.

use std::collections::BTreeMap;

use regex::Regex;
use tracing::{debug, info, trace, warn};
use tschema_ingest::RowSource;
use tschema_model::{BooleanField, Field, ListField, NumberField, Schema, StringField};

use crate::checks::length::Measure;
use crate::checks::{enumeration, kind, length, pattern, range, required, unique};
use crate::error::{Result, ValidateError};
use crate::options::ValidationOptions;
use crate::result::{RowValidationResult, ValidationSummary};

/// Validate all rows of `source` against `schema` with default options.
pub fn validate<S>(schema: &Schema, source: &mut S) -> Result<Vec<RowValidationResult>>
where
    S: RowSource + ?Sized,
{
    validate_with(schema, source, &ValidationOptions::default())
}

/// Validate all rows of `source` against `schema`.
///
/// Fails only for structural problems: the source cannot be read, there is
/// no header, a row's width differs from the header, or a pattern does not
/// compile. Constraint violations are recorded in the returned rows, which
/// keep the source order.
pub fn validate_with<S>(
    schema: &Schema,
    source: &mut S,
    options: &ValidationOptions,
) -> Result<Vec<RowValidationResult>>
where
    S: RowSource + ?Sized,
{
    let rows = source.read_all().map_err(ValidateError::from_source)?;
    validate_rows(schema, rows, options)
}

/// Validate rows that are already in memory. Row 0 is the header.
pub fn validate_rows(
    schema: &Schema,
    rows: Vec<Vec<String>>,
    options: &ValidationOptions,
) -> Result<Vec<RowValidationResult>> {
    let mut rows = rows.into_iter();
    let header = rows.next().ok_or(ValidateError::MissingHeader)?;

    let patterns = compile_patterns(schema, options)?;
    warn_missing_columns(schema, &header);

    let results = row_pass(schema, &patterns, &header, rows, options)?;
    let results = column_pass(schema, results);

    let summary = ValidationSummary::from_results(&results);
    info!(
        rows = summary.total_rows,
        valid = summary.valid_rows,
        invalid = summary.invalid_rows,
        failures = summary.failure_count(),
        "validation complete"
    );
    Ok(results)
}

/// Compiled pattern per field index, only for fields that will be checked.
type Patterns = BTreeMap<usize, Regex>;

fn compile_patterns(schema: &Schema, options: &ValidationOptions) -> Result<Patterns> {
    let mut patterns = Patterns::new();
    if !options.is_full() {
        return Ok(patterns);
    }
    for (index, field) in schema.fields().iter().enumerate() {
        if let Field::String(string) = field {
            if let Some(declared) = string.constraints.pattern.value() {
                patterns.insert(index, pattern::compile(field.name(), declared)?);
            }
        }
    }
    Ok(patterns)
}

fn warn_missing_columns(schema: &Schema, header: &[String]) {
    for field in schema.fields() {
        if !header.iter().any(|column| column == field.name()) {
            warn!(
                field = field.name(),
                kind = %field.kind(),
                "field not present in header; its cells read as empty"
            );
        }
    }
}

fn map_cells_to_headers(header: &[String], cells: &[String]) -> BTreeMap<String, String> {
    header
        .iter()
        .zip(cells)
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

fn row_pass(
    schema: &Schema,
    patterns: &Patterns,
    header: &[String],
    rows: impl Iterator<Item = Vec<String>>,
    options: &ValidationOptions,
) -> Result<Vec<RowValidationResult>> {
    let mut results = Vec::new();
    for (index, cells) in rows.enumerate() {
        if cells.len() != header.len() {
            return Err(ValidateError::RowWidth {
                row: index,
                expected: header.len(),
                found: cells.len(),
            });
        }
        let parsed = map_cells_to_headers(header, &cells);
        let mut result = RowValidationResult::new(cells, parsed);

        for (field_index, field) in schema.fields().iter().enumerate() {
            match field {
                Field::String(string) => {
                    check_string_field(string, patterns.get(&field_index), &mut result, options);
                }
                Field::Number(number) => check_number_field(number, &mut result, options),
                Field::Boolean(boolean) if options.is_full() => {
                    check_boolean_field(boolean, &mut result);
                }
                Field::List(list) if options.is_full() => {
                    check_list_field(list, &mut result, options);
                }
                Field::Boolean(_) | Field::List(_) => {}
            }
        }

        if !result.is_valid {
            trace!(row = index, failures = result.failures.len(), "row failed");
        }
        results.push(result);
    }
    debug!(rows = results.len(), "row pass complete");
    Ok(results)
}

fn check_string_field(
    field: &StringField,
    regex: Option<&Regex>,
    row: &mut RowValidationResult,
    options: &ValidationOptions,
) {
    let name = field.base.name.as_str();
    let value = row.value(name).to_string();
    let constraints = &field.constraints;

    row.record(kind::check_string());
    row.record(required::check(&constraints.required, name, &value));
    if !options.is_full() {
        return;
    }
    if let (Some(regex), Some(declared)) = (regex, constraints.pattern.value()) {
        row.record(pattern::check(regex, declared, name, &value));
    }
    if let Some(allowed) = constraints.enumeration.value() {
        row.record(enumeration::check(allowed, name, &value));
    }
    if let Some(&min_length) = constraints.min_length.value() {
        row.record(length::check_min(min_length, Measure::Characters, name, &value));
    }
    if let Some(&max_length) = constraints.max_length.value() {
        row.record(length::check_max(max_length, Measure::Characters, name, &value));
    }
}

fn check_number_field(
    field: &NumberField,
    row: &mut RowValidationResult,
    options: &ValidationOptions,
) {
    let name = field.base.name.as_str();
    let value = row.value(name).to_string();
    let constraints = &field.constraints;

    row.record(kind::check_number(name, &value));
    row.record(required::check(&constraints.required, name, &value));
    if !options.is_full() {
        return;
    }
    if let Some(&min) = constraints.min.value() {
        row.record(range::check_min(min, name, &value));
    }
    if let Some(&max) = constraints.max.value() {
        row.record(range::check_max(max, name, &value));
    }
}

fn check_boolean_field(field: &BooleanField, row: &mut RowValidationResult) {
    let name = field.base.name.as_str();
    let value = row.value(name).to_string();
    let constraints = &field.constraints;

    row.record(kind::check_boolean(name, &value));
    row.record(required::check(&constraints.required, name, &value));
    if let Some(allowed) = constraints.enumeration.value() {
        row.record(enumeration::check(allowed, name, &value));
    }
}

fn check_list_field(field: &ListField, row: &mut RowValidationResult, options: &ValidationOptions) {
    let name = field.base.name.as_str();
    let value = row.value(name).to_string();
    let constraints = &field.constraints;
    let measure = Measure::Items(options.list_delimiter);

    row.record(kind::check_list());
    row.record(required::check(&constraints.required, name, &value));
    if let Some(&min_length) = constraints.min_length.value() {
        row.record(length::check_min(min_length, measure, name, &value));
    }
    if let Some(&max_length) = constraints.max_length.value() {
        row.record(length::check_max(max_length, measure, name, &value));
    }
}

fn column_pass(schema: &Schema, mut results: Vec<RowValidationResult>) -> Vec<RowValidationResult> {
    let mut columns = 0usize;
    for field in schema.fields() {
        let Some(constraint) = field.unique() else {
            continue;
        };
        if constraint.is_enabled() {
            unique::check(constraint, field.name(), &mut results);
            columns += 1;
        }
    }
    debug!(columns, "column pass complete");
    results
}
