//! Data kind checks: can a cell be read as the field's declared kind?

use std::sync::LazyLock;

use regex::Regex;

use crate::result::{CellValidationResult, ConstraintName};

/// Decimal number with optional sign, fraction and `E` exponent.
/// Digits are ASCII only.
static NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?[0-9]+\.?[0-9]*(E[+-]?[0-9]+)?$").expect("Invalid number regex")
});

/// Tokens accepted as numbers after trimming surrounding whitespace.
const SPECIAL_NUMBERS: &[&str] = &["NaN", "INF", "-INF"];

const TRUE_VALUES: &[&str] = &["true", "True", "TRUE", "1"];
const FALSE_VALUES: &[&str] = &["false", "False", "FALSE", "0"];

/// Source cells are already text, so every cell is a valid string.
pub fn check_string() -> CellValidationResult {
    CellValidationResult::pass(ConstraintName::String)
}

/// Check that a cell can be read as a table schema number.
pub fn check_number(header: &str, value: &str) -> CellValidationResult {
    if is_number(value) {
        return CellValidationResult::pass(ConstraintName::Number);
    }
    CellValidationResult::fail(
        ConstraintName::Number,
        header,
        value,
        format!("{header} was marked as a number, but its value {value} could not be parsed as a number"),
    )
}

/// Check that a cell is one of the recognised boolean tokens.
pub fn check_boolean(header: &str, value: &str) -> CellValidationResult {
    if parse_boolean(value).is_some() {
        return CellValidationResult::pass(ConstraintName::Boolean);
    }
    CellValidationResult::fail(
        ConstraintName::Boolean,
        header,
        value,
        format!("{header} was marked as a boolean, but its value {value} could not be parsed as a boolean"),
    )
}

/// Any text splits into a list, so every cell is a valid list.
pub fn check_list() -> CellValidationResult {
    CellValidationResult::pass(ConstraintName::List)
}

fn is_number(value: &str) -> bool {
    SPECIAL_NUMBERS.contains(&value.trim()) || NUMBER_REGEX.is_match(value)
}

/// Numeric value of a cell that passes [`check_number`].
pub fn parse_number(value: &str) -> Option<f64> {
    match value.trim() {
        "NaN" => return Some(f64::NAN),
        "INF" => return Some(f64::INFINITY),
        "-INF" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    if !NUMBER_REGEX.is_match(value) {
        return None;
    }
    value.parse::<f64>().ok()
}

/// Exact value of a plain integer cell (optional sign, digits only).
///
/// Cells with a fraction, an exponent or a special token return `None`, as
/// do integers beyond the `i128` range.
pub fn parse_integer(value: &str) -> Option<i128> {
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

pub fn parse_boolean(value: &str) -> Option<bool> {
    if TRUE_VALUES.contains(&value) {
        Some(true)
    } else if FALSE_VALUES.contains(&value) {
        Some(false)
    } else {
        None
    }
}
