//! Minimum and maximum length checks.
//!
//! Strings are measured in characters, lists in items.

use crate::result::{CellValidationResult, ConstraintName};

/// Length of a cell as the field kind defines it.
#[derive(Debug, Clone, Copy)]
pub enum Measure {
    Characters,
    Items(char),
}

impl Measure {
    fn length(self, value: &str) -> u64 {
        let count = match self {
            Measure::Characters => value.chars().count(),
            Measure::Items(delimiter) => value.split(delimiter).count(),
        };
        count as u64
    }
}

pub fn check_min(
    min_length: u64,
    measure: Measure,
    header: &str,
    value: &str,
) -> CellValidationResult {
    let length = measure.length(value);
    if value.is_empty() || length >= min_length {
        return CellValidationResult::pass(ConstraintName::MinLength);
    }
    CellValidationResult::fail(
        ConstraintName::MinLength,
        header,
        value,
        format!("{header} was marked as having a minimum length of {min_length}, but its value {value} has length {length}"),
    )
}

pub fn check_max(
    max_length: u64,
    measure: Measure,
    header: &str,
    value: &str,
) -> CellValidationResult {
    let length = measure.length(value);
    if value.is_empty() || length <= max_length {
        return CellValidationResult::pass(ConstraintName::MaxLength);
    }
    CellValidationResult::fail(
        ConstraintName::MaxLength,
        header,
        value,
        format!("{header} was marked as having a maximum length of {max_length}, but its value {value} has length {length}"),
    )
}
