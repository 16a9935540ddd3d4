//! Minimum and maximum value checks for number fields.

use std::cmp::Ordering;

use crate::checks::kind::{parse_integer, parse_number};
use crate::result::{CellValidationResult, ConstraintName};

/// Order of a number cell relative to `bound`, or `None` for NaN.
///
/// Plain integer cells are compared exactly; everything else is compared
/// as `f64`.
fn compare(number: f64, value: &str, bound: i64) -> Option<Ordering> {
    match parse_integer(value) {
        Some(integer) => Some(integer.cmp(&i128::from(bound))),
        None => number.partial_cmp(&(bound as f64)),
    }
}

/// Check that a number cell is at least `min`. Empty cells and cells that
/// are not numbers pass here; they are reported by other checks.
pub fn check_min(min: i64, header: &str, value: &str) -> CellValidationResult {
    let Some(number) = parse_number(value) else {
        return CellValidationResult::pass(ConstraintName::Min);
    };
    match compare(number, value, min) {
        Some(Ordering::Equal | Ordering::Greater) => CellValidationResult::pass(ConstraintName::Min),
        _ => CellValidationResult::fail(
            ConstraintName::Min,
            header,
            value,
            format!("{header} was marked as having a minimum of {min}, but its value {value} is less than that"),
        ),
    }
}

/// Check that a number cell is at most `max`.
pub fn check_max(max: i64, header: &str, value: &str) -> CellValidationResult {
    let Some(number) = parse_number(value) else {
        return CellValidationResult::pass(ConstraintName::Max);
    };
    match compare(number, value, max) {
        Some(Ordering::Equal | Ordering::Less) => CellValidationResult::pass(ConstraintName::Max),
        _ => CellValidationResult::fail(
            ConstraintName::Max,
            header,
            value,
            format!("{header} was marked as having a maximum of {max}, but its value {value} is greater than that"),
        ),
    }
}
