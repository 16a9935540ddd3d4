//! Enum constraint check.

use crate::result::{CellValidationResult, ConstraintName};
use crate::util::comma_separated;

/// Check that a non-empty cell is one of the allowed values.
pub fn check(allowed: &[String], header: &str, value: &str) -> CellValidationResult {
    if value.is_empty() || allowed.iter().any(|candidate| candidate == value) {
        return CellValidationResult::pass(ConstraintName::Enum);
    }
    CellValidationResult::fail(
        ConstraintName::Enum,
        header,
        value,
        format!(
            "{header} was marked as one of [{}], but its value {value} is not one of them",
            comma_separated(allowed)
        ),
    )
}
