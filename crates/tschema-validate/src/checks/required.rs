//! Required constraint check.

use tschema_model::RequiredConstraint;

use crate::result::{CellValidationResult, ConstraintName};

/// Check that a required cell is not empty.
///
/// Only a constraint that is both selected and `true` can fail; an unset or
/// explicitly `false` constraint passes any value.
pub fn check(required: &RequiredConstraint, header: &str, value: &str) -> CellValidationResult {
    if !required.is_enabled() || !value.is_empty() {
        return CellValidationResult::pass(ConstraintName::Required);
    }
    CellValidationResult::fail(
        ConstraintName::Required,
        header,
        value,
        format!("{header} was marked as required, but not provided"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unselected_constraint_passes_everything() {
        let unselected = RequiredConstraint::unset();
        let pass = CellValidationResult::pass(ConstraintName::Required);
        assert_eq!(check(&unselected, "example", ""), pass);
        assert_eq!(check(&unselected, "example", "hi there"), pass);
    }

    #[test]
    fn explicit_false_passes_empty_value() {
        let optional = RequiredConstraint::set(false);
        assert!(check(&optional, "example", "").is_valid);
    }

    #[test]
    fn selected_constraint_fails_only_empty_value() {
        let selected = RequiredConstraint::set(true);
        assert_eq!(
            check(&selected, "example", ""),
            CellValidationResult::fail(
                ConstraintName::Required,
                "example",
                "",
                "example was marked as required, but not provided",
            )
        );
        assert_eq!(
            check(&selected, "example", "hi there"),
            CellValidationResult::pass(ConstraintName::Required)
        );
    }

    #[test]
    fn whitespace_counts_as_provided() {
        assert!(check(&RequiredConstraint::set(true), "example", " ").is_valid);
    }
}
