//! Pattern constraint check.

use regex::Regex;

use crate::error::{Result, ValidateError};
use crate::result::{CellValidationResult, ConstraintName};

/// Compile a field's pattern so that it must match the whole cell.
pub fn compile(field: &str, pattern: &str) -> Result<Regex> {
    Regex::new(&format!("^(?:{pattern})$")).map_err(|source| ValidateError::InvalidPattern {
        field: field.to_string(),
        pattern: pattern.to_string(),
        source,
    })
}

/// Check a non-empty cell against a compiled pattern. `pattern` is the
/// pattern as declared, used in the failure reason.
pub fn check(regex: &Regex, pattern: &str, header: &str, value: &str) -> CellValidationResult {
    if value.is_empty() || regex.is_match(value) {
        return CellValidationResult::pass(ConstraintName::Pattern);
    }
    CellValidationResult::fail(
        ConstraintName::Pattern,
        header,
        value,
        format!("{header} was marked as matching the pattern {pattern}, but its value {value} does not match"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_must_match_whole_value() {
        let regex = compile("code", "[A-Z]{2}").unwrap();
        assert!(check(&regex, "[A-Z]{2}", "code", "AB").is_valid);
        let failure = check(&regex, "[A-Z]{2}", "code", "ABC");
        assert_eq!(
            failure.reason,
            "code was marked as matching the pattern [A-Z]{2}, but its value ABC does not match"
        );
    }

    #[test]
    fn alternation_is_anchored_as_a_group() {
        let regex = compile("code", "a|b").unwrap();
        assert!(check(&regex, "a|b", "code", "b").is_valid);
        assert!(!check(&regex, "a|b", "code", "ab").is_valid);
    }

    #[test]
    fn empty_value_is_left_to_required() {
        let regex = compile("code", ".+").unwrap();
        assert!(check(&regex, ".+", "code", "").is_valid);
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let err = compile("code", "(unclosed").unwrap_err();
        assert!(matches!(err, ValidateError::InvalidPattern { ref field, .. } if field == "code"));
    }
}
