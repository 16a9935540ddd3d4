//! Property tests for the number and required checks.

use proptest::prelude::*;
use tschema_model::RequiredConstraint;
use tschema_validate::checks::{kind, required};

proptest! {
    #[test]
    fn special_tokens_pass_with_any_padding(
        token in prop::sample::select(vec!["NaN", "INF", "-INF"]),
        left in "[ \t]{0,3}",
        right in "[ \t]{0,3}",
    ) {
        let value = format!("{left}{token}{right}");
        prop_assert!(kind::check_number("n", &value).is_valid);
    }

    #[test]
    fn formatted_integers_pass(n in any::<i64>()) {
        prop_assert!(kind::check_number("n", &n.to_string()).is_valid);
    }

    #[test]
    fn signed_decimals_with_exponent_pass(
        sign in "[+-]?",
        whole in "[0-9]{1,6}",
        fraction in "[0-9]{0,4}",
        exponent in prop::option::of("[+-]?[0-9]{1,3}"),
    ) {
        let exponent = exponent.map(|e| format!("E{e}")).unwrap_or_default();
        let value = format!("{sign}{whole}.{fraction}{exponent}");
        prop_assert!(kind::check_number("n", &value).is_valid);
    }

    #[test]
    fn letters_never_pass(value in "[a-zA-Z]{1,8}") {
        prop_assume!(!["NaN", "INF"].contains(&value.as_str()));
        let result = kind::check_number("n", &value);
        prop_assert!(!result.is_valid);
        prop_assert_eq!(
            result.reason,
            format!("n was marked as a number, but its value {value} could not be parsed as a number")
        );
    }

    #[test]
    fn required_only_fails_empty(value in ".{0,12}") {
        let result = required::check(&RequiredConstraint::set(true), "r", &value);
        prop_assert_eq!(result.is_valid, !value.is_empty());
        prop_assert!(required::check(&RequiredConstraint::unset(), "r", &value).is_valid);
    }
}
