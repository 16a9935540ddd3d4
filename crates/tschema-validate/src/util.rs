//! Small formatting helpers.

use std::fmt::Display;

/// Joins items with `", "`, e.g. `[1, 2, 3]` becomes `"1, 2, 3"`.
pub fn comma_separated<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
