//! Constraint checks.
//!
//! Each module checks one kind of constraint. Cell checks take a single
//! value and return a [`CellValidationResult`](crate::CellValidationResult);
//! [`unique`] works on a whole column of row results.

pub mod enumeration;
pub mod kind;
pub mod length;
pub mod pattern;
pub mod range;
pub mod required;
pub mod unique;
