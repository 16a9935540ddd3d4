//! Table schema validation.
//!
//! Validates rows of string cells against a [`Schema`](tschema_model::Schema)
//! in two passes:
//!
//! 1. **Row pass**: for every data row and every field, the kind check and
//!    the cell constraints run against that row's cell. Only failures are
//!    kept.
//! 2. **Column pass**: for every field with `unique` enabled, rows sharing a
//!    value in that column get a failure naming each other.
//!
//! Every data row comes back, valid or not, so callers can report all faults
//! at once. Only structural problems (unreadable source, missing header,
//! ragged rows, uncompilable patterns) stop a run.
//!
//! # Example
//!
//! ```
//! use tschema_model::{Schema, StringField};
//! use tschema_validate::validate;
//!
//! let schema = Schema::new(vec![StringField::new("name").required(true).into()]);
//! let mut rows = vec![
//!     vec!["name".to_string()],
//!     vec!["Ada".to_string()],
//!     vec![String::new()],
//! ];
//! let results = validate(&schema, &mut rows).unwrap();
//! assert!(results[0].is_valid);
//! assert!(!results[1].is_valid);
//! ```

pub mod checks;
mod engine;
mod error;
mod options;
mod result;
mod util;

pub use engine::{validate, validate_rows, validate_with};
pub use error::{Result, ValidateError};
pub use options::{ConstraintCoverage, ValidationOptions};
pub use result::{CellValidationResult, ConstraintName, RowValidationResult, ValidationSummary};
pub use util::comma_separated;
