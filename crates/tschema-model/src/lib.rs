//! Table schema model.
//!
//! This crate describes the expected shape of tabular data:
//!
//! - **Constraints**: tri-state rules ([`Constraint`]) that are either unset
//!   or set to a value, grouped into one constraint set per field kind
//! - **Fields**: a [`Field`] sum type over string, number, boolean and list
//!   columns, each with a name and its kind's constraint set
//! - **Schema**: ordered fields plus the table schema profile identifier,
//!   with canonical JSON output that omits every unset constraint
//!
//! # Example
//!
//! ```
//! use tschema_model::{Schema, StringField, NumberField};
//!
//! let schema = Schema::new(vec![
//!     StringField::new("id").required(true).unique(true).into(),
//!     NumberField::new("score").min(0).into(),
//! ]);
//! let json = schema.to_json().unwrap();
//! assert!(json.contains(r#""constraints":{"required":true,"unique":true}"#));
//! ```

mod constraint;
mod error;
mod field;
mod schema;

// === Error Types ===
pub use error::{ModelError, Result};

// === Constraints ===
pub use constraint::{
    BooleanConstraints, Constraint, EnumConstraint, ListConstraints, MaxConstraint,
    MaxLengthConstraint, MinConstraint, MinLengthConstraint, NumberConstraints, PatternConstraint,
    RequiredConstraint, StringConstraints, UniqueConstraint,
};

// === Fields ===
pub use field::{BooleanField, Field, FieldBase, FieldKind, ListField, NumberField, StringField};

// === Schema ===
pub use schema::{Schema, TABLE_SCHEMA_PROFILE};
