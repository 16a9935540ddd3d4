//! Built-in sample schema printed by `tschema schema` without arguments.

use tschema_model::{NumberField, Schema, StringField};

/// A small schema exercising several constraint kinds.
pub fn sample_schema() -> Schema {
    Schema::new(vec![
        StringField::new("foo")
            .required(true)
            .enumeration(["bar", "baz"])
            .pattern(".+|$")
            .into(),
        StringField::new("bar")
            .min_length(10)
            .required(true)
            .enumeration(["bar", "baz"])
            .into(),
        NumberField::new("baz").min(11).into(),
    ])
}
