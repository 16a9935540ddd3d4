//! Typed field definitions.
//!
//! Each column of the source data is described by one [`Field`]. The field
//! kind is the enum variant itself, so a field can never carry a constraint
//! set belonging to a different kind, and the serialized `"type"` tag is
//! always derived from the variant.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constraint::{
    BooleanConstraints, Constraint, ListConstraints, NumberConstraints, StringConstraints,
};

/// Data kind of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    String,
    Number,
    Boolean,
    List,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::List => "list",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attributes shared by every field kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldBase {
    /// Column name, matched against the header row.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl FieldBase {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Builder methods every field type shares: the descriptive attributes and
/// the `required` constraint.
macro_rules! common_methods {
    () => {
        pub fn title(mut self, title: impl Into<String>) -> Self {
            self.base.title = Some(title.into());
            self
        }

        pub fn description(mut self, description: impl Into<String>) -> Self {
            self.base.description = Some(description.into());
            self
        }

        pub fn example(mut self, example: impl Into<String>) -> Self {
            self.base.example = Some(example.into());
            self
        }

        pub fn required(mut self, required: bool) -> Self {
            self.constraints.required = Constraint::set(required);
            self
        }
    };
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringField {
    #[serde(flatten)]
    pub base: FieldBase,
    #[serde(default)]
    pub constraints: StringConstraints,
}

impl StringField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: FieldBase::new(name),
            constraints: StringConstraints::default(),
        }
    }

    common_methods!();

    pub fn unique(mut self, unique: bool) -> Self {
        self.constraints.unique = Constraint::set(unique);
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.constraints.pattern = Constraint::set(pattern.into());
        self
    }

    pub fn enumeration<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constraints.enumeration = Constraint::set(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn min_length(mut self, min_length: u64) -> Self {
        self.constraints.min_length = Constraint::set(min_length);
        self
    }

    pub fn max_length(mut self, max_length: u64) -> Self {
        self.constraints.max_length = Constraint::set(max_length);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberField {
    #[serde(flatten)]
    pub base: FieldBase,
    #[serde(default)]
    pub constraints: NumberConstraints,
}

impl NumberField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: FieldBase::new(name),
            constraints: NumberConstraints::default(),
        }
    }

    common_methods!();

    pub fn unique(mut self, unique: bool) -> Self {
        self.constraints.unique = Constraint::set(unique);
        self
    }

    pub fn min(mut self, min: i64) -> Self {
        self.constraints.min = Constraint::set(min);
        self
    }

    pub fn max(mut self, max: i64) -> Self {
        self.constraints.max = Constraint::set(max);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BooleanField {
    #[serde(flatten)]
    pub base: FieldBase,
    #[serde(default)]
    pub constraints: BooleanConstraints,
}

impl BooleanField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: FieldBase::new(name),
            constraints: BooleanConstraints::default(),
        }
    }

    common_methods!();

    pub fn enumeration<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constraints.enumeration = Constraint::set(values.into_iter().map(Into::into).collect());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListField {
    #[serde(flatten)]
    pub base: FieldBase,
    #[serde(default)]
    pub constraints: ListConstraints,
}

impl ListField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: FieldBase::new(name),
            constraints: ListConstraints::default(),
        }
    }

    common_methods!();

    pub fn min_length(mut self, min_length: u64) -> Self {
        self.constraints.min_length = Constraint::set(min_length);
        self
    }

    pub fn max_length(mut self, max_length: u64) -> Self {
        self.constraints.max_length = Constraint::set(max_length);
        self
    }
}

/// One column definition of a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Field {
    String(StringField),
    Number(NumberField),
    Boolean(BooleanField),
    List(ListField),
}

impl Field {
    pub fn kind(&self) -> FieldKind {
        match self {
            Field::String(_) => FieldKind::String,
            Field::Number(_) => FieldKind::Number,
            Field::Boolean(_) => FieldKind::Boolean,
            Field::List(_) => FieldKind::List,
        }
    }

    pub fn base(&self) -> &FieldBase {
        match self {
            Field::String(field) => &field.base,
            Field::Number(field) => &field.base,
            Field::Boolean(field) => &field.base,
            Field::List(field) => &field.base,
        }
    }

    pub fn name(&self) -> &str {
        &self.base().name
    }

    /// The field's `required` constraint; every kind carries one.
    pub fn required(&self) -> &Constraint<bool> {
        match self {
            Field::String(field) => &field.constraints.required,
            Field::Number(field) => &field.constraints.required,
            Field::Boolean(field) => &field.constraints.required,
            Field::List(field) => &field.constraints.required,
        }
    }

    /// The field's `unique` constraint, for kinds that support one.
    pub fn unique(&self) -> Option<&Constraint<bool>> {
        match self {
            Field::String(field) => Some(&field.constraints.unique),
            Field::Number(field) => Some(&field.constraints.unique),
            Field::Boolean(_) | Field::List(_) => None,
        }
    }
}

impl From<StringField> for Field {
    fn from(field: StringField) -> Self {
        Field::String(field)
    }
}

impl From<NumberField> for Field {
    fn from(field: NumberField) -> Self {
        Field::Number(field)
    }
}

impl From<BooleanField> for Field {
    fn from(field: BooleanField) -> Self {
        Field::Boolean(field)
    }
}

impl From<ListField> for Field {
    fn from(field: ListField) -> Self {
        Field::List(field)
    }
}
