//! Tri-state constraint values and the per-kind constraint sets.
//!
//! A [`Constraint`] is either unset or set to a value. Unset constraints are
//! never read by the validator and never appear in the serialized schema,
//! which is how "not specified" stays distinct from an explicit zero value
//! such as `required: false` or `minLength: 0`.

use serde::{Deserialize, Serialize};

/// A single optional validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Constraint<T>(Option<T>);

impl<T> Constraint<T> {
    /// A constraint the schema author did not select.
    pub const fn unset() -> Self {
        Self(None)
    }

    /// A selected constraint carrying `value`, even if it is a zero value.
    pub const fn set(value: T) -> Self {
        Self(Some(value))
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    pub fn is_unset(&self) -> bool {
        self.0.is_none()
    }

    /// The selected value, or `None` when unset.
    pub fn value(&self) -> Option<&T> {
        self.0.as_ref()
    }

    pub fn into_inner(self) -> Option<T> {
        self.0
    }
}

impl Constraint<bool> {
    /// True only for a constraint that is both selected and `true`.
    pub fn is_enabled(&self) -> bool {
        matches!(self.0, Some(true))
    }
}

impl<T> Default for Constraint<T> {
    fn default() -> Self {
        Self::unset()
    }
}

impl<T> From<T> for Constraint<T> {
    fn from(value: T) -> Self {
        Self::set(value)
    }
}

impl<T> From<Option<T>> for Constraint<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

pub type RequiredConstraint = Constraint<bool>;
pub type UniqueConstraint = Constraint<bool>;
/// Regular expression a value must fully match.
pub type PatternConstraint = Constraint<String>;
pub type EnumConstraint = Constraint<Vec<String>>;
pub type MinLengthConstraint = Constraint<u64>;
pub type MaxLengthConstraint = Constraint<u64>;
pub type MinConstraint = Constraint<i64>;
pub type MaxConstraint = Constraint<i64>;

/// Constraints accepted by `string` fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StringConstraints {
    #[serde(default, skip_serializing_if = "Constraint::is_unset")]
    pub required: RequiredConstraint,
    #[serde(default, skip_serializing_if = "Constraint::is_unset")]
    pub unique: UniqueConstraint,
    #[serde(default, skip_serializing_if = "Constraint::is_unset")]
    pub pattern: PatternConstraint,
    #[serde(rename = "enum", default, skip_serializing_if = "Constraint::is_unset")]
    pub enumeration: EnumConstraint,
    #[serde(default, skip_serializing_if = "Constraint::is_unset")]
    pub min_length: MinLengthConstraint,
    #[serde(default, skip_serializing_if = "Constraint::is_unset")]
    pub max_length: MaxLengthConstraint,
}

/// Constraints accepted by `number` fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NumberConstraints {
    #[serde(default, skip_serializing_if = "Constraint::is_unset")]
    pub required: RequiredConstraint,
    #[serde(default, skip_serializing_if = "Constraint::is_unset")]
    pub unique: UniqueConstraint,
    #[serde(default, skip_serializing_if = "Constraint::is_unset")]
    pub min: MinConstraint,
    #[serde(default, skip_serializing_if = "Constraint::is_unset")]
    pub max: MaxConstraint,
}

/// Constraints accepted by `boolean` fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BooleanConstraints {
    #[serde(default, skip_serializing_if = "Constraint::is_unset")]
    pub required: RequiredConstraint,
    #[serde(rename = "enum", default, skip_serializing_if = "Constraint::is_unset")]
    pub enumeration: EnumConstraint,
}

/// Constraints accepted by `list` fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ListConstraints {
    #[serde(default, skip_serializing_if = "Constraint::is_unset")]
    pub required: RequiredConstraint,
    #[serde(default, skip_serializing_if = "Constraint::is_unset")]
    pub min_length: MinLengthConstraint,
    #[serde(default, skip_serializing_if = "Constraint::is_unset")]
    pub max_length: MaxLengthConstraint,
}
