//! The schema document and its canonical JSON form.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::field::{Field, NumberField, StringField};

/// Profile identifier written as the `$schema` member of every schema.
pub const TABLE_SCHEMA_PROFILE: &str = "https://datapackage.org/profiles/2.0/tableschema.json";

/// A table schema: the profile identifier plus ordered field definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    #[serde(rename = "$schema")]
    profile: String,
    fields: Vec<Field>,
}

/// Wire shape accepted when reading a schema back in. Top-level members
/// other than `fields` (`primaryKey`, `missingValues`, ...) are ignored.
#[derive(Deserialize)]
struct SchemaDocument {
    #[serde(rename = "$schema", default)]
    _profile: Option<String>,
    #[serde(default)]
    fields: Vec<Field>,
}

impl Schema {
    /// Builds a schema from fields in the order they should be declared.
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            profile: TABLE_SCHEMA_PROFILE.to_string(),
            fields,
        }
    }

    /// Appends `field` after the existing fields.
    #[must_use]
    pub fn with_field(mut self, field: impl Into<Field>) -> Self {
        self.fields.push(field.into());
        self
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Looks up a field by exact name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name() == name)
    }

    pub fn string_fields(&self) -> impl Iterator<Item = &StringField> {
        self.fields.iter().filter_map(|field| match field {
            Field::String(string) => Some(string),
            _ => None,
        })
    }

    pub fn number_fields(&self) -> impl Iterator<Item = &NumberField> {
        self.fields.iter().filter_map(|field| match field {
            Field::Number(number) => Some(number),
            _ => None,
        })
    }

    /// Rejects schemas in which two fields share a name.
    ///
    /// Construction does not enforce this so that callers can assemble a
    /// schema incrementally and check once at the end.
    pub fn check_field_names(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for field in &self.fields {
            if !seen.insert(field.name()) {
                return Err(ModelError::DuplicateField {
                    name: field.name().to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(ModelError::Serialize)
    }

    /// Canonical two-space indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(ModelError::Serialize)
    }

    /// Parses a schema document. The `$schema` member is re-stamped with
    /// [`TABLE_SCHEMA_PROFILE`].
    pub fn from_json(json: &str) -> Result<Self> {
        let document: SchemaDocument = serde_json::from_str(json).map_err(ModelError::Parse)?;
        Ok(Self::new(document.fields))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
