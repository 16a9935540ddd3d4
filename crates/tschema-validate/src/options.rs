//! Configuration for validation runs.

use serde::{Deserialize, Serialize};

/// Which declared constraints the row pass enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConstraintCoverage {
    /// Type and `required` checks for string and number fields only.
    #[default]
    Basic,
    /// Every declared constraint on every field kind.
    Full,
}

/// Options controlling a validation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationOptions {
    /// Constraints enforced during the row pass. `unique` is always
    /// enforced by the column pass.
    pub coverage: ConstraintCoverage,

    /// Separator between items of a `list` cell.
    pub list_delimiter: char,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            coverage: ConstraintCoverage::Basic,
            list_delimiter: ',',
        }
    }
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that enforce every declared constraint.
    pub fn strict() -> Self {
        Self {
            coverage: ConstraintCoverage::Full,
            ..Self::default()
        }
    }

    pub fn with_coverage(mut self, coverage: ConstraintCoverage) -> Self {
        self.coverage = coverage;
        self
    }

    pub fn with_list_delimiter(mut self, delimiter: char) -> Self {
        self.list_delimiter = delimiter;
        self
    }

    pub(crate) fn is_full(&self) -> bool {
        self.coverage == ConstraintCoverage::Full
    }
}
