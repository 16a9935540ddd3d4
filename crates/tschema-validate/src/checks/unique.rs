//! Column uniqueness check.
//!
//! Unlike the cell checks this needs the whole column, so it runs after the
//! row pass and writes its failures into the existing row results.

use std::collections::BTreeMap;

use tschema_model::UniqueConstraint;

use crate::result::{CellValidationResult, ConstraintName, RowValidationResult};
use crate::util::comma_separated;

/// Mark every row whose `header` value also appears on another row.
///
/// Each duplicated row gets one failure naming all rows that share the value
/// (0-based, ascending) and is marked invalid. Rows holding a value seen only
/// once are left untouched. Does nothing unless the constraint is selected
/// and `true`.
pub fn check(unique: &UniqueConstraint, header: &str, rows: &mut [RowValidationResult]) {
    if !unique.is_enabled() {
        return;
    }

    let mut indices_by_value: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (index, row) in rows.iter().enumerate() {
        indices_by_value
            .entry(row.value(header).to_string())
            .or_default()
            .push(index);
    }

    for (value, indices) in &indices_by_value {
        if indices.len() < 2 {
            continue;
        }
        let shared = comma_separated(indices);
        for &index in indices {
            let reason = format!(
                "{header} was marked as unique but its value {value} was found on rows {shared} (this row: {index})"
            );
            tracing::trace!(header, value = %value, row = index, "duplicate value");
            rows[index].record(CellValidationResult::fail(
                ConstraintName::Unique,
                header,
                value,
                reason,
            ));
        }
    }
}
