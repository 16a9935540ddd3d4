//! Rendering of validation outcomes for the terminal and for machines.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};
use serde::Serialize;

use tschema_validate::{CellValidationResult, RowValidationResult, ValidationSummary};

use crate::commands::ValidateOutcome;

/// Summary table followed by one row per failing cell.
///
/// Valid rows have no failing cells, so the table view never lists them.
pub fn render_table(outcome: &ValidateOutcome) -> String {
    let mut out = render_summary_table(&outcome.summary).to_string();
    let failures = failure_rows(outcome);
    if failures.is_empty() {
        out.push_str("\nAll rows valid.");
    } else {
        out.push_str("\n\nFailures:\n");
        out.push_str(&render_failure_table(&failures).to_string());
    }
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: &'a ValidationSummary,
    rows: Vec<JsonRow<'a>>,
}

#[derive(Serialize)]
struct JsonRow<'a> {
    row: usize,
    #[serde(flatten)]
    result: &'a RowValidationResult,
}

/// Pretty JSON with the summary and the (optionally filtered) row results.
pub fn render_json(outcome: &ValidateOutcome, only_invalid: bool) -> serde_json::Result<String> {
    let rows = outcome
        .indexed_rows(only_invalid)
        .into_iter()
        .map(|(row, result)| JsonRow { row, result })
        .collect();
    serde_json::to_string_pretty(&JsonReport {
        summary: &outcome.summary,
        rows,
    })
}

fn render_summary_table(summary: &ValidationSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Rows"), header_cell("Count")]);
    apply_table_style(&mut table, 60);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Total"), Cell::new(summary.total_rows)]);
    table.add_row(vec![
        Cell::new("Valid"),
        count_cell(summary.valid_rows, Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Invalid"),
        count_cell(summary.invalid_rows, Color::Red),
    ]);
    for (constraint, count) in &summary.failures_by_constraint {
        table.add_row(vec![
            dim_cell(format!("  {constraint}")),
            count_cell(*count, Color::Yellow),
        ]);
    }
    table
}

fn failure_rows(outcome: &ValidateOutcome) -> Vec<(usize, &CellValidationResult)> {
    outcome
        .indexed_rows(true)
        .into_iter()
        .flat_map(|(index, row)| row.failures.iter().map(move |failure| (index, failure)))
        .collect()
}

fn render_failure_table(failures: &[(usize, &CellValidationResult)]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Field"),
        header_cell("Constraint"),
        header_cell("Value"),
        header_cell("Reason"),
    ]);
    apply_table_style(&mut table, 160);
    align_column(&mut table, 0, CellAlignment::Right);
    table.set_constraints(vec![
        ColumnConstraint::LowerBoundary(Width::Fixed(5)),
        ColumnConstraint::UpperBoundary(Width::Fixed(20)),
        ColumnConstraint::UpperBoundary(Width::Fixed(12)),
        ColumnConstraint::UpperBoundary(Width::Percentage(25)),
        ColumnConstraint::UpperBoundary(Width::Percentage(55)),
    ]);
    for (row, failure) in failures {
        table.add_row(vec![
            Cell::new(row),
            Cell::new(&failure.header)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(failure.constraint).fg(Color::Red),
            value_cell(&failure.value),
            Cell::new(&failure.reason),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table, width: u16) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(width);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn value_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("(empty)")
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
