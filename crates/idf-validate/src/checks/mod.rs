//! Validation check modules.
//!
//! Each module performs a specific type of validation check.

mod dates;
mod identifier;
mod numeric;
mod presence;
pub mod required;
mod terminology;

use idf_model::{Row, ValidationIssue};

/// A per-row rule. Returns at most one issue.
pub type RowCheck = fn(usize, &Row) -> Option<ValidationIssue>;

/// Row rules in evaluation order. Issue order within a row follows this list.
pub static ROW_CHECKS: [RowCheck; 6] = [
    identifier::check_unit_id,
    identifier::check_equipment_id,
    presence::check,
    numeric::check_design_pressure,
    dates::check,
    terminology::check,
];

/// Run every row rule against one row.
pub fn run_row(row_index: usize, row: &Row) -> impl Iterator<Item = ValidationIssue> + '_ {
    ROW_CHECKS
        .iter()
        .filter_map(move |check| check(row_index, row))
}
