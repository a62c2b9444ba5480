//! Required column presence (table level).

use idf_model::{IntegrityColumn, Severity, Table, ValidationIssue};

use crate::messages::MISSING_REQUIRED_COLUMN;

/// One table-level error per required column absent from the header.
pub fn check(table: &Table) -> Vec<ValidationIssue> {
    IntegrityColumn::REQUIRED
        .into_iter()
        .filter(|column| !table.has_column(column.display_name()))
        .map(|column| {
            ValidationIssue::table_level(
                column.display_name(),
                Severity::Error,
                MISSING_REQUIRED_COLUMN,
            )
        })
        .collect()
}
