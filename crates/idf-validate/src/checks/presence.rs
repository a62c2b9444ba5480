//! Damage mechanism must be populated on every row.

use idf_model::{CellValue, IntegrityColumn, Row, Severity, ValidationIssue};

use crate::messages::DAMAGE_MECHANISM_REQUIRED;

pub fn check(row_index: usize, row: &Row) -> Option<ValidationIssue> {
    let column = IntegrityColumn::DamageMechanism;
    let raw = row.get(column.display_name());
    let mechanism = raw.trimmed_text();
    if !mechanism.is_empty() {
        return None;
    }
    let value = if raw.is_missing() {
        CellValue::Missing
    } else {
        CellValue::Text(mechanism)
    };
    Some(ValidationIssue::row(
        row_index,
        column.display_name(),
        Severity::Error,
        DAMAGE_MECHANISM_REQUIRED,
        value,
    ))
}
