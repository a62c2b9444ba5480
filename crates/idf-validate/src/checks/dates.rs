//! Last inspection date shape (YYYY-MM-DD).

use idf_model::{CellValue, IntegrityColumn, Row, Severity, ValidationIssue};

use crate::messages::DATE_FORMAT;
use crate::patterns::is_inspection_date;

pub fn check(row_index: usize, row: &Row) -> Option<ValidationIssue> {
    let column = IntegrityColumn::LastInspectionDate;
    let date = row.get(column.display_name()).trimmed_text();
    if date.is_empty() || is_inspection_date(&date) {
        return None;
    }
    Some(ValidationIssue::row(
        row_index,
        column.display_name(),
        Severity::Warn,
        DATE_FORMAT,
        CellValue::Text(date),
    ))
}
