//! Design pressure: numeric and non-negative.

use idf_model::{IntegrityColumn, Row, Severity, ValidationIssue};

use crate::messages::{DESIGN_PRESSURE_NEGATIVE, DESIGN_PRESSURE_NOT_NUMERIC};

/// At most one issue: a value that does not parse is never sign-checked.
pub fn check_design_pressure(row_index: usize, row: &Row) -> Option<ValidationIssue> {
    let column = IntegrityColumn::DesignPressure;
    let raw = row.get(column.display_name());
    if raw.is_missing() {
        return None;
    }
    let (severity, message) = match raw.as_f64() {
        None => (Severity::Warn, DESIGN_PRESSURE_NOT_NUMERIC),
        Some(pressure) if pressure < 0.0 => (Severity::Error, DESIGN_PRESSURE_NEGATIVE),
        Some(_) => return None,
    };
    Some(ValidationIssue::row(
        row_index,
        column.display_name(),
        severity,
        message,
        raw.clone(),
    ))
}
