//! Unit and equipment identifier formats.

use idf_model::{CellValue, IntegrityColumn, Row, Severity, ValidationIssue};

use crate::messages::{EQUIPMENT_ID_FORMAT, UNIT_ID_FORMAT};
use crate::patterns::{is_equipment_id, is_unit_id};

pub fn check_unit_id(row_index: usize, row: &Row) -> Option<ValidationIssue> {
    let column = IntegrityColumn::UnitId;
    let unit = row.get(column.display_name()).trimmed_text();
    if unit.is_empty() || is_unit_id(&unit) {
        return None;
    }
    Some(ValidationIssue::row(
        row_index,
        column.display_name(),
        Severity::Error,
        UNIT_ID_FORMAT,
        CellValue::Text(unit),
    ))
}

/// Deviations are tolerated: the record stays usable.
pub fn check_equipment_id(row_index: usize, row: &Row) -> Option<ValidationIssue> {
    let column = IntegrityColumn::EquipmentId;
    let equipment = row.get(column.display_name()).trimmed_text();
    if equipment.is_empty() || is_equipment_id(&equipment) {
        return None;
    }
    Some(ValidationIssue::row(
        row_index,
        column.display_name(),
        Severity::Warn,
        EQUIPMENT_ID_FORMAT,
        CellValue::Text(equipment),
    ))
}
