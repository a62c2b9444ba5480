//! Risk rank vocabulary.

use idf_model::{CellValue, IntegrityColumn, Row, Severity, ValidationIssue};

use crate::messages::RISK_RANK_VALUE;
use crate::patterns::is_risk_rank;

pub fn check(row_index: usize, row: &Row) -> Option<ValidationIssue> {
    let column = IntegrityColumn::RiskRank;
    let rank = row.get(column.display_name()).trimmed_text();
    if rank.is_empty() || is_risk_rank(&rank) {
        return None;
    }
    Some(ValidationIssue::row(
        row_index,
        column.display_name(),
        Severity::Warn,
        RISK_RANK_VALUE,
        CellValue::Text(rank),
    ))
}
