//! Validation of equipment integrity tables.
//!
//! The validator runs in two phases:
//!
//! 1. Required column presence. Any missing required column is a table-level
//!    error and stops validation; no row is inspected.
//! 2. Per-row field rules, applied to every row in order.
//!
//! Malformed data never fails validation. Every problem becomes a
//! [`ValidationIssue`] in the returned report.

mod checks;
pub mod messages;
pub mod patterns;

use std::time::Instant;

use tracing::{debug, trace};

use idf_model::{Table, ValidationIssue, ValidationReport};

pub use checks::{ROW_CHECKS, RowCheck};
pub use patterns::{
    ALLOWED_RISK_RANKS, is_equipment_id, is_inspection_date, is_risk_rank, is_unit_id,
};

/// Validate `table`, handing it back unchanged alongside the report.
pub fn validate(table: Table) -> (Table, ValidationReport) {
    let report = validate_table(&table);
    (table, report)
}

/// Validate a borrowed table.
pub fn validate_table(table: &Table) -> ValidationReport {
    let start = Instant::now();
    let mut report = ValidationReport::new();

    let missing = checks::required::check(table);
    if !missing.is_empty() {
        debug!(
            missing_columns = missing.len(),
            "required columns absent, skipping row checks"
        );
        report.extend(missing);
        return report;
    }

    for (row_index, row) in table.rows.iter().enumerate() {
        for issue in checks::run_row(row_index, row) {
            log_issue(&issue);
            report.add(issue);
        }
    }

    debug!(
        rows = table.row_count(),
        errors = report.error_count(),
        warnings = report.warning_count(),
        duration_ms = start.elapsed().as_millis(),
        "validation complete"
    );
    report
}

fn log_issue(issue: &ValidationIssue) {
    trace!(
        row_index = issue.row_index,
        field = %issue.field,
        severity = %issue.severity,
        message = %issue.message,
        "validation issue"
    );
}
