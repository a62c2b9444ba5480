use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::CellValue;

/// Row index reserved for issues that concern the table as a whole.
pub const TABLE_LEVEL_ROW: i64 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The record is not usable as-is.
    Error,
    /// The record is usable but suspect.
    Warn,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warn => "warn",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validation finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Zero-based row position, or [`TABLE_LEVEL_ROW`].
    pub row_index: i64,
    /// Source column name the issue concerns.
    pub field: String,
    pub severity: Severity,
    pub message: String,
    /// Offending value (`null` when absent).
    pub value: CellValue,
}

impl ValidationIssue {
    pub fn table_level(
        field: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            row_index: TABLE_LEVEL_ROW,
            field: field.into(),
            severity,
            message: message.into(),
            value: CellValue::Missing,
        }
    }

    pub fn row(
        row_index: usize,
        field: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
        value: CellValue,
    ) -> Self {
        Self {
            row_index: i64::try_from(row_index).unwrap_or(i64::MAX),
            field: field.into(),
            severity,
            message: message.into(),
            value,
        }
    }

    pub fn is_table_level(&self) -> bool {
        self.row_index == TABLE_LEVEL_ROW
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Ordered issue list for one validation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    pub fn extend(&mut self, issues: impl IntoIterator<Item = ValidationIssue>) {
        self.issues.extend(issues);
    }

    pub fn error_count(&self) -> usize {
        self.issues.iter().filter(|issue| issue.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Warn)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(ValidationIssue::is_error)
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }
}
