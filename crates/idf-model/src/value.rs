//! Cell values and the scalar helpers shared by validation and normalization.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single raw scalar from the source table.
///
/// Serializes untagged so that JSON output carries the plain value:
/// a string, a number, or `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// String form of the cell. Missing values render as an empty string.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Text(value) => value.clone(),
            CellValue::Number(value) => format_numeric(*value),
            CellValue::Missing => String::new(),
        }
    }

    /// Trimmed string form, used by every shape check.
    pub fn trimmed_text(&self) -> String {
        match self {
            CellValue::Text(value) => value.trim().to_string(),
            other => other.to_text(),
        }
    }

    /// Numeric interpretation of the cell, `None` when absent or unparseable.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(value) => Some(*value),
            CellValue::Text(value) => parse_f64(value),
            CellValue::Missing => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Missing, Into::into)
    }
}

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Formats a floating-point number without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_numeric_keeps_integers_intact() {
        assert_eq!(format_numeric(612.0), "612");
        assert_eq!(format_numeric(-5.0), "-5");
        assert_eq!(format_numeric(100.0), "100");
        assert_eq!(format_numeric(12.50), "12.5");
    }

    #[test]
    fn parse_f64_trims_and_rejects_blank() {
        assert_eq!(parse_f64(" 4.5 "), Some(4.5));
        assert_eq!(parse_f64("-5"), Some(-5.0));
        assert_eq!(parse_f64("   "), None);
        assert_eq!(parse_f64("abc"), None);
    }

    #[test]
    fn numbers_render_as_text() {
        assert_eq!(CellValue::Number(612.0).trimmed_text(), "612");
        assert_eq!(CellValue::text("  612 ").trimmed_text(), "612");
        assert_eq!(CellValue::Missing.trimmed_text(), "");
    }
}
