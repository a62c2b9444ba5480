//! Shape patterns for identifier, date and risk rank fields.

use std::sync::LazyLock;

use regex::Regex;

static UNIT_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3}$").expect("Invalid unit id regex"));

/// Example: `612C-6003`.
static EQUIPMENT_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{3}[A-Z]-[0-9]{4}$").expect("Invalid equipment id regex")
});

/// Shape only: no calendar validity check.
static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Invalid date regex"));

/// Accepted risk ranks (case-sensitive).
pub const ALLOWED_RISK_RANKS: &[&str] = &["Low", "Medium", "High"];

pub fn is_unit_id(value: &str) -> bool {
    UNIT_ID_REGEX.is_match(value)
}

pub fn is_equipment_id(value: &str) -> bool {
    EQUIPMENT_ID_REGEX.is_match(value)
}

pub fn is_inspection_date(value: &str) -> bool {
    DATE_REGEX.is_match(value)
}

pub fn is_risk_rank(value: &str) -> bool {
    ALLOWED_RISK_RANKS.contains(&value)
}
