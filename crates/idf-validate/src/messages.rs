//! Fixed issue messages, one per rule.

pub const MISSING_REQUIRED_COLUMN: &str = "Missing required column";
pub const UNIT_ID_FORMAT: &str = "Expected 3-digit unit id";
pub const EQUIPMENT_ID_FORMAT: &str = "Equipment id format differs from example ###X-####";
pub const DAMAGE_MECHANISM_REQUIRED: &str = "Damage mechanism is required";
pub const DESIGN_PRESSURE_NOT_NUMERIC: &str = "Design pressure not numeric";
pub const DESIGN_PRESSURE_NEGATIVE: &str = "Design pressure must be >= 0";
pub const DATE_FORMAT: &str = "Expected date format YYYY-MM-DD";
pub const RISK_RANK_VALUE: &str = "Risk rank not in {Low, Medium, High}";
