pub mod conformance;
pub mod error;
pub mod schema;
pub mod table;
pub mod value;

pub use conformance::{Severity, TABLE_LEVEL_ROW, ValidationIssue, ValidationReport};
pub use error::{ModelError, Result};
pub use schema::{ColumnKind, IntegrityColumn};
pub use table::{NormalizedTable, Row, Table};
pub use value::{CellValue, format_numeric, parse_f64};
