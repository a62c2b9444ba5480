//! Normalization of equipment integrity tables.
//!
//! Produces a new table from the source without consulting validation
//! results:
//!
//! 1. **Rename**: source headers in the schema catalogue become their
//!    canonical snake-case identifiers. Unknown headers pass through.
//! 2. **Trim**: text columns are converted to string form and trimmed.
//! 3. **Coerce**: numeric columns are parsed as floats. Cells that fail to
//!    parse become missing instead of raising.
//!
//! Normalization is infallible and idempotent: normalizing an already
//! normalized table returns it unchanged.

mod executor;
mod rename;

use std::time::Instant;

use tracing::debug;

use idf_model::{NormalizedTable, Table};

pub use executor::{NormalizationType, coerce_numeric, normalization_type, trim_text};
pub use rename::{canonical_name, rename_columns};

/// Normalize `table` into a new table with the same row count and order.
pub fn normalize(table: &Table) -> NormalizedTable {
    let start = Instant::now();
    let renamed = rename_columns(table);
    let normalized = executor::execute_normalization(renamed);
    debug!(
        rows = normalized.row_count(),
        columns = normalized.columns.len(),
        duration_ms = start.elapsed().as_millis(),
        "normalization complete"
    );
    normalized
}
