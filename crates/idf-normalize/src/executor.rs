//! Cell-level normalization, driven by the schema catalogue.

use idf_model::{CellValue, ColumnKind, IntegrityColumn, NormalizedTable, Table};

/// What happens to the cells of one canonical column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizationType {
    /// String form, surrounding whitespace removed.
    Trim,
    /// Float parse; failures become missing.
    NumericConversion,
}

/// Normalization for a renamed column. Columns outside the catalogue
/// pass through untouched.
pub fn normalization_type(column: &str) -> Option<NormalizationType> {
    let column = IntegrityColumn::from_canonical_name(column)?;
    Some(match column.kind() {
        ColumnKind::Text => NormalizationType::Trim,
        ColumnKind::Numeric => NormalizationType::NumericConversion,
    })
}

/// Missing stays missing; numbers take their display form.
pub fn trim_text(value: &CellValue) -> CellValue {
    match value {
        CellValue::Missing => CellValue::Missing,
        other => CellValue::Text(other.trimmed_text()),
    }
}

/// NaN is treated as missing so that coercion output never carries it.
pub fn coerce_numeric(value: &CellValue) -> CellValue {
    match value.as_f64() {
        Some(number) if !number.is_nan() => CellValue::Number(number),
        _ => CellValue::Missing,
    }
}

fn apply(kind: NormalizationType, value: &CellValue) -> CellValue {
    match kind {
        NormalizationType::Trim => trim_text(value),
        NormalizationType::NumericConversion => coerce_numeric(value),
    }
}

/// Apply trim and coercion to every catalogued column of a renamed table.
pub(crate) fn execute_normalization(mut table: Table) -> NormalizedTable {
    let plan: Vec<(String, NormalizationType)> = table
        .columns
        .iter()
        .filter_map(|column| normalization_type(column).map(|kind| (column.clone(), kind)))
        .collect();

    for row in &mut table.rows {
        for (column, kind) in &plan {
            if let Some(cell) = row.cells.get_mut(column) {
                *cell = apply(*kind, cell);
            }
        }
    }
    table
}
