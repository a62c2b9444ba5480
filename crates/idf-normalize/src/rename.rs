use std::collections::BTreeMap;

use tracing::warn;

use idf_model::{IntegrityColumn, Row, Table};

/// Canonical identifier for a source header, if the catalogue knows it.
pub fn canonical_name(header: &str) -> Option<&'static str> {
    IntegrityColumn::from_display_name(header).map(|column| column.canonical_name())
}

/// Rename known headers to their canonical identifiers.
///
/// A header is left as-is when its canonical name is already taken by another
/// source column, so that no two output columns share a name.
pub fn rename_columns(table: &Table) -> Table {
    let mut renames: BTreeMap<&str, &'static str> = BTreeMap::new();
    for header in &table.columns {
        let Some(target) = canonical_name(header) else {
            continue;
        };
        if table.has_column(target) {
            warn!(
                header = %header,
                target,
                "canonical column already present, keeping source header"
            );
            continue;
        }
        renames.insert(header.as_str(), target);
    }

    let rename = |header: &str| -> String {
        renames
            .get(header)
            .map_or_else(|| header.to_string(), |target| (*target).to_string())
    };

    let columns = table
        .columns
        .iter()
        .map(|header| rename(header.as_str()))
        .collect();
    let rows = table
        .rows
        .iter()
        .map(|row| Row {
            cells: row
                .cells
                .iter()
                .map(|(header, value)| (rename(header), value.clone()))
                .collect(),
        })
        .collect();
    Table { columns, rows }
}
