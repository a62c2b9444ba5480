use std::path::Path;

use csv::WriterBuilder;
use tracing::debug;

use idf_model::NormalizedTable;

use crate::{OutputError, ensure_parent};

/// Header row of column names, then one record per row in table order.
/// Missing cells are written empty.
pub fn write_normalized_csv(path: &Path, table: &NormalizedTable) -> Result<(), OutputError> {
    ensure_parent(path)?;
    let csv_error = |source| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = WriterBuilder::new().from_path(path).map_err(csv_error)?;
    if !table.columns.is_empty() {
        writer.write_record(&table.columns).map_err(csv_error)?;
    }
    for row in &table.rows {
        let record: Vec<String> = table
            .columns
            .iter()
            .map(|column| row.get(column).to_text())
            .collect();
        writer.write_record(&record).map_err(csv_error)?;
    }
    writer.flush().map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), rows = table.row_count(), "wrote normalized csv");
    Ok(())
}
