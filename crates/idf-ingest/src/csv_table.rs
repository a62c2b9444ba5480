use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use tracing::{debug, warn};

use idf_model::{CellValue, Row, Table};

use crate::error::IngestError;

/// File name looked up inside the input directory when none is given.
pub const DEFAULT_INPUT_FILE: &str = "integrity_sample.csv";

/// Joins the input directory with the data file name.
pub fn resolve_input(input_dir: &Path, file_name: Option<&str>) -> PathBuf {
    input_dir.join(file_name.unwrap_or(DEFAULT_INPUT_FILE))
}

fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').to_string()
}

/// Disambiguate repeated headers by suffixing `.1`, `.2`, ... to later copies.
fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen: BTreeSet<String> = BTreeSet::new();
    let mut out = Vec::with_capacity(headers.len());
    for header in headers {
        let mut candidate = header.clone();
        let mut suffix = 1usize;
        while seen.contains(&candidate) {
            candidate = format!("{header}.{suffix}");
            suffix += 1;
        }
        if candidate != header {
            warn!(header = %header, renamed = %candidate, "duplicate column header");
        }
        seen.insert(candidate.clone());
        out.push(candidate);
    }
    out
}

/// Field values read as missing, matching the usual spreadsheet and
/// dataframe export conventions. Compared against the untrimmed field.
pub const MISSING_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn to_cell(raw: &str) -> CellValue {
    if raw.is_empty() || MISSING_TOKENS.contains(&raw) {
        CellValue::Missing
    } else {
        CellValue::Text(raw.to_string())
    }
}

/// Load a CSV file into a [`Table`].
///
/// The first record is the header. Empty fields and [`MISSING_TOKENS`] load
/// as `Missing`; every other field is kept as raw, untrimmed text so that validation sees the
/// value exactly as exported.
pub fn read_csv_table(path: &Path) -> Result<Table, IngestError> {
    if !path.exists() {
        return Err(IngestError::MissingInput(path.to_path_buf()));
    }
    let csv_error = |source| IngestError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;

    let mut records = reader.records();
    let Some(header_record) = records.next() else {
        debug!(path = %path.display(), "empty csv file");
        return Ok(Table::default());
    };
    let header_record = header_record.map_err(csv_error)?;
    let headers = dedupe_headers(header_record.iter().map(normalize_header).collect());
    let mut table = Table::new(headers.clone()).map_err(|source| IngestError::Table {
        path: path.to_path_buf(),
        source,
    })?;

    for record in records {
        let record = record.map_err(csv_error)?;
        if record.len() > headers.len() {
            debug!(
                line = record.position().map(csv::Position::line),
                fields = record.len(),
                expected = headers.len(),
                "dropping extra fields"
            );
        }
        let row: Row = headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let cell = record.get(idx).map_or(CellValue::Missing, to_cell);
                (header.clone(), cell)
            })
            .collect();
        table.push_row(row);
    }

    debug!(
        path = %path.display(),
        columns = table.columns.len(),
        rows = table.row_count(),
        "loaded csv table"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedupe_headers_suffixes_repeats() {
        let headers = vec![
            "Risk Rank".to_string(),
            "Risk Rank".to_string(),
            "Unit ID".to_string(),
            "Risk Rank".to_string(),
        ];
        assert_eq!(
            dedupe_headers(headers),
            vec!["Risk Rank", "Risk Rank.1", "Unit ID", "Risk Rank.2"]
        );
    }

    #[test]
    fn header_keeps_inner_spacing() {
        assert_eq!(
            normalize_header("\u{feff}Circuit /Equipment Tag"),
            "Circuit /Equipment Tag"
        );
    }

    #[test]
    fn missing_tokens_load_as_missing() {
        assert_eq!(to_cell(""), CellValue::Missing);
        assert_eq!(to_cell("N/A"), CellValue::Missing);
        assert_eq!(to_cell("null"), CellValue::Missing);
        assert_eq!(to_cell(" NA "), CellValue::text(" NA "));
        assert_eq!(to_cell("Not Applicable"), CellValue::text("Not Applicable"));
    }

    #[test]
    fn resolve_input_uses_default_name() {
        let path = resolve_input(Path::new("data/sample"), None);
        assert_eq!(path, Path::new("data/sample").join("integrity_sample.csv"));
        let custom = resolve_input(Path::new("data"), Some("other.csv"));
        assert_eq!(custom, Path::new("data").join("other.csv"));
    }
}
