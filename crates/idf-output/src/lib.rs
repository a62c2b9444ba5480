//! Output writers for a validation run.
//!
//! - `validation_issues.json`: the ordered issue list as a JSON array
//! - `normalized_integrity_data.csv`: the normalized table

mod error;
mod issues;
mod normalized;

use std::path::{Path, PathBuf};

pub use error::OutputError;
pub use issues::{render_issues_json, write_issues_json};
pub use normalized::write_normalized_csv;

pub const ISSUES_FILE_NAME: &str = "validation_issues.json";
pub const NORMALIZED_FILE_NAME: &str = "normalized_integrity_data.csv";

/// Output file locations under one output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub issues_json: PathBuf,
    pub normalized_csv: PathBuf,
}

impl OutputPaths {
    pub fn new(output_dir: &Path) -> Self {
        Self {
            issues_json: output_dir.join(ISSUES_FILE_NAME),
            normalized_csv: output_dir.join(NORMALIZED_FILE_NAME),
        }
    }
}

fn ensure_parent(path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| OutputError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}
