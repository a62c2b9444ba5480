use std::path::Path;

use tracing::debug;

use idf_model::ValidationIssue;

use crate::{OutputError, ensure_parent};

/// Pretty JSON array with keys `row_index`, `field`, `severity`, `message`, `value`.
pub fn render_issues_json(issues: &[ValidationIssue]) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(issues)?)
}

pub fn write_issues_json(path: &Path, issues: &[ValidationIssue]) -> Result<(), OutputError> {
    ensure_parent(path)?;
    let json = render_issues_json(issues)?;
    std::fs::write(path, json).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), issues = issues.len(), "wrote issues json");
    Ok(())
}
