//! Pipeline stages for one integrity data run.
//!
//! load -> validate -> normalize -> write outputs. Validation and
//! normalization always both run; the outcome decides the exit code.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use idf_ingest::{IngestError, read_csv_table, resolve_input};
use idf_model::{NormalizedTable, ValidationReport};
use idf_normalize::normalize;
use idf_output::{OutputPaths, write_issues_json, write_normalized_csv};
use idf_validate::validate;

/// No error-severity issues (warnings allowed).
pub const EXIT_SUCCESS: i32 = 0;
/// At least one error-severity issue, or a runtime failure.
pub const EXIT_VALIDATION_ERRORS: i32 = 1;
/// The input file does not exist; validation never ran.
pub const EXIT_MISSING_INPUT: i32 = 2;

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub file_name: Option<String>,
    pub dry_run: bool,
}

impl PipelineConfig {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            file_name: None,
            dry_run: false,
        }
    }

    #[must_use]
    pub fn with_file_name(mut self, file_name: Option<String>) -> Self {
        self.file_name = file_name;
        self
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn input_path(&self) -> PathBuf {
        resolve_input(&self.input_dir, self.file_name.as_deref())
    }
}

#[derive(Debug)]
pub struct PipelineOutcome {
    pub input_path: PathBuf,
    pub row_count: usize,
    pub report: ValidationReport,
    pub normalized: NormalizedTable,
    /// `None` on a dry run.
    pub outputs: Option<OutputPaths>,
}

impl PipelineOutcome {
    pub fn has_errors(&self) -> bool {
        self.report.has_errors()
    }

    pub fn exit_code(&self) -> i32 {
        if self.has_errors() {
            EXIT_VALIDATION_ERRORS
        } else {
            EXIT_SUCCESS
        }
    }
}

/// Map a pipeline failure to its exit code.
pub fn exit_code_for_error(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<IngestError>() {
        Some(IngestError::MissingInput(_)) => EXIT_MISSING_INPUT,
        _ => EXIT_VALIDATION_ERRORS,
    }
}

pub fn run_pipeline(config: &PipelineConfig) -> Result<PipelineOutcome> {
    let input_path = config.input_path();
    let run_span = info_span!("run", input = %input_path.display());
    let _run_guard = run_span.enter();

    let ingest_start = Instant::now();
    let table = info_span!("ingest").in_scope(|| read_csv_table(&input_path))?;
    let row_count = table.row_count();
    info!(
        rows = row_count,
        columns = table.columns.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let validate_start = Instant::now();
    let (table, report) = info_span!("validate").in_scope(|| validate(table));
    info!(
        errors = report.error_count(),
        warnings = report.warning_count(),
        duration_ms = validate_start.elapsed().as_millis(),
        "validation complete"
    );

    let normalize_start = Instant::now();
    let normalized = info_span!("normalize").in_scope(|| normalize(&table));
    info!(
        rows = normalized.row_count(),
        duration_ms = normalize_start.elapsed().as_millis(),
        "normalization complete"
    );

    let outputs = if config.dry_run {
        info!("dry run, skipping output files");
        None
    } else {
        let output_start = Instant::now();
        let paths = info_span!("output")
            .in_scope(|| write_outputs(&config.output_dir, &report, &normalized))?;
        info!(
            output_dir = %config.output_dir.display(),
            duration_ms = output_start.elapsed().as_millis(),
            "outputs written"
        );
        Some(paths)
    };

    Ok(PipelineOutcome {
        input_path,
        row_count,
        report,
        normalized,
        outputs,
    })
}

fn write_outputs(
    output_dir: &Path,
    report: &ValidationReport,
    normalized: &NormalizedTable,
) -> Result<OutputPaths> {
    let paths = OutputPaths::new(output_dir);
    write_issues_json(&paths.issues_json, &report.issues).context("write validation issues")?;
    write_normalized_csv(&paths.normalized_csv, normalized).context("write normalized data")?;
    Ok(paths)
}
