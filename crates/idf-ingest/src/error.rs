use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// The input file does not exist. Callers treat this as a distinct exit path.
    #[error("missing input file: {}", .0.display())]
    MissingInput(PathBuf),
    #[error("read csv {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("invalid table in {}: {source}", .path.display())]
    Table {
        path: PathBuf,
        #[source]
        source: idf_model::ModelError,
    },
}
