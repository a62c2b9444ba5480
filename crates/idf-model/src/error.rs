use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),
    #[error("unknown column: {0}")]
    UnknownColumn(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
