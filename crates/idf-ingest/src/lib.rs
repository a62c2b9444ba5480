pub mod csv_table;
pub mod error;

pub use csv_table::{DEFAULT_INPUT_FILE, MISSING_TOKENS, read_csv_table, resolve_input};
pub use error::IngestError;
