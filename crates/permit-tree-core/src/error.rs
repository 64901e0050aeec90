// crates/permit-tree-core/src/error.rs
use thiserror::Error;

/// Everything that can go wrong between reading the permit CSV and writing
/// the JSON tree.
#[derive(Debug, Error)]
pub enum PermitError {
    /// The input file does not exist or cannot be opened.
    #[error("not found: {0}")]
    NotFound(String),

    /// The CSV reader rejected the input (ragged rows, bad UTF-8, ...).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A column the aggregation needs is absent from the header row.
    #[error("missing column: {0:?}")]
    MissingColumn(String),

    /// A field was present but could not be interpreted.
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PermitError>;
