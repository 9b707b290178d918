use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TopsisError {
    #[error("{0}")]
    MalformedArguments(String),

    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("incorrect file format for {role}: {} (expected .csv)", .path.display())]
    WrongFileExtension { role: &'static str, path: PathBuf },

    #[error("input file must have at least 3 columns, found {found}")]
    InsufficientColumns { found: usize },

    #[error("input file has a header but no data rows")]
    EmptyTable,

    #[error("column '{column}' has no numeric values")]
    NoNumericValues { column: String },

    #[error("invalid format in weights: '{0}' is not a number")]
    NonNumericWeights(String),

    #[error("weight {value} at position {position} must be a positive finite number")]
    InvalidWeight { position: usize, value: f64 },

    #[error("impacts must be '+' or '-', got '{0}'")]
    InvalidImpactSymbol(String),

    #[error(
        "mismatch in the number of criteria: {columns} criterion columns, {weights} weights, {impacts} impacts"
    )]
    DimensionMismatch {
        columns: usize,
        weights: usize,
        impacts: usize,
    },

    #[error("column '{column}' has zero norm; cannot normalize")]
    DegenerateColumn { column: String },

    #[error("row '{row}' coincides with both ideal solutions; score is undefined")]
    DegenerateRow { row: String },

    #[error("row '{row}' has a distance to the ideal solutions too large to represent")]
    NonFiniteScore { row: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TopsisError>;
