use std::path::Path;

pub mod args;
pub mod table_reader;

pub use args::{parse_impacts, parse_weights};
pub use table_reader::read_table;

use crate::error::{Result, TopsisError};
use crate::model::{Criteria, DecisionTable};

pub fn validate_input_path(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(TopsisError::FileNotFound(path.to_path_buf()));
    }
    require_csv_extension(path, "input")
}

pub fn validate_output_path(path: &Path) -> Result<()> {
    require_csv_extension(path, "output")
}

fn require_csv_extension(path: &Path, role: &'static str) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => Ok(()),
        _ => Err(TopsisError::WrongFileExtension {
            role,
            path: path.to_path_buf(),
        }),
    }
}

pub fn check_dimensions(table: &DecisionTable, criteria: &Criteria) -> Result<()> {
    let columns = table.n_criteria();
    let weights = criteria.weights.len();
    let impacts = criteria.impacts.len();
    if weights != impacts || columns != weights {
        return Err(TopsisError::DimensionMismatch {
            columns,
            weights,
            impacts,
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
