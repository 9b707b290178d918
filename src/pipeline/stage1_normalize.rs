use crate::error::{Result, TopsisError};
use crate::model::DecisionTable;

/// Vector-normalized and weighted criterion values, row-major like the source table.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTable {
    pub values: Vec<Vec<f64>>,
}

impl NormalizedTable {
    pub fn n_criteria(&self) -> usize {
        self.values.first().map_or(0, Vec::len)
    }

    pub fn column(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().map(move |row| row[col])
    }
}

/// Divides each column by its Euclidean norm, then scales it by the column weight.
pub fn normalize(table: &DecisionTable, weights: &[f64]) -> Result<NormalizedTable> {
    let mut values = table.values.clone();
    for (col, &weight) in weights.iter().enumerate() {
        let norm = table.column(col).fold(0.0, f64::hypot);
        if norm == 0.0 {
            return Err(TopsisError::DegenerateColumn {
                column: table.criteria[col].clone(),
            });
        }
        for row in values.iter_mut() {
            row[col] = row[col] / norm * weight;
        }
    }
    Ok(NormalizedTable { values })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_normalize.rs"]
mod tests;
