/// Alternatives scored across numeric criteria.
///
/// `values` is row-major: `values[row][col]` is the value of criterion `col`
/// for alternative `row`. Every row has `criteria.len()` values. `text` holds
/// the same cells as written back out: the source text, or the fill value
/// for cells that were coerced.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTable {
    pub id_header: String,
    pub criteria: Vec<String>,
    pub ids: Vec<String>,
    pub values: Vec<Vec<f64>>,
    pub text: Vec<Vec<String>>,
    pub coerced_cells: usize,
}

impl DecisionTable {
    pub fn n_rows(&self) -> usize {
        self.ids.len()
    }

    pub fn n_criteria(&self) -> usize {
        self.criteria.len()
    }

    pub fn column(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().map(move |row| row[col])
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/table.rs"]
mod tests;
