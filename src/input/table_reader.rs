use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use crate::error::{Result, TopsisError};
use crate::model::DecisionTable;

pub const MIN_COLUMNS: usize = 3;

pub fn read_table(path: &Path) -> Result<DecisionTable> {
    let reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_path(path)?;
    let table = read_table_from(reader)?;
    debug!(
        "read {} rows x {} criteria from {}",
        table.n_rows(),
        table.n_criteria(),
        path.display()
    );
    Ok(table)
}

pub fn read_table_from<R: Read>(mut reader: csv::Reader<R>) -> Result<DecisionTable> {
    let headers = reader.headers()?.clone();
    if headers.len() < MIN_COLUMNS {
        return Err(TopsisError::InsufficientColumns {
            found: headers.len(),
        });
    }

    let records = reader
        .records()
        .collect::<std::result::Result<Vec<StringRecord>, csv::Error>>()?;
    if records.is_empty() {
        return Err(TopsisError::EmptyTable);
    }

    let criteria: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();
    let ids: Vec<String> = records
        .iter()
        .map(|r| r.get(0).unwrap_or_default().to_string())
        .collect();

    let mut values = vec![Vec::with_capacity(criteria.len()); records.len()];
    let mut text = vec![Vec::with_capacity(criteria.len()); records.len()];
    let mut coerced_cells = 0usize;
    for (col, name) in criteria.iter().enumerate() {
        let parsed: Vec<Option<f64>> = records
            .iter()
            .map(|r| parse_cell(r.get(col + 1).unwrap_or_default()))
            .collect();
        let fill = column_mean(&parsed).ok_or_else(|| TopsisError::NoNumericValues {
            column: name.clone(),
        })?;
        for (row, cell) in parsed.into_iter().enumerate() {
            let value = match cell {
                Some(v) => {
                    let raw = records[row].get(col + 1).unwrap_or_default();
                    text[row].push(raw.to_string());
                    v
                }
                None => {
                    warn!(
                        "non-numeric value in row '{}', column '{}'; using column mean {}",
                        ids[row], name, fill
                    );
                    coerced_cells += 1;
                    text[row].push(fill.to_string());
                    fill
                }
            };
            values[row].push(value);
        }
    }

    Ok(DecisionTable {
        id_header: headers.get(0).unwrap_or_default().to_string(),
        criteria,
        ids,
        values,
        text,
        coerced_cells,
    })
}

fn parse_cell(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn column_mean(cells: &[Option<f64>]) -> Option<f64> {
    let mut mean = None;
    for (n, v) in cells.iter().flatten().enumerate() {
        let m = mean.unwrap_or(0.0);
        mean = Some(m + (v - m) / (n + 1) as f64);
    }
    mean
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/table_reader.rs"]
mod tests;
