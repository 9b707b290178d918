use crate::error::{Result, TopsisError};
use crate::model::DegenerateRowPolicy;
use crate::model::criteria::NEUTRAL_SCORE;
use crate::pipeline::stage1_normalize::NormalizedTable;
use crate::pipeline::stage2_ideal::IdealSolutions;

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreOutput {
    pub scores: Vec<f64>,
    /// Rows at zero distance from both ideals.
    pub degenerate_rows: Vec<usize>,
}

/// Relative closeness `d- / (d+ + d-)` per row.
pub fn score(
    normalized: &NormalizedTable,
    ideal: &IdealSolutions,
    ids: &[String],
    policy: DegenerateRowPolicy,
) -> Result<ScoreOutput> {
    let mut scores = Vec::with_capacity(normalized.values.len());
    let mut degenerate_rows = Vec::new();
    for (row, values) in normalized.values.iter().enumerate() {
        let row_id = || ids.get(row).cloned().unwrap_or_else(|| row.to_string());
        let d_pos = euclidean(values, &ideal.positive);
        let d_neg = euclidean(values, &ideal.negative);
        if !d_pos.is_finite() || !d_neg.is_finite() {
            return Err(TopsisError::NonFiniteScore { row: row_id() });
        }

        // Scale by the larger distance so the sum cannot overflow.
        let scale = d_pos.max(d_neg);
        if scale == 0.0 {
            match policy {
                DegenerateRowPolicy::Neutral => {
                    degenerate_rows.push(row);
                    scores.push(NEUTRAL_SCORE);
                }
                DegenerateRowPolicy::Reject => {
                    return Err(TopsisError::DegenerateRow { row: row_id() });
                }
            }
            continue;
        }
        let (d_pos, d_neg) = (d_pos / scale, d_neg / scale);
        let closeness = d_neg / (d_pos + d_neg);
        if !closeness.is_finite() {
            return Err(TopsisError::NonFiniteScore { row: row_id() });
        }
        scores.push(closeness);
    }
    Ok(ScoreOutput {
        scores,
        degenerate_rows,
    })
}

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).fold(0.0, |acc, (x, y)| acc.hypot(x - y))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_scores.rs"]
mod tests;
