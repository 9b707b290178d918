pub mod stage1_normalize;
pub mod stage2_ideal;
pub mod stage3_scores;
pub mod stage4_rank;
pub mod stage5_report;

use tracing::debug;

use crate::error::Result;
use crate::model::{Criteria, DecisionTable, DegenerateRowPolicy};
use stage2_ideal::IdealSolutions;

#[derive(Debug, Clone, PartialEq)]
pub struct TopsisOutcome {
    pub ideal: IdealSolutions,
    pub scores: Vec<f64>,
    pub ranks: Vec<usize>,
    pub degenerate_rows: Vec<usize>,
}

/// Normalize, locate the ideals, score and rank. Callers must have checked
/// that `criteria` matches the table's criterion columns.
pub fn run_topsis(
    table: &DecisionTable,
    criteria: &Criteria,
    policy: DegenerateRowPolicy,
) -> Result<TopsisOutcome> {
    let normalized = stage1_normalize::normalize(table, &criteria.weights)?;
    debug!("normalized {} criteria", normalized.n_criteria());

    let ideal = stage2_ideal::ideal_solutions(&normalized, &criteria.impacts);
    debug!(
        "positive ideal {:?}, negative ideal {:?}",
        ideal.positive, ideal.negative
    );

    let scored = stage3_scores::score(&normalized, &ideal, &table.ids, policy)?;
    let ranks = stage4_rank::rank(&scored.scores);

    Ok(TopsisOutcome {
        ideal,
        scores: scored.scores,
        ranks,
        degenerate_rows: scored.degenerate_rows,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
