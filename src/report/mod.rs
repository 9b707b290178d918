use serde::Serialize;

use crate::model::{Criteria, DecisionTable, Impact};
use crate::pipeline::TopsisOutcome;
use crate::pipeline::stage2_ideal::IdealSolutions;

pub const SCORE_HEADER: &str = "Topsis Score";
pub const RANK_HEADER: &str = "Rank";

#[derive(Debug, Clone, Serialize)]
pub struct CriterionSummary {
    pub name: String,
    pub weight: f64,
    pub impact: Impact,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub tool: String,
    pub version: String,
    pub input: String,
    pub output: String,
    pub n_rows: usize,
    pub n_criteria: usize,
    pub criteria: Vec<CriterionSummary>,
    pub ideal: IdealSolutions,
    pub coerced_cells: usize,
    pub degenerate_rows: usize,
    pub best: Vec<String>,
    pub score_min: f64,
    pub score_max: f64,
}

pub fn build_summary(
    table: &DecisionTable,
    criteria: &Criteria,
    outcome: &TopsisOutcome,
    input: &str,
    output: &str,
) -> RunSummary {
    let criteria_summary = table
        .criteria
        .iter()
        .zip(criteria.weights.iter().zip(&criteria.impacts))
        .map(|(name, (&weight, &impact))| CriterionSummary {
            name: name.clone(),
            weight,
            impact,
        })
        .collect();

    RunSummary {
        tool: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        input: input.to_string(),
        output: output.to_string(),
        n_rows: table.n_rows(),
        n_criteria: table.n_criteria(),
        criteria: criteria_summary,
        ideal: outcome.ideal.clone(),
        coerced_cells: table.coerced_cells,
        degenerate_rows: outcome.degenerate_rows.len(),
        best: best_alternatives(&table.ids, &outcome.ranks),
        score_min: outcome.scores.iter().copied().fold(f64::INFINITY, f64::min),
        score_max: outcome
            .scores
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max),
    }
}

/// Identifiers holding the best rank present. Under max ranking a tie at the
/// top has no rank 1, so this is the lowest rank rather than rank 1.
pub fn best_alternatives(ids: &[String], ranks: &[usize]) -> Vec<String> {
    let Some(&best) = ranks.iter().min() else {
        return Vec::new();
    };
    ids.iter()
        .zip(ranks)
        .filter(|(_, r)| **r == best)
        .map(|(id, _)| id.clone())
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
