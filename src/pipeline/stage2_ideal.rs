use serde::Serialize;

use crate::model::Impact;
use crate::pipeline::stage1_normalize::NormalizedTable;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdealSolutions {
    pub positive: Vec<f64>,
    pub negative: Vec<f64>,
}

pub fn ideal_solutions(normalized: &NormalizedTable, impacts: &[Impact]) -> IdealSolutions {
    let mut positive = Vec::with_capacity(impacts.len());
    let mut negative = Vec::with_capacity(impacts.len());
    for (col, impact) in impacts.iter().enumerate() {
        let (min, max) = normalized
            .column(col)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        match impact {
            Impact::Beneficial => {
                positive.push(max);
                negative.push(min);
            }
            Impact::Cost => {
                positive.push(min);
                negative.push(max);
            }
        }
    }
    IdealSolutions { positive, negative }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_ideal.rs"]
mod tests;
