use serde::Serialize;

/// Direction of desirability for one criterion column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Beneficial,
    Cost,
}

impl Impact {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Impact::Beneficial),
            "-" => Some(Impact::Cost),
            _ => None,
        }
    }
}

/// Weight and impact per criterion, aligned by position with the table columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Criteria {
    pub weights: Vec<f64>,
    pub impacts: Vec<Impact>,
}

/// What to do with a row whose distances to both ideals are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateRowPolicy {
    /// Score the row 0.5.
    Neutral,
    Reject,
}

pub const NEUTRAL_SCORE: f64 = 0.5;
