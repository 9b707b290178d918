use crate::error::{Result, TopsisError};
use crate::model::Impact;

/// Parses a comma-separated weight list such as `"1,0.5,2"`.
pub fn parse_weights(text: &str) -> Result<Vec<f64>> {
    let mut weights = Vec::new();
    for (position, token) in text.split(',').map(str::trim).enumerate() {
        let value: f64 = token
            .parse()
            .map_err(|_| TopsisError::NonNumericWeights(token.to_string()))?;
        if !value.is_finite() || value <= 0.0 {
            return Err(TopsisError::InvalidWeight {
                position: position + 1,
                value,
            });
        }
        weights.push(value);
    }
    Ok(weights)
}

/// Parses a comma-separated impact list such as `"+,+,-"`.
pub fn parse_impacts(text: &str) -> Result<Vec<Impact>> {
    text.split(',')
        .map(str::trim)
        .map(|token| {
            Impact::from_symbol(token)
                .ok_or_else(|| TopsisError::InvalidImpactSymbol(token.to_string()))
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/args.rs"]
mod tests;
