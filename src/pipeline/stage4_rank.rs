/// "Max" ranking, descending: each row's rank is the number of rows whose
/// score is greater than or equal to its own. A full tie of `n` rows ranks `n`.
pub fn rank(scores: &[f64]) -> Vec<usize> {
    let mut sorted = scores.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));
    scores
        .iter()
        .map(|&s| sorted.partition_point(|&x| x >= s))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_rank.rs"]
mod tests;
