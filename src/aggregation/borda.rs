use crate::aggregation::pairwise_tally;
use crate::model::ranking::RankingMatrix;

/// Number of (opponent, method) pairs in which the alternative is ranked strictly better.
pub fn borda_scores(matrix: &RankingMatrix) -> Vec<f64> {
    pairwise_tally(matrix)
        .into_iter()
        .map(|(wins, _)| wins as f64)
        .collect()
}
