use crate::aggregation::pairwise_tally;
use crate::model::ranking::RankingMatrix;

pub fn copeland_scores(matrix: &RankingMatrix) -> Vec<f64> {
    pairwise_tally(matrix)
        .into_iter()
        .map(|(wins, losses)| wins as f64 - losses as f64)
        .collect()
}
