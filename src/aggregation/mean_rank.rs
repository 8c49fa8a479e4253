use crate::model::ranking::RankingMatrix;

pub fn mean_rank_scores(matrix: &RankingMatrix) -> Vec<f64> {
    let m = matrix.n_methods() as f64;
    matrix
        .ranks
        .iter()
        .map(|row| row.iter().map(|&r| r as f64).sum::<f64>() / m)
        .collect()
}
