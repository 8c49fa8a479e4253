pub mod borda;
pub mod copeland;
pub mod mean_rank;

use crate::error::{McdmError, Result};
use crate::model::ranking::{AggregateResult, AggregationKind, RankingMatrix, assign_ranks};

pub fn run_aggregation(kind: AggregationKind, matrix: &RankingMatrix) -> Result<AggregateResult> {
    check_matrix(kind, matrix)?;
    let scores = match kind {
        AggregationKind::MeanRank => mean_rank::mean_rank_scores(matrix),
        AggregationKind::Borda => borda::borda_scores(matrix),
        AggregationKind::Copeland => copeland::copeland_scores(matrix),
    };
    let ranks = assign_ranks(&scores, kind.direction());
    Ok(AggregateResult {
        kind,
        alternatives: matrix.alternatives.clone(),
        scores,
        ranks,
    })
}

fn check_matrix(kind: AggregationKind, matrix: &RankingMatrix) -> Result<()> {
    let stage = kind.label();
    if matrix.n_methods() == 0 {
        return Err(McdmError::shape(stage, "ranking matrix has no method columns"));
    }
    if matrix.ranks.len() != matrix.n_alternatives() {
        return Err(McdmError::shape(
            stage,
            format!(
                "{} alternatives but {} rank rows",
                matrix.n_alternatives(),
                matrix.ranks.len()
            ),
        ));
    }
    for (alt, row) in matrix.alternatives.iter().zip(&matrix.ranks) {
        if row.len() != matrix.n_methods() {
            return Err(McdmError::shape(
                stage,
                format!(
                    "{} has {} ranks for {} methods",
                    alt.key,
                    row.len(),
                    matrix.n_methods()
                ),
            ));
        }
    }
    Ok(())
}

/// Per alternative: (method-level wins, method-level losses) over every other alternative.
pub(crate) fn pairwise_tally(matrix: &RankingMatrix) -> Vec<(u64, u64)> {
    let n = matrix.n_alternatives();
    let mut tally = vec![(0u64, 0u64); n];
    for i in 0..n {
        for j in (i + 1)..n {
            for (a, b) in matrix.ranks[i].iter().zip(&matrix.ranks[j]) {
                if a < b {
                    tally[i].0 += 1;
                    tally[j].1 += 1;
                } else if a > b {
                    tally[j].0 += 1;
                    tally[i].1 += 1;
                }
            }
        }
    }
    tally
}

#[cfg(test)]
#[path = "../../tests/src_inline/aggregation/mod.rs"]
mod tests;
