use tracing::info;

use crate::aggregation::run_aggregation;
use crate::error::Result;
use crate::model::ranking::{AggregateResult, AggregationKind, RankingMatrix};

#[derive(Debug, Clone)]
pub struct Stage5Output {
    pub mean_rank: AggregateResult,
    pub borda: AggregateResult,
    pub copeland: AggregateResult,
}

impl Stage5Output {
    pub fn all(&self) -> [&AggregateResult; 3] {
        [&self.mean_rank, &self.borda, &self.copeland]
    }
}

pub fn run_stage5(matrix: &RankingMatrix) -> Result<Stage5Output> {
    let (mean_rank, (borda, copeland)) = rayon::join(
        || run_aggregation(AggregationKind::MeanRank, matrix),
        || {
            rayon::join(
                || run_aggregation(AggregationKind::Borda, matrix),
                || run_aggregation(AggregationKind::Copeland, matrix),
            )
        },
    );

    info!(
        "aggregated {} alternatives over {} methods",
        matrix.n_alternatives(),
        matrix.n_methods()
    );

    Ok(Stage5Output {
        mean_rank: mean_rank?,
        borda: borda?,
        copeland: copeland?,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_aggregate.rs"]
mod tests;
