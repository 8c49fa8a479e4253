use crate::error::Result;
use crate::methods::{checked_inputs, finish};
use crate::model::criteria::{CriteriaProfile, Polarity};
use crate::model::matrix::DecisionMatrix;
use crate::model::ranking::{Direction, MethodKind, MethodResult, ScoreColumn};
use crate::pipeline::stage2_normalize::{
    EPSILON, apply_weights, column_max, column_min, standardize,
};

pub fn aras(matrix: &DecisionMatrix, profile: &CriteriaProfile) -> Result<MethodResult> {
    let kind = MethodKind::Aras;
    let (weights, polarities) = checked_inputs(kind, matrix, profile)?;

    let weighted = apply_weights(&standardize(&matrix.values), &weights);

    let ideal = polarities
        .iter()
        .enumerate()
        .map(|(j, polarity)| {
            let best = match polarity {
                Polarity::Benefit => column_max(&weighted, j),
                Polarity::Cost => column_min(&weighted, j),
            };
            if best == 0.0 { EPSILON } else { best }
        })
        .collect::<Vec<_>>();

    let utility = weighted
        .iter()
        .map(|row| row.iter().zip(&ideal).map(|(x, best)| x / best).sum())
        .collect();

    finish(
        kind,
        matrix,
        vec![ScoreColumn {
            name: "ARAS Score",
            values: utility,
        }],
        Direction::HigherIsBetter,
        None,
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/methods/aras.rs"]
mod tests;
