use crate::error::{McdmError, Result};
use crate::methods::{checked_inputs, finish};
use crate::model::criteria::{CriteriaProfile, Polarity};
use crate::model::matrix::DecisionMatrix;
use crate::model::ranking::{Direction, MethodKind, MethodResult, ScoreColumn};
use crate::pipeline::stage2_normalize::{apply_weights, sum_normalize};

pub fn copras(matrix: &DecisionMatrix, profile: &CriteriaProfile) -> Result<MethodResult> {
    let kind = MethodKind::Copras;
    let (weights, polarities) = checked_inputs(kind, matrix, profile)?;

    let normalized = sum_normalize(&matrix.values, kind.label(), &matrix.criteria)?;
    let weighted = apply_weights(&normalized, &weights);

    // R_i = S+_i - S-_i
    let significance = weighted
        .iter()
        .map(|row| {
            row.iter()
                .zip(&polarities)
                .map(|(x, polarity)| match polarity {
                    Polarity::Benefit => *x,
                    Polarity::Cost => -*x,
                })
                .sum::<f64>()
        })
        .collect::<Vec<_>>();

    let max_r = significance
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    if max_r == 0.0 {
        return Err(McdmError::degenerate(
            kind.label(),
            "maximum relative significance is zero",
        ));
    }

    let utility = significance.iter().map(|r| r / max_r * 100.0).collect();

    finish(
        kind,
        matrix,
        vec![ScoreColumn {
            name: "Utility Score (Q)",
            values: utility,
        }],
        Direction::HigherIsBetter,
        None,
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/methods/copras.rs"]
mod tests;
