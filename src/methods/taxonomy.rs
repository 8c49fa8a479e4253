use crate::error::Result;
use crate::methods::{checked_inputs, finish};
use crate::model::criteria::CriteriaProfile;
use crate::model::matrix::DecisionMatrix;
use crate::model::ranking::{Diagnostics, Direction, MethodKind, MethodResult, ScoreColumn};
use crate::pipeline::stage2_normalize::{
    LinearGuard, apply_weights, column_max, euclidean_distance, linear_normalize,
};

pub fn taxonomy(matrix: &DecisionMatrix, profile: &CriteriaProfile) -> Result<MethodResult> {
    let kind = MethodKind::Taxonomy;
    let (weights, polarities) = checked_inputs(kind, matrix, profile)?;

    let normalized = linear_normalize(&matrix.values, &polarities, LinearGuard::Offset);
    let weighted = apply_weights(&normalized, &weights);

    // Ideal point is the column-wise max regardless of polarity; cost columns are already inverted.
    let ideal_point = (0..weights.len())
        .map(|j| column_max(&weighted, j))
        .collect::<Vec<_>>();

    let distances = weighted
        .iter()
        .map(|row| euclidean_distance(row, &ideal_point))
        .collect();

    finish(
        kind,
        matrix,
        vec![ScoreColumn {
            name: "Distance",
            values: distances,
        }],
        Direction::LowerIsBetter,
        Some(Diagnostics {
            normalized,
            ideal_point,
        }),
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/methods/taxonomy.rs"]
mod tests;
