use crate::error::{McdmError, Result};
use crate::methods::{checked_inputs, finish};
use crate::model::criteria::{CriteriaProfile, Polarity};
use crate::model::matrix::DecisionMatrix;
use crate::model::ranking::{Direction, MethodKind, MethodResult, ScoreColumn};
use crate::pipeline::stage2_normalize::{
    apply_weights, column_max, column_min, euclidean_distance, vector_normalize,
};

pub fn topsis(matrix: &DecisionMatrix, profile: &CriteriaProfile) -> Result<MethodResult> {
    let kind = MethodKind::Topsis;
    let (weights, polarities) = checked_inputs(kind, matrix, profile)?;

    let weighted = apply_weights(&vector_normalize(&matrix.values), &weights);

    let mut ideal = Vec::with_capacity(polarities.len());
    let mut anti_ideal = Vec::with_capacity(polarities.len());
    for (j, polarity) in polarities.iter().enumerate() {
        let max = column_max(&weighted, j);
        let min = column_min(&weighted, j);
        match polarity {
            Polarity::Benefit => {
                ideal.push(max);
                anti_ideal.push(min);
            }
            Polarity::Cost => {
                ideal.push(min);
                anti_ideal.push(max);
            }
        }
    }

    let mut closeness = Vec::with_capacity(weighted.len());
    for (i, row) in weighted.iter().enumerate() {
        let d_best = euclidean_distance(row, &ideal);
        let d_worst = euclidean_distance(row, &anti_ideal);
        let denom = d_best + d_worst;
        if denom == 0.0 {
            return Err(McdmError::degenerate(
                kind.label(),
                format!(
                    "{} coincides with both the ideal and anti-ideal point",
                    matrix.alternatives[i].key
                ),
            ));
        }
        closeness.push(d_worst / denom);
    }

    finish(
        kind,
        matrix,
        vec![ScoreColumn {
            name: "TOPSIS Score",
            values: closeness,
        }],
        Direction::HigherIsBetter,
        None,
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/methods/topsis.rs"]
mod tests;
