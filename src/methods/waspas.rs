use crate::error::Result;
use crate::methods::{checked_inputs, finish};
use crate::model::criteria::CriteriaProfile;
use crate::model::matrix::DecisionMatrix;
use crate::model::ranking::{Direction, MethodKind, MethodResult, ScoreColumn};
use crate::pipeline::stage2_normalize::{LinearGuard, linear_normalize};

pub fn waspas(matrix: &DecisionMatrix, profile: &CriteriaProfile) -> Result<MethodResult> {
    let kind = MethodKind::Waspas;
    let (weights, polarities) = checked_inputs(kind, matrix, profile)?;

    let normalized = linear_normalize(&matrix.values, &polarities, LinearGuard::Clamped);

    let mut wsm = Vec::with_capacity(normalized.len());
    let mut wpm = Vec::with_capacity(normalized.len());
    for row in &normalized {
        let mut sum = 0.0;
        let mut product = 1.0;
        for (x, w) in row.iter().zip(&weights) {
            sum += x * w;
            product *= x.powf(*w);
        }
        wsm.push(sum);
        wpm.push(product);
    }

    let lambda = profile.lambda;
    let combined = wsm
        .iter()
        .zip(&wpm)
        .map(|(q1, q2)| lambda * q1 + (1.0 - lambda) * q2)
        .collect();

    finish(
        kind,
        matrix,
        vec![
            ScoreColumn {
                name: "WASPAS Score (W)",
                values: combined,
            },
            ScoreColumn {
                name: "WSM Score (Q1)",
                values: wsm,
            },
            ScoreColumn {
                name: "WPM Score (Q2)",
                values: wpm,
            },
        ],
        Direction::HigherIsBetter,
        None,
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/methods/waspas.rs"]
mod tests;
