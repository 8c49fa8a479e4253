use crate::error::{McdmError, Result};
use crate::methods::{checked_inputs, finish};
use crate::model::criteria::{CriteriaProfile, VikorOrder};
use crate::model::matrix::DecisionMatrix;
use crate::model::ranking::{Direction, MethodKind, MethodResult, ScoreColumn};
use crate::pipeline::stage2_normalize::{LinearGuard, apply_weights, linear_normalize};

pub fn vikor(matrix: &DecisionMatrix, profile: &CriteriaProfile) -> Result<MethodResult> {
    let kind = MethodKind::Vikor;
    let (weights, polarities) = checked_inputs(kind, matrix, profile)?;

    let normalized = linear_normalize(&matrix.values, &polarities, LinearGuard::Clamped);
    let weighted = apply_weights(&normalized, &weights);

    let group_utility = weighted
        .iter()
        .map(|row| row.iter().sum::<f64>())
        .collect::<Vec<_>>();
    let regret = weighted
        .iter()
        .map(|row| row.iter().copied().fold(f64::NEG_INFINITY, f64::max))
        .collect::<Vec<_>>();

    let (s_min, s_max) = min_max(&group_utility);
    let (r_min, r_max) = min_max(&regret);
    if s_max == s_min {
        return Err(McdmError::degenerate(
            kind.label(),
            "group utility S has zero range",
        ));
    }
    if r_max == r_min {
        return Err(McdmError::degenerate(
            kind.label(),
            "individual regret R has zero range",
        ));
    }

    let v = profile.v;
    let q = group_utility
        .iter()
        .zip(&regret)
        .map(|(s, r)| v * (s - s_min) / (s_max - s_min) + (1.0 - v) * (r - r_min) / (r_max - r_min))
        .collect();

    let direction = match profile.vikor_order {
        VikorOrder::LowerIsBetter => Direction::LowerIsBetter,
        VikorOrder::HigherIsBetter => Direction::HigherIsBetter,
    };

    finish(
        kind,
        matrix,
        vec![
            ScoreColumn {
                name: "VIKOR Score (Q)",
                values: q,
            },
            ScoreColumn {
                name: "Group Utility (S)",
                values: group_utility,
            },
            ScoreColumn {
                name: "Individual Regret (R)",
                values: regret,
            },
        ],
        direction,
        None,
    )
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        })
}

#[cfg(test)]
#[path = "../../tests/src_inline/methods/vikor.rs"]
mod tests;
