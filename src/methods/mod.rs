pub mod aras;
pub mod copras;
pub mod taxonomy;
pub mod topsis;
pub mod vikor;
pub mod waspas;

use crate::error::{McdmError, Result};
use crate::model::criteria::{CriteriaProfile, Polarity};
use crate::model::matrix::DecisionMatrix;
use crate::model::ranking::{
    Diagnostics, Direction, MethodKind, MethodResult, ScoreColumn, assign_ranks,
};

pub fn run_method(
    kind: MethodKind,
    matrix: &DecisionMatrix,
    profile: &CriteriaProfile,
) -> Result<MethodResult> {
    match kind {
        MethodKind::Topsis => topsis::topsis(matrix, profile),
        MethodKind::Aras => aras::aras(matrix, profile),
        MethodKind::Vikor => vikor::vikor(matrix, profile),
        MethodKind::Copras => copras::copras(matrix, profile),
        MethodKind::Waspas => waspas::waspas(matrix, profile),
        MethodKind::Taxonomy => taxonomy::taxonomy(matrix, profile),
    }
}

/// Weights and polarities after checking them against the matrix.
pub(crate) fn checked_inputs(
    kind: MethodKind,
    matrix: &DecisionMatrix,
    profile: &CriteriaProfile,
) -> Result<(Vec<f64>, Vec<Polarity>)> {
    let stage = kind.label();
    if matrix.n_alternatives() == 0 {
        return Err(McdmError::shape(stage, "decision matrix has no alternatives"));
    }
    if profile.n_criteria() != matrix.n_criteria() {
        return Err(McdmError::shape(
            stage,
            format!(
                "decision matrix has {} criteria but profile defines {}",
                matrix.n_criteria(),
                profile.n_criteria()
            ),
        ));
    }
    for (j, c) in profile.criteria.iter().enumerate() {
        if matrix.criteria[j] != c.name {
            return Err(McdmError::shape(
                stage,
                format!(
                    "criterion {} is '{}' in the matrix but '{}' in the profile",
                    j + 1,
                    matrix.criteria[j],
                    c.name
                ),
            ));
        }
        if !c.weight.is_finite() || c.weight < 0.0 {
            return Err(McdmError::shape(
                stage,
                format!("weight for '{}' is {}", c.name, c.weight),
            ));
        }
    }
    if profile.total_weight() <= 0.0 {
        return Err(McdmError::degenerate(stage, "total weight is zero"));
    }
    Ok((profile.weights(), profile.polarities()))
}

pub(crate) fn finish(
    kind: MethodKind,
    matrix: &DecisionMatrix,
    scores: Vec<ScoreColumn>,
    direction: Direction,
    diagnostics: Option<Diagnostics>,
) -> Result<MethodResult> {
    for col in &scores {
        if let Some(i) = col.values.iter().position(|v| !v.is_finite()) {
            return Err(McdmError::degenerate(
                kind.label(),
                format!(
                    "{} is not finite for {}",
                    col.name, matrix.alternatives[i].key
                ),
            ));
        }
    }
    let ranks = assign_ranks(&scores[0].values, direction);
    Ok(MethodResult {
        method: kind,
        alternatives: matrix.alternatives.clone(),
        scores,
        ranks,
        diagnostics,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/methods/mod.rs"]
mod tests;
