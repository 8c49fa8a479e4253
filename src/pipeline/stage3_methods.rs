use rayon::prelude::*;
use tracing::{info, warn};

use crate::error::McdmError;
use crate::methods::run_method;
use crate::model::criteria::CriteriaProfile;
use crate::model::matrix::DecisionMatrix;
use crate::model::ranking::{MethodKind, MethodResult};

#[derive(Debug)]
pub struct MethodFailure {
    pub method: MethodKind,
    pub error: McdmError,
}

#[derive(Debug)]
pub struct Stage3Output {
    /// Successful results in the requested method order.
    pub results: Vec<MethodResult>,
    pub failures: Vec<MethodFailure>,
}

impl Stage3Output {
    pub fn result(&self, method: MethodKind) -> Option<&MethodResult> {
        self.results.iter().find(|r| r.method == method)
    }
}

/// Runs every requested engine; a failing engine is recorded and the rest still complete.
pub fn run_stage3(
    matrix: &DecisionMatrix,
    profile: &CriteriaProfile,
    methods: &[MethodKind],
) -> Stage3Output {
    let outcomes = methods
        .par_iter()
        .map(|&method| (method, run_method(method, matrix, profile)))
        .collect::<Vec<_>>();

    let mut results = Vec::with_capacity(outcomes.len());
    let mut failures = Vec::new();
    for (method, outcome) in outcomes {
        match outcome {
            Ok(result) => {
                info!("{} ranked {} alternatives", method.label(), result.ranks.len());
                results.push(result);
            }
            Err(error) => {
                warn!("{} failed: {}", method.label(), error);
                failures.push(MethodFailure { method, error });
            }
        }
    }

    Stage3Output { results, failures }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_methods.rs"]
mod tests;
