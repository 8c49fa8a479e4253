use std::collections::HashSet;

use tracing::info;

use crate::error::{McdmError, Result};
use crate::input::RankedTable;
use crate::model::matrix::Alternative;
use crate::model::ranking::{MethodResult, RankingMatrix};

struct RankColumn<'a> {
    method: &'a str,
    alternatives: &'a [Alternative],
    ranks: &'a [u32],
}

pub fn collect_method_results(results: &[MethodResult]) -> Result<RankingMatrix> {
    let columns = results
        .iter()
        .map(|r| RankColumn {
            method: r.method.label(),
            alternatives: &r.alternatives,
            ranks: &r.ranks,
        })
        .collect::<Vec<_>>();
    assemble(&columns)
}

pub fn collect_ranked_tables(tables: &[RankedTable]) -> Result<RankingMatrix> {
    let columns = tables
        .iter()
        .map(|t| RankColumn {
            method: &t.method,
            alternatives: &t.alternatives,
            ranks: &t.ranks,
        })
        .collect::<Vec<_>>();
    assemble(&columns)
}

/// Every column must list the same alternatives in the same order as the first one.
fn assemble(columns: &[RankColumn<'_>]) -> Result<RankingMatrix> {
    let stage = "ranking collector";
    let first = columns
        .first()
        .ok_or_else(|| McdmError::shape(stage, "no method rankings to collect"))?;

    let reference = first
        .alternatives
        .iter()
        .map(|a| a.key.as_str())
        .collect::<HashSet<_>>();

    for col in columns {
        if col.ranks.len() != col.alternatives.len() {
            return Err(McdmError::shape(
                stage,
                format!(
                    "{} has {} ranks for {} alternatives",
                    col.method,
                    col.ranks.len(),
                    col.alternatives.len()
                ),
            ));
        }
        let keys = col
            .alternatives
            .iter()
            .map(|a| a.key.as_str())
            .collect::<HashSet<_>>();
        if let Some(missing) = first.alternatives.iter().find(|a| !keys.contains(a.key.as_str())) {
            return Err(McdmError::MissingAlternative {
                method: col.method.to_string(),
                key: missing.key.clone(),
            });
        }
        if let Some(extra) = col.alternatives.iter().find(|a| !reference.contains(a.key.as_str())) {
            return Err(McdmError::MissingAlternative {
                method: first.method.to_string(),
                key: extra.key.clone(),
            });
        }
        if col.alternatives.len() != first.alternatives.len() {
            return Err(McdmError::shape(
                stage,
                format!(
                    "{} lists {} rows, {} lists {}",
                    col.method,
                    col.alternatives.len(),
                    first.method,
                    first.alternatives.len()
                ),
            ));
        }
        let same_order = col
            .alternatives
            .iter()
            .zip(first.alternatives)
            .all(|(a, b)| a.key == b.key);
        if !same_order {
            return Err(McdmError::shape(
                stage,
                format!(
                    "{} orders alternatives differently from {}",
                    col.method, first.method
                ),
            ));
        }
        let mut sorted = col.ranks.to_vec();
        sorted.sort_unstable();
        if !sorted.iter().zip(1u32..).all(|(&r, expected)| r == expected) {
            return Err(McdmError::shape(
                stage,
                format!("{} ranks are not a permutation of 1..N", col.method),
            ));
        }
    }

    let mut labels = HashSet::with_capacity(columns.len());
    if let Some(dup) = columns.iter().find(|c| !labels.insert(c.method)) {
        return Err(McdmError::shape(
            stage,
            format!("method {} is listed more than once", dup.method),
        ));
    }

    let n = first.alternatives.len();
    let ranks = (0..n)
        .map(|i| columns.iter().map(|col| col.ranks[i]).collect())
        .collect();

    info!(
        "collected ranking matrix: {} alternatives x {} methods",
        n,
        columns.len()
    );
    Ok(RankingMatrix {
        alternatives: first.alternatives.to_vec(),
        methods: columns.iter().map(|c| c.method.to_string()).collect(),
        ranks,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_collect.rs"]
mod tests;
