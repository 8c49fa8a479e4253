use std::collections::HashSet;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{McdmError, Result};
use crate::input::table::{Table, read_table};
use crate::model::criteria::CriteriaProfile;
use crate::model::matrix::{Alternative, DecisionMatrix};

pub const KEY_COLUMN: &str = "Symbol";
pub const NAME_COLUMN: &str = "Shortname";

pub fn load_decision_matrix(path: &Path, profile: &CriteriaProfile) -> Result<DecisionMatrix> {
    let table = read_table(path)?;
    let matrix = decision_matrix_from_table(&table, profile, path)?;
    info!(
        "loaded decision matrix {}: {} alternatives x {} criteria",
        path.display(),
        matrix.n_alternatives(),
        matrix.n_criteria()
    );
    Ok(matrix)
}

/// Picks the identity columns and every profile criterion by name.
pub fn decision_matrix_from_table(
    table: &Table,
    profile: &CriteriaProfile,
    path: &Path,
) -> Result<DecisionMatrix> {
    let stage = "decision matrix schema";
    let key_col = table
        .column_index(KEY_COLUMN)
        .ok_or_else(|| McdmError::shape(stage, format!("missing column {KEY_COLUMN}")))?;
    let name_col = table.column_index(NAME_COLUMN);
    if name_col.is_none() {
        warn!("{} has no {} column; using symbols as names", path.display(), NAME_COLUMN);
    }

    let mut criterion_cols = Vec::with_capacity(profile.n_criteria());
    for name in profile.names() {
        let idx = table
            .column_index(name)
            .ok_or_else(|| McdmError::shape(stage, format!("missing criterion column '{name}'")))?;
        criterion_cols.push(idx);
    }

    let used: HashSet<usize> = criterion_cols
        .iter()
        .copied()
        .chain([key_col])
        .chain(name_col)
        .collect();
    let ignored = table
        .header
        .iter()
        .enumerate()
        .filter(|(i, _)| !used.contains(i))
        .map(|(_, h)| h.as_str())
        .collect::<Vec<_>>();
    if !ignored.is_empty() {
        warn!("ignoring columns not in the criteria profile: {}", ignored.join(", "));
    }

    let mut alternatives = Vec::with_capacity(table.rows.len());
    let mut values = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let field = |idx: usize| row.fields.get(idx).map(String::as_str).unwrap_or("");
        let key = field(key_col);
        if key.is_empty() {
            return Err(McdmError::parse(path, row.line, "empty alternative key"));
        }
        let name = name_col.map(field).unwrap_or(key);

        let mut row_values = Vec::with_capacity(criterion_cols.len());
        for (&idx, criterion) in criterion_cols.iter().zip(&profile.criteria) {
            let raw = field(idx);
            let value = raw.parse::<f64>().ok().filter(|v| v.is_finite()).ok_or_else(|| {
                McdmError::parse(
                    path,
                    row.line,
                    format!("{key}: '{raw}' is not a finite number for {}", criterion.name),
                )
            })?;
            row_values.push(value);
        }
        alternatives.push(Alternative::new(key, name));
        values.push(row_values);
    }

    DecisionMatrix::new(
        profile.names().into_iter().map(str::to_string).collect(),
        alternatives,
        values,
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/decision.rs"]
mod tests;
