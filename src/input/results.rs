use std::path::Path;

use tracing::info;

use crate::error::{McdmError, Result};
use crate::input::decision::{KEY_COLUMN, NAME_COLUMN};
use crate::input::table::read_table;
use crate::model::matrix::Alternative;
use crate::model::ranking::MethodKind;

pub const RANK_COLUMN: &str = "Rank";

/// One previously exported method table, rows ordered by alternative key.
#[derive(Debug, Clone)]
pub struct RankedTable {
    pub method: String,
    pub alternatives: Vec<Alternative>,
    pub ranks: Vec<u32>,
}

/// Method label from a file name such as `sp500_forecasted_vikor_results.csv`.
pub fn method_label_from_path(path: &Path) -> String {
    let stem = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    for kind in MethodKind::ALL {
        let hit = stem
            .split(|c: char| !c.is_ascii_alphanumeric())
            .any(|token| token == kind.slug());
        if hit {
            return kind.label().to_string();
        }
    }
    stem.split('.').next().unwrap_or_default().to_string()
}

pub fn load_ranked_table(path: &Path) -> Result<RankedTable> {
    let table = read_table(path)?;
    let method = method_label_from_path(path);
    let stage = format!("{method} results");

    let key_col = table
        .column_index(KEY_COLUMN)
        .ok_or_else(|| McdmError::shape(&stage, format!("missing column {KEY_COLUMN}")))?;
    let name_col = table.column_index(NAME_COLUMN);
    let rank_col = table
        .column_index(RANK_COLUMN)
        .ok_or_else(|| McdmError::shape(&stage, format!("missing column {RANK_COLUMN}")))?;

    let mut rows = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let field = |idx: usize| row.fields.get(idx).map(String::as_str).unwrap_or("");
        let key = field(key_col).to_string();
        if key.is_empty() {
            return Err(McdmError::parse(path, row.line, "empty alternative key"));
        }
        let name = name_col.map(field).unwrap_or(key.as_str()).to_string();
        let raw = field(rank_col);
        let rank = raw
            .parse::<f64>()
            .ok()
            .filter(|r| r.is_finite() && *r >= 1.0 && *r <= u32::MAX as f64 && r.fract() == 0.0)
            .ok_or_else(|| {
                McdmError::parse(path, row.line, format!("{key}: '{raw}' is not a rank"))
            })? as u32;
        rows.push((Alternative::new(key, name), rank));
    }

    rows.sort_by(|a, b| a.0.key.cmp(&b.0.key));
    if let Some(w) = rows.windows(2).find(|w| w[0].0.key == w[1].0.key) {
        return Err(McdmError::shape(
            &stage,
            format!("duplicate alternative {}", w[0].0.key),
        ));
    }

    info!("loaded {} ranks from {}", rows.len(), path.display());
    let (alternatives, ranks) = rows.into_iter().unzip();
    Ok(RankedTable {
        method,
        alternatives,
        ranks,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/results.rs"]
mod tests;
