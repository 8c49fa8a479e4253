use std::collections::HashSet;

use crate::error::{McdmError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alternative {
    pub key: String,
    pub name: String,
}

impl Alternative {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
        }
    }
}

/// Alternatives x criteria table of finite values, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionMatrix {
    pub criteria: Vec<String>,
    pub alternatives: Vec<Alternative>,
    pub values: Vec<Vec<f64>>,
}

impl DecisionMatrix {
    pub fn new(
        criteria: Vec<String>,
        alternatives: Vec<Alternative>,
        values: Vec<Vec<f64>>,
    ) -> Result<Self> {
        if alternatives.len() != values.len() {
            return Err(McdmError::shape(
                "decision matrix",
                format!(
                    "{} alternatives but {} value rows",
                    alternatives.len(),
                    values.len()
                ),
            ));
        }
        let mut seen = HashSet::with_capacity(alternatives.len());
        for (alt, row) in alternatives.iter().zip(&values) {
            if !seen.insert(alt.key.as_str()) {
                return Err(McdmError::shape(
                    "decision matrix",
                    format!("duplicate alternative key {}", alt.key),
                ));
            }
            if row.len() != criteria.len() {
                return Err(McdmError::shape(
                    "decision matrix",
                    format!(
                        "alternative {} has {} values, expected {}",
                        alt.key,
                        row.len(),
                        criteria.len()
                    ),
                ));
            }
            if let Some(j) = row.iter().position(|v| !v.is_finite()) {
                return Err(McdmError::shape(
                    "decision matrix",
                    format!(
                        "alternative {} has a non-finite value for {}",
                        alt.key, criteria[j]
                    ),
                ));
            }
        }
        Ok(Self {
            criteria,
            alternatives,
            values,
        })
    }

    /// Unnamed alternatives `A1..An` and criteria `C1..Cm`.
    pub fn from_rows(values: Vec<Vec<f64>>) -> Result<Self> {
        let n_criteria = values.first().map(|r| r.len()).unwrap_or(0);
        let criteria = (1..=n_criteria).map(|j| format!("C{j}")).collect();
        let alternatives = (1..=values.len())
            .map(|i| Alternative::new(format!("A{i}"), format!("Alternative {i}")))
            .collect();
        Self::new(criteria, alternatives, values)
    }

    pub fn n_alternatives(&self) -> usize {
        self.alternatives.len()
    }

    pub fn n_criteria(&self) -> usize {
        self.criteria.len()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/matrix.rs"]
mod tests;
