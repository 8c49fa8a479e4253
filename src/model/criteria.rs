use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{McdmError, Result};

pub const DEFAULT_LAMBDA: f64 = 0.5;
pub const DEFAULT_VIKOR_V: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Benefit,
    Cost,
}

impl Polarity {
    pub fn as_str(self) -> &'static str {
        match self {
            Polarity::Benefit => "benefit",
            Polarity::Cost => "cost",
        }
    }
}

/// Which end of the VIKOR Q scale ranks first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VikorOrder {
    #[default]
    LowerIsBetter,
    HigherIsBetter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    pub weight: f64,
    pub polarity: Polarity,
}

/// Weights, polarities and method parameters shared by every engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriteriaProfile {
    pub criteria: Vec<Criterion>,
    #[serde(default = "default_lambda")]
    pub lambda: f64,
    #[serde(default = "default_vikor_v")]
    pub v: f64,
    #[serde(default)]
    pub vikor_order: VikorOrder,
}

fn default_lambda() -> f64 {
    DEFAULT_LAMBDA
}

fn default_vikor_v() -> f64 {
    DEFAULT_VIKOR_V
}

impl CriteriaProfile {
    pub fn new(criteria: Vec<Criterion>) -> Self {
        Self {
            criteria,
            lambda: DEFAULT_LAMBDA,
            v: DEFAULT_VIKOR_V,
            vikor_order: VikorOrder::default(),
        }
    }

    /// Eight-criterion stock profile: fundamentals first, then price-history indicators.
    pub fn default_v1() -> Self {
        let defaults: [(&str, f64, Polarity); 8] = [
            ("Revenuegrowth", 0.20, Polarity::Benefit),
            ("Ebitda", 0.15, Polarity::Benefit),
            ("Marketcap", 0.20, Polarity::Benefit),
            ("Weight", 0.10, Polarity::Benefit),
            ("Volatility", 0.15, Polarity::Cost),
            ("Average Close Price", 0.10, Polarity::Benefit),
            ("Return", 0.05, Polarity::Benefit),
            ("Average Volume", 0.05, Polarity::Benefit),
        ];
        Self::new(
            defaults.iter()
                .map(|&(name, weight, polarity)| Criterion {
                    name: name.to_string(),
                    weight,
                    polarity,
                })
                .collect(),
        )
    }

    pub fn from_parts(names: &[&str], weights: &[f64], polarities: &[Polarity]) -> Result<Self> {
        if names.len() != weights.len() || names.len() != polarities.len() {
            return Err(McdmError::shape(
                "profile",
                format!(
                    "{} criteria names, {} weights, {} polarities",
                    names.len(),
                    weights.len(),
                    polarities.len()
                ),
            ));
        }
        let criteria = names
            .iter()
            .zip(weights)
            .zip(polarities)
            .map(|((name, &weight), &polarity)| Criterion {
                name: name.to_string(),
                weight,
                polarity,
            })
            .collect();
        Ok(Self::new(criteria))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| McdmError::io(path, e))?;
        let profile: CriteriaProfile = serde_json::from_str(&text)?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn n_criteria(&self) -> usize {
        self.criteria.len()
    }

    pub fn names(&self) -> Vec<&str> {
        self.criteria.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn weights(&self) -> Vec<f64> {
        self.criteria.iter().map(|c| c.weight).collect()
    }

    pub fn polarities(&self) -> Vec<Polarity> {
        self.criteria.iter().map(|c| c.polarity).collect()
    }

    pub fn total_weight(&self) -> f64 {
        self.criteria.iter().map(|c| c.weight).sum()
    }

    /// Rescales raw weights to sum to one.
    pub fn normalized(&self) -> Result<Self> {
        self.validate_weights()?;
        let total = self.total_weight();
        let mut out = self.clone();
        for c in &mut out.criteria {
            c.weight /= total;
        }
        Ok(out)
    }

    pub fn validate(&self) -> Result<()> {
        if self.criteria.is_empty() {
            return Err(McdmError::Config("profile has no criteria".to_string()));
        }
        for (i, c) in self.criteria.iter().enumerate() {
            if c.name.trim().is_empty() {
                return Err(McdmError::Config(format!("criterion {} has an empty name", i + 1)));
            }
            if self.criteria[..i].iter().any(|prev| prev.name == c.name) {
                return Err(McdmError::Config(format!(
                    "criterion '{}' is listed twice",
                    c.name
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.lambda) {
            return Err(McdmError::Config(format!(
                "lambda must lie in [0, 1], got {}",
                self.lambda
            )));
        }
        if !(0.0..=1.0).contains(&self.v) {
            return Err(McdmError::Config(format!(
                "VIKOR v must lie in [0, 1], got {}",
                self.v
            )));
        }
        self.validate_weights()
    }

    fn validate_weights(&self) -> Result<()> {
        for c in &self.criteria {
            if !c.weight.is_finite() || c.weight < 0.0 {
                return Err(McdmError::shape(
                    "profile",
                    format!("weight for '{}' must be a nonnegative number, got {}", c.name, c.weight),
                ));
            }
        }
        if self.total_weight() <= 0.0 {
            return Err(McdmError::degenerate("profile", "total weight is zero"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/criteria.rs"]
mod tests;
