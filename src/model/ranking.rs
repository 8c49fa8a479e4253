use std::cmp::Ordering;
use std::str::FromStr;

use crate::model::matrix::Alternative;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

/// Ranks 1..N by score. Equal scores keep their input order, so every rank is unique.
pub fn assign_ranks(scores: &[f64], direction: Direction) -> Vec<u32> {
    let mut order = (0..scores.len()).collect::<Vec<_>>();
    order.sort_by(|&a, &b| {
        let ord = scores[a]
            .partial_cmp(&scores[b])
            .unwrap_or(Ordering::Equal);
        match direction {
            Direction::LowerIsBetter => ord,
            Direction::HigherIsBetter => ord.reverse(),
        }
    });
    let mut ranks = vec![0u32; scores.len()];
    for (pos, idx) in order.into_iter().enumerate() {
        ranks[idx] = pos as u32 + 1;
    }
    ranks
}

/// Row indices ordered by rank.
pub fn rank_order(ranks: &[u32]) -> Vec<usize> {
    let mut order = (0..ranks.len()).collect::<Vec<_>>();
    order.sort_by_key(|&i| (ranks[i], i));
    order
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MethodKind {
    Topsis,
    Aras,
    Vikor,
    Copras,
    Waspas,
    Taxonomy,
}

impl MethodKind {
    pub const ALL: [MethodKind; 6] = [
        MethodKind::Topsis,
        MethodKind::Aras,
        MethodKind::Vikor,
        MethodKind::Copras,
        MethodKind::Waspas,
        MethodKind::Taxonomy,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MethodKind::Topsis => "TOPSIS",
            MethodKind::Aras => "ARAS",
            MethodKind::Vikor => "VIKOR",
            MethodKind::Copras => "COPRAS",
            MethodKind::Waspas => "WASPAS",
            MethodKind::Taxonomy => "TAXONOMY",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            MethodKind::Topsis => "topsis",
            MethodKind::Aras => "aras",
            MethodKind::Vikor => "vikor",
            MethodKind::Copras => "copras",
            MethodKind::Waspas => "waspas",
            MethodKind::Taxonomy => "taxonomy",
        }
    }
}

impl FromStr for MethodKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        MethodKind::ALL
            .into_iter()
            .find(|m| m.slug() == lower)
            .ok_or_else(|| {
                format!("unknown method '{s}' (use topsis|aras|vikor|copras|waspas|taxonomy)")
            })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreColumn {
    pub name: &'static str,
    pub values: Vec<f64>,
}

/// Intermediate matrices kept for inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostics {
    pub normalized: Vec<Vec<f64>>,
    pub ideal_point: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodResult {
    pub method: MethodKind,
    pub alternatives: Vec<Alternative>,
    /// First column is the one the ranking is derived from.
    pub scores: Vec<ScoreColumn>,
    pub ranks: Vec<u32>,
    pub diagnostics: Option<Diagnostics>,
}

impl MethodResult {
    pub fn primary_score(&self) -> &[f64] {
        &self.scores[0].values
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankingMatrix {
    pub alternatives: Vec<Alternative>,
    pub methods: Vec<String>,
    /// One row per alternative, one column per method.
    pub ranks: Vec<Vec<u32>>,
}

impl RankingMatrix {
    pub fn n_alternatives(&self) -> usize {
        self.alternatives.len()
    }

    pub fn n_methods(&self) -> usize {
        self.methods.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregationKind {
    MeanRank,
    Borda,
    Copeland,
}

impl AggregationKind {
    pub const ALL: [AggregationKind; 3] = [
        AggregationKind::MeanRank,
        AggregationKind::Borda,
        AggregationKind::Copeland,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AggregationKind::MeanRank => "Mean Rank",
            AggregationKind::Borda => "Borda",
            AggregationKind::Copeland => "Copeland",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            AggregationKind::MeanRank => "mean_rank",
            AggregationKind::Borda => "borda",
            AggregationKind::Copeland => "copeland",
        }
    }

    pub fn score_column(self) -> &'static str {
        match self {
            AggregationKind::MeanRank => "Mean Rank",
            AggregationKind::Borda => "Borda Score",
            AggregationKind::Copeland => "Copeland Score",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            AggregationKind::MeanRank => Direction::LowerIsBetter,
            AggregationKind::Borda | AggregationKind::Copeland => Direction::HigherIsBetter,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AggregateResult {
    pub kind: AggregationKind,
    pub alternatives: Vec<Alternative>,
    pub scores: Vec<f64>,
    pub ranks: Vec<u32>,
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/ranking.rs"]
mod tests;
