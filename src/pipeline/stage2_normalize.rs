use crate::error::{McdmError, Result};
use crate::model::criteria::Polarity;

/// Substituted for zero denominators and zero ideals.
pub const EPSILON: f64 = 1e-10;

pub type Matrix = Vec<Vec<f64>>;

/// Epsilon handling for the max/min linear scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinearGuard {
    /// Benefit divides by `max(col)`, or eps when that max is zero; cost uses `max(min, eps) / x`, and `x <= eps` maps to 1.
    Clamped,
    /// Benefit divides by `max + eps`; cost uses `min / (x + eps)`, or 1 when the column is constant.
    Offset,
}

pub fn column_max(values: &[Vec<f64>], j: usize) -> f64 {
    values
        .iter()
        .map(|row| row[j])
        .fold(f64::NEG_INFINITY, f64::max)
}

pub fn column_min(values: &[Vec<f64>], j: usize) -> f64 {
    values.iter().map(|row| row[j]).fold(f64::INFINITY, f64::min)
}

fn n_cols(values: &[Vec<f64>]) -> usize {
    values.first().map(|r| r.len()).unwrap_or(0)
}

/// `x / sqrt(sum x^2)` per column.
pub fn vector_normalize(values: &[Vec<f64>]) -> Matrix {
    let m = n_cols(values);
    let mut norms = vec![0.0f64; m];
    for row in values {
        for (j, &x) in row.iter().enumerate() {
            norms[j] += x * x;
        }
    }
    for norm in &mut norms {
        *norm = norm.sqrt();
        if *norm == 0.0 {
            *norm = EPSILON;
        }
    }
    values
        .iter()
        .map(|row| row.iter().zip(&norms).map(|(x, n)| x / n).collect())
        .collect()
}

/// `x / sum x` per column. A zero column sum cannot be scaled.
pub fn sum_normalize(values: &[Vec<f64>], method: &str, criteria: &[String]) -> Result<Matrix> {
    let m = n_cols(values);
    let mut sums = vec![0.0f64; m];
    for row in values {
        for (j, &x) in row.iter().enumerate() {
            sums[j] += x;
        }
    }
    if let Some(j) = sums.iter().position(|&s| s == 0.0) {
        let name = criteria.get(j).map(String::as_str).unwrap_or("?");
        return Err(McdmError::degenerate(
            method,
            format!("column {name} sums to zero"),
        ));
    }
    Ok(values
        .iter()
        .map(|row| row.iter().zip(&sums).map(|(x, s)| x / s).collect())
        .collect())
}

/// Z-score with population standard deviation. Constant columns become zeros.
pub fn standardize(values: &[Vec<f64>]) -> Matrix {
    let n = values.len();
    let m = n_cols(values);
    if n == 0 {
        return Vec::new();
    }
    let mut mean = vec![0.0f64; m];
    for row in values {
        for (j, &x) in row.iter().enumerate() {
            mean[j] += x;
        }
    }
    for mu in &mut mean {
        *mu /= n as f64;
    }
    let mut std = vec![0.0f64; m];
    for row in values {
        for (j, &x) in row.iter().enumerate() {
            let d = x - mean[j];
            std[j] += d * d;
        }
    }
    for s in &mut std {
        *s = (*s / n as f64).sqrt();
        if *s == 0.0 {
            *s = 1.0;
        }
    }
    values
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(j, &x)| (x - mean[j]) / std[j])
                .collect()
        })
        .collect()
}

/// Benefit columns `x / max`, cost columns `min / x`.
pub fn linear_normalize(values: &[Vec<f64>], polarities: &[Polarity], guard: LinearGuard) -> Matrix {
    let m = n_cols(values);
    let mut out: Matrix = vec![vec![0.0; m]; values.len()];
    for (j, polarity) in polarities.iter().enumerate().take(m) {
        let max = column_max(values, j);
        let min = column_min(values, j);
        for (i, row) in values.iter().enumerate() {
            let x = row[j];
            out[i][j] = match (polarity, guard) {
                (Polarity::Benefit, LinearGuard::Clamped) => {
                    if max.abs() < EPSILON {
                        x / EPSILON
                    } else {
                        x / max
                    }
                }
                (Polarity::Benefit, LinearGuard::Offset) => x / (max + EPSILON),
                (Polarity::Cost, LinearGuard::Clamped) => {
                    if x <= EPSILON {
                        1.0
                    } else {
                        min.max(EPSILON) / x
                    }
                }
                (Polarity::Cost, LinearGuard::Offset) => {
                    if max - min > 0.0 {
                        min / (x + EPSILON)
                    } else {
                        1.0
                    }
                }
            };
        }
    }
    out
}

pub fn apply_weights(values: &[Vec<f64>], weights: &[f64]) -> Matrix {
    values
        .iter()
        .map(|row| row.iter().zip(weights).map(|(x, w)| x * w).collect())
        .collect()
}

pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_normalize.rs"]
mod tests;
