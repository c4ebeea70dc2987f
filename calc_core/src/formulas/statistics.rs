//! # Descriptive Statistics
//!
//! Summary statistics over a list of samples.

use serde::{Deserialize, Serialize};

/// One-pass-friendly summary of a data set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    pub median: f64,
    /// All values sharing the highest frequency; empty when every value is unique
    pub modes: Vec<f64>,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub population_variance: f64,
    pub population_std_dev: f64,
    /// `None` for a single sample
    pub sample_variance: Option<f64>,
    pub sample_std_dev: Option<f64>,
}

/// Summarize a non-empty data set. Returns `None` when `values` is empty.
///
/// # Example
/// ```rust
/// use calc_core::formulas::statistics::summarize;
///
/// let s = summarize(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert_eq!(s.mean, 5.0);
/// assert_eq!(s.population_std_dev, 2.0);
/// ```
pub fn summarize(values: &[f64]) -> Option<Summary> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let count = sorted.len();
    let n = count as f64;
    let sum: f64 = sorted.iter().sum();
    let mean = sum / n;

    let median = if count % 2 == 0 {
        (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
    } else {
        sorted[count / 2]
    };

    let squared_deviations: f64 = sorted.iter().map(|x| (x - mean) * (x - mean)).sum();
    let population_variance = squared_deviations / n;
    let sample_variance = (count > 1).then(|| squared_deviations / (n - 1.0));

    let min = sorted[0];
    let max = sorted[count - 1];

    Some(Summary {
        count,
        sum,
        mean,
        median,
        modes: modes(&sorted),
        min,
        max,
        range: max - min,
        population_variance,
        population_std_dev: population_variance.sqrt(),
        sample_variance,
        sample_std_dev: sample_variance.map(f64::sqrt),
    })
}

/// Most frequent values of an already-sorted slice.
fn modes(sorted: &[f64]) -> Vec<f64> {
    let mut runs: Vec<(f64, usize)> = Vec::new();
    for &value in sorted {
        match runs.last_mut() {
            Some((last, count)) if *last == value => *count += 1,
            _ => runs.push((value, 1)),
        }
    }

    let best = runs.iter().map(|&(_, c)| c).max().unwrap_or(0);
    if best <= 1 {
        return Vec::new();
    }
    runs.into_iter()
        .filter(|&(_, c)| c == best)
        .map(|(v, _)| v)
        .collect()
}

/// Parse a list of numbers separated by commas, semicolons or whitespace.
///
/// Tokens that are not numbers are skipped; the second element lists them.
pub fn parse_values(text: &str) -> (Vec<f64>, Vec<String>) {
    let mut values = Vec::new();
    let mut rejected = Vec::new();
    for token in text
        .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        match token.parse::<f64>() {
            Ok(v) if v.is_finite() => values.push(v),
            _ => rejected.push(token.to_string()),
        }
    }
    (values, rejected)
}
