//! Softmax parent selection.
//!
//! Fitness values become selection probabilities through a numerically
//! stable softmax, `p_i = exp(f_i - max f) / Σ exp(f_j - max f)`. Sampling
//! uses a cumulative distribution and a linear scan, which is fine for
//! populations in the hundreds.

use rand::Rng;

/// Softmax of a fitness vector.
///
/// Subtracts the maximum before exponentiating. If the normalizer is not a
/// positive finite number, returns the uniform distribution instead.
/// An empty input yields an empty output.
pub fn softmax(fitness: &[f64]) -> Vec<f64> {
    if fitness.is_empty() {
        return Vec::new();
    }

    let max = fitness.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = fitness.iter().map(|f| (f - max).exp()).collect();
    let total: f64 = exps.iter().sum();

    if !(total > 0.0 && total.is_finite()) {
        let n = fitness.len();
        return vec![1.0 / n as f64; n];
    }

    exps.into_iter().map(|e| e / total).collect()
}

/// Cumulative selection distribution built from one generation's fitness.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionCdf {
    cdf: Vec<f64>,
}

impl SelectionCdf {
    /// Builds the CDF from softmax probabilities.
    ///
    /// The final entry is clamped to exactly 1.0.
    ///
    /// # Panics
    /// If `fitness` is empty.
    pub fn from_fitness(fitness: &[f64]) -> Self {
        assert!(!fitness.is_empty(), "cannot select from an empty population");

        let mut cumulative = 0.0;
        let mut cdf: Vec<f64> = softmax(fitness)
            .into_iter()
            .map(|p| {
                cumulative += p;
                cumulative
            })
            .collect();
        if let Some(last) = cdf.last_mut() {
            *last = 1.0;
        }
        Self { cdf }
    }

    /// Draws one index: the first whose cumulative value is ≥ a uniform
    /// draw in [0, 1). Consumes exactly one random number.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        let r: f64 = rng.random();
        self.cdf
            .iter()
            .position(|&threshold| r <= threshold)
            .unwrap_or(self.cdf.len() - 1)
    }

    /// Per-index selection probabilities recovered from the CDF.
    pub fn probabilities(&self) -> Vec<f64> {
        let mut prev = 0.0;
        self.cdf
            .iter()
            .map(|&c| {
                let p = c - prev;
                prev = c;
                p
            })
            .collect()
    }

    /// The cumulative values.
    pub fn as_slice(&self) -> &[f64] {
        &self.cdf
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.cdf.len()
    }

    /// Always false; an empty CDF cannot be built.
    pub fn is_empty(&self) -> bool {
        self.cdf.is_empty()
    }
}
