//! GA configuration.

use serde::{Deserialize, Serialize};

use crate::error::TimetableError;

/// Configuration for the timetabling GA.
///
/// Every field has a default, so a partial JSON object deserializes into a
/// complete configuration.
///
/// # Examples
///
/// ```
/// use u_timetable::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(100)
///     .with_max_generations(200)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Number of schedules per generation.
    pub population_size: usize,

    /// Initial per-field mutation probability.
    pub mutation_rate: f64,

    /// Floor the adaptive mutation rate never drops below.
    pub min_mutation_rate: f64,

    /// Generations that must complete before convergence is tested.
    pub min_generations: usize,

    /// Hard cap on generations.
    pub max_generations: usize,

    /// Convergence threshold on |average-fitness improvement|, in percent.
    pub improvement_threshold: f64,

    /// Generations between adaptive mutation-rate checks.
    pub mutation_halve_interval: usize,

    /// Random seed. The same seed and parameters reproduce a run exactly.
    pub seed: u64,

    /// Whether to evaluate each population in parallel using rayon.
    /// Results are identical either way.
    pub parallel: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 300,
            mutation_rate: 0.01,
            min_mutation_rate: 0.001,
            min_generations: 100,
            max_generations: 500,
            improvement_threshold: 1.0,
            mutation_halve_interval: 10,
            seed: 42,
            parallel: true,
        }
    }
}

impl GaConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    pub fn with_min_mutation_rate(mut self, rate: f64) -> Self {
        self.min_mutation_rate = rate;
        self
    }

    pub fn with_min_generations(mut self, n: usize) -> Self {
        self.min_generations = n;
        self
    }

    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    pub fn with_improvement_threshold(mut self, percent: f64) -> Self {
        self.improvement_threshold = percent;
        self
    }

    pub fn with_mutation_halve_interval(mut self, n: usize) -> Self {
        self.mutation_halve_interval = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), TimetableError> {
        let invalid = |msg: String| Err(TimetableError::InvalidConfig(msg));

        if self.population_size == 0 {
            return invalid("population_size must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return invalid(format!(
                "mutation_rate ({}) must be within [0, 1]",
                self.mutation_rate
            ));
        }
        if !(0.0..=1.0).contains(&self.min_mutation_rate) {
            return invalid(format!(
                "min_mutation_rate ({}) must be within [0, 1]",
                self.min_mutation_rate
            ));
        }
        if self.max_generations == 0 {
            return invalid("max_generations must be at least 1".into());
        }
        if self.min_generations > self.max_generations {
            return invalid(format!(
                "min_generations ({}) must not exceed max_generations ({})",
                self.min_generations, self.max_generations
            ));
        }
        if !self.improvement_threshold.is_finite() || self.improvement_threshold < 0.0 {
            return invalid(format!(
                "improvement_threshold ({}) must be a non-negative number",
                self.improvement_threshold
            ));
        }
        if self.mutation_halve_interval == 0 {
            return invalid("mutation_halve_interval must be at least 1".into());
        }
        Ok(())
    }
}
