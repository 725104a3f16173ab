//! Generational evolution controller.
//!
//! Runs the GA loop over a [`TimetableProblem`]:
//!
//! ```text
//! Initializing → Evaluating ⇄ Breeding
//!                    ↓
//!     Converged | MaxGenerationsReached → Done
//! ```
//!
//! Each generation is scored once, summarized into a [`GenerationRecord`],
//! and then either ends the run or is replaced wholesale by softmax-selected,
//! crossed and mutated children (no elitism). The mutation rate halves when
//! the population average keeps rising between checkpoints, down to a floor.
//!
//! # Reference
//! Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//! Machine Learning", Ch. 3

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use super::config::GaConfig;
use super::observer::{GenerationObserver, LogObserver};
use super::problem::TimetableProblem;
use super::selection::SelectionCdf;
use crate::error::TimetableError;
use crate::models::Schedule;

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EvolutionPhase {
    /// Building the random initial population.
    Initializing,
    /// Scoring and summarizing the current population.
    Evaluating,
    /// Producing the next population.
    Breeding,
    /// Stopped because the average stopped improving.
    Converged,
    /// Stopped at the generation cap.
    MaxGenerationsReached,
    /// Result assembled.
    Done,
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StopReason {
    /// |improvement| fell below the threshold after `min_generations`.
    Converged,
    /// `max_generations` generations were evaluated.
    MaxGenerationsReached,
}

impl From<StopReason> for EvolutionPhase {
    fn from(reason: StopReason) -> Self {
        match reason {
            StopReason::Converged => EvolutionPhase::Converged,
            StopReason::MaxGenerationsReached => EvolutionPhase::MaxGenerationsReached,
        }
    }
}

/// Summary of one evaluated generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRecord {
    /// 0-based generation index.
    pub generation: usize,
    /// Highest fitness in the population.
    pub best: f64,
    /// Mean fitness of the population.
    pub avg: f64,
    /// Lowest fitness in the population.
    pub worst: f64,
    /// Change of `avg` relative to the previous generation, in percent.
    pub improvement_percent: f64,
    /// Mutation rate used to breed this generation's children.
    pub mutation_rate: f64,
}

/// Outcome of a GA run.
#[derive(Debug, Clone, Serialize)]
pub struct GaResult {
    /// Fittest schedule of the final population (first one on ties).
    pub best_schedule: Schedule,
    /// Its fitness.
    pub best_fitness: f64,
    /// One record per evaluated generation.
    pub history: Vec<GenerationRecord>,
    /// Why the run stopped.
    pub stop_reason: StopReason,
    /// Number of evaluated generations (`history.len()`).
    pub generations: usize,
}

/// Relative change of the population average, in percent.
///
/// Defined as 100 for the first generation or when the previous average
/// is (numerically) zero.
pub fn improvement_percent(prev_avg: Option<f64>, avg: f64) -> f64 {
    match prev_avg {
        Some(prev) if prev.abs() >= 1e-9 => (avg - prev) / prev.abs() * 100.0,
        _ => 100.0,
    }
}

/// Index and value of the first maximum.
fn first_max(fitness: &[f64]) -> (usize, f64) {
    let mut best = (0, fitness[0]);
    for (i, &f) in fitness.iter().enumerate().skip(1) {
        if f > best.1 {
            best = (i, f);
        }
    }
    best
}

/// Runs the timetabling GA.
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA, reporting progress through [`LogObserver`].
    ///
    /// # Errors
    /// [`TimetableError::InvalidConfig`] if `config` fails validation.
    pub fn run(
        problem: &TimetableProblem<'_>,
        config: &GaConfig,
    ) -> Result<GaResult, TimetableError> {
        Self::run_with_observer(problem, config, &mut LogObserver::default())
    }

    /// Runs the GA, reporting progress through `observer`.
    pub fn run_with_observer<O: GenerationObserver + ?Sized>(
        problem: &TimetableProblem<'_>,
        config: &GaConfig,
        observer: &mut O,
    ) -> Result<GaResult, TimetableError> {
        config.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut rate = config.mutation_rate;
        let mut prev_avg: Option<f64> = None;
        let mut checkpoint_avg: Option<f64> = None;
        let mut history = Vec::new();

        observer.on_phase(EvolutionPhase::Initializing, 0);
        let mut population = problem.initialize_population(config.population_size, &mut rng);
        let mut fitness = problem.evaluate_population(&population, config.parallel);

        let mut generation = 0;
        let stop_reason = loop {
            observer.on_phase(EvolutionPhase::Evaluating, generation);

            let best = fitness.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let worst = fitness.iter().copied().fold(f64::INFINITY, f64::min);
            let avg = fitness.iter().sum::<f64>() / fitness.len() as f64;
            let improvement = improvement_percent(prev_avg, avg);

            let record = GenerationRecord {
                generation,
                best,
                avg,
                worst,
                improvement_percent: improvement,
                mutation_rate: rate,
            };
            observer.on_generation(&record);
            history.push(record);

            if generation > 0 && generation % config.mutation_halve_interval == 0 {
                if let Some(checkpoint) = checkpoint_avg {
                    if avg > checkpoint && rate > config.min_mutation_rate {
                        let old = rate;
                        rate = (rate / 2.0).max(config.min_mutation_rate);
                        observer.on_mutation_rate_change(generation, old, rate);
                    }
                }
                checkpoint_avg = Some(avg);
            }

            if generation + 1 >= config.min_generations
                && improvement.abs() < config.improvement_threshold
            {
                break StopReason::Converged;
            }
            if generation + 1 >= config.max_generations {
                break StopReason::MaxGenerationsReached;
            }

            observer.on_phase(EvolutionPhase::Breeding, generation);
            population = Self::breed(problem, &population, &fitness, config, rate, &mut rng);
            fitness = problem.evaluate_population(&population, config.parallel);
            prev_avg = Some(avg);
            generation += 1;
        };

        observer.on_phase(stop_reason.into(), generation);

        let (best_index, best_fitness) = first_max(&fitness);
        let best_schedule = population.swap_remove(best_index);
        let generations = history.len();
        observer.on_finish(stop_reason, generations);
        observer.on_phase(EvolutionPhase::Done, generation);

        Ok(GaResult {
            best_schedule,
            best_fitness,
            history,
            stop_reason,
            generations,
        })
    }

    /// Builds the next population from softmax-selected parent pairs.
    fn breed(
        problem: &TimetableProblem<'_>,
        population: &[Schedule],
        fitness: &[f64],
        config: &GaConfig,
        rate: f64,
        rng: &mut ChaCha8Rng,
    ) -> Vec<Schedule> {
        let cdf = SelectionCdf::from_fitness(fitness);
        let size = config.population_size;
        let mut next = Vec::with_capacity(size);

        while next.len() < size {
            let p1 = &population[cdf.sample(rng)];
            let p2 = &population[cdf.sample(rng)];
            let mut children = problem.crossover(p1, p2, rng);
            for child in &mut children {
                problem.mutate(child, rate, rng);
            }
            for child in children {
                if next.len() < size {
                    next.push(child);
                }
            }
        }
        next
    }
}
