//! Timetabling GA problem definition.
//!
//! Bridges the catalog and the fitness evaluator to the operators the
//! runner drives: individual creation, population evaluation, crossover
//! and mutation.

use rand::Rng;
use rayon::prelude::*;

use super::operators::{field_mutation, random_schedule, uniform_crossover};
use crate::error::TimetableError;
use crate::fitness::{FitnessEvaluator, ScoreBreakdown};
use crate::models::{Catalog, Schedule};

/// A validated catalog paired with its fitness evaluator.
#[derive(Debug, Clone)]
pub struct TimetableProblem<'a> {
    catalog: &'a Catalog,
    evaluator: FitnessEvaluator<'a>,
}

impl<'a> TimetableProblem<'a> {
    /// Creates a problem over `catalog` with the standard scoring rules.
    ///
    /// # Errors
    /// [`TimetableError::InvalidCatalog`] if the catalog fails validation.
    pub fn new(catalog: &'a Catalog) -> Result<Self, TimetableError> {
        catalog.validate().map_err(TimetableError::InvalidCatalog)?;
        Ok(Self {
            catalog,
            evaluator: FitnessEvaluator::new(catalog),
        })
    }

    /// Replaces the evaluator, e.g. one extended with custom rules.
    ///
    /// The evaluator must score the same catalog.
    pub fn with_evaluator(mut self, evaluator: FitnessEvaluator<'a>) -> Self {
        debug_assert!(std::ptr::eq(evaluator.catalog(), self.catalog));
        self.evaluator = evaluator;
        self
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn evaluator(&self) -> &FitnessEvaluator<'a> {
        &self.evaluator
    }

    /// Creates one random individual.
    pub fn create_individual<R: Rng>(&self, rng: &mut R) -> Schedule {
        random_schedule(self.catalog, rng)
    }

    /// Creates `size` random individuals, drawn one after another.
    pub fn initialize_population<R: Rng>(&self, size: usize, rng: &mut R) -> Vec<Schedule> {
        (0..size).map(|_| self.create_individual(rng)).collect()
    }

    /// Fitness of one individual.
    pub fn evaluate(&self, individual: &Schedule) -> f64 {
        self.evaluator.evaluate(individual)
    }

    /// Per-term score breakdown of one individual.
    pub fn breakdown(&self, individual: &Schedule) -> ScoreBreakdown {
        match self.evaluator.breakdown(individual) {
            Ok(b) => b,
            Err(e) => panic!("schedule violates catalog contract: {e}"),
        }
    }

    /// Fitness of every individual, index-aligned with `population`.
    ///
    /// Evaluation is pure, so the parallel path returns exactly what the
    /// sequential one does.
    pub fn evaluate_population(&self, population: &[Schedule], parallel: bool) -> Vec<f64> {
        if parallel {
            population.par_iter().map(|s| self.evaluate(s)).collect()
        } else {
            population.iter().map(|s| self.evaluate(s)).collect()
        }
    }

    /// Produces two children, each an independent uniform crossover of
    /// the parents.
    pub fn crossover<R: Rng>(
        &self,
        parent1: &Schedule,
        parent2: &Schedule,
        rng: &mut R,
    ) -> Vec<Schedule> {
        let c1 = uniform_crossover(parent1, parent2, self.catalog, rng);
        let c2 = uniform_crossover(parent1, parent2, self.catalog, rng);
        vec![c1, c2]
    }

    /// Mutates in place with per-field probability `rate`.
    pub fn mutate<R: Rng>(&self, individual: &mut Schedule, rate: f64, rng: &mut R) {
        field_mutation(individual, self.catalog, rate, rng);
    }
}
