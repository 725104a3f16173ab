//! GA-based timetable optimization.
//!
//! A chromosome is a complete [`Schedule`](crate::models::Schedule): one
//! (room, time, facilitator) gene per activity. Parents are chosen by
//! softmax selection over fitness, children are produced by uniform
//! crossover and field-wise mutation, and every generation is fully
//! replaced by its children.
//!
//! # Submodules
//!
//! - [`operators`]: random initialization, crossover and mutation
//! - [`selection`]: softmax probabilities and CDF sampling
//!
//! # Reproducibility
//!
//! A run consumes one `ChaCha8Rng` stream seeded from [`GaConfig::seed`].
//! ChaCha8 output is stable across `rand_chacha` releases, so a seed
//! reproduces the same run on any build. Draws happen in a fixed order:
//! initialization draws schedule by schedule; each breeding step draws
//! parent 1, parent 2, the crossover coins of child 1 and then child 2,
//! and finally the mutation draws of child 1 and then child 2.
//! Parallel evaluation does not touch the stream.

mod config;
mod observer;
pub mod operators;
mod problem;
mod runner;
pub mod selection;

pub use config::GaConfig;
pub use observer::{GenerationObserver, LogObserver, NoopObserver};
pub use operators::{field_mutation, random_assignment, random_schedule, uniform_crossover};
pub use problem::TimetableProblem;
pub use runner::{
    EvolutionPhase, GaResult, GaRunner, GenerationRecord, StopReason, improvement_percent,
};
pub use selection::{SelectionCdf, softmax};
