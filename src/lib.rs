//! Academic timetabling with a genetic algorithm.
//!
//! Assigns every activity of a catalog a room, a time slot and a
//! facilitator, scoring candidate timetables with a soft-constraint fitness
//! function and evolving them with a generational GA.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Catalog`, `ActivitySpec`, `Room`,
//!   `Schedule`, `Assignment`, `ScoringPolicy`
//! - **`validation`**: Catalog and schedule integrity checks
//! - **`fitness`**: Rule-based fitness evaluator with per-term breakdown
//! - **`ga`**: Operators, softmax selection and the evolution controller
//! - **`error`**: Crate error types
//!
//! # Example
//!
//! ```
//! use u_timetable::ga::{GaConfig, GaRunner, TimetableProblem};
//! use u_timetable::models::{ActivitySpec, Catalog, Room};
//!
//! let catalog = Catalog::new()
//!     .with_activity(ActivitySpec::new("CS101", 40).with_preferred(["Lee"]))
//!     .with_activity(ActivitySpec::new("CS102", 25))
//!     .with_room(Room::new("Hall 1", 45))
//!     .with_room(Room::new("Hall 2", 30))
//!     .with_time_slots(["9 AM", "10 AM"])
//!     .with_facilitators(["Lee", "Kim"]);
//!
//! let problem = TimetableProblem::new(&catalog).unwrap();
//! let config = GaConfig::default()
//!     .with_population_size(30)
//!     .with_min_generations(5)
//!     .with_max_generations(20);
//!
//! let result = GaRunner::run(&problem, &config).unwrap();
//! assert_eq!(result.best_schedule.len(), 2);
//! ```
//!
//! # References
//!
//! - Burke & Petrovic (2002), "Recent research directions in automated
//!   timetabling"
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//!   Machine Learning"

pub mod error;
pub mod fitness;
pub mod ga;
pub mod models;
pub mod validation;

#[cfg(test)]
mod testing;
