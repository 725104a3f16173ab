//! Genetic operators for timetables.
//!
//! A timetable chromosome is a [`Schedule`]: one gene per activity, each gene
//! an (room, time, facilitator) triple. All operators walk activities in
//! catalog order so that, for a given RNG state, the sequence of random
//! draws is fixed:
//!
//! - [`random_schedule`]: room, time, facilitator per activity.
//! - [`uniform_crossover`]: one coin per activity.
//! - [`field_mutation`]: per activity, a probability draw for each of room,
//!   time and facilitator, each followed by a value draw only on success.
//!
//! # Reference
//! Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

use rand::Rng;

use crate::models::{Assignment, Catalog, Schedule};

/// Picks a uniformly random element.
///
/// Catalog domains are validated non-empty before any operator runs.
fn pick<'c, T, R: Rng>(items: &'c [T], rng: &mut R) -> &'c T {
    &items[rng.random_range(0..items.len())]
}

fn missing_gene(activity: &str) -> ! {
    panic!("schedule has no assignment for activity '{activity}'")
}

/// Draws a random room, time slot and facilitator, in that order.
pub fn random_assignment<R: Rng>(catalog: &Catalog, rng: &mut R) -> Assignment {
    let room = pick(&catalog.rooms, rng).id.clone();
    let time = pick(&catalog.time_slots, rng).clone();
    let facilitator = pick(&catalog.facilitators, rng).clone();
    Assignment::new(room, time, facilitator)
}

/// Builds a schedule with an independent random assignment per activity.
pub fn random_schedule<R: Rng>(catalog: &Catalog, rng: &mut R) -> Schedule {
    let mut schedule = Schedule::new();
    for activity in &catalog.activities {
        schedule.insert(activity.id.clone(), random_assignment(catalog, rng));
    }
    schedule
}

/// Uniform crossover: each activity's whole assignment comes from
/// `parent1` with probability 0.5, otherwise from `parent2`.
///
/// # Panics
/// If a parent lacks an assignment for a catalog activity.
pub fn uniform_crossover<R: Rng>(
    parent1: &Schedule,
    parent2: &Schedule,
    catalog: &Catalog,
    rng: &mut R,
) -> Schedule {
    let mut child = Schedule::new();
    for activity in &catalog.activities {
        let donor = if rng.random::<f64>() < 0.5 {
            parent1
        } else {
            parent2
        };
        let Some(gene) = donor.assignment_for_activity(&activity.id) else {
            missing_gene(&activity.id);
        };
        child.insert(activity.id.clone(), gene.clone());
    }
    child
}

/// Field-wise mutation: room, time and facilitator of each activity are
/// independently replaced by a uniform draw with probability `rate`.
///
/// A replacement may equal the old value.
///
/// # Panics
/// If the schedule lacks an assignment for a catalog activity.
pub fn field_mutation<R: Rng>(schedule: &mut Schedule, catalog: &Catalog, rate: f64, rng: &mut R) {
    for activity in &catalog.activities {
        let Some(assignment) = schedule.assignment_mut(&activity.id) else {
            missing_gene(&activity.id);
        };
        if rng.random::<f64>() < rate {
            assignment.room = pick(&catalog.rooms, rng).id.clone();
        }
        if rng.random::<f64>() < rate {
            assignment.time = pick(&catalog.time_slots, rng).clone();
        }
        if rng.random::<f64>() < rate {
            assignment.facilitator = pick(&catalog.facilitators, rng).clone();
        }
    }
}
