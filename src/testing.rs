//! Shared test fixtures.

use crate::models::{Assignment, Catalog, Schedule};

/// The bundled SLA sample catalog.
pub(crate) fn sla_catalog() -> Catalog {
    Catalog::from_json(include_str!("../data/sla_catalog.json")).unwrap()
}

/// A deterministic, structurally valid schedule: activity `i` gets room
/// `i mod rooms`, slot `i mod slots`, and roster facilitator `i mod roster`.
pub(crate) fn spread_schedule(catalog: &Catalog) -> Schedule {
    let mut schedule = Schedule::new();
    for (i, act) in catalog.activities.iter().enumerate() {
        schedule.insert(
            act.id.clone(),
            Assignment::new(
                catalog.rooms[i % catalog.rooms.len()].id.clone(),
                catalog.time_slots[i % catalog.time_slots.len()].clone(),
                catalog.facilitators[i % catalog.facilitators.len()].clone(),
            ),
        );
    }
    schedule
}
