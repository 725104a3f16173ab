//! Timetabling domain models.
//!
//! Provides the static catalog (activities, rooms, time slots, facilitators,
//! preferences) and the solution type ([`Schedule`]).
//!
//! # Identifiers
//!
//! All entities are identified by strings. Facilitators in particular are
//! an open identifier: a schedule may name a facilitator outside the roster,
//! and the fitness function scores that as an unlisted facilitator rather
//! than rejecting it.

mod activity;
mod catalog;
mod room;
mod schedule;

pub use activity::{ActivitySpec, EquipmentRequirement};
pub use catalog::{Catalog, ScoringPolicy, SectionPair, SectionPairPolicy, TimePreference};
pub use room::Room;
pub use schedule::{Assignment, Schedule};

/// Activity identifier (e.g., "SLA101A").
pub type ActivityId = String;
/// Room identifier (e.g., "Beach 201").
pub type RoomId = String;
/// Time slot label (e.g., "10 AM").
pub type TimeSlotId = String;
/// Facilitator name. Not restricted to the catalog roster.
pub type FacilitatorId = String;
