//! Schedule (solution) model.
//!
//! A schedule maps every activity to exactly one (room, time, facilitator)
//! assignment. Conflicts are allowed; the fitness function penalizes them.
//!
//! Schedules own their data. Cloning a schedule yields an independent copy
//! with no sharing between individuals.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{ActivityId, FacilitatorId, RoomId, TimeSlotId};

/// A complete timetable: activity → assignment.
///
/// Keys are kept ordered so iteration, serialization and `Debug` output
/// are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Activity assignments.
    pub assignments: BTreeMap<ActivityId, Assignment>,
}

/// Room, time slot and facilitator for one activity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment {
    /// Assigned room.
    pub room: RoomId,
    /// Assigned time slot.
    pub time: TimeSlotId,
    /// Assigned facilitator. Any string; unknown names are scored, not rejected.
    pub facilitator: FacilitatorId,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(
        room: impl Into<RoomId>,
        time: impl Into<TimeSlotId>,
        facilitator: impl Into<FacilitatorId>,
    ) -> Self {
        Self {
            room: room.into(),
            time: time.into(),
            facilitator: facilitator.into(),
        }
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets (or replaces) the assignment for an activity.
    pub fn insert(&mut self, activity_id: impl Into<ActivityId>, assignment: Assignment) {
        self.assignments.insert(activity_id.into(), assignment);
    }

    /// Builder form of [`Schedule::insert`].
    pub fn with_assignment(
        mut self,
        activity_id: impl Into<ActivityId>,
        assignment: Assignment,
    ) -> Self {
        self.insert(activity_id, assignment);
        self
    }

    /// Assignment for a given activity.
    pub fn assignment_for_activity(&self, activity_id: &str) -> Option<&Assignment> {
        self.assignments.get(activity_id)
    }

    /// Mutable assignment for a given activity.
    pub fn assignment_mut(&mut self, activity_id: &str) -> Option<&mut Assignment> {
        self.assignments.get_mut(activity_id)
    }

    /// Iterates `(activity_id, assignment)` in activity-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&ActivityId, &Assignment)> {
        self.assignments.iter()
    }

    /// Number of assignments.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the schedule has no assignments.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}
