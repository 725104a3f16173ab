//! Domain catalog: the static problem data.
//!
//! The catalog is read-only during a run. It is passed explicitly to the
//! evaluator and the GA operators; nothing reads problem data from globals.
//!
//! Time slot order is significant: the position of a slot in
//! [`Catalog::time_slots`] is its index for all distance-based rules.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{ActivityId, ActivitySpec, FacilitatorId, Room, TimeSlotId};
use crate::error::TimetableError;
use crate::validation::{validate_catalog, ValidationResult};

/// Static timetabling data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Activities to schedule, in canonical order.
    pub activities: Vec<ActivitySpec>,
    /// Available rooms.
    pub rooms: Vec<Room>,
    /// Time slots, in chronological order.
    pub time_slots: Vec<TimeSlotId>,
    /// Known facilitator roster.
    pub facilitators: Vec<FacilitatorId>,
    /// Optional per-facilitator time preferences.
    #[serde(default)]
    pub time_preferences: HashMap<FacilitatorId, TimePreference>,
    /// Special-case scoring rules tied to named entities.
    #[serde(default)]
    pub policy: ScoringPolicy,
}

/// A facilitator's liked and avoided time slots.
///
/// Values are signed adjustments added to the activity score: "like"
/// entries are usually positive, "avoid" entries negative. A slot may
/// appear in both maps; both adjustments then apply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimePreference {
    /// Slot → bonus.
    #[serde(default)]
    pub like: HashMap<TimeSlotId, f64>,
    /// Slot → penalty.
    #[serde(default)]
    pub avoid: HashMap<TimeSlotId, f64>,
}

/// Scoring rules that name specific facilitators, activities or buildings.
///
/// An empty policy disables the exemption and all section-pair rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    /// Facilitator penalized for a light load only when the load is exactly 2.
    #[serde(default)]
    pub load_exempt_facilitator: Option<FacilitatorId>,
    /// Sibling-section spacing rules.
    #[serde(default)]
    pub section_pairs: Option<SectionPairPolicy>,
}

/// Two sections of the same course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionPair(pub ActivityId, pub ActivityId);

/// Spacing rules for two sibling pairs and their cross combinations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionPairPolicy {
    /// First sibling pair (e.g., SLA101A/B).
    pub primary: SectionPair,
    /// Second sibling pair (e.g., SLA191A/B).
    pub secondary: SectionPair,
    /// Buildings treated as "nearby" for the consecutive-slot proximity rule.
    #[serde(default)]
    pub nearby_buildings: Vec<String>,
}

impl TimePreference {
    /// Creates an empty preference.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a liked slot.
    pub fn with_like(mut self, time: impl Into<TimeSlotId>, bonus: f64) -> Self {
        self.like.insert(time.into(), bonus);
        self
    }

    /// Adds an avoided slot.
    pub fn with_avoid(mut self, time: impl Into<TimeSlotId>, penalty: f64) -> Self {
        self.avoid.insert(time.into(), penalty);
        self
    }
}

impl SectionPair {
    /// Creates a pair.
    pub fn new(a: impl Into<ActivityId>, b: impl Into<ActivityId>) -> Self {
        Self(a.into(), b.into())
    }

    /// Both section ids.
    pub fn sections(&self) -> [&str; 2] {
        [self.0.as_str(), self.1.as_str()]
    }
}

impl SectionPairPolicy {
    /// Creates a policy with no nearby buildings.
    pub fn new(primary: SectionPair, secondary: SectionPair) -> Self {
        Self {
            primary,
            secondary,
            nearby_buildings: Vec::new(),
        }
    }

    /// Sets the nearby buildings.
    pub fn with_nearby_buildings<I, S>(mut self, buildings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nearby_buildings = buildings.into_iter().map(Into::into).collect();
        self
    }

    /// Whether `building` is one of the nearby buildings.
    pub fn is_nearby(&self, building: &str) -> bool {
        self.nearby_buildings.iter().any(|b| b == building)
    }
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a catalog from JSON and validates it.
    pub fn from_json(json: &str) -> Result<Self, TimetableError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate().map_err(TimetableError::InvalidCatalog)?;
        log::debug!(
            "loaded catalog: {} activities, {} rooms, {} time slots, {} facilitators",
            catalog.activities.len(),
            catalog.rooms.len(),
            catalog.time_slots.len(),
            catalog.facilitators.len()
        );
        Ok(catalog)
    }

    /// Adds an activity.
    pub fn with_activity(mut self, activity: ActivitySpec) -> Self {
        self.activities.push(activity);
        self
    }

    /// Adds a room.
    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }

    /// Sets the ordered time slots.
    pub fn with_time_slots<I, S>(mut self, slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<TimeSlotId>,
    {
        self.time_slots = slots.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the facilitator roster.
    pub fn with_facilitators<I, S>(mut self, facilitators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<FacilitatorId>,
    {
        self.facilitators = facilitators.into_iter().map(Into::into).collect();
        self
    }

    /// Sets a facilitator's time preference.
    pub fn with_time_preference(
        mut self,
        facilitator: impl Into<FacilitatorId>,
        preference: TimePreference,
    ) -> Self {
        self.time_preferences.insert(facilitator.into(), preference);
        self
    }

    /// Sets the scoring policy.
    pub fn with_policy(mut self, policy: ScoringPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Finds an activity by id.
    pub fn activity(&self, id: &str) -> Option<&ActivitySpec> {
        self.activities.iter().find(|a| a.id == id)
    }

    /// Finds a room by id.
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Position of a time slot in chronological order.
    pub fn time_index(&self, time: &str) -> Option<usize> {
        self.time_slots.iter().position(|t| t == time)
    }

    /// Time preference for a facilitator, if any.
    pub fn time_preference(&self, facilitator: &str) -> Option<&TimePreference> {
        self.time_preferences.get(facilitator)
    }

    /// Whether the facilitator is on the roster.
    pub fn has_facilitator(&self, facilitator: &str) -> bool {
        self.facilitators.iter().any(|f| f == facilitator)
    }

    /// Runs structural validation.
    pub fn validate(&self) -> ValidationResult {
        validate_catalog(self)
    }
}
