//! Activity model.
//!
//! An activity is one schedulable section of a course (e.g., "SLA101A").
//! It carries the expected enrollment, the facilitators who should or may
//! oversee it, and optional equipment requirements. Preference lists are
//! scoring signals only; they never restrict which facilitator the search
//! may assign.

use serde::{Deserialize, Serialize};

use super::{ActivityId, FacilitatorId};

/// A schedulable activity (course section).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitySpec {
    /// Unique activity identifier.
    pub id: ActivityId,
    /// Expected enrollment (students).
    pub enrollment: u32,
    /// Preferred facilitators.
    #[serde(default)]
    pub preferred: Vec<FacilitatorId>,
    /// Other acceptable facilitators.
    #[serde(default)]
    pub others: Vec<FacilitatorId>,
    /// Room equipment this activity needs, if any.
    #[serde(default)]
    pub equipment: Option<EquipmentRequirement>,
}

/// Room features an activity needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentRequirement {
    /// Needs a lab.
    #[serde(default)]
    pub lab: bool,
    /// Needs a projector.
    #[serde(default)]
    pub projector: bool,
}

impl ActivitySpec {
    /// Creates an activity with no facilitator preferences.
    pub fn new(id: impl Into<ActivityId>, enrollment: u32) -> Self {
        Self {
            id: id.into(),
            enrollment,
            preferred: Vec::new(),
            others: Vec::new(),
            equipment: None,
        }
    }

    /// Sets the preferred facilitators.
    pub fn with_preferred<I, S>(mut self, facilitators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<FacilitatorId>,
    {
        self.preferred = facilitators.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the other acceptable facilitators.
    pub fn with_others<I, S>(mut self, facilitators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<FacilitatorId>,
    {
        self.others = facilitators.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the equipment requirement.
    pub fn with_equipment(mut self, lab: bool, projector: bool) -> Self {
        self.equipment = Some(EquipmentRequirement { lab, projector });
        self
    }

    /// Whether `facilitator` is on the preferred list.
    pub fn is_preferred(&self, facilitator: &str) -> bool {
        self.preferred.iter().any(|f| f == facilitator)
    }

    /// Whether `facilitator` is on the other-acceptable list.
    pub fn is_other(&self, facilitator: &str) -> bool {
        self.others.iter().any(|f| f == facilitator)
    }
}

impl EquipmentRequirement {
    /// Number of required features.
    pub fn required_count(&self) -> usize {
        usize::from(self.lab) + usize::from(self.projector)
    }

    /// Number of required features the given room flags satisfy.
    pub fn satisfied_count(&self, has_lab: bool, has_projector: bool) -> usize {
        usize::from(self.lab && has_lab) + usize::from(self.projector && has_projector)
    }
}
