//! Room model.
//!
//! Rooms are the physical resources activities are placed in. Each room
//! has a seating capacity, equipment flags, and a building used by the
//! proximity rule for consecutive sections.

use serde::{Deserialize, Serialize};

use super::RoomId;

/// A room that activities can be assigned to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier (e.g., "Beach 201").
    pub id: RoomId,
    /// Seating capacity.
    pub capacity: u32,
    /// Room has lab facilities.
    #[serde(default)]
    pub has_lab: bool,
    /// Room has a projector.
    #[serde(default)]
    pub has_projector: bool,
    /// Building name. `None` = first whitespace-separated token of `id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
}

impl Room {
    /// Creates a room with no equipment.
    pub fn new(id: impl Into<RoomId>, capacity: u32) -> Self {
        Self {
            id: id.into(),
            capacity,
            has_lab: false,
            has_projector: false,
            building: None,
        }
    }

    /// Marks the room as having a lab.
    pub fn with_lab(mut self) -> Self {
        self.has_lab = true;
        self
    }

    /// Marks the room as having a projector.
    pub fn with_projector(mut self) -> Self {
        self.has_projector = true;
        self
    }

    /// Overrides the building name.
    pub fn with_building(mut self, building: impl Into<String>) -> Self {
        self.building = Some(building.into());
        self
    }

    /// Building this room belongs to.
    ///
    /// "Roman 216" → "Roman" unless an explicit building was set.
    pub fn building(&self) -> &str {
        match &self.building {
            Some(b) => b,
            None => self.id.split_whitespace().next().unwrap_or(""),
        }
    }

}
