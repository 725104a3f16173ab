//! Scoring rules and decision tables.
//!
//! Each multi-outcome rule is expressed as an enum whose `classify`
//! constructor is the single place its precedence is decided, and whose
//! `score` maps the outcome to a fitness adjustment. Per-activity rules are
//! wrapped as [`ActivityRule`] objects and applied in a fixed order.
//!
//! # Score Convention
//! Higher is better. Bonuses are positive, penalties negative.

use std::fmt::Debug;
use std::sync::Arc;

use crate::models::{ActivitySpec, Assignment, Room, TimePreference};

// ======================== Decision tables ========================

/// Room size relative to expected enrollment.
///
/// Exactly one outcome applies per activity. Precedence:
/// too small, then more than 3× enrollment, then more than 1.5×, then fitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomFit {
    /// Capacity below enrollment.
    TooSmall,
    /// Capacity more than 3× enrollment.
    Oversized,
    /// Capacity more than 1.5× (but at most 3×) enrollment.
    Roomy,
    /// Capacity within 1.5× of enrollment.
    Fitting,
}

impl RoomFit {
    /// Classifies a room for an enrollment.
    pub fn classify(capacity: u32, enrollment: u32) -> Self {
        if capacity < enrollment {
            return RoomFit::TooSmall;
        }
        let ratio = f64::from(capacity) / f64::from(enrollment);
        if ratio > 3.0 {
            RoomFit::Oversized
        } else if ratio > 1.5 {
            RoomFit::Roomy
        } else {
            RoomFit::Fitting
        }
    }

    /// Fitness adjustment.
    pub fn score(self) -> f64 {
        match self {
            RoomFit::TooSmall => -0.5,
            RoomFit::Oversized => -0.4,
            RoomFit::Roomy => -0.2,
            RoomFit::Fitting => 0.3,
        }
    }
}

/// How well the assigned facilitator matches the activity's lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacilitatorMatch {
    /// On the preferred list.
    Preferred,
    /// On the other-acceptable list.
    Other,
    /// On neither list (including names outside the roster).
    Unlisted,
}

impl FacilitatorMatch {
    /// Classifies a facilitator. The preferred list wins if a name is on both.
    pub fn classify(activity: &ActivitySpec, facilitator: &str) -> Self {
        if activity.is_preferred(facilitator) {
            FacilitatorMatch::Preferred
        } else if activity.is_other(facilitator) {
            FacilitatorMatch::Other
        } else {
            FacilitatorMatch::Unlisted
        }
    }

    /// Fitness adjustment.
    pub fn score(self) -> f64 {
        match self {
            FacilitatorMatch::Preferred => 0.5,
            FacilitatorMatch::Other => 0.2,
            FacilitatorMatch::Unlisted => -0.1,
        }
    }
}

/// Facilitator's number of activities within one time slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotLoad {
    /// No activities (cannot occur for an assigned activity).
    Idle,
    /// Exactly one activity.
    Single,
    /// More than one activity at the same time.
    Overbooked,
}

impl SlotLoad {
    /// Classifies a per-slot activity count.
    pub fn classify(count: usize) -> Self {
        match count {
            0 => SlotLoad::Idle,
            1 => SlotLoad::Single,
            _ => SlotLoad::Overbooked,
        }
    }

    /// Fitness adjustment.
    pub fn score(self) -> f64 {
        match self {
            SlotLoad::Idle => 0.0,
            SlotLoad::Single => 0.2,
            SlotLoad::Overbooked => -0.2,
        }
    }
}

/// Equipment requirement satisfaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipmentMatch {
    /// Activity has no requirements.
    NotRequired,
    /// All required features present.
    Full,
    /// Some, but not all, required features present.
    Partial,
    /// No required feature present.
    Unmet,
}

impl EquipmentMatch {
    /// Classifies an activity/room pair.
    pub fn classify(activity: &ActivitySpec, room: &Room) -> Self {
        let Some(req) = activity.equipment else {
            return EquipmentMatch::NotRequired;
        };
        let required = req.required_count();
        let satisfied = req.satisfied_count(room.has_lab, room.has_projector);
        if required == 0 {
            EquipmentMatch::NotRequired
        } else if satisfied == required {
            EquipmentMatch::Full
        } else if satisfied > 0 {
            EquipmentMatch::Partial
        } else {
            EquipmentMatch::Unmet
        }
    }

    /// Fitness adjustment.
    pub fn score(self) -> f64 {
        match self {
            EquipmentMatch::NotRequired => 0.0,
            EquipmentMatch::Full => 0.2,
            EquipmentMatch::Partial => -0.1,
            EquipmentMatch::Unmet => -0.3,
        }
    }
}

/// A facilitator's total number of activities across the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalLoad {
    /// No penalty.
    Balanced,
    /// More than 4 activities.
    Overloaded,
    /// Between 1 and 2 activities (exempt facilitator: exactly 2).
    Underused,
}

impl TotalLoad {
    /// Classifies a total load.
    ///
    /// `exempt` marks the facilitator whose light-load penalty applies only
    /// at a load of exactly 2; a load of 1 is never penalized for them.
    pub fn classify(load: usize, exempt: bool) -> Self {
        let underused = if exempt {
            load == 2
        } else {
            (1..3).contains(&load)
        };
        if load > 4 {
            TotalLoad::Overloaded
        } else if underused {
            TotalLoad::Underused
        } else {
            TotalLoad::Balanced
        }
    }

    /// Fitness adjustment.
    pub fn score(self) -> f64 {
        match self {
            TotalLoad::Balanced => 0.0,
            TotalLoad::Overloaded => -0.5,
            TotalLoad::Underused => -0.4,
        }
    }
}

/// Time-slot distance between two sections of the same course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiblingSpacing {
    /// Same slot.
    SameSlot,
    /// More than 4 slots apart.
    FarApart,
    /// Anything else.
    Neutral,
}

impl SiblingSpacing {
    /// Classifies a slot distance.
    pub fn classify(distance: usize) -> Self {
        if distance > 4 {
            SiblingSpacing::FarApart
        } else if distance == 0 {
            SiblingSpacing::SameSlot
        } else {
            SiblingSpacing::Neutral
        }
    }

    /// Fitness adjustment.
    pub fn score(self) -> f64 {
        match self {
            SiblingSpacing::SameSlot => -0.5,
            SiblingSpacing::FarApart => 0.5,
            SiblingSpacing::Neutral => 0.0,
        }
    }
}

/// Time-slot distance between sections of two different paired courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossSpacing {
    /// Same slot.
    SameSlot,
    /// Adjacent slots. Building proximity is checked only in this case.
    Consecutive,
    /// One empty slot between them.
    OneGap,
    /// Anything else.
    Neutral,
}

impl CrossSpacing {
    /// Classifies a slot distance.
    pub fn classify(distance: usize) -> Self {
        match distance {
            0 => CrossSpacing::SameSlot,
            1 => CrossSpacing::Consecutive,
            2 => CrossSpacing::OneGap,
            _ => CrossSpacing::Neutral,
        }
    }

    /// Fitness adjustment, excluding the proximity penalty.
    pub fn score(self) -> f64 {
        match self {
            CrossSpacing::SameSlot => -0.25,
            CrossSpacing::Consecutive => 0.5,
            CrossSpacing::OneGap => 0.25,
            CrossSpacing::Neutral => 0.0,
        }
    }
}

/// Extra penalty for consecutive cross sections when exactly one of the
/// two rooms is in a nearby building.
pub const SPLIT_BUILDING_PENALTY: f64 = -0.4;

/// Room-conflict penalty applied to each activity sharing a (room, time).
pub const ROOM_CONFLICT_PENALTY: f64 = -0.5;

// ======================== Per-activity rules ========================

/// Everything a per-activity rule may look at.
#[derive(Debug, Clone, Copy)]
pub struct ActivityContext<'a> {
    /// Activity being scored.
    pub activity: &'a ActivitySpec,
    /// Its assignment.
    pub assignment: &'a Assignment,
    /// Assigned room.
    pub room: &'a Room,
    /// Activities sharing this (room, time), including this one.
    pub room_time_count: usize,
    /// Activities the facilitator has at this time, including this one.
    pub facilitator_time_count: usize,
    /// Facilitator's time preference, if any.
    pub time_preference: Option<&'a TimePreference>,
}

/// A rule that scores one activity in isolation (given the schedule indexes).
///
/// Rules are applied in list order and summed into the activity subtotal.
pub trait ActivityRule: Send + Sync + Debug {
    /// Rule name, used as the key in score breakdowns.
    fn name(&self) -> &'static str;

    /// Fitness adjustment for this activity.
    fn score(&self, ctx: &ActivityContext<'_>) -> f64;
}

/// −0.5 to each activity that shares its (room, time) with another.
#[derive(Debug, Clone, Copy)]
pub struct RoomConflict;

impl ActivityRule for RoomConflict {
    fn name(&self) -> &'static str {
        "room_conflict"
    }

    fn score(&self, ctx: &ActivityContext<'_>) -> f64 {
        if ctx.room_time_count > 1 {
            ROOM_CONFLICT_PENALTY
        } else {
            0.0
        }
    }
}

/// Room capacity versus expected enrollment.
#[derive(Debug, Clone, Copy)]
pub struct RoomSize;

impl ActivityRule for RoomSize {
    fn name(&self) -> &'static str {
        "room_size"
    }

    fn score(&self, ctx: &ActivityContext<'_>) -> f64 {
        RoomFit::classify(ctx.room.capacity, ctx.activity.enrollment).score()
    }
}

/// Facilitator preference lists.
#[derive(Debug, Clone, Copy)]
pub struct FacilitatorPreference;

impl ActivityRule for FacilitatorPreference {
    fn name(&self) -> &'static str {
        "facilitator_preference"
    }

    fn score(&self, ctx: &ActivityContext<'_>) -> f64 {
        FacilitatorMatch::classify(ctx.activity, &ctx.assignment.facilitator).score()
    }
}

/// Facilitator load within the activity's time slot.
#[derive(Debug, Clone, Copy)]
pub struct FacilitatorSlotLoad;

impl ActivityRule for FacilitatorSlotLoad {
    fn name(&self) -> &'static str {
        "facilitator_slot_load"
    }

    fn score(&self, ctx: &ActivityContext<'_>) -> f64 {
        SlotLoad::classify(ctx.facilitator_time_count).score()
    }
}

/// Bonus when the slot is one the facilitator likes.
#[derive(Debug, Clone, Copy)]
pub struct LikedTime;

impl ActivityRule for LikedTime {
    fn name(&self) -> &'static str {
        "time_like"
    }

    fn score(&self, ctx: &ActivityContext<'_>) -> f64 {
        ctx.time_preference
            .and_then(|p| p.like.get(&ctx.assignment.time))
            .copied()
            .unwrap_or(0.0)
    }
}

/// Penalty when the slot is one the facilitator avoids.
#[derive(Debug, Clone, Copy)]
pub struct AvoidedTime;

impl ActivityRule for AvoidedTime {
    fn name(&self) -> &'static str {
        "time_avoid"
    }

    fn score(&self, ctx: &ActivityContext<'_>) -> f64 {
        ctx.time_preference
            .and_then(|p| p.avoid.get(&ctx.assignment.time))
            .copied()
            .unwrap_or(0.0)
    }
}

/// Lab/projector requirements versus room equipment.
#[derive(Debug, Clone, Copy)]
pub struct Equipment;

impl ActivityRule for Equipment {
    fn name(&self) -> &'static str {
        "equipment"
    }

    fn score(&self, ctx: &ActivityContext<'_>) -> f64 {
        EquipmentMatch::classify(ctx.activity, ctx.room).score()
    }
}

/// The built-in per-activity rules, in application order.
pub fn standard_rules() -> Vec<Arc<dyn ActivityRule>> {
    vec![
        Arc::new(RoomConflict),
        Arc::new(RoomSize),
        Arc::new(FacilitatorPreference),
        Arc::new(FacilitatorSlotLoad),
        Arc::new(LikedTime),
        Arc::new(AvoidedTime),
        Arc::new(Equipment),
    ]
}
