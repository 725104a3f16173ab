//! Schedule fitness evaluation.
//!
//! Turns a [`Schedule`] into a single comparable score (higher is better,
//! may be negative). Conflicts are penalized, never rejected.
//!
//! # Terms, in application order
//!
//! 1. Per-activity rules ([`rules::standard_rules`]), summed per activity:
//!    room conflict, room size, facilitator preference, facilitator slot
//!    load, liked time, avoided time, equipment.
//! 2. Per-facilitator total load over the whole roster ([`rules::TotalLoad`]).
//! 3. Section-pair spacing from the catalog's [`ScoringPolicy`]: sibling
//!    spacing within each pair, then the four cross-pair combinations with
//!    the consecutive-slot building proximity check.
//!
//! The order is fixed so that the floating-point sum is reproducible.
//!
//! # Not implemented
//!
//! A "facilitator teaching back-to-back slots" term mirroring the
//! cross-section consecutive rule was considered and left out: it would
//! double-count the section-pair adjustments for the named courses.
//!
//! [`ScoringPolicy`]: crate::models::ScoringPolicy

pub mod rules;

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::ScheduleError;
use crate::models::{Catalog, Room, Schedule, SectionPair, SectionPairPolicy};
use rules::{
    standard_rules, ActivityContext, ActivityRule, CrossSpacing, SiblingSpacing, TotalLoad,
    SPLIT_BUILDING_PENALTY,
};

/// Breakdown key for the per-facilitator total load term.
pub const TERM_TOTAL_LOAD: &str = "facilitator_total_load";
/// Breakdown key for sibling-section spacing.
pub const TERM_SECTION_SPACING: &str = "section_spacing";
/// Breakdown key for cross-pair spacing.
pub const TERM_CROSS_SPACING: &str = "cross_section_spacing";
/// Breakdown key for the consecutive-slot building proximity penalty.
pub const TERM_PROXIMITY: &str = "cross_section_proximity";

/// Per-term fitness totals for one schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    /// `(term, total)` in application order. Every term is listed, even at 0.
    pub terms: Vec<(&'static str, f64)>,
    /// Total fitness, identical to [`FitnessEvaluator::evaluate`].
    pub total: f64,
}

impl ScoreBreakdown {
    /// Total for a term (0.0 if unknown).
    pub fn get(&self, term: &str) -> f64 {
        self.terms
            .iter()
            .find(|(name, _)| *name == term)
            .map(|(_, v)| *v)
            .unwrap_or(0.0)
    }

    fn add(&mut self, term: &'static str, value: f64) {
        match self.terms.iter_mut().find(|(name, _)| *name == term) {
            Some((_, total)) => *total += value,
            None => self.terms.push((term, value)),
        }
    }
}

/// Pure, deterministic schedule evaluator bound to one catalog.
///
/// # Example
/// ```
/// use u_timetable::fitness::FitnessEvaluator;
/// use u_timetable::models::{ActivitySpec, Assignment, Catalog, Room, Schedule};
///
/// let catalog = Catalog::new()
///     .with_activity(ActivitySpec::new("A1", 20).with_preferred(["Ann"]))
///     .with_room(Room::new("Hall 1", 25))
///     .with_time_slots(["9 AM"])
///     .with_facilitators(["Ann"]);
/// let schedule = Schedule::new().with_assignment("A1", Assignment::new("Hall 1", "9 AM", "Ann"));
///
/// let evaluator = FitnessEvaluator::new(&catalog);
/// // room fits (+0.3), preferred (+0.5), single in slot (+0.2), Ann has 1 activity (-0.4)
/// assert!((evaluator.evaluate(&schedule) - 0.6).abs() < 1e-9);
/// ```
#[derive(Clone)]
pub struct FitnessEvaluator<'a> {
    catalog: &'a Catalog,
    rules: Vec<Arc<dyn ActivityRule>>,
    rooms: HashMap<&'a str, &'a Room>,
    time_index: HashMap<&'a str, usize>,
}

impl<'a> FitnessEvaluator<'a> {
    /// Creates an evaluator with the standard rule list.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            rules: standard_rules(),
            rooms: catalog.rooms.iter().map(|r| (r.id.as_str(), r)).collect(),
            time_index: catalog
                .time_slots
                .iter()
                .enumerate()
                .map(|(i, t)| (t.as_str(), i))
                .collect(),
        }
    }

    /// Appends a custom per-activity rule after the standard ones.
    pub fn with_rule<R: ActivityRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// The catalog this evaluator scores against.
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Active per-activity rules, in application order.
    pub fn rules(&self) -> &[Arc<dyn ActivityRule>] {
        &self.rules
    }

    /// Scores a schedule.
    ///
    /// # Panics
    /// If the schedule breaks the structural contract (missing or unknown
    /// activity, unknown room or time slot). Use
    /// [`try_evaluate`](Self::try_evaluate) to get the error instead.
    pub fn evaluate(&self, schedule: &Schedule) -> f64 {
        match self.try_evaluate(schedule) {
            Ok(fitness) => fitness,
            Err(e) => panic!("schedule violates catalog contract: {e}"),
        }
    }

    /// Scores a schedule, reporting contract violations as errors.
    pub fn try_evaluate(&self, schedule: &Schedule) -> Result<f64, ScheduleError> {
        self.accumulate(schedule, |_, _| {})
    }

    /// Scores a schedule and reports per-term totals.
    pub fn breakdown(&self, schedule: &Schedule) -> Result<ScoreBreakdown, ScheduleError> {
        let mut breakdown = ScoreBreakdown {
            terms: self
                .rules
                .iter()
                .map(|r| r.name())
                .chain([
                    TERM_TOTAL_LOAD,
                    TERM_SECTION_SPACING,
                    TERM_CROSS_SPACING,
                    TERM_PROXIMITY,
                ])
                .map(|name| (name, 0.0))
                .collect(),
            total: 0.0,
        };
        let total = self.accumulate(schedule, |term, value| breakdown.add(term, value))?;
        breakdown.total = total;
        Ok(breakdown)
    }

    /// Walks every scoring term in order, summing into the total and
    /// reporting each non-zero contribution to `visit`.
    fn accumulate<F>(&self, schedule: &Schedule, mut visit: F) -> Result<f64, ScheduleError>
    where
        F: FnMut(&'static str, f64),
    {
        let catalog = self.catalog;

        // Resolve assignments in catalog order; this also checks coverage.
        let mut resolved = Vec::with_capacity(catalog.activities.len());
        for activity in &catalog.activities {
            let assignment = schedule
                .assignment_for_activity(&activity.id)
                .ok_or_else(|| ScheduleError::MissingActivity(activity.id.clone()))?;
            let room = *self.rooms.get(assignment.room.as_str()).ok_or_else(|| {
                ScheduleError::UnknownRoom {
                    activity: activity.id.clone(),
                    room: assignment.room.clone(),
                }
            })?;
            let slot = *self.time_index.get(assignment.time.as_str()).ok_or_else(|| {
                ScheduleError::UnknownTimeSlot {
                    activity: activity.id.clone(),
                    time: assignment.time.clone(),
                }
            })?;
            resolved.push((activity, assignment, room, slot));
        }
        if schedule.len() != catalog.activities.len() {
            if let Some((extra, _)) = schedule.iter().find(|(id, _)| catalog.activity(id).is_none())
            {
                return Err(ScheduleError::UnknownActivity(extra.clone()));
            }
        }

        // Index build.
        let mut room_time: HashMap<(&str, usize), usize> = HashMap::new();
        let mut facilitator_time: HashMap<(&str, usize), usize> = HashMap::new();
        let mut facilitator_total: HashMap<&str, usize> = HashMap::new();
        for (_, assignment, room, slot) in &resolved {
            *room_time.entry((room.id.as_str(), *slot)).or_insert(0) += 1;
            *facilitator_time
                .entry((assignment.facilitator.as_str(), *slot))
                .or_insert(0) += 1;
            *facilitator_total
                .entry(assignment.facilitator.as_str())
                .or_insert(0) += 1;
        }

        let mut total = 0.0;

        // 1) Per-activity rules.
        for (activity, assignment, room, slot) in &resolved {
            let ctx = ActivityContext {
                activity,
                assignment,
                room,
                room_time_count: room_time[&(room.id.as_str(), *slot)],
                facilitator_time_count: facilitator_time
                    [&(assignment.facilitator.as_str(), *slot)],
                time_preference: catalog.time_preference(&assignment.facilitator),
            };
            let mut activity_score = 0.0;
            for rule in &self.rules {
                let value = rule.score(&ctx);
                if value != 0.0 {
                    visit(rule.name(), value);
                    activity_score += value;
                }
            }
            total += activity_score;
        }

        // 2) Facilitator total load, over the whole roster.
        let exempt = catalog.policy.load_exempt_facilitator.as_deref();
        for facilitator in &catalog.facilitators {
            let load = facilitator_total
                .get(facilitator.as_str())
                .copied()
                .unwrap_or(0);
            let value = TotalLoad::classify(load, exempt == Some(facilitator.as_str())).score();
            if value != 0.0 {
                visit(TERM_TOTAL_LOAD, value);
                total += value;
            }
        }

        // 3) Named section pairs.
        if let Some(policy) = &catalog.policy.section_pairs {
            total = self.score_section_pairs(schedule, policy, total, &mut visit)?;
        }

        Ok(total)
    }

    fn score_section_pairs<F>(
        &self,
        schedule: &Schedule,
        policy: &SectionPairPolicy,
        mut total: f64,
        visit: &mut F,
    ) -> Result<f64, ScheduleError>
    where
        F: FnMut(&'static str, f64),
    {
        for pair in [&policy.primary, &policy.secondary] {
            let (a, b) = self.pair_slots(schedule, pair)?;
            let value = SiblingSpacing::classify(a.0.abs_diff(b.0)).score();
            if value != 0.0 {
                visit(TERM_SECTION_SPACING, value);
                total += value;
            }
        }

        let primary = self.pair_slots(schedule, &policy.primary)?;
        let secondary = self.pair_slots(schedule, &policy.secondary)?;
        for first in [primary.0, primary.1] {
            for second in [secondary.0, secondary.1] {
                let spacing = CrossSpacing::classify(first.0.abs_diff(second.0));
                let value = spacing.score();
                if value != 0.0 {
                    visit(TERM_CROSS_SPACING, value);
                    total += value;
                }
                if spacing == CrossSpacing::Consecutive
                    && policy.is_nearby(first.1.building()) != policy.is_nearby(second.1.building())
                {
                    visit(TERM_PROXIMITY, SPLIT_BUILDING_PENALTY);
                    total += SPLIT_BUILDING_PENALTY;
                }
            }
        }

        Ok(total)
    }

    /// (slot index, room) for both sections of a pair.
    fn pair_slots(
        &self,
        schedule: &Schedule,
        pair: &SectionPair,
    ) -> Result<((usize, &'a Room), (usize, &'a Room)), ScheduleError> {
        Ok((self.slot_and_room(schedule, &pair.0)?, self.slot_and_room(schedule, &pair.1)?))
    }

    fn slot_and_room(
        &self,
        schedule: &Schedule,
        activity: &str,
    ) -> Result<(usize, &'a Room), ScheduleError> {
        let assignment = schedule
            .assignment_for_activity(activity)
            .ok_or_else(|| ScheduleError::MissingActivity(activity.to_string()))?;
        let room = *self.rooms.get(assignment.room.as_str()).ok_or_else(|| {
            ScheduleError::UnknownRoom {
                activity: activity.to_string(),
                room: assignment.room.clone(),
            }
        })?;
        let slot = *self.time_index.get(assignment.time.as_str()).ok_or_else(|| {
            ScheduleError::UnknownTimeSlot {
                activity: activity.to_string(),
                time: assignment.time.clone(),
            }
        })?;
        Ok((slot, room))
    }
}

impl std::fmt::Debug for FitnessEvaluator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FitnessEvaluator")
            .field("rules", &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>())
            .field("activities", &self.catalog.activities.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivitySpec, Assignment, ScoringPolicy, TimePreference};
    use crate::testing::{sla_catalog, spread_schedule};

    fn tiny_catalog() -> Catalog {
        Catalog::new()
            .with_activity(ActivitySpec::new("A1", 20).with_preferred(["Ann"]))
            .with_activity(ActivitySpec::new("A2", 20).with_others(["Ann"]))
            .with_activity(ActivitySpec::new("A3", 20))
            .with_room(Room::new("Hall 1", 25))
            .with_room(Room::new("Hall 2", 100))
            .with_time_slots(["9 AM", "10 AM"])
            .with_facilitators(["Ann", "Bob"])
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let catalog = sla_catalog();
        let evaluator = FitnessEvaluator::new(&catalog);
        let schedule = spread_schedule(&catalog);
        let f1 = evaluator.evaluate(&schedule);
        let f2 = evaluator.evaluate(&schedule);
        assert_eq!(f1.to_bits(), f2.to_bits());
    }

    #[test]
    fn test_room_conflict_not_compounding() {
        let catalog = tiny_catalog();
        let evaluator = FitnessEvaluator::new(&catalog);
        // Three activities share one (room, time).
        let schedule = Schedule::new()
            .with_assignment("A1", Assignment::new("Hall 1", "9 AM", "Ann"))
            .with_assignment("A2", Assignment::new("Hall 1", "9 AM", "Bob"))
            .with_assignment("A3", Assignment::new("Hall 1", "9 AM", "Carl"));
        let breakdown = evaluator.breakdown(&schedule).unwrap();
        assert!((breakdown.get("room_conflict") - (-1.5)).abs() < 1e-9);
    }

    #[test]
    fn test_room_size_one_outcome_per_activity() {
        let catalog = tiny_catalog();
        let evaluator = FitnessEvaluator::new(&catalog);
        // Hall 2 is 5x enrollment: only the >3x penalty applies.
        let schedule = Schedule::new()
            .with_assignment("A1", Assignment::new("Hall 2", "9 AM", "Ann"))
            .with_assignment("A2", Assignment::new("Hall 1", "10 AM", "Ann"))
            .with_assignment("A3", Assignment::new("Hall 1", "9 AM", "Bob"));
        let breakdown = evaluator.breakdown(&schedule).unwrap();
        assert!((breakdown.get("room_size") - (-0.4 + 0.3 + 0.3)).abs() < 1e-9);
    }

    #[test]
    fn test_tiny_catalog_total() {
        let catalog = tiny_catalog();
        let evaluator = FitnessEvaluator::new(&catalog);
        let schedule = Schedule::new()
            .with_assignment("A1", Assignment::new("Hall 1", "9 AM", "Ann"))
            .with_assignment("A2", Assignment::new("Hall 1", "10 AM", "Ann"))
            .with_assignment("A3", Assignment::new("Hall 2", "9 AM", "Bob"));
        // A1: fit +0.3, preferred +0.5, single +0.2 = 1.0
        // A2: fit +0.3, other +0.2, single +0.2 = 0.7
        // A3: 5x -0.4, unlisted -0.1, single +0.2 = -0.3
        // Ann load 2 -0.4, Bob load 1 -0.4
        let expected = 1.0 + 0.7 - 0.3 - 0.4 - 0.4;
        assert!((evaluator.evaluate(&schedule) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_facilitator_slot_overbooked() {
        let catalog = tiny_catalog();
        let evaluator = FitnessEvaluator::new(&catalog);
        let schedule = Schedule::new()
            .with_assignment("A1", Assignment::new("Hall 1", "9 AM", "Ann"))
            .with_assignment("A2", Assignment::new("Hall 2", "9 AM", "Ann"))
            .with_assignment("A3", Assignment::new("Hall 1", "10 AM", "Bob"));
        let breakdown = evaluator.breakdown(&schedule).unwrap();
        assert!((breakdown.get("facilitator_slot_load") - (-0.2 - 0.2 + 0.2)).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_facilitator_scored_not_rejected() {
        let catalog = tiny_catalog();
        let evaluator = FitnessEvaluator::new(&catalog);
        let schedule = Schedule::new()
            .with_assignment("A1", Assignment::new("Hall 1", "9 AM", "Mystery"))
            .with_assignment("A2", Assignment::new("Hall 1", "10 AM", "Ann"))
            .with_assignment("A3", Assignment::new("Hall 2", "10 AM", "Bob"));
        let breakdown = evaluator.breakdown(&schedule).unwrap();
        assert!((breakdown.get("facilitator_preference") - (-0.1 + 0.2 - 0.1)).abs() < 1e-9);
    }

    #[test]
    fn test_roster_facilitators_with_zero_load_unpenalized() {
        let catalog = tiny_catalog().with_facilitators(["Ann", "Bob", "Cleo", "Dan"]);
        let evaluator = FitnessEvaluator::new(&catalog);
        let schedule = Schedule::new()
            .with_assignment("A1", Assignment::new("Hall 1", "9 AM", "Ann"))
            .with_assignment("A2", Assignment::new("Hall 1", "10 AM", "Ann"))
            .with_assignment("A3", Assignment::new("Hall 2", "10 AM", "Ann"));
        let breakdown = evaluator.breakdown(&schedule).unwrap();
        // Ann has 3 → no penalty; Bob, Cleo, Dan have 0 → no penalty.
        assert_eq!(breakdown.get(TERM_TOTAL_LOAD), 0.0);
    }

    #[test]
    fn test_load_exemption() {
        let exempt = tiny_catalog().with_policy(ScoringPolicy {
            load_exempt_facilitator: Some("Bob".into()),
            section_pairs: None,
        });
        let evaluator = FitnessEvaluator::new(&exempt);

        let bob_one = Schedule::new()
            .with_assignment("A1", Assignment::new("Hall 1", "9 AM", "Ann"))
            .with_assignment("A2", Assignment::new("Hall 1", "10 AM", "Ann"))
            .with_assignment("A3", Assignment::new("Hall 2", "10 AM", "Bob"));
        // Ann 2 → -0.4; Bob 1 → exempt.
        let b = evaluator.breakdown(&bob_one).unwrap();
        assert!((b.get(TERM_TOTAL_LOAD) - (-0.4)).abs() < 1e-9);

        let bob_two = Schedule::new()
            .with_assignment("A1", Assignment::new("Hall 1", "9 AM", "Ann"))
            .with_assignment("A2", Assignment::new("Hall 1", "10 AM", "Bob"))
            .with_assignment("A3", Assignment::new("Hall 2", "10 AM", "Bob"));
        // Ann 1 → -0.4; Bob 2 → -0.4 even when exempt.
        let b = evaluator.breakdown(&bob_two).unwrap();
        assert!((b.get(TERM_TOTAL_LOAD) - (-0.8)).abs() < 1e-9);
    }

    #[test]
    fn test_overloaded_facilitator() {
        let catalog = sla_catalog();
        let evaluator = FitnessEvaluator::new(&catalog);
        let mut schedule = spread_schedule(&catalog);
        for (_, a) in schedule.assignments.iter_mut() {
            a.facilitator = "Lock".into();
        }
        let b = evaluator.breakdown(&schedule).unwrap();
        // Lock has 11 → -0.5; everyone else has 0.
        assert!((b.get(TERM_TOTAL_LOAD) - (-0.5)).abs() < 1e-9);
    }

    #[test]
    fn test_time_preferences_both_apply() {
        let catalog = tiny_catalog().with_time_preference(
            "Bob",
            TimePreference::new().with_like("10 AM", 0.1).with_avoid("10 AM", -0.3),
        );
        let evaluator = FitnessEvaluator::new(&catalog);
        let schedule = Schedule::new()
            .with_assignment("A1", Assignment::new("Hall 1", "9 AM", "Ann"))
            .with_assignment("A2", Assignment::new("Hall 1", "10 AM", "Ann"))
            .with_assignment("A3", Assignment::new("Hall 2", "10 AM", "Bob"));
        let b = evaluator.breakdown(&schedule).unwrap();
        assert!((b.get("time_like") - 0.1).abs() < 1e-9);
        assert!((b.get("time_avoid") - (-0.3)).abs() < 1e-9);
    }

    #[test]
    fn test_sibling_same_slot_vs_far_apart_swing() {
        let catalog = sla_catalog();
        let evaluator = FitnessEvaluator::new(&catalog);

        let mut same = spread_schedule(&catalog);
        let mut apart = spread_schedule(&catalog);
        same.assignment_mut("SLA101A").unwrap().time = "10 AM".into();
        same.assignment_mut("SLA101B").unwrap().time = "10 AM".into();
        apart.assignment_mut("SLA101A").unwrap().time = "10 AM".into();
        apart.assignment_mut("SLA101B").unwrap().time = "3 PM".into();

        let b_same = evaluator.breakdown(&same).unwrap();
        let b_apart = evaluator.breakdown(&apart).unwrap();

        // Sibling term: -0.5 vs +0.5 for the SLA101 pair; SLA191 unchanged.
        assert!(
            (b_apart.get(TERM_SECTION_SPACING) - b_same.get(TERM_SECTION_SPACING) - 1.0).abs()
                < 1e-9
        );
    }

    #[test]
    fn test_cross_section_consecutive_with_split_buildings() {
        let catalog = sla_catalog();
        let evaluator = FitnessEvaluator::new(&catalog);
        let mut schedule = spread_schedule(&catalog);
        // Pin all four paired sections: only SLA101A/SLA191A are close.
        schedule.insert("SLA101A", Assignment::new("Roman 216", "10 AM", "Glen"));
        schedule.insert("SLA191A", Assignment::new("Frank 119", "11 AM", "Lock"));
        schedule.insert("SLA101B", Assignment::new("Loft 206", "3 PM", "Banks"));
        schedule.insert("SLA191B", Assignment::new("Loft 310", "3 PM", "Banks"));

        let b = evaluator.breakdown(&schedule).unwrap();
        // 101A-191A: dt 1 → +0.5, Roman vs Frank → -0.4
        // 101A-191B: dt 5 → 0
        // 101B-191A: dt 4 → 0
        // 101B-191B: dt 0 → -0.25
        assert!((b.get(TERM_CROSS_SPACING) - 0.25).abs() < 1e-9);
        assert!((b.get(TERM_PROXIMITY) - (-0.4)).abs() < 1e-9);
        // Siblings: 101 dt 5 → +0.5; 191 dt 4 → 0
        assert!((b.get(TERM_SECTION_SPACING) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_cross_section_both_nearby_no_penalty() {
        let catalog = sla_catalog();
        let evaluator = FitnessEvaluator::new(&catalog);
        let mut schedule = spread_schedule(&catalog);
        schedule.insert("SLA101A", Assignment::new("Roman 216", "10 AM", "Glen"));
        schedule.insert("SLA191A", Assignment::new("Beach 301", "11 AM", "Lock"));
        schedule.insert("SLA101B", Assignment::new("Loft 206", "3 PM", "Banks"));
        schedule.insert("SLA191B", Assignment::new("Loft 310", "3 PM", "Banks"));

        let b = evaluator.breakdown(&schedule).unwrap();
        assert_eq!(b.get(TERM_PROXIMITY), 0.0);
    }

    #[test]
    fn test_breakdown_sums_to_total() {
        let catalog = sla_catalog();
        let evaluator = FitnessEvaluator::new(&catalog);
        let schedule = spread_schedule(&catalog);
        let b = evaluator.breakdown(&schedule).unwrap();
        let sum: f64 = b.terms.iter().map(|(_, v)| v).sum();
        assert!((sum - b.total).abs() < 1e-9);
        assert_eq!(b.total.to_bits(), evaluator.evaluate(&schedule).to_bits());
    }

    #[test]
    fn test_contract_violations() {
        let catalog = tiny_catalog();
        let evaluator = FitnessEvaluator::new(&catalog);

        let missing = Schedule::new()
            .with_assignment("A1", Assignment::new("Hall 1", "9 AM", "Ann"));
        assert_eq!(
            evaluator.try_evaluate(&missing),
            Err(ScheduleError::MissingActivity("A2".into()))
        );

        let bad_room = Schedule::new()
            .with_assignment("A1", Assignment::new("Hall 9", "9 AM", "Ann"))
            .with_assignment("A2", Assignment::new("Hall 1", "9 AM", "Ann"))
            .with_assignment("A3", Assignment::new("Hall 1", "9 AM", "Ann"));
        assert!(matches!(
            evaluator.try_evaluate(&bad_room),
            Err(ScheduleError::UnknownRoom { .. })
        ));

        let extra = Schedule::new()
            .with_assignment("A1", Assignment::new("Hall 1", "9 AM", "Ann"))
            .with_assignment("A2", Assignment::new("Hall 1", "9 AM", "Ann"))
            .with_assignment("A3", Assignment::new("Hall 1", "9 AM", "Ann"))
            .with_assignment("A4", Assignment::new("Hall 1", "9 AM", "Ann"));
        assert_eq!(
            evaluator.try_evaluate(&extra),
            Err(ScheduleError::UnknownActivity("A4".into()))
        );
    }

    #[test]
    #[should_panic(expected = "unknown time slot")]
    fn test_evaluate_panics_on_contract_violation() {
        let catalog = tiny_catalog();
        let evaluator = FitnessEvaluator::new(&catalog);
        let schedule = Schedule::new()
            .with_assignment("A1", Assignment::new("Hall 1", "midnight", "Ann"))
            .with_assignment("A2", Assignment::new("Hall 1", "9 AM", "Ann"))
            .with_assignment("A3", Assignment::new("Hall 1", "9 AM", "Ann"));
        evaluator.evaluate(&schedule);
    }

    #[derive(Debug)]
    struct Flat;

    impl ActivityRule for Flat {
        fn name(&self) -> &'static str {
            "flat"
        }

        fn score(&self, _ctx: &ActivityContext<'_>) -> f64 {
            1.0
        }
    }

    #[test]
    fn test_custom_rule_appended() {
        let catalog = tiny_catalog();
        let base = FitnessEvaluator::new(&catalog);
        let custom = FitnessEvaluator::new(&catalog).with_rule(Flat);
        let schedule = Schedule::new()
            .with_assignment("A1", Assignment::new("Hall 1", "9 AM", "Ann"))
            .with_assignment("A2", Assignment::new("Hall 1", "10 AM", "Ann"))
            .with_assignment("A3", Assignment::new("Hall 2", "9 AM", "Bob"));
        let delta = custom.evaluate(&schedule) - base.evaluate(&schedule);
        assert!((delta - 3.0).abs() < 1e-9);
        assert_eq!(custom.rules().last().unwrap().name(), "flat");
    }
}
