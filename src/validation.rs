//! Input validation for timetabling problems.
//!
//! Checks structural integrity of the catalog before a run and of
//! schedules against their catalog. Detects:
//! - Duplicate IDs
//! - Empty domains (nothing to draw rooms, times or facilitators from)
//! - Zero enrollment (room-size ratio undefined)
//! - Preference and policy entries that reference unknown entities
//! - Schedules with missing, extra or out-of-domain assignments
//!
//! All checks collect every issue instead of stopping at the first.

use std::collections::HashSet;

use crate::error::ScheduleError;
use crate::models::{Catalog, Schedule};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A domain the search draws from is empty.
    EmptyDomain,
    /// An activity has zero expected enrollment.
    InvalidEnrollment,
    /// A time preference names a slot that doesn't exist.
    InvalidTimeReference,
    /// The scoring policy names an activity or facilitator that doesn't exist.
    InvalidPolicyReference,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a catalog.
///
/// Checks:
/// 1. Activities, rooms, time slots and facilitators are non-empty
/// 2. No duplicate IDs within each of those collections
/// 3. Every activity has non-zero enrollment
/// 4. Time preferences reference known time slots
/// 5. Scoring policy references known activities and facilitators
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(catalog: &Catalog) -> ValidationResult {
    let mut errors = Vec::new();

    let domains: [(&str, usize); 4] = [
        ("activities", catalog.activities.len()),
        ("rooms", catalog.rooms.len()),
        ("time slots", catalog.time_slots.len()),
        ("facilitators", catalog.facilitators.len()),
    ];
    for (name, len) in domains {
        if len == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyDomain,
                format!("Catalog has no {name}"),
            ));
        }
    }

    check_duplicates(
        "activity",
        catalog.activities.iter().map(|a| a.id.as_str()),
        &mut errors,
    );
    check_duplicates("room", catalog.rooms.iter().map(|r| r.id.as_str()), &mut errors);
    check_duplicates(
        "time slot",
        catalog.time_slots.iter().map(String::as_str),
        &mut errors,
    );
    check_duplicates(
        "facilitator",
        catalog.facilitators.iter().map(String::as_str),
        &mut errors,
    );

    for act in &catalog.activities {
        if act.enrollment == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidEnrollment,
                format!("Activity '{}' has zero enrollment", act.id),
            ));
        }
    }

    let slots: HashSet<&str> = catalog.time_slots.iter().map(String::as_str).collect();
    let mut facilitators: Vec<&String> = catalog.time_preferences.keys().collect();
    facilitators.sort();
    for facilitator in facilitators {
        let pref = &catalog.time_preferences[facilitator];
        let mut times: Vec<&String> = pref.like.keys().chain(pref.avoid.keys()).collect();
        times.sort();
        times.dedup();
        for time in times {
            if !slots.contains(time.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidTimeReference,
                    format!(
                        "Time preference for '{facilitator}' references unknown time slot '{time}'"
                    ),
                ));
            }
        }
    }

    let activity_ids: HashSet<&str> = catalog.activities.iter().map(|a| a.id.as_str()).collect();
    if let Some(pairs) = &catalog.policy.section_pairs {
        for id in pairs
            .primary
            .sections()
            .into_iter()
            .chain(pairs.secondary.sections())
        {
            if !activity_ids.contains(id) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidPolicyReference,
                    format!("Section pair references unknown activity '{id}'"),
                ));
            }
        }
    }
    if let Some(exempt) = &catalog.policy.load_exempt_facilitator {
        if !catalog.has_facilitator(exempt) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidPolicyReference,
                format!("Load exemption names unknown facilitator '{exempt}'"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_duplicates<'a>(
    label: &str,
    ids: impl Iterator<Item = &'a str>,
    errors: &mut Vec<ValidationError>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {label} ID: {id}"),
            ));
        }
    }
}

/// Checks a schedule's structural invariant against its catalog.
///
/// Every catalog activity must be assigned exactly once, no other
/// activities may appear, and each room and time slot must be known.
/// Facilitators are not checked.
pub fn validate_schedule(catalog: &Catalog, schedule: &Schedule) -> Result<(), Vec<ScheduleError>> {
    let mut errors = Vec::new();

    for act in &catalog.activities {
        if schedule.assignment_for_activity(&act.id).is_none() {
            errors.push(ScheduleError::MissingActivity(act.id.clone()));
        }
    }

    for (activity, assignment) in schedule.iter() {
        if catalog.activity(activity).is_none() {
            errors.push(ScheduleError::UnknownActivity(activity.clone()));
        }
        if catalog.room(&assignment.room).is_none() {
            errors.push(ScheduleError::UnknownRoom {
                activity: activity.clone(),
                room: assignment.room.clone(),
            });
        }
        if catalog.time_index(&assignment.time).is_none() {
            errors.push(ScheduleError::UnknownTimeSlot {
                activity: activity.clone(),
                time: assignment.time.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
