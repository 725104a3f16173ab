//! Error types for u-timetable.
//!
//! Two families:
//! - [`TimetableError`]: recoverable setup failures (bad config, bad catalog,
//!   malformed JSON).
//! - [`ScheduleError`]: a schedule that breaks the structural contract
//!   against its catalog. The evaluator treats these as programming errors.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised while preparing a timetabling run.
#[derive(Debug, Error)]
pub enum TimetableError {
    /// GA configuration is out of range.
    #[error("Invalid GA configuration: {0}")]
    InvalidConfig(String),

    /// Catalog failed validation; carries every detected issue.
    #[error("Invalid catalog ({} issue(s)): {}", .0.len(), join_messages(.0))]
    InvalidCatalog(Vec<ValidationError>),

    /// Catalog JSON could not be parsed.
    #[error("Catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Contract violations between a schedule and its catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Schedule contains an activity the catalog does not know.
    #[error("Unknown activity: {0}")]
    UnknownActivity(String),

    /// Catalog activity has no assignment in the schedule.
    #[error("Missing assignment for activity: {0}")]
    MissingActivity(String),

    /// Assignment references a room the catalog does not know.
    #[error("Activity '{activity}' assigned to unknown room '{room}'")]
    UnknownRoom { activity: String, room: String },

    /// Assignment references a time slot the catalog does not know.
    #[error("Activity '{activity}' assigned to unknown time slot '{time}'")]
    UnknownTimeSlot { activity: String, time: String },
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
