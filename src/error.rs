//! Timetable error types.
//!
//! Placement failures are not errors: a subject that cannot be placed ends
//! up in [`Timetable::unscheduled`](crate::models::Timetable::unscheduled).
//! Only conditions that make the whole run meaningless are reported here.

use std::fmt;

use thiserror::Error;

use crate::models::{PeriodRange, Weekday};
use crate::validation::ValidationError;

/// Boxed error returned by [`SlotStore`](crate::store::SlotStore) implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that abort a scheduling run.
#[derive(Debug, Error)]
pub enum TimetableError {
    /// A required input collection was empty; the caller should not have
    /// invoked scheduling at all.
    #[error("insufficient input: no {0} supplied")]
    InputInsufficient(MissingInput),

    /// The committed-schedule store failed. No partial timetable is returned.
    #[error("data access failed: {0}")]
    DataAccess(#[source] BoxError),

    /// The configuration failed validation.
    #[error("invalid timetable configuration: {}", join_messages(.0))]
    InvalidConfig(Vec<ValidationError>),

    /// The TOML configuration could not be parsed.
    #[error("failed to parse timetable configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// The store refused a commit because a teacher or room would be
    /// double-booked across class-levels.
    #[error("commit conflict on {day} periods {range}: {resource} already booked by class-level {other_class_level}")]
    CommitConflict {
        day: Weekday,
        range: PeriodRange,
        resource: String,
        other_class_level: String,
    },
}

/// Which input collection was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingInput {
    Subjects,
    Teachers,
    Rooms,
}

impl fmt::Display for MissingInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MissingInput::Subjects => "subjects",
            MissingInput::Teachers => "teachers",
            MissingInput::Rooms => "rooms",
        };
        f.write_str(s)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type TimetableResult<T> = Result<T, TimetableError>;
