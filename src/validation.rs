//! Input validation for timetabling runs.
//!
//! Checks structural integrity of subjects, teachers, and rooms before
//! scheduling. Detects:
//! - Duplicate IDs
//! - Blank IDs
//! - Pinned teachers missing from the teacher pool
//! - Subjects longer than every teaching block (can never be placed)
//!
//! Findings are advisory; the scheduler itself does not require a clean
//! validation to run. Empty input collections are reported by the
//! scheduler as [`TimetableError::InputInsufficient`](crate::error::TimetableError).

use std::collections::HashSet;

use thiserror::Error;

use crate::config::TimetableConfig;
use crate::models::{Room, Subject, Teacher};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
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
    /// An entity has an empty ID.
    BlankId,
    /// A subject pins a teacher that is not in the pool.
    InvalidTeacherReference,
    /// A subject needs more contiguous periods than any block offers.
    UnplaceableSubject,
    /// The timetable configuration is malformed.
    InvalidConfig,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the inputs of a scheduling run.
///
/// Checks:
/// 1. No blank or duplicate subject, teacher, or room IDs
/// 2. Every pinned teacher exists in the teacher pool
/// 3. Every schedulable subject fits in at least one teaching block
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    subjects: &[Subject],
    teachers: &[Teacher],
    rooms: &[Room],
    config: &TimetableConfig,
) -> ValidationResult {
    let mut errors = Vec::new();

    let teacher_ids = collect_ids(
        "teacher",
        teachers.iter().map(|t| t.id.as_str()),
        &mut errors,
    );
    collect_ids("room", rooms.iter().map(|r| r.id.as_str()), &mut errors);
    collect_ids(
        "subject",
        subjects.iter().map(|s| s.id.as_str()),
        &mut errors,
    );

    for subject in subjects {
        if let Some(teacher_id) = subject.pinned_teacher() {
            if !teacher_ids.contains(teacher_id) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidTeacherReference,
                    format!(
                        "Subject '{}' pins unknown teacher '{}'",
                        subject.id, teacher_id
                    ),
                ));
            }
        }
    }

    let max_span = config.max_block_span();
    for subject in subjects.iter().filter(|s| s.is_schedulable()) {
        if subject.total_duration() > max_span {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnplaceableSubject,
                format!(
                    "Subject '{}' needs {} periods but the longest block has {}",
                    subject.id,
                    subject.total_duration(),
                    max_span
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn collect_ids<'a>(
    entity: &str,
    ids: impl Iterator<Item = &'a str>,
    errors: &mut Vec<ValidationError>,
) -> HashSet<&'a str> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankId,
                format!("Blank {entity} ID"),
            ));
            continue;
        }
        if !seen.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {entity} ID: {id}"),
            ));
        }
    }
    seen
}
