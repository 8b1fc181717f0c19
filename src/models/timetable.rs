//! Timetable (run result) model.
//!
//! A timetable is the ordered list of slots committed for one class-level
//! in one run, together with the subjects that could not be placed.
//! Audits attach [`Violation`]s to describe rule breaches in a schedule
//! that did not come from this engine.

use serde::{Deserialize, Serialize};

use super::{SchedulingScope, ScheduleSlot, Weekday};

/// The outcome of one scheduling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timetable {
    /// Term and class-level this timetable was built for.
    pub scope: SchedulingScope,
    /// Committed slots, in commit order.
    pub slots: Vec<ScheduleSlot>,
    /// Subjects that exhausted every day/period/room combination.
    pub unscheduled: Vec<UnscheduledSubject>,
}

/// A subject the run could not place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnscheduledSubject {
    pub subject_id: String,
    /// Periods the subject needed.
    pub duration: u32,
    /// Teacher that was resolved for the subject.
    pub teacher_id: String,
}

/// Per-subject placement state.
///
/// Every subject starts `Pending` and ends in exactly one terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubjectState {
    /// Not yet attempted (or not part of this run).
    Pending,
    /// A slot was committed.
    Scheduled,
    /// All options exhausted.
    Unscheduled,
}

/// A rule breach found by an audit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Related entity ID (subject, teacher, or room).
    pub entity_id: String,
    /// Human-readable description.
    pub message: String,
    /// Severity (0-100, higher = worse).
    pub severity: i32,
}

/// Classification of timetable violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// Slot length differs from the subject's total duration.
    DurationMismatch,
    /// Slot starts, ends, or spans a reserved period.
    ReservedPeriod,
    /// Slot is not contained in a single teaching block.
    OutsideTeachingBlock,
    /// Two slots of the same class-level overlap.
    ClassOverlap,
    /// A teacher is in two class-levels at once.
    TeacherDoubleBooked,
    /// A room hosts two class-levels at once.
    RoomDoubleBooked,
    /// Slot references a subject that is not in the input.
    UnknownSubject,
    /// Slot ends before it starts.
    InvertedRange,
}

impl Violation {
    /// Creates a violation.
    pub fn new(
        violation_type: ViolationType,
        entity_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let severity = match violation_type {
            ViolationType::ClassOverlap
            | ViolationType::TeacherDoubleBooked
            | ViolationType::RoomDoubleBooked => 95,
            ViolationType::DurationMismatch
            | ViolationType::UnknownSubject
            | ViolationType::InvertedRange => 80,
            ViolationType::ReservedPeriod | ViolationType::OutsideTeachingBlock => 60,
        };
        Self {
            violation_type,
            entity_id: entity_id.into(),
            message: message.into(),
            severity,
        }
    }
}

impl Timetable {
    /// Creates an empty timetable for a scope.
    pub fn new(scope: SchedulingScope) -> Self {
        Self {
            scope,
            slots: Vec::new(),
            unscheduled: Vec::new(),
        }
    }

    /// Whether every attempted subject was placed.
    pub fn is_complete(&self) -> bool {
        self.unscheduled.is_empty()
    }

    /// Number of committed slots.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Total committed periods.
    pub fn total_periods(&self) -> u32 {
        self.slots.iter().map(ScheduleSlot::duration).sum()
    }

    /// Slots on a given day, in commit order.
    pub fn slots_on(&self, day: Weekday) -> Vec<&ScheduleSlot> {
        self.slots.iter().filter(|s| s.day == day).collect()
    }

    /// The slot committed for a subject.
    pub fn slot_for_subject(&self, subject_id: &str) -> Option<&ScheduleSlot> {
        self.slots.iter().find(|s| s.subject_id == subject_id)
    }

    /// Identifiers of unplaced subjects.
    pub fn unscheduled_ids(&self) -> Vec<&str> {
        self.unscheduled
            .iter()
            .map(|u| u.subject_id.as_str())
            .collect()
    }

    /// Terminal state of a subject after the run.
    pub fn state_of(&self, subject_id: &str) -> SubjectState {
        if self.slot_for_subject(subject_id).is_some() {
            SubjectState::Scheduled
        } else if self.unscheduled.iter().any(|u| u.subject_id == subject_id) {
            SubjectState::Unscheduled
        } else {
            SubjectState::Pending
        }
    }
}
