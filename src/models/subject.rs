//! Subject model.
//!
//! A subject is the unit of work placed by the scheduler. Its weekly
//! requirement is split into theory and practice hours, and it is placed
//! as one contiguous block of `theory_hours + practice_hours` periods.

use serde::{Deserialize, Serialize};

/// A subject to be placed on the timetable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier.
    pub id: String,
    /// Course code (e.g. "CS101").
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Lecture periods per week.
    pub theory_hours: u32,
    /// Lab/workshop periods per week.
    pub practice_hours: u32,
    /// Teacher pinned to this subject. `None` (or an empty id) lets the
    /// scheduler pick one from the pool.
    pub teacher_id: Option<String>,
}

impl Subject {
    /// Creates a subject with no hours and no pinned teacher.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: String::new(),
            name: String::new(),
            theory_hours: 0,
            practice_hours: 0,
            teacher_id: None,
        }
    }

    /// Sets the course code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the subject name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets theory and practice hours.
    pub fn with_hours(mut self, theory_hours: u32, practice_hours: u32) -> Self {
        self.theory_hours = theory_hours;
        self.practice_hours = practice_hours;
        self
    }

    /// Pins a teacher.
    pub fn with_teacher(mut self, teacher_id: impl Into<String>) -> Self {
        self.teacher_id = Some(teacher_id.into());
        self
    }

    /// Total periods required: theory + practice, saturating at `u32::MAX`.
    #[inline]
    pub fn total_duration(&self) -> u32 {
        self.theory_hours.saturating_add(self.practice_hours)
    }

    /// Whether the subject has any practice hours (needs a lab/workshop).
    #[inline]
    pub fn is_practical(&self) -> bool {
        self.practice_hours > 0
    }

    /// Zero-duration subjects are never scheduled.
    #[inline]
    pub fn is_schedulable(&self) -> bool {
        self.total_duration() > 0
    }

    /// The pinned teacher, if one is set and non-empty.
    pub fn pinned_teacher(&self) -> Option<&str> {
        self.teacher_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}
