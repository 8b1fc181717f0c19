//! Conflict oracle.
//!
//! Two independent checks decide whether a candidate placement is free:
//!
//! - **Internal**: the class-level itself cannot attend two subjects at
//!   once, so any in-progress slot on the same day with an overlapping
//!   range blocks the candidate regardless of teacher or room.
//! - **External**: the teacher or the room is already committed to a
//!   different class-level of the same term during an overlapping range.
//!
//! Both checks are pure reads.

use tracing::trace;

use crate::error::{TimetableError, TimetableResult};
use crate::models::{PeriodRange, ScheduleSlot, SchedulingScope, Weekday};
use crate::store::SlotStore;

/// Answers busy queries for one class-level in one term.
#[derive(Debug)]
pub struct ConflictOracle<'a, S: ?Sized> {
    scope: &'a SchedulingScope,
    store: &'a S,
}

impl<'a, S: SlotStore + ?Sized> ConflictOracle<'a, S> {
    /// Creates an oracle over a committed-slot store.
    pub fn new(scope: &'a SchedulingScope, store: &'a S) -> Self {
        Self { scope, store }
    }

    /// The term and class-level being checked.
    pub fn scope(&self) -> &'a SchedulingScope {
        self.scope
    }

    /// Whether the class-level already has a slot overlapping `range` on `day`.
    pub fn internally_busy(
        &self,
        in_progress: &[ScheduleSlot],
        day: Weekday,
        range: PeriodRange,
    ) -> bool {
        in_progress.iter().any(|s| s.collides_with(day, &range))
    }

    /// Whether the teacher or room is committed elsewhere.
    ///
    /// A store failure aborts the run with [`TimetableError::DataAccess`].
    pub fn externally_busy(
        &self,
        day: Weekday,
        range: PeriodRange,
        teacher_id: Option<&str>,
        room_id: Option<&str>,
    ) -> TimetableResult<bool> {
        if let Some(teacher_id) = teacher_id {
            let busy = self
                .store
                .teacher_busy(self.scope, day, range, teacher_id)
                .map_err(TimetableError::DataAccess)?;
            if busy {
                trace!(%day, %range, teacher = teacher_id, "teacher busy");
                return Ok(true);
            }
        }
        if let Some(room_id) = room_id {
            let busy = self
                .store
                .room_busy(self.scope, day, range, room_id)
                .map_err(TimetableError::DataAccess)?;
            if busy {
                trace!(%day, %range, room = room_id, "room busy");
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Internal check, then external check.
    pub fn is_busy(
        &self,
        in_progress: &[ScheduleSlot],
        day: Weekday,
        range: PeriodRange,
        teacher_id: Option<&str>,
        room_id: Option<&str>,
    ) -> TimetableResult<bool> {
        if self.internally_busy(in_progress, day, range) {
            return Ok(true);
        }
        self.externally_busy(day, range, teacher_id, room_id)
    }
}
