//! Committed-schedule store.
//!
//! The scheduler never writes to persistent storage. It only asks whether
//! a teacher or room is already committed, in the same term, to a
//! *different* class-level during an overlapping period range. Callers back
//! this with whatever they persist to (SQL table, document store, ...).
//!
//! [`InMemorySlotStore`] is the reference implementation. Its
//! [`commit`](InMemorySlotStore::commit) enforces the same uniqueness rule
//! the check answers, so two runs that both observed "free" cannot both
//! commit an overlapping booking.

use tracing::debug;

use crate::error::{BoxError, TimetableError, TimetableResult};
use crate::models::{PeriodRange, ScheduleSlot, SchedulingScope, Timetable, Weekday};

/// Read access to slots already committed for other class-levels.
///
/// Implementations must only consider slots with the same term as `scope`
/// and a class-level different from `scope.class_level_id`.
pub trait SlotStore {
    /// Whether `teacher_id` teaches another class-level during `range` on `day`.
    fn teacher_busy(
        &self,
        scope: &SchedulingScope,
        day: Weekday,
        range: PeriodRange,
        teacher_id: &str,
    ) -> Result<bool, BoxError>;

    /// Whether `room_id` hosts another class-level during `range` on `day`.
    fn room_busy(
        &self,
        scope: &SchedulingScope,
        day: Weekday,
        range: PeriodRange,
        room_id: &str,
    ) -> Result<bool, BoxError>;
}

/// In-memory committed schedule.
#[derive(Debug, Clone, Default)]
pub struct InMemorySlotStore {
    slots: Vec<ScheduleSlot>,
}

impl InMemorySlotStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-loaded with committed slots.
    ///
    /// No uniqueness check is applied to seeded data.
    pub fn with_slots(slots: Vec<ScheduleSlot>) -> Self {
        Self { slots }
    }

    /// All committed slots.
    pub fn committed(&self) -> &[ScheduleSlot] {
        &self.slots
    }

    /// Removes every slot of `scope`'s term and class-level.
    ///
    /// Must be called before a fresh run for that scope. Returns the number
    /// of slots removed.
    pub fn clear_scope(&mut self, scope: &SchedulingScope) -> usize {
        let before = self.slots.len();
        self.slots
            .retain(|s| !(s.term == scope.term && s.class_level_id == scope.class_level_id));
        let removed = before - self.slots.len();
        debug!(
            term = %scope.term,
            class_level = %scope.class_level_id,
            removed,
            "cleared committed slots"
        );
        removed
    }

    /// Commits all slots of a timetable, or none of them.
    ///
    /// Rejects the commit if any slot would double-book a teacher or room
    /// against another class-level of the same term.
    pub fn commit(&mut self, timetable: &Timetable) -> TimetableResult<usize> {
        for slot in &timetable.slots {
            if let Some(other) = self.find_clash(slot) {
                let resource = if other.teacher_id == slot.teacher_id {
                    format!("teacher {}", slot.teacher_id)
                } else {
                    format!("room {}", slot.room_id)
                };
                return Err(TimetableError::CommitConflict {
                    day: slot.day,
                    range: slot.range(),
                    resource,
                    other_class_level: other.class_level_id.clone(),
                });
            }
        }
        self.slots.extend(timetable.slots.iter().cloned());
        debug!(
            term = %timetable.scope.term,
            class_level = %timetable.scope.class_level_id,
            committed = timetable.slots.len(),
            "committed timetable"
        );
        Ok(timetable.slots.len())
    }

    fn find_clash(&self, slot: &ScheduleSlot) -> Option<&ScheduleSlot> {
        self.slots.iter().find(|s| {
            s.term == slot.term
                && s.class_level_id != slot.class_level_id
                && s.collides_with(slot.day, &slot.range())
                && (s.teacher_id == slot.teacher_id || s.room_id == slot.room_id)
        })
    }

    fn others<'a>(
        &'a self,
        scope: &'a SchedulingScope,
        day: Weekday,
        range: PeriodRange,
    ) -> impl Iterator<Item = &'a ScheduleSlot> + 'a {
        self.slots.iter().filter(move |s| {
            s.term == scope.term
                && s.class_level_id != scope.class_level_id
                && s.collides_with(day, &range)
        })
    }
}

impl SlotStore for InMemorySlotStore {
    fn teacher_busy(
        &self,
        scope: &SchedulingScope,
        day: Weekday,
        range: PeriodRange,
        teacher_id: &str,
    ) -> Result<bool, BoxError> {
        Ok(self
            .others(scope, day, range)
            .any(|s| s.teacher_id == teacher_id))
    }

    fn room_busy(
        &self,
        scope: &SchedulingScope,
        day: Weekday,
        range: PeriodRange,
        room_id: &str,
    ) -> Result<bool, BoxError> {
        Ok(self.others(scope, day, range).any(|s| s.room_id == room_id))
    }
}
