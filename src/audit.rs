//! Timetable audit.
//!
//! Re-checks a finished timetable against the placement rules. Useful for
//! accepting or rejecting a schedule produced elsewhere (e.g. by an
//! external generator) before it is persisted, and for regression checks
//! on this crate's own output.
//!
//! Rules:
//! 0. No slot ends before it starts; such slots are reported and skip the
//!    remaining checks
//! 1. Every slot references a known subject and spans exactly its duration
//! 2. No slot starts on, ends on, or spans a reserved period
//! 3. Every slot lies within a single teaching block
//! 4. No two slots of the timetable overlap on the same day
//! 5. No teacher or room overlaps a committed slot of another class-level
//!    in the same term

use std::collections::HashMap;

use crate::config::TimetableConfig;
use crate::models::{ScheduleSlot, Subject, Timetable, Violation, ViolationType};

/// Returns every rule breach found in `timetable`.
///
/// `committed` holds slots already persisted for other class-levels; slots
/// of other terms or of the timetable's own class-level are ignored.
pub fn audit_timetable(
    timetable: &Timetable,
    committed: &[ScheduleSlot],
    subjects: &[Subject],
    config: &TimetableConfig,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    let by_id: HashMap<&str, &Subject> = subjects.iter().map(|s| (s.id.as_str(), s)).collect();

    for slot in &timetable.slots {
        check_shape(slot, &by_id, config, &mut violations);
    }

    let slots: Vec<&ScheduleSlot> = timetable.slots.iter().filter(|s| !s.is_inverted()).collect();
    for (i, a) in slots.iter().enumerate() {
        for b in &slots[i + 1..] {
            if a.collides_with(b.day, &b.range()) {
                violations.push(Violation::new(
                    ViolationType::ClassOverlap,
                    &a.subject_id,
                    format!(
                        "'{}' and '{}' overlap on {} ({} / {})",
                        a.subject_id,
                        b.subject_id,
                        a.day,
                        a.range(),
                        b.range()
                    ),
                ));
            }
        }
    }

    let scope = &timetable.scope;
    let others = committed
        .iter()
        .filter(|c| c.term == scope.term && c.class_level_id != scope.class_level_id);
    for other in others {
        for slot in &slots {
            if !slot.collides_with(other.day, &other.range()) {
                continue;
            }
            if slot.teacher_id == other.teacher_id {
                violations.push(Violation::new(
                    ViolationType::TeacherDoubleBooked,
                    &slot.teacher_id,
                    format!(
                        "Teacher '{}' also teaches class-level '{}' on {} {}",
                        slot.teacher_id,
                        other.class_level_id,
                        slot.day,
                        other.range()
                    ),
                ));
            }
            if slot.room_id == other.room_id {
                violations.push(Violation::new(
                    ViolationType::RoomDoubleBooked,
                    &slot.room_id,
                    format!(
                        "Room '{}' also hosts class-level '{}' on {} {}",
                        slot.room_id,
                        other.class_level_id,
                        slot.day,
                        other.range()
                    ),
                ));
            }
        }
    }

    violations
}

fn check_shape(
    slot: &ScheduleSlot,
    subjects: &HashMap<&str, &Subject>,
    config: &TimetableConfig,
    violations: &mut Vec<Violation>,
) {
    if slot.is_inverted() {
        violations.push(Violation::new(
            ViolationType::InvertedRange,
            &slot.subject_id,
            format!(
                "'{}' on {} ends at period {} before it starts at {}",
                slot.subject_id, slot.day, slot.end_period, slot.start_period
            ),
        ));
        return;
    }

    match subjects.get(slot.subject_id.as_str()) {
        None => violations.push(Violation::new(
            ViolationType::UnknownSubject,
            &slot.subject_id,
            format!("Slot references unknown subject '{}'", slot.subject_id),
        )),
        Some(subject) if subject.total_duration() != slot.duration() => {
            violations.push(Violation::new(
                ViolationType::DurationMismatch,
                &slot.subject_id,
                format!(
                    "'{}' needs {} periods but slot {} has {}",
                    slot.subject_id,
                    subject.total_duration(),
                    slot.range(),
                    slot.duration()
                ),
            ))
        }
        Some(_) => {}
    }

    let range = slot.range();
    if let Some(&reserved) = config.reserved_periods.iter().find(|&&p| range.contains(p)) {
        violations.push(Violation::new(
            ViolationType::ReservedPeriod,
            &slot.subject_id,
            format!(
                "'{}' on {} {} covers reserved period {}",
                slot.subject_id, slot.day, range, reserved
            ),
        ));
    }

    let in_block = config
        .blocks
        .iter()
        .any(|b| range.start >= b.first_period && range.end <= b.last_period);
    if !in_block {
        violations.push(Violation::new(
            ViolationType::OutsideTeachingBlock,
            &slot.subject_id,
            format!(
                "'{}' on {} {} is not inside a teaching block",
                slot.subject_id, slot.day, range
            ),
        ));
    }
}
