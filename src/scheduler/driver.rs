//! Greedy timetable driver.
//!
//! # Algorithm
//!
//! 1. Drop subjects with zero total duration.
//! 2. Stable-sort the rest by total duration, longest first.
//! 3. For each subject, resolve its teacher, then try days least-loaded
//!    first, candidate starts earliest first, and eligible rooms in input
//!    order. The first combination free of internal and external conflicts
//!    is committed.
//! 4. A subject with no free combination is recorded as unscheduled and
//!    the run continues.
//!
//! Longest-first places hard-to-fit subjects while the most slack remains.
//! The result is deterministic for a fixed input order and a reproducible
//! teacher-selection policy. It is not optimal.
//!
//! # Complexity
//! O(n * d * c * r) store queries where n=subjects, d=days,
//! c=candidate starts, r=eligible rooms.

use std::cmp::Reverse;

use tracing::{debug, info, trace, warn};

use super::{ConflictOracle, DayLoad, SlotCandidateGenerator, TeacherSelector};
use crate::config::TimetableConfig;
use crate::error::{MissingInput, TimetableError, TimetableResult};
use crate::models::{
    Room, ScheduleSlot, SchedulingScope, Subject, Teacher, Timetable, UnscheduledSubject,
};
use crate::scheduler::selector::eligible_rooms;
use crate::store::SlotStore;

/// Input container for one class-level run.
#[derive(Debug, Clone)]
pub struct TimetableRequest {
    /// Term and class-level to build.
    pub scope: SchedulingScope,
    /// Subjects of the class-level.
    pub subjects: Vec<Subject>,
    /// Teacher pool.
    pub teachers: Vec<Teacher>,
    /// Room pool. Order decides which free room wins.
    pub rooms: Vec<Room>,
}

impl TimetableRequest {
    /// Creates a request with empty pools.
    pub fn new(scope: SchedulingScope) -> Self {
        Self {
            scope,
            subjects: Vec::new(),
            teachers: Vec::new(),
            rooms: Vec::new(),
        }
    }

    /// Sets the subjects.
    pub fn with_subjects(mut self, subjects: Vec<Subject>) -> Self {
        self.subjects = subjects;
        self
    }

    /// Sets the teacher pool.
    pub fn with_teachers(mut self, teachers: Vec<Teacher>) -> Self {
        self.teachers = teachers;
        self
    }

    /// Sets the room pool.
    pub fn with_rooms(mut self, rooms: Vec<Room>) -> Self {
        self.rooms = rooms;
        self
    }
}

/// Deterministic greedy class-timetable scheduler.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Room, SchedulingScope, Subject, Teacher, Weekday};
/// use u_timetable::scheduler::{TimetableRequest, TimetableScheduler};
/// use u_timetable::store::InMemorySlotStore;
///
/// let request = TimetableRequest::new(SchedulingScope::new("2026-1", "CS1A"))
///     .with_subjects(vec![
///         Subject::new("math").with_hours(3, 0),
///         Subject::new("chem").with_hours(1, 2),
///     ])
///     .with_teachers(vec![Teacher::new("T1")])
///     .with_rooms(vec![Room::classroom("C1"), Room::lab("L1")]);
///
/// let store = InMemorySlotStore::new();
/// let timetable = TimetableScheduler::new().schedule(&request, &store).unwrap();
///
/// assert!(timetable.is_complete());
/// let chem = timetable.slot_for_subject("chem").unwrap();
/// assert_eq!(chem.room_id, "L1");
/// assert_eq!(chem.day, Weekday::Tuesday);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimetableScheduler {
    config: TimetableConfig,
}

impl TimetableScheduler {
    /// Creates a scheduler with the default timetable shape.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scheduler with a custom configuration.
    pub fn with_config(config: TimetableConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &TimetableConfig {
        &self.config
    }

    /// Builds the timetable for one class-level.
    ///
    /// The store must already be cleared of the request's own scope.
    ///
    /// # Errors
    /// - [`TimetableError::InputInsufficient`] if subjects, teachers or rooms are empty.
    /// - [`TimetableError::InvalidConfig`] if the configuration is malformed.
    /// - [`TimetableError::DataAccess`] if the store fails; nothing is returned
    ///   and nothing should be persisted.
    pub fn schedule<S: SlotStore + ?Sized>(
        &self,
        request: &TimetableRequest,
        store: &S,
    ) -> TimetableResult<Timetable> {
        self.config.ensure_valid()?;
        if request.subjects.is_empty() {
            return Err(TimetableError::InputInsufficient(MissingInput::Subjects));
        }
        if request.teachers.is_empty() {
            return Err(TimetableError::InputInsufficient(MissingInput::Teachers));
        }
        if request.rooms.is_empty() {
            return Err(TimetableError::InputInsufficient(MissingInput::Rooms));
        }

        let scope = &request.scope;
        let order = self.sort_subjects(&request.subjects);
        info!(
            term = %scope.term,
            class_level = %scope.class_level_id,
            subjects = order.len(),
            skipped_empty = request.subjects.len() - order.len(),
            "scheduling class-level"
        );

        let generator = SlotCandidateGenerator::new(&self.config);
        let oracle = ConflictOracle::new(scope, store);
        let mut selector = TeacherSelector::new(self.config.teacher_selection);
        let mut load = DayLoad::new(&self.config.days);
        let mut timetable = Timetable::new(scope.clone());

        for subject in order {
            let teacher_id = selector
                .select_teacher(subject, &request.teachers)
                .ok_or(TimetableError::InputInsufficient(MissingInput::Teachers))?
                .to_string();
            let rooms = eligible_rooms(subject, &request.rooms);

            match self.place_subject(
                subject,
                &teacher_id,
                &rooms,
                &generator,
                &oracle,
                &load,
                &timetable.slots,
            )? {
                Some(slot) => {
                    debug!(
                        subject = %slot.subject_id,
                        day = %slot.day,
                        start = slot.start_period,
                        end = slot.end_period,
                        teacher = %slot.teacher_id,
                        room = %slot.room_id,
                        "committed slot"
                    );
                    load.record(&slot);
                    timetable.slots.push(slot);
                }
                None => {
                    warn!(
                        subject = %subject.id,
                        duration = subject.total_duration(),
                        teacher = %teacher_id,
                        "no free day/period/room combination; subject left unscheduled"
                    );
                    timetable.unscheduled.push(UnscheduledSubject {
                        subject_id: subject.id.clone(),
                        duration: subject.total_duration(),
                        teacher_id,
                    });
                }
            }
        }

        debug_assert_eq!(
            load.totals(),
            DayLoad::from_slots(&self.config.days, &timetable.slots).totals()
        );
        info!(
            term = %scope.term,
            class_level = %scope.class_level_id,
            placed = timetable.slots.len(),
            unscheduled = timetable.unscheduled.len(),
            "class-level scheduled"
        );
        Ok(timetable)
    }

    /// Schedulable subjects, longest first, input order among equals.
    fn sort_subjects<'a>(&self, subjects: &'a [Subject]) -> Vec<&'a Subject> {
        let mut order: Vec<&Subject> = subjects.iter().filter(|s| s.is_schedulable()).collect();
        order.sort_by_key(|s| Reverse(s.total_duration()));
        order
    }

    /// First conflict-free (day, start, room) for a subject.
    #[allow(clippy::too_many_arguments)]
    fn place_subject<S: SlotStore + ?Sized>(
        &self,
        subject: &Subject,
        teacher_id: &str,
        rooms: &[&Room],
        generator: &SlotCandidateGenerator,
        oracle: &ConflictOracle<'_, S>,
        load: &DayLoad,
        in_progress: &[ScheduleSlot],
    ) -> TimetableResult<Option<ScheduleSlot>> {
        let duration = subject.total_duration();
        for day in load.ordered_days() {
            for range in generator.candidate_ranges(duration) {
                if oracle.internally_busy(in_progress, day, range) {
                    trace!(subject = %subject.id, %day, %range, "class already busy");
                    continue;
                }
                for room in rooms {
                    let room_id = room.id.as_str();
                    if oracle.externally_busy(day, range, Some(teacher_id), Some(room_id))? {
                        continue;
                    }
                    return Ok(Some(ScheduleSlot::new(
                        oracle.scope(),
                        day,
                        range,
                        &subject.id,
                        teacher_id,
                        room_id,
                    )));
                }
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TeacherSelection;
    use crate::error::BoxError;
    use crate::models::{PeriodRange, Weekday};
    use crate::store::InMemorySlotStore;
    use std::io;

    fn scope() -> SchedulingScope {
        SchedulingScope::new("2026-1", "A")
    }

    fn other_class_slot(
        day: Weekday,
        start: u32,
        end: u32,
        teacher: &str,
        room: &str,
    ) -> ScheduleSlot {
        ScheduleSlot::new(
            &SchedulingScope::new("2026-1", "B"),
            day,
            PeriodRange::new(start, end),
            "B-subject",
            teacher,
            room,
        )
    }

    fn request(subjects: Vec<Subject>, teachers: &[&str], rooms: Vec<Room>) -> TimetableRequest {
        TimetableRequest::new(scope())
            .with_subjects(subjects)
            .with_teachers(teachers.iter().map(|t| Teacher::new(*t)).collect())
            .with_rooms(rooms)
    }

    struct FailingStore;

    impl SlotStore for FailingStore {
        fn teacher_busy(
            &self,
            _: &SchedulingScope,
            _: Weekday,
            _: PeriodRange,
            _: &str,
        ) -> Result<bool, BoxError> {
            Err(Box::new(io::Error::new(io::ErrorKind::BrokenPipe, "connection reset")))
        }

        fn room_busy(
            &self,
            _: &SchedulingScope,
            _: Weekday,
            _: PeriodRange,
            _: &str,
        ) -> Result<bool, BoxError> {
            Ok(false)
        }
    }

    #[test]
    fn test_two_equal_subjects_spread_over_days() {
        let req = request(
            vec![
                Subject::new("S1").with_hours(2, 0),
                Subject::new("S2").with_hours(2, 0),
            ],
            &["T1"],
            vec![Room::classroom("R1")],
        );
        let t = TimetableScheduler::new()
            .schedule(&req, &InMemorySlotStore::new())
            .unwrap();

        assert!(t.is_complete());
        assert_eq!(t.slots[0].subject_id, "S1");
        assert_eq!(t.slots[0].day, Weekday::Monday);
        assert_eq!(t.slots[0].range(), PeriodRange::new(1, 2));
        assert_eq!(t.slots[1].subject_id, "S2");
        assert_eq!(t.slots[1].day, Weekday::Tuesday);
        assert_eq!(t.slots[1].range(), PeriodRange::new(1, 2));
    }

    #[test]
    fn test_longest_subject_first() {
        let req = request(
            vec![
                Subject::new("short").with_hours(2, 0),
                Subject::new("long").with_hours(4, 0),
                Subject::new("mid").with_hours(2, 1),
            ],
            &["T1"],
            vec![Room::classroom("R1")],
        );
        let t = TimetableScheduler::new()
            .schedule(&req, &InMemorySlotStore::new())
            .unwrap();

        let order: Vec<(&str, Weekday)> = t
            .slots
            .iter()
            .map(|s| (s.subject_id.as_str(), s.day))
            .collect();
        assert_eq!(
            order,
            vec![
                ("long", Weekday::Monday),
                ("mid", Weekday::Tuesday),
                ("short", Weekday::Wednesday)
            ]
        );
    }

    #[test]
    fn test_sixth_subject_returns_to_lightest_day() {
        let subjects = (1..=6)
            .map(|i| Subject::new(format!("S{i}")).with_hours(2, 0))
            .collect();
        let req = request(subjects, &["T1"], vec![Room::classroom("R1")]);
        let t = TimetableScheduler::new()
            .schedule(&req, &InMemorySlotStore::new())
            .unwrap();

        let sixth = t.slot_for_subject("S6").unwrap();
        assert_eq!(sixth.day, Weekday::Monday);
        assert_eq!(sixth.range(), PeriodRange::new(3, 4));
    }

    #[test]
    fn test_zero_duration_subjects_skipped() {
        let req = request(
            vec![Subject::new("none"), Subject::new("S1").with_hours(1, 0)],
            &["T1"],
            vec![Room::classroom("R1")],
        );
        let t = TimetableScheduler::new()
            .schedule(&req, &InMemorySlotStore::new())
            .unwrap();
        assert_eq!(t.slot_count(), 1);
        assert!(t.unscheduled.is_empty());
        assert_eq!(t.state_of("none"), crate::models::SubjectState::Pending);
    }

    #[test]
    fn test_insufficient_input() {
        let store = InMemorySlotStore::new();
        let scheduler = TimetableScheduler::new();
        let subject = || vec![Subject::new("S1").with_hours(1, 0)];

        let err = scheduler
            .schedule(&request(vec![], &["T1"], vec![Room::classroom("R1")]), &store)
            .unwrap_err();
        assert!(matches!(err, TimetableError::InputInsufficient(MissingInput::Subjects)));

        let err = scheduler
            .schedule(&request(subject(), &[], vec![Room::classroom("R1")]), &store)
            .unwrap_err();
        assert!(matches!(err, TimetableError::InputInsufficient(MissingInput::Teachers)));

        let err = scheduler
            .schedule(&request(subject(), &["T1"], vec![]), &store)
            .unwrap_err();
        assert!(matches!(err, TimetableError::InputInsufficient(MissingInput::Rooms)));
    }

    #[test]
    fn test_practical_subject_gets_lab() {
        let req = request(
            vec![Subject::new("chem").with_hours(1, 2)],
            &["T1"],
            vec![Room::classroom("C1"), Room::lab("L1")],
        );
        let t = TimetableScheduler::new()
            .schedule(&req, &InMemorySlotStore::new())
            .unwrap();
        assert_eq!(t.slots[0].room_id, "L1");
    }

    #[test]
    fn test_practical_subject_falls_back_without_lab() {
        let req = request(
            vec![Subject::new("chem").with_hours(1, 2)],
            &["T1"],
            vec![Room::classroom("C1")],
        );
        let t = TimetableScheduler::new()
            .schedule(&req, &InMemorySlotStore::new())
            .unwrap();
        assert_eq!(t.slots[0].room_id, "C1");
    }

    #[test]
    fn test_busy_teacher_pushes_to_afternoon() {
        let store = InMemorySlotStore::with_slots(vec![other_class_slot(
            Weekday::Monday,
            1,
            4,
            "T1",
            "R9",
        )]);
        let req = request(
            vec![Subject::new("S1").with_hours(2, 0).with_teacher("T1")],
            &["T1", "T2"],
            vec![Room::classroom("R1")],
        );
        let t = TimetableScheduler::new().schedule(&req, &store).unwrap();
        assert_eq!(t.slots[0].day, Weekday::Monday);
        assert_eq!(t.slots[0].range(), PeriodRange::new(6, 7));
    }

    #[test]
    fn test_busy_room_tries_next_room() {
        let store = InMemorySlotStore::with_slots(vec![other_class_slot(
            Weekday::Monday,
            1,
            2,
            "TX",
            "R1",
        )]);
        let req = request(
            vec![Subject::new("S1").with_hours(2, 0)],
            &["T1"],
            vec![Room::classroom("R1"), Room::classroom("R2")],
        );
        let t = TimetableScheduler::new().schedule(&req, &store).unwrap();
        assert_eq!(t.slots[0].range(), PeriodRange::new(1, 2));
        assert_eq!(t.slots[0].room_id, "R2");
    }

    #[test]
    fn test_own_committed_slots_do_not_block() {
        let store = InMemorySlotStore::with_slots(vec![ScheduleSlot::new(
            &scope(),
            Weekday::Monday,
            PeriodRange::new(1, 4),
            "old",
            "T1",
            "R1",
        )]);
        let req = request(
            vec![Subject::new("S1").with_hours(2, 0)],
            &["T1"],
            vec![Room::classroom("R1")],
        );
        let t = TimetableScheduler::new().schedule(&req, &store).unwrap();
        assert_eq!(t.slots[0].day, Weekday::Monday);
        assert_eq!(t.slots[0].start_period, 1);
    }

    #[test]
    fn test_unplaceable_subject_does_not_abort_run() {
        // The only room is taken every afternoon; a 5-period subject only
        // fits in the afternoon block.
        let store = InMemorySlotStore::with_slots(
            Weekday::ALL
                .iter()
                .map(|&d| other_class_slot(d, 6, 10, "TX", "R1"))
                .collect(),
        );
        let req = request(
            vec![
                Subject::new("short").with_hours(2, 0),
                Subject::new("long").with_hours(3, 2),
                Subject::new("huge").with_hours(9, 0),
            ],
            &["T1"],
            vec![Room::classroom("R1")],
        );
        let t = TimetableScheduler::new().schedule(&req, &store).unwrap();

        assert_eq!(t.unscheduled_ids(), vec!["huge", "long"]);
        assert_eq!(t.unscheduled[0].duration, 9);
        let short = t.slot_for_subject("short").unwrap();
        assert_eq!(short.day, Weekday::Monday);
        assert_eq!(short.range(), PeriodRange::new(1, 2));
    }

    #[test]
    fn test_oversized_hours_left_unscheduled() {
        let req = request(
            vec![
                Subject::new("S1").with_hours(2, 0),
                Subject::new("overflow").with_hours(u32::MAX, 1),
            ],
            &["T1"],
            vec![Room::classroom("R1")],
        );
        let t = TimetableScheduler::new()
            .schedule(&req, &InMemorySlotStore::new())
            .unwrap();

        assert_eq!(t.unscheduled_ids(), vec!["overflow"]);
        assert_eq!(t.unscheduled[0].duration, u32::MAX);
        assert!(t.slot_for_subject("S1").is_some());
    }

    #[test]
    fn test_data_access_failure_aborts() {
        let req = request(
            vec![Subject::new("S1").with_hours(2, 0)],
            &["T1"],
            vec![Room::classroom("R1")],
        );
        let err = TimetableScheduler::new()
            .schedule(&req, &FailingStore)
            .unwrap_err();
        assert!(matches!(err, TimetableError::DataAccess(_)));
        assert!(err.to_string().contains("connection reset"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = TimetableConfig::default().with_days(vec![]);
        let req = request(
            vec![Subject::new("S1").with_hours(2, 0)],
            &["T1"],
            vec![Room::classroom("R1")],
        );
        let err = TimetableScheduler::with_config(config)
            .schedule(&req, &InMemorySlotStore::new())
            .unwrap_err();
        assert!(matches!(err, TimetableError::InvalidConfig(_)));
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let subjects: Vec<Subject> = (1..=8)
            .map(|i| Subject::new(format!("S{i}")).with_hours(i % 4 + 1, i % 2))
            .collect();
        let req = request(
            subjects,
            &["T1", "T2", "T3"],
            vec![Room::classroom("C1"), Room::lab("L1")],
        );
        let store = InMemorySlotStore::with_slots(vec![
            other_class_slot(Weekday::Tuesday, 1, 3, "T2", "C1"),
            other_class_slot(Weekday::Thursday, 6, 9, "T1", "L1"),
        ]);
        let scheduler = TimetableScheduler::with_config(
            TimetableConfig::default().with_teacher_selection(TeacherSelection::Seeded { seed: 7 }),
        );

        let first = scheduler.schedule(&req, &store).unwrap();
        let second = scheduler.schedule(&req, &store).unwrap();
        assert_eq!(first.slots, second.slots);
        assert_eq!(first.unscheduled, second.unscheduled);
    }

    #[test]
    fn test_generated_slots_hold_invariants() {
        let subjects: Vec<Subject> = (1..=12)
            .map(|i| Subject::new(format!("S{i}")).with_hours(i % 3 + 1, i % 2))
            .collect();
        let committed = vec![
            other_class_slot(Weekday::Monday, 1, 4, "T1", "C1"),
            other_class_slot(Weekday::Tuesday, 6, 10, "T2", "L1"),
            other_class_slot(Weekday::Wednesday, 2, 3, "T3", "C2"),
        ];
        let store = InMemorySlotStore::with_slots(committed.clone());
        let req = request(
            subjects.clone(),
            &["T1", "T2", "T3"],
            vec![Room::classroom("C1"), Room::classroom("C2"), Room::lab("L1")],
        );
        let t = TimetableScheduler::new().schedule(&req, &store).unwrap();
        assert!(!t.slots.is_empty());

        for slot in &t.slots {
            let subject = subjects.iter().find(|s| s.id == slot.subject_id).unwrap();
            assert_eq!(slot.duration(), subject.total_duration());
            assert_ne!(slot.start_period, 5);
            assert_ne!(slot.end_period, 5);
        }
        for (i, a) in t.slots.iter().enumerate() {
            for b in &t.slots[i + 1..] {
                assert!(!a.collides_with(b.day, &b.range()), "{a:?} overlaps {b:?}");
            }
            for c in &committed {
                if a.teacher_id == c.teacher_id || a.room_id == c.room_id {
                    assert!(!a.collides_with(c.day, &c.range()), "{a:?} clashes with {c:?}");
                }
            }
        }
    }
}
