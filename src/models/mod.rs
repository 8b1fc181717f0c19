//! Timetabling domain models.
//!
//! Provides the data types consumed and produced by the scheduler.
//! Inputs (subjects, teachers, rooms) are read-only for the duration of a
//! run; slots are created by the scheduler and handed to the caller.
//!
//! # Domain Mappings
//!
//! | u-timetable | School | University |
//! |-------------|--------|------------|
//! | Subject | Course | Module |
//! | Teacher | Teacher | Lecturer |
//! | Room | Classroom/Lab | Lecture Hall/Lab |
//! | Class-level | Grade section | Cohort / Year group |
//! | Term | Semester | Academic term |

mod resource;
mod slot;
mod subject;
mod timetable;

pub use resource::{Room, RoomType, Teacher};
pub use slot::{PeriodRange, ScheduleSlot, SchedulingScope, Weekday};
pub use subject::Subject;
pub use timetable::{SubjectState, Timetable, UnscheduledSubject, Violation, ViolationType};
