//! Deterministic class-timetable scheduling for the U-Engine ecosystem.
//!
//! Places each subject of one class-level as a contiguous run of periods
//! on one teaching day, avoiding double-booking of the class-level itself
//! and of teachers and rooms already committed to other class-levels of
//! the same term, while balancing load across the week.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Subject`, `Teacher`, `Room`, `ScheduleSlot`,
//!   `Timetable`, `Weekday`, `PeriodRange`
//! - **`config`**: Timetable shape (days, teaching blocks, reserved periods)
//!   and teacher-selection policy, loadable from TOML
//! - **`scheduler`**: Greedy driver and its components, plus KPIs
//! - **`store`**: The committed-schedule seam (`SlotStore`) and an
//!   in-memory implementation
//! - **`validation`** / **`audit`**: Input checks before a run, rule checks
//!   on a finished timetable
//!
//! # Architecture
//!
//! The scheduler is synchronous and single-threaded per class-level. It
//! reads committed slots through [`store::SlotStore`] and never writes them;
//! persisting the returned [`models::Timetable`] is the caller's job. When
//! several class-levels of one term are scheduled concurrently, commits
//! must go through a single writer or a store that rejects overlapping
//! teacher/room bookings (as [`store::InMemorySlotStore::commit`] does).
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Burke & Petrovic (2002), "Recent Research Directions in Automated Timetabling"

pub mod audit;
pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod store;
pub mod validation;

pub use error::{TimetableError, TimetableResult};
