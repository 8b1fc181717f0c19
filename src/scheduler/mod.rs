//! Greedy timetable scheduler and KPI evaluation.
//!
//! # Components
//!
//! - [`SlotCandidateGenerator`]: valid start periods per duration
//! - [`ConflictOracle`]: internal (same class-level) and external
//!   (other class-levels, same term) busy checks
//! - [`DayLoad`]: per-day running totals, least-loaded day first
//! - [`TeacherSelector`] / [`eligible_rooms`]: resource choice
//! - [`TimetableScheduler`]: the driver that ties them together
//!
//! # KPI
//!
//! [`TimetableKpi`] summarizes placement rate and weekly balance.

mod candidates;
mod driver;
mod kpi;
mod load;
mod oracle;
mod selector;

pub use candidates::SlotCandidateGenerator;
pub use driver::{TimetableRequest, TimetableScheduler};
pub use kpi::TimetableKpi;
pub use load::DayLoad;
pub use oracle::ConflictOracle;
pub use selector::{eligible_rooms, TeacherSelector};
