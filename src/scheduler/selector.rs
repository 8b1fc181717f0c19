//! Teacher and room selection.
//!
//! A subject's pinned teacher always wins. Otherwise the configured
//! [`TeacherSelection`] policy picks from the pool:
//!
//! | Policy | Reproducible | Behaviour |
//! |--------|--------------|-----------|
//! | `RoundRobin` | yes | pool order, one step per unpinned subject |
//! | `Seeded` | yes | uniform draw from a seeded `StdRng` |
//! | `Random` | no | uniform draw from an OS-seeded `StdRng` |
//!
//! Rooms are returned in input order so room trials are deterministic.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::TeacherSelection;
use crate::models::{Room, Subject, Teacher};

/// Stateful teacher picker for one run.
#[derive(Debug)]
pub struct TeacherSelector {
    policy: Policy,
}

#[derive(Debug)]
enum Policy {
    RoundRobin { next: usize },
    Draw(StdRng),
}

impl TeacherSelector {
    /// Creates a selector for a policy. State starts fresh on every call.
    pub fn new(selection: TeacherSelection) -> Self {
        let policy = match selection {
            TeacherSelection::RoundRobin => Policy::RoundRobin { next: 0 },
            TeacherSelection::Seeded { seed } => Policy::Draw(StdRng::seed_from_u64(seed)),
            TeacherSelection::Random => Policy::Draw(StdRng::from_os_rng()),
        };
        Self { policy }
    }

    /// Resolves the teacher for a subject.
    ///
    /// Returns `None` only when the subject has no pinned teacher and the
    /// pool is empty. Pinned subjects do not advance the policy state.
    pub fn select_teacher<'a>(
        &mut self,
        subject: &'a Subject,
        pool: &'a [Teacher],
    ) -> Option<&'a str> {
        if let Some(pinned) = subject.pinned_teacher() {
            return Some(pinned);
        }
        if pool.is_empty() {
            return None;
        }
        let idx = match &mut self.policy {
            Policy::RoundRobin { next } => {
                let idx = *next % pool.len();
                *next += 1;
                idx
            }
            Policy::Draw(rng) => rng.random_range(0..pool.len()),
        };
        Some(pool[idx].id.as_str())
    }
}

/// Rooms a subject may be placed in, in input order.
///
/// Practical subjects are restricted to labs/workshops when the pool has
/// any; otherwise every room is eligible.
pub fn eligible_rooms<'a>(subject: &Subject, pool: &'a [Room]) -> Vec<&'a Room> {
    if subject.is_practical() {
        let practical: Vec<&Room> = pool.iter().filter(|r| r.is_practical()).collect();
        if !practical.is_empty() {
            return practical;
        }
    }
    pool.iter().collect()
}
