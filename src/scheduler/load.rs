//! Per-day load tracking.
//!
//! Keeps a running total of committed periods per teaching day for the
//! class-level being built, and orders days least-loaded first so periods
//! spread across the week instead of clustering at its start.

use crate::models::{ScheduleSlot, Weekday};

/// Running per-day period totals, owned by the scheduler for one run.
#[derive(Debug, Clone)]
pub struct DayLoad {
    loads: Vec<(Weekday, u32)>,
}

impl DayLoad {
    /// Zero load for every day.
    pub fn new(days: &[Weekday]) -> Self {
        let mut days = days.to_vec();
        days.sort();
        days.dedup();
        Self {
            loads: days.into_iter().map(|d| (d, 0)).collect(),
        }
    }

    /// Load recomputed from scratch from a slot list.
    ///
    /// Slots on days that are not tracked are ignored.
    pub fn from_slots(days: &[Weekday], slots: &[ScheduleSlot]) -> Self {
        let mut load = Self::new(days);
        for slot in slots {
            load.record(slot);
        }
        load
    }

    /// Adds a committed slot to its day's total.
    pub fn record(&mut self, slot: &ScheduleSlot) {
        if let Some((_, total)) = self.loads.iter_mut().find(|(d, _)| *d == slot.day) {
            *total += slot.duration();
        }
    }

    /// Current total for a day (0 for untracked days).
    pub fn load_of(&self, day: Weekday) -> u32 {
        self.loads
            .iter()
            .find(|(d, _)| *d == day)
            .map(|(_, total)| *total)
            .unwrap_or(0)
    }

    /// Days by ascending load; ties in canonical weekday order.
    pub fn ordered_days(&self) -> Vec<Weekday> {
        let mut ordered = self.loads.clone();
        ordered.sort_by_key(|&(day, total)| (total, day));
        ordered.into_iter().map(|(day, _)| day).collect()
    }

    /// `(day, total)` pairs in canonical weekday order.
    pub fn totals(&self) -> &[(Weekday, u32)] {
        &self.loads
    }

    /// Difference between the busiest and the lightest day.
    pub fn spread(&self) -> u32 {
        let max = self.loads.iter().map(|(_, t)| *t).max().unwrap_or(0);
        let min = self.loads.iter().map(|(_, t)| *t).min().unwrap_or(0);
        max - min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PeriodRange, SchedulingScope};

    fn slot(day: Weekday, start: u32, end: u32) -> ScheduleSlot {
        ScheduleSlot::new(
            &SchedulingScope::new("T", "C"),
            day,
            PeriodRange::new(start, end),
            "S",
            "T1",
            "R1",
        )
    }

    #[test]
    fn test_zero_load_is_canonical_order() {
        let load = DayLoad::new(&Weekday::ALL);
        assert_eq!(load.ordered_days(), Weekday::ALL.to_vec());
        assert_eq!(load.spread(), 0);
    }

    #[test]
    fn test_least_loaded_first() {
        let load = DayLoad::from_slots(
            &Weekday::ALL,
            &[
                slot(Weekday::Monday, 1, 4),
                slot(Weekday::Tuesday, 1, 2),
                slot(Weekday::Wednesday, 6, 6),
            ],
        );
        assert_eq!(
            load.ordered_days(),
            vec![
                Weekday::Thursday,
                Weekday::Friday,
                Weekday::Wednesday,
                Weekday::Tuesday,
                Weekday::Monday
            ]
        );
        assert_eq!(load.load_of(Weekday::Monday), 4);
        assert_eq!(load.spread(), 4);
    }

    #[test]
    fn test_incremental_matches_recompute() {
        let slots = vec![slot(Weekday::Friday, 6, 8), slot(Weekday::Monday, 1, 1)];
        let mut incremental = DayLoad::new(&Weekday::ALL);
        for s in &slots {
            incremental.record(s);
        }
        let recomputed = DayLoad::from_slots(&Weekday::ALL, &slots);
        assert_eq!(incremental.totals(), recomputed.totals());
    }

    #[test]
    fn test_untracked_day_ignored() {
        let mut load = DayLoad::new(&[Weekday::Tuesday, Weekday::Monday]);
        load.record(&slot(Weekday::Friday, 1, 3));
        assert_eq!(load.load_of(Weekday::Friday), 0);
        assert_eq!(load.ordered_days(), vec![Weekday::Monday, Weekday::Tuesday]);
    }
}
