//! Timetable quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Placement Rate | placed / (placed + unscheduled) |
//! | Total Periods | Sum of slot lengths |
//! | Load Spread | Busiest day minus lightest day (periods) |
//! | Periods by Teacher | Teaching load per teacher |
//! | Periods by Room | Occupancy per room |

use std::collections::HashMap;

use crate::config::TimetableConfig;
use crate::models::{Timetable, Weekday};
use crate::scheduler::DayLoad;

/// Timetable performance indicators.
#[derive(Debug, Clone)]
pub struct TimetableKpi {
    /// Subjects with a committed slot.
    pub placed_subjects: usize,
    /// Subjects left unscheduled.
    pub unscheduled_subjects: usize,
    /// Fraction of attempted subjects placed (0.0..1.0).
    pub placement_rate: f64,
    /// Committed periods across the week.
    pub total_periods: u32,
    /// Committed periods per configured day, canonical order.
    pub periods_by_day: Vec<(Weekday, u32)>,
    /// Busiest day minus lightest day.
    pub load_spread: u32,
    pub periods_by_teacher: HashMap<String, u32>,
    pub periods_by_room: HashMap<String, u32>,
}

impl TimetableKpi {
    /// Computes KPIs for a timetable under its configuration.
    pub fn calculate(timetable: &Timetable, config: &TimetableConfig) -> Self {
        let load = DayLoad::from_slots(&config.days, &timetable.slots);

        let mut periods_by_teacher: HashMap<String, u32> = HashMap::new();
        let mut periods_by_room: HashMap<String, u32> = HashMap::new();
        for slot in &timetable.slots {
            *periods_by_teacher.entry(slot.teacher_id.clone()).or_insert(0) += slot.duration();
            *periods_by_room.entry(slot.room_id.clone()).or_insert(0) += slot.duration();
        }

        let placed = timetable.slots.len();
        let unscheduled = timetable.unscheduled.len();
        let attempted = placed + unscheduled;
        let placement_rate = if attempted == 0 {
            1.0
        } else {
            placed as f64 / attempted as f64
        };

        Self {
            placed_subjects: placed,
            unscheduled_subjects: unscheduled,
            placement_rate,
            total_periods: timetable.total_periods(),
            periods_by_day: load.totals().to_vec(),
            load_spread: load.spread(),
            periods_by_teacher,
            periods_by_room,
        }
    }

    /// Whether the timetable meets the given quality thresholds.
    pub fn meets_thresholds(&self, min_placement_rate: f64, max_load_spread: u32) -> bool {
        self.placement_rate >= min_placement_rate && self.load_spread <= max_load_spread
    }
}
