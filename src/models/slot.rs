//! Day, period and slot model.
//!
//! A timetable week is a fixed list of weekdays, each divided into
//! numbered periods (class hours). A slot occupies one inclusive period
//! range on one day for one class-level.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A teaching day.
///
/// The derived ordering is the canonical week order (Monday first) and is
/// used to break ties between equally loaded days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All weekdays in canonical order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An inclusive period interval `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeriodRange {
    /// First period (inclusive).
    pub start: u32,
    /// Last period (inclusive).
    pub end: u32,
}

impl PeriodRange {
    /// Creates a range.
    ///
    /// An inverted range (`end < start`) is empty: it has length zero and
    /// overlaps nothing.
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Range of `duration` periods starting at `start`.
    ///
    /// `duration` must be at least 1.
    pub fn starting_at(start: u32, duration: u32) -> Self {
        Self::new(start, start.saturating_add(duration.max(1) - 1))
    }

    /// Number of periods covered.
    #[inline]
    pub fn len(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start).saturating_add(1)
        }
    }

    /// Whether the range is inverted and covers no period.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Whether a period falls within this range.
    #[inline]
    pub fn contains(&self, period: u32) -> bool {
        period >= self.start && period <= self.end
    }

    /// Whether two ranges share at least one period.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start.max(other.start) <= self.end.min(other.end)
    }
}

impl fmt::Display for PeriodRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// The scope of one scheduling run: a term and the class-level being built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchedulingScope {
    /// Opaque term identifier (e.g. academic term).
    pub term: String,
    /// Target class-level.
    pub class_level_id: String,
}

impl SchedulingScope {
    /// Creates a new scope.
    pub fn new(term: impl Into<String>, class_level_id: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            class_level_id: class_level_id.into(),
        }
    }
}

/// A committed placement of one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub term: String,
    pub class_level_id: String,
    pub day: Weekday,
    /// First period (inclusive).
    pub start_period: u32,
    /// Last period (inclusive), never before `start_period`.
    pub end_period: u32,
    pub subject_id: String,
    pub teacher_id: String,
    pub room_id: String,
}

impl ScheduleSlot {
    /// Creates a slot for `scope` on `day` covering `range`.
    pub fn new(
        scope: &SchedulingScope,
        day: Weekday,
        range: PeriodRange,
        subject_id: impl Into<String>,
        teacher_id: impl Into<String>,
        room_id: impl Into<String>,
    ) -> Self {
        Self {
            term: scope.term.clone(),
            class_level_id: scope.class_level_id.clone(),
            day,
            start_period: range.start,
            end_period: range.end,
            subject_id: subject_id.into(),
            teacher_id: teacher_id.into(),
            room_id: room_id.into(),
        }
    }

    /// The occupied period range.
    #[inline]
    pub fn range(&self) -> PeriodRange {
        PeriodRange::new(self.start_period, self.end_period)
    }

    /// Whether `end_period` precedes `start_period`.
    #[inline]
    pub fn is_inverted(&self) -> bool {
        self.end_period < self.start_period
    }

    /// Number of periods occupied.
    #[inline]
    pub fn duration(&self) -> u32 {
        self.range().len()
    }

    /// Whether this slot shares its day and at least one period with `range`.
    pub fn collides_with(&self, day: Weekday, range: &PeriodRange) -> bool {
        self.day == day && self.range().overlaps(range)
    }
}
