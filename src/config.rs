//! Timetable shape and scheduling policy.
//!
//! The institutional timetable shape (teaching days, teaching blocks,
//! reserved periods) and the teacher-selection policy are configuration,
//! not constants. Defaults describe a five-day week with a morning block
//! of periods 1-4, lunch at period 5, and an afternoon block of periods 6-10.
//!
//! # Example
//!
//! ```
//! use u_timetable::config::{TeacherSelection, TimetableConfig};
//!
//! let config = TimetableConfig::from_toml_str(r#"
//!     days = ["Monday", "Tuesday", "Wednesday"]
//!     reserved_periods = [5]
//!     teacher_selection = { seeded = { seed = 42 } }
//!
//!     [[blocks]]
//!     name = "morning"
//!     first_period = 1
//!     last_period = 4
//! "#).unwrap();
//!
//! assert_eq!(config.days.len(), 3);
//! assert_eq!(config.teacher_selection, TeacherSelection::Seeded { seed: 42 });
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{TimetableError, TimetableResult};
use crate::models::Weekday;
use crate::validation::{ValidationError, ValidationErrorKind, ValidationResult};

/// A contiguous run of teaching periods within a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeachingBlock {
    /// Label used in logs (e.g. "morning").
    pub name: String,
    /// First period of the block (inclusive).
    pub first_period: u32,
    /// Last period of the block (inclusive).
    pub last_period: u32,
}

impl TeachingBlock {
    /// Creates a block.
    pub fn new(name: impl Into<String>, first_period: u32, last_period: u32) -> Self {
        Self {
            name: name.into(),
            first_period,
            last_period,
        }
    }

    /// Number of periods in the block.
    pub fn span(&self) -> u32 {
        if self.last_period < self.first_period {
            0
        } else {
            (self.last_period - self.first_period).saturating_add(1)
        }
    }
}

/// How a teacher is chosen for a subject without a pinned teacher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeacherSelection {
    /// Cycle through the teacher pool in input order.
    #[default]
    RoundRobin,
    /// Uniform random choice from a fixed seed; reproducible.
    Seeded { seed: u64 },
    /// Uniform random choice seeded from the OS; not reproducible.
    Random,
}

/// Scheduler configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimetableConfig {
    /// Teaching days.
    pub days: Vec<Weekday>,
    /// Teaching blocks, tried in the listed order.
    pub blocks: Vec<TeachingBlock>,
    /// Periods no slot may start on, end on, or span (e.g. lunch).
    pub reserved_periods: Vec<u32>,
    /// Teacher fallback policy.
    pub teacher_selection: TeacherSelection,
}

impl Default for TimetableConfig {
    fn default() -> Self {
        Self {
            days: Weekday::ALL.to_vec(),
            blocks: vec![
                TeachingBlock::new("morning", 1, 4),
                TeachingBlock::new("afternoon", 6, 10),
            ],
            reserved_periods: vec![5],
            teacher_selection: TeacherSelection::RoundRobin,
        }
    }
}

impl TimetableConfig {
    /// Parses a TOML document. Missing keys take their default values.
    pub fn from_toml_str(s: &str) -> TimetableResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Sets the teacher selection policy.
    pub fn with_teacher_selection(mut self, selection: TeacherSelection) -> Self {
        self.teacher_selection = selection;
        self
    }

    /// Sets the teaching days.
    pub fn with_days(mut self, days: Vec<Weekday>) -> Self {
        self.days = days;
        self
    }

    /// Sets the teaching blocks.
    pub fn with_blocks(mut self, blocks: Vec<TeachingBlock>) -> Self {
        self.blocks = blocks;
        self
    }

    /// Whether a period is reserved.
    pub fn is_reserved(&self, period: u32) -> bool {
        self.reserved_periods.contains(&period)
    }

    /// Longest block span; no subject longer than this can ever be placed.
    pub fn max_block_span(&self) -> u32 {
        self.blocks.iter().map(TeachingBlock::span).max().unwrap_or(0)
    }

    /// Checks the configuration for structural problems.
    ///
    /// Checks:
    /// 1. At least one teaching day, no duplicates
    /// 2. At least one teaching block
    /// 3. Blocks are non-inverted and start at period 1 or later
    /// 4. Blocks do not overlap each other
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();

        if self.days.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidConfig,
                "No teaching days configured",
            ));
        }
        let mut seen = HashSet::new();
        for day in &self.days {
            if !seen.insert(*day) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!("Duplicate teaching day: {day}"),
                ));
            }
        }

        if self.blocks.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidConfig,
                "No teaching blocks configured",
            ));
        }
        for block in &self.blocks {
            if block.first_period == 0 || block.last_period < block.first_period {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidConfig,
                    format!(
                        "Teaching block '{}' has invalid range {}-{}",
                        block.name, block.first_period, block.last_period
                    ),
                ));
            }
        }
        for (i, a) in self.blocks.iter().enumerate() {
            for b in &self.blocks[i + 1..] {
                if a.first_period.max(b.first_period) <= a.last_period.min(b.last_period) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvalidConfig,
                        format!("Teaching blocks '{}' and '{}' overlap", a.name, b.name),
                    ));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Like [`validate`](Self::validate), but as a run-aborting error.
    pub(crate) fn ensure_valid(&self) -> TimetableResult<()> {
        self.validate().map_err(TimetableError::InvalidConfig)
    }
}
