//! Slot candidate generation.
//!
//! Enumerates the start periods at which a subject of a given duration
//! fits entirely inside one teaching block. Blocks are visited in
//! configured order (morning before afternoon by default) and starts are
//! ascending within a block, so earlier periods are always tried first.

use crate::config::{TeachingBlock, TimetableConfig};
use crate::models::PeriodRange;

/// Start-period enumerator for one timetable shape.
#[derive(Debug, Clone)]
pub struct SlotCandidateGenerator {
    blocks: Vec<TeachingBlock>,
    reserved: Vec<u32>,
}

impl SlotCandidateGenerator {
    /// Creates a generator from the configured blocks and reserved periods.
    pub fn new(config: &TimetableConfig) -> Self {
        Self {
            blocks: config.blocks.clone(),
            reserved: config.reserved_periods.clone(),
        }
    }

    /// Valid start periods for `duration` contiguous periods.
    ///
    /// A start `p` is valid in a block when `p + duration - 1` does not pass
    /// the block's last period and the range covers no reserved period.
    /// Recomputed on every call.
    pub fn candidate_starts(&self, duration: u32) -> Vec<u32> {
        if duration == 0 {
            return Vec::new();
        }
        let mut starts = Vec::new();
        for block in &self.blocks {
            if duration > block.span() {
                continue;
            }
            let last_start = block.last_period - (duration - 1);
            for start in block.first_period..=last_start {
                let range = PeriodRange::starting_at(start, duration);
                if !self.reserved.iter().any(|&p| range.contains(p)) {
                    starts.push(start);
                }
            }
        }
        starts
    }

    /// Candidate ranges for `duration`, in the same order as
    /// [`candidate_starts`](Self::candidate_starts).
    pub fn candidate_ranges(&self, duration: u32) -> impl Iterator<Item = PeriodRange> {
        self.candidate_starts(duration)
            .into_iter()
            .map(move |start| PeriodRange::starting_at(start, duration))
    }
}
