//! Highlight segment models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A finalized highlight window selected for short-form export.
///
/// Invariants maintained by the selector: `0 <= start < end`, `end - start`
/// is the requested clip duration except where clamped at media boundaries,
/// and any finalized set of segments is pairwise non-overlapping and sorted
/// by `start`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Segment {
    /// Window start in seconds.
    pub start: f64,

    /// Window end in seconds.
    pub end: f64,

    /// Time of the interest peak this window was built around.
    pub peak_time: f64,

    /// Combined score + motion of the winning candidate.
    pub score: f64,
}

impl Segment {
    pub fn new(start: f64, end: f64, peak_time: f64, score: f64) -> Self {
        Self {
            start,
            end,
            peak_time,
            score,
        }
    }

    /// Window length in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Whether this window intersects another, counting shared endpoints
    /// as overlap.
    pub fn overlaps(&self, other: &Segment) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}
