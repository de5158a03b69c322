//! Feature sample models.
//!
//! A sample is a single time-stamped measurement taken from a media source:
//! visual statistics for one video frame, or one loudness reading for an
//! audio window. The sampling collaborator produces them in strictly
//! increasing time order; analysis never mutates them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Visual statistics measured for one sampled video frame.
///
/// `colorfulness` and `edge_intensity` are the pre-weighted statistics
/// produced by the frame scorer (`color_variance_sum / 1000` and
/// `edge_count / 10`), so a sample's interest score is simply their sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FrameSample {
    /// Capture time in seconds from media start.
    pub time: f64,

    /// Mean luminance, 0-255.
    pub brightness: f64,

    /// Weighted color variance, >= 0.
    pub colorfulness: f64,

    /// Weighted edge count, >= 0.
    pub edge_intensity: f64,
}

impl FrameSample {
    /// Create a sample from already-weighted statistics.
    pub fn new(time: f64, brightness: f64, colorfulness: f64, edge_intensity: f64) -> Self {
        Self {
            time,
            brightness,
            colorfulness,
            edge_intensity,
        }
    }
}

/// One audio-loudness reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AudioSample {
    /// Capture time in seconds from media start.
    pub time: f64,

    /// Mean frequency-bin magnitude, 0-255.
    pub level: f64,
}

impl AudioSample {
    pub fn new(time: f64, level: f64) -> Self {
        Self { time, level }
    }
}
