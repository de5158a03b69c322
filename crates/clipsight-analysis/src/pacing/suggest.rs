//! Cut-candidate generation.
//!
//! Two independent sources feed the planner:
//!
//! 1. Scene boundaries strong enough to cut on (`intensity > floor`),
//!    with confidence proportional to intensity, capped at 1.
//! 2. Low-motion runs: a fixed-size window slides over the sequence, and
//!    every position whose mean edge intensity falls below the floor
//!    emits a suggestion at the window's first sample. Overlapping
//!    windows each emit their own suggestion; deduplication is the
//!    planner's concern, not this stage's.

use clipsight_models::{CutSuggestion, FrameSample, SceneEvent};
use serde::{Deserialize, Serialize};

/// Intensity that maps to full confidence for scene-change cuts.
pub const FULL_CONFIDENCE_INTENSITY: f64 = 100.0;

/// Configuration for cut-candidate generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CutConfig {
    /// Scene events weaker than this never become cuts.
    pub scene_intensity_floor: f64,

    /// Sliding-window length, in samples, for low-motion detection.
    pub low_motion_window: usize,

    /// Mean edge intensity below which a window counts as low motion.
    pub low_motion_edge_mean: f64,

    /// Fixed confidence assigned to low-motion suggestions.
    pub low_motion_confidence: f64,
}

impl Default for CutConfig {
    fn default() -> Self {
        Self {
            scene_intensity_floor: 50.0,
            low_motion_window: 5,
            low_motion_edge_mean: 10.0,
            low_motion_confidence: 0.7,
        }
    }
}

impl CutConfig {
    /// Set the scene-intensity floor, clamped to be non-negative.
    pub fn with_scene_intensity_floor(mut self, floor: f64) -> Self {
        self.scene_intensity_floor = floor.max(0.0);
        self
    }

    /// Set the low-motion window length, clamped to at least 2 samples.
    pub fn with_low_motion_window(mut self, window: usize) -> Self {
        self.low_motion_window = window.max(2);
        self
    }

    /// Set the low-motion mean-edge floor, clamped to be non-negative.
    pub fn with_low_motion_edge_mean(mut self, mean: f64) -> Self {
        self.low_motion_edge_mean = mean.max(0.0);
        self
    }

    /// Set the low-motion confidence, clamped into [0, 1].
    pub fn with_low_motion_confidence(mut self, confidence: f64) -> Self {
        self.low_motion_confidence = confidence.clamp(0.0, 1.0);
        self
    }
}

/// Generate cut suggestions from scene events and low-motion runs.
///
/// Scene-based suggestions come first (in event order), then low-motion
/// suggestions (in window order). Total function over validated input.
pub fn suggest_cuts(
    samples: &[FrameSample],
    events: &[SceneEvent],
    config: &CutConfig,
) -> Vec<CutSuggestion> {
    let mut suggestions: Vec<CutSuggestion> = events
        .iter()
        .filter(|event| event.intensity > config.scene_intensity_floor)
        .map(|event| {
            let confidence = (event.intensity / FULL_CONFIDENCE_INTENSITY).min(1.0);
            CutSuggestion::scene_change(event.time, confidence)
        })
        .collect();

    if config.low_motion_window >= 2 {
        for window in samples.windows(config.low_motion_window) {
            let mean_edge: f64 =
                window.iter().map(|s| s.edge_intensity).sum::<f64>() / window.len() as f64;
            if mean_edge < config.low_motion_edge_mean {
                let span = window[window.len() - 1].time - window[0].time;
                suggestions.push(CutSuggestion::low_motion(
                    window[0].time,
                    config.low_motion_confidence,
                    span,
                ));
            }
        }
    }

    suggestions
}
