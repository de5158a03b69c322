//! Scene-change detection.
//!
//! # Algorithm
//!
//! Consecutive frame samples are compared pairwise: a scene boundary is
//! declared at the later sample's time whenever the brightness delta *or*
//! the colorfulness delta crosses the configured threshold. The emitted
//! event carries `intensity = brightness_delta + color_delta`, so an
//! event's intensity always exceeds the threshold that triggered it.
//!
//! The detector holds no state beyond the previously seen sample: one
//! pass, O(n), at most `n - 1` events for `n` samples.
//!
//! # Usage
//!
//! ```rust
//! use clipsight_analysis::scene::{detect_scene_changes, SceneChangeConfig};
//! use clipsight_models::FrameSample;
//!
//! let samples = vec![
//!     FrameSample::new(0.0, 40.0, 10.0, 5.0),
//!     FrameSample::new(1.0, 180.0, 12.0, 5.0),
//! ];
//! let events = detect_scene_changes(&samples, &SceneChangeConfig::default());
//! assert_eq!(events.len(), 1);
//! ```

use clipsight_models::{FrameSample, SceneEvent};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration for scene-change detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneChangeConfig {
    /// Per-pair delta (brightness or colorfulness) that declares a
    /// boundary, on the same 0-255 scale as brightness.
    pub threshold: f64,
}

impl Default for SceneChangeConfig {
    fn default() -> Self {
        Self { threshold: 30.0 }
    }
}

impl SceneChangeConfig {
    /// Flag smaller shifts as boundaries (more events).
    pub fn sensitive() -> Self {
        Self { threshold: 15.0 }
    }

    /// Only flag hard cuts (fewer events).
    pub fn conservative() -> Self {
        Self { threshold: 50.0 }
    }

    /// Set the threshold, clamped to be non-negative.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.max(0.0);
        self
    }
}

/// Streaming scene-change detector.
///
/// Caller-owned: construct one per media source, feed samples in time
/// order through [`observe`](Self::observe), and call
/// [`reset`](Self::reset) before reusing it on a different source.
#[derive(Debug, Clone)]
pub struct SceneChangeDetector {
    config: SceneChangeConfig,
    prev: Option<FrameSample>,
    event_count: u64,
}

impl SceneChangeDetector {
    /// Create a detector with the default threshold.
    pub fn new() -> Self {
        Self::with_config(SceneChangeConfig::default())
    }

    /// Create a detector with full configuration.
    pub fn with_config(config: SceneChangeConfig) -> Self {
        Self {
            config,
            prev: None,
            event_count: 0,
        }
    }

    /// Feed the next sample; returns the boundary event it completed, if
    /// any. The first sample after construction or reset never emits.
    pub fn observe(&mut self, sample: FrameSample) -> Option<SceneEvent> {
        let prev = match self.prev.replace(sample) {
            Some(prev) => prev,
            None => return None,
        };

        let brightness_delta = (sample.brightness - prev.brightness).abs();
        let color_delta = (sample.colorfulness - prev.colorfulness).abs();

        if brightness_delta > self.config.threshold || color_delta > self.config.threshold {
            let event = SceneEvent::new(sample.time, brightness_delta + color_delta);
            self.event_count += 1;
            debug!(
                time = sample.time,
                brightness_delta,
                color_delta,
                threshold = self.config.threshold,
                "Scene change detected"
            );
            Some(event)
        } else {
            None
        }
    }

    /// Reset detector state for a new media source.
    pub fn reset(&mut self) {
        self.prev = None;
        self.event_count = 0;
    }

    /// Total events emitted since construction or the last reset.
    pub fn event_count(&self) -> u64 {
        self.event_count
    }
}

impl Default for SceneChangeDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Detect scene changes across a whole sample sequence.
///
/// Total function: fewer than two samples yields an empty result. Callers
/// that need input validation get it from the pipeline entry points.
pub fn detect_scene_changes(
    samples: &[FrameSample],
    config: &SceneChangeConfig,
) -> Vec<SceneEvent> {
    let mut detector = SceneChangeDetector::with_config(config.clone());
    samples
        .iter()
        .filter_map(|sample| detector.observe(*sample))
        .collect()
}
