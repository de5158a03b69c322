//! Configuration for silence segmentation.
//!
//! These parameters control what counts as silence, which runs are worth
//! reporting, and which samples are loud enough to flag. The defaults are
//! tuned for the 0-255 loudness scale the sampler produces.

use serde::{Deserialize, Serialize};

/// Configuration for the silence segmenter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SilenceConfig {
    /// Loudness below which a sample counts as silent (0-255).
    ///
    /// - Lower values (10-20): only near-digital-silence qualifies
    /// - Default (30): quiet room tone qualifies
    /// - Higher values (40-60): soft speech starts to qualify
    pub silence_threshold: f64,

    /// Minimum window duration worth reporting, in seconds.
    ///
    /// Closed runs at or under this length are dropped from the window
    /// list. They still count toward `total_silence`.
    pub min_window_secs: f64,

    /// Loudness above which a non-silent sample is flagged (0-255).
    ///
    /// Every qualifying sample becomes its own marker; markers are never
    /// merged into runs.
    pub loud_threshold: f64,

    /// Close a run still open when the sequence ends.
    ///
    /// Off by default: a source that ends mid-silence drops that tail
    /// run entirely. Turning this on closes the run at the final
    /// sample's time instead.
    pub include_trailing_run: bool,
}

impl Default for SilenceConfig {
    fn default() -> Self {
        Self {
            silence_threshold: 30.0,
            min_window_secs: 0.5,
            loud_threshold: 100.0,
            include_trailing_run: false,
        }
    }
}

impl SilenceConfig {
    /// Catch more silence: higher threshold, shorter minimum window.
    pub fn aggressive() -> Self {
        Self {
            silence_threshold: 40.0,
            min_window_secs: 0.3,
            loud_threshold: 100.0,
            include_trailing_run: false,
        }
    }

    /// Only flag unambiguous silence: lower threshold, longer windows.
    pub fn conservative() -> Self {
        Self {
            silence_threshold: 20.0,
            min_window_secs: 1.0,
            loud_threshold: 120.0,
            include_trailing_run: false,
        }
    }

    /// Builder-style setter for the silence threshold.
    pub fn with_silence_threshold(mut self, threshold: f64) -> Self {
        self.silence_threshold = threshold.clamp(0.0, 255.0);
        self
    }

    /// Builder-style setter for the minimum window duration.
    pub fn with_min_window_secs(mut self, secs: f64) -> Self {
        self.min_window_secs = secs.max(0.0);
        self
    }

    /// Builder-style setter for the loud threshold.
    pub fn with_loud_threshold(mut self, threshold: f64) -> Self {
        self.loud_threshold = threshold.clamp(0.0, 255.0);
        self
    }

    /// Builder-style setter for trailing-run handling.
    pub fn with_include_trailing_run(mut self, include: bool) -> Self {
        self.include_trailing_run = include;
        self
    }
}
