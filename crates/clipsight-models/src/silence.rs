//! Silence and loudness models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A closed run of audio staying below the silence threshold.
///
/// `duration` is stored redundantly (`end - start`) because downstream
/// consumers key off it directly; the segmenter guarantees it exceeds the
/// configured minimum-window filter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SilenceWindow {
    /// Time of the first below-threshold sample, in seconds.
    pub start: f64,

    /// Time of the sample that ended the run, in seconds.
    pub end: f64,

    /// `end - start`, in seconds.
    pub duration: f64,
}

impl SilenceWindow {
    /// Build a window from its endpoints, deriving `duration`.
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            duration: end - start,
        }
    }
}

/// A single sample loud enough to flag, recorded without merging.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LoudSegment {
    /// Sample time in seconds.
    pub time: f64,

    /// Loudness level, 0-255.
    pub level: f64,
}

impl LoudSegment {
    pub fn new(time: f64, level: f64) -> Self {
        Self { time, level }
    }
}

/// Everything the silence segmenter found in one pass.
///
/// `total_silence` counts every closed run, including runs too short to
/// survive the minimum-window filter; `retained_silence` counts only the
/// runs returned in `windows`. Callers pick whichever sum matches their
/// use (the two differ whenever short runs were filtered out).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct SilenceReport {
    /// Silence runs that survived the minimum-duration filter, in time order.
    pub windows: Vec<SilenceWindow>,

    /// Above-loud-threshold sample markers, in time order.
    pub loud_segments: Vec<LoudSegment>,

    /// Sum of every closed run's duration, filtered runs included.
    pub total_silence: f64,

    /// Sum of the durations of the windows actually returned.
    pub retained_silence: f64,
}

impl SilenceReport {
    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    pub fn loud_count(&self) -> usize {
        self.loud_segments.len()
    }

    /// Silence dropped by the minimum-window filter.
    pub fn dropped_silence(&self) -> f64 {
        (self.total_silence - self.retained_silence).max(0.0)
    }

    /// Fraction of the media spent in retained silence. Returns 0 for a
    /// zero-length media duration rather than dividing by it.
    pub fn silence_ratio(&self, media_duration: f64) -> f64 {
        if media_duration <= 0.0 {
            return 0.0;
        }
        self.retained_silence / media_duration
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_derives_duration() {
        let w = SilenceWindow::new(2.0, 5.0);
        assert!((w.duration - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_report_aggregates() {
        let report = SilenceReport {
            windows: vec![SilenceWindow::new(2.0, 5.0)],
            loud_segments: vec![LoudSegment::new(7.0, 180.0)],
            total_silence: 3.4,
            retained_silence: 3.0,
        };
        assert_eq!(report.window_count(), 1);
        assert_eq!(report.loud_count(), 1);
        assert!((report.dropped_silence() - 0.4).abs() < 1e-9);
        assert!((report.silence_ratio(10.0) - 0.3).abs() < 1e-9);
        assert_eq!(report.silence_ratio(0.0), 0.0, "zero duration must not divide");
    }

    #[test]
    fn test_report_roundtrip() {
        let report = SilenceReport {
            windows: vec![SilenceWindow::new(0.0, 1.0)],
            loud_segments: vec![],
            total_silence: 1.0,
            retained_silence: 1.0,
        };
        let json = report.to_json().unwrap();
        let back = SilenceReport::from_json(&json).unwrap();
        assert_eq!(report, back);
    }
}
