//! Pacing and auto-edit models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Why a cut was suggested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CutReason {
    /// A scene boundary strong enough to cut on.
    SceneChange,
    /// A run of near-static frames (dead air).
    LowMotion,
}

impl CutReason {
    /// Whether segments with this reason are removable dead time.
    pub fn is_removable(&self) -> bool {
        matches!(self, CutReason::LowMotion)
    }
}

/// A single suggested cut point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CutSuggestion {
    /// Suggested cut time in seconds.
    pub time: f64,

    /// What triggered the suggestion.
    pub reason: CutReason,

    /// Confidence in [0, 1].
    pub confidence: f64,

    /// Span of the triggering run in seconds (low-motion suggestions only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

impl CutSuggestion {
    /// A scene-change cut at `time`.
    pub fn scene_change(time: f64, confidence: f64) -> Self {
        Self {
            time,
            reason: CutReason::SceneChange,
            confidence,
            duration: None,
        }
    }

    /// A low-motion cut covering `duration` seconds starting at `time`.
    pub fn low_motion(time: f64, confidence: f64, duration: f64) -> Self {
        Self {
            time,
            reason: CutReason::LowMotion,
            confidence,
            duration: Some(duration),
        }
    }
}

/// Editing tempo selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum PacingMode {
    /// Fewer cuts, gentle speed-ups.
    Slow,
    /// Middle ground for most content.
    #[default]
    Balanced,
    /// Aggressive cutting and speed-ups.
    Fast,
}

impl PacingMode {
    pub const ALL: [PacingMode; 3] = [PacingMode::Slow, PacingMode::Balanced, PacingMode::Fast];

    /// The fixed tuning table for this mode.
    pub const fn profile(&self) -> PacingProfile {
        match self {
            PacingMode::Slow => PacingProfile {
                confidence_threshold: 0.6,
                speed_range: SpeedRange {
                    lower: 0.9,
                    upper: 1.1,
                },
            },
            PacingMode::Balanced => PacingProfile {
                confidence_threshold: 0.7,
                speed_range: SpeedRange {
                    lower: 0.9,
                    upper: 1.2,
                },
            },
            PacingMode::Fast => PacingProfile {
                confidence_threshold: 0.8,
                speed_range: SpeedRange {
                    lower: 1.0,
                    upper: 1.5,
                },
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PacingMode::Slow => "slow",
            PacingMode::Balanced => "balanced",
            PacingMode::Fast => "fast",
        }
    }
}

impl fmt::Display for PacingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PacingMode {
    type Err = PacingModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "slow" => Ok(PacingMode::Slow),
            "balanced" => Ok(PacingMode::Balanced),
            "fast" => Ok(PacingMode::Fast),
            _ => Err(PacingModeParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown pacing mode: {0}")]
pub struct PacingModeParseError(String);

/// Confidence gate and playback-speed band for one pacing mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PacingProfile {
    /// Minimum cut confidence that makes the plan's `cuts` list.
    pub confidence_threshold: f64,

    /// Allowed playback-speed band.
    pub speed_range: SpeedRange,
}

/// Playback-speed band. Speed-up windows always use `upper`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SpeedRange {
    pub lower: f64,
    pub upper: f64,
}

/// A half-open stretch of media time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TimeRange {
    /// Range start in seconds.
    pub start: f64,

    /// Range end in seconds.
    pub end: f64,
}

impl TimeRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// A stretch of media to play back at a fixed adjusted speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SpeedWindow {
    /// Window start in seconds.
    pub start: f64,

    /// Window end in seconds.
    pub end: f64,

    /// Playback-rate multiplier applied across the window.
    pub factor: f64,
}

impl SpeedWindow {
    pub fn new(start: f64, end: f64, factor: f64) -> Self {
        Self { start, end, factor }
    }
}

/// The full auto-edit decision for one media source.
///
/// The three lists are independent: a cut, a speed-up, and a removal may
/// land on the same stretch of time. Reconciling them is the consumer's
/// job, not the planner's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct PacingPlan {
    /// Cut times in seconds, in suggestion order.
    pub cuts: Vec<f64>,

    /// Stretches to play back at the mode's upper speed bound.
    pub speed_adjustments: Vec<SpeedWindow>,

    /// Dead stretches the consumer may drop entirely.
    pub remove_segments: Vec<TimeRange>,
}

impl PacingPlan {
    /// Whether the plan changes anything at all.
    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty() && self.speed_adjustments.is_empty() && self.remove_segments.is_empty()
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
