//! Pacing-plan assembly.
//!
//! The planner folds cut suggestions and the raw sample sequence into the
//! three independent lists of a [`PacingPlan`]: confident cuts, removable
//! dead stretches, and speed-up windows. The lists may overlap in time;
//! reconciling a simultaneous cut, removal, and speed-up is the consumer's
//! job.

use clipsight_models::{CutSuggestion, FrameSample, PacingMode, PacingPlan, SpeedWindow, TimeRange};
use tracing::debug;

/// Frames with edge intensity below this start a speed-up stretch.
pub const SPEED_UP_EDGE_FLOOR: f64 = 15.0;

/// Removal span assumed for suggestions that carry no duration.
pub const DEFAULT_REMOVE_DURATION: f64 = 1.0;

/// Assemble the pacing plan for one mode.
///
/// - `cuts`: every suggestion whose confidence strictly exceeds the
///   mode's threshold, in suggestion order.
/// - `remove_segments`: `[time, time + duration]` for every removable
///   (low-motion) suggestion, regardless of confidence.
/// - `speed_adjustments`: one window per consecutive sample pair whose
///   earlier sample sits below [`SPEED_UP_EDGE_FLOOR`], always at the
///   mode's upper speed bound.
pub fn build_plan(
    samples: &[FrameSample],
    suggestions: &[CutSuggestion],
    mode: PacingMode,
) -> PacingPlan {
    let profile = mode.profile();

    let cuts: Vec<f64> = suggestions
        .iter()
        .filter(|s| s.confidence > profile.confidence_threshold)
        .map(|s| s.time)
        .collect();

    let remove_segments: Vec<TimeRange> = suggestions
        .iter()
        .filter(|s| s.reason.is_removable())
        .map(|s| {
            let span = s.duration.unwrap_or(DEFAULT_REMOVE_DURATION);
            TimeRange::new(s.time, s.time + span)
        })
        .collect();

    let speed_adjustments: Vec<SpeedWindow> = samples
        .windows(2)
        .filter(|pair| pair[0].edge_intensity < SPEED_UP_EDGE_FLOOR)
        .map(|pair| SpeedWindow::new(pair[0].time, pair[1].time, profile.speed_range.upper))
        .collect();

    debug!(
        mode = %mode,
        cuts = cuts.len(),
        removals = remove_segments.len(),
        speed_ups = speed_adjustments.len(),
        "Pacing plan assembled"
    );

    PacingPlan {
        cuts,
        speed_adjustments,
        remove_segments,
    }
}
