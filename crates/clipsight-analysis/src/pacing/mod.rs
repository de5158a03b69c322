//! Auto-edit pacing: from raw samples to a full edit decision.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ FrameSamples │───►│ Scene events │───►│ Cut          │
//! │              │    │  (detector)  │    │ suggestions  │
//! └──────┬───────┘    └──────────────┘    └──────┬───────┘
//!        │                                       │
//!        │            ┌──────────────┐           ▼
//!        └───────────►│ Low-motion   │    ┌──────────────┐
//!        │            │ windows      │───►│ PacingPlan   │
//!        │            └──────────────┘    │ cuts/speed/  │
//!        └───────────────────────────────►│ removals     │
//!                      (speed-up pairs)   └──────────────┘
//! ```
//!
//! The selected [`PacingMode`] picks the confidence gate and the speed
//! band from a fixed table; everything else is data-driven.

mod planner;
mod suggest;

pub use planner::{build_plan, DEFAULT_REMOVE_DURATION, SPEED_UP_EDGE_FLOOR};
pub use suggest::{suggest_cuts, CutConfig, FULL_CONFIDENCE_INTENSITY};

use clipsight_models::{FrameSample, PacingMode, PacingPlan};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AnalysisResult;
use crate::ingest::validate_frame_samples;
use crate::scene::{detect_scene_changes, SceneChangeConfig};

/// Everything the auto-edit pipeline can be tuned with.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AutoEditConfig {
    /// Scene-boundary detection tuning.
    pub scene: SceneChangeConfig,

    /// Cut-candidate generation tuning.
    pub cuts: CutConfig,
}

/// Run the full pacing pipeline over one sampled video.
///
/// Detects scene boundaries, generates cut suggestions from them and from
/// low-motion runs, and assembles the mode's pacing plan. A quiet, static
/// video legitimately produces an empty plan.
pub fn plan_pacing(
    samples: &[FrameSample],
    mode: PacingMode,
    config: &AutoEditConfig,
) -> AnalysisResult<PacingPlan> {
    validate_frame_samples(samples)?;

    let events = detect_scene_changes(samples, &config.scene);
    let suggestions = suggest_cuts(samples, &events, &config.cuts);
    let plan = build_plan(samples, &suggestions, mode);

    info!(
        samples = samples.len(),
        scene_events = events.len(),
        suggestions = suggestions.len(),
        cuts = plan.cuts.len(),
        removals = plan.remove_segments.len(),
        speed_ups = plan.speed_adjustments.len(),
        mode = %mode,
        "Pacing plan ready"
    );

    Ok(plan)
}
