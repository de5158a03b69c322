//! Shared data models for the Clipsight analysis core.
//!
//! This crate provides Serde-serializable types for:
//! - Frame and audio feature samples
//! - Scene boundary events
//! - Highlight segments
//! - Pacing plans, cut suggestions, and speed windows
//! - Silence/loudness reports
//! - Color palette clusters
//!
//! Every type is a plain immutable value: produced by one analysis stage,
//! owned by the caller, never mutated after construction.

pub mod pacing;
pub mod palette;
pub mod sample;
pub mod scene;
pub mod segment;
pub mod silence;

// Re-export common types
pub use pacing::{
    CutReason, CutSuggestion, PacingMode, PacingModeParseError, PacingPlan, PacingProfile,
    SpeedRange, SpeedWindow, TimeRange,
};
pub use palette::ColorCluster;
pub use sample::{AudioSample, FrameSample};
pub use scene::SceneEvent;
pub use segment::Segment;
pub use silence::{LoudSegment, SilenceReport, SilenceWindow};
