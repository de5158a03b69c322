#![deny(unreachable_patterns)]
//! Pure decision layer for automated video editing.
//!
//! This crate provides:
//! - Interest scoring from per-frame pixel statistics
//! - Scene-change detection over frame sample sequences
//! - Highlight ranking and non-overlapping segment selection
//! - Cut suggestion and pacing plan assembly
//! - Silence segmentation over audio loudness series
//! - Deterministic dominant-color palette extraction
//!
//! Every entry point is a pure function of its inputs: no decoding, no
//! I/O, no clocks, no threads. Callers extract [`clipsight_models::FrameSample`]
//! and [`clipsight_models::AudioSample`] series however they like (FFmpeg,
//! a browser canvas, a test fixture) and hand them in; identical inputs
//! always produce identical outputs.
//!
//! ```text
//!                      ┌─────────────┐
//!  FrameSample[] ────► │  scoring    │──► interest per frame
//!        │             └─────────────┘
//!        ├───────────► ┌─────────────┐    ┌─────────────┐
//!        │             │  highlight  │───►│ Segment[]   │
//!        │             └─────────────┘    └─────────────┘
//!        └───────────► ┌─────────────┐    ┌─────────────┐
//!                      │ scene+pacing│───►│ PacingPlan  │
//!                      └─────────────┘    └─────────────┘
//!  AudioSample[] ────► ┌─────────────┐    ┌───────────────┐
//!                      │  silence    │───►│ SilenceReport │
//!                      └─────────────┘    └───────────────┘
//!  RGBA buffer  ─────► ┌─────────────┐    ┌────────────────┐
//!                      │  palette    │───►│ ColorCluster[] │
//!                      └─────────────┘    └────────────────┘
//! ```

pub mod error;
pub mod highlight;
pub mod ingest;
pub mod pacing;
pub mod palette;
pub mod scene;
pub mod scoring;
pub mod silence;

// Error exports
pub use error::{AnalysisError, AnalysisResult, SampleKind};

// Frame scoring exports
pub use scoring::{interest_score, FrameStats};

// Scene detection exports
pub use scene::{detect_scene_changes, SceneChangeConfig, SceneChangeDetector};

// Highlight selection exports
pub use highlight::{select_highlights, CandidateConfig};

// Pacing exports
pub use pacing::{plan_pacing, suggest_cuts, AutoEditConfig, CutConfig};

// Silence exports
pub use silence::{segment_silence, SilenceConfig, SilenceSegmenter};

// Palette exports
pub use palette::{extract_palette, quantize_palette, PaletteConfig};
