//! Highlight selection: from scored frames to disjoint short-form windows.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ FrameSamples │───►│ Candidates   │───►│ Selector     │
//! │ (scored)     │    │ (motion-     │    │ (greedy non- │
//! │              │    │  weighted)   │    │  overlap)    │
//! └──────────────┘    └──────────────┘    └──────────────┘
//!                                                │
//!                                                ▼
//!                                         ┌──────────────┐
//!                                         │ Segment[]    │
//!                                         │ (sorted,     │
//!                                         │  disjoint)   │
//!                                         └──────────────┘
//! ```
//!
//! Candidate ranking oversamples (3x the requested count) so that the
//! greedy overlap rejection downstream still has material to work with.
//!
//! # Usage
//!
//! ```rust
//! use clipsight_analysis::highlight::{select_highlights, CandidateConfig};
//! use clipsight_models::FrameSample;
//!
//! let samples: Vec<FrameSample> = (0..6)
//!     .map(|i| FrameSample::new(i as f64, 100.0, if i == 3 { 90.0 } else { 10.0 }, 0.0))
//!     .collect();
//! let segments =
//!     select_highlights(&samples, 5.0, 1, 2.0, &CandidateConfig::default()).unwrap();
//! assert_eq!(segments.len(), 1);
//! ```

mod candidates;
mod selector;

pub use candidates::{rank_candidates, Candidate, CandidateConfig};
pub use selector::select_segments;

use clipsight_models::{FrameSample, Segment};
use tracing::{debug, info};

use crate::error::AnalysisResult;
use crate::ingest::{ensure_non_negative, validate_frame_samples};

/// Run the full highlight pipeline over one sampled video.
///
/// Validates the sequence, ranks motion-weighted candidates, and greedily
/// places up to `count` non-overlapping windows of `clip_duration` seconds
/// clamped to `[0, media_duration]`. Fewer matching moments than requested
/// yields a shorter (possibly empty) result, not an error, and a sequence
/// of fewer than two samples always yields an empty result.
pub fn select_highlights(
    samples: &[FrameSample],
    media_duration: f64,
    count: usize,
    clip_duration: f64,
    config: &CandidateConfig,
) -> AnalysisResult<Vec<Segment>> {
    validate_frame_samples(samples)?;
    ensure_non_negative("media duration", media_duration)?;
    ensure_non_negative("clip duration", clip_duration)?;

    if samples.len() < 2 {
        debug!(
            samples = samples.len(),
            "Not enough samples to anchor a highlight window"
        );
        return Ok(Vec::new());
    }

    let candidates = rank_candidates(samples, count, config);
    let segments = select_segments(&candidates, count, clip_duration, media_duration);

    info!(
        samples = samples.len(),
        candidates = candidates.len(),
        requested = count,
        selected = segments.len(),
        "Highlight selection complete"
    );

    Ok(segments)
}
