//! Motion-weighted peak ranking.
//!
//! A frame earns candidacy either by being interesting on its own (score
//! above the floor) or by sitting on a sharp change (motion above the
//! floor). Candidates are ranked by `score + motion` and oversampled
//! relative to the requested segment count, because the downstream
//! selector will reject overlapping windows.

use clipsight_models::FrameSample;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::scoring::interest_score;

/// A frame sample promoted to a highlight candidate.
///
/// `motion` is the absolute score delta against the preceding sample
/// (zero for the first sample). Candidates are selection-internal and
/// never serialized across the boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Time of the underlying sample, in seconds.
    pub time: f64,

    /// Interest score of the underlying sample.
    pub score: f64,

    /// Absolute score delta from the previous sample.
    pub motion: f64,
}

impl Candidate {
    /// Ranking weight: score plus motion.
    pub fn rank_weight(&self) -> f64 {
        self.score + self.motion
    }
}

/// Configuration for candidate ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateConfig {
    /// Minimum standalone score for candidacy.
    pub score_floor: f64,

    /// Minimum score delta for candidacy.
    pub motion_floor: f64,

    /// Keep `oversample_factor * requested_count` ranked candidates.
    pub oversample_factor: usize,
}

impl Default for CandidateConfig {
    fn default() -> Self {
        Self {
            score_floor: 50.0,
            motion_floor: 20.0,
            oversample_factor: 3,
        }
    }
}

impl CandidateConfig {
    /// Set the standalone-score floor, clamped to be non-negative.
    pub fn with_score_floor(mut self, floor: f64) -> Self {
        self.score_floor = floor.max(0.0);
        self
    }

    /// Set the motion floor, clamped to be non-negative.
    pub fn with_motion_floor(mut self, floor: f64) -> Self {
        self.motion_floor = floor.max(0.0);
        self
    }

    /// Set the oversampling factor, clamped to at least 1.
    pub fn with_oversample_factor(mut self, factor: usize) -> Self {
        self.oversample_factor = factor.max(1);
        self
    }
}

/// Rank the motion-weighted peaks of a scored sequence.
///
/// Returns at most `oversample_factor * requested_count` candidates in
/// descending `score + motion` order; ties keep the earlier sample first.
pub fn rank_candidates(
    samples: &[FrameSample],
    requested_count: usize,
    config: &CandidateConfig,
) -> Vec<Candidate> {
    let mut prev_score: Option<f64> = None;
    let mut candidates: Vec<Candidate> = Vec::new();

    for sample in samples {
        let score = interest_score(sample);
        let motion = match prev_score {
            Some(prev) => (score - prev).abs(),
            None => 0.0,
        };
        prev_score = Some(score);

        if score > config.score_floor || motion > config.motion_floor {
            candidates.push(Candidate {
                time: sample.time,
                score,
                motion,
            });
        }
    }

    // Stable sort keeps chronological order among equal weights.
    candidates.sort_by(|a, b| {
        b.rank_weight()
            .partial_cmp(&a.rank_weight())
            .unwrap_or(Ordering::Equal)
    });
    candidates.truncate(config.oversample_factor * requested_count);
    candidates
}
