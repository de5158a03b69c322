//! Greedy non-overlapping segment selection.
//!
//! Candidates are consumed in rank order; each one claims a window of the
//! requested duration centered on its peak, clamped to the media bounds.
//! A window that touches any already-accepted window (boundary contact
//! included) is rejected outright, and selection moves on.
//!
//! Rank-greedy selection is deliberately not globally optimal: a
//! maximum-weight independent interval set is solvable by dynamic
//! programming, but the upstream oversampling keeps greedy close enough
//! and the simpler acceptance order is part of the observable contract.

use clipsight_models::Segment;
use std::cmp::Ordering;
use tracing::debug;

use super::candidates::Candidate;

/// Place up to `count` disjoint windows of `clip_duration` seconds around
/// the ranked candidates.
///
/// Total function: zero `count`, zero durations, or an empty candidate
/// list all yield an empty result. Output is sorted by window start,
/// regardless of acceptance order.
pub fn select_segments(
    candidates: &[Candidate],
    count: usize,
    clip_duration: f64,
    media_duration: f64,
) -> Vec<Segment> {
    if count == 0 || clip_duration <= 0.0 || media_duration <= 0.0 {
        return Vec::new();
    }

    let half = clip_duration / 2.0;
    let mut accepted: Vec<Segment> = Vec::with_capacity(count.min(candidates.len()));

    for candidate in candidates {
        if accepted.len() == count {
            break;
        }

        let start = (candidate.time - half).max(0.0);
        let end = (candidate.time + half).min(media_duration);
        if end <= start {
            // Clamping collapsed the window (peak outside the media).
            continue;
        }

        let segment = Segment::new(start, end, candidate.time, candidate.rank_weight());
        if accepted.iter().any(|taken| taken.overlaps(&segment)) {
            debug!(
                peak_time = candidate.time,
                start, end, "Candidate window overlaps an accepted segment, skipping"
            );
            continue;
        }
        accepted.push(segment);
    }

    accepted.sort_by(|a, b| a.start.partial_cmp(&b.start).unwrap_or(Ordering::Equal));
    accepted
}
