//! Sample-sequence validation and producer draining.
//!
//! The sampling collaborator owns the media element and its one-seek-at-a-
//! time constraint; by the time this crate runs, sampling is finished and
//! the sequence is complete. The helpers here are the boundary where that
//! hand-off is checked: every pipeline entry point validates its input
//! exactly once, and the algorithms behind it are total over validated
//! slices.
//!
//! Validation is a single pass rejecting corrupt sequences (empty,
//! non-strictly-increasing timestamps, non-finite fields). Well-formed but
//! degenerate sequences (a single sample, a flat signal) pass validation
//! and produce shorter or empty results downstream.

use clipsight_models::{AudioSample, FrameSample};

use crate::error::{AnalysisError, AnalysisResult, SampleKind};

/// Validate a frame-sample sequence: non-empty, finite fields, strictly
/// increasing timestamps.
pub fn validate_frame_samples(samples: &[FrameSample]) -> AnalysisResult<()> {
    if samples.is_empty() {
        return Err(AnalysisError::empty_samples(SampleKind::Frame));
    }
    for (index, sample) in samples.iter().enumerate() {
        check_finite(SampleKind::Frame, index, "time", sample.time)?;
        check_finite(SampleKind::Frame, index, "brightness", sample.brightness)?;
        check_finite(SampleKind::Frame, index, "colorfulness", sample.colorfulness)?;
        check_finite(SampleKind::Frame, index, "edge_intensity", sample.edge_intensity)?;
        if index > 0 {
            let prev_time = samples[index - 1].time;
            if sample.time <= prev_time {
                return Err(AnalysisError::unordered_samples(
                    SampleKind::Frame,
                    index,
                    prev_time,
                    sample.time,
                ));
            }
        }
    }
    Ok(())
}

/// Validate an audio-sample sequence: non-empty, finite fields, strictly
/// increasing timestamps.
pub fn validate_audio_samples(samples: &[AudioSample]) -> AnalysisResult<()> {
    if samples.is_empty() {
        return Err(AnalysisError::empty_samples(SampleKind::Audio));
    }
    for (index, sample) in samples.iter().enumerate() {
        check_finite(SampleKind::Audio, index, "time", sample.time)?;
        check_finite(SampleKind::Audio, index, "level", sample.level)?;
        if index > 0 {
            let prev_time = samples[index - 1].time;
            if sample.time <= prev_time {
                return Err(AnalysisError::unordered_samples(
                    SampleKind::Audio,
                    index,
                    prev_time,
                    sample.time,
                ));
            }
        }
    }
    Ok(())
}

/// Reject a negative duration-like parameter. Zero is valid input and
/// yields empty results downstream.
pub fn ensure_non_negative(name: &'static str, value: f64) -> AnalysisResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(AnalysisError::negative_duration(name, value));
    }
    Ok(())
}

/// Drain a finite frame-sample producer into a validated buffer.
///
/// Sampling and analysis never interleave: the producer runs to completion
/// here, then the returned buffer is analyzed in batch.
pub fn collect_frames(
    source: impl IntoIterator<Item = FrameSample>,
) -> AnalysisResult<Vec<FrameSample>> {
    let samples: Vec<FrameSample> = source.into_iter().collect();
    validate_frame_samples(&samples)?;
    Ok(samples)
}

/// Drain a finite audio-sample producer into a validated buffer.
pub fn collect_audio(
    source: impl IntoIterator<Item = AudioSample>,
) -> AnalysisResult<Vec<AudioSample>> {
    let samples: Vec<AudioSample> = source.into_iter().collect();
    validate_audio_samples(&samples)?;
    Ok(samples)
}

fn check_finite(
    kind: SampleKind,
    index: usize,
    field: &'static str,
    value: f64,
) -> AnalysisResult<()> {
    if !value.is_finite() {
        return Err(AnalysisError::non_finite_sample(kind, index, field));
    }
    Ok(())
}
