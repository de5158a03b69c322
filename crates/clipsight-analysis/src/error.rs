//! Error types for analysis operations.

use std::fmt;
use thiserror::Error;

/// Result type for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Which sample stream an input error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    Frame,
    Audio,
}

impl fmt::Display for SampleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleKind::Frame => write!(f, "frame"),
            SampleKind::Audio => write!(f, "audio"),
        }
    }
}

/// Errors that can occur when feeding samples into the analysis core.
///
/// Degenerate but well-formed inputs (one sample, all-silent audio, fewer
/// peaks than requested) are not errors; they produce shorter or empty
/// results. Only corrupt input fails.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Empty {kind} sample sequence")]
    EmptySamples { kind: SampleKind },

    #[error(
        "{kind} samples out of order at index {index}: time {time} follows {prev_time} \
         (timestamps must be strictly increasing)"
    )]
    UnorderedSamples {
        kind: SampleKind,
        index: usize,
        prev_time: f64,
        time: f64,
    },

    #[error("Negative {name}: {value}")]
    NegativeDuration { name: &'static str, value: f64 },

    #[error("Non-finite {field} in {kind} sample at index {index}")]
    NonFiniteSample {
        kind: SampleKind,
        index: usize,
        field: &'static str,
    },
}

impl AnalysisError {
    /// Create an empty-sequence error.
    pub fn empty_samples(kind: SampleKind) -> Self {
        Self::EmptySamples { kind }
    }

    /// Create an out-of-order error for the sample at `index`.
    pub fn unordered_samples(kind: SampleKind, index: usize, prev_time: f64, time: f64) -> Self {
        Self::UnorderedSamples {
            kind,
            index,
            prev_time,
            time,
        }
    }

    /// Create a negative-duration error for the named parameter.
    pub fn negative_duration(name: &'static str, value: f64) -> Self {
        Self::NegativeDuration { name, value }
    }

    /// Create a non-finite-field error for the sample at `index`.
    pub fn non_finite_sample(kind: SampleKind, index: usize, field: &'static str) -> Self {
        Self::NonFiniteSample { kind, index, field }
    }
}
