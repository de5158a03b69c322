//! Silence detection over audio loudness time series.
//!
//! Finds the quiet stretches of a track so editors can trim dead air, and
//! flags individual samples loud enough to deserve attention. Pure
//! sequence-to-report computation: loudness extraction happens upstream.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌──────────────────┐    ┌───────────────┐
//! │ AudioSample  │───►│ SilenceSegmenter │───►│ SilenceReport │
//! │ time series  │    │  (state machine) │    │ windows/loud/ │
//! └──────────────┘    └──────────────────┘    │ totals        │
//!                              ▲              └───────────────┘
//!                      ┌───────┴───────┐
//!                      │ SilenceConfig │
//!                      └───────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use clipsight_analysis::silence::{segment_silence, SilenceConfig};
//! use clipsight_models::AudioSample;
//!
//! let levels = [50.0, 50.0, 10.0, 10.0, 10.0, 60.0];
//! let samples: Vec<AudioSample> = levels
//!     .iter()
//!     .enumerate()
//!     .map(|(i, level)| AudioSample::new(i as f64, *level))
//!     .collect();
//!
//! let report = segment_silence(samples, &SilenceConfig::default())?;
//! assert_eq!(report.window_count(), 1);
//! assert_eq!(report.windows[0].duration, 3.0);
//! # Ok::<(), clipsight_analysis::AnalysisError>(())
//! ```

mod config;
mod segmenter;

pub use config::SilenceConfig;
pub use segmenter::SilenceSegmenter;

use clipsight_models::{AudioSample, SilenceReport};
use tracing::info;

use crate::error::AnalysisResult;
use crate::ingest::collect_audio;

/// Segment a full loudness series into a silence report.
///
/// Batch wrapper over [`SilenceSegmenter`]: validates the series, feeds it
/// through a fresh segmenter, and finalizes. Rejects empty or out-of-order
/// input; a single sample yields an empty report.
pub fn segment_silence(
    samples: impl IntoIterator<Item = AudioSample>,
    config: &SilenceConfig,
) -> AnalysisResult<SilenceReport> {
    let samples = collect_audio(samples)?;

    let mut segmenter = SilenceSegmenter::new(config.clone());
    for sample in samples {
        segmenter.ingest(sample);
    }
    let report = segmenter.finalize();

    info!(
        windows = report.window_count(),
        loud = report.loud_count(),
        total_silence = report.total_silence,
        retained_silence = report.retained_silence,
        "Silence segmentation complete"
    );
    Ok(report)
}
