//! Hysteresis state machine for silence-run detection.
//!
//! The segmenter walks the loudness series once, holding at most one open
//! run. Runs close when loudness comes back; whatever is still open when
//! the series ends is dropped unless the config says otherwise.
//!
//! # State Machine
//!
//! ```text
//!                   level < silence_threshold
//!     ┌─────────────────────────────────────────────────┐
//!     │                                                 ▼
//! ┌─────────┐                                     ┌───────────┐
//! │ Audible │◄────────────────────────────────────│ InSilence │
//! └─────────┘        level >= threshold           └───────────┘
//!     │                (run closes here)                │
//!     │ level > loud_threshold                          │ sequence end:
//!     ▼                                                 ▼ drop or close
//!  LoudSegment marker                              (config flag)
//! ```

use clipsight_models::{AudioSample, LoudSegment, SilenceReport, SilenceWindow};
use tracing::debug;

use super::config::SilenceConfig;

/// Internal state for the segmenter state machine.
enum State {
    /// Loudness is at or above the silence threshold.
    Audible,
    /// Inside a silence run, tracking where it started.
    InSilence { run_start: f64 },
}

/// Converts a loudness time series into silence windows and loud markers.
///
/// Caller-owned streaming handle: feed samples in time order with
/// [`ingest`](Self::ingest), then take the report with
/// [`finalize`](Self::finalize). Use [`reset`](Self::reset) to abandon an
/// in-progress series and start another with the same configuration.
pub struct SilenceSegmenter {
    config: SilenceConfig,
    state: State,
    windows: Vec<SilenceWindow>,
    loud_segments: Vec<LoudSegment>,
    total_silence: f64,
    retained_silence: f64,
    last_time: Option<f64>,
}

impl SilenceSegmenter {
    /// Create a segmenter with the given configuration.
    pub fn new(config: SilenceConfig) -> Self {
        Self {
            config,
            state: State::Audible,
            windows: Vec::new(),
            loud_segments: Vec::new(),
            total_silence: 0.0,
            retained_silence: 0.0,
            last_time: None,
        }
    }

    /// Process a single loudness sample.
    pub fn ingest(&mut self, sample: AudioSample) {
        self.last_time = Some(sample.time);
        let silent = sample.level < self.config.silence_threshold;

        match (&self.state, silent) {
            // Quiet sample with no open run: a run starts here.
            (State::Audible, true) => {
                self.state = State::InSilence {
                    run_start: sample.time,
                };
            }

            // Loudness came back: the open run closes at this sample.
            (State::InSilence { run_start }, false) => {
                let run_start = *run_start;
                self.close_run(run_start, sample.time);
                self.state = State::Audible;
                self.mark_if_loud(sample);
            }

            (State::Audible, false) => {
                self.mark_if_loud(sample);
            }

            // Still inside the run.
            (State::InSilence { .. }, true) => {}
        }
    }

    /// Finish the series and assemble the report.
    ///
    /// A run still open at this point is dropped, or closed at the final
    /// sample's time when `include_trailing_run` is set.
    pub fn finalize(mut self) -> SilenceReport {
        if let State::InSilence { run_start } = self.state {
            if self.config.include_trailing_run {
                if let Some(last_time) = self.last_time {
                    self.close_run(run_start, last_time);
                }
            } else {
                debug!(run_start, "Dropping silence run still open at sequence end");
            }
        }

        SilenceReport {
            windows: self.windows,
            loud_segments: self.loud_segments,
            total_silence: self.total_silence,
            retained_silence: self.retained_silence,
        }
    }

    /// Reset all state for a new media source, keeping the configuration.
    pub fn reset(&mut self) {
        self.state = State::Audible;
        self.windows.clear();
        self.loud_segments.clear();
        self.total_silence = 0.0;
        self.retained_silence = 0.0;
        self.last_time = None;
    }

    /// Windows closed and kept so far.
    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    fn close_run(&mut self, start: f64, end: f64) {
        let window = SilenceWindow::new(start, end);
        self.total_silence += window.duration;

        if window.duration > self.config.min_window_secs {
            self.retained_silence += window.duration;
            self.windows.push(window);
        } else {
            debug!(
                start,
                end,
                duration = window.duration,
                min = self.config.min_window_secs,
                "Silence run too short to report"
            );
        }
    }

    fn mark_if_loud(&mut self, sample: AudioSample) {
        if sample.level > self.config.loud_threshold {
            self.loud_segments
                .push(LoudSegment::new(sample.time, sample.level));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(levels: &[f64], config: &SilenceConfig) -> SilenceReport {
        let mut segmenter = SilenceSegmenter::new(config.clone());
        for (i, level) in levels.iter().enumerate() {
            segmenter.ingest(AudioSample::new(i as f64, *level));
        }
        segmenter.finalize()
    }

    #[test]
    fn test_all_audible() {
        let report = run(&[80.0, 90.0, 85.0, 70.0], &SilenceConfig::default());
        assert!(report.windows.is_empty());
        assert_eq!(report.total_silence, 0.0);
    }

    #[test]
    fn test_mid_sequence_run_closes() {
        let report = run(&[50.0, 50.0, 10.0, 10.0, 10.0, 60.0], &SilenceConfig::default());
        assert_eq!(report.windows.len(), 1);
        let window = report.windows[0];
        assert!((window.start - 2.0).abs() < 1e-9);
        assert!((window.end - 5.0).abs() < 1e-9);
        assert!((window.duration - 3.0).abs() < 1e-9);
        assert!((report.total_silence - 3.0).abs() < 1e-9);
        assert!((report.retained_silence - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_exact_threshold_is_audible() {
        // 30 is not below 30: it ends the run rather than extending it.
        let report = run(&[50.0, 10.0, 30.0, 10.0, 10.0, 50.0], &SilenceConfig::default());
        assert_eq!(report.windows.len(), 2);
        assert!((report.windows[0].duration - 1.0).abs() < 1e-9);
        assert!((report.windows[1].duration - 2.0).abs() < 1e-9);
        assert!((report.total_silence - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_short_run_counts_toward_total_only() {
        let mut segmenter = SilenceSegmenter::new(SilenceConfig::default());
        segmenter.ingest(AudioSample::new(0.0, 50.0));
        segmenter.ingest(AudioSample::new(1.0, 10.0));
        segmenter.ingest(AudioSample::new(1.4, 50.0));
        let report = segmenter.finalize();

        assert!(report.windows.is_empty(), "0.4s run is under the filter");
        assert!((report.total_silence - 0.4).abs() < 1e-9);
        assert_eq!(report.retained_silence, 0.0);
        assert!((report.dropped_silence() - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_run_exactly_at_min_window_is_dropped() {
        let mut segmenter = SilenceSegmenter::new(SilenceConfig::default());
        segmenter.ingest(AudioSample::new(0.0, 50.0));
        segmenter.ingest(AudioSample::new(1.0, 10.0));
        segmenter.ingest(AudioSample::new(1.5, 50.0));
        let report = segmenter.finalize();

        assert!(report.windows.is_empty(), "filter is strict: 0.5 <= 0.5 drops");
        assert!((report.total_silence - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_trailing_run_dropped_by_default() {
        let report = run(&[50.0, 10.0, 10.0], &SilenceConfig::default());
        assert!(report.windows.is_empty());
        assert_eq!(
            report.total_silence, 0.0,
            "a run that never closes contributes no duration"
        );
    }

    #[test]
    fn test_trailing_run_closed_behind_flag() {
        let config = SilenceConfig::default().with_include_trailing_run(true);
        let report = run(&[50.0, 10.0, 10.0], &config);
        assert_eq!(report.windows.len(), 1);
        assert!((report.windows[0].start - 1.0).abs() < 1e-9);
        assert!((report.windows[0].end - 2.0).abs() < 1e-9);
        assert!((report.total_silence - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_silence_is_one_open_run() {
        // Never closes without the flag; closes across the whole span with it.
        let levels = [10.0, 5.0, 8.0, 2.0];
        let dropped = run(&levels, &SilenceConfig::default());
        assert!(dropped.windows.is_empty());

        let config = SilenceConfig::default().with_include_trailing_run(true);
        let closed = run(&levels, &config);
        assert_eq!(closed.windows.len(), 1);
        assert!((closed.windows[0].duration - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_loud_markers_are_per_sample() {
        let report = run(&[150.0, 160.0, 50.0, 170.0], &SilenceConfig::default());
        assert_eq!(report.loud_segments.len(), 3, "no merging of adjacent markers");
        assert_eq!(report.loud_segments[0].time, 0.0);
        assert_eq!(report.loud_segments[2].time, 3.0);
    }

    #[test]
    fn test_loud_sample_closing_a_run_is_marked() {
        let report = run(&[50.0, 10.0, 10.0, 10.0, 180.0], &SilenceConfig::default());
        assert_eq!(report.windows.len(), 1);
        assert_eq!(report.loud_segments.len(), 1);
        assert_eq!(report.loud_segments[0].time, 4.0);
    }

    #[test]
    fn test_loud_markers_do_not_change_silence_sums() {
        let quiet = run(&[50.0, 10.0, 10.0, 10.0, 60.0], &SilenceConfig::default());
        let loud = run(&[250.0, 10.0, 10.0, 10.0, 250.0], &SilenceConfig::default());
        assert_eq!(quiet.total_silence, loud.total_silence);
        assert_eq!(quiet.windows, loud.windows);
    }

    #[test]
    fn test_multiple_runs_aggregate() {
        let mut segmenter = SilenceSegmenter::new(SilenceConfig::default());
        let series = [
            (0.0, 50.0),
            (1.0, 10.0), // run 1: 1.0 - 3.0 (kept)
            (3.0, 60.0),
            (4.0, 10.0), // run 2: 4.0 - 4.4 (filtered)
            (4.4, 60.0),
            (5.0, 10.0), // run 3: 5.0 - 7.0 (kept)
            (7.0, 60.0),
        ];
        for (time, level) in series {
            segmenter.ingest(AudioSample::new(time, level));
        }
        let report = segmenter.finalize();

        assert_eq!(report.windows.len(), 2);
        assert!((report.total_silence - 4.4).abs() < 1e-9);
        assert!((report.retained_silence - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut segmenter = SilenceSegmenter::new(SilenceConfig::default());
        segmenter.ingest(AudioSample::new(0.0, 10.0));
        segmenter.ingest(AudioSample::new(2.0, 60.0));
        assert_eq!(segmenter.window_count(), 1);

        segmenter.reset();
        assert_eq!(segmenter.window_count(), 0);
        let report = segmenter.finalize();
        assert!(report.windows.is_empty());
        assert_eq!(report.total_silence, 0.0);
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let levels = [50.0, 10.0, 10.0, 10.0, 60.0, 150.0];
        let first = run(&levels, &SilenceConfig::default());
        let second = run(&levels, &SilenceConfig::default());
        assert_eq!(first, second);
    }
}
