//! End-to-end pipeline tests over synthetic sample series.
//!
//! Each test builds a small "video" or "track" by hand and checks the
//! decisions the analysis layer makes about it, including the guarantees
//! that hold across modules: determinism, ordering, and disjointness.

use clipsight_analysis::highlight::{select_highlights, CandidateConfig};
use clipsight_analysis::pacing::{plan_pacing, AutoEditConfig};
use clipsight_analysis::palette::{extract_palette, PaletteConfig};
use clipsight_analysis::scene::{detect_scene_changes, SceneChangeConfig, SceneChangeDetector};
use clipsight_analysis::silence::{segment_silence, SilenceConfig};
use clipsight_analysis::AnalysisError;
use clipsight_models::{AudioSample, FrameSample, PacingMode, PacingPlan, SilenceReport};

fn frame(time: f64, brightness: f64, colorfulness: f64, edge_intensity: f64) -> FrameSample {
    FrameSample::new(time, brightness, colorfulness, edge_intensity)
}

/// One-second-spaced frames whose interest score is carried entirely by
/// colorfulness.
fn scored_frames(scores: &[f64]) -> Vec<FrameSample> {
    scores
        .iter()
        .enumerate()
        .map(|(i, s)| frame(i as f64, 100.0, *s, 0.0))
        .collect()
}

fn audio_series(levels: &[f64]) -> Vec<AudioSample> {
    levels
        .iter()
        .enumerate()
        .map(|(i, level)| AudioSample::new(i as f64, *level))
        .collect()
}

fn rgba_of(pixels: &[[u8; 3]]) -> Vec<u8> {
    pixels
        .iter()
        .flat_map(|px| [px[0], px[1], px[2], 255])
        .collect()
}

/// A single action peak becomes one segment centered on it.
#[test]
fn test_action_peak_becomes_centered_highlight() {
    let samples = scored_frames(&[10.0, 10.0, 10.0, 90.0, 10.0, 10.0]);

    let segments = select_highlights(&samples, 5.0, 1, 2.0, &CandidateConfig::default())
        .expect("valid series should analyze");

    assert_eq!(segments.len(), 1);
    let segment = segments[0];
    assert!((segment.start - 2.0).abs() < 1e-9, "start: {}", segment.start);
    assert!((segment.end - 4.0).abs() < 1e-9, "end: {}", segment.end);
    assert!((segment.peak_time - 3.0).abs() < 1e-9);
}

/// A three-second quiet gap in the middle of a track is reported exactly.
#[test]
fn test_silence_gap_is_reported() {
    let samples = audio_series(&[50.0, 50.0, 10.0, 10.0, 10.0, 60.0]);

    let report = segment_silence(samples, &SilenceConfig::default())
        .expect("valid series should segment");

    assert_eq!(report.window_count(), 1);
    let window = report.windows[0];
    assert!((window.start - 2.0).abs() < 1e-9);
    assert!((window.end - 5.0).abs() < 1e-9);
    assert!((window.duration - 3.0).abs() < 1e-9);
    assert!((report.total_silence - 3.0).abs() < 1e-9);
}

/// A half-black half-white frame quantizes to both extremes.
#[test]
fn test_black_white_frame_splits_palette() {
    let rgba = rgba_of(&[[0, 0, 0], [0, 0, 0], [255, 255, 255], [255, 255, 255]]);
    let config = PaletteConfig::default().with_sample_stride(1);

    let palette = extract_palette(&rgba, 2, &config);

    assert_eq!(palette.len(), 2);
    let hex: Vec<String> = palette.iter().map(|c| c.to_hex()).collect();
    assert!(hex.contains(&"#000000".to_string()), "palette: {hex:?}");
    assert!(hex.contains(&"#ffffff".to_string()), "palette: {hex:?}");
}

/// Multiple peaks produce sorted, strictly disjoint segments capped at the
/// requested count.
#[test]
fn test_highlights_never_overlap_and_stay_sorted() {
    let mut scores = vec![10.0; 13];
    scores[2] = 90.0;
    scores[8] = 80.0;
    let samples = scored_frames(&scores);

    let segments = select_highlights(&samples, 12.0, 2, 3.0, &CandidateConfig::default())
        .expect("valid series should analyze");

    assert!(!segments.is_empty());
    assert!(segments.len() <= 2);
    for pair in segments.windows(2) {
        assert!(
            pair[0].start < pair[1].start,
            "segments must be sorted by start"
        );
        assert!(
            pair[1].start > pair[0].end,
            "touching endpoints count as overlap: {pair:?}"
        );
    }
    for segment in &segments {
        assert!(segment.duration() <= 3.0 + 1e-9);
        assert!(segment.start >= 0.0 && segment.end <= 12.0);
    }
}

/// A hard brightness jump turns into a confident cut under every mode.
#[test]
fn test_hard_cut_drives_pacing_plan() {
    // Edge intensity held at 20 so neither speed-ups nor low-motion fire.
    let samples = vec![
        frame(0.0, 20.0, 50.0, 20.0),
        frame(1.0, 200.0, 50.0, 20.0),
        frame(2.0, 200.0, 50.0, 20.0),
    ];

    for mode in PacingMode::ALL {
        let plan = plan_pacing(&samples, mode, &AutoEditConfig::default())
            .expect("valid series should plan");
        assert_eq!(plan.cuts, vec![1.0], "mode {mode}: {plan:?}");
        assert!(plan.remove_segments.is_empty());
        assert!(plan.speed_adjustments.is_empty());
    }
}

/// Flat low-detail footage gets speed-ups and removals, never cuts.
#[test]
fn test_flat_footage_gets_speed_ups_not_cuts() {
    let samples: Vec<FrameSample> = (0..6).map(|i| frame(i as f64, 100.0, 10.0, 2.0)).collect();

    let plan = plan_pacing(&samples, PacingMode::Fast, &AutoEditConfig::default())
        .expect("valid series should plan");

    assert!(plan.cuts.is_empty(), "no scene changes in flat footage");

    // Two five-sample windows fit in six samples; each flags its span.
    assert_eq!(plan.remove_segments.len(), 2);
    assert!((plan.remove_segments[0].start - 0.0).abs() < 1e-9);
    assert!((plan.remove_segments[0].end - 4.0).abs() < 1e-9);
    assert!((plan.remove_segments[1].start - 1.0).abs() < 1e-9);

    assert_eq!(plan.speed_adjustments.len(), 5);
    for window in &plan.speed_adjustments {
        assert!((window.factor - 1.5).abs() < 1e-9, "fast mode tops out at 1.5x");
    }
}

/// Feeding samples one at a time through the detector matches the batch
/// function exactly.
#[test]
fn test_streaming_and_batch_scene_detection_agree() {
    let samples = vec![
        frame(0.0, 10.0, 10.0, 0.0),
        frame(0.5, 90.0, 10.0, 0.0),
        frame(1.0, 90.0, 80.0, 0.0),
        frame(1.5, 92.0, 81.0, 0.0),
        frame(2.0, 10.0, 10.0, 0.0),
    ];
    let config = SceneChangeConfig::default();

    let batch = detect_scene_changes(&samples, &config);

    let mut detector = SceneChangeDetector::with_config(config);
    let streamed: Vec<_> = samples
        .iter()
        .filter_map(|s| detector.observe(*s))
        .collect();

    assert_eq!(batch, streamed);
    assert_eq!(detector.event_count() as usize, streamed.len());
}

/// Out-of-order timestamps are rejected by every pipeline entry point.
#[test]
fn test_unordered_samples_rejected_everywhere() {
    let frames = vec![frame(1.0, 10.0, 10.0, 0.0), frame(0.5, 10.0, 10.0, 0.0)];
    let audio = vec![AudioSample::new(1.0, 50.0), AudioSample::new(0.5, 50.0)];

    let highlight_err =
        select_highlights(&frames, 10.0, 1, 2.0, &CandidateConfig::default()).unwrap_err();
    assert!(matches!(highlight_err, AnalysisError::UnorderedSamples { index: 1, .. }));

    let pacing_err =
        plan_pacing(&frames, PacingMode::Balanced, &AutoEditConfig::default()).unwrap_err();
    assert!(matches!(pacing_err, AnalysisError::UnorderedSamples { index: 1, .. }));

    let silence_err = segment_silence(audio, &SilenceConfig::default()).unwrap_err();
    assert!(matches!(silence_err, AnalysisError::UnorderedSamples { index: 1, .. }));
}

/// Identical inputs produce identical outputs across the whole layer.
#[test]
fn test_pipeline_is_deterministic() {
    let frames: Vec<FrameSample> = (0..40)
        .map(|i| {
            let t = i as f64 * 0.5;
            frame(
                t,
                (i * 13 % 256) as f64,
                (i * 7 % 90) as f64,
                (i * 3 % 40) as f64,
            )
        })
        .collect();
    let audio: Vec<AudioSample> = (0..40)
        .map(|i| AudioSample::new(i as f64 * 0.5, (i * 11 % 200) as f64))
        .collect();
    let rgba: Vec<u8> = (0..400).map(|i| (i * 29 % 256) as u8).collect();

    let run = || {
        let highlights =
            select_highlights(&frames, 20.0, 3, 4.0, &CandidateConfig::default()).unwrap();
        let plan = plan_pacing(&frames, PacingMode::Balanced, &AutoEditConfig::default()).unwrap();
        let silence = segment_silence(audio.clone(), &SilenceConfig::default()).unwrap();
        let palette = extract_palette(&rgba, 4, &PaletteConfig::default());
        (highlights, plan, silence, palette)
    };

    assert_eq!(run(), run());
}

/// Plans and reports survive a JSON round trip unchanged.
#[test]
fn test_outputs_roundtrip_through_json() {
    let frames = vec![
        frame(0.0, 20.0, 50.0, 2.0),
        frame(1.0, 200.0, 50.0, 2.0),
        frame(2.0, 200.0, 50.0, 2.0),
    ];
    let plan = plan_pacing(&frames, PacingMode::Slow, &AutoEditConfig::default()).unwrap();
    let back = PacingPlan::from_json(&plan.to_json().unwrap()).unwrap();
    assert_eq!(plan, back);

    let audio = audio_series(&[50.0, 10.0, 10.0, 10.0, 60.0, 150.0]);
    let report = segment_silence(audio, &SilenceConfig::default()).unwrap();
    let back = SilenceReport::from_json(&report.to_json_pretty().unwrap()).unwrap();
    assert_eq!(report, back);

    let segments =
        select_highlights(&frames, 3.0, 1, 1.0, &CandidateConfig::default()).unwrap();
    let json = serde_json::to_string(&segments).unwrap();
    let parsed: Vec<clipsight_models::Segment> = serde_json::from_str(&json).unwrap();
    assert_eq!(segments, parsed);
}
