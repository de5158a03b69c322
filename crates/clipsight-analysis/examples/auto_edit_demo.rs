//! Demo: Edit Decisions for a Synthetic Clip
//!
//! Run with: cargo run -p clipsight-analysis --example auto_edit_demo

use clipsight_analysis::highlight::{select_highlights, CandidateConfig};
use clipsight_analysis::pacing::{plan_pacing, AutoEditConfig};
use clipsight_analysis::palette::{extract_palette, PaletteConfig};
use clipsight_analysis::silence::{segment_silence, SilenceConfig};
use clipsight_models::{AudioSample, FrameSample, PacingMode};

/// 20 seconds of footage sampled twice a second: a flat intro, an action
/// burst around t=8, a hard scene change at t=14.
fn synthetic_frames() -> Vec<FrameSample> {
    (0..=40)
        .map(|i| {
            let t = i as f64 * 0.5;
            let (brightness, colorfulness, edge) = if t < 6.0 {
                (80.0, 12.0, 3.0)
            } else if t < 10.0 {
                let peak = 1.0 - (t - 8.0).abs() / 2.0;
                (110.0, 40.0 + 60.0 * peak, 30.0 + 25.0 * peak)
            } else if t < 14.0 {
                (90.0, 25.0, 10.0)
            } else {
                (210.0, 30.0, 12.0)
            };
            FrameSample::new(t, brightness, colorfulness, edge)
        })
        .collect()
}

/// Speech-level audio with a dead-air gap from t=9 to t=13 and one loud
/// spike at t=15.
fn synthetic_audio() -> Vec<AudioSample> {
    (0..=40)
        .map(|i| {
            let t = i as f64 * 0.5;
            let level = if (9.0..13.0).contains(&t) {
                8.0
            } else if t == 15.0 {
                180.0
            } else {
                120.0
            };
            AudioSample::new(t, level)
        })
        .collect()
}

/// 8x1 thumbnail strip fading from dark teal to warm orange.
fn synthetic_thumbnail() -> Vec<u8> {
    (0..8u32)
        .flat_map(|x| {
            let f = x as f64 / 7.0;
            let r = (20.0 + 215.0 * f) as u8;
            let g = (90.0 + 50.0 * f) as u8;
            let b = (110.0 - 80.0 * f) as u8;
            [r, g, b, 255]
        })
        .collect()
}

fn banner(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

fn main() {
    let frames = synthetic_frames();
    let audio = synthetic_audio();

    banner("HIGHLIGHTS");
    let segments = select_highlights(&frames, 20.0, 2, 4.0, &CandidateConfig::default())
        .expect("synthetic series is valid");
    println!(
        "{}",
        serde_json::to_string_pretty(&segments).expect("serialization should be infallible")
    );

    banner("PACING PLANS");
    for mode in PacingMode::ALL {
        let plan = plan_pacing(&frames, mode, &AutoEditConfig::default())
            .expect("synthetic series is valid");
        println!(
            "{mode}: {} cuts, {} removals, {} speed windows",
            plan.cuts.len(),
            plan.remove_segments.len(),
            plan.speed_adjustments.len()
        );
    }
    let balanced = plan_pacing(&frames, PacingMode::Balanced, &AutoEditConfig::default())
        .expect("synthetic series is valid");
    println!(
        "{}",
        balanced
            .to_json_pretty()
            .expect("serialization should be infallible")
    );

    banner("SILENCE");
    let report = segment_silence(audio, &SilenceConfig::default())
        .expect("synthetic series is valid");
    println!(
        "{}",
        report
            .to_json_pretty()
            .expect("serialization should be infallible")
    );

    banner("PALETTE");
    let palette = extract_palette(
        &synthetic_thumbnail(),
        3,
        &PaletteConfig::default().with_sample_stride(1),
    );
    for cluster in &palette {
        println!("{}", cluster.to_hex());
    }
}
