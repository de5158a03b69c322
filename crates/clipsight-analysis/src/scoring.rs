//! Frame interest scoring.
//!
//! # Algorithm
//!
//! Each sampled frame is reduced to three raw statistics in one pass over
//! its RGBA buffer:
//!
//! 1. Mean Rec. 601 luminance (0-255) across opaque pixels.
//! 2. Color variance: `|R-G| + |G-B| + |B-R|` summed over every Nth
//!    opaque pixel (a cheap saturation/colorfulness proxy).
//! 3. Edge count: the number of consecutive opaque pixels whose luminance
//!    jumps by more than a fixed threshold (a cheap texture proxy).
//!
//! The statistics become a [`FrameSample`] by applying fixed weights, and
//! a sample's interest score is the sum of its two weighted terms:
//!
//! ```text
//! score = color_variance_sum / 1000 + edge_count / 10
//! ```
//!
//! The score is a unit-less heuristic for ranking moments within one
//! video; it is not calibrated against anything. Only monotonicity
//! matters: adding color variance or edges never lowers a score.

use clipsight_models::FrameSample;

/// Divisor turning a raw color-variance sum into stored colorfulness.
pub const COLOR_VARIANCE_DIVISOR: f64 = 1000.0;

/// Divisor turning a raw edge count into stored edge intensity.
pub const EDGE_COUNT_DIVISOR: f64 = 10.0;

/// Luminance jump between consecutive sampled pixels that counts as an edge.
pub const EDGE_JUMP_THRESHOLD: f64 = 50.0;

/// Every Nth opaque pixel contributes to the color-variance sum.
pub const COLOR_SAMPLE_STRIDE: usize = 4;

/// Raw per-frame pixel statistics, before weighting.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameStats {
    /// Mean luminance of opaque pixels, 0-255. Zero for an empty frame.
    pub mean_brightness: f64,

    /// Sum of per-pixel channel spread over the sampled pixels.
    pub color_variance_sum: f64,

    /// Number of above-threshold luminance jumps between consecutive
    /// opaque pixels.
    pub edge_count: u64,
}

impl FrameStats {
    /// Measure one frame from its RGBA byte buffer.
    ///
    /// Fully transparent pixels are skipped everywhere, so a fully
    /// transparent (or zero-sized) frame resolves to all-zero statistics
    /// rather than dividing by its missing pixel count.
    pub fn from_rgba(rgba: &[u8], width: u32, height: u32) -> Self {
        let pixel_count = width as usize * height as usize;

        let mut luminance_sum = 0.0;
        let mut opaque_pixels = 0u64;
        let mut color_variance_sum = 0.0;
        let mut edge_count = 0u64;
        let mut prev_luminance: Option<f64> = None;

        for (index, pixel) in rgba.chunks_exact(4).take(pixel_count).enumerate() {
            let [r, g, b, a] = [pixel[0], pixel[1], pixel[2], pixel[3]];
            if a == 0 {
                continue;
            }

            let lum = luminance(r, g, b);
            luminance_sum += lum;
            opaque_pixels += 1;

            if index % COLOR_SAMPLE_STRIDE == 0 {
                color_variance_sum += channel_spread(r, g, b);
            }

            if let Some(prev) = prev_luminance {
                if (lum - prev).abs() > EDGE_JUMP_THRESHOLD {
                    edge_count += 1;
                }
            }
            prev_luminance = Some(lum);
        }

        let mean_brightness = if opaque_pixels > 0 {
            luminance_sum / opaque_pixels as f64
        } else {
            0.0
        };

        Self {
            mean_brightness,
            color_variance_sum,
            edge_count,
        }
    }

    /// Apply the scoring weights and stamp the sample with its capture time.
    pub fn into_sample(self, time: f64) -> FrameSample {
        FrameSample::new(
            time,
            self.mean_brightness,
            self.color_variance_sum / COLOR_VARIANCE_DIVISOR,
            self.edge_count as f64 / EDGE_COUNT_DIVISOR,
        )
    }
}

/// Interest score of a sample: the sum of its weighted statistics.
///
/// Derived on demand, never stored.
pub fn interest_score(sample: &FrameSample) -> f64 {
    sample.colorfulness + sample.edge_intensity
}

/// Rec. 601 luma, 0-255.
fn luminance(r: u8, g: u8, b: u8) -> f64 {
    0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64
}

/// Per-pixel channel spread: `|R-G| + |G-B| + |B-R|`.
fn channel_spread(r: u8, g: u8, b: u8) -> f64 {
    let (r, g, b) = (r as f64, g as f64, b as f64);
    (r - g).abs() + (g - b).abs() + (b - r).abs()
}
