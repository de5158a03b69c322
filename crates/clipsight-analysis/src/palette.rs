//! Dominant-color extraction via fixed-iteration k-means.
//!
//! Reduces a frame to its `k` dominant colors for thumbnail theming and
//! brand-matching overlays. Determinism is the design constraint here:
//! the same buffer and `k` must always produce bit-identical clusters, so
//! seeding is positional (no RNG) and the iteration count is fixed rather
//! than convergence-tested.
//!
//! # Algorithm
//!
//! 1. Sample every `stride`-th pixel, skipping fully transparent ones.
//! 2. Seed `k` centroids from the first `k` sampled pixels (black when the
//!    sample set runs out).
//! 3. Run exactly [`KMEANS_ITERATIONS`] assign/update rounds. Distance ties
//!    go to the lowest cluster index; a cluster left empty resets to black.
//! 4. Emit the centroids in cluster order, rounded to 8-bit channels.
//!
//! # Usage
//!
//! ```
//! use clipsight_analysis::palette::{extract_palette, PaletteConfig};
//!
//! // 2x1 frame: one red pixel, one blue pixel.
//! let rgba = [255, 0, 0, 255, 0, 0, 255, 255];
//! let config = PaletteConfig::default().with_sample_stride(1);
//!
//! let palette = extract_palette(&rgba, 2, &config);
//! assert_eq!(palette.len(), 2);
//! ```

use clipsight_models::ColorCluster;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Assign/update rounds per quantization. Fixed so runtime and output do
/// not depend on convergence behavior.
pub const KMEANS_ITERATIONS: usize = 10;

/// Default pixel-sampling stride.
pub const DEFAULT_SAMPLE_STRIDE: usize = 4;

/// Tuning for palette extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Sample every Nth pixel of the buffer. 1 reads every pixel; larger
    /// strides trade accuracy for speed on big frames.
    pub sample_stride: usize,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            sample_stride: DEFAULT_SAMPLE_STRIDE,
        }
    }
}

impl PaletteConfig {
    /// Set the sampling stride, clamped to at least 1.
    pub fn with_sample_stride(mut self, stride: usize) -> Self {
        self.sample_stride = stride.max(1);
        self
    }
}

/// Collect every `stride`-th opaque pixel from an RGBA buffer.
///
/// Fully transparent pixels carry no color information and are skipped;
/// a trailing partial chunk is ignored.
pub fn sample_pixels(rgba: &[u8], stride: usize) -> Vec<[u8; 3]> {
    rgba.chunks_exact(4)
        .step_by(stride.max(1))
        .filter(|px| px[3] != 0)
        .map(|px| [px[0], px[1], px[2]])
        .collect()
}

/// Cluster sampled pixels into exactly `k` colors.
///
/// Total function: any input produces `k` clusters in stable order. With
/// fewer pixels than `k` (or none at all) the surplus clusters sit at
/// black, matching the empty-cluster reset rule.
pub fn quantize_palette(pixels: &[[u8; 3]], k: usize) -> Vec<ColorCluster> {
    if k == 0 {
        return Vec::new();
    }

    let mut centroids: Vec<[f64; 3]> = (0..k)
        .map(|i| match pixels.get(i) {
            Some(px) => [f64::from(px[0]), f64::from(px[1]), f64::from(px[2])],
            None => [0.0; 3],
        })
        .collect();

    for _ in 0..KMEANS_ITERATIONS {
        let mut sums = vec![[0.0f64; 3]; k];
        let mut counts = vec![0u64; k];

        for pixel in pixels {
            let cluster = nearest_centroid(pixel, &centroids);
            sums[cluster][0] += f64::from(pixel[0]);
            sums[cluster][1] += f64::from(pixel[1]);
            sums[cluster][2] += f64::from(pixel[2]);
            counts[cluster] += 1;
        }

        for cluster in 0..k {
            if counts[cluster] == 0 {
                // Empty cluster resets to black instead of keeping a
                // stale centroid.
                centroids[cluster] = [0.0; 3];
            } else {
                let n = counts[cluster] as f64;
                centroids[cluster] = [
                    sums[cluster][0] / n,
                    sums[cluster][1] / n,
                    sums[cluster][2] / n,
                ];
            }
        }
    }

    centroids
        .iter()
        .map(|c| {
            ColorCluster::new(
                c[0].round() as u8,
                c[1].round() as u8,
                c[2].round() as u8,
            )
        })
        .collect()
}

/// Sample a frame buffer and quantize it in one call.
pub fn extract_palette(rgba: &[u8], k: usize, config: &PaletteConfig) -> Vec<ColorCluster> {
    let pixels = sample_pixels(rgba, config.sample_stride);
    debug!(
        sampled = pixels.len(),
        stride = config.sample_stride,
        k,
        "Sampled pixels for palette extraction"
    );

    let palette = quantize_palette(&pixels, k);
    info!(clusters = palette.len(), "Palette extraction complete");
    palette
}

/// Index of the closest centroid by squared RGB distance, lowest index
/// winning ties.
fn nearest_centroid(pixel: &[u8; 3], centroids: &[[f64; 3]]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (i, centroid) in centroids.iter().enumerate() {
        let distance = squared_distance(pixel, centroid);
        if distance < best_distance {
            best_distance = distance;
            best = i;
        }
    }
    best
}

fn squared_distance(pixel: &[u8; 3], centroid: &[f64; 3]) -> f64 {
    let dr = f64::from(pixel[0]) - centroid[0];
    let dg = f64::from(pixel[1]) - centroid[1];
    let db = f64::from(pixel[2]) - centroid[2];
    dr * dr + dg * dg + db * db
}
