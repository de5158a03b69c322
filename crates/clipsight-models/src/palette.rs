//! Color palette models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One representative color produced by palette quantization.
///
/// A quantization run yields exactly *k* clusters in stable cluster-index
/// order; clusters are never sorted by any visual property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct ColorCluster {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorCluster {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS-style hex form, e.g. `#1a2b3c`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for ColorCluster {
    fn from(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}
