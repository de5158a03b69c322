//! Scene boundary models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A detected discontinuity between two consecutive frame samples.
///
/// Emitted at the time of the later sample of the pair. `intensity` is the
/// sum of the brightness delta and the colorfulness delta that triggered
/// the event, so it is always at least the detector threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SceneEvent {
    /// Time of the sample that crossed the threshold, in seconds.
    pub time: f64,

    /// Combined brightness + colorfulness delta, >= 0.
    pub intensity: f64,
}

impl SceneEvent {
    pub fn new(time: f64, intensity: f64) -> Self {
        Self { time, intensity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_event_roundtrip() {
        let event = SceneEvent::new(12.0, 75.5);
        let json = serde_json::to_string(&event).unwrap();
        let back: SceneEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
