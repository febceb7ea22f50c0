use serde::{Deserialize, Serialize};

/// Roughly the field of view of the human eye in degrees, not counting peripheral vision, so
/// it's the amount of stuff we can focus on at a time.
pub const CONE_OF_VISUAL_ATTENTION: f64 = 55.0;

/// Anything further off the heading than this is behind the user.
pub const HEMISPHERE: f64 = 90.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Tunables for picking the buildings around the user
pub struct TrackingSettings {
    /// Total width in degrees of the window considered "in front"
    pub cone_of_visual_attention_deg: f64,
    /// Largest heading offset in degrees (either side) a building can have and still be picked
    pub hemisphere_deg: f64,
}

impl TrackingSettings {
    /// Largest heading offset that still counts as in front
    pub fn half_cone(&self) -> f64 {
        self.cone_of_visual_attention_deg / 2.0
    }
}

impl Default for TrackingSettings {
    fn default() -> Self {
        Self {
            cone_of_visual_attention_deg: CONE_OF_VISUAL_ATTENTION,
            hemisphere_deg: HEMISPHERE,
        }
    }
}
