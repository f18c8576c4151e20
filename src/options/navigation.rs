use std::f64::consts::PI;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Raw wheel units reported for one notch.
pub const WHEEL_DELTA: f64 = 120.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Navigation", inline)]
#[serde(default)]
/// Conversion constants from input gestures to camera motion.
pub struct NavigationOptions {
    /// Yaw per pixel of horizontal shift-drag, in radians. Negative so that
    /// dragging right turns the view right.
    #[schemars(title = "Yaw per Pixel")]
    pub yaw_per_pixel: f64,
    /// Pitch per pixel of vertical shift-drag, in radians.
    #[schemars(title = "Pitch per Pixel")]
    pub pitch_per_pixel: f64,
    /// Distance moved per pan key press, in world units.
    #[schemars(title = "Pan Step", range(min = 0.01, max = 10.0), extend("step" = 0.01))]
    pub pan_step: f64,
    /// Distance moved per wheel notch, in world units.
    #[schemars(title = "Wheel Step", range(min = 0.01, max = 10.0), extend("step" = 0.01))]
    pub wheel_step: f64,
    /// Angle rolled per roll key press, in radians.
    #[schemars(title = "Roll Step")]
    pub roll_step: f64,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            yaw_per_pixel: -PI / 1800.0,
            pitch_per_pixel: PI / 1800.0,
            pan_step: 0.1,
            wheel_step: 1.0,
            roll_step: PI / 36.0,
        }
    }
}
