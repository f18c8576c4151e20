//! Camera navigation vocabulary.
//!
//! Every camera change the input layer can request is a `CameraCommand`.
//! Commands carry values already converted to world units and radians; the
//! conversion constants live in [`NavigationOptions`].
//!
//! [`NavigationOptions`]: crate::options::NavigationOptions

use glam::DVec2;

use super::core::{Camera, ProjectionKind};
use crate::math::Ray;

/// A single navigation or query request against a camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    /// Rotate about the current up axis by `angle` radians.
    Yaw {
        /// Angle in radians.
        angle: f64,
    },
    /// Rotate about the current right axis by `angle` radians.
    Pitch {
        /// Angle in radians.
        angle: f64,
    },
    /// Rotate about the current look direction by `angle` radians.
    Roll {
        /// Angle in radians.
        angle: f64,
    },
    /// Move along the current right/up axes.
    Pan {
        /// Distance along the right axis.
        right: f64,
        /// Distance along the up axis.
        up: f64,
    },
    /// Move along the look direction (perspective cameras only).
    Dolly {
        /// Distance along the look direction.
        distance: f64,
    },
    /// Surface size changed.
    Resize {
        /// New width in pixels.
        width: f64,
        /// New height in pixels.
        height: f64,
    },
    /// Cast a ray through a point in normalized device coordinates.
    Pick {
        /// Point in `[-1, 1]²`, +Y up.
        ndc: DVec2,
    },
}

impl CameraCommand {
    /// Apply the command to `camera`.
    ///
    /// Returns the ray for [`CameraCommand::Pick`], `None` for everything
    /// else.
    pub fn apply(self, camera: &mut dyn Camera) -> Option<Ray> {
        match self {
            Self::Yaw { angle } => camera.yaw(angle),
            Self::Pitch { angle } => camera.pitch(angle),
            Self::Roll { angle } => camera.roll(angle),
            Self::Pan { right, up } => {
                let offset = camera.right() * right + camera.up() * up;
                camera.translate(offset);
            }
            Self::Dolly { distance } => {
                if camera.kind() == ProjectionKind::Perspective {
                    let offset = camera.look_at() * distance;
                    camera.translate(offset);
                } else {
                    log::debug!("dolly ignored by {:?} camera", camera.kind());
                }
            }
            Self::Resize { width, height } => camera.resize(width, height),
            Self::Pick { ndc } => return camera.pick_ray(ndc),
        }
        None
    }

    /// Whether applying this command can change what the camera renders.
    #[must_use]
    pub fn changes_view(&self) -> bool {
        !matches!(self, Self::Pick { .. })
    }
}
