use glam::DVec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::{
    Camera, ClipRange, OrthoExtents, OrthographicCamera, PerspectiveCamera,
    ProjectionKind, Viewpoint,
};
use crate::error::VantageError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Initial camera placement and projection parameters.
pub struct CameraOptions {
    /// Projection family.
    #[schemars(title = "Projection")]
    pub projection: ProjectionKind,
    /// Eye position in world space.
    #[schemars(skip)]
    pub position: [f64; 3],
    /// Look direction (need not be normalized).
    #[schemars(skip)]
    pub look_at: [f64; 3],
    /// Up hint (need not be perpendicular to `look_at`).
    #[schemars(skip)]
    pub up: [f64; 3],
    /// Vertical field of view in degrees (perspective only).
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f64,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f64,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f64,
    /// Initial surface width in pixels.
    #[schemars(skip)]
    pub width: f64,
    /// Initial surface height in pixels.
    #[schemars(skip)]
    pub height: f64,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            projection: ProjectionKind::Perspective,
            position: [0.0, 0.0, 5.0],
            look_at: [0.0, 0.0, -1.0],
            up: [0.0, 1.0, 0.0],
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
            width: 800.0,
            height: 600.0,
        }
    }
}

impl CameraOptions {
    /// Build the configured camera.
    ///
    /// Perspective cameras take their aspect from the surface size;
    /// orthographic cameras get one world unit per pixel.
    pub fn build_camera(&self) -> Result<Box<dyn Camera>, VantageError> {
        let clip = ClipRange::new(self.znear, self.zfar)?;
        let viewpoint = Viewpoint::new(
            DVec3::from_array(self.position),
            DVec3::from_array(self.look_at),
            DVec3::from_array(self.up),
            clip,
        )?;
        match self.projection {
            ProjectionKind::Perspective => Ok(Box::new(PerspectiveCamera::new(
                viewpoint,
                self.fovy,
                self.width / self.height,
            )?)),
            ProjectionKind::Orthographic => {
                let extents = OrthoExtents::centered(self.width, self.height)?;
                Ok(Box::new(OrthographicCamera::new(viewpoint, extents)))
            }
        }
    }
}
