use glam::{DMat4, DVec2, DVec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::VantageError;
use crate::math::matrix::{to_f32_array, MatrixLayout};
use crate::math::{Frame, Ray};

/// Which projection a camera applies.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionKind {
    /// Frustum projection with a perspective divide.
    #[default]
    Perspective,
    /// Parallel projection, `w = 1`.
    Orthographic,
}

/// Near/far clip distances along the view direction, `0 < near < far`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRange {
    near: f64,
    far: f64,
}

impl ClipRange {
    /// Validate and create a clip range.
    pub fn new(near: f64, far: f64) -> Result<Self, VantageError> {
        let valid = near.is_finite() && far.is_finite() && near > 0.0 && far > near;
        if !valid {
            return Err(VantageError::InvalidClipRange { near, far });
        }
        Ok(Self { near, far })
    }

    /// Near plane distance.
    #[must_use]
    pub fn near(&self) -> f64 {
        self.near
    }

    /// Far plane distance.
    #[must_use]
    pub fn far(&self) -> f64 {
        self.far
    }

    /// `far - near`.
    #[must_use]
    pub fn depth(&self) -> f64 {
        self.far - self.near
    }

    /// Distance halfway between the planes, `0.5 * (far + near)`.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.far + self.near)
    }
}

/// State shared by every camera: its frame and clip range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewpoint {
    frame: Frame,
    clip: ClipRange,
}

impl Viewpoint {
    /// Place a viewpoint at `position` looking along `look_at`.
    pub fn new(
        position: DVec3,
        look_at: DVec3,
        up: DVec3,
        clip: ClipRange,
    ) -> Result<Self, VantageError> {
        let frame = Frame::from_look(position, look_at, up)?;
        Ok(Self { frame, clip })
    }

    /// Wrap an existing viewing frame.
    #[must_use]
    pub fn from_frame(frame: Frame, clip: ClipRange) -> Self {
        Self { frame, clip }
    }

    /// The viewing frame (Right, Up, Forward).
    #[must_use]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Mutable access to the viewing frame.
    pub fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    /// Clip distances.
    #[must_use]
    pub fn clip(&self) -> ClipRange {
        self.clip
    }

    /// Replace the clip distances.
    pub fn set_clip(&mut self, clip: ClipRange) {
        self.clip = clip;
    }
}

/// An oriented observer that derives projection matrices from its frame.
///
/// Implementors supply the projection-specific pieces; navigation and
/// accessors are provided on top of [`Viewpoint`]. Navigation angles are in
/// radians and follow the right-hand rule about the named axis.
pub trait Camera {
    /// Shared frame and clip state.
    fn viewpoint(&self) -> &Viewpoint;

    /// Mutable shared state.
    fn viewpoint_mut(&mut self) -> &mut Viewpoint;

    /// Projection family of this camera.
    fn kind(&self) -> ProjectionKind;

    /// World-to-clip matrix, re-derived from the current frame.
    fn projection_matrix(&self) -> DMat4;

    /// Same derivation with the camera origin moved to the world origin.
    ///
    /// For direction-only content (environment maps) that must rotate with
    /// the camera but never translate.
    fn view_projection_at_origin(&self) -> DMat4;

    /// NDC depth this camera assigns to a point `distance` units ahead
    /// along the look direction.
    fn ndc_depth(&self, distance: f64) -> f64;

    /// World-space ray through a point given in normalized device
    /// coordinates. `None` outside `[-1, 1]` on either axis.
    fn pick_ray(&self, ndc: DVec2) -> Option<Ray>;

    /// Adapt to a new surface size. Non-positive sizes are ignored.
    fn resize(&mut self, width: f64, height: f64);

    /// The viewing frame.
    fn frame(&self) -> &Frame {
        self.viewpoint().frame()
    }

    /// Eye position.
    fn position(&self) -> DVec3 {
        self.frame().origin()
    }

    /// Unit look direction (local Z).
    fn look_at(&self) -> DVec3 {
        self.frame().z_axis()
    }

    /// Unit up direction (local Y).
    fn up(&self) -> DVec3 {
        self.frame().y_axis()
    }

    /// Unit right direction (local X), `look_at × up`.
    fn right(&self) -> DVec3 {
        self.frame().x_axis()
    }

    /// Near clip distance.
    fn z_near(&self) -> f64 {
        self.viewpoint().clip().near()
    }

    /// Far clip distance.
    fn z_far(&self) -> f64 {
        self.viewpoint().clip().far()
    }

    /// Validate and set both clip distances.
    fn set_clip_range(&mut self, near: f64, far: f64) -> Result<(), VantageError> {
        let clip = ClipRange::new(near, far)?;
        self.viewpoint_mut().set_clip(clip);
        Ok(())
    }

    /// Rotate about the current right axis (tilt up/down).
    fn pitch(&mut self, angle: f64) {
        let axis = self.right();
        self.viewpoint_mut().frame_mut().rotate(axis, angle);
    }

    /// Rotate about the current up axis (turn left/right).
    fn yaw(&mut self, angle: f64) {
        let axis = self.up();
        self.viewpoint_mut().frame_mut().rotate(axis, angle);
    }

    /// Rotate about the current look direction (horizon tilt).
    fn roll(&mut self, angle: f64) {
        let axis = self.look_at();
        self.viewpoint_mut().frame_mut().rotate(axis, angle);
    }

    /// Move the eye by a world-space offset.
    fn translate(&mut self, offset: DVec3) {
        self.viewpoint_mut().frame_mut().translate(offset);
    }

    /// Projection matrix flattened for uniform upload.
    fn projection_array(&self, layout: MatrixLayout) -> [f32; 16] {
        to_f32_array(&self.projection_matrix(), layout)
    }
}

/// Whether `ndc` lies inside the `[-1, 1]` square.
pub(crate) fn ndc_in_range(ndc: DVec2) -> bool {
    ndc.is_finite() && ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0
}

/// Whether a surface size can drive a projection.
pub(crate) fn valid_surface(width: f64, height: f64) -> bool {
    width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
}
