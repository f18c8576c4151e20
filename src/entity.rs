//! Placeable objects and their model matrices.

use glam::{DMat4, DVec3};

use crate::math::matrix::{to_f32_array, MatrixLayout};
use crate::math::Frame;

/// A drawable object's placement: a rigid frame plus per-axis scale.
///
/// The model matrix is assembled from the frame's basis columns the same
/// way cameras build their projection rows, so nothing is re-derived from
/// accumulated Euler angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entity {
    frame: Frame,
    scale: DVec3,
}

impl Default for Entity {
    fn default() -> Self {
        Self {
            frame: Frame::IDENTITY,
            scale: DVec3::ONE,
        }
    }
}

impl Entity {
    /// An unscaled entity at the world origin, axes aligned with the world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An entity placed at `position`.
    #[must_use]
    pub fn at(position: DVec3) -> Self {
        let mut entity = Self::default();
        entity.set_position(position);
        entity
    }

    /// Local frame.
    #[must_use]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Origin in world space.
    #[must_use]
    pub fn position(&self) -> DVec3 {
        self.frame.origin()
    }

    /// Move the origin to `position`, keeping orientation.
    pub fn set_position(&mut self, position: DVec3) {
        self.frame.set_origin(position);
    }

    /// Move by a world-space offset.
    pub fn translate(&mut self, offset: DVec3) {
        self.frame.translate(offset);
    }

    /// Rotate about an axis given in the entity's own coordinates, through
    /// its origin.
    pub fn rotate(&mut self, axis: DVec3, angle: f64) {
        self.frame.rotate_local(axis, angle);
    }

    /// Per-axis scale.
    #[must_use]
    pub fn scale(&self) -> DVec3 {
        self.scale
    }

    /// Replace the per-axis scale.
    pub fn set_scale(&mut self, scale: DVec3) {
        self.scale = scale;
    }

    /// Local-to-world matrix: columns are the scaled basis axes and the
    /// origin.
    #[must_use]
    pub fn model_matrix(&self) -> DMat4 {
        DMat4::from_cols(
            (self.frame.x_axis() * self.scale.x).extend(0.0),
            (self.frame.y_axis() * self.scale.y).extend(0.0),
            (self.frame.z_axis() * self.scale.z).extend(0.0),
            self.frame.origin().extend(1.0),
        )
    }

    /// Model matrix flattened for uniform upload.
    #[must_use]
    pub fn model_array(&self, layout: MatrixLayout) -> [f32; 16] {
        to_f32_array(&self.model_matrix(), layout)
    }
}
