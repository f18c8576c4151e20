use glam::{DAffine3, DMat3, DQuat, DVec3};

use crate::error::VantageError;

/// Cross products shorter than this are treated as parallel inputs.
const PARALLEL_EPSILON: f64 = 1e-9;

/// Rigid local coordinate system embedded in world space.
///
/// Holds an origin and three unit basis vectors that are kept pairwise
/// orthogonal. For a camera the axes are Right (local X), Up (local Y) and
/// Forward (local Z, the look direction); that basis is left-handed, with
/// `right = forward × up`. Entities start from the right-handed identity
/// basis. Every mutation preserves the handedness it started with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    origin: DVec3,
    x_axis: DVec3,
    y_axis: DVec3,
    z_axis: DVec3,
}

impl Default for Frame {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Frame {
    /// World-aligned frame at the origin.
    pub const IDENTITY: Self = Self {
        origin: DVec3::ZERO,
        x_axis: DVec3::X,
        y_axis: DVec3::Y,
        z_axis: DVec3::Z,
    };

    /// Build a viewing frame at `position` looking along `look_at`.
    ///
    /// Neither direction has to be unit length, and `up` only needs to be
    /// roughly perpendicular to `look_at`: the stored up axis is re-derived
    /// from the right axis. Fails when either vector is zero or the two are
    /// parallel, since the orientation is then undefined.
    pub fn from_look(
        position: DVec3,
        look_at: DVec3,
        up: DVec3,
    ) -> Result<Self, VantageError> {
        let forward = look_at
            .try_normalize()
            .ok_or(VantageError::DegenerateOrientation)?;
        let up_hint =
            up.try_normalize().ok_or(VantageError::DegenerateOrientation)?;

        let cross = forward.cross(up_hint);
        if cross.length() < PARALLEL_EPSILON {
            return Err(VantageError::DegenerateOrientation);
        }
        let right = cross.normalize();
        let up = right.cross(forward);

        Ok(Self {
            origin: position,
            x_axis: right,
            y_axis: up,
            z_axis: forward,
        })
    }

    /// World-space origin.
    #[must_use]
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Local X axis in world space (Right for a camera).
    #[must_use]
    pub fn x_axis(&self) -> DVec3 {
        self.x_axis
    }

    /// Local Y axis in world space (Up for a camera).
    #[must_use]
    pub fn y_axis(&self) -> DVec3 {
        self.y_axis
    }

    /// Local Z axis in world space (Forward for a camera).
    #[must_use]
    pub fn z_axis(&self) -> DVec3 {
        self.z_axis
    }

    /// Move the origin to `origin`, keeping the orientation.
    pub fn set_origin(&mut self, origin: DVec3) {
        self.origin = origin;
    }

    /// Translate by a world-space offset.
    pub fn translate(&mut self, offset: DVec3) {
        self.origin += offset;
    }

    /// Rotate the basis about a world-space axis through the frame origin.
    ///
    /// Positive angles turn counter-clockwise when looking from the tip of
    /// `axis` back toward the origin. A zero-length axis leaves the frame
    /// unchanged.
    pub fn rotate(&mut self, axis: DVec3, angle: f64) {
        let Some(axis) = axis.try_normalize() else {
            return;
        };
        let rotation = DQuat::from_axis_angle(axis, angle);
        self.x_axis = rotation * self.x_axis;
        self.y_axis = rotation * self.y_axis;
        self.z_axis = rotation * self.z_axis;
        self.orthonormalize();
    }

    /// Rotate about an axis given in this frame's local coordinates.
    pub fn rotate_local(&mut self, local_axis: DVec3, angle: f64) {
        let axis = self.transform_vector(local_axis);
        self.rotate(axis, angle);
    }

    /// Map a local direction into world space (no translation).
    #[must_use]
    pub fn transform_vector(&self, local: DVec3) -> DVec3 {
        self.x_axis * local.x + self.y_axis * local.y + self.z_axis * local.z
    }

    /// Map a local point into world space.
    #[must_use]
    pub fn transform_point(&self, local: DVec3) -> DVec3 {
        self.origin + self.transform_vector(local)
    }

    /// Express a world-space point in local coordinates.
    #[must_use]
    pub fn to_local_point(&self, world: DVec3) -> DVec3 {
        let offset = world - self.origin;
        DVec3::new(
            self.x_axis.dot(offset),
            self.y_axis.dot(offset),
            self.z_axis.dot(offset),
        )
    }

    /// Basis as matrix columns.
    #[must_use]
    pub fn basis(&self) -> DMat3 {
        DMat3::from_cols(self.x_axis, self.y_axis, self.z_axis)
    }

    /// Local-to-world affine transform.
    #[must_use]
    pub fn to_affine(&self) -> DAffine3 {
        DAffine3::from_mat3_translation(self.basis(), self.origin)
    }

    /// Whether all axes are unit length and pairwise orthogonal within
    /// `tolerance`.
    #[must_use]
    pub fn is_orthonormal(&self, tolerance: f64) -> bool {
        let axes = [self.x_axis, self.y_axis, self.z_axis];
        let unit = axes.iter().all(|a| (a.length() - 1.0).abs() < tolerance);
        unit && self.x_axis.dot(self.y_axis).abs() < tolerance
            && self.y_axis.dot(self.z_axis).abs() < tolerance
            && self.z_axis.dot(self.x_axis).abs() < tolerance
    }

    /// Gram-Schmidt pass that keeps the Z axis direction exact.
    fn orthonormalize(&mut self) {
        let z = self.z_axis.normalize();
        let y = (self.y_axis - z * self.y_axis.dot(z)).normalize();
        let x = (self.x_axis - z * self.x_axis.dot(z) - y * self.x_axis.dot(y))
            .normalize();
        self.x_axis = x;
        self.y_axis = y;
        self.z_axis = z;
    }
}
