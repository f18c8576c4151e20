use glam::{DMat4, DVec2, DVec3, DVec4};

use super::core::{ndc_in_range, valid_surface, Camera, ProjectionKind, Viewpoint};
use crate::error::VantageError;
use crate::math::matrix::{from_rows, plane_row};
use crate::math::Ray;

/// View-volume extents of an orthographic camera, in camera-local units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthoExtents {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl OrthoExtents {
    /// Explicit (possibly asymmetric) extents.
    pub fn new(
        left: f64,
        right: f64,
        top: f64,
        bottom: f64,
    ) -> Result<Self, VantageError> {
        let finite = [left, right, top, bottom].iter().all(|v| v.is_finite());
        if !finite || right == left || top == bottom {
            return Err(VantageError::InvalidExtents);
        }
        Ok(Self {
            left,
            right,
            top,
            bottom,
        })
    }

    /// Extents centred on the view axis, one unit per pixel of a
    /// `width` x `height` surface. Both sizes must be positive.
    pub fn centered(width: f64, height: f64) -> Result<Self, VantageError> {
        if !valid_surface(width, height) {
            return Err(VantageError::InvalidExtents);
        }
        Ok(Self {
            left: -0.5 * width,
            right: 0.5 * width,
            top: 0.5 * height,
            bottom: -0.5 * height,
        })
    }

    /// Left edge.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Top edge.
    #[must_use]
    pub fn top(&self) -> f64 {
        self.top
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    /// `right - left`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// `top - bottom`.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// Centre of the extents in camera-local X/Y.
    #[must_use]
    pub fn center(&self) -> DVec2 {
        DVec2::new(
            0.5 * (self.right + self.left),
            0.5 * (self.top + self.bottom),
        )
    }
}

/// Parallel-projection camera.
///
/// Uses the same plane-distance rows as [`PerspectiveCamera`], measured from
/// a reference point pushed `0.5 * (far + near)` ahead of the eye so the
/// depth range is centred on NDC zero.
///
/// [`PerspectiveCamera`]: super::PerspectiveCamera
#[derive(Debug, Clone, PartialEq)]
pub struct OrthographicCamera {
    viewpoint: Viewpoint,
    extents: OrthoExtents,
}

impl OrthographicCamera {
    /// Create a camera with explicit extents.
    #[must_use]
    pub fn new(viewpoint: Viewpoint, extents: OrthoExtents) -> Self {
        log::debug!(
            "orthographic camera at {:?} looking {:?} ({}x{})",
            viewpoint.frame().origin(),
            viewpoint.frame().z_axis(),
            extents.width(),
            extents.height()
        );
        Self { viewpoint, extents }
    }

    /// Current extents.
    #[must_use]
    pub fn extents(&self) -> OrthoExtents {
        self.extents
    }

    /// Replace the extents.
    pub fn set_extents(&mut self, extents: OrthoExtents) {
        self.extents = extents;
    }

    fn depth_scale(&self) -> f64 {
        2.0 / self.viewpoint.clip().depth()
    }

    fn derive(&self, origin: DVec3) -> DMat4 {
        let frame = self.viewpoint.frame();
        let clip = self.viewpoint.clip();
        let reference = origin + frame.z_axis() * clip.midpoint();

        let ext = self.extents;
        let sx = 2.0 / ext.width();
        let sy = 2.0 / ext.height();
        let sz = self.depth_scale();
        let cx = (ext.right() + ext.left()) / ext.width();
        let cy = (ext.top() + ext.bottom()) / ext.height();

        let x_row = plane_row(frame.x_axis(), reference);
        let y_row = plane_row(frame.y_axis(), reference);
        let z_row = plane_row(frame.z_axis(), reference);

        from_rows([
            x_row * sx - DVec4::new(0.0, 0.0, 0.0, cx),
            y_row * sy - DVec4::new(0.0, 0.0, 0.0, cy),
            z_row * sz,
            DVec4::W,
        ])
    }
}

impl Camera for OrthographicCamera {
    fn viewpoint(&self) -> &Viewpoint {
        &self.viewpoint
    }

    fn viewpoint_mut(&mut self) -> &mut Viewpoint {
        &mut self.viewpoint
    }

    fn kind(&self) -> ProjectionKind {
        ProjectionKind::Orthographic
    }

    fn projection_matrix(&self) -> DMat4 {
        self.derive(self.viewpoint.frame().origin())
    }

    fn view_projection_at_origin(&self) -> DMat4 {
        self.derive(DVec3::ZERO)
    }

    /// Linear: near maps to -1, far to +1.
    fn ndc_depth(&self, distance: f64) -> f64 {
        self.depth_scale() * (distance - self.viewpoint.clip().midpoint())
    }

    /// Every ray runs along the look direction; the NDC point picks where
    /// on the near plane it starts.
    fn pick_ray(&self, ndc: DVec2) -> Option<Ray> {
        if !ndc_in_range(ndc) {
            return None;
        }
        let ext = self.extents;
        let center = ext.center();
        let local = DVec3::new(
            center.x + ndc.x * 0.5 * ext.width(),
            center.y + ndc.y * 0.5 * ext.height(),
            self.z_near(),
        );
        let frame = self.viewpoint.frame();
        Some(Ray::new(frame.transform_point(local), frame.z_axis()))
    }

    fn resize(&mut self, width: f64, height: f64) {
        match OrthoExtents::centered(width, height) {
            Ok(extents) => self.extents = extents,
            Err(_) => log::debug!("ignoring resize to {width}x{height}"),
        }
    }
}
