use glam::{DMat4, DVec2, DVec3, DVec4};

use super::core::{ndc_in_range, valid_surface, Camera, ProjectionKind, Viewpoint};
use crate::error::VantageError;
use crate::math::matrix::{from_rows, plane_row};
use crate::math::Ray;

/// Perspective camera defined by a viewing frame, vertical field of view,
/// and aspect ratio.
///
/// The projection is assembled row by row from the signed distances of a
/// point to the three planes through the eye that are normal to Right, Up
/// and Forward. No look-at view matrix is built or inverted.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    viewpoint: Viewpoint,
    fov_degrees: f64,
    aspect: f64,
}

impl PerspectiveCamera {
    /// Create a camera with a vertical field of view in degrees and a
    /// width/height aspect ratio.
    pub fn new(
        viewpoint: Viewpoint,
        fov_degrees: f64,
        aspect: f64,
    ) -> Result<Self, VantageError> {
        validate_fov(fov_degrees)?;
        validate_aspect(aspect)?;
        log::debug!(
            "perspective camera at {:?} looking {:?} (fov {fov_degrees}°, aspect {aspect})",
            viewpoint.frame().origin(),
            viewpoint.frame().z_axis()
        );
        Ok(Self {
            viewpoint,
            fov_degrees,
            aspect,
        })
    }

    /// Vertical field of view (full angle) in degrees.
    #[must_use]
    pub fn fov_degrees(&self) -> f64 {
        self.fov_degrees
    }

    /// Width / height.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        self.aspect
    }

    /// Set the vertical field of view in degrees.
    pub fn set_fov_degrees(&mut self, fov_degrees: f64) -> Result<(), VantageError> {
        validate_fov(fov_degrees)?;
        self.fov_degrees = fov_degrees;
        Ok(())
    }

    /// Set the aspect ratio directly.
    pub fn set_aspect(&mut self, aspect: f64) -> Result<(), VantageError> {
        validate_aspect(aspect)?;
        self.aspect = aspect;
        Ok(())
    }

    /// Half width and half height of the frustum at the near plane.
    #[must_use]
    pub fn near_half_extents(&self) -> DVec2 {
        let top = self.z_near() * (self.fov_degrees.to_radians() * 0.5).tan();
        DVec2::new(self.aspect * top, top)
    }

    fn depth_scale(&self) -> f64 {
        2.0 / self.viewpoint.clip().depth()
    }

    fn derive(&self, origin: DVec3) -> DMat4 {
        let frame = self.viewpoint.frame();
        let clip = self.viewpoint.clip();
        let near = clip.near();

        let half = self.near_half_extents();
        let (left, right) = (-half.x, half.x);
        let (bottom, top) = (-half.y, half.y);
        let sx = 2.0 / (right - left);
        let sy = 2.0 / (top - bottom);
        let sz = self.depth_scale();

        let x_row = plane_row(frame.x_axis(), origin);
        let y_row = plane_row(frame.y_axis(), origin);
        let z_row = plane_row(frame.z_axis(), origin);
        let depth_bias = DVec4::new(0.0, 0.0, 0.0, clip.midpoint());

        from_rows([
            x_row * (sx * near),
            y_row * (sy * near),
            (z_row - depth_bias) * sz,
            z_row,
        ])
    }
}

impl Camera for PerspectiveCamera {
    fn viewpoint(&self) -> &Viewpoint {
        &self.viewpoint
    }

    fn viewpoint_mut(&mut self) -> &mut Viewpoint {
        &mut self.viewpoint
    }

    fn kind(&self) -> ProjectionKind {
        ProjectionKind::Perspective
    }

    fn projection_matrix(&self) -> DMat4 {
        self.derive(self.viewpoint.frame().origin())
    }

    fn view_projection_at_origin(&self) -> DMat4 {
        self.derive(DVec3::ZERO)
    }

    /// `sz * (d - 0.5 * (far + near)) / d`: the near plane lands at
    /// `-1 / near` and the far plane at `1 / far`.
    fn ndc_depth(&self, distance: f64) -> f64 {
        let midpoint = self.viewpoint.clip().midpoint();
        self.depth_scale() * (distance - midpoint) / distance
    }

    fn pick_ray(&self, ndc: DVec2) -> Option<Ray> {
        if !ndc_in_range(ndc) {
            return None;
        }
        let half = self.near_half_extents();
        let frame = self.viewpoint.frame();
        let local = DVec3::new(ndc.x * half.x, ndc.y * half.y, self.z_near());
        Some(Ray::new(frame.origin(), frame.transform_vector(local)))
    }

    fn resize(&mut self, width: f64, height: f64) {
        if !valid_surface(width, height) {
            log::debug!("ignoring resize to {width}x{height}");
            return;
        }
        self.aspect = width / height;
    }
}

fn validate_fov(fov_degrees: f64) -> Result<(), VantageError> {
    if fov_degrees.is_finite() && fov_degrees > 0.0 && fov_degrees < 180.0 {
        Ok(())
    } else {
        Err(VantageError::InvalidFieldOfView(fov_degrees))
    }
}

fn validate_aspect(aspect: f64) -> Result<(), VantageError> {
    if aspect.is_finite() && aspect > 0.0 {
        Ok(())
    } else {
        Err(VantageError::InvalidAspect(aspect))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::core::ClipRange;
    use crate::math::MatrixLayout;

    fn scenario_camera() -> PerspectiveCamera {
        let clip = ClipRange::new(0.1, 100.0).unwrap();
        let viewpoint = Viewpoint::new(
            DVec3::new(0.0, 0.0, 5.0),
            DVec3::new(0.0, 0.0, -1.0),
            DVec3::Y,
            clip,
        )
        .unwrap();
        PerspectiveCamera::new(viewpoint, 45.0, 1.0).unwrap()
    }

    fn project(matrix: &DMat4, point: DVec3) -> DVec3 {
        let clip = *matrix * DVec4::new(point.x, point.y, point.z, 1.0);
        clip.truncate() / clip.w
    }

    #[test]
    fn scale_term_matches_standard_perspective() {
        let camera = scenario_camera();
        let m = camera.projection_matrix();
        let expected = 1.0 / 22.5_f64.to_radians().tan();
        assert!((m.col(0).x - expected).abs() < 1e-9);
        assert!((m.col(0).x - 2.414).abs() < 1e-3);
    }

    #[test]
    fn point_ahead_has_depth_inside_clip_cube() {
        let camera = scenario_camera();
        let ndc = project(&camera.projection_matrix(), DVec3::new(0.0, 0.0, 4.0));
        assert!(ndc.z > -1.0 && ndc.z < 1.0, "ndc z = {}", ndc.z);
        assert!(ndc.x.abs() < 1e-12 && ndc.y.abs() < 1e-12);
    }

    #[test]
    fn clip_w_is_forward_distance() {
        let camera = scenario_camera();
        let clip = camera.projection_matrix() * DVec4::new(1.0, -2.0, 1.5, 1.0);
        assert!((clip.w - 3.5).abs() < 1e-12);
    }

    #[test]
    fn near_and_far_planes_follow_depth_mapping() {
        let camera = scenario_camera();
        let m = camera.projection_matrix();
        let near_point = camera.position() + camera.look_at() * camera.z_near();
        let far_point = camera.position() + camera.look_at() * camera.z_far();

        let near_z = project(&m, near_point).z;
        let far_z = project(&m, far_point).z;
        assert!((near_z - camera.ndc_depth(0.1)).abs() < 1e-9);
        assert!((far_z - camera.ndc_depth(100.0)).abs() < 1e-9);
        assert!((near_z + 1.0 / 0.1).abs() < 1e-9);
        assert!((far_z - 1.0 / 100.0).abs() < 1e-9);
    }

    #[test]
    fn frustum_corner_maps_to_ndc_corner() {
        let clip = ClipRange::new(1.0, 50.0).unwrap();
        let viewpoint =
            Viewpoint::new(DVec3::new(2.0, 1.0, 0.0), DVec3::X, DVec3::Z, clip)
                .unwrap();
        let camera = PerspectiveCamera::new(viewpoint, 60.0, 2.0).unwrap();
        let half = camera.near_half_extents();
        let corner = camera
            .frame()
            .transform_point(DVec3::new(half.x, half.y, camera.z_near()) * 7.0);
        let ndc = project(&camera.projection_matrix(), corner);
        assert!((ndc.x - 1.0).abs() < 1e-9);
        assert!((ndc.y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn origin_variant_ignores_translation() {
        let mut camera = scenario_camera();
        let before = camera.view_projection_at_origin();
        camera.translate(DVec3::new(3.0, -4.0, 10.0));
        assert!(camera.view_projection_at_origin().abs_diff_eq(before, 1e-12));
        assert!(!camera.projection_matrix().abs_diff_eq(before, 1e-6));

        camera.yaw(0.3);
        assert!(!camera.view_projection_at_origin().abs_diff_eq(before, 1e-6));
    }

    #[test]
    fn origin_variant_matches_camera_at_world_origin() {
        let mut camera = scenario_camera();
        camera.pitch(0.2);
        let at_origin = camera.view_projection_at_origin();
        camera.viewpoint_mut().frame_mut().set_origin(DVec3::ZERO);
        assert!(camera.projection_matrix().abs_diff_eq(at_origin, 1e-12));
    }

    #[test]
    fn resize_updates_aspect() {
        let mut camera = scenario_camera();
        camera.resize(800.0, 600.0);
        assert_eq!(camera.aspect(), 800.0 / 600.0);
    }

    #[test]
    fn degenerate_resize_keeps_aspect() {
        let mut camera = scenario_camera();
        camera.resize(800.0, 600.0);
        camera.resize(0.0, 600.0);
        camera.resize(800.0, -5.0);
        assert_eq!(camera.aspect(), 800.0 / 600.0);
    }

    #[test]
    fn pick_ray_through_center_is_look_direction() {
        let camera = scenario_camera();
        let ray = camera.pick_ray(DVec2::ZERO).unwrap();
        assert!(ray.origin.abs_diff_eq(camera.position(), 1e-12));
        assert!(ray.direction.abs_diff_eq(camera.look_at(), 1e-12));
    }

    #[test]
    fn pick_ray_reprojects_to_same_ndc() {
        let mut camera = scenario_camera();
        camera.resize(1280.0, 720.0);
        camera.yaw(0.4);
        camera.roll(-0.25);
        let ndc = DVec2::new(0.6, -0.35);
        let ray = camera.pick_ray(ndc).unwrap();
        let hit = project(&camera.projection_matrix(), ray.at(12.0));
        assert!((hit.x - ndc.x).abs() < 1e-9);
        assert!((hit.y - ndc.y).abs() < 1e-9);
    }

    #[test]
    fn pick_outside_viewport_is_none() {
        let camera = scenario_camera();
        assert!(camera.pick_ray(DVec2::new(1.5, 0.0)).is_none());
        assert!(camera.pick_ray(DVec2::new(0.0, f64::NAN)).is_none());
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        let camera = scenario_camera();
        let viewpoint = *camera.viewpoint();
        assert!(matches!(
            PerspectiveCamera::new(viewpoint, 0.0, 1.0),
            Err(VantageError::InvalidFieldOfView(_))
        ));
        assert!(PerspectiveCamera::new(viewpoint, 180.0, 1.0).is_err());
        assert!(matches!(
            PerspectiveCamera::new(viewpoint, 45.0, 0.0),
            Err(VantageError::InvalidAspect(_))
        ));

        let mut camera = camera;
        assert!(camera.set_clip_range(5.0, 1.0).is_err());
        assert_eq!(camera.z_near(), 0.1);
        camera.set_clip_range(0.5, 20.0).unwrap();
        assert_eq!(camera.z_far(), 20.0);
    }

    #[test]
    fn fov_drives_scale() {
        let mut camera = scenario_camera();
        camera.set_fov_degrees(90.0).unwrap();
        let m = camera.projection_matrix();
        assert!((m.col(1).y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn column_major_array_puts_w_row_in_fourth_slots() {
        let camera = scenario_camera();
        let data = camera.projection_array(MatrixLayout::ColumnMajor);
        // Row 3 is the unscaled forward plane: (0, 0, -1, 5).
        assert_eq!(data[3], 0.0);
        assert_eq!(data[11], -1.0);
        assert_eq!(data[15], 5.0);
    }
}
