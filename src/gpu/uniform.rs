use crate::camera::Camera;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// Uniform buffer block holding both camera matrices and camera metadata.
///
/// Matrices are column-major, matching WGSL/GLSL `mat4x4<f32>`.
pub struct CameraUniform {
    /// World-to-clip matrix.
    pub projection: [[f32; 4]; 4],
    /// World-to-clip matrix with the eye moved to the origin, for skyboxes.
    pub environment: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Near clip distance.
    pub znear: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Far clip distance.
    pub zfar: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        bytemuck::Zeroable::zeroed()
    }
}

impl CameraUniform {
    /// Snapshot `camera`.
    #[must_use]
    pub fn from_camera(camera: &dyn Camera) -> Self {
        let mut uniform = Self::default();
        uniform.update(camera);
        uniform
    }

    /// Refresh every field from `camera`.
    pub fn update(&mut self, camera: &dyn Camera) {
        self.projection = camera.projection_matrix().as_mat4().to_cols_array_2d();
        self.environment =
            camera.view_projection_at_origin().as_mat4().to_cols_array_2d();
        self.position = camera.position().as_vec3().to_array();
        self.forward = camera.look_at().as_vec3().to_array();
        self.znear = camera.z_near() as f32;
        self.zfar = camera.z_far() as f32;
    }

    /// Raw bytes for a buffer write.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
