use crate::camera::Camera;
use crate::entity::Entity;
use crate::math::matrix::{to_f32_array, MatrixLayout};

/// Uniform name for the entity model matrix.
pub const MODEL_UNIFORM: &str = "model";
/// Uniform name for the camera projection matrix.
pub const PROJECTION_UNIFORM: &str = "projection";

/// Host-assigned identifier of a linked shader program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramHandle(pub u32);

/// Host-assigned identifier of uploaded geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub u32);

/// The subset of a program-based graphics API the camera needs.
pub trait UniformSink {
    /// Make `program` current.
    fn use_program(&mut self, program: ProgramHandle);

    /// Set a 4x4 matrix uniform on the current program. `transpose` tells
    /// the device that `data` is row-major.
    fn set_uniform_mat4(
        &mut self,
        name: &str,
        data: &[f32; 16],
        transpose: bool,
    );

    /// Draw `mesh` with the current program.
    fn draw(&mut self, mesh: MeshHandle);
}

/// An entity bound to the program and mesh that draw it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drawable {
    /// Placement.
    pub entity: Entity,
    /// Shader program.
    pub program: ProgramHandle,
    /// Geometry.
    pub mesh: MeshHandle,
}

/// Draw one entity: the model matrix goes up row-major with
/// `transpose = true`, the projection column-major with `transpose = false`.
pub fn draw_entity(
    sink: &mut dyn UniformSink,
    camera: &dyn Camera,
    drawable: &Drawable,
) {
    let model = MatrixLayout::RowMajor;
    let projection = MatrixLayout::ColumnMajor;

    sink.use_program(drawable.program);
    sink.set_uniform_mat4(
        MODEL_UNIFORM,
        &drawable.entity.model_array(model),
        model.transpose_flag(),
    );
    sink.set_uniform_mat4(
        PROJECTION_UNIFORM,
        &camera.projection_array(projection),
        projection.transpose_flag(),
    );
    sink.draw(drawable.mesh);
}

/// Draw direction-only content (a skybox) with the camera's rotation but
/// not its position.
pub fn draw_environment(
    sink: &mut dyn UniformSink,
    camera: &dyn Camera,
    program: ProgramHandle,
    mesh: MeshHandle,
) {
    let layout = MatrixLayout::ColumnMajor;
    let matrix = to_f32_array(&camera.view_projection_at_origin(), layout);
    sink.use_program(program);
    sink.set_uniform_mat4(PROJECTION_UNIFORM, &matrix, layout.transpose_flag());
    sink.draw(mesh);
}
