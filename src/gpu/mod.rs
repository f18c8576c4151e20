//! Device-facing boundary.
//!
//! The crate never talks to a graphics API directly. Hosts implement
//! [`UniformSink`] over their program/uniform/draw calls, or copy a
//! [`CameraUniform`] into a uniform buffer for buffer-based APIs.

/// Program-based upload and draw helpers.
pub mod sink;
/// Plain-old-data camera block for uniform buffers.
pub mod uniform;

pub use sink::{
    draw_entity, draw_environment, Drawable, MeshHandle, ProgramHandle,
    UniformSink, MODEL_UNIFORM, PROJECTION_UNIFORM,
};
pub use uniform::CameraUniform;
