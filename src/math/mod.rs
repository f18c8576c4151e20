//! Spatial primitives layered on glam: rigid frames, rays, and the matrix
//! helpers the projection derivation is built from.

/// Rigid local coordinate systems.
pub mod frame;
/// Matrix layout conversion and plane-distance rows.
pub mod matrix;
/// World-space rays.
pub mod ray;

pub use frame::Frame;
pub use matrix::MatrixLayout;
pub use ray::Ray;
