// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Frame-based 3D cameras for interactive viewers.
//!
//! Vantage derives perspective and orthographic projection matrices
//! directly from an orthonormal camera frame, applies incremental
//! navigation (pitch, yaw, roll, pan, dolly) without letting the frame
//! drift, and turns screen positions into world-space pick rays.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - the camera trait, with
//!   [`camera::PerspectiveCamera`] and [`camera::OrthographicCamera`]
//! - [`input::InputProcessor`] - raw window events to
//!   [`camera::CameraCommand`]s
//! - [`engine::ViewEngine`] - camera, input, and drawables wired together
//! - [`options::Options`] - camera, navigation, and key-binding settings
//!   with TOML presets
//!
//! # Architecture
//!
//! Input is applied to the camera as soon as it arrives and only marks the
//! view dirty. On redraw the projection is re-derived from the current frame
//! and handed, together with each entity's model matrix, to a host-provided
//! [`gpu::UniformSink`]. Nothing is cached between frames.

pub mod camera;
pub mod engine;
pub mod entity;
pub mod error;
pub mod gpu;
pub mod input;
pub mod math;
pub mod options;

pub use camera::{Camera, CameraCommand};
pub use engine::ViewEngine;
pub use error::VantageError;
