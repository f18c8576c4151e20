//! Crate-level error types.

use std::fmt;

/// Errors produced by the vantage crate.
#[derive(Debug)]
pub enum VantageError {
    /// Look-at and up are parallel (or one of them has zero length), so no
    /// basis can be derived.
    DegenerateOrientation,
    /// Clip planes must satisfy `0 < near < far`.
    InvalidClipRange {
        /// Requested near distance.
        near: f64,
        /// Requested far distance.
        far: f64,
    },
    /// Vertical field of view outside `(0, 180)` degrees.
    InvalidFieldOfView(f64),
    /// Aspect ratio must be positive and finite.
    InvalidAspect(f64),
    /// Orthographic extents with zero width or height.
    InvalidExtents,
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for VantageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateOrientation => {
                write!(f, "degenerate orientation: look-at is parallel to up")
            }
            Self::InvalidClipRange { near, far } => {
                write!(f, "invalid clip range: near={near}, far={far}")
            }
            Self::InvalidFieldOfView(fov) => {
                write!(f, "invalid field of view: {fov} degrees")
            }
            Self::InvalidAspect(aspect) => {
                write!(f, "invalid aspect ratio: {aspect}")
            }
            Self::InvalidExtents => {
                write!(f, "orthographic extents have zero width or height")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for VantageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VantageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
