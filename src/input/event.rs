/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`CameraCommand`](crate::camera::CameraCommand) values.
///
/// # Example
///
/// ```ignore
/// let commands = input_processor.handle_event(
///     InputEvent::CursorMoved { x: 100.0, y: 200.0 },
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute surface position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f64,
        /// Vertical position in physical pixels, growing downwards.
        y: f64,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Mouse wheel turned.
    Wheel {
        /// Raw wheel units; one notch is
        /// [`WHEEL_DELTA`](crate::options::WHEEL_DELTA), positive away from
        /// the user.
        delta: f64,
    },
    /// Modifier key state changed.
    ModifiersChanged {
        /// Whether the shift key is held.
        shift: bool,
    },
    /// Drawing surface changed size.
    Resized {
        /// New width in physical pixels.
        width: f64,
        /// New height in physical pixels.
        height: f64,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

#[cfg(feature = "winit")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

#[cfg(feature = "winit")]
impl From<winit::dpi::PhysicalSize<u32>> for InputEvent {
    fn from(size: winit::dpi::PhysicalSize<u32>) -> Self {
        Self::Resized {
            width: f64::from(size.width),
            height: f64::from(size.height),
        }
    }
}
