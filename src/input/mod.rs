//! Input handling: event types, gesture tracking, and the input processor
//! that converts raw window events into camera commands.

/// Platform-agnostic input events.
pub mod event;
/// Key-bindable camera actions.
pub mod keyboard;
/// Cursor gesture tracking and screen-space mapping.
pub mod mouse;
/// Converts raw events into camera commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use keyboard::KeyAction;
pub use mouse::{screen_to_ndc, DragTracker};
pub use processor::InputProcessor;
