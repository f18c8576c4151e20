//! Input methods for ViewEngine

use super::ViewEngine;
use crate::input::InputEvent;

impl ViewEngine {
    /// Process a platform-agnostic input event.
    ///
    /// Every command the event produces is applied to the camera before
    /// this returns.
    ///
    /// # Example
    ///
    /// ```ignore
    /// engine.handle_event(InputEvent::ModifiersChanged { shift: true });
    /// engine.handle_event(InputEvent::CursorMoved { x, y });
    /// ```
    pub fn handle_event(&mut self, event: InputEvent) {
        for command in self.input.handle_event(event) {
            let _ = self.execute(command);
        }
    }

    /// Apply the command bound to `key`, if any. Returns `true` if the key
    /// was bound.
    pub fn handle_key_press(&mut self, key: &str) -> bool {
        let Some(command) = self.input.handle_key_press(key) else {
            return false;
        };
        let _ = self.execute(command);
        true
    }
}
