use serde::{Deserialize, Serialize};

/// Camera actions that can be bound to keys.
///
/// Actions are named after the camera motion, so the default arrow-key
/// layout reads inverted: `ArrowDown` raises the camera, which makes the
/// scene appear to move down.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// move_up = "ArrowDown"
/// roll_left = "KeyQ"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Translate along +Up.
    MoveUp,
    /// Translate along -Up.
    MoveDown,
    /// Translate along -Right.
    MoveLeft,
    /// Translate along +Right.
    MoveRight,
    /// Roll counter-clockwise about the look direction.
    RollLeft,
    /// Roll clockwise about the look direction.
    RollRight,
}
