//! Converts raw platform events into camera commands.
//!
//! The `InputProcessor` owns all transient input state (cursor position,
//! rotate-gesture tracking, modifier keys, surface size) together with the
//! navigation constants and key-binding map. It is the only thing that sits
//! between raw window events and [`CameraCommand::apply`].

use glam::DVec2;

use super::event::{InputEvent, MouseButton};
use super::keyboard::KeyAction;
use super::mouse::{screen_to_ndc, DragTracker};
use crate::camera::CameraCommand;
use crate::options::{KeybindingOptions, NavigationOptions, WHEEL_DELTA};

/// Converts raw window events into [`CameraCommand`]s.
///
/// # Gestures
///
/// - Moving the cursor with shift held yaws (horizontal motion) and pitches
///   (vertical motion) the camera. The first move of a gesture is swallowed.
/// - The wheel dollies along the look direction.
/// - A left press casts a pick ray through the cursor.
/// - Bound keys pan and roll.
///
/// # Usage
///
/// ```ignore
/// for command in input_processor.handle_event(event) {
///     let _ = command.apply(camera.as_mut());
/// }
///
/// if let Some(command) = input_processor.handle_key_press("ArrowUp") {
///     let _ = command.apply(camera.as_mut());
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    drag: DragTracker,
    cursor: DVec2,
    shift_pressed: bool,
    surface: DVec2,
    navigation: NavigationOptions,
    keybindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a processor with default navigation and key bindings and an
    /// unknown surface size (picks are dropped until the first resize).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with explicit options.
    #[must_use]
    pub fn with_options(
        navigation: NavigationOptions,
        keybindings: KeybindingOptions,
    ) -> Self {
        Self {
            navigation,
            keybindings,
            ..Self::default()
        }
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn cursor(&self) -> DVec2 {
        self.cursor
    }

    /// Whether the shift modifier is held.
    #[must_use]
    pub fn shift_pressed(&self) -> bool {
        self.shift_pressed
    }

    /// Surface size used to map clicks to NDC.
    #[must_use]
    pub fn surface(&self) -> DVec2 {
        self.surface
    }

    /// Set the surface size without emitting a resize command.
    pub fn set_surface(&mut self, width: f64, height: f64) {
        self.surface = DVec2::new(width, height);
    }

    /// Navigation constants in use.
    #[must_use]
    pub fn navigation(&self) -> &NavigationOptions {
        &self.navigation
    }

    /// Replace the navigation constants.
    pub fn set_navigation(&mut self, navigation: NavigationOptions) {
        self.navigation = navigation;
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn keybindings(&self) -> &KeybindingOptions {
        &self.keybindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    ///
    /// Call [`KeybindingOptions::rebuild_reverse_map`] after editing.
    pub fn keybindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.keybindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    ///
    /// Key strings use the `winit::keyboard::KeyCode` debug format
    /// (`"ArrowUp"`, `"KeyQ"`).
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<CameraCommand> {
        self.keybindings
            .lookup(key)
            .map(|action| self.action_command(action))
    }

    /// Process a raw input event and return the resulting commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Vec<CameraCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed).into_iter().collect()
            }
            InputEvent::Wheel { delta } => vec![CameraCommand::Dolly {
                distance: delta / WHEEL_DELTA * self.navigation.wheel_step,
            }],
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
                if !shift {
                    self.drag.reset();
                }
                Vec::new()
            }
            InputEvent::Resized { width, height } => {
                if width > 0.0 && height > 0.0 {
                    self.set_surface(width, height);
                }
                vec![CameraCommand::Resize { width, height }]
            }
        }
    }

    /// Cursor moved: track position, rotate while shift is held.
    fn handle_cursor_moved(&mut self, x: f64, y: f64) -> Vec<CameraCommand> {
        self.cursor = DVec2::new(x, y);
        let Some(delta) = self.drag.track(self.cursor, self.shift_pressed)
        else {
            return Vec::new();
        };

        let mut commands = Vec::with_capacity(2);
        if delta.x != 0.0 {
            commands.push(CameraCommand::Yaw {
                angle: self.navigation.yaw_per_pixel * delta.x,
            });
        }
        if delta.y != 0.0 {
            commands.push(CameraCommand::Pitch {
                angle: self.navigation.pitch_per_pixel * delta.y,
            });
        }
        commands
    }

    /// Left press picks through the cursor.
    fn handle_mouse_button(
        &self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<CameraCommand> {
        if button != MouseButton::Left || !pressed {
            return None;
        }
        let ndc = screen_to_ndc(self.cursor, self.surface);
        if ndc.is_none() {
            log::debug!("pick dropped: surface size unknown");
        }
        ndc.map(|ndc| CameraCommand::Pick { ndc })
    }

    fn action_command(&self, action: KeyAction) -> CameraCommand {
        let step = self.navigation.pan_step;
        let roll = self.navigation.roll_step;
        match action {
            KeyAction::MoveUp => CameraCommand::Pan {
                right: 0.0,
                up: step,
            },
            KeyAction::MoveDown => CameraCommand::Pan {
                right: 0.0,
                up: -step,
            },
            KeyAction::MoveLeft => CameraCommand::Pan {
                right: -step,
                up: 0.0,
            },
            KeyAction::MoveRight => CameraCommand::Pan {
                right: step,
                up: 0.0,
            },
            KeyAction::RollLeft => CameraCommand::Roll { angle: roll },
            KeyAction::RollRight => CameraCommand::Roll { angle: -roll },
        }
    }
}
