//! Options methods for ViewEngine

use std::path::Path;

use super::ViewEngine;
use crate::error::VantageError;
use crate::options::Options;

impl ViewEngine {
    /// Replace options: rebuilds the camera and reconfigures input.
    ///
    /// On error nothing changes.
    pub fn set_options(&mut self, new: Options) -> Result<(), VantageError> {
        let mut camera = new.camera.build_camera()?;
        let surface = self.input.surface();
        camera.resize(surface.x, surface.y);

        self.input.set_navigation(new.navigation.clone());
        *self.input.keybindings_mut() = new.keybindings.clone();
        self.camera = camera;
        self.options = new;
        self.redraw_requested = true;
        Ok(())
    }

    /// Load a named view preset from the presets directory.
    /// Returns true on success.
    pub fn load_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match Options::load(&path).and_then(|opts| self.set_options(opts)) {
            Ok(()) => {
                log::info!("Loaded view preset '{name}'");
                self.active_preset = Some(name.to_owned());
                true
            }
            Err(e) => {
                log::error!("Failed to load view preset '{name}': {e}");
                false
            }
        }
    }

    /// Save the current options as a named view preset.
    /// Returns true on success.
    pub fn save_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match self.options.save(&path) {
            Ok(()) => {
                log::info!("Saved view preset '{name}'");
                self.active_preset = Some(name.to_owned());
                true
            }
            Err(e) => {
                log::error!("Failed to save view preset '{name}': {e}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::camera::ProjectionKind;
    use crate::engine::ViewEngine;
    use crate::input::InputEvent;
    use crate::options::Options;

    #[test]
    fn set_options_keeps_surface_size() {
        let mut engine = ViewEngine::new(Options::default()).unwrap();
        engine.handle_event(InputEvent::Resized {
            width: 1000.0,
            height: 500.0,
        });
        let mut options = Options::default();
        options.camera.projection = ProjectionKind::Orthographic;
        engine.set_options(options).unwrap();

        assert_eq!(engine.camera().kind(), ProjectionKind::Orthographic);
        let edge = engine
            .camera()
            .frame()
            .transform_point(glam::DVec3::new(500.0, 250.0, 1.0));
        let clip = engine.camera().projection_matrix() * edge.extend(1.0);
        assert!((clip.x - 1.0).abs() < 1e-9);
        assert!((clip.y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn invalid_options_leave_engine_untouched() {
        let mut engine = ViewEngine::new(Options::default()).unwrap();
        let mut options = Options::default();
        options.camera.znear = -1.0;
        assert!(engine.set_options(options).is_err());
        assert_eq!(engine.options(), &Options::default());
        assert_eq!(engine.camera().z_near(), 0.1);
    }

    #[test]
    fn presets_round_trip_through_directory() {
        let dir = std::env::temp_dir()
            .join(format!("vantage-engine-presets-{}", std::process::id()));
        let mut engine = ViewEngine::new(Options::default()).unwrap();
        assert!(!engine.load_preset("missing", &dir));
        assert_eq!(engine.active_preset(), None);

        assert!(engine.save_preset("home", &dir));
        assert_eq!(Options::list_presets(&dir), ["home"]);
        assert!(engine.load_preset("home", &dir));
        assert_eq!(engine.active_preset(), Some("home"));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
