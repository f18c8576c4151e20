//! Camera and navigation settings with TOML preset support.
//!
//! Everything a host may want to tweak (initial camera, navigation
//! constants, key bindings) is consolidated here. Options serialize to/from
//! TOML so view presets can live next to the application.

mod camera;
mod keybindings;
mod navigation;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
pub use navigation::{NavigationOptions, WHEEL_DELTA};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::VantageError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[navigation]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Initial camera placement and projection.
    pub camera: CameraOptions,
    /// Gesture-to-motion constants.
    pub navigation: NavigationOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, VantageError> {
        let content = std::fs::read_to_string(path)?;
        let mut opts: Self = toml::from_str(&content)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        log::info!("loaded options from {}", path.display());
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VantageError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        log::info!("saved options to {}", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::ProjectionKind;
    use crate::input::KeyAction;

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("vantage-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let mut parsed: Options = toml::from_str(&toml_str).unwrap();
        parsed.keybindings.rebuild_reverse_map();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[camera]
projection = "orthographic"
znear = 1.0

[navigation]
pan_step = 0.5
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.projection, ProjectionKind::Orthographic);
        assert_eq!(opts.camera.znear, 1.0);
        assert_eq!(opts.navigation.pan_step, 0.5);
        // Everything else should be default
        assert_eq!(opts.camera.zfar, 100.0);
        assert_eq!(opts.navigation.wheel_step, 1.0);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("ArrowDown"),
            Some(KeyAction::MoveUp)
        );
        assert_eq!(opts.keybindings.lookup("KeyQ"), Some(KeyAction::RollLeft));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn save_then_load_restores_bindings() {
        let dir = scratch_dir("save");
        let path = dir.join("presets").join("custom.toml");
        let mut opts = Options::default();
        opts.camera.fovy = 60.0;
        let _ = opts
            .keybindings
            .bindings
            .insert(KeyAction::MoveLeft, "KeyA".into());
        opts.keybindings.rebuild_reverse_map();
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded.camera.fovy, 60.0);
        assert_eq!(loaded.keybindings.lookup("KeyA"), Some(KeyAction::MoveLeft));
        assert_eq!(loaded, opts);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_reports_missing_file_and_bad_toml() {
        let dir = scratch_dir("load");
        assert!(matches!(
            Options::load(&dir.join("missing.toml")),
            Err(VantageError::Io(_))
        ));

        std::fs::create_dir_all(&dir).unwrap();
        let bad = dir.join("bad.toml");
        std::fs::write(&bad, "[camera]\nfovy = \"wide\"\n").unwrap();
        assert!(matches!(
            Options::load(&bad),
            Err(VantageError::OptionsParse(_))
        ));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn presets_are_sorted_toml_stems() {
        let dir = scratch_dir("presets");
        std::fs::create_dir_all(&dir).unwrap();
        for name in ["top.toml", "front.toml", "notes.txt"] {
            std::fs::write(dir.join(name), "").unwrap();
        }
        assert_eq!(Options::list_presets(&dir), ["front", "top"]);
        assert!(Options::list_presets(&dir.join("nope")).is_empty());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("navigation"));
        // Skipped sections should be absent
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("projection").is_some());
        assert!(camera.get("position").is_none());
    }
}
