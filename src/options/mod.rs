//! Camera configuration with TOML preset support.
//!
//! Render presets serialize to/from TOML. All sub-structs use
//! `#[serde(default)]` so partial files (e.g. only overriding
//! `[camera.projection]`) work correctly.

mod camera;

use std::path::Path;

pub use camera::{CameraOptions, ProjectionOptions};
use serde::{Deserialize, Serialize};

use crate::error::FoveaError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera parameters.
    pub camera: CameraOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns `FoveaError::Io` if the file cannot be read and
    /// `FoveaError::OptionsParse` if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, FoveaError> {
        let content = std::fs::read_to_string(path).map_err(FoveaError::Io)?;
        toml::from_str(&content)
            .map_err(|e| FoveaError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns `FoveaError::OptionsParse` on serialization failure and
    /// `FoveaError::Io` if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), FoveaError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FoveaError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FoveaError::Io)?;
        }
        std::fs::write(path, content).map_err(FoveaError::Io)
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
    use glam::Vec3;

    use super::*;
    use crate::camera::Projection;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
eye = [3.0, 3.0, 2.0]
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.eye, [3.0, 3.0, 2.0]);
        // Everything else should be default
        assert_eq!(opts.camera.target, [0.0, 0.0, 0.0]);
        assert_eq!(
            opts.camera.projection,
            ProjectionOptions::Perspective { vfov: 40.0, aspect: 16.0 / 9.0 }
        );
    }

    #[test]
    fn projection_tag_selects_kind() {
        let toml_str = r#"
[camera.projection]
kind = "orthographic"
width = 8.0
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        // Omitted height takes the field default
        assert_eq!(
            opts.camera.projection,
            ProjectionOptions::Orthographic { width: 8.0, height: 4.0 }
        );

        let toml_str = r#"
[camera.projection]
kind = "environment"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.projection, ProjectionOptions::Environment);
    }

    #[test]
    fn to_camera_maps_every_field() {
        let toml_str = r#"
[camera]
eye = [13.0, 2.0, 3.0]
target = [0.0, 0.0, 0.0]
up = [0.0, 1.0, 0.0]
shutter_open = 0.0
shutter_close = 1.0

[camera.projection]
kind = "perspective"
vfov = 20.0
aspect = 1.5
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        let camera = opts.camera.to_camera();

        assert_eq!(camera.eye, Vec3::new(13.0, 2.0, 3.0));
        assert_eq!(camera.up, Vec3::Y);
        assert_eq!(
            camera.projection,
            Projection::Perspective { vfov: 20.0, aspect: 1.5 }
        );
        assert_eq!(camera.shutter_close, 1.0);
    }

    #[test]
    fn unknown_projection_kind_is_rejected() {
        let toml_str = r#"
[camera.projection]
kind = "fisheye"
"#;
        assert!(toml::from_str::<Options>(toml_str).is_err());
    }
}
