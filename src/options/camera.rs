use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::{Camera, Projection};

fn default_vfov() -> f32 {
    40.0
}

fn default_aspect() -> f32 {
    16.0 / 9.0
}

fn default_extent() -> f32 {
    4.0
}

/// Projection model selection for presets.
///
/// Serializes as a table tagged by `kind`, e.g.
/// `{ kind = "perspective", vfov = 40.0 }`. Omitted per-kind fields take
/// the defaults below.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProjectionOptions {
    /// Pinhole perspective projection.
    Perspective {
        /// Vertical field of view in degrees.
        #[serde(default = "default_vfov")]
        vfov: f32,
        /// Viewport aspect ratio (width / height).
        #[serde(default = "default_aspect")]
        aspect: f32,
    },
    /// Full-sphere latitude-longitude projection.
    Environment,
    /// Parallel projection with a world-space image plane.
    Orthographic {
        /// Image plane width in world units.
        #[serde(default = "default_extent")]
        width: f32,
        /// Image plane height in world units.
        #[serde(default = "default_extent")]
        height: f32,
    },
}

impl ProjectionOptions {
    /// Convert into the runtime projection type.
    #[must_use]
    pub fn to_projection(self) -> Projection {
        match self {
            Self::Perspective { vfov, aspect } => {
                Projection::Perspective { vfov, aspect }
            }
            Self::Environment => Projection::Environment,
            Self::Orthographic { width, height } => {
                Projection::Orthographic { width, height }
            }
        }
    }
}

/// Camera parameters for a render preset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraOptions {
    /// Eye position in world space.
    pub eye: [f32; 3],
    /// Look-at target position.
    pub target: [f32; 3],
    /// Up direction hint.
    pub up: [f32; 3],
    /// Projection model and parameters.
    pub projection: ProjectionOptions,
    /// Shutter open time for motion blur.
    pub shutter_open: f32,
    /// Shutter close time for motion blur.
    pub shutter_close: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            eye: [0.0, 2.0, 10.0],
            target: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
            projection: ProjectionOptions::Perspective {
                vfov: default_vfov(),
                aspect: default_aspect(),
            },
            shutter_open: 0.0,
            shutter_close: 0.0,
        }
    }
}

impl CameraOptions {
    /// Convert into the runtime camera type.
    #[must_use]
    pub fn to_camera(&self) -> Camera {
        Camera {
            eye: Vec3::from_array(self.eye),
            target: Vec3::from_array(self.target),
            up: Vec3::from_array(self.up),
            projection: self.projection.to_projection(),
            shutter_open: self.shutter_open,
            shutter_close: self.shutter_close,
        }
    }
}
