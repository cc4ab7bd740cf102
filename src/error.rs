//! Crate-level error types.

use std::fmt;

use crate::camera::CameraError;
use crate::gpu::render_context::RenderContextError;

/// Errors produced by the fovea crate.
#[derive(Debug)]
pub enum FoveaError {
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// Camera parameter validation failure.
    Camera(CameraError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for FoveaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Camera(e) => write!(f, "camera error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for FoveaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Camera(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<RenderContextError> for FoveaError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<CameraError> for FoveaError {
    fn from(e: CameraError) -> Self {
        Self::Camera(e)
    }
}

impl From<std::io::Error> for FoveaError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
