//! GPU resource management utilities.
//!
//! Provides wgpu device/queue initialization for the ray-tracing pipeline.

/// wgpu device and queue initialization.
pub mod render_context;
