// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Host-side camera stage for a GPU ray tracer built on wgpu.
//!
//! The ray-generation kernel consumes a packed block of camera parameters:
//! eye position, an orthonormal viewing basis, a motion-blur shutter
//! interval, image-plane half extents, and a projection discriminant. This
//! crate builds that block from perspective, environment, and orthographic
//! cameras and keeps it resident in a uniform buffer the raygen pipeline
//! binds.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - eye/target/up plus a [`camera::Projection`]
//! - [`camera::CameraBinding`] - uniform buffer and bind group residency
//!   for the packed parameter block
//! - [`gpu::render_context::RenderContext`] - the wgpu device/queue the
//!   parameters upload into
//! - [`options::Options`] - TOML-backed camera presets

pub mod camera;
pub mod error;
pub mod gpu;
pub mod options;
