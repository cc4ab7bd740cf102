//! Command-line front end for the `fovea` camera stage.
//!
//! Loads [`Options`] from an optional preset file, builds a GPU
//! [`RenderContext`], uploads the configured camera, and logs the packed
//! parameter block.

use std::path::Path;

use fovea::camera::CameraBinding;
use fovea::error::FoveaError;
use fovea::gpu::render_context::RenderContext;
use fovea::options::Options;

/// Default render target size when no surface drives it.
const RENDER_SIZE: (u32, u32) = (1280, 720);

fn run(options: &Options) -> Result<(), FoveaError> {
    let context = pollster::block_on(RenderContext::new(RENDER_SIZE))?;
    log::info!(
        "GPU context ready ({}x{} target)",
        context.width,
        context.height
    );

    let mut camera = options.camera.to_camera();
    camera.set_aspect(context.aspect());

    let mut binding = CameraBinding::new(&context, camera)?;
    binding.upload(&context.queue)?;

    let uniform = binding.uniform();
    log::info!(
        "camera uploaded: kind {} origin {:?} u {:?} v {:?} w {:?}",
        uniform.kind,
        uniform.origin,
        uniform.u,
        uniform.v,
        uniform.w,
    );
    log::info!(
        "  extents {}x{}, shutter [{}, {}]",
        uniform.half_width,
        uniform.half_height,
        uniform.time0,
        uniform.time1,
    );
    Ok(())
}

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(opts) => opts,
            Err(e) => {
                log::error!("failed to load preset {path}: {e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    if let Err(e) = run(&options) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
