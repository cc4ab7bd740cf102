use wgpu::util::DeviceExt;

use crate::camera::core::{Camera, CameraError};
use crate::gpu::render_context::RenderContext;

/// GPU parameter block read by the ray-generation kernel.
///
/// This is the wgpu equivalent of per-name context slots: one packed
/// uniform whose field order and padding are the contract with the kernel.
/// Scalars ride in the padding lanes of the vec3 rows so the block is five
/// 16-byte rows.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// Eye position in world space.
    pub origin: [f32; 3],
    /// Shutter open time.
    pub time0: f32,
    /// Right basis axis.
    pub u: [f32; 3],
    /// Shutter close time.
    pub time1: f32,
    /// Up basis axis.
    pub v: [f32; 3],
    /// Image-plane half width.
    pub half_width: f32,
    /// Backward basis axis.
    pub w: [f32; 3],
    /// Image-plane half height.
    pub half_height: f32,
    /// Projection discriminant (0 perspective, 1 environment,
    /// 2 orthographic).
    pub kind: u32,
    /// Padding to the 16-byte row boundary.
    pub(crate) _pad: [u32; 3],
}

impl CameraUniform {
    /// Pack a camera into the GPU block.
    ///
    /// Every slot is written on every pack, including the extent slots an
    /// environment camera does not use, so no value from a previously
    /// configured camera can leak through.
    ///
    /// # Errors
    ///
    /// Returns `CameraError` when the basis is degenerate or the
    /// projection/shutter parameters fail validation. A returned uniform
    /// never contains NaN or infinity.
    pub fn pack(camera: &Camera) -> Result<Self, CameraError> {
        let basis = camera.basis()?;
        let (half_width, half_height) = camera.projection.half_extent()?;
        let (time0, time1) = camera.shutter()?;

        Ok(Self {
            origin: basis.origin.to_array(),
            time0,
            u: basis.u.to_array(),
            time1,
            v: basis.v.to_array(),
            half_width,
            w: basis.w.to_array(),
            half_height,
            kind: camera.projection.kind().gpu_id(),
            _pad: [0; 3],
        })
    }
}

/// GPU residency for a [`Camera`]: uniform buffer, bind group layout, and
/// bind group the raygen pipeline binds.
///
/// Camera mutations stay CPU-side until [`Self::upload`] pushes them; the
/// buffer is fixed-size, so the bind group stays valid across uploads.
pub struct CameraBinding {
    camera: Camera,
    uniform: CameraUniform,
    buffer: wgpu::Buffer,
    layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
}

impl CameraBinding {
    /// Create the buffer, layout, and bind group, with the camera's packed
    /// state as the initial buffer contents.
    ///
    /// # Errors
    ///
    /// Returns `CameraError` when the camera fails validation; no GPU
    /// resources are created in that case.
    pub fn new(
        context: &RenderContext,
        camera: Camera,
    ) -> Result<Self, CameraError> {
        let uniform = CameraUniform::pack(&camera)?;

        let buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        // The raygen program is a compute kernel
        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::COMPUTE,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            },
        );

        let bind_group =
            context.device.create_bind_group(&wgpu::BindGroupDescriptor {
                layout: &layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
                label: Some("Camera Bind Group"),
            });

        Ok(Self { camera, uniform, buffer, layout, bind_group })
    }

    /// Replace the camera. CPU-side only until [`Self::upload`].
    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    /// The current camera parameters.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera access for in-place edits.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// The most recently packed uniform contents.
    pub fn uniform(&self) -> &CameraUniform {
        &self.uniform
    }

    /// The uniform buffer, for callers building their own bind groups.
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Layout for pipelines that bind the camera block.
    pub fn layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    /// Bind group exposing the camera uniform at binding 0.
    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }

    /// Re-pack the current camera state and write it to the GPU.
    ///
    /// # Errors
    ///
    /// Returns `CameraError` when the camera fails validation; nothing is
    /// written in that case and the previous GPU contents stay intact.
    pub fn upload(&mut self, queue: &wgpu::Queue) -> Result<(), CameraError> {
        self.uniform = CameraUniform::pack(&self.camera)?;
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[
            self.uniform,
        ]));
        Ok(())
    }

    /// Track a viewport resize. Ignores zero-sized dimensions.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.camera.set_aspect(width as f32 / height as f32);
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::core::Projection;

    #[test]
    fn uniform_is_five_rows() {
        // Five 16-byte rows; any drift breaks the kernel-side struct
        assert_eq!(size_of::<CameraUniform>(), 80);
    }

    #[test]
    fn pack_perspective_fills_every_slot() {
        let camera = Camera::new(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::ZERO,
            Vec3::Y,
            Projection::Perspective { vfov: 90.0, aspect: 2.0 },
        )
        .with_shutter(0.0, 1.0);
        let uniform = CameraUniform::pack(&camera).unwrap();

        assert_eq!(uniform.origin, [0.0, 0.0, 5.0]);
        assert_eq!(uniform.u, [1.0, 0.0, 0.0]);
        assert_eq!(uniform.v, [0.0, 1.0, 0.0]);
        assert_eq!(uniform.w, [0.0, 0.0, 1.0]);
        assert_eq!(uniform.time0, 0.0);
        assert_eq!(uniform.time1, 1.0);
        assert!((uniform.half_height - 1.0).abs() < 1e-6);
        assert!((uniform.half_width - 2.0).abs() < 1e-6);
        assert_eq!(uniform.kind, 0);
    }

    #[test]
    fn pack_environment_zeroes_extent_slots() {
        let camera = Camera::new(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::ZERO,
            Vec3::Y,
            Projection::Environment,
        );
        let uniform = CameraUniform::pack(&camera).unwrap();

        assert_eq!(uniform.half_width, 0.0);
        assert_eq!(uniform.half_height, 0.0);
        assert_eq!(uniform.kind, 1);
    }

    #[test]
    fn pack_orthographic_uses_world_extents() {
        let camera = Camera::new(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::ZERO,
            Vec3::Y,
            Projection::Orthographic { width: 6.0, height: 4.0 },
        );
        let uniform = CameraUniform::pack(&camera).unwrap();

        assert_eq!(uniform.half_width, 3.0);
        assert_eq!(uniform.half_height, 2.0);
        assert_eq!(uniform.kind, 2);
    }

    #[test]
    fn pack_rejects_degenerate_camera() {
        let camera = Camera::new(
            Vec3::ONE,
            Vec3::ONE,
            Vec3::Y,
            Projection::Environment,
        );
        assert_eq!(
            CameraUniform::pack(&camera).unwrap_err(),
            CameraError::DegenerateView
        );
    }

    #[test]
    fn packed_uniform_is_always_finite() {
        let cameras = [
            Camera::new(
                Vec3::new(13.0, 2.0, 3.0),
                Vec3::ZERO,
                Vec3::Y,
                Projection::Perspective { vfov: 20.0, aspect: 16.0 / 9.0 },
            ),
            Camera::new(
                Vec3::new(-4.0, 1.0, 0.5),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::Y,
                Projection::Orthographic { width: 9.0, height: 5.0 },
            )
            .with_shutter(0.25, 0.75),
        ];
        for camera in cameras {
            let uniform = CameraUniform::pack(&camera).unwrap();
            // The f32 slots occupy the first four rows (64 bytes)
            let words: &[f32] = bytemuck::cast_slice(
                &bytemuck::bytes_of(&uniform)[..64],
            );
            assert!(words.iter().all(|x| x.is_finite()), "{uniform:?}");
        }
    }
}
