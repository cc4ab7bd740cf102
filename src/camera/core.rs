use std::fmt;

use glam::Vec3;

/// Errors produced when turning camera parameters into GPU state.
#[derive(Debug, Clone, PartialEq)]
pub enum CameraError {
    /// Eye and target coincide; the view direction is undefined.
    DegenerateView,
    /// Up vector is zero or parallel to the view direction.
    DegenerateUp,
    /// Projection parameters are non-finite or out of range.
    InvalidProjection(String),
    /// Shutter interval is non-finite or closes before it opens.
    InvalidShutter {
        /// Shutter open time as given.
        open: f32,
        /// Shutter close time as given.
        close: f32,
    },
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateView => {
                write!(f, "eye and target coincide; view direction undefined")
            }
            Self::DegenerateUp => {
                write!(f, "up vector is zero or parallel to the view direction")
            }
            Self::InvalidProjection(msg) => {
                write!(f, "invalid projection: {msg}")
            }
            Self::InvalidShutter { open, close } => {
                write!(f, "invalid shutter interval [{open}, {close}]")
            }
        }
    }
}

impl std::error::Error for CameraError {}

/// Right-handed orthonormal camera frame.
///
/// `w` points from the look-at target back toward the eye, `u` right, `v`
/// up. The raygen kernel builds primary rays from this frame, so all three
/// axes are unit length and mutually orthogonal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    /// Eye position in world space.
    pub origin: Vec3,
    /// Right axis.
    pub u: Vec3,
    /// Up axis.
    pub v: Vec3,
    /// Backward axis (eye minus target direction).
    pub w: Vec3,
}

impl CameraBasis {
    /// Build the frame from an eye position, look-at target, and up hint.
    ///
    /// `v` is the cross product of two orthogonal unit vectors and needs no
    /// explicit normalization.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError::DegenerateView`] when eye and target
    /// coincide, and [`CameraError::DegenerateUp`] when the up hint is zero
    /// or parallel to the view direction.
    pub fn look_at(
        eye: Vec3,
        target: Vec3,
        up: Vec3,
    ) -> Result<Self, CameraError> {
        let w = (eye - target)
            .try_normalize()
            .ok_or(CameraError::DegenerateView)?;
        let u = up.cross(w).try_normalize().ok_or(CameraError::DegenerateUp)?;
        let v = w.cross(u);
        Ok(Self { origin: eye, u, v, w })
    }
}

/// Discriminant selecting the raygen projection model.
///
/// The numeric ids are part of the GPU contract; the kernel switches on
/// them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionKind {
    /// Pinhole perspective.
    Perspective,
    /// Full-sphere latitude-longitude.
    Environment,
    /// Parallel projection.
    Orthographic,
}

impl ProjectionKind {
    /// Stable id written into the uniform's `kind` slot.
    #[must_use]
    pub const fn gpu_id(self) -> u32 {
        match self {
            Self::Perspective => 0,
            Self::Environment => 1,
            Self::Orthographic => 2,
        }
    }
}

/// Projection model mapping film coordinates to ray directions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Pinhole perspective projection.
    Perspective {
        /// Vertical field of view in degrees.
        vfov: f32,
        /// Viewport aspect ratio (width / height).
        aspect: f32,
    },
    /// Full-sphere latitude-longitude projection. Carries no parameters
    /// beyond the camera frame.
    Environment,
    /// Parallel projection with a world-space image plane.
    Orthographic {
        /// Image plane width in world units.
        width: f32,
        /// Image plane height in world units.
        height: f32,
    },
}

impl Projection {
    /// The discriminant for this projection.
    #[must_use]
    pub const fn kind(&self) -> ProjectionKind {
        match self {
            Self::Perspective { .. } => ProjectionKind::Perspective,
            Self::Environment => ProjectionKind::Environment,
            Self::Orthographic { .. } => ProjectionKind::Orthographic,
        }
    }

    /// Image-plane `(half_width, half_height)` uploaded to the GPU.
    ///
    /// Perspective extents are tangents of the half field of view at unit
    /// focal distance; orthographic extents are world units. Environment
    /// cameras carry no extents, and the slots are written as zero so
    /// nothing stale survives a camera switch.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError::InvalidProjection`] when the field of view is
    /// outside (0, 180) degrees or an extent/aspect is not finite and
    /// positive.
    pub fn half_extent(&self) -> Result<(f32, f32), CameraError> {
        match *self {
            Self::Perspective { vfov, aspect } => {
                if !(vfov > 0.0 && vfov < 180.0) {
                    return Err(CameraError::InvalidProjection(format!(
                        "vfov must be in (0, 180) degrees, got {vfov}"
                    )));
                }
                if !aspect.is_finite() || aspect <= 0.0 {
                    return Err(CameraError::InvalidProjection(format!(
                        "aspect must be finite and positive, got {aspect}"
                    )));
                }
                let half_height = (vfov.to_radians() / 2.0).tan();
                Ok((aspect * half_height, half_height))
            }
            Self::Environment => Ok((0.0, 0.0)),
            Self::Orthographic { width, height } => {
                if !width.is_finite()
                    || width <= 0.0
                    || !height.is_finite()
                    || height <= 0.0
                {
                    return Err(CameraError::InvalidProjection(format!(
                        "orthographic extent must be finite and positive, \
                         got {width}x{height}"
                    )));
                }
                Ok((width / 2.0, height / 2.0))
            }
        }
    }
}

/// Full camera parameter set consumed by the ray-generation kernel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction hint.
    pub up: Vec3,
    /// Projection model and its parameters.
    pub projection: Projection,
    /// Shutter open time for motion blur ray sampling.
    pub shutter_open: f32,
    /// Shutter close time for motion blur ray sampling.
    pub shutter_close: f32,
}

impl Camera {
    /// Camera at `eye` looking at `target`, with an instantaneous shutter.
    #[must_use]
    pub const fn new(
        eye: Vec3,
        target: Vec3,
        up: Vec3,
        projection: Projection,
    ) -> Self {
        Self {
            eye,
            target,
            up,
            projection,
            shutter_open: 0.0,
            shutter_close: 0.0,
        }
    }

    /// Set the motion-blur shutter interval.
    #[must_use]
    pub const fn with_shutter(mut self, open: f32, close: f32) -> Self {
        self.shutter_open = open;
        self.shutter_close = close;
        self
    }

    /// The orthonormal viewing frame for the current eye/target/up.
    ///
    /// # Errors
    ///
    /// See [`CameraBasis::look_at`].
    pub fn basis(&self) -> Result<CameraBasis, CameraError> {
        CameraBasis::look_at(self.eye, self.target, self.up)
    }

    /// The validated shutter interval.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError::InvalidShutter`] when either endpoint is
    /// non-finite or the interval is reversed.
    pub fn shutter(&self) -> Result<(f32, f32), CameraError> {
        let (open, close) = (self.shutter_open, self.shutter_close);
        if !open.is_finite() || !close.is_finite() || close < open {
            return Err(CameraError::InvalidShutter { open, close });
        }
        Ok((open, close))
    }

    /// Update the aspect ratio after a viewport resize.
    ///
    /// Only perspective projections carry an aspect ratio; other kinds are
    /// unchanged.
    pub fn set_aspect(&mut self, aspect: f32) {
        if let Projection::Perspective { aspect: a, .. } = &mut self.projection
        {
            *a = aspect;
        }
    }
}
