//! Pinhole projection from pixel coordinates to primary rays.

use crate::renderer::{RenderError, RenderResult};
use lux_core::Camera;
use lux_math::{MathResult, Ray, Vector, VectorExt};

/// Per-render pixel-to-ray mapping.
///
/// The image plane sits at distance 1 in front of the camera. The field of
/// view sets its vertical extent, and the horizontal extent is that times the
/// aspect ratio.
///
/// A fixed camera (no `look_at`) uses the classic mapping
/// `py = 1 - 2 * ((y + 0.5) / H) * tan(fov / 2)`, which raises the image
/// plane by one unit. An aimed camera uses the centred
/// `py = (1 - 2 * ((y + 0.5) / H)) * tan(fov / 2)` so the target lands in the
/// middle of the image.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    origin: Vector,
    width: f64,
    height: f64,
    aspect: f64,
    angle: f64,
    aimed: bool,

    // Camera basis: right, up, and backward (the camera looks down -w)
    u: Vector,
    v: Vector,
    w: Vector,
}

impl Projection {
    /// Precompute the projection for an image of `width` x `height` pixels.
    pub fn new(camera: &Camera, width: u32, height: u32) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }

        let fov = camera.field_of_view;
        if !(fov > 0.0 && fov < 180.0) {
            return Err(RenderError::InvalidCamera(format!(
                "field of view must be between 0 and 180 degrees, got {fov}"
            )));
        }

        let (u, v, w) = match camera.look_at {
            None => (Vector::X, Vector::Y, Vector::Z),
            Some(target) => {
                let w = (camera.position - target).unit().map_err(|_| {
                    RenderError::InvalidCamera("look_at target equals camera position".into())
                })?;
                let u = Vector::Y.cross(w).unit().map_err(|_| {
                    RenderError::InvalidCamera("cannot look straight up or down".into())
                })?;
                (u, w.cross(u), w)
            }
        };

        let width = width as f64;
        let height = height as f64;

        Ok(Self {
            origin: camera.position,
            width,
            height,
            aspect: width / height,
            angle: (fov / 2.0).to_radians().tan(),
            aimed: camera.look_at.is_some(),
            u,
            v,
            w,
        })
    }

    /// Generate the primary ray through the center of pixel (x, y).
    ///
    /// Pixel (0, 0) is the top-left corner of the image.
    pub fn ray_for(&self, x: u32, y: u32) -> MathResult<Ray> {
        let px = (2.0 * ((x as f64 + 0.5) / self.width) - 1.0) * self.angle * self.aspect;
        let fy = (y as f64 + 0.5) / self.height;
        let py = if self.aimed {
            (1.0 - 2.0 * fy) * self.angle
        } else {
            1.0 - 2.0 * fy * self.angle
        };

        let direction = self.u * px + self.v * py - self.w;
        Ray::new(self.origin, direction)
    }
}
