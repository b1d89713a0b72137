//! Image driver.
//!
//! Maps every pixel to a primary ray, traces it, and assembles the image:
//! - Dimension and camera validation before any work starts
//! - Bucket-parallel tracing with rayon, joined before the image is returned
//! - Clamped 8-bit conversion only at the image-write boundary

use std::time::Instant;

use rayon::prelude::*;
use thiserror::Error;

use crate::bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::camera::Projection;
use crate::trace::{sample, TraceStats};
use crate::{Color, Scene};
use lux_core::{color_to_rgba, BLACK};
use lux_math::{MathResult, MAX_TRACE_DEPTH};

/// Errors that abort a render before any pixel is traced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Invalid image dimensions {width}x{height}: both must be greater than zero")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid camera: {0}")]
    InvalidCamera(String),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Maximum reflection/refraction bounce depth
    pub max_depth: u32,
    /// Edge length of a render bucket in pixels
    pub bucket_size: u32,
    /// Trace buckets on the rayon thread pool
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_TRACE_DEPTH,
            bucket_size: DEFAULT_BUCKET_SIZE,
            parallel: true,
        }
    }
}

/// Trace the primary ray through pixel (x, y).
pub fn render_pixel(
    scene: &Scene,
    projection: &Projection,
    x: u32,
    y: u32,
    config: &RenderConfig,
    stats: &mut TraceStats,
) -> MathResult<Color> {
    let ray = projection.ray_for(x, y)?;
    sample(scene, &ray, 0, config.max_depth, stats)
}

/// Number of pixels in a `width` x `height` image, without `u32` overflow.
fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

/// Linear-color image produced by a render.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![BLACK; pixel_count(width, height)],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[y as usize * self.width as usize + x as usize] = color;
    }

    /// Copy a rendered bucket into place.
    fn write_bucket(&mut self, result: &BucketResult) {
        let Bucket { x, y, width, .. } = result.bucket;
        for (i, color) in result.pixels.iter().enumerate() {
            let i = i as u32;
            self.set(x + i % width, y + i / width, *color);
        }
    }

    /// Convert to clamped RGBA bytes (for display or saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color));
        }
        bytes
    }

    /// Convert to an `image` RGBA image with opaque alpha.
    pub fn to_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            image::Rgba(color_to_rgba(self.get(x, y)))
        })
    }
}

/// Render the scene to a `width` x `height` image.
///
/// Invalid dimensions or camera settings fail before any tracing. Pixels
/// that fail to trace are filled with the background color and reported
/// once in the log.
pub fn render(
    scene: &Scene,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> RenderResult<ImageBuffer> {
    let projection = Projection::new(&scene.camera, width, height)?;
    let buckets = generate_buckets(width, height, config.bucket_size);

    log::info!(
        "Rendering {}x{} ({} objects, {} lights, max depth {}, {} buckets{})",
        width,
        height,
        scene.objects().len(),
        scene.lights().len(),
        config.max_depth,
        buckets.len(),
        if config.parallel { ", parallel" } else { "" }
    );
    let start = Instant::now();

    let trace = |bucket: &Bucket| render_bucket(bucket, scene, &projection, config);
    let results: Vec<BucketResult> = if config.parallel {
        buckets.par_iter().map(trace).collect()
    } else {
        buckets.iter().map(trace).collect()
    };

    let mut image = ImageBuffer::new(width, height);
    let mut stats = TraceStats::default();
    let mut failed = 0;
    for result in &results {
        image.write_bucket(result);
        stats.merge(&result.stats);
        failed += result.failed;
    }

    if failed > 0 {
        log::warn!(
            "{} of {} pixels failed to trace and were filled with the background color",
            failed,
            pixel_count(width, height)
        );
    }

    log::info!(
        "Rendered in {:?} ({} samples, deepest bounce {})",
        start.elapsed(),
        stats.samples,
        stats.deepest
    );

    Ok(image)
}
