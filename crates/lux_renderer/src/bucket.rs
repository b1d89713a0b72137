//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that own disjoint pixels, so they
//! can be traced independently and in parallel using rayon.

use crate::camera::Projection;
use crate::renderer::{render_pixel, RenderConfig};
use crate::{Color, Scene, TraceStats};

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy)]
pub struct Bucket {
    /// X coordinate of bucket's top-left corner
    pub x: u32,
    /// Y coordinate of bucket's top-left corner
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
    /// Index of this bucket in the render order
    pub index: usize,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self { x, y, width, height, index }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Generate buckets covering an image, sorted in spiral order from center.
///
/// A `bucket_size` of zero is treated as one.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let bucket_size = bucket_size.max(1);
    let mut buckets = Vec::new();
    let mut index = 0;

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, index));
            index += 1;
            x += bucket_size;
        }
        y += bucket_size;
    }

    sort_spiral(&mut buckets, width, height);

    // Update indices after sorting
    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = i;
    }

    buckets
}

/// Sort buckets by distance from image center.
fn sort_spiral(buckets: &mut [Bucket], width: u32, height: u32) {
    let center_x = width as f64 / 2.0;
    let center_y = height as f64 / 2.0;

    let distance = |b: &Bucket| {
        let bx = b.x as f64 + b.width as f64 / 2.0;
        let by = b.y as f64 + b.height as f64 / 2.0;
        (bx - center_x).powi(2) + (by - center_y).powi(2)
    };

    buckets.sort_by(|a, b| distance(a).total_cmp(&distance(b)));
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Pixel colors in row-major order
    pub pixels: Vec<Color>,
    /// Trace counters for every pixel in the bucket
    pub stats: TraceStats,
    /// Pixels whose trace failed and were filled with the background
    pub failed: usize,
}

/// Render a single bucket.
///
/// A pixel whose trace fails is filled with the scene background and
/// counted in [`BucketResult::failed`]; it never aborts the bucket.
pub fn render_bucket(
    bucket: &Bucket,
    scene: &Scene,
    projection: &Projection,
    config: &RenderConfig,
) -> BucketResult {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);
    let mut stats = TraceStats::default();
    let mut failed = 0;

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let x = bucket.x + local_x;
            let y = bucket.y + local_y;

            let color = match render_pixel(scene, projection, x, y, config, &mut stats) {
                Ok(color) => color,
                Err(err) => {
                    log::debug!("Pixel ({}, {}) failed: {}", x, y, err);
                    failed += 1;
                    scene.background
                }
            };
            pixels.push(color);
        }
    }

    log::debug!(
        "Bucket {} ({}x{} at {},{}) done, {} samples",
        bucket.index,
        bucket.width,
        bucket.height,
        bucket.x,
        bucket.y,
        stats.samples
    );

    BucketResult {
        bucket: *bucket,
        pixels,
        stats,
        failed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lux_core::{Camera, Light, WHITE};
    use lux_math::Vector;

    #[test]
    fn test_generate_buckets_exact_fit() {
        let buckets = generate_buckets(128, 128, 64);
        assert_eq!(buckets.len(), 4); // 2x2 grid

        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 128 * 128);
    }

    #[test]
    fn test_generate_buckets_partial_fit() {
        let buckets = generate_buckets(100, 30, 64);
        assert_eq!(buckets.len(), 2);

        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 100 * 30);
    }

    #[test]
    fn test_generate_buckets_zero_size() {
        let buckets = generate_buckets(3, 2, 0);
        assert_eq!(buckets.len(), 6);
    }

    #[test]
    fn test_buckets_cover_every_pixel_once() {
        let (width, height) = (37, 23);
        let mut covered = vec![0u8; (width * height) as usize];

        for bucket in generate_buckets(width, height, 8) {
            for y in bucket.y..bucket.y + bucket.height {
                for x in bucket.x..bucket.x + bucket.width {
                    covered[(y * width + x) as usize] += 1;
                }
            }
        }

        assert!(covered.iter().all(|&count| count == 1));
    }

    #[test]
    fn test_spiral_order() {
        let buckets = generate_buckets(192, 192, 64);
        assert_eq!(buckets.len(), 9); // 3x3 grid

        // First bucket should be the center one
        let first = &buckets[0];
        assert_eq!(first.x, 64);
        assert_eq!(first.y, 64);
        assert_eq!(first.index, 0);
    }

    #[test]
    fn test_render_bucket_substitutes_background_on_failure() {
        // The light sits exactly on the surface hit by the center pixel
        let scene = Scene::new(Camera::new(90.0), WHITE)
            .with_object(crate::Cube::new(
                Vector::new(0.0, 0.0, -5.0),
                2.0,
                lux_core::Material::matte(WHITE),
            ))
            .with_light(Light::new(Vector::new(0.0, 0.0, -4.0), WHITE));

        let projection = Projection::new(&scene.camera, 1, 1).unwrap();
        let bucket = Bucket::new(0, 0, 1, 1, 0);
        let result = render_bucket(&bucket, &scene, &projection, &RenderConfig::default());

        assert_eq!(result.failed, 1);
        assert_eq!(result.pixels, vec![WHITE]);
        assert_eq!(result.stats.samples, 1);
    }
}
