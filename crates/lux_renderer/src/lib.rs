//! Lux Renderer - recursive CPU ray tracing.
//!
//! Casts one ray per pixel, finds the nearest intersection by brute force
//! over the object list, and shades it with hard-shadowed Lambertian
//! lighting or a Fresnel-weighted mix of reflected and refracted rays.

mod bucket;
mod camera;
mod cube;
mod object;
mod renderer;
mod scene;
mod sphere;
mod trace;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Projection;
pub use cube::Cube;
pub use object::{Hit, Object};
pub use renderer::{render, render_pixel, ImageBuffer, RenderConfig, RenderError, RenderResult};
pub use scene::Scene;
pub use sphere::Sphere;
pub use trace::{sample, TraceStats};

/// Re-export scene data and math types
pub use lux_core::{Camera, Color, Light, Material};
pub use lux_math::{Ray, Vector};
