//! Recursive shading.
//!
//! Each call to [`sample`] either returns the background (no hit) or a shaded
//! color. Reflective or transparent surfaces spawn at most two child samples
//! until `max_depth` is reached; everything else, and everything at the depth
//! limit, is shaded with hard-shadowed Lambertian lighting.

use crate::Scene;
use lux_core::{Color, Material, BLACK, WHITE};
use lux_math::{MathError, MathResult, Ray, Vector, EPSILON};

/// Counters collected while tracing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceStats {
    /// Number of `sample` invocations, primary rays included
    pub samples: u64,
    /// Deepest recursion depth reached
    pub deepest: u32,
}

impl TraceStats {
    /// Fold another set of counters into this one.
    pub fn merge(&mut self, other: &TraceStats) {
        self.samples += other.samples;
        self.deepest = self.deepest.max(other.deepest);
    }
}

/// Compute the color seen along a ray.
///
/// `depth` is the number of bounces already taken. Geometry errors abort the
/// sample; total internal reflection only removes the refracted term.
pub fn sample(
    scene: &Scene,
    ray: &Ray,
    depth: u32,
    max_depth: u32,
    stats: &mut TraceStats,
) -> MathResult<Color> {
    stats.samples += 1;
    stats.deepest = stats.deepest.max(depth);

    let Some((object, hit)) = scene.nearest_hit(ray) else {
        return Ok(scene.background);
    };

    let point = ray.at(hit.distance);
    let material = object.material();

    if material.is_recursive() && depth < max_depth {
        let mut normal = hit.normal;
        let mut inside = false;

        // Leaving the object: flip the normal to face the ray
        if ray.direction.dot(normal) > 0.0 {
            normal = -normal;
            inside = true;
        }

        let fresnel = fresnel(ray.direction, normal);

        let reflection = sample(scene, &ray.reflect(point, normal)?, depth + 1, max_depth, stats)?;

        let refraction = if material.transparency > 0.0 {
            match ray.refract(point, normal, inside) {
                Ok(refracted) => sample(scene, &refracted, depth + 1, max_depth, stats)?,
                Err(MathError::TotalInternalReflection) => BLACK,
                Err(err) => return Err(err),
            }
        } else {
            BLACK
        };

        return Ok(
            (reflection * fresnel + refraction * (1.0 - fresnel) * material.transparency)
                * material.diffuse,
        );
    }

    direct_illumination(scene, point, hit.normal, material)
}

/// Lambertian lighting from every light, with binary shadowing.
fn direct_illumination(
    scene: &Scene,
    point: Vector,
    normal: Vector,
    material: &Material,
) -> MathResult<Color> {
    let mut color = BLACK;

    for light in scene.lights() {
        let shadow_ray = Ray::new(point + normal * EPSILON, light.position - point)?;

        let transmission = if scene.is_occluded(&shadow_ray) {
            BLACK
        } else {
            WHITE
        };

        let lambert = normal.dot(shadow_ray.direction).max(0.0);
        color += material.diffuse * transmission * lambert * light.emissive;
    }

    Ok(color)
}

/// View-dependent reflect/refract weighting.
///
/// A cheap Schlick-style falloff: `mix((1 + d.n)^3, 1, 0.1)`.
#[inline]
fn fresnel(direction: Vector, normal: Vector) -> f64 {
    mix((1.0 + direction.dot(normal)).powi(3), 1.0, 0.1)
}

#[inline]
fn mix(a: f64, b: f64, t: f64) -> f64 {
    b * t + a * (1.0 - t)
}
