//! Sphere primitive for ray tracing.

use crate::object::{Hit, Object};
use lux_core::Material;
use lux_math::{Interval, Ray, Vector};

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vector,
    radius: f64,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vector, radius: f64, material: Material) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Object for Sphere {
    fn intersects(&self, ray: &Ray) -> Option<Hit> {
        // A point sphere has no surface normal
        if self.radius <= 0.0 {
            return None;
        }

        // Direction is unit length, so the quadratic's `a` term is 1
        let to = ray.origin - self.center;
        let b = to.dot(ray.direction);
        let c = to.length_squared() - self.radius * self.radius;

        let discriminant = b * b - c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Nearest root past the bias; the far root covers rays starting inside
        let mut root = -b - sqrtd;
        if !Interval::HIT.surrounds(root) {
            root = -b + sqrtd;
            if !Interval::HIT.surrounds(root) {
                return None;
            }
        }

        let point = ray.at(root);
        Some(Hit {
            distance: root,
            normal: (point - self.center) / self.radius,
        })
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn position(&self) -> Vector {
        self.center
    }
}
