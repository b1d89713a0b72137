//! Axis-aligned cube primitive.

use crate::object::{Hit, Object};
use lux_core::Material;
use lux_math::{Aabb, Interval, Ray, Vector};

/// An axis-aligned cube, intersected with a slab test.
#[derive(Debug, Clone)]
pub struct Cube {
    bbox: Aabb,
    material: Material,
}

impl Cube {
    /// Create a cube centered at `center` with edge length `size`.
    pub fn new(center: Vector, size: f64, material: Material) -> Self {
        let half = Vector::splat(size.max(0.0) / 2.0);
        Self {
            bbox: Aabb::from_points(center - half, center + half),
            material,
        }
    }
}

impl Object for Cube {
    fn intersects(&self, ray: &Ray) -> Option<Hit> {
        self.bbox.intersect(ray, Interval::HIT).map(|slab| Hit {
            distance: slab.distance,
            normal: slab.normal,
        })
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn position(&self) -> Vector {
        self.bbox.centroid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lux_core::GREEN;

    #[test]
    fn test_cube_hit_front_face() {
        let cube = Cube::new(Vector::new(0.0, 0.0, -10.0), 4.0, Material::matte(GREEN));
        let ray = Ray::new(Vector::ZERO, -Vector::Z).unwrap();

        let hit = cube.intersects(&ray).unwrap();
        assert!((hit.distance - 8.0).abs() < 1e-12);
        assert_eq!(hit.normal, Vector::Z);
    }

    #[test]
    fn test_cube_hit_side_face() {
        let cube = Cube::new(Vector::new(5.0, 0.0, 0.0), 2.0, Material::matte(GREEN));
        let ray = Ray::new(Vector::new(0.0, 0.5, 0.0), Vector::X).unwrap();

        let hit = cube.intersects(&ray).unwrap();
        assert!((hit.distance - 4.0).abs() < 1e-12);
        assert_eq!(hit.normal, -Vector::X);
    }

    #[test]
    fn test_cube_miss() {
        let cube = Cube::new(Vector::new(0.0, 0.0, -10.0), 4.0, Material::matte(GREEN));
        let ray = Ray::new(Vector::ZERO, Vector::Y).unwrap();
        assert!(cube.intersects(&ray).is_none());
    }

    #[test]
    fn test_cube_position_is_center() {
        let cube = Cube::new(Vector::new(1.0, 2.0, 3.0), 2.0, Material::default());
        assert_eq!(cube.position(), Vector::new(1.0, 2.0, 3.0));
    }
}
