use crate::{Interval, Ray, Vector};

/// Axis-Aligned Bounding Box, used directly as the geometry of box primitives.
///
/// An AABB is defined by three intervals (one per axis) that bound a 3D volume.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

/// Where a ray crosses the boundary of an [`Aabb`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SlabHit {
    /// Distance along the ray
    pub distance: f64,
    /// Outward normal of the face that was crossed
    pub normal: Vector,
}

impl Aabb {
    /// Create a new AABB from three intervals.
    pub fn new(x: Interval, y: Interval, z: Interval) -> Self {
        let mut aabb = Self { x, y, z };
        aabb.pad_to_minimums();
        aabb
    }

    /// Create an AABB from two corner points.
    pub fn from_points(a: Vector, b: Vector) -> Self {
        Self::new(
            Interval::new(a.x.min(b.x), a.x.max(b.x)),
            Interval::new(a.y.min(b.y), a.y.max(b.y)),
            Interval::new(a.z.min(b.z), a.z.max(b.z)),
        )
    }

    /// Get the interval for a specific axis (0=X, 1=Y, 2=Z).
    pub fn axis_interval(&self, n: usize) -> Interval {
        match n {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    /// Intersect a ray with the box using the slab method.
    ///
    /// Reports the nearest entering face whose distance lies inside `ray_t`.
    /// When the ray starts inside the box the entering distance falls out of
    /// range and the exit face is reported instead.
    pub fn intersect(&self, r: &Ray, ray_t: Interval) -> Option<SlabHit> {
        let mut t_enter = f64::NEG_INFINITY;
        let mut t_exit = f64::INFINITY;
        let mut enter_axis = 0;
        let mut exit_axis = 0;

        for axis in 0..3 {
            let slab = self.axis_interval(axis);
            let orig = r.origin[axis];
            let adinv = 1.0 / r.direction[axis];

            let mut t0 = (slab.min - orig) * adinv;
            let mut t1 = (slab.max - orig) * adinv;
            if adinv < 0.0 {
                std::mem::swap(&mut t0, &mut t1);
            }

            // Parallel to this slab and outside it
            if t0.is_nan() || t1.is_nan() {
                return None;
            }

            if t0 > t_enter {
                t_enter = t0;
                enter_axis = axis;
            }
            if t1 < t_exit {
                t_exit = t1;
                exit_axis = axis;
            }
            if t_exit <= t_enter {
                return None;
            }
        }

        let face_normal = |axis: usize, sign: f64| {
            let mut n = Vector::ZERO;
            n[axis] = sign;
            n
        };

        if ray_t.surrounds(t_enter) {
            let sign = -r.direction[enter_axis].signum();
            Some(SlabHit {
                distance: t_enter,
                normal: face_normal(enter_axis, sign),
            })
        } else if ray_t.surrounds(t_exit) {
            let sign = r.direction[exit_axis].signum();
            Some(SlabHit {
                distance: t_exit,
                normal: face_normal(exit_axis, sign),
            })
        } else {
            None
        }
    }

    /// Pad intervals to avoid zero-width AABBs (degenerate cases).
    fn pad_to_minimums(&mut self) {
        let delta = 0.0001;
        if self.x.size() < delta {
            self.x = self.x.expand(delta);
        }
        if self.y.size() < delta {
            self.y = self.y.expand(delta);
        }
        if self.z.size() < delta {
            self.z = self.z.expand(delta);
        }
    }

    /// Returns the center point of the bounding box.
    pub fn centroid(&self) -> Vector {
        Vector::new(
            (self.x.min + self.x.max) * 0.5,
            (self.y.min + self.y.max) * 0.5,
            (self.z.min + self.z.max) * 0.5,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Aabb {
        Aabb::from_points(Vector::splat(-1.0), Vector::splat(1.0))
    }

    #[test]
    fn test_aabb_from_points() {
        let aabb = Aabb::from_points(Vector::new(10.0, 0.0, 10.0), Vector::new(0.0, 10.0, 0.0));

        assert_eq!(aabb.x, Interval::new(0.0, 10.0));
        assert_eq!(aabb.y, Interval::new(0.0, 10.0));
        assert_eq!(aabb.z, Interval::new(0.0, 10.0));
    }

    #[test]
    fn test_aabb_flat_box_is_padded() {
        let aabb = Aabb::from_points(Vector::ZERO, Vector::new(1.0, 0.0, 1.0));
        assert!(aabb.y.size() > 0.0);
    }

    #[test]
    fn test_aabb_centroid() {
        let aabb = Aabb::from_points(Vector::ZERO, Vector::new(10.0, 10.0, 10.0));
        assert_eq!(aabb.centroid(), Vector::splat(5.0));
    }

    #[test]
    fn test_aabb_hit_entering_face() {
        let ray = Ray::new(Vector::new(0.0, 0.0, -5.0), Vector::Z).unwrap();
        let hit = unit_box().intersect(&ray, Interval::HIT).unwrap();

        assert!((hit.distance - 4.0).abs() < 1e-12);
        assert_eq!(hit.normal, -Vector::Z);
    }

    #[test]
    fn test_aabb_hit_from_inside_reports_exit_face() {
        let ray = Ray::new(Vector::ZERO, Vector::X).unwrap();
        let hit = unit_box().intersect(&ray, Interval::HIT).unwrap();

        assert!((hit.distance - 1.0).abs() < 1e-12);
        assert_eq!(hit.normal, Vector::X);
    }

    #[test]
    fn test_aabb_miss() {
        // Ray pointing away
        let ray = Ray::new(Vector::new(0.0, 0.0, -5.0), -Vector::Z).unwrap();
        assert!(unit_box().intersect(&ray, Interval::HIT).is_none());

        // Ray passing beside the box, parallel to two slabs
        let ray = Ray::new(Vector::new(10.0, 0.0, 0.0), Vector::Z).unwrap();
        assert!(unit_box().intersect(&ray, Interval::HIT).is_none());
    }

    #[test]
    fn test_aabb_diagonal_hit() {
        let ray = Ray::new(Vector::new(-5.0, -5.0, 0.0), Vector::new(1.0, 1.0, 0.0)).unwrap();
        let hit = unit_box().intersect(&ray, Interval::HIT).unwrap();

        let expected = (4.0f64 * 4.0 * 2.0).sqrt();
        assert!((hit.distance - expected).abs() < 1e-9);
    }
}
