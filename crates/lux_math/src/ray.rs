use crate::{MathError, MathResult, Vector, VectorExt, EPSILON, IOR};

/// A half-line in 3D space with an origin and a unit-length direction.
///
/// Every constructor normalizes the direction, so rays spawned from other
/// rays (reflection, refraction, shadow rays) keep the unit-length invariant.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vector,
    pub direction: Vector,
}

impl Ray {
    /// Create a new ray, normalizing `direction`.
    ///
    /// Fails with [`MathError::DegenerateVector`] for a zero-length direction.
    pub fn new(origin: Vector, direction: Vector) -> MathResult<Self> {
        Ok(Self {
            origin,
            direction: direction.unit()?,
        })
    }

    /// Get the point along the ray at distance t.
    ///
    /// Returns: origin + direction * t
    #[inline]
    pub fn at(&self, t: f64) -> Vector {
        self.origin + self.direction * t
    }

    /// Mirror this ray about `normal` at `point`.
    ///
    /// The new origin is pushed off the surface along the normal by [`EPSILON`].
    pub fn reflect(&self, point: Vector, normal: Vector) -> MathResult<Ray> {
        let origin = point + normal * EPSILON;
        let direction = self.direction - normal * 2.0 * self.direction.dot(normal);

        Ray::new(origin, direction)
    }

    /// Bend this ray through the surface at `point` using Snell's law.
    ///
    /// `normal` must face the incoming ray. `inside` selects the ratio of
    /// indices: `IOR` when leaving the material, `1 / IOR` when entering it.
    /// Past the critical angle this returns
    /// [`MathError::TotalInternalReflection`].
    pub fn refract(&self, point: Vector, normal: Vector, inside: bool) -> MathResult<Ray> {
        let eta = if inside { IOR } else { 1.0 / IOR };

        let cosi = -normal.dot(self.direction);
        let k = 1.0 - eta * eta * (1.0 - cosi * cosi);
        if k < 0.0 {
            return Err(MathError::TotalInternalReflection);
        }

        let origin = point - normal * EPSILON;
        let direction = self.direction * eta + normal * (eta * cosi - k.sqrt());

        Ray::new(origin, direction)
    }
}
