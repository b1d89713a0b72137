// Re-export glam for convenience
pub use glam::*;

use thiserror::Error;

// Lux math types
mod aabb;
mod interval;
mod ray;
pub use aabb::{Aabb, SlabHit};
pub use interval::Interval;
pub use ray::Ray;

/// 3-component f64 vector used for all geometry and shading math.
pub type Vector = DVec3;

/// Bias applied at every secondary ray spawn point to avoid self-intersection.
pub const EPSILON: f64 = 1e-9;

/// Index of refraction shared by every transparent material.
pub const IOR: f64 = 1.1;

/// Maximum number of reflection/refraction bounces per primary ray.
pub const MAX_TRACE_DEPTH: u32 = 3;

/// Errors raised by vector and ray math.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("cannot normalize a zero-length or non-finite vector")]
    DegenerateVector,

    /// Refraction is undefined past the critical angle. Callers treat this
    /// as "no refracted contribution" rather than a failure.
    #[error("total internal reflection, no refracted ray exists")]
    TotalInternalReflection,
}

/// Result type for math operations.
pub type MathResult<T> = Result<T, MathError>;

/// Checked vector operations.
pub trait VectorExt: Sized {
    /// Scale to unit length, failing on zero-length input instead of
    /// producing NaN components.
    fn unit(self) -> MathResult<Self>;
}

impl VectorExt for Vector {
    #[inline]
    fn unit(self) -> MathResult<Self> {
        self.try_normalize().ok_or(MathError::DegenerateVector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_creation() {
        let v = Vector::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vector_operations() {
        let a = Vector::new(1.0, 2.0, 3.0);
        let b = Vector::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vector::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector::splat(3.0));
        assert_eq!(a * b, Vector::new(4.0, 10.0, 18.0));
        assert_eq!(b / a, Vector::new(4.0, 2.5, 2.0));
        assert_eq!(a * 2.0, Vector::new(2.0, 4.0, 6.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Vector::X.cross(Vector::Y), Vector::Z);
        assert_eq!(Vector::new(-1.0, 2.0, -3.0).abs(), a);
        assert_eq!(Vector::new(2.0, 3.0, 6.0).length(), 7.0);
        assert_eq!(Vector::new(2.0, 3.0, 6.0).length_squared(), 49.0);
    }

    #[test]
    fn test_add_negation_is_zero() {
        for v in [
            Vector::new(1.0, -2.0, 3.5),
            Vector::new(1e9, 1e-9, -7.25),
            Vector::ZERO,
        ] {
            assert_eq!(v + (-v), Vector::ZERO);
        }
    }

    #[test]
    fn test_unit_length() {
        for v in [
            Vector::new(3.0, 4.0, 0.0),
            Vector::new(-0.001, 0.002, 5000.0),
            Vector::new(1.0, 1.0, 1.0),
        ] {
            let n = v.unit().unwrap();
            assert!((n.length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_unit_of_zero_is_degenerate() {
        assert_eq!(Vector::ZERO.unit(), Err(MathError::DegenerateVector));
        assert_eq!(
            Vector::new(f64::NAN, 0.0, 1.0).unit(),
            Err(MathError::DegenerateVector)
        );
    }
}
