//! The capability shared by every intersectable shape.

use lux_core::Material;
use lux_math::{Ray, Vector};

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Distance along the ray, always beyond the self-intersection bias
    pub distance: f64,
    /// Unit outward surface normal at the hit point
    pub normal: Vector,
}

/// Trait for objects that can be placed in a scene and hit by rays.
///
/// New shapes are added by implementing this trait.
pub trait Object: Send + Sync {
    /// Test if a ray hits this object.
    ///
    /// Returns the nearest hit further than `EPSILON` along the ray. A ray
    /// starting inside the object reports the far side.
    fn intersects(&self, ray: &Ray) -> Option<Hit>;

    /// Surface material of the object.
    fn material(&self) -> &Material;

    /// Center of the object.
    fn position(&self) -> Vector;
}
