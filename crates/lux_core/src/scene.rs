//! Scene description types for Lux.
//!
//! These are plain values built once by whoever configures a render (the
//! CLI, a scene file, a test) and read-only afterwards. The renderer turns a
//! [`SceneDescription`] into its own intersectable scene.

use lux_math::Vector;
use serde::{Deserialize, Serialize};

use crate::color::{Color, WHITE};

/// Surface properties of one object.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Diffuse color of the surface (RGB, 0-1)
    pub diffuse: Color,

    /// Fraction of light transmitted through the surface (0-1)
    #[serde(default)]
    pub transparency: f64,

    /// Fraction of light mirrored off the surface (0-1)
    #[serde(default)]
    pub reflectivity: f64,
}

impl Material {
    /// Create a material, clamping both factors into [0, 1].
    pub fn new(diffuse: Color, transparency: f64, reflectivity: f64) -> Self {
        Self {
            diffuse,
            transparency: transparency.clamp(0.0, 1.0),
            reflectivity: reflectivity.clamp(0.0, 1.0),
        }
    }

    /// An opaque, non-reflective material lit only by direct illumination.
    pub fn matte(diffuse: Color) -> Self {
        Self::new(diffuse, 0.0, 0.0)
    }

    /// True if shading this surface spawns reflected/refracted rays.
    #[inline]
    pub fn is_recursive(&self) -> bool {
        self.transparency > 0.0 || self.reflectivity > 0.0
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::matte(Color::splat(0.5)) // Grey default
    }
}

/// A constant-intensity point light.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: Vector,
    pub emissive: Color,
}

impl Light {
    pub fn new(position: Vector, emissive: Color) -> Self {
        Self { position, emissive }
    }
}

/// Pinhole camera.
///
/// Without `look_at` the camera faces world -Z with +Y up. Setting
/// `look_at` rotates the image plane to face that point, keeping +Y as the
/// up reference.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    #[serde(default)]
    pub position: Vector,

    /// Vertical field of view, in degrees; the horizontal extent scales with
    /// the image aspect ratio
    pub field_of_view: f64,

    #[serde(default)]
    pub look_at: Option<Vector>,
}

impl Camera {
    /// A camera at the origin facing -Z.
    pub fn new(field_of_view: f64) -> Self {
        Self {
            position: Vector::ZERO,
            field_of_view,
            look_at: None,
        }
    }

    pub fn with_position(mut self, position: Vector) -> Self {
        self.position = position;
        self
    }

    pub fn with_look_at(mut self, target: Vector) -> Self {
        self.look_at = Some(target);
        self
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(75.0)
    }
}

/// One geometric object in a scene file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ObjectDescription {
    Sphere {
        center: Vector,
        radius: f64,
        #[serde(default)]
        material: Material,
    },
    /// Axis-aligned cube with edge length `size`
    Cube {
        center: Vector,
        size: f64,
        #[serde(default)]
        material: Material,
    },
}

impl ObjectDescription {
    pub fn material(&self) -> &Material {
        match self {
            ObjectDescription::Sphere { material, .. } => material,
            ObjectDescription::Cube { material, .. } => material,
        }
    }
}

/// Everything needed to render an image, minus the output size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub camera: Camera,

    #[serde(default)]
    pub lights: Vec<Light>,

    #[serde(default)]
    pub objects: Vec<ObjectDescription>,

    #[serde(default = "default_background")]
    pub background: Color,
}

fn default_background() -> Color {
    WHITE
}

impl Default for SceneDescription {
    fn default() -> Self {
        Self {
            camera: Camera::default(),
            lights: Vec::new(),
            objects: Vec::new(),
            background: default_background(),
        }
    }
}
