//! The renderable scene: camera, lights, objects and background.

use crate::object::{Hit, Object};
use crate::{Cube, Sphere};
use lux_core::{Camera, Color, Light, ObjectDescription, SceneDescription};
use lux_math::Ray;

/// A scene ready to be traced.
///
/// Owns all of its lights and objects. It is built once and only read while
/// rendering, so it can be shared freely across render threads.
pub struct Scene {
    pub camera: Camera,
    pub background: Color,
    lights: Vec<Light>,
    objects: Vec<Box<dyn Object>>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(camera: Camera, background: Color) -> Self {
        Self {
            camera,
            background,
            lights: Vec::new(),
            objects: Vec::new(),
        }
    }

    /// Build a scene from a loaded description.
    pub fn from_description(description: &SceneDescription) -> Self {
        let mut scene = Self::new(description.camera, description.background);

        for light in &description.lights {
            scene.add_light(*light);
        }

        for object in &description.objects {
            match object {
                ObjectDescription::Sphere {
                    center,
                    radius,
                    material,
                } => scene.add_object(Box::new(Sphere::new(*center, *radius, *material))),
                ObjectDescription::Cube {
                    center,
                    size,
                    material,
                } => scene.add_object(Box::new(Cube::new(*center, *size, *material))),
            }
        }

        scene
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn add_object(&mut self, object: Box<dyn Object>) {
        self.objects.push(object);
    }

    /// Builder form of [`Scene::add_light`].
    pub fn with_light(mut self, light: Light) -> Self {
        self.add_light(light);
        self
    }

    /// Builder form of [`Scene::add_object`].
    pub fn with_object<O: Object + 'static>(mut self, object: O) -> Self {
        self.add_object(Box::new(object));
        self
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn objects(&self) -> &[Box<dyn Object>] {
        &self.objects
    }

    /// Find the object closest along the ray.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<(&dyn Object, Hit)> {
        let mut nearest: Option<(&dyn Object, Hit)> = None;

        for object in &self.objects {
            if let Some(hit) = object.intersects(ray) {
                let closer = nearest.map_or(true, |(_, best)| hit.distance < best.distance);
                if closer {
                    nearest = Some((object.as_ref(), hit));
                }
            }
        }

        nearest
    }

    /// True if any object intersects the ray, at any distance.
    pub fn is_occluded(&self, ray: &Ray) -> bool {
        self.objects.iter().any(|object| object.intersects(ray).is_some())
    }
}
