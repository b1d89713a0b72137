//! Scene file loading.
//!
//! Scene files are JSON documents matching [`SceneDescription`]:
//!
//! ```json
//! {
//!   "camera": { "field_of_view": 75.0 },
//!   "lights": [ { "position": [-20, 30, 20], "emissive": [1, 1, 1] } ],
//!   "objects": [
//!     { "type": "sphere", "center": [0, 0, -15], "radius": 2,
//!       "material": { "diffuse": [1, 0, 0], "reflectivity": 1.0 } }
//!   ],
//!   "background": [1, 1, 1]
//! }
//! ```

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::scene::{Material, ObjectDescription, SceneDescription};

/// Errors that can occur while loading a scene file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid scene: {0}")]
    Invalid(String),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load and validate a scene file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<SceneDescription> {
    let path = path.as_ref();
    log::info!("Loading scene from: {:?}", path);

    let contents = fs::read_to_string(path)?;
    load_scene_from_str(&contents)
}

/// Parse and validate a scene from a JSON string.
pub fn load_scene_from_str(json: &str) -> LoadResult<SceneDescription> {
    let description: SceneDescription = serde_json::from_str(json)?;
    validate(&description)?;

    log::info!(
        "Scene has {} objects, {} lights",
        description.objects.len(),
        description.lights.len()
    );
    Ok(description)
}

fn validate(description: &SceneDescription) -> LoadResult<()> {
    let fov = description.camera.field_of_view;
    if !(fov > 0.0 && fov < 180.0) {
        return Err(LoadError::Invalid(format!(
            "field of view must be between 0 and 180 degrees, got {fov}"
        )));
    }

    for (index, object) in description.objects.iter().enumerate() {
        match object {
            ObjectDescription::Sphere { radius, .. } if !(*radius > 0.0) => {
                return Err(LoadError::Invalid(format!(
                    "object {index}: sphere radius must be greater than zero"
                )));
            }
            ObjectDescription::Cube { size, .. } if !(*size > 0.0) => {
                return Err(LoadError::Invalid(format!(
                    "object {index}: cube size must be greater than zero"
                )));
            }
            _ => {}
        }
        check_material(index, object.material())?;
    }

    Ok(())
}

fn check_material(index: usize, material: &Material) -> LoadResult<()> {
    let factors = [
        ("transparency", material.transparency),
        ("reflectivity", material.reflectivity),
    ];
    for (name, value) in factors {
        if !(0.0..=1.0).contains(&value) {
            return Err(LoadError::Invalid(format!(
                "object {index}: {name} must be between 0.0 and 1.0, got {value}"
            )));
        }
    }
    Ok(())
}
