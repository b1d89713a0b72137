//! Lux Core - renderer-agnostic scene data.
//!
//! This crate provides:
//!
//! - **Color model**: linear RGB `Color`, the named palette, and the
//!   clamped conversion to 8-bit display channels
//! - **Scene description types**: `Camera`, `Light`, `Material`,
//!   `SceneDescription`
//! - **Scene files**: JSON loading and validation
//!
//! # Example
//!
//! ```ignore
//! use lux_core::load_scene;
//!
//! let description = load_scene("scene.json")?;
//! println!("Loaded {} objects, {} lights",
//!     description.objects.len(),
//!     description.lights.len());
//! ```

pub mod color;
pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use color::{color_to_rgba, to_display, Color, BLACK, BLUE, GREEN, RED, WHITE};
pub use loader::{load_scene, load_scene_from_str, LoadError, LoadResult};
pub use scene::{Camera, Light, Material, ObjectDescription, SceneDescription};
