//! Lumen Core - scene model for the Lumen ray tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `SceneObject`, `Shape`, `Mesh`, `CameraSettings`
//! - **Shading inputs**: `Material` and the `Light` variants
//! - **Query contract**: `SceneQuery`, the closest-hit / any-hit / material
//!   lookup interface the shading engine consumes
//! - **Scene files**: JSON loading via `load_scene`
//! - **Calculators**: closed-form illuminance and brightness at a point on a
//!   triangle, plus parsers for their whitespace-separated input files
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::{load_scene, Scene};
//!
//! let scene = load_scene("room.json")?;
//! println!("{} objects, {} lights", scene.objects.len(), scene.lights.len());
//! ```

pub mod demo;
pub mod illumination;
pub mod input;
pub mod light;
pub mod loader;
pub mod material;
pub mod mesh;
pub mod query;
pub mod scene;

pub use illumination::{brightness, illuminance, RadiantLight};
pub use input::{BrightnessInput, IlluminanceInput, InputError};
pub use light::Light;
pub use loader::{load_scene, load_scene_from_str, SceneError, SceneResult};
pub use material::Material;
pub use mesh::Mesh;
pub use query::{GeometryId, HitRecord, SceneQuery, RAY_EPSILON};
pub use scene::{CameraSettings, Scene, SceneObject, Shape};
