//! JSON scene files.
//!
//! Scene files reference materials by name; loading resolves those names
//! into indices and validates every shape before anything is rendered.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use lumen_math::Vec3;
use serde::Deserialize;
use thiserror::Error;

use crate::scene::{CameraSettings, Scene, Shape};
use crate::{Light, Material, Mesh};

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Object '{object}' references unknown material '{material}'")]
    UnknownMaterial { object: String, material: String },

    #[error("Object '{object}' has invalid shape: {reason}")]
    InvalidShape { object: String, reason: String },
}

/// Result type for loading operations.
pub type SceneResult<T> = Result<T, SceneError>;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SceneFile {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    camera: CameraSettings,
    #[serde(default)]
    materials: BTreeMap<String, Material>,
    #[serde(default)]
    lights: Vec<Light>,
    #[serde(default)]
    objects: Vec<ObjectFile>,
}

#[derive(Deserialize)]
struct ObjectFile {
    name: String,
    material: String,
    shape: ShapeFile,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ShapeFile {
    Quad { corners: [Vec3; 4] },
    Cuboid { min: Vec3, max: Vec3 },
    Mesh { positions: Vec<Vec3>, indices: Vec<u32> },
    Sphere { center: Vec3, radius: f64 },
}

impl ShapeFile {
    fn into_shape(self, object: &str) -> SceneResult<Shape> {
        let invalid = |reason: String| SceneError::InvalidShape {
            object: object.to_string(),
            reason,
        };

        match self {
            ShapeFile::Quad { corners } => Ok(Shape::Mesh(Mesh::quad(corners))),
            ShapeFile::Cuboid { min, max } => Ok(Shape::Mesh(Mesh::cuboid(min, max))),
            ShapeFile::Mesh { positions, indices } => {
                if indices.len() % 3 != 0 {
                    return Err(invalid(format!(
                        "index count {} is not a multiple of 3",
                        indices.len()
                    )));
                }
                let mesh = Mesh::new(positions, indices);
                if let Some(index) = mesh.first_invalid_index() {
                    return Err(invalid(format!(
                        "index {} out of range for {} vertices",
                        index,
                        mesh.vertex_count()
                    )));
                }
                Ok(Shape::Mesh(mesh))
            }
            ShapeFile::Sphere { center, radius } => {
                if radius > 0.0 {
                    Ok(Shape::Sphere { center, radius })
                } else {
                    Err(invalid(format!("sphere radius {} must be positive", radius)))
                }
            }
        }
    }
}

/// Load a scene from a JSON file.
///
/// The scene name defaults to the file stem.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<Scene> {
    let path = path.as_ref();
    log::info!("Loading scene: {}", path.display());

    let source = std::fs::read_to_string(path)?;
    let mut scene = load_scene_from_str(&source)?;

    if scene.name.is_empty() {
        if let Some(stem) = path.file_stem() {
            scene.name = stem.to_string_lossy().into_owned();
        }
    }
    Ok(scene)
}

/// Parse a scene from JSON text.
pub fn load_scene_from_str(source: &str) -> SceneResult<Scene> {
    let file: SceneFile = serde_json::from_str(source)?;

    let mut scene = Scene::new(file.name.unwrap_or_default());
    scene.camera = file.camera;
    scene.lights = file.lights;

    let mut material_ids = HashMap::new();
    for (name, material) in file.materials {
        let id = scene.add_material(material);
        material_ids.insert(name, id);
    }

    for object in file.objects {
        let material = *material_ids.get(&object.material).ok_or_else(|| {
            SceneError::UnknownMaterial {
                object: object.name.clone(),
                material: object.material.clone(),
            }
        })?;
        let shape = object.shape.into_shape(&object.name)?;
        scene.add_object(object.name, shape, material);
    }

    log::debug!(
        "Parsed scene '{}': {} objects, {} primitives, {} materials, {} lights",
        scene.name,
        scene.objects.len(),
        scene.primitive_count(),
        scene.materials.len(),
        scene.lights.len()
    );

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_math::Color;

    const ROOM: &str = r#"{
        "name": "room",
        "camera": {
            "eye": [0, 1, 4], "center": [0, 1, 0], "up": [0, 1, 0],
            "distance": 2, "screen_width": 4, "screen_height": 3
        },
        "materials": {
            "floor": { "color": [1, 1, 0], "diffuse": 0.7, "specular": 0.3, "exponent": 10, "reflectivity": 0.1 },
            "chrome": { "color": [0, 0, 0], "diffuse": 0, "specular": 0, "exponent": 1, "reflectivity": 1 }
        },
        "lights": [
            { "type": "directional", "direction": [-1, -1, -1], "intensity": [200, 200, 200] }
        ],
        "objects": [
            { "name": "floor", "material": "floor",
              "shape": { "type": "quad", "corners": [[-5, 0, -5], [5, 0, -5], [5, 0, 5], [-5, 0, 5]] } },
            { "name": "box", "material": "floor",
              "shape": { "type": "cuboid", "min": [0, 0, 0], "max": [1, 1, 1] } },
            { "name": "tri", "material": "chrome",
              "shape": { "type": "mesh", "positions": [[0, 0, 0], [1, 0, 0], [0, 1, 0]], "indices": [0, 1, 2] } },
            { "name": "ball", "material": "chrome",
              "shape": { "type": "sphere", "center": [0, 1, 0], "radius": 0.5 } }
        ]
    }"#;

    #[test]
    fn test_load_scene_from_str() {
        let scene = load_scene_from_str(ROOM).unwrap();

        assert_eq!(scene.name, "room");
        assert_eq!(scene.objects.len(), 4);
        assert_eq!(scene.primitive_count(), 2 + 12 + 1 + 1);
        assert_eq!(scene.lights.len(), 1);
        assert_eq!(scene.camera.screen_height, 3.0);

        let floor = &scene.materials[scene.objects[0].material];
        assert_eq!(floor.color, Color::new(1.0, 1.0, 0.0));
        let chrome = &scene.materials[scene.objects[3].material];
        assert_eq!(chrome.reflectivity, 1.0);
        assert!(matches!(scene.objects[3].shape, Shape::Sphere { radius, .. } if radius == 0.5));
    }

    #[test]
    fn test_defaults_for_missing_sections() {
        let scene = load_scene_from_str("{}").unwrap();
        assert!(scene.objects.is_empty());
        assert!(scene.lights.is_empty());
        assert_eq!(scene.camera, CameraSettings::default());
    }

    #[test]
    fn test_unknown_material() {
        let json = r#"{ "objects": [ { "name": "ball", "material": "gold",
            "shape": { "type": "sphere", "center": [0, 0, 0], "radius": 1 } } ] }"#;
        let err = load_scene_from_str(json).unwrap_err();
        assert!(matches!(err, SceneError::UnknownMaterial { ref material, .. } if material == "gold"));
    }

    #[test]
    fn test_invalid_shapes() {
        let bad_count = r#"{ "materials": { "m": { "color": [1,1,1], "diffuse": 1, "specular": 0, "exponent": 1 } },
            "objects": [ { "name": "t", "material": "m",
            "shape": { "type": "mesh", "positions": [[0,0,0],[1,0,0],[0,1,0]], "indices": [0, 1] } } ] }"#;
        assert!(matches!(
            load_scene_from_str(bad_count),
            Err(SceneError::InvalidShape { .. })
        ));

        let bad_index = bad_count.replace("[0, 1]", "[0, 1, 3]");
        let err = load_scene_from_str(&bad_index).unwrap_err();
        assert!(err.to_string().contains("index 3 out of range"));

        let bad_radius = r#"{ "materials": { "m": { "color": [1,1,1], "diffuse": 1, "specular": 0, "exponent": 1 } },
            "objects": [ { "name": "s", "material": "m",
            "shape": { "type": "sphere", "center": [0,0,0], "radius": 0 } } ] }"#;
        assert!(matches!(
            load_scene_from_str(bad_radius),
            Err(SceneError::InvalidShape { .. })
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(load_scene_from_str("{ nope"), Err(SceneError::Json(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_scene("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SceneError::Io(_)));
    }
}
