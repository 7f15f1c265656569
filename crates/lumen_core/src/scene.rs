//! Scene description consumed by the renderer.
//!
//! A scene owns its materials, objects, lights and camera. It is built once
//! (from code or a scene file) and is only borrowed while rendering.

use lumen_math::{Aabb, Vec3};
use serde::{Deserialize, Serialize};

use crate::{Light, Material, Mesh};

/// Pinhole camera looking through a virtual screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraSettings {
    /// Eye position
    pub eye: Vec3,
    /// Point the camera looks at
    pub center: Vec3,
    /// Up hint. Must not be parallel to the view direction.
    pub up: Vec3,
    /// Distance from the eye to the virtual screen
    pub distance: f64,
    /// Virtual screen width in world units
    pub screen_width: f64,
    /// Virtual screen height in world units
    pub screen_height: f64,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            eye: Vec3::new(1.0, 2.0, 5.0),
            center: Vec3::new(1.0, 2.0, 0.0),
            up: Vec3::Y,
            distance: 8.0,
            screen_width: 15.0,
            screen_height: 15.0,
        }
    }
}

/// Geometry of a scene object.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Mesh(Mesh),
    Sphere { center: Vec3, radius: f64 },
}

impl Shape {
    /// Bounding box of the shape.
    pub fn bounds(&self) -> Aabb {
        match self {
            Shape::Mesh(mesh) => mesh.bounds,
            Shape::Sphere { center, radius } => {
                let r = Vec3::splat(*radius);
                Aabb::from_points(*center - r, *center + r)
            }
        }
    }

    /// Number of primitives the renderer will build for this shape.
    pub fn primitive_count(&self) -> usize {
        match self {
            Shape::Mesh(mesh) => mesh.triangle_count(),
            Shape::Sphere { .. } => 1,
        }
    }
}

/// A named piece of geometry with a material.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub shape: Shape,
    /// Index into `Scene::materials`
    pub material: usize,
}

/// A complete scene.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    /// Scene name (usually from filename)
    pub name: String,

    /// Materials used in the scene
    pub materials: Vec<Material>,

    /// Objects, each referencing a material by index
    pub objects: Vec<SceneObject>,

    /// Light sources
    pub lights: Vec<Light>,

    /// Camera
    pub camera: CameraSettings,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add a material to the scene and return its ID.
    pub fn add_material(&mut self, material: Material) -> usize {
        let id = self.materials.len();
        self.materials.push(material);
        id
    }

    /// Add an object to the scene and return its index.
    pub fn add_object(&mut self, name: impl Into<String>, shape: Shape, material: usize) -> usize {
        let id = self.objects.len();
        self.objects.push(SceneObject {
            name: name.into(),
            shape,
            material,
        });
        id
    }

    /// Add a light source.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Get a material by ID.
    pub fn get_material(&self, id: usize) -> Option<&Material> {
        self.materials.get(id)
    }

    /// Total primitive count across all objects.
    pub fn primitive_count(&self) -> usize {
        self.objects.iter().map(|o| o.shape.primitive_count()).sum()
    }

    /// World-space bounding box of all objects.
    pub fn world_bounds(&self) -> Aabb {
        self.objects
            .iter()
            .fold(Aabb::EMPTY, |acc, o| Aabb::surrounding(&acc, &o.shape.bounds()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_math::Color;

    #[test]
    fn test_scene_creation() {
        let mut scene = Scene::new("test");

        let mat = scene.add_material(Material::default());
        assert_eq!(mat, 0);

        let mesh = Mesh::new(vec![Vec3::ZERO, Vec3::X, Vec3::Y], vec![0, 1, 2]);
        let tri = scene.add_object("triangle", Shape::Mesh(mesh), mat);
        let ball = scene.add_object(
            "ball",
            Shape::Sphere {
                center: Vec3::new(0.0, 0.0, -3.0),
                radius: 1.0,
            },
            mat,
        );
        scene.add_light(Light::point(Vec3::Y, Color::WHITE));

        assert_eq!((tri, ball), (0, 1));
        assert_eq!(scene.primitive_count(), 2);
        assert_eq!(scene.lights.len(), 1);
        assert!(scene.get_material(0).is_some());
        assert!(scene.get_material(1).is_none());
    }

    #[test]
    fn test_world_bounds() {
        let mut scene = Scene::new("bounds");
        let mat = scene.add_material(Material::default());
        scene.add_object(
            "box",
            Shape::Mesh(Mesh::cuboid(Vec3::ZERO, Vec3::ONE)),
            mat,
        );
        scene.add_object(
            "ball",
            Shape::Sphere {
                center: Vec3::new(5.0, 0.0, 0.0),
                radius: 2.0,
            },
            mat,
        );

        let b = scene.world_bounds();
        assert_eq!(b.x.min, 0.0);
        assert_eq!(b.x.max, 7.0);
        assert_eq!(b.y.min, -2.0);
    }

    #[test]
    fn test_default_camera() {
        let cam = CameraSettings::default();
        assert_eq!(cam.eye, Vec3::new(1.0, 2.0, 5.0));
        assert_eq!(cam.center, Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(cam.distance, 8.0);
    }
}
