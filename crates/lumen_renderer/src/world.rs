//! Render-time view of a scene: primitives in a BVH plus per-object materials.

use lumen_core::{GeometryId, HitRecord, Material, Scene, SceneQuery, Shape};
use lumen_math::Ray;

use crate::{BvhNode, Hittable, Sphere, Triangle};

/// Intersection engine built from a [`Scene`].
///
/// Every primitive carries the index of the scene object it came from, so a
/// hit maps straight back to that object's material.
pub struct World {
    bvh: BvhNode,
    /// Material per scene object, indexed by `GeometryId`
    materials: Vec<Material>,
    /// Returned for ids that do not name an object
    fallback: Material,
}

impl World {
    /// Build the acceleration structure for every object in `scene`.
    pub fn from_scene(scene: &Scene) -> Self {
        let mut primitives: Vec<Box<dyn Hittable>> = Vec::with_capacity(scene.primitive_count());
        let mut materials = Vec::with_capacity(scene.objects.len());

        for (index, object) in scene.objects.iter().enumerate() {
            let id = GeometryId(index);

            match &object.shape {
                Shape::Mesh(mesh) => {
                    for [v0, v1, v2] in mesh.triangles() {
                        primitives.push(Box::new(Triangle::new(v0, v1, v2, id)));
                    }
                }
                Shape::Sphere { center, radius } => {
                    primitives.push(Box::new(Sphere::new(*center, *radius, id)));
                }
            }

            let material = match scene.get_material(object.material) {
                Some(material) => material.clone(),
                None => {
                    log::warn!(
                        "Object '{}' references missing material {}, using default",
                        object.name,
                        object.material
                    );
                    Material::default()
                }
            };
            materials.push(material);
        }

        log::debug!(
            "Building BVH over {} primitives from {} objects",
            primitives.len(),
            scene.objects.len()
        );

        Self {
            bvh: BvhNode::new(primitives),
            materials,
            fallback: Material::default(),
        }
    }

    /// Number of primitives in the acceleration structure.
    pub fn primitive_count(&self) -> usize {
        self.bvh.len()
    }
}

impl SceneQuery for World {
    fn closest_hit(&self, ray: &Ray) -> Option<HitRecord> {
        self.bvh.hit(ray)
    }

    fn any_hit(&self, ray: &Ray) -> bool {
        self.bvh.occludes(ray)
    }

    fn material_of(&self, geometry: GeometryId) -> &Material {
        self.materials.get(geometry.0).unwrap_or(&self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::Mesh;
    use lumen_math::{Color, Vec3};

    fn two_object_scene() -> Scene {
        let mut scene = Scene::new("world");
        let red = scene.add_material(Material::new(Color::new(1.0, 0.0, 0.0), 1.0, 0.0, 1.0));
        let blue = scene.add_material(Material::new(Color::new(0.0, 0.0, 1.0), 1.0, 0.0, 1.0));

        scene.add_object(
            "wall",
            Shape::Mesh(Mesh::quad([
                Vec3::new(-5.0, -5.0, -10.0),
                Vec3::new(5.0, -5.0, -10.0),
                Vec3::new(5.0, 5.0, -10.0),
                Vec3::new(-5.0, 5.0, -10.0),
            ])),
            red,
        );
        scene.add_object(
            "ball",
            Shape::Sphere {
                center: Vec3::new(0.0, 0.0, -5.0),
                radius: 1.0,
            },
            blue,
        );
        scene
    }

    #[test]
    fn test_world_from_scene() {
        let world = World::from_scene(&two_object_scene());
        assert_eq!(world.primitive_count(), 3);
    }

    #[test]
    fn test_closest_hit_maps_to_material() {
        let world = World::from_scene(&two_object_scene());

        let ray = Ray::from_near(Vec3::ZERO, -Vec3::Z, 0.001);
        let rec = world.closest_hit(&ray).expect("should hit the ball");
        assert_eq!(rec.geometry, GeometryId(1));
        assert!((rec.t - 4.0).abs() < 1e-9);
        assert_eq!(world.material_of(rec.geometry).color, Color::new(0.0, 0.0, 1.0));

        // Off to the side only the wall is in the way
        let ray = Ray::from_near(Vec3::new(3.0, 0.0, 0.0), -Vec3::Z, 0.001);
        let rec = world.closest_hit(&ray).expect("should hit the wall");
        assert_eq!(rec.geometry, GeometryId(0));
        assert_eq!(world.material_of(rec.geometry).color, Color::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_any_hit_segment() {
        let world = World::from_scene(&two_object_scene());

        let short = Ray::from_near(Vec3::new(3.0, 0.0, 0.0), -Vec3::Z, 0.001).clipped(9.0);
        assert!(!world.any_hit(&short));
        assert!(world.any_hit(&short.clipped(11.0)));
    }

    #[test]
    fn test_missing_material_falls_back() {
        let mut scene = Scene::new("broken");
        scene.add_object(
            "orphan",
            Shape::Sphere {
                center: Vec3::ZERO,
                radius: 1.0,
            },
            7,
        );

        let world = World::from_scene(&scene);
        assert_eq!(*world.material_of(GeometryId(0)), Material::default());
        assert_eq!(*world.material_of(GeometryId(42)), Material::default());
    }
}
