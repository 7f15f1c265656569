//! Triangle primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use lumen_core::{GeometryId, HitRecord};
use lumen_math::{Aabb, Normalized, Ray, Vec3};

use crate::hittable::{face_forward, Hittable};

/// A triangle belonging to one scene object.
pub struct Triangle {
    /// Vertices
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    /// Pre-computed geometric normal (unit length)
    normal: Vec3,
    /// Owning scene object
    geometry: GeometryId,
    /// Bounding box
    bbox: Aabb,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, geometry: GeometryId) -> Self {
        let normal = (v1 - v0).cross(v2 - v0).normalized();
        let bbox = Aabb::enclosing(&[v0, v1, v2]);

        Self {
            v0,
            v1,
            v2,
            normal,
            geometry,
            bbox,
        }
    }

    /// Geometric normal, counter-clockwise winding.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl Hittable for Triangle {
    /// Möller-Trumbore ray-triangle intersection algorithm.
    fn hit(&self, ray: &Ray) -> Option<HitRecord> {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let h = ray.direction.cross(edge2);
        let a = edge1.dot(h);

        // Ray is parallel to triangle
        if a.abs() < 1e-12 {
            return None;
        }

        let f = 1.0 / a;
        let s = ray.origin - self.v0;
        let u = f * s.dot(h);

        // Check if intersection is outside triangle (u parameter)
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = f * ray.direction.dot(q);

        // Check if intersection is outside triangle (v parameter)
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * edge2.dot(q);
        if !ray.t.contains(t) {
            return None;
        }

        Some(HitRecord {
            point: ray.at(t),
            normal: face_forward(ray, self.normal),
            geometry: self.geometry,
            t,
        })
    }

    fn bounding_box(&self) -> Aabb {
        self.bbox
    }
}
