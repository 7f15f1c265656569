//! Sphere primitive for ray tracing.

use lumen_core::{GeometryId, HitRecord};
use lumen_math::{Aabb, Ray, Vec3};

use crate::hittable::{face_forward, Hittable};

/// A sphere primitive.
pub struct Sphere {
    center: Vec3,
    radius: f64,
    geometry: GeometryId,
    bbox: Aabb,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f64, geometry: GeometryId) -> Self {
        let radius = radius.max(0.0);
        let rvec = Vec3::splat(radius);
        let bbox = Aabb::from_points(center - rvec, center + rvec);

        Self {
            center,
            radius,
            geometry,
            bbox,
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray) -> Option<HitRecord> {
        let oc = self.center - ray.origin;
        let a = ray.direction.length_squared();
        let h = ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !ray.t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray.t.surrounds(root) {
                return None;
            }
        }

        let point = ray.at(root);
        let outward_normal = (point - self.center) / self.radius;

        Some(HitRecord {
            point,
            normal: face_forward(ray, outward_normal),
            geometry: self.geometry,
            t: root,
        })
    }

    fn bounding_box(&self) -> Aabb {
        self.bbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_hit() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, GeometryId(0));
        let ray = Ray::from_near(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), 0.001);

        let rec = sphere.hit(&ray).expect("should hit");
        assert!((rec.t - 0.5).abs() < 1e-9); // Should hit at t=0.5
        assert!((rec.normal - Vec3::Z).length() < 1e-9);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, GeometryId(0));

        // Ray pointing away from sphere
        let ray = Ray::from_near(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0), 0.001);
        assert!(sphere.hit(&ray).is_none());
    }

    #[test]
    fn test_sphere_hit_from_inside() {
        let sphere = Sphere::new(Vec3::ZERO, 2.0, GeometryId(3));
        let ray = Ray::from_near(Vec3::ZERO, Vec3::X, 0.001);

        let rec = sphere.hit(&ray).expect("should hit far wall");
        assert!((rec.t - 2.0).abs() < 1e-9);
        // Normal faces back toward the ray origin
        assert!((rec.normal + Vec3::X).length() < 1e-9);
    }
}
