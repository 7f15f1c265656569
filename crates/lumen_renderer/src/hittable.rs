//! Hittable trait for ray-primitive intersection.

use lumen_core::HitRecord;
use lumen_math::{Aabb, Ray, Vec3};

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Nearest intersection within `ray.t`, if any.
    fn hit(&self, ray: &Ray) -> Option<HitRecord>;

    /// True if the ray hits this object anywhere within `ray.t`.
    ///
    /// Shadow rays only need a yes/no answer, so aggregates override this to
    /// stop at the first hit.
    fn occludes(&self, ray: &Ray) -> bool {
        self.hit(ray).is_some()
    }

    /// Get the axis-aligned bounding box of this object.
    fn bounding_box(&self) -> Aabb;
}

/// Flip `outward_normal` so it faces against the ray.
#[inline]
pub(crate) fn face_forward(ray: &Ray, outward_normal: Vec3) -> Vec3 {
    if ray.direction.dot(outward_normal) < 0.0 {
        outward_normal
    } else {
        -outward_normal
    }
}
