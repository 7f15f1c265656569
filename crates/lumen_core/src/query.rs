//! Queries the shading engine issues against the scene.
//!
//! The shading code never sees geometry directly. It asks an implementation
//! of [`SceneQuery`] for the nearest hit along a ray, whether a segment is
//! blocked, and which material belongs to a hit.

use lumen_math::{Ray, Vec3};

use crate::Material;

/// Near-plane offset for secondary rays, avoids re-hitting the surface a ray
/// starts on. Point-light shadow rays also stop this far short of the light.
pub const RAY_EPSILON: f64 = 1e-3;

/// Handle to a piece of scene geometry. Index into the scene's object list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GeometryId(pub usize);

/// Record of a ray-geometry intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Point of intersection
    pub point: Vec3,
    /// Surface normal at the intersection. Non-zero for genuine hits.
    pub normal: Vec3,
    /// Geometry that was hit
    pub geometry: GeometryId,
    /// Ray parameter (distance for unit-length directions)
    pub t: f64,
}

/// Read-only intersection service over a built scene.
///
/// Implementations must be safe to query from many threads at once.
pub trait SceneQuery: Send + Sync {
    /// Nearest intersection within `ray.t`, or `None`.
    fn closest_hit(&self, ray: &Ray) -> Option<HitRecord>;

    /// True if any geometry intersects the ray within `ray.t`.
    fn any_hit(&self, ray: &Ray) -> bool;

    /// Material owned by `geometry`.
    fn material_of(&self, geometry: GeometryId) -> &Material;
}
