//! Bounding Volume Hierarchy (BVH) acceleration structure.
//!
//! Uses a binary tree structure for efficient ray-scene intersection testing.

use lumen_core::HitRecord;
use lumen_math::{Aabb, Ray};

use crate::Hittable;

/// Maximum primitives per leaf node before splitting.
const LEAF_MAX_SIZE: usize = 4;

/// BVH node - either a branch with two children or a leaf with primitives.
pub enum BvhNode {
    /// Internal node with two children.
    Branch {
        left: Box<BvhNode>,
        right: Box<BvhNode>,
        bbox: Aabb,
    },
    /// Leaf node with a small number of primitives.
    Leaf {
        objects: Vec<Box<dyn Hittable>>,
        bbox: Aabb,
    },
    /// Empty node (scene without geometry).
    Empty,
}

impl BvhNode {
    /// Create a BVH from a list of hittable objects.
    pub fn new(objects: Vec<Box<dyn Hittable>>) -> Self {
        if objects.is_empty() {
            return BvhNode::Empty;
        }
        Self::build(objects)
    }

    /// Recursive BVH construction.
    ///
    /// Simple median-split approach: sort objects by centroid on longest axis,
    /// split in half, recurse.
    fn build(mut objects: Vec<Box<dyn Hittable>>) -> Self {
        let n = objects.len();

        // Compute bounding box of all objects
        let bounds = objects
            .iter()
            .fold(Aabb::EMPTY, |acc, o| Aabb::surrounding(&acc, &o.bounding_box()));

        // Create leaf for small sets
        if n <= LEAF_MAX_SIZE {
            return BvhNode::Leaf {
                objects,
                bbox: bounds,
            };
        }

        // Compute centroid bounds to choose split axis
        let centroid_bounds = objects.iter().fold(Aabb::EMPTY, |acc, obj| {
            let c = obj.bounding_box().centroid();
            Aabb::surrounding(&acc, &Aabb::from_points(c, c))
        });

        // Choose split axis based on centroid spread
        let axis = centroid_bounds.longest_axis();

        // Sort objects by centroid on chosen axis
        objects.sort_unstable_by(|a, b| {
            let a_val = a.bounding_box().centroid()[axis];
            let b_val = b.bounding_box().centroid()[axis];
            a_val
                .partial_cmp(&b_val)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        // Split at midpoint
        let mid = n / 2;
        let right_objects = objects.split_off(mid);
        let left_objects = objects;

        BvhNode::Branch {
            left: Box::new(Self::build(left_objects)),
            right: Box::new(Self::build(right_objects)),
            bbox: bounds,
        }
    }

    /// Number of primitives stored in the tree.
    pub fn len(&self) -> usize {
        match self {
            BvhNode::Empty => 0,
            BvhNode::Leaf { objects, .. } => objects.len(),
            BvhNode::Branch { left, right, .. } => left.len() + right.len(),
        }
    }

    /// True if the tree holds no primitives.
    pub fn is_empty(&self) -> bool {
        matches!(self, BvhNode::Empty)
    }
}

impl Hittable for BvhNode {
    fn hit(&self, ray: &Ray) -> Option<HitRecord> {
        match self {
            BvhNode::Empty => None,

            BvhNode::Leaf { objects, bbox } => {
                if !bbox.hit(ray) {
                    return None;
                }

                let mut closest: Option<HitRecord> = None;
                for obj in objects {
                    let segment = match &closest {
                        Some(rec) => ray.clipped(rec.t),
                        None => *ray,
                    };
                    if let Some(rec) = obj.hit(&segment) {
                        closest = Some(rec);
                    }
                }
                closest
            }

            BvhNode::Branch { left, right, bbox } => {
                if !bbox.hit(ray) {
                    return None;
                }

                let hit_left = left.hit(ray);

                // Only check right up to closest hit
                let right_ray = match &hit_left {
                    Some(rec) => ray.clipped(rec.t),
                    None => *ray,
                };
                right.hit(&right_ray).or(hit_left)
            }
        }
    }

    fn occludes(&self, ray: &Ray) -> bool {
        match self {
            BvhNode::Empty => false,
            BvhNode::Leaf { objects, bbox } => {
                bbox.hit(ray) && objects.iter().any(|obj| obj.occludes(ray))
            }
            BvhNode::Branch { left, right, bbox } => {
                bbox.hit(ray) && (left.occludes(ray) || right.occludes(ray))
            }
        }
    }

    fn bounding_box(&self) -> Aabb {
        match self {
            BvhNode::Empty => Aabb::EMPTY,
            BvhNode::Leaf { bbox, .. } => *bbox,
            BvhNode::Branch { bbox, .. } => *bbox,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sphere;
    use lumen_core::GeometryId;
    use lumen_math::{Interval, Vec3};

    fn row_of_spheres(count: usize) -> BvhNode {
        let spheres: Vec<Box<dyn Hittable>> = (0..count)
            .map(|i| {
                Box::new(Sphere::new(
                    Vec3::new(i as f64, 0.0, -5.0),
                    0.5,
                    GeometryId(i),
                )) as Box<dyn Hittable>
            })
            .collect();
        BvhNode::new(spheres)
    }

    #[test]
    fn test_bvh_empty() {
        let bvh = BvhNode::new(vec![]);
        assert!(bvh.is_empty());

        let ray = Ray::from_near(Vec3::ZERO, -Vec3::Z, 0.001);
        assert!(bvh.hit(&ray).is_none());
        assert!(!bvh.occludes(&ray));
    }

    #[test]
    fn test_bvh_single_sphere() {
        let bvh = row_of_spheres(1);

        // Should create a leaf
        assert!(matches!(bvh, BvhNode::Leaf { .. }));

        let ray = Ray::from_near(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), 0.001);
        assert!(bvh.hit(&ray).is_some());
    }

    #[test]
    fn test_bvh_multiple_spheres() {
        let bvh = row_of_spheres(10);
        assert_eq!(bvh.len(), 10);
        assert!(matches!(bvh, BvhNode::Branch { .. }));

        // Test ray that hits sphere at x=5
        let ray = Ray::from_near(Vec3::new(5.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0), 0.001);
        let rec = bvh.hit(&ray).expect("should hit");

        // Hit point should be near z = -4.5 (sphere at z=-5, radius 0.5)
        assert!((rec.point.z - (-4.5)).abs() < 0.01);
        assert_eq!(rec.geometry, GeometryId(5));
    }

    #[test]
    fn test_bvh_returns_closest() {
        // Ray along +X through every sphere; the first one it meets is at x=0
        let bvh = row_of_spheres(10);
        let ray = Ray::from_near(Vec3::new(-3.0, 0.0, -5.0), Vec3::X, 0.001);

        let rec = bvh.hit(&ray).expect("should hit");
        assert_eq!(rec.geometry, GeometryId(0));
        assert!((rec.t - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_bvh_occludes_respects_segment() {
        let bvh = row_of_spheres(10);
        let ray = Ray::new(Vec3::new(-3.0, 0.0, -5.0), Vec3::X, Interval::new(0.001, 2.0));
        assert!(!bvh.occludes(&ray));
        assert!(bvh.occludes(&ray.clipped(3.0)));
    }
}
