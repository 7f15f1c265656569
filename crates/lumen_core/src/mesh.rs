//! Triangle mesh geometry.
//!
//! A mesh is a flat vertex buffer plus a triangle index buffer, the same
//! layout scene files and the demo scene use to describe quads and boxes.

use lumen_math::{Aabb, Vec3};

/// A mesh consisting of vertex positions and triangle indices.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    /// Vertex positions (one Vec3 per vertex)
    pub positions: Vec<Vec3>,

    /// Triangle indices (every 3 indices form a triangle)
    pub indices: Vec<u32>,

    /// Axis-aligned bounding box
    pub bounds: Aabb,
}

/// Index layout shared by every cuboid: two triangles per face.
const CUBOID_INDICES: [u32; 36] = [
    0, 1, 2, 0, 2, 3, // back
    4, 5, 6, 4, 6, 7, // front
    0, 1, 5, 0, 5, 4, // bottom
    3, 2, 6, 3, 6, 7, // top
    0, 3, 7, 0, 7, 4, // left
    1, 2, 6, 1, 6, 5, // right
];

impl Mesh {
    /// Create a new mesh from positions and indices.
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        let bounds = Aabb::enclosing(&positions);
        Self {
            positions,
            indices,
            bounds,
        }
    }

    /// Planar quad from four corners given in winding order.
    pub fn quad(corners: [Vec3; 4]) -> Self {
        Self::new(corners.to_vec(), vec![0, 1, 2, 0, 2, 3])
    }

    /// Axis-aligned box spanning `min` to `max`.
    pub fn cuboid(min: Vec3, max: Vec3) -> Self {
        let positions = vec![
            Vec3::new(min.x, min.y, min.z),
            Vec3::new(max.x, min.y, min.z),
            Vec3::new(max.x, max.y, min.z),
            Vec3::new(min.x, max.y, min.z),
            Vec3::new(min.x, min.y, max.z),
            Vec3::new(max.x, min.y, max.z),
            Vec3::new(max.x, max.y, max.z),
            Vec3::new(min.x, max.y, max.z),
        ];
        Self::new(positions, CUBOID_INDICES.to_vec())
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// First index that points past the vertex buffer, if any.
    pub fn first_invalid_index(&self) -> Option<u32> {
        self.indices
            .iter()
            .copied()
            .find(|&i| i as usize >= self.positions.len())
    }

    /// Extract triangle vertices as `[v0, v1, v2]` triplets.
    ///
    /// Triangles referencing missing vertices are skipped with a warning, as is
    /// a trailing partial triangle.
    pub fn triangles(&self) -> Vec<[Vec3; 3]> {
        let mut triangles = Vec::with_capacity(self.triangle_count());

        for chunk in self.indices.chunks_exact(3) {
            let i0 = chunk[0] as usize;
            let i1 = chunk[1] as usize;
            let i2 = chunk[2] as usize;

            match (
                self.positions.get(i0),
                self.positions.get(i1),
                self.positions.get(i2),
            ) {
                (Some(&v0), Some(&v1), Some(&v2)) => triangles.push([v0, v1, v2]),
                _ => log::warn!(
                    "Invalid triangle indices: [{}, {}, {}], vertex count: {}",
                    i0,
                    i1,
                    i2,
                    self.positions.len()
                ),
            }
        }

        triangles
    }
}
