//! # Mesh Boundary Type
//!
//! Compact vertex + index container handed to renderer and physics
//! collaborators. The hull builders produce it through
//! [`SolidHull::to_mesh`](crate::hull3d::SolidHull::to_mesh); the kernel
//! itself only reads it back in tests.

use config::constants::VERTEX_MERGE_EPSILON;
use glam::DVec3;

/// A triangle mesh with vertices and indices.
///
/// All geometry stays f64 internally; the `_f32` exports exist for the
/// GPU boundary only. Normals are per-face and derived from the winding
/// order, matching the hull's outward orientation.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use hull_mesh::Mesh;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert_eq!(mesh.face_normal(0), DVec3::Z);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    vertices: Vec<DVec3>,
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Unit face normal of one triangle, from its winding order.
    ///
    /// Degenerate triangles yield a zero normal.
    pub fn face_normal(&self, index: usize) -> DVec3 {
        let [v0, v1, v2] = self.triangles[index];
        let a = self.vertices[v0 as usize];
        let b = self.vertices[v1 as usize];
        let c = self.vertices[v2 as usize];
        let normal = (b - a).cross(c - a);
        let length = normal.length();
        if length > 0.0 {
            normal / length
        } else {
            DVec3::ZERO
        }
    }

    /// Unit face normals for all triangles.
    pub fn face_normals(&self) -> Vec<DVec3> {
        (0..self.triangles.len()).map(|i| self.face_normal(i)).collect()
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];
        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }
        (min, max)
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - all triangle indices are valid
    /// - no repeated indices within a triangle
    /// - no zero-area triangles
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        for tri in &self.triangles {
            if tri[0] >= vertex_count || tri[1] >= vertex_count || tri[2] >= vertex_count {
                return false;
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            let area = (v1 - v0).cross(v2 - v0).length();
            if area < VERTEX_MERGE_EPSILON {
                return false;
            }
        }

        true
    }

    /// Exports vertices as an f32 array for GPU upload.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] values.
    pub fn vertices_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            result.push(v.x as f32);
            result.push(v.y as f32);
            result.push(v.z as f32);
        }
        result
    }

    /// Exports triangle indices as a flat u32 array for GPU upload.
    pub fn indices_u32(&self) -> Vec<u32> {
        let mut result = Vec::with_capacity(self.triangles.len() * 3);
        for tri in &self.triangles {
            result.extend_from_slice(tri);
        }
        result
    }
}
