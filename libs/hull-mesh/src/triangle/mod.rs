//! # Triangle Model
//!
//! The two triangle shapes shared by the hull builders:
//!
//! - [`VertexTriangle`] - explicit vertices, mutable, with lazily cached
//!   derived geometry that is invalidated on any vertex write
//! - [`IndexedTriangle`] - three offsets into a shared point array, with
//!   derived geometry computed eagerly at construction (the indices are
//!   fixed for the triangle's lifetime)
//!
//! Edges and corners are addressed symbolically through [`TriangleEdge`]
//! and [`TriangleCorner`] rather than raw slot numbers.

use config::constants::{BARYCENTRIC_EPSILON, DISTANCE_EPSILON};
use glam::DVec3;
use std::cmp::Ordering;

// =============================================================================
// SYMBOLIC ADDRESSING
// =============================================================================

/// One of a triangle's three edges, named by the corners it connects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriangleEdge {
    /// Edge from corner 0 to corner 1.
    Edge01,
    /// Edge from corner 1 to corner 2.
    Edge12,
    /// Edge from corner 2 to corner 0.
    Edge20,
}

impl TriangleEdge {
    /// All edges in winding order.
    pub const ALL: [TriangleEdge; 3] = [Self::Edge01, Self::Edge12, Self::Edge20];

    /// Slot index of this edge (0, 1, 2).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Self::Edge01 => 0,
            Self::Edge12 => 1,
            Self::Edge20 => 2,
        }
    }

    /// The two corners this edge connects, in winding order.
    #[inline]
    pub fn endpoints(self) -> (TriangleCorner, TriangleCorner) {
        match self {
            Self::Edge01 => (TriangleCorner::Corner0, TriangleCorner::Corner1),
            Self::Edge12 => (TriangleCorner::Corner1, TriangleCorner::Corner2),
            Self::Edge20 => (TriangleCorner::Corner2, TriangleCorner::Corner0),
        }
    }

    /// The corner not touched by this edge.
    #[inline]
    pub fn opposite_corner(self) -> TriangleCorner {
        match self {
            Self::Edge01 => TriangleCorner::Corner2,
            Self::Edge12 => TriangleCorner::Corner0,
            Self::Edge20 => TriangleCorner::Corner1,
        }
    }
}

/// One of a triangle's three corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriangleCorner {
    /// First corner.
    Corner0,
    /// Second corner.
    Corner1,
    /// Third corner.
    Corner2,
}

impl TriangleCorner {
    /// All corners in winding order.
    pub const ALL: [TriangleCorner; 3] = [Self::Corner0, Self::Corner1, Self::Corner2];

    /// Slot index of this corner (0, 1, 2).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Self::Corner0 => 0,
            Self::Corner1 => 1,
            Self::Corner2 => 2,
        }
    }
}

// =============================================================================
// DERIVED GEOMETRY
// =============================================================================

/// Geometry derived from a triangle's vertices.
///
/// The raw normal follows the right-hand rule over the winding order and
/// its magnitude is twice the triangle area. A degenerate triangle
/// (collinear or coincident vertices) carries a zero normal and a zero
/// unit normal; callers must treat that as "no well-defined plane".
#[derive(Debug, Clone, Copy, PartialEq)]
struct DerivedGeometry {
    normal: DVec3,
    unit_normal: DVec3,
    area: f64,
    plane_distance: f64,
}

impl DerivedGeometry {
    fn compute(a: DVec3, b: DVec3, c: DVec3) -> Self {
        let normal = (b - a).cross(c - a);
        let length = normal.length();
        let unit_normal = if length > DISTANCE_EPSILON {
            normal / length
        } else {
            DVec3::ZERO
        };
        Self {
            normal,
            unit_normal,
            area: 0.5 * length,
            plane_distance: unit_normal.dot(a),
        }
    }
}

// =============================================================================
// VERTEX TRIANGLE
// =============================================================================

/// Mutable triangle over three explicit vertices.
///
/// Derived geometry is computed on first access and cached; writing any
/// vertex clears the cache, so the next read recomputes.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use hull_mesh::{TriangleCorner, VertexTriangle};
///
/// let mut tri = VertexTriangle::new(DVec3::ZERO, DVec3::X, DVec3::Y);
/// assert_eq!(tri.unit_normal(), DVec3::Z);
/// tri.set_vertex(TriangleCorner::Corner2, -DVec3::Y);
/// assert_eq!(tri.unit_normal(), -DVec3::Z);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VertexTriangle {
    vertices: [DVec3; 3],
    derived: Option<DerivedGeometry>,
}

impl VertexTriangle {
    /// Creates a triangle from three vertices in winding order.
    pub fn new(a: DVec3, b: DVec3, c: DVec3) -> Self {
        Self {
            vertices: [a, b, c],
            derived: None,
        }
    }

    /// Returns the vertex at a corner.
    #[inline]
    pub fn vertex(&self, corner: TriangleCorner) -> DVec3 {
        self.vertices[corner.index()]
    }

    /// Replaces the vertex at a corner, invalidating the cached geometry.
    pub fn set_vertex(&mut self, corner: TriangleCorner, position: DVec3) {
        self.vertices[corner.index()] = position;
        self.derived = None;
    }

    fn derived(&mut self) -> DerivedGeometry {
        match self.derived {
            Some(derived) => derived,
            None => {
                let [a, b, c] = self.vertices;
                let derived = DerivedGeometry::compute(a, b, c);
                self.derived = Some(derived);
                derived
            }
        }
    }

    /// Raw normal (right-hand rule; magnitude is twice the area).
    pub fn normal(&mut self) -> DVec3 {
        self.derived().normal
    }

    /// Unit normal, or zero for a degenerate triangle.
    pub fn unit_normal(&mut self) -> DVec3 {
        self.derived().unit_normal
    }

    /// Triangle area.
    pub fn area(&mut self) -> f64 {
        self.derived().area
    }

    /// Signed distance of the triangle's plane from the origin.
    pub fn plane_distance(&mut self) -> f64 {
        self.derived().plane_distance
    }

    /// Arithmetic mean of the three vertices.
    pub fn center_point(&self) -> DVec3 {
        (self.vertices[0] + self.vertices[1] + self.vertices[2]) / 3.0
    }

    /// An edge endpoint: the start of the edge, or the end if `from_end`.
    pub fn edge_point(&self, edge: TriangleEdge, from_end: bool) -> DVec3 {
        let (start, end) = edge.endpoints();
        self.vertex(if from_end { end } else { start })
    }

    /// The vertex shared by two distinct edges.
    ///
    /// # Panics
    ///
    /// Panics if both arguments name the same edge.
    pub fn common_point(&self, a: TriangleEdge, b: TriangleEdge) -> DVec3 {
        self.vertex(common_corner(a, b))
    }

    /// Midpoint of an edge.
    pub fn edge_midpoint(&self, edge: TriangleEdge) -> DVec3 {
        0.5 * (self.edge_point(edge, false) + self.edge_point(edge, true))
    }

    /// Length of an edge.
    pub fn edge_length(&self, edge: TriangleEdge) -> f64 {
        (self.edge_point(edge, true) - self.edge_point(edge, false)).length()
    }
}

/// Corner shared by two distinct edges.
///
/// # Panics
///
/// Panics if the edges are equal; a caller asking for the common corner
/// of an edge with itself has broken an invariant.
fn common_corner(a: TriangleEdge, b: TriangleEdge) -> TriangleCorner {
    assert!(a != b, "common corner of an edge with itself is undefined");
    let (a0, a1) = a.endpoints();
    let (b0, b1) = b.endpoints();
    if a0 == b0 || a0 == b1 {
        a0
    } else {
        a1
    }
}

// =============================================================================
// INDEXED TRIANGLE
// =============================================================================

/// Triangle whose vertices are offsets into a shared, externally owned
/// point array.
///
/// Derived geometry is computed once at construction: hull-stage
/// triangles are replaced rather than edited, so there is nothing to
/// invalidate. The `seq` creation token orders triangles by construction
/// order within one arena; the ordering carries no geometric meaning.
#[derive(Debug, Clone)]
pub struct IndexedTriangle {
    indices: [u32; 3],
    normal: DVec3,
    unit_normal: DVec3,
    area: f64,
    plane_distance: f64,
    seq: u64,
}

impl IndexedTriangle {
    /// Creates a triangle over `points` from three indices in winding order.
    pub fn new(v0: u32, v1: u32, v2: u32, points: &[DVec3], seq: u64) -> Self {
        let derived = DerivedGeometry::compute(
            points[v0 as usize],
            points[v1 as usize],
            points[v2 as usize],
        );
        Self {
            indices: [v0, v1, v2],
            normal: derived.normal,
            unit_normal: derived.unit_normal,
            area: derived.area,
            plane_distance: derived.plane_distance,
            seq,
        }
    }

    /// The three vertex indices in winding order.
    #[inline]
    pub fn indices(&self) -> [u32; 3] {
        self.indices
    }

    /// Vertex index at a corner.
    #[inline]
    pub fn index(&self, corner: TriangleCorner) -> u32 {
        self.indices[corner.index()]
    }

    /// Vertex position at a corner.
    #[inline]
    pub fn vertex(&self, corner: TriangleCorner, points: &[DVec3]) -> DVec3 {
        points[self.index(corner) as usize]
    }

    /// Raw normal (right-hand rule; magnitude is twice the area).
    #[inline]
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Unit normal, or zero for a degenerate triangle.
    #[inline]
    pub fn unit_normal(&self) -> DVec3 {
        self.unit_normal
    }

    /// Triangle area.
    #[inline]
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Signed distance of the triangle's plane from the origin.
    #[inline]
    pub fn plane_distance(&self) -> f64 {
        self.plane_distance
    }

    /// Creation token within the owning arena.
    #[inline]
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// True if the triangle has no well-defined plane.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.unit_normal == DVec3::ZERO
    }

    /// Signed distance of a point from the triangle's plane.
    ///
    /// Positive on the side the normal points toward.
    #[inline]
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.unit_normal.dot(point) - self.plane_distance
    }

    /// Arithmetic mean of the three vertices.
    pub fn center_point(&self, points: &[DVec3]) -> DVec3 {
        (points[self.indices[0] as usize]
            + points[self.indices[1] as usize]
            + points[self.indices[2] as usize])
            / 3.0
    }

    /// Endpoint indices of an edge, in winding order.
    pub fn edge_endpoints(&self, edge: TriangleEdge) -> (u32, u32) {
        let (start, end) = edge.endpoints();
        (self.index(start), self.index(end))
    }

    /// An edge endpoint index: the start, or the end if `from_end`.
    pub fn edge_point(&self, edge: TriangleEdge, from_end: bool) -> u32 {
        let (start, end) = self.edge_endpoints(edge);
        if from_end {
            end
        } else {
            start
        }
    }

    /// The vertex index shared by two distinct edges.
    ///
    /// # Panics
    ///
    /// Panics if both arguments name the same edge.
    pub fn common_index(&self, a: TriangleEdge, b: TriangleEdge) -> u32 {
        self.index(common_corner(a, b))
    }

    /// Midpoint of an edge.
    pub fn edge_midpoint(&self, edge: TriangleEdge, points: &[DVec3]) -> DVec3 {
        let (start, end) = self.edge_endpoints(edge);
        0.5 * (points[start as usize] + points[end as usize])
    }

    /// Length of an edge.
    pub fn edge_length(&self, edge: TriangleEdge, points: &[DVec3]) -> f64 {
        let (start, end) = self.edge_endpoints(edge);
        (points[end as usize] - points[start as usize]).length()
    }

    /// Which edge connects the two given vertex indices, in either order.
    pub fn edge_between(&self, a: u32, b: u32) -> Option<TriangleEdge> {
        TriangleEdge::ALL.into_iter().find(|&edge| {
            let (start, end) = self.edge_endpoints(edge);
            (start == a && end == b) || (start == b && end == a)
        })
    }

    /// True if the point falls within the triangle's 2D footprint.
    ///
    /// The point is expressed in barycentric coordinates with respect to
    /// the triangle's plane (the out-of-plane component drops out of the
    /// dot products), and counts as inside when all three coordinates
    /// clear `-BARYCENTRIC_EPSILON`. A degenerate triangle contains
    /// nothing.
    pub fn contains_projected(&self, point: DVec3, points: &[DVec3]) -> bool {
        let a = points[self.indices[0] as usize];
        let b = points[self.indices[1] as usize];
        let c = points[self.indices[2] as usize];

        let ab = b - a;
        let ac = c - a;
        let ap = point - a;

        let d00 = ab.dot(ab);
        let d01 = ab.dot(ac);
        let d11 = ac.dot(ac);
        let d20 = ap.dot(ab);
        let d21 = ap.dot(ac);

        let denom = d00 * d11 - d01 * d01;
        if denom.abs() < DISTANCE_EPSILON {
            return false;
        }

        let v = (d11 * d20 - d01 * d21) / denom;
        let w = (d00 * d21 - d01 * d20) / denom;
        let u = 1.0 - v - w;

        u >= -BARYCENTRIC_EPSILON && v >= -BARYCENTRIC_EPSILON && w >= -BARYCENTRIC_EPSILON
    }
}

// Ordering follows the creation token only, so triangles can live in
// sorted containers; it says nothing about geometry.
impl PartialEq for IndexedTriangle {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for IndexedTriangle {}

impl PartialOrd for IndexedTriangle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for IndexedTriangle {
    fn cmp(&self, other: &Self) -> Ordering {
        self.seq.cmp(&other.seq)
    }
}

#[cfg(test)]
mod tests;
