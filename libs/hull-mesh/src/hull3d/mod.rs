//! # 3D Convex Hull
//!
//! Incremental quickhull over a 3D point cloud.
//!
//! The build seeds a tetrahedron from coordinate extremes, assigns every
//! remaining point to the outside set of at most one face, then
//! repeatedly lifts the farthest outside point onto the hull: faces
//! visible from that point are flood-filled across edge links, removed,
//! and replaced by a fan of new faces over the horizon edges. Pooled
//! outside points are redistributed onto the fan and the loop continues
//! until every outside set is empty.
//!
//! The result is a closed, edge-linked triangle set with outward
//! normals, owned together with the deduplicated input points.

use crate::error::{HullError, HullResult};
use crate::linked::{LinkedTriangle, TriangleArena, TriangleHandle};
use crate::mesh::Mesh;
use crate::predicates::dedup_points;
use crate::triangle::{IndexedTriangle, TriangleEdge};
use config::constants::{COPLANARITY_EPSILON, DISTANCE_EPSILON};
use glam::DVec3;
use std::collections::HashMap;

// =============================================================================
// RESULT TYPE
// =============================================================================

/// A closed convex polytope: edge-linked outward-facing triangles over
/// an owned point array.
#[derive(Debug, Clone)]
pub struct SolidHull {
    points: Vec<DVec3>,
    faces: TriangleArena,
}

impl SolidHull {
    /// The deduplicated point array the face indices refer to.
    #[inline]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Number of hull faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// The linked face arena.
    #[inline]
    pub fn arena(&self) -> &TriangleArena {
        &self.faces
    }

    /// Iterates over the hull faces.
    pub fn faces(&self) -> impl Iterator<Item = &LinkedTriangle> + '_ {
        self.faces.iter().map(|(_, face)| face)
    }

    /// Sorted indices of the points that ended up as hull vertices.
    pub fn vertex_indices(&self) -> Vec<u32> {
        let mut indices: Vec<u32> = self
            .faces()
            .flat_map(|face| face.triangle().indices())
            .collect();
        indices.sort_unstable();
        indices.dedup();
        indices
    }

    /// True if a point lies inside the hull or on its boundary.
    pub fn contains(&self, point: DVec3) -> bool {
        self.faces()
            .all(|face| face.triangle().signed_distance(point) <= DISTANCE_EPSILON)
    }

    /// Flattens the hull into a compact [`Mesh`], dropping unused points.
    pub fn to_mesh(&self) -> Mesh {
        let used = self.vertex_indices();
        let remap: HashMap<u32, u32> = used
            .iter()
            .enumerate()
            .map(|(new, &old)| (old, new as u32))
            .collect();

        let mut mesh = Mesh::with_capacity(used.len(), self.faces.len());
        for &old in &used {
            mesh.add_vertex(self.points[old as usize]);
        }
        for face in self.faces() {
            let [v0, v1, v2] = face.triangle().indices();
            mesh.add_triangle(remap[&v0], remap[&v1], remap[&v2]);
        }
        mesh
    }
}

/// Builds the convex hull of a 3D point cloud.
///
/// Input points are deduplicated first. Fails when fewer than 4 unique
/// points remain or when the set is not fully 3-dimensional (coincident,
/// collinear, or coplanar).
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use hull_mesh::convex_hull_3d;
///
/// let points = vec![
///     DVec3::new(0.0, 0.0, 0.0),
///     DVec3::new(1.0, 0.0, 0.0),
///     DVec3::new(0.0, 1.0, 0.0),
///     DVec3::new(0.0, 0.0, 1.0),
/// ];
/// let hull = convex_hull_3d(&points).unwrap();
/// assert_eq!(hull.face_count(), 4);
/// assert!(hull.contains(DVec3::new(0.1, 0.1, 0.1)));
/// ```
pub fn convex_hull_3d(points: &[DVec3]) -> HullResult<SolidHull> {
    HullBuilder::new(points)?.build()
}

// =============================================================================
// BUILDER
// =============================================================================

/// Transient state of one hull build.
///
/// Outside sets live here, keyed by face handle, rather than on the
/// triangles themselves; they are scaffolding of the build, not part of
/// the finished hull.
struct HullBuilder {
    points: Vec<DVec3>,
    arena: TriangleArena,
    outside: HashMap<TriangleHandle, Vec<u32>>,
}

impl HullBuilder {
    fn new(points: &[DVec3]) -> HullResult<Self> {
        let points = dedup_points(points);
        if points.len() < 4 {
            return Err(HullError::TooFewPoints {
                required: 4,
                actual: points.len(),
            });
        }
        Ok(Self {
            points,
            arena: TriangleArena::new(),
            outside: HashMap::new(),
        })
    }

    fn build(mut self) -> HullResult<SolidHull> {
        let seeds = self.select_seed_tetrahedron()?;
        self.insert_seed_faces(seeds);
        self.assign_initial_outside_sets(seeds);
        log::debug!(
            "hull build: {} points, seed tetrahedron {:?}",
            self.points.len(),
            seeds
        );

        while let Some((face, far)) = self.next_expansion() {
            self.expand(face, far)?;
        }

        if self.arena.is_empty() {
            return Err(HullError::degenerate(
                "hull collapsed during refinement; input is nearly coplanar",
            ));
        }
        log::debug!("hull build complete: {} faces", self.arena.len());
        Ok(SolidHull {
            points: self.points,
            faces: self.arena,
        })
    }

    // =========================================================================
    // SEEDING
    // =========================================================================

    /// Picks four affinely independent seed points.
    ///
    /// X extremes anchor the first two; the third maximizes distance
    /// from their line, the fourth maximizes distance from the resulting
    /// plane. Any stage bottoming out below tolerance means the set is
    /// not 3-dimensional.
    fn select_seed_tetrahedron(&self) -> HullResult<[u32; 4]> {
        for axis in 0..3 {
            let spread = self.axis_spread(axis);
            if spread <= COPLANARITY_EPSILON {
                return Err(HullError::degenerate(format!(
                    "zero spread on axis {axis}; point set is flat"
                )));
            }
        }

        let (s0, s1) = self.x_extremes();
        let a = self.points[s0 as usize];
        let b = self.points[s1 as usize];
        let line = (b - a).normalize();

        let (s2, line_distance) = self.farthest_from_line(a, line, &[s0, s1]);
        if line_distance <= COPLANARITY_EPSILON {
            return Err(HullError::degenerate(
                "all points collinear; cannot seed a tetrahedron",
            ));
        }

        let c = self.points[s2 as usize];
        let normal = (b - a).cross(c - a).normalize();
        let (s3, plane_distance) = self.farthest_from_plane(a, normal, &[s0, s1, s2]);
        if plane_distance <= COPLANARITY_EPSILON {
            return Err(HullError::degenerate(
                "all points coplanar; cannot seed a tetrahedron",
            ));
        }

        Ok([s0, s1, s2, s3])
    }

    fn axis_spread(&self, axis: usize) -> f64 {
        let values = self.points.iter().map(|p| p[axis]);
        let min = values.clone().fold(f64::INFINITY, f64::min);
        let max = values.fold(f64::NEG_INFINITY, f64::max);
        max - min
    }

    fn x_extremes(&self) -> (u32, u32) {
        let mut min = 0usize;
        let mut max = 0usize;
        for (i, p) in self.points.iter().enumerate() {
            if p.x < self.points[min].x {
                min = i;
            }
            if p.x > self.points[max].x {
                max = i;
            }
        }
        (min as u32, max as u32)
    }

    fn farthest_from_line(&self, origin: DVec3, direction: DVec3, exclude: &[u32]) -> (u32, f64) {
        let mut best = (0u32, 0.0f64);
        for (i, &p) in self.points.iter().enumerate() {
            if exclude.contains(&(i as u32)) {
                continue;
            }
            let offset = p - origin;
            let distance = (offset - direction * offset.dot(direction)).length();
            if distance > best.1 {
                best = (i as u32, distance);
            }
        }
        best
    }

    fn farthest_from_plane(&self, origin: DVec3, normal: DVec3, exclude: &[u32]) -> (u32, f64) {
        let mut best = (0u32, 0.0f64);
        for (i, &p) in self.points.iter().enumerate() {
            if exclude.contains(&(i as u32)) {
                continue;
            }
            let distance = normal.dot(p - origin).abs();
            if distance > best.1 {
                best = (i as u32, distance);
            }
        }
        best
    }

    /// Inserts the four seed faces, each wound so the opposite seed
    /// vertex lies on its inner side, then edge-links them.
    fn insert_seed_faces(&mut self, seeds: [u32; 4]) {
        let face_and_opposite = [
            ([seeds[0], seeds[1], seeds[2]], seeds[3]),
            ([seeds[0], seeds[1], seeds[3]], seeds[2]),
            ([seeds[0], seeds[2], seeds[3]], seeds[1]),
            ([seeds[1], seeds[2], seeds[3]], seeds[0]),
        ];
        for ([v0, v1, v2], opposite) in face_and_opposite {
            let a = self.points[v0 as usize];
            let b = self.points[v1 as usize];
            let c = self.points[v2 as usize];
            let outward = (b - a).cross(c - a).dot(self.points[opposite as usize] - a) < 0.0;
            if outward {
                self.arena.insert(v0, v1, v2, &self.points);
            } else {
                self.arena.insert(v0, v2, v1, &self.points);
            }
        }
        self.arena.link_edges(true);
    }

    // =========================================================================
    // OUTSIDE SETS
    // =========================================================================

    /// True if `point` belongs in `face`'s outside set.
    ///
    /// Strictly above the face plane is outside; on the plane counts
    /// only when the point also falls outside the face's triangular
    /// footprint, so coplanar points already covered by a face are
    /// absorbed instead of queued forever.
    fn is_outside(&self, face: &IndexedTriangle, point: DVec3) -> bool {
        let distance = face.signed_distance(point);
        if distance > DISTANCE_EPSILON {
            return true;
        }
        distance.abs() <= DISTANCE_EPSILON && !face.contains_projected(point, &self.points)
    }

    fn assign_initial_outside_sets(&mut self, seeds: [u32; 4]) {
        let handles: Vec<TriangleHandle> = self.arena.handles().collect();
        for idx in 0..self.points.len() as u32 {
            if seeds.contains(&idx) {
                continue;
            }
            self.assign_point(idx, &handles);
        }
    }

    /// Assigns one point to the first face that sees it, if any.
    fn assign_point(&mut self, idx: u32, candidates: &[TriangleHandle]) {
        let point = self.points[idx as usize];
        let claimed = candidates
            .iter()
            .copied()
            .find(|&h| self.is_outside(self.arena.get(h).triangle(), point));
        if let Some(face) = claimed {
            self.outside.entry(face).or_default().push(idx);
        }
    }

    // =========================================================================
    // REFINEMENT
    // =========================================================================

    /// Picks the next face to expand and its farthest outside point.
    ///
    /// A face whose whole outside set sits within the coplanar threshold
    /// and inside the current boundary is finished: its set is discarded
    /// so the loop cannot revisit it.
    fn next_expansion(&mut self) -> Option<(TriangleHandle, u32)> {
        loop {
            let face = self
                .arena
                .handles()
                .find(|h| self.outside.get(h).is_some_and(|set| !set.is_empty()))?;
            let set = &self.outside[&face];
            let triangle = self.arena.get(face).triangle();

            let farthest = set.iter().copied().max_by(|&p, &q| {
                let dp = triangle.signed_distance(self.points[p as usize]);
                let dq = triangle.signed_distance(self.points[q as usize]);
                dp.partial_cmp(&dq).unwrap_or(std::cmp::Ordering::Equal)
            });
            if let Some(farthest) = farthest {
                if triangle.signed_distance(self.points[farthest as usize]) > DISTANCE_EPSILON {
                    return Some((face, farthest));
                }
            }

            // Near-tie at distance zero: a coplanar point outside the
            // footprint still grows the hull and must not be dropped.
            let coplanar_outside = set.iter().copied().find(|&p| {
                !triangle.contains_projected(self.points[p as usize], &self.points)
            });
            match coplanar_outside {
                Some(point) => return Some((face, point)),
                None => {
                    // Coplanar stragglers inside the boundary; done here.
                    self.outside.remove(&face);
                }
            }
        }
    }

    /// Lifts `far` onto the hull, replacing every face visible from it
    /// with a fan of new faces over the horizon.
    fn expand(&mut self, start: TriangleHandle, far: u32) -> HullResult<()> {
        let far_point = self.points[far as usize];
        let visible = self.flood_visible(start, far_point);
        log::trace!(
            "expanding to point {far}: {} visible faces of {}",
            visible.len(),
            self.arena.len()
        );

        // Horizon edges, each with its surviving boundary neighbor, in
        // the visible face's winding order.
        let mut horizon: Vec<(TriangleHandle, u32, u32)> = Vec::new();
        for &face in &visible {
            for edge in TriangleEdge::ALL {
                let neighbor = self.arena.get(face).edge_link(edge);
                if let Some(neighbor) = neighbor {
                    if !visible.contains(&neighbor) {
                        let (a, b) = self.arena.get(face).triangle().edge_endpoints(edge);
                        horizon.push((neighbor, a, b));
                    }
                }
            }
        }
        if horizon.is_empty() {
            // Every face was visible; the hull has no interior left.
            for face in visible {
                self.outside.remove(&face);
                self.arena.remove(face);
            }
            return Ok(());
        }

        // Pool the removed region's points and remember an interior
        // reference before the faces disappear.
        let mut pool: Vec<u32> = Vec::new();
        let mut region_centroid = DVec3::ZERO;
        let mut region_corners = 0usize;
        for &face in &visible {
            if let Some(set) = self.outside.remove(&face) {
                pool.extend(set.into_iter().filter(|&p| p != far));
            }
            for idx in self.arena.get(face).triangle().indices() {
                region_centroid += self.points[idx as usize];
                region_corners += 1;
            }
        }
        let interior = region_centroid / region_corners as f64;

        for face in visible {
            self.arena.remove(face);
        }

        // Fan of new faces over the horizon, apexed at `far`.
        let mut new_faces: Vec<TriangleHandle> = Vec::with_capacity(horizon.len());
        for (boundary, a, b) in horizon {
            let handle = self.insert_oriented(a, b, far, interior);
            self.arena.link_edge(handle, TriangleEdge::Edge01, boundary);
            new_faces.push(handle);
        }

        // The fan's side edges pair up among themselves.
        for i in 0..new_faces.len() {
            for edge in [TriangleEdge::Edge12, TriangleEdge::Edge20] {
                if self.arena.get(new_faces[i]).edge_link(edge).is_some() {
                    continue;
                }
                let (a, b) = self.arena.get(new_faces[i]).triangle().edge_endpoints(edge);
                let partner = new_faces
                    .iter()
                    .copied()
                    .find(|&other| {
                        other != new_faces[i]
                            && self.arena.get(other).triangle().edge_between(a, b).is_some()
                    });
                if let Some(partner) = partner {
                    self.arena.link_edge(new_faces[i], edge, partner);
                }
            }
        }

        // Points the removed faces were tracking get re-homed onto the
        // fan; anything no new face sees is now interior and dropped.
        for idx in pool {
            self.assign_point(idx, &new_faces);
        }
        Ok(())
    }

    /// Flood-fills the set of faces visible from `far`, starting at a
    /// face known to see it, walking edge links only.
    ///
    /// Coplanar faces (dot product near zero) count as visible so the
    /// horizon never threads between two faces in the same plane.
    fn flood_visible(&self, start: TriangleHandle, far: DVec3) -> Vec<TriangleHandle> {
        let mut visible = vec![start];
        let mut frontier = vec![start];
        while let Some(face) = frontier.pop() {
            for edge in TriangleEdge::ALL {
                let Some(neighbor) = self.arena.get(face).edge_link(edge) else {
                    continue;
                };
                if visible.contains(&neighbor) {
                    continue;
                }
                let triangle = self.arena.get(neighbor).triangle();
                let anchor = self.points[triangle.indices()[0] as usize];
                if triangle.unit_normal().dot(far - anchor) >= -DISTANCE_EPSILON {
                    visible.push(neighbor);
                    frontier.push(neighbor);
                }
            }
        }
        visible
    }

    /// Inserts the face (a, b, apex) wound outward.
    ///
    /// Outward means the interior reference point lands on the negative
    /// side. When the reference is coplanar with the new face the sign
    /// test is meaningless; the horizon edge's winding already opposes
    /// the boundary neighbor's traversal, so the untouched order stands.
    fn insert_oriented(&mut self, a: u32, b: u32, apex: u32, interior: DVec3) -> TriangleHandle {
        let pa = self.points[a as usize];
        let pb = self.points[b as usize];
        let pc = self.points[apex as usize];
        let normal = (pb - pa).cross(pc - pa);
        if normal.dot(interior - pa) > DISTANCE_EPSILON {
            self.arena.insert(b, a, apex, &self.points)
        } else {
            self.arena.insert(a, b, apex, &self.points)
        }
    }
}

#[cfg(test)]
mod tests;
