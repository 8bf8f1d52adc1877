//! # Linked Triangles
//!
//! Adjacency-aware indexed triangles held in a handle-based arena.
//!
//! Every triangle carries six neighbor relations: three edge links
//! (the triangle sharing that exact edge, endpoint indices equal in
//! either order) and three corner links (a triangle sharing that one
//! vertex and neither of the other two edge endpoints). Links are handle
//! fields updated through the arena on both sides, never direct
//! references, so the mutual back-references cannot dangle or alias.
//!
//! Edge links on a consistent hull are symmetric; corner links are
//! best-effort (first match wins) and make no symmetry promise.

use crate::triangle::{IndexedTriangle, TriangleCorner, TriangleEdge};
use glam::DVec3;

// =============================================================================
// HANDLES
// =============================================================================

/// Stable identifier of a triangle slot within one [`TriangleArena`].
///
/// Handles stay valid across removals of other triangles; using a handle
/// after its own triangle was removed is a programmer error and panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TriangleHandle(u32);

impl TriangleHandle {
    /// Raw slot index.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

// =============================================================================
// LINKED TRIANGLE
// =============================================================================

/// An indexed triangle plus its edge and corner neighbor links.
#[derive(Debug, Clone)]
pub struct LinkedTriangle {
    triangle: IndexedTriangle,
    edge_links: [Option<TriangleHandle>; 3],
    corner_links: [Option<TriangleHandle>; 3],
}

impl LinkedTriangle {
    fn new(triangle: IndexedTriangle) -> Self {
        Self {
            triangle,
            edge_links: [None; 3],
            corner_links: [None; 3],
        }
    }

    /// The underlying indexed triangle.
    #[inline]
    pub fn triangle(&self) -> &IndexedTriangle {
        &self.triangle
    }

    /// The neighbor across an edge, if linked.
    #[inline]
    pub fn edge_link(&self, edge: TriangleEdge) -> Option<TriangleHandle> {
        self.edge_links[edge.index()]
    }

    /// The neighbor at a corner, if linked.
    #[inline]
    pub fn corner_link(&self, corner: TriangleCorner) -> Option<TriangleHandle> {
        self.corner_links[corner.index()]
    }
}

// =============================================================================
// ARENA
// =============================================================================

/// Slot arena owning linked triangles and their creation-token counter.
///
/// The counter is per-arena, so independent hull builds never contend on
/// shared state.
#[derive(Debug, Clone, Default)]
pub struct TriangleArena {
    slots: Vec<Option<LinkedTriangle>>,
    live: usize,
    next_seq: u64,
}

impl TriangleArena {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live triangles.
    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    /// True if no triangles are live.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// True if the handle refers to a live triangle.
    #[inline]
    pub fn contains(&self, handle: TriangleHandle) -> bool {
        self.slots
            .get(handle.index())
            .is_some_and(|slot| slot.is_some())
    }

    /// Inserts a new unlinked triangle over `points` and returns its handle.
    pub fn insert(&mut self, v0: u32, v1: u32, v2: u32, points: &[DVec3]) -> TriangleHandle {
        let seq = self.next_seq;
        self.next_seq += 1;
        let triangle = IndexedTriangle::new(v0, v1, v2, points, seq);
        self.slots.push(Some(LinkedTriangle::new(triangle)));
        self.live += 1;
        TriangleHandle((self.slots.len() - 1) as u32)
    }

    /// Removes a triangle, clearing every link that pointed at it.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn remove(&mut self, handle: TriangleHandle) -> IndexedTriangle {
        let removed = self.slots[handle.index()]
            .take()
            .unwrap_or_else(|| panic!("remove: stale handle {handle:?}"));
        self.live -= 1;

        // Corner links are not symmetric, so sweep every live slot.
        for slot in self.slots.iter_mut().flatten() {
            for link in slot.edge_links.iter_mut().chain(slot.corner_links.iter_mut()) {
                if *link == Some(handle) {
                    *link = None;
                }
            }
        }

        removed.triangle
    }

    /// Borrows a live triangle.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn get(&self, handle: TriangleHandle) -> &LinkedTriangle {
        self.slots[handle.index()]
            .as_ref()
            .unwrap_or_else(|| panic!("get: stale handle {handle:?}"))
    }

    fn get_mut(&mut self, handle: TriangleHandle) -> &mut LinkedTriangle {
        self.slots[handle.index()]
            .as_mut()
            .unwrap_or_else(|| panic!("get_mut: stale handle {handle:?}"))
    }

    /// Iterates over live handles in slot order.
    pub fn handles(&self) -> impl Iterator<Item = TriangleHandle> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            slot.as_ref().map(|_| TriangleHandle(i as u32))
        })
    }

    /// Iterates over live handles and their triangles in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (TriangleHandle, &LinkedTriangle)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            slot.as_ref().map(|tri| (TriangleHandle(i as u32), tri))
        })
    }

    // =========================================================================
    // BULK LINKING
    // =========================================================================

    /// Discovers and records every edge neighbor by brute-force scan.
    ///
    /// For each triangle and each of its edges the arena is scanned for
    /// another triangle sharing both endpoint indices, in either order.
    /// When no partner exists the slot is nulled if
    /// `set_none_if_unlinked`, otherwise left untouched. O(n²) in
    /// triangle count; run once per hull build, not per query.
    pub fn link_edges(&mut self, set_none_if_unlinked: bool) {
        let handles: Vec<TriangleHandle> = self.handles().collect();
        for &handle in &handles {
            for edge in TriangleEdge::ALL {
                let (a, b) = self.get(handle).triangle.edge_endpoints(edge);
                let partner = handles.iter().copied().find(|&other| {
                    other != handle && self.get(other).triangle.edge_between(a, b).is_some()
                });
                match partner {
                    Some(found) => self.get_mut(handle).edge_links[edge.index()] = Some(found),
                    None if set_none_if_unlinked => {
                        self.get_mut(handle).edge_links[edge.index()] = None;
                    }
                    None => {}
                }
            }
        }
    }

    /// Discovers and records corner neighbors by brute-force scan.
    ///
    /// A corner neighbor shares the corner's vertex index and neither of
    /// the source triangle's other two indices; the first match wins.
    pub fn link_corners(&mut self, set_none_if_unlinked: bool) {
        let handles: Vec<TriangleHandle> = self.handles().collect();
        for &handle in &handles {
            for corner in TriangleCorner::ALL {
                let indices = self.get(handle).triangle.indices();
                let shared = indices[corner.index()];
                let partner = handles.iter().copied().find(|&other| {
                    if other == handle {
                        return false;
                    }
                    let other_indices = self.get(other).triangle.indices();
                    other_indices.contains(&shared)
                        && indices
                            .iter()
                            .filter(|&&idx| idx != shared)
                            .all(|idx| !other_indices.contains(idx))
                });
                match partner {
                    Some(found) => self.get_mut(handle).corner_links[corner.index()] = Some(found),
                    None if set_none_if_unlinked => {
                        self.get_mut(handle).corner_links[corner.index()] = None;
                    }
                    None => {}
                }
            }
        }
    }

    // =========================================================================
    // SINGLE-EDGE LINKING
    // =========================================================================

    /// Links two triangles across one shared edge, symmetrically.
    ///
    /// # Panics
    ///
    /// Panics if `b` has no edge with the same endpoint indices as
    /// `a`'s named edge; asking to link across an edge the triangles do
    /// not share is a broken invariant.
    pub fn link_edge(&mut self, a: TriangleHandle, edge: TriangleEdge, b: TriangleHandle) {
        let (start, end) = self.get(a).triangle.edge_endpoints(edge);
        let back = self
            .get(b)
            .triangle
            .edge_between(start, end)
            .unwrap_or_else(|| {
                panic!("link_edge: {b:?} has no edge ({start}, {end}) shared with {a:?}")
            });
        self.get_mut(a).edge_links[edge.index()] = Some(b);
        self.get_mut(b).edge_links[back.index()] = Some(a);
    }

    // =========================================================================
    // REVERSE LOOKUP
    // =========================================================================

    /// Which of `handle`'s edge slots points at `neighbor`.
    ///
    /// # Panics
    ///
    /// Panics if `neighbor` is not an edge neighbor of `handle`; the
    /// adjacency graph is broken and the error must not propagate into a
    /// disconnected mesh.
    pub fn which_edge(&self, handle: TriangleHandle, neighbor: TriangleHandle) -> TriangleEdge {
        TriangleEdge::ALL
            .into_iter()
            .find(|&edge| self.get(handle).edge_link(edge) == Some(neighbor))
            .unwrap_or_else(|| panic!("which_edge: {neighbor:?} is not an edge neighbor of {handle:?}"))
    }

    /// Which of `handle`'s corner slots points at `neighbor`.
    ///
    /// # Panics
    ///
    /// Panics if `neighbor` is not a corner neighbor of `handle`.
    pub fn which_corner(&self, handle: TriangleHandle, neighbor: TriangleHandle) -> TriangleCorner {
        TriangleCorner::ALL
            .into_iter()
            .find(|&corner| self.get(handle).corner_link(corner) == Some(neighbor))
            .unwrap_or_else(|| {
                panic!("which_corner: {neighbor:?} is not a corner neighbor of {handle:?}")
            })
    }
}
