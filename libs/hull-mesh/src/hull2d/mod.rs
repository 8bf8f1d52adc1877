//! # Planar Convex Hull
//!
//! Divide-and-conquer quickhull over 2D points, plus a 3D entry point
//! that discovers the common plane of a coplanar point set, flattens it
//! onto Z=0 through a [`PlaneFrame`], and runs the 2D build there.
//!
//! The result keeps the frame, so the perimeter can be lifted back into
//! 3D and arbitrary 3D query points can be classified later.

use crate::error::{HullError, HullResult};
use crate::frame::PlaneFrame;
use crate::predicates::{approx_zero, dedup_points, dedup_points_2d};
use config::constants::{COPLANARITY_EPSILON, DISTANCE_EPSILON};
use glam::{DVec2, DVec3};

// =============================================================================
// RESULT TYPE
// =============================================================================

/// An ordered convex perimeter with an inside test.
///
/// The perimeter is a subsequence of the (deduplicated) input points in
/// counter-clockwise cyclic order. A hull built from 3D input carries
/// the plane frame used to flatten it; a hull built from native 2D input
/// carries none and lifts onto Z=0.
#[derive(Debug, Clone)]
pub struct PlanarHull {
    perimeter: Vec<DVec2>,
    frame: Option<PlaneFrame>,
}

impl PlanarHull {
    /// The perimeter points in counter-clockwise order.
    #[inline]
    pub fn perimeter(&self) -> &[DVec2] {
        &self.perimeter
    }

    /// Number of perimeter points.
    #[inline]
    pub fn len(&self) -> usize {
        self.perimeter.len()
    }

    /// True if the hull has no points at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.perimeter.is_empty()
    }

    /// The perimeter lifted back into 3D.
    ///
    /// Hulls built from 2D input lift onto the Z=0 plane.
    pub fn perimeter_3d(&self) -> Vec<DVec3> {
        let frame = self.frame.unwrap_or_else(PlaneFrame::identity);
        self.perimeter.iter().map(|&p| frame.lift(p)).collect()
    }

    /// True if a 2D point lies inside or on the perimeter.
    ///
    /// A point is inside when it sits on the inward side of every
    /// consecutive perimeter edge, within the distance tolerance.
    /// Degenerate perimeters degrade gracefully: a single point contains
    /// only itself, a segment contains points on the segment.
    pub fn contains(&self, point: DVec2) -> bool {
        match self.perimeter.len() {
            0 => false,
            1 => approx_zero((point - self.perimeter[0]).length()),
            2 => {
                let (a, b) = (self.perimeter[0], self.perimeter[1]);
                let length = (b - a).length();
                let t = (point - a).dot(b - a) / (length * length);
                let on_segment = (-DISTANCE_EPSILON..=1.0 + DISTANCE_EPSILON).contains(&t);
                on_segment && approx_zero(signed_side(a, b, point).abs() / length)
            }
            n => {
                // CCW perimeter: inside points sit on the left of every edge.
                for i in 0..n {
                    let a = self.perimeter[i];
                    let b = self.perimeter[(i + 1) % n];
                    if signed_side(a, b, point) / (b - a).length() < -DISTANCE_EPSILON {
                        return false;
                    }
                }
                true
            }
        }
    }

    /// True if a 3D point lies on the hull's plane and inside the
    /// perimeter.
    pub fn contains_3d(&self, point: DVec3) -> bool {
        let frame = self.frame.unwrap_or_else(PlaneFrame::identity);
        frame.distance_from_plane(point).abs() <= COPLANARITY_EPSILON
            && self.contains(frame.project(point))
    }
}

// =============================================================================
// 2D QUICKHULL
// =============================================================================

/// Twice the signed area of the triangle (a, b, p).
///
/// Positive when `p` lies to the left of the directed line a→b.
#[inline]
fn signed_side(a: DVec2, b: DVec2, p: DVec2) -> f64 {
    (b - a).perp_dot(p - a)
}

/// Recursively expands the hull between `a` and `b` with the points
/// strictly left of the directed baseline, appending interior-to-hull
/// points in perimeter order (exclusive of both endpoints).
fn expand(a: DVec2, b: DVec2, candidates: &[DVec2], out: &mut Vec<DVec2>) {
    let baseline = (b - a).length();
    let left: Vec<DVec2> = candidates
        .iter()
        .copied()
        .filter(|&p| signed_side(a, b, p) / baseline > DISTANCE_EPSILON)
        .collect();

    if left.len() == 1 {
        out.push(left[0]);
        return;
    }

    // Farthest from the baseline is always on the hull.
    let farthest = left.iter().copied().max_by(|&p, &q| {
        signed_side(a, b, p)
            .partial_cmp(&signed_side(a, b, q))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    if let Some(farthest) = farthest {
        expand(a, farthest, &left, out);
        out.push(farthest);
        expand(farthest, b, &left, out);
    }
}

/// Builds the convex hull of a set of 2D points.
///
/// Duplicate points are merged first. Degenerate inputs degrade to
/// smaller hulls rather than failing: an empty input yields an empty
/// perimeter, a single point yields itself, collinear points yield the
/// two extreme points.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use hull_mesh::convex_hull_2d;
///
/// let points = vec![
///     DVec2::new(0.0, 0.0),
///     DVec2::new(1.0, 0.0),
///     DVec2::new(1.0, 1.0),
///     DVec2::new(0.0, 1.0),
///     DVec2::new(0.5, 0.5),
/// ];
/// let hull = convex_hull_2d(&points);
/// assert_eq!(hull.len(), 4);
/// assert!(hull.contains(DVec2::new(0.5, 0.5)));
/// ```
pub fn convex_hull_2d(points: &[DVec2]) -> PlanarHull {
    let unique = dedup_points_2d(points);
    PlanarHull {
        perimeter: hull_perimeter(&unique),
        frame: None,
    }
}

fn hull_perimeter(unique: &[DVec2]) -> Vec<DVec2> {
    if unique.len() <= 2 {
        return unique.to_vec();
    }

    // Lexicographic X extremes are always on the hull.
    let mut min = unique[0];
    let mut max = unique[0];
    for &p in &unique[1..] {
        if (p.x, p.y) < (min.x, min.y) {
            min = p;
        }
        if (p.x, p.y) > (max.x, max.y) {
            max = p;
        }
    }

    let mut perimeter = Vec::with_capacity(unique.len());
    perimeter.push(min);
    expand(min, max, unique, &mut perimeter);
    perimeter.push(max);
    expand(max, min, unique, &mut perimeter);

    // Expansion walks the boundary clockwise; flip to counter-clockwise
    // so the inside test can treat "left of every edge" as inside.
    if signed_area(&perimeter) < 0.0 {
        perimeter.reverse();
    }
    perimeter
}

/// Twice the signed area of a closed polygon (shoelace formula).
fn signed_area(perimeter: &[DVec2]) -> f64 {
    let n = perimeter.len();
    (0..n)
        .map(|i| perimeter[i].perp_dot(perimeter[(i + 1) % n]))
        .sum()
}

// =============================================================================
// COPLANAR 3D ENTRY POINT
// =============================================================================

/// Builds the convex hull of a coplanar 3D point set.
///
/// The common plane is discovered by scanning for a first direction and
/// a second non-collinear one; every remaining point must then lie
/// within [`COPLANARITY_EPSILON`] of that plane or the call fails with
/// [`HullError::NotCoplanar`]. Collinear and coincident inputs have a
/// degenerate plane; any plane containing the points serves, so a
/// perpendicular axis stands in for the missing second direction.
///
/// The returned hull remembers the flattening frame: `perimeter_3d`
/// lifts the perimeter back onto the original plane, and `contains_3d`
/// classifies arbitrary 3D query points.
pub fn convex_hull_of_coplanar(points: &[DVec3]) -> HullResult<PlanarHull> {
    let unique = dedup_points(points);
    if unique.is_empty() {
        return Ok(PlanarHull {
            perimeter: Vec::new(),
            frame: None,
        });
    }

    let origin = unique[0];
    let first = unique[1..]
        .iter()
        .map(|&p| p - origin)
        .find(|d| d.length() > DISTANCE_EPSILON);

    let normal = match first {
        None => DVec3::Z, // single point, any plane through it
        Some(u) => {
            let second = unique[1..]
                .iter()
                .map(|&p| p - origin)
                .map(|d| u.cross(d))
                .find(|n| n.length() > DISTANCE_EPSILON);
            match second {
                Some(n) => n,
                // All collinear: pick any direction perpendicular to u.
                None => {
                    let axis = if u.x.abs() < u.y.abs() { DVec3::X } else { DVec3::Y };
                    u.cross(axis)
                }
            }
        }
    };

    let unit_normal = normal.normalize();
    for &p in &unique {
        let offset = unit_normal.dot(p - origin);
        if offset.abs() > COPLANARITY_EPSILON {
            return Err(HullError::not_coplanar(format!(
                "point ({}, {}, {}) lies {offset:.3e} off the common plane",
                p.x, p.y, p.z
            )));
        }
    }

    let frame = PlaneFrame::from_normal(origin, unit_normal);
    log::trace!(
        "planar hull: {} unique points verified coplanar, normal ({:.3}, {:.3}, {:.3})",
        unique.len(),
        unit_normal.x,
        unit_normal.y,
        unit_normal.z
    );
    let projected: Vec<DVec2> = unique.iter().map(|&p| frame.project(p)).collect();
    Ok(PlanarHull {
        perimeter: hull_perimeter(&projected),
        frame: Some(frame),
    })
}
