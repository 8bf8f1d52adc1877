//! Tests for the triangle model.

use super::*;
use approx::assert_relative_eq;

fn unit_right_triangle_points() -> Vec<DVec3> {
    vec![DVec3::ZERO, DVec3::X, DVec3::Y]
}

// =============================================================================
// SYMBOLIC ADDRESSING
// =============================================================================

#[test]
fn test_edge_endpoints_and_opposites() {
    assert_eq!(
        TriangleEdge::Edge01.endpoints(),
        (TriangleCorner::Corner0, TriangleCorner::Corner1)
    );
    assert_eq!(TriangleEdge::Edge01.opposite_corner(), TriangleCorner::Corner2);
    assert_eq!(TriangleEdge::Edge12.opposite_corner(), TriangleCorner::Corner0);
    assert_eq!(TriangleEdge::Edge20.opposite_corner(), TriangleCorner::Corner1);
}

#[test]
fn test_common_corner() {
    let tri = VertexTriangle::new(DVec3::ZERO, DVec3::X, DVec3::Y);
    assert_eq!(
        tri.common_point(TriangleEdge::Edge01, TriangleEdge::Edge12),
        DVec3::X
    );
    assert_eq!(
        tri.common_point(TriangleEdge::Edge20, TriangleEdge::Edge01),
        DVec3::ZERO
    );
}

#[test]
#[should_panic(expected = "common corner")]
fn test_common_corner_same_edge_panics() {
    let tri = VertexTriangle::new(DVec3::ZERO, DVec3::X, DVec3::Y);
    let _ = tri.common_point(TriangleEdge::Edge01, TriangleEdge::Edge01);
}

// =============================================================================
// VERTEX TRIANGLE
// =============================================================================

#[test]
fn test_vertex_triangle_derived_geometry() {
    let mut tri = VertexTriangle::new(DVec3::ZERO, DVec3::X, DVec3::Y);
    assert_eq!(tri.normal(), DVec3::Z); // |cross| = 2 * area
    assert_eq!(tri.unit_normal(), DVec3::Z);
    assert_relative_eq!(tri.area(), 0.5);
    assert_relative_eq!(tri.plane_distance(), 0.0);
}

#[test]
fn test_vertex_triangle_plane_distance() {
    let mut tri = VertexTriangle::new(
        DVec3::new(0.0, 0.0, 3.0),
        DVec3::new(1.0, 0.0, 3.0),
        DVec3::new(0.0, 1.0, 3.0),
    );
    assert_relative_eq!(tri.plane_distance(), 3.0);
}

#[test]
fn test_vertex_mutation_invalidates_cache() {
    let mut tri = VertexTriangle::new(DVec3::ZERO, DVec3::X, DVec3::Y);
    assert_eq!(tri.unit_normal(), DVec3::Z);

    // Flipping the winding must flip the recomputed normal.
    tri.set_vertex(TriangleCorner::Corner2, -DVec3::Y);
    assert_eq!(tri.unit_normal(), -DVec3::Z);
}

#[test]
fn test_degenerate_triangle_has_zero_normal() {
    // Collinear vertices: no well-defined plane, no error.
    let mut tri = VertexTriangle::new(DVec3::ZERO, DVec3::X, DVec3::X * 2.0);
    assert_eq!(tri.normal(), DVec3::ZERO);
    assert_eq!(tri.unit_normal(), DVec3::ZERO);
    assert_relative_eq!(tri.area(), 0.0);
}

#[test]
fn test_vertex_triangle_edge_accessors() {
    let tri = VertexTriangle::new(DVec3::ZERO, DVec3::X, DVec3::Y);
    assert_eq!(tri.edge_point(TriangleEdge::Edge01, false), DVec3::ZERO);
    assert_eq!(tri.edge_point(TriangleEdge::Edge01, true), DVec3::X);
    assert_eq!(
        tri.edge_midpoint(TriangleEdge::Edge12),
        DVec3::new(0.5, 0.5, 0.0)
    );
    assert_relative_eq!(tri.edge_length(TriangleEdge::Edge12), 2.0_f64.sqrt());
    assert_eq!(tri.center_point(), DVec3::new(1.0 / 3.0, 1.0 / 3.0, 0.0));
}

// =============================================================================
// INDEXED TRIANGLE
// =============================================================================

#[test]
fn test_indexed_triangle_eager_geometry() {
    let points = unit_right_triangle_points();
    let tri = IndexedTriangle::new(0, 1, 2, &points, 0);
    assert_eq!(tri.indices(), [0, 1, 2]);
    assert_eq!(tri.unit_normal(), DVec3::Z);
    assert_relative_eq!(tri.area(), 0.5);
    assert!(!tri.is_degenerate());
}

#[test]
fn test_indexed_triangle_signed_distance() {
    let points = unit_right_triangle_points();
    let tri = IndexedTriangle::new(0, 1, 2, &points, 0);
    assert_relative_eq!(tri.signed_distance(DVec3::new(0.2, 0.2, 2.0)), 2.0);
    assert_relative_eq!(tri.signed_distance(DVec3::new(0.2, 0.2, -1.5)), -1.5);
}

#[test]
fn test_indexed_triangle_edge_accessors() {
    let points = unit_right_triangle_points();
    let tri = IndexedTriangle::new(0, 1, 2, &points, 0);
    assert_eq!(tri.edge_endpoints(TriangleEdge::Edge20), (2, 0));
    assert_eq!(tri.edge_point(TriangleEdge::Edge12, true), 2);
    assert_eq!(
        tri.common_index(TriangleEdge::Edge01, TriangleEdge::Edge12),
        1
    );
    assert_eq!(tri.edge_between(2, 1), Some(TriangleEdge::Edge12));
    assert_eq!(tri.edge_between(0, 5), None);
    assert_relative_eq!(tri.edge_length(TriangleEdge::Edge01, &points), 1.0);
}

#[test]
fn test_contains_projected_inside_and_outside() {
    let points = unit_right_triangle_points();
    let tri = IndexedTriangle::new(0, 1, 2, &points, 0);

    // Interior point, including one lifted off the plane.
    assert!(tri.contains_projected(DVec3::new(0.25, 0.25, 0.0), &points));
    assert!(tri.contains_projected(DVec3::new(0.25, 0.25, 5.0), &points));

    // Outside the footprint.
    assert!(!tri.contains_projected(DVec3::new(1.0, 1.0, 0.0), &points));
    assert!(!tri.contains_projected(DVec3::new(-0.1, 0.5, 0.0), &points));
}

#[test]
fn test_contains_projected_on_edge() {
    let points = unit_right_triangle_points();
    let tri = IndexedTriangle::new(0, 1, 2, &points, 0);
    assert!(tri.contains_projected(DVec3::new(0.5, 0.0, 0.0), &points));
    assert!(tri.contains_projected(DVec3::new(0.5, 0.5, 0.0), &points));
}

#[test]
fn test_degenerate_indexed_triangle_contains_nothing() {
    let points = vec![DVec3::ZERO, DVec3::X, DVec3::X * 2.0];
    let tri = IndexedTriangle::new(0, 1, 2, &points, 0);
    assert!(tri.is_degenerate());
    assert!(!tri.contains_projected(DVec3::X, &points));
}

#[test]
fn test_creation_token_ordering() {
    let points = unit_right_triangle_points();
    let first = IndexedTriangle::new(0, 1, 2, &points, 0);
    let second = IndexedTriangle::new(2, 1, 0, &points, 1);
    assert!(first < second);

    let mut sorted = vec![second.clone(), first.clone()];
    sorted.sort();
    assert_eq!(sorted[0].seq(), 0);
    assert_eq!(sorted[1].seq(), 1);
}
