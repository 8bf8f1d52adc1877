//! Tests for the incremental 3D hull builder.

use super::*;
use crate::triangle::TriangleEdge;

fn tetrahedron() -> Vec<DVec3> {
    vec![
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(0.5, 1.0, 0.0),
        DVec3::new(0.5, 0.5, 1.0),
    ]
}

fn cube() -> Vec<DVec3> {
    let mut points = Vec::new();
    for x in [-0.5, 0.5] {
        for y in [-0.5, 0.5] {
            for z in [-0.5, 0.5] {
                points.push(DVec3::new(x, y, z));
            }
        }
    }
    points
}

/// A fixed, irregular cloud with several interior points.
fn scattered_cloud() -> Vec<DVec3> {
    vec![
        DVec3::new(0.1, 0.2, 0.3),
        DVec3::new(2.7, -1.4, 0.8),
        DVec3::new(-1.9, 2.2, -0.6),
        DVec3::new(0.4, -2.8, 1.9),
        DVec3::new(1.3, 1.1, -2.4),
        DVec3::new(-0.7, -0.9, -1.1),
        DVec3::new(2.0, 2.3, 2.1),
        DVec3::new(-2.5, -1.7, 1.4),
        DVec3::new(0.6, 0.1, 0.2),
        DVec3::new(-0.2, 0.8, 0.5),
        DVec3::new(1.8, -0.3, -0.9),
        DVec3::new(-1.1, 1.6, 1.7),
    ]
}

/// Every point of the input must be inside or on the hull.
fn assert_hull_covers(hull: &SolidHull, points: &[DVec3]) {
    for &p in points {
        assert!(hull.contains(p), "input point {p:?} ended up outside");
    }
}

/// Every face must be edge-linked on all three sides, symmetrically.
fn assert_hull_closed(hull: &SolidHull) {
    let arena = hull.arena();
    for (handle, face) in arena.iter() {
        for edge in TriangleEdge::ALL {
            let neighbor = face
                .edge_link(edge)
                .expect("closed hull face with an unlinked edge");
            let back = arena.which_edge(neighbor, handle);
            assert_eq!(arena.get(neighbor).edge_link(back), Some(handle));
        }
    }
}

/// Every face normal must point away from the hull centroid.
fn assert_normals_outward(hull: &SolidHull) {
    let indices = hull.vertex_indices();
    let centroid = indices
        .iter()
        .map(|&i| hull.points()[i as usize])
        .sum::<DVec3>()
        / indices.len() as f64;
    for face in hull.faces() {
        assert!(face.triangle().signed_distance(centroid) < 0.0);
    }
}

// =============================================================================
// BASIC SHAPES
// =============================================================================

#[test]
fn test_tetrahedron_hull() {
    let points = tetrahedron();
    let hull = convex_hull_3d(&points).unwrap();
    assert_eq!(hull.face_count(), 4);
    assert_eq!(hull.vertex_indices().len(), 4);
    assert_hull_covers(&hull, &points);
    assert_hull_closed(&hull);
    assert_normals_outward(&hull);
}

#[test]
fn test_cube_hull() {
    let points = cube();
    let hull = convex_hull_3d(&points).unwrap();
    // Triangulated convex polytope: F = 2V - 4.
    assert_eq!(hull.vertex_indices().len(), 8);
    assert_eq!(hull.face_count(), 12);
    assert_hull_covers(&hull, &points);
    assert_hull_closed(&hull);
    assert_normals_outward(&hull);
}

#[test]
fn test_interior_point_is_absorbed() {
    let mut points = cube();
    points.push(DVec3::ZERO);
    let hull = convex_hull_3d(&points).unwrap();
    assert_eq!(hull.vertex_indices().len(), 8);
    assert_eq!(hull.face_count(), 12);
    assert!(hull.contains(DVec3::ZERO));
}

#[test]
fn test_scattered_cloud_hull() {
    let points = scattered_cloud();
    let hull = convex_hull_3d(&points).unwrap();
    assert_hull_covers(&hull, &points);
    assert_hull_closed(&hull);
    assert_normals_outward(&hull);

    // A clearly interior and a clearly exterior probe.
    assert!(hull.contains(DVec3::new(0.1, 0.1, 0.1)));
    assert!(!hull.contains(DVec3::new(50.0, 0.0, 0.0)));
}

#[test]
fn test_hull_of_hull_is_stable() {
    let hull = convex_hull_3d(&scattered_cloud()).unwrap();
    let vertices: Vec<DVec3> = hull
        .vertex_indices()
        .iter()
        .map(|&i| hull.points()[i as usize])
        .collect();

    let rebuilt = convex_hull_3d(&vertices).unwrap();
    assert_eq!(rebuilt.vertex_indices().len(), vertices.len());
    assert_eq!(rebuilt.face_count(), hull.face_count());
}

#[test]
fn test_every_hull_vertex_touches_at_least_three_faces() {
    let hull = convex_hull_3d(&cube()).unwrap();
    for index in hull.vertex_indices() {
        let incident = hull
            .faces()
            .filter(|face| face.triangle().indices().contains(&index))
            .count();
        assert!(incident >= 3, "vertex {index} touches only {incident} faces");
    }
}

// =============================================================================
// DEGENERATE INPUTS
// =============================================================================

#[test]
fn test_too_few_points() {
    let points = vec![DVec3::ZERO, DVec3::X, DVec3::Y];
    let err = convex_hull_3d(&points).unwrap_err();
    assert!(matches!(
        err,
        HullError::TooFewPoints {
            required: 4,
            actual: 3
        }
    ));
}

#[test]
fn test_duplicates_count_once() {
    // Four slots, but only two distinct positions.
    let points = vec![DVec3::ZERO, DVec3::ZERO, DVec3::X, DVec3::X];
    let err = convex_hull_3d(&points).unwrap_err();
    assert!(matches!(
        err,
        HullError::TooFewPoints {
            required: 4,
            actual: 2
        }
    ));
}

#[test]
fn test_coplanar_points_are_rejected() {
    let points = vec![
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(1.0, 1.0, 0.0),
        DVec3::new(0.5, 0.3, 0.0),
    ];
    let err = convex_hull_3d(&points).unwrap_err();
    assert!(matches!(err, HullError::DegenerateInput { .. }));
}

#[test]
fn test_tilted_coplanar_points_are_rejected() {
    // Nonzero spread on every axis, still a single plane.
    let points = vec![
        DVec3::new(0.0, 0.0, 1.0),
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(-1.0, 1.0, 1.0),
        DVec3::new(1.0, -1.0, 1.0),
    ];
    let err = convex_hull_3d(&points).unwrap_err();
    assert!(matches!(err, HullError::DegenerateInput { .. }));
}

#[test]
fn test_collinear_points_are_rejected() {
    let points = vec![
        DVec3::new(0.0, 1.0, 2.0),
        DVec3::new(1.0, 2.0, 3.0),
        DVec3::new(2.0, 3.0, 4.0),
        DVec3::new(3.0, 4.0, 5.0),
    ];
    let err = convex_hull_3d(&points).unwrap_err();
    assert!(matches!(err, HullError::DegenerateInput { .. }));
}

// =============================================================================
// MESH EXPORT
// =============================================================================

#[test]
fn test_to_mesh_is_compact_and_valid() {
    let mut points = cube();
    points.push(DVec3::ZERO); // interior, must not survive export
    let hull = convex_hull_3d(&points).unwrap();

    let mesh = hull.to_mesh();
    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.triangle_count(), hull.face_count());
    assert!(mesh.validate());
}

#[test]
fn test_to_mesh_preserves_outward_winding() {
    let hull = convex_hull_3d(&tetrahedron()).unwrap();
    let mesh = hull.to_mesh();
    let centroid = mesh.vertices().iter().sum::<DVec3>() / mesh.vertex_count() as f64;
    for i in 0..mesh.triangle_count() {
        let [v0, _, _] = mesh.triangle(i);
        let outward = mesh.face_normal(i).dot(centroid - mesh.vertex(v0));
        assert!(outward < 0.0);
    }
}
