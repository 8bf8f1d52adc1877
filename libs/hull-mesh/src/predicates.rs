//! # Comparison Predicates
//!
//! Epsilon-tolerant comparisons over scalars and points. The hull
//! builders never compare floating-point values exactly; every geometric
//! branch goes through these predicates or the constants behind them.

use config::constants::{DISTANCE_EPSILON, VERTEX_MERGE_EPSILON};
use glam::{DVec2, DVec3};

/// Returns true if two scalars are equal within the distance tolerance.
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < DISTANCE_EPSILON
}

/// Returns true if a scalar is zero within the distance tolerance.
#[inline]
pub fn approx_zero(x: f64) -> bool {
    x.abs() < DISTANCE_EPSILON
}

/// Returns true if two points coincide within the merge tolerance.
#[inline]
pub fn points_coincident(a: DVec3, b: DVec3) -> bool {
    (a - b).length_squared() < VERTEX_MERGE_EPSILON * VERTEX_MERGE_EPSILON
}

/// Removes near-duplicate points, keeping first occurrences in order.
///
/// Quadratic scan; hull inputs are caller-controlled and the builders
/// run it once per call.
pub fn dedup_points(points: &[DVec3]) -> Vec<DVec3> {
    let mut unique: Vec<DVec3> = Vec::with_capacity(points.len());
    for &p in points {
        if !unique.iter().any(|&u| points_coincident(u, p)) {
            unique.push(p);
        }
    }
    unique
}

/// Removes near-duplicate 2D points, keeping first occurrences in order.
pub fn dedup_points_2d(points: &[DVec2]) -> Vec<DVec2> {
    let mut unique: Vec<DVec2> = Vec::with_capacity(points.len());
    for &p in points {
        if !unique
            .iter()
            .any(|&u| (u - p).length_squared() < VERTEX_MERGE_EPSILON * VERTEX_MERGE_EPSILON)
        {
            unique.push(p);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(1.0, 1.0 + 1e-12));
        assert!(!approx_eq(1.0, 1.0 + 1e-6));
    }

    #[test]
    fn test_approx_zero() {
        assert!(approx_zero(-1e-12));
        assert!(!approx_zero(1e-6));
    }

    #[test]
    fn test_points_coincident() {
        let a = DVec3::new(1.0, 2.0, 3.0);
        let b = a + DVec3::splat(1e-10);
        assert!(points_coincident(a, b));
        assert!(!points_coincident(a, a + DVec3::X));
    }

    #[test]
    fn test_dedup_points_keeps_order() {
        let points = vec![
            DVec3::ZERO,
            DVec3::X,
            DVec3::ZERO + DVec3::splat(1e-12),
            DVec3::Y,
        ];
        let unique = dedup_points(&points);
        assert_eq!(unique, vec![DVec3::ZERO, DVec3::X, DVec3::Y]);
    }

    #[test]
    fn test_dedup_points_2d() {
        let points = vec![DVec2::ZERO, DVec2::X, DVec2::new(1e-12, 0.0)];
        let unique = dedup_points_2d(&points);
        assert_eq!(unique.len(), 2);
    }
}
