//! # Configuration Constants
//!
//! Centralized tolerances for the hull-mesh geometry kernel. Every
//! epsilon used by the convex-hull builders and the triangle/adjacency
//! model is defined here.
//!
//! ## Categories
//!
//! - **Precision**: floating-point comparison tolerances
//! - **Snapshot**: validated tolerance bundle for callers that tune them

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for signed plane-distance comparisons.
///
/// A point whose signed distance from a face plane is within this band is
/// treated as lying on the plane; beyond it, the point is strictly outside
/// (or inside) the half-space. The visibility test of the 3D hull builder
/// counts the on-plane band as visible.
///
/// # Example
///
/// ```rust
/// use config::constants::DISTANCE_EPSILON;
///
/// fn is_outside(signed_distance: f64) -> bool {
///     signed_distance > DISTANCE_EPSILON
/// }
///
/// assert!(!is_outside(1e-12));
/// assert!(is_outside(1e-6));
/// ```
pub const DISTANCE_EPSILON: f64 = 1e-10;

/// Epsilon for point coincidence and deduplication.
///
/// Slightly larger tolerance used when merging nearly-identical points
/// before hull construction. Numerical noise from upstream transforms
/// would otherwise seed the hull with degenerate triangles.
///
/// # Example
///
/// ```rust
/// use config::constants::VERTEX_MERGE_EPSILON;
///
/// fn points_coincide(d: f64) -> bool {
///     d < VERTEX_MERGE_EPSILON
/// }
///
/// assert!(points_coincide(1e-9));
/// ```
pub const VERTEX_MERGE_EPSILON: f64 = 1e-8;

/// Epsilon for coplanarity verification.
///
/// The planar hull path accepts a 3D point set only if every projection
/// residual onto the discovered plane normal stays within this band. The
/// same band guards the axis-spread dimensionality check of the 3D path.
///
/// # Example
///
/// ```rust
/// use config::constants::COPLANARITY_EPSILON;
///
/// let residual: f64 = 1e-10;
/// assert!(residual.abs() < COPLANARITY_EPSILON);
/// ```
pub const COPLANARITY_EPSILON: f64 = 1e-8;

/// Slack applied to barycentric inside-footprint tests.
///
/// A point on a face plane counts as inside the triangular footprint when
/// all three barycentric coordinates are above `-BARYCENTRIC_EPSILON`,
/// so edge-grazing points are absorbed instead of bouncing between faces.
///
/// # Example
///
/// ```rust
/// use config::constants::BARYCENTRIC_EPSILON;
///
/// let coordinate: f64 = -1e-12;
/// assert!(coordinate >= -BARYCENTRIC_EPSILON);
/// ```
pub const BARYCENTRIC_EPSILON: f64 = 1e-9;

// =============================================================================
// TOLERANCE SNAPSHOT
// =============================================================================

/// Immutable snapshot of the kernel tolerances for callers that tune them.
///
/// # Example
///
/// ```rust
/// use config::constants::Tolerances;
///
/// let tolerances = Tolerances::default();
/// assert!(tolerances.distance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    /// Signed plane-distance band.
    pub distance: f64,
    /// Coplanarity / dimensionality band.
    pub coplanarity: f64,
}

impl Tolerances {
    /// Builds a tolerance snapshot, rejecting non-positive values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use config::constants::Tolerances;
    ///
    /// let tolerances = Tolerances::new(1e-9, 1e-7).expect("valid tolerances");
    /// assert_eq!(tolerances.coplanarity, 1e-7);
    /// ```
    pub fn new(distance: f64, coplanarity: f64) -> Result<Self, ConfigError> {
        if distance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(distance));
        }
        if coplanarity <= 0.0 {
            return Err(ConfigError::InvalidTolerance(coplanarity));
        }
        Ok(Self {
            distance,
            coplanarity,
        })
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            distance: DISTANCE_EPSILON,
            coplanarity: COPLANARITY_EPSILON,
        }
    }
}

/// Error returned when invalid tolerance values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when a tolerance is zero or negative.
    InvalidTolerance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
