//! # Hull Mesh
//!
//! Convex-hull construction over an adjacency-aware indexed triangle model.
//!
//! ## Architecture
//!
//! ```text
//! point cloud → hull3d (incremental quickhull) → linked indexed triangles
//! planar points → hull2d (planar quickhull)    → ordered perimeter + inside test
//! ```
//!
//! The two builders share the triangle data model: triangles index into a
//! shared point array, and the 3D builder additionally maintains edge/corner
//! adjacency through a handle-based arena for horizon discovery.
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec3;
//! use hull_mesh::convex_hull_3d;
//!
//! let points = vec![
//!     DVec3::new(0.0, 0.0, 0.0),
//!     DVec3::new(1.0, 0.0, 0.0),
//!     DVec3::new(0.0, 1.0, 0.0),
//!     DVec3::new(0.0, 0.0, 1.0),
//! ];
//! let hull = convex_hull_3d(&points).unwrap();
//! assert_eq!(hull.face_count(), 4);
//! ```
//!
//! All computation is synchronous and call-local: each hull build owns its
//! working collections, so independent builds may run on separate threads
//! without shared state.

pub mod error;
pub mod frame;
pub mod hull2d;
pub mod hull3d;
pub mod linked;
pub mod mesh;
pub mod predicates;
pub mod triangle;

pub use error::{HullError, HullResult};
pub use frame::PlaneFrame;
pub use hull2d::{convex_hull_2d, convex_hull_of_coplanar, PlanarHull};
pub use hull3d::{convex_hull_3d, SolidHull};
pub use linked::{LinkedTriangle, TriangleArena, TriangleHandle};
pub use mesh::Mesh;
pub use triangle::{IndexedTriangle, TriangleCorner, TriangleEdge, VertexTriangle};
