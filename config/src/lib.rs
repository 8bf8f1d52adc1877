//! # Config Crate
//!
//! Centralized configuration constants for the hull-mesh geometry kernel.
//! All numeric tolerances are defined here so the kernel crates stay
//! declarative and no epsilon literal is scattered through the algorithms.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::DISTANCE_EPSILON;
//!
//! // Use DISTANCE_EPSILON for signed plane-distance comparisons
//! let distance: f64 = 1e-12;
//! let on_plane = distance.abs() < DISTANCE_EPSILON;
//! assert!(on_plane);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every tolerance defined once, used everywhere
//! - **Tunable**: the epsilons are calibration points, not load-bearing exact
//!   values; property tests in `hull-mesh` pin the observable behavior
//! - **Well-Documented**: every constant has clear documentation

pub mod constants;
