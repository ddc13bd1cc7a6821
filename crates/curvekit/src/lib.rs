//! Core library for evaluating smooth curves through control points.
//!
//! Two independent facilities are provided:
//!
//! - [`akima`]: piecewise cubic Akima interpolation through sorted `(x, y)`
//!   samples, built one interval at a time and chained to its neighbours.
//! - [`bezier`]: point evaluation on Bézier curves of any degree and any
//!   dimensionality, with closed forms for the low degrees.
//!
//! Control points are accepted as any slice whose elements expose their
//! coordinates through `AsRef<[f64]>`, so `[f64; 2]`, `Vec<f64>` and
//! [`point::Point`] all work.
//!
//! ```
//! use curvekit::{akima, bezier};
//!
//! let samples = [[1.0, 1.0], [2.0, 2.0], [3.0, 3.0], [4.0, 4.0], [5.0, 5.0]];
//! let interval = akima::build(&samples, 2.5)?;
//! assert_eq!(interval.point_at(2.5), 2.5);
//!
//! let apex = bezier::evaluate(&[[0.0, 0.0], [1.0, 2.0], [2.0, 0.0]], 0.5);
//! assert_eq!(apex.as_slice(), &[1.0, 1.0]);
//! # Ok::<(), curvekit::error::Error>(())
//! ```

/// Akima interval curves and the five-point slope estimator.
pub mod akima;
/// Bézier point evaluation and Bernstein basis polynomials.
pub mod bezier;
/// Error types used across the crate.
pub mod error;
/// Integer helpers shared by the curve implementations.
pub mod ops;
/// N‑dimensional points and helpers.
pub mod point;

pub use crate::{akima::Interval, point::Point};
