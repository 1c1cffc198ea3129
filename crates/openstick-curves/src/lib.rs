//! Power-Curve Shaping for OpenStick Analog Axes
//!
//! This crate provides the sign-preserving power curve used to shape
//! accumulated pointer motion into analog axis output. Curves are
//! validated and normalized once at engine start; per-tick shaping is
//! allocation-free and never fails.
//!
//! # Overview
//!
//! A shaping curve maps an integer axis value in `[-range_max, range_max]`
//! through `|value|^exponent / ratio`, reapplying the sign before the
//! floor, where `ratio = range_max^exponent / range_max` so that the
//! range endpoints are preserved.
//!
//! # Example
//!
//! ```
//! use openstick_curves::ExpoCurve;
//!
//! // Lightly exponential curve for absolute mouse axes
//! let curve = ExpoCurve::new(1.35, 16384)?;
//!
//! assert_eq!(curve.shape(0), 0);
//! assert!((curve.shape(16384) - 16384).abs() <= 1);
//! # Ok::<(), openstick_curves::CurveError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod expo;

pub use error::CurveError;
pub use expo::ExpoCurve;
