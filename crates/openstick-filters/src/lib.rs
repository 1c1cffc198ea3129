//! Per-Tick Axis Filters for OpenStick
//!
//! This crate provides the allocation-free filters that turn raw pointer
//! deltas into bounded analog axis values. All filters are designed to
//! run once per 5 ms tick with deterministic, synchronous execution.
//!
//! # Overview
//!
//! The filter set includes:
//! - **Accumulator**: integrates `delta * sensitivity` into a value
//!   clamped to a fixed symmetric range
//! - **Smart Centering**: per-tick spring return toward zero inside a
//!   configurable radius
//! - **Hard Centering**: fixed-step recovery of relative axes outside a
//!   range, gated by stillness detection
//! - **Soft Centering**: fixed-step decay while a modifier key is held
//! - **Deadband**: zero-output region around center, applied only at the
//!   final output stage
//! - **Stillness Gate**: dual-cadence sampling of cumulative motion that
//!   decides whether relative axes may hard-center
//!
//! # RT Safety Guarantees
//!
//! All filter implementations are RT-safe:
//! - No heap allocations in filter hot paths
//! - O(1) time complexity for all operations
//! - Bounded execution time
//! - No syscalls or I/O in filter functions
//! - All state types are `#[repr(C)]` for stable ABI
//!
//! # Example
//!
//! ```
//! use openstick_filters::prelude::*;
//!
//! // Create filter states at initialization time
//! let accumulator = AccumulatorState::new(60, -16384, 16384);
//! let centering = CenteringState::new(3000, 25);
//!
//! // In the tick loop:
//! let mut value = 0;
//! accumulator_filter(&mut value, 10, &accumulator);
//! smart_centering_filter(&mut value, &centering);
//! let output = deadband_filter(value, 20);
//! assert_eq!(output, 575);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod accumulator;
pub mod centering;
pub mod deadband;
pub mod prelude;
pub mod state;
pub mod stillness;

pub use accumulator::{AccumulatorState, accumulator_filter, bounded_add};
pub use centering::{
    CenteringState, HardCenteringState, hard_centering_filter, smart_centering_filter,
    soft_centering_filter,
};
pub use deadband::deadband_filter;
pub use state::FilterState;
pub use stillness::StillnessState;
