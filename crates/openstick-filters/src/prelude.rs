//! Prelude for the filters crate.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//!
//! ```
//! use openstick_filters::prelude::*;
//!
//! let state = AccumulatorState::new(60, -16384, 16384);
//! let mut value = 0;
//!
//! accumulator_filter(&mut value, 100, &state);
//! assert_eq!(deadband_filter(value, 20), 6000);
//! ```

pub use crate::accumulator::{AccumulatorState, accumulator_filter, bounded_add};
pub use crate::centering::{
    CenteringState, HardCenteringState, hard_centering_filter, smart_centering_filter,
    soft_centering_filter,
};
pub use crate::deadband::deadband_filter;
pub use crate::state::FilterState;
pub use crate::stillness::StillnessState;
