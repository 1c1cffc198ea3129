//! Filter State Types
//!
//! This module aggregates all filter state types for convenient access.
//! All state types are `#[repr(C)]` for stable ABI and RT-safe usage.

pub use crate::accumulator::AccumulatorState;
pub use crate::centering::{CenteringState, HardCenteringState};
pub use crate::stillness::StillnessState;

/// Filter trait for common filter operations.
///
/// All filters implement this trait for consistent interface.
pub trait FilterState: Copy + Clone + std::fmt::Debug {
    /// Reset the filter state to initial values.
    fn reset(&mut self);
}

impl FilterState for AccumulatorState {
    fn reset(&mut self) {
        // Accumulator state is pure configuration, nothing to reset
    }
}

impl FilterState for CenteringState {
    fn reset(&mut self) {
        // Centering state is pure configuration, nothing to reset
    }
}

impl FilterState for HardCenteringState {
    fn reset(&mut self) {
        // Hard-centering state is pure configuration, nothing to reset
    }
}

impl FilterState for StillnessState {
    fn reset(&mut self) {
        StillnessState::reset(self);
    }
}
