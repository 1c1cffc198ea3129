//! Bounded Accumulator Filter
//!
//! This module integrates a raw pointer delta into an axis value that is
//! clamped to a fixed symmetric range.

/// State for the bounded accumulator.
///
/// Holds the per-axis sensitivity and the clamp range. The accumulator
/// runs every tick for every raw axis value, even when the delta is
/// zero (pointer motion is event-driven, so most ticks carry no delta).
///
/// # RT Safety
///
/// - `#[repr(C)]` for stable ABI
/// - No heap allocations
/// - O(1) time complexity
/// - Bounded execution time
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AccumulatorState {
    /// Multiplier applied to each raw delta before integration.
    pub sensitivity: i32,
    /// Lower clamp bound (inclusive).
    pub min: i32,
    /// Upper clamp bound (inclusive).
    pub max: i32,
}

impl AccumulatorState {
    /// Create a new accumulator state.
    ///
    /// # Example
    ///
    /// ```
    /// use openstick_filters::AccumulatorState;
    ///
    /// let state = AccumulatorState::new(60, -16384, 16384);
    /// assert_eq!(state.sensitivity, 60);
    /// ```
    pub fn new(sensitivity: i32, min: i32, max: i32) -> Self {
        Self {
            sensitivity,
            min,
            max,
        }
    }
}

/// Add a raw amount to an axis value, clamped to `[min, max]`.
///
/// The addition is performed in 64-bit arithmetic so that a delta which
/// would overflow the unclamped 32-bit value still lands on the correct
/// bound.
#[inline]
pub fn bounded_add(value: &mut i32, amount: i64, min: i32, max: i32) {
    let next = i64::from(*value) + amount;
    *value = next.clamp(i64::from(min), i64::from(max)) as i32;
}

/// Bounded accumulator - integrates `delta * sensitivity` into the value.
///
/// Computes `value + delta * sensitivity` and clamps the result to the
/// state's `[min, max]` range. The value never leaves the range for any
/// sequence of deltas.
///
/// # RT Safety
///
/// - No heap allocations
/// - O(1) time complexity
/// - Bounded execution time
/// - No syscalls or I/O
///
/// # Arguments
///
/// * `value` - The axis value to update (modified in place)
/// * `delta` - Raw pointer delta for this tick
/// * `state` - The accumulator state
///
/// # Example
///
/// ```
/// use openstick_filters::prelude::*;
///
/// let state = AccumulatorState::new(60, -16384, 16384);
/// let mut value = 0;
///
/// accumulator_filter(&mut value, 100, &state);
/// assert_eq!(value, 6000);
/// ```
#[inline]
pub fn accumulator_filter(value: &mut i32, delta: i32, state: &AccumulatorState) {
    let amount = i64::from(delta) * i64::from(state.sensitivity);
    bounded_add(value, amount, state.min, state.max);
}
