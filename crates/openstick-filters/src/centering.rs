//! Centering Filters
//!
//! This module provides the three centering behaviors of the axis engine:
//! smart centering (per-tick spring return inside a radius), hard
//! centering (fixed-step recovery outside a range, gated by stillness),
//! and soft centering (fixed-step decay while a modifier key is held).

/// State for the smart-centering controller.
///
/// Pulls small deviations back toward center every tick, emulating a
/// spring return that is active only inside `radius` of center.
///
/// # RT Safety
///
/// - `#[repr(C)]` for stable ABI
/// - No heap allocations
/// - O(1) time complexity
/// - Bounded execution time
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CenteringState {
    /// Magnitude below which the decay applies.
    pub radius: i32,
    /// Per-tick decay amount.
    pub speed: i32,
}

impl CenteringState {
    /// Create a new smart-centering state.
    pub fn new(radius: i32, speed: i32) -> Self {
        Self { radius, speed }
    }
}

/// Smart-centering filter - per-tick decay toward zero inside the radius.
///
/// If `0 < value < radius` the value is reduced by `speed`; if
/// `-radius < value < 0` it is increased by `speed`; otherwise it is
/// left unchanged (including at exactly zero and at or beyond the
/// radius). A value smaller than `speed` overshoots zero and oscillates
/// until new input moves it; this matches the reference behavior.
///
/// # RT Safety
///
/// - No heap allocations
/// - O(1) time complexity
/// - Bounded execution time
///
/// # Arguments
///
/// * `value` - The axis value to update (modified in place)
/// * `state` - The centering state
///
/// # Example
///
/// ```
/// use openstick_filters::prelude::*;
///
/// let state = CenteringState::new(3000, 25);
/// let mut value = 100;
///
/// smart_centering_filter(&mut value, &state);
/// assert_eq!(value, 75);
/// ```
#[inline]
pub fn smart_centering_filter(value: &mut i32, state: &CenteringState) {
    if *value > 0 && *value < state.radius {
        *value -= state.speed;
    } else if *value < 0 && *value > -state.radius {
        *value += state.speed;
    }
}

/// State for stillness-gated hard centering of relative axes.
///
/// # RT Safety
///
/// - `#[repr(C)]` for stable ABI
/// - No heap allocations
/// - O(1) time complexity
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HardCenteringState {
    /// Magnitude the value must exceed before a recovery step applies.
    pub range: i32,
    /// Size of one recovery step.
    pub speed: i32,
}

impl HardCenteringState {
    /// Create a new hard-centering state.
    pub fn new(range: i32, speed: i32) -> Self {
        Self { range, speed }
    }
}

/// Hard-centering filter - one fixed recovery step outside the range.
///
/// If `value > range` the value is reduced by `speed`; if
/// `value < -range` it is increased by `speed`; inside `[-range, range]`
/// it is untouched. The step is unconditional once taken, so a value
/// just past the range may land well inside it (or past zero); decay
/// stops on the first tick the value is back inside the range. The
/// caller gates this filter on stillness detection.
///
/// # Example
///
/// ```
/// use openstick_filters::prelude::*;
///
/// let state = HardCenteringState::new(450, 500);
/// let mut value = 600;
///
/// hard_centering_filter(&mut value, &state);
/// assert_eq!(value, 100);
///
/// hard_centering_filter(&mut value, &state);
/// assert_eq!(value, 100); // inside the range, no further decay
/// ```
#[inline]
pub fn hard_centering_filter(value: &mut i32, state: &HardCenteringState) {
    if *value > state.range {
        *value -= state.speed;
    } else if *value < -state.range {
        *value += state.speed;
    }
}

/// Soft-centering filter - fixed-step decay with no radius.
///
/// Applied every tick a designated modifier key is held; independent of
/// the smart-centering radius logic. Like the other centering filters a
/// value smaller than `step` overshoots zero.
///
/// # Example
///
/// ```
/// use openstick_filters::prelude::*;
///
/// let mut value = 250;
///
/// soft_centering_filter(&mut value, 100);
/// assert_eq!(value, 150);
/// ```
#[inline]
pub fn soft_centering_filter(value: &mut i32, step: i32) {
    if *value > 0 {
        *value -= step;
    } else if *value < 0 {
        *value += step;
    }
}
