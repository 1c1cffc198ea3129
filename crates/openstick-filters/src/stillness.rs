//! Stillness Gate
//!
//! This module detects whether the pointer has gone still by sampling
//! cumulative motion at two cadences, gating the hard-centering of
//! relative axes.

/// State for the stillness gate.
///
/// Two running totals accumulate the same per-tick delta-x; each is
/// sampled into its own snapshot on an independent cadence (every
/// `slow_period` ticks and every `fast_period` ticks). The gate reads
/// still exactly when the two snapshots are equal.
///
/// Both totals accumulate the identical delta stream; the asymmetry is
/// purely in the sampling cadence. This mirrors the reference behavior,
/// including two artifacts: the gate reads still at startup (both
/// snapshots zero), and momentarily when the two cadences coincide
/// during motion. After the pointer stops, both snapshots converge on
/// the frozen total within one slow period, and the gate then holds
/// still until motion resumes.
///
/// # RT Safety
///
/// - `#[repr(C)]` for stable ABI
/// - No heap allocations
/// - O(1) time complexity
/// - Bounded execution time
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StillnessState {
    /// Sampling cadence of the slow snapshot, in ticks.
    pub slow_period: u32,
    /// Sampling cadence of the fast snapshot, in ticks.
    pub fast_period: u32,
    /// Running total sampled on the slow cadence.
    pub window_slow: i64,
    /// Running total sampled on the fast cadence.
    pub window_fast: i64,
    /// Last value sampled from the slow window.
    pub snapshot_slow: i64,
    /// Last value sampled from the fast window.
    pub snapshot_fast: i64,
    /// Ticks observed since start (or last reset).
    pub ticks: u64,
}

impl StillnessState {
    /// Create a new stillness gate with the given sampling cadences.
    ///
    /// # Example
    ///
    /// ```
    /// use openstick_filters::StillnessState;
    ///
    /// let gate = StillnessState::new(60, 30);
    /// assert!(gate.is_still()); // both snapshots start at zero
    /// ```
    pub fn new(slow_period: u32, fast_period: u32) -> Self {
        Self {
            slow_period,
            fast_period,
            window_slow: 0,
            window_fast: 0,
            snapshot_slow: 0,
            snapshot_fast: 0,
            ticks: 0,
        }
    }

    /// Create a gate with the reference cadences (60 and 30 ticks).
    pub fn default_windows() -> Self {
        Self::new(60, 30)
    }

    /// Feed one tick of pointer motion into both windows.
    ///
    /// Snapshots are updated only on their own cadence boundary and
    /// otherwise hold their last value.
    #[inline]
    pub fn tick(&mut self, delta_x: i32) {
        self.ticks = self.ticks.wrapping_add(1);
        self.window_slow += i64::from(delta_x);
        self.window_fast += i64::from(delta_x);

        if self.slow_period != 0 && self.ticks % u64::from(self.slow_period) == 0 {
            self.snapshot_slow = self.window_slow;
        }
        if self.fast_period != 0 && self.ticks % u64::from(self.fast_period) == 0 {
            self.snapshot_fast = self.window_fast;
        }
    }

    /// Whether the pointer is currently detected as still.
    #[inline]
    pub fn is_still(&self) -> bool {
        self.snapshot_slow == self.snapshot_fast
    }

    /// Reset all windows, snapshots and the tick counter to zero.
    pub fn reset(&mut self) {
        self.window_slow = 0;
        self.window_fast = 0;
        self.snapshot_slow = 0;
        self.snapshot_fast = 0;
        self.ticks = 0;
    }
}

impl Default for StillnessState {
    fn default() -> Self {
        Self::default_windows()
    }
}
