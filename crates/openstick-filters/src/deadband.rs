//! Deadband Filter
//!
//! Zeroes small-magnitude values to suppress jitter around center.

/// Deadband filter - zero-output region around center.
///
/// Returns `0` if `|value| <= threshold`, else returns `value`
/// unchanged. Applied only at the final output stage, never to the
/// internal accumulators: the centering and curving logic must see the
/// true accumulated value, otherwise the centering thresholds misfire
/// near zero. The pure signature keeps the accumulator untouched by
/// construction.
///
/// # RT Safety
///
/// - No heap allocations
/// - O(1) time complexity
/// - Bounded execution time
///
/// # Example
///
/// ```
/// use openstick_filters::prelude::*;
///
/// assert_eq!(deadband_filter(15, 20), 0);
/// assert_eq!(deadband_filter(-20, 20), 0);
/// assert_eq!(deadband_filter(21, 20), 21);
/// ```
#[inline]
pub fn deadband_filter(value: i32, threshold: i32) -> i32 {
    if value.abs() <= threshold { 0 } else { value }
}
