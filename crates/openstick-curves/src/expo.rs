//! Exponential (power-law) shaping curve with endpoint normalization.

use serde::{Deserialize, Serialize};

use crate::error::CurveError;

/// Sign-preserving power curve normalized to preserve the range endpoints.
///
/// Maps an integer axis value in `[-range_max, range_max]` through
/// `|value|^exponent / ratio` with the sign reapplied before flooring,
/// where `ratio = range_max^exponent / range_max`. The normalization
/// guarantees `shape(range_max) == range_max` within floor rounding.
///
/// Exponents above 1 compress the response near center (fine aim) and
/// expand it toward the extremes.
///
/// # RT Safety
///
/// - `shape()`: no heap allocations, O(1), bounded execution time
/// - Construction validates once; shaping never fails
///
/// # Example
///
/// ```
/// use openstick_curves::ExpoCurve;
///
/// let curve = ExpoCurve::new(1.35, 16384)?;
///
/// assert_eq!(curve.shape(0), 0);
/// assert!(curve.shape(8192) > 0);
/// assert!(curve.shape(-8192) < 0);
/// assert!((curve.shape(16384) - 16384).abs() <= 1);
/// # Ok::<(), openstick_curves::CurveError>(())
/// ```
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ExpoCurve {
    exponent: f64,
    ratio: f64,
    range_max: i32,
}

impl ExpoCurve {
    /// Create a new power curve normalized over `[-range_max, range_max]`.
    ///
    /// # Arguments
    ///
    /// * `exponent` - The shaping exponent (must be > 0 and finite)
    /// * `range_max` - Positive endpoint of the axis range (must be > 0)
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidConfiguration`] if the exponent is
    /// non-finite or not strictly positive, or if `range_max <= 0`.
    /// A zero or negative exponent would make the normalization ratio
    /// degenerate, so it is rejected here rather than surfaced per tick.
    pub fn new(exponent: f64, range_max: i32) -> Result<Self, CurveError> {
        if !exponent.is_finite() {
            return Err(CurveError::InvalidConfiguration(
                "Curve exponent must be finite".to_string(),
            ));
        }
        if exponent <= 0.0 {
            return Err(CurveError::InvalidConfiguration(format!(
                "Curve exponent must be > 0, got {}",
                exponent
            )));
        }
        if range_max <= 0 {
            return Err(CurveError::InvalidConfiguration(format!(
                "Curve range must be > 0, got {}",
                range_max
            )));
        }

        let max = f64::from(range_max);
        let ratio = max.powf(exponent) / max;
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(CurveError::InvalidConfiguration(format!(
                "Normalization ratio is degenerate for exponent {} over range {}",
                exponent, range_max
            )));
        }

        Ok(Self {
            exponent,
            ratio,
            range_max,
        })
    }

    /// The shaping exponent.
    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    /// The precomputed normalization ratio, `range_max^exponent / range_max`.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Positive endpoint of the normalization range.
    pub fn range_max(&self) -> i32 {
        self.range_max
    }

    /// Shape an axis value through the power curve.
    ///
    /// Computes the magnitude curve in double precision, reapplies the
    /// sign, then floors the signed result (floor toward negative
    /// infinity on the negative side). `shape(0)` is exactly `0`; there
    /// is no stale-value carryover for a zero input. The result is
    /// clamped to `[-range_max, range_max]` to absorb the last-ulp
    /// rounding of the normalization division.
    #[inline]
    pub fn shape(&self, value: i32) -> i32 {
        if value == 0 {
            return 0;
        }

        let magnitude = f64::from(value.unsigned_abs());
        let curved = magnitude.powf(self.exponent) / self.ratio;
        let signed = if value < 0 { -curved } else { curved };

        (signed.floor() as i32).clamp(-self.range_max, self.range_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RANGE_MAX: i32 = 16384;

    fn mouse_curve() -> ExpoCurve {
        match ExpoCurve::new(1.35, RANGE_MAX) {
            Ok(curve) => curve,
            Err(e) => panic!("curve construction failed: {:?}", e),
        }
    }

    #[test]
    fn test_new_valid() -> Result<(), CurveError> {
        let curve = ExpoCurve::new(1.6, RANGE_MAX)?;
        assert!((curve.exponent() - 1.6).abs() < 1e-12);
        assert!(curve.ratio() > 0.0);
        assert_eq!(curve.range_max(), RANGE_MAX);
        Ok(())
    }

    #[test]
    fn test_new_invalid_zero_exponent() {
        let result = ExpoCurve::new(0.0, RANGE_MAX);
        match result {
            Err(CurveError::InvalidConfiguration(msg)) => {
                assert!(msg.contains("must be > 0"));
            }
            Ok(_) => panic!("expected InvalidConfiguration error"),
        }
    }

    #[test]
    fn test_new_invalid_negative_exponent() {
        assert!(ExpoCurve::new(-1.35, RANGE_MAX).is_err());
    }

    #[test]
    fn test_new_invalid_nan_exponent() {
        assert!(ExpoCurve::new(f64::NAN, RANGE_MAX).is_err());
    }

    #[test]
    fn test_new_invalid_infinite_exponent() {
        assert!(ExpoCurve::new(f64::INFINITY, RANGE_MAX).is_err());
    }

    #[test]
    fn test_new_invalid_range() {
        assert!(ExpoCurve::new(1.35, 0).is_err());
        assert!(ExpoCurve::new(1.35, -100).is_err());
    }

    #[test]
    fn test_shape_zero_is_zero() {
        assert_eq!(mouse_curve().shape(0), 0);
    }

    #[test]
    fn test_shape_preserves_sign() {
        let curve = mouse_curve();

        for value in [1, 20, 450, 3000, 6000, RANGE_MAX] {
            assert!(curve.shape(value) >= 0, "shape({}) lost sign", value);
            assert!(curve.shape(-value) <= 0, "shape({}) lost sign", -value);
        }
    }

    #[test]
    fn test_shape_endpoints_normalized() {
        let curve = mouse_curve();

        assert!((curve.shape(RANGE_MAX) - RANGE_MAX).abs() <= 1);
        assert!((curve.shape(-RANGE_MAX) + RANGE_MAX).abs() <= 1);
    }

    #[test]
    fn test_shape_output_in_range() {
        let curve = mouse_curve();

        for value in (-RANGE_MAX..=RANGE_MAX).step_by(97) {
            let curved = curve.shape(value);
            assert!(
                (-RANGE_MAX..=RANGE_MAX).contains(&curved),
                "shape({}) = {} out of range",
                value,
                curved
            );
        }
    }

    #[test]
    fn test_shape_compresses_midrange_for_exponent_above_one() {
        let curve = mouse_curve();

        // With exponent > 1 the curve sits below identity away from the
        // endpoints.
        let curved = curve.shape(6000);
        assert!(curved > 0);
        assert!(curved < 6000, "shape(6000) = {} not compressed", curved);
    }

    #[test]
    fn test_shape_negative_floors_toward_negative_infinity() {
        let curve = mouse_curve();

        // A tiny positive input floors to 0, its mirror floors to -1.
        assert_eq!(curve.shape(1), 0);
        assert_eq!(curve.shape(-1), -1);
    }

    #[test]
    fn test_shape_monotonic_on_positives() {
        let curve = mouse_curve();

        let mut prev = curve.shape(0);
        for value in (0..=RANGE_MAX).step_by(41) {
            let curved = curve.shape(value);
            assert!(
                curved >= prev,
                "shape not monotonic at {}: {} < {}",
                value,
                curved,
                prev
            );
            prev = curved;
        }
    }

    #[test]
    fn test_serialization_round_trip() -> Result<(), CurveError> {
        let curve = ExpoCurve::new(1.35, RANGE_MAX)?;
        let json = serde_json::to_string(&curve)
            .map_err(|e| CurveError::InvalidConfiguration(e.to_string()))?;
        let deserialized: ExpoCurve = serde_json::from_str(&json)
            .map_err(|e| CurveError::InvalidConfiguration(e.to_string()))?;
        assert_eq!(curve, deserialized);
        Ok(())
    }
}
