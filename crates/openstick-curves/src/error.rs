//! Error types for curve operations.

use std::fmt;

/// Error type for curve operations.
///
/// Covers the validation errors that can occur when constructing a
/// shaping curve. All of them are configuration-time faults; once a
/// curve is built, shaping never fails.
#[derive(Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Invalid curve configuration.
    ///
    /// This covers errors like:
    /// - Exponent <= 0 or non-finite
    /// - Non-positive normalization range
    InvalidConfiguration(String),
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(msg) => {
                write!(f, "Invalid curve configuration: {}", msg)
            }
        }
    }
}

impl std::error::Error for CurveError {}
