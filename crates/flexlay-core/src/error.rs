//! Error types for flexlay.

use crate::measure_spec::MeasureSpecMode;
use thiserror::Error;

/// Invalid layout configuration.
///
/// Raised when a value is constructed or assigned, never during a
/// measure or layout pass.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// A spacing side is negative.
    #[error("Invalid spacing: [{start}, {end}, {top}, {bottom}]")]
    InvalidSpacing {
        start: i32,
        end: i32,
        top: i32,
        bottom: i32,
    },

    /// An Exactly or AtMost spec was given a negative size.
    #[error("Invalid measure spec: {mode:?} with negative size {size}")]
    NegativeMeasureSpec { mode: MeasureSpecMode, size: i32 },

    /// A flex factor is negative, infinite or not a number.
    #[error("Invalid {property}: {value} (must be a finite non-negative number)")]
    InvalidFlexFactor { property: &'static str, value: f32 },

    /// Constraint bounds are negative or inverted.
    #[error("Invalid constraints: width {min_width}..{max_width}, height {min_height}..{max_height}")]
    InvalidConstraints {
        min_width: i32,
        max_width: i32,
        min_height: i32,
        max_height: i32,
    },
}

/// Result alias used throughout flexlay.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Validate a flex grow or shrink factor.
pub fn check_flex_factor(property: &'static str, value: f32) -> Result<f32> {
    if !value.is_finite() || value < 0.0 {
        return Err(LayoutError::InvalidFlexFactor { property, value });
    }
    Ok(value)
}
