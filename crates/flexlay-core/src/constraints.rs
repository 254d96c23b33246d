//! Box-model constraints and their conversion to and from measure specs.

use crate::error::{LayoutError, Result};
use crate::geometry::Size;
use crate::measure_spec::{MeasureSpec, MeasureSpecMode};

/// Minimum and maximum sizes per dimension.
///
/// A maximum of [`Constraints::INFINITY`] means the dimension is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constraints {
    min_width: i32,
    max_width: i32,
    min_height: i32,
    max_height: i32,
}

impl Constraints {
    /// Marker for an unbounded maximum.
    pub const INFINITY: i32 = i32::MAX;

    /// Create new constraints.
    pub const fn new(min_width: i32, max_width: i32, min_height: i32, max_height: i32) -> Result<Self> {
        if min_width < 0 || min_height < 0 || min_width > max_width || min_height > max_height {
            return Err(LayoutError::InvalidConstraints {
                min_width,
                max_width,
                min_height,
                max_height,
            });
        }
        Ok(Self {
            min_width,
            max_width,
            min_height,
            max_height,
        })
    }

    /// Constraints that allow only the exact size (negative sides become zero).
    #[must_use]
    pub const fn tight(size: Size) -> Self {
        let width = if size.width < 0 { 0 } else { size.width };
        let height = if size.height < 0 { 0 } else { size.height };
        Self {
            min_width: width,
            max_width: width,
            min_height: height,
            max_height: height,
        }
    }

    /// Constraints that allow any size up to the given maximum.
    #[must_use]
    pub const fn loose(size: Size) -> Self {
        let tight = Self::tight(size);
        Self {
            min_width: 0,
            min_height: 0,
            ..tight
        }
    }

    /// Unbounded constraints.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            min_width: 0,
            max_width: Self::INFINITY,
            min_height: 0,
            max_height: Self::INFINITY,
        }
    }

    #[must_use]
    pub const fn min_width(&self) -> i32 {
        self.min_width
    }

    #[must_use]
    pub const fn max_width(&self) -> i32 {
        self.max_width
    }

    #[must_use]
    pub const fn min_height(&self) -> i32 {
        self.min_height
    }

    #[must_use]
    pub const fn max_height(&self) -> i32 {
        self.max_height
    }

    #[must_use]
    pub const fn has_fixed_width(&self) -> bool {
        self.min_width == self.max_width
    }

    #[must_use]
    pub const fn has_fixed_height(&self) -> bool {
        self.min_height == self.max_height
    }

    #[must_use]
    pub const fn has_bounded_width(&self) -> bool {
        self.max_width != Self::INFINITY
    }

    #[must_use]
    pub const fn has_bounded_height(&self) -> bool {
        self.max_height != Self::INFINITY
    }

    /// Constrain a size to fit within these constraints.
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min_width, self.max_width),
            size.height.clamp(self.min_height, self.max_height),
        )
    }

    /// Convert to a `(width, height)` pair of measure specs.
    ///
    /// A fixed dimension becomes Exactly, a bounded one AtMost, and an
    /// unbounded one Unspecified carrying the minimum as its advisory size.
    #[must_use]
    pub const fn to_measure_specs(&self) -> (MeasureSpec, MeasureSpec) {
        (
            dimension_spec(self.min_width, self.max_width),
            dimension_spec(self.min_height, self.max_height),
        )
    }

    /// Convert a pair of measure specs back to constraints.
    #[must_use]
    pub const fn from_measure_specs(width_spec: MeasureSpec, height_spec: MeasureSpec) -> Self {
        let (min_width, max_width) = dimension_bounds(width_spec);
        let (min_height, max_height) = dimension_bounds(height_spec);
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}

const fn dimension_spec(min: i32, max: i32) -> MeasureSpec {
    if min == max {
        MeasureSpec::clamped(max, MeasureSpecMode::Exactly)
    } else if max != Constraints::INFINITY {
        MeasureSpec::clamped(max, MeasureSpecMode::AtMost)
    } else {
        MeasureSpec::unspecified(min)
    }
}

const fn dimension_bounds(spec: MeasureSpec) -> (i32, i32) {
    match spec.mode() {
        MeasureSpecMode::Exactly => (spec.size(), spec.size()),
        MeasureSpecMode::AtMost => (0, spec.size()),
        MeasureSpecMode::Unspecified => (0, Constraints::INFINITY),
    }
}
