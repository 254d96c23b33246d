//! Measure specs: the size constraint handed down to a measurable item.

use crate::error::{LayoutError, Result};
use crate::measurable::RequestedSize;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a [`MeasureSpec`] constrains a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MeasureSpecMode {
    /// No upper bound; the size is advisory only.
    #[default]
    Unspecified,
    /// Anything from 0 up to the size.
    AtMost,
    /// Fixed to the size.
    Exactly,
}

/// A mode plus a magnitude.
///
/// Exactly and AtMost specs always carry a non-negative size. An Unspecified
/// spec carries an advisory size, normalized to 0 when negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawMeasureSpec")]
pub struct MeasureSpec {
    mode: MeasureSpecMode,
    size: i32,
}

impl MeasureSpec {
    /// Create a spec, rejecting negative bounded sizes.
    pub const fn new(size: i32, mode: MeasureSpecMode) -> Result<Self> {
        match mode {
            MeasureSpecMode::Exactly | MeasureSpecMode::AtMost if size < 0 => {
                Err(LayoutError::NegativeMeasureSpec { mode, size })
            }
            MeasureSpecMode::Exactly | MeasureSpecMode::AtMost => Ok(Self { mode, size }),
            MeasureSpecMode::Unspecified => Ok(Self::unspecified(size)),
        }
    }

    /// A dimension fixed to `size`.
    pub const fn exactly(size: i32) -> Result<Self> {
        Self::new(size, MeasureSpecMode::Exactly)
    }

    /// A dimension bounded by `size`.
    pub const fn at_most(size: i32) -> Result<Self> {
        Self::new(size, MeasureSpecMode::AtMost)
    }

    /// An unbounded dimension carrying an advisory size.
    #[must_use]
    pub const fn unspecified(size: i32) -> Self {
        Self {
            mode: MeasureSpecMode::Unspecified,
            size: if size < 0 { 0 } else { size },
        }
    }

    /// Build a bounded spec from a value the engine computed itself.
    ///
    /// Negative values are clamped to zero, so this never fails.
    #[must_use]
    pub const fn clamped(size: i32, mode: MeasureSpecMode) -> Self {
        Self {
            mode,
            size: if size < 0 { 0 } else { size },
        }
    }

    #[must_use]
    pub const fn mode(&self) -> MeasureSpecMode {
        self.mode
    }

    #[must_use]
    pub const fn size(&self) -> i32 {
        self.size
    }

    /// The upper bound, if the spec has one.
    #[must_use]
    pub const fn bound(&self) -> Option<i32> {
        match self.mode {
            MeasureSpecMode::Exactly | MeasureSpecMode::AtMost => Some(self.size),
            MeasureSpecMode::Unspecified => None,
        }
    }

    /// Resolve a natural size against this spec.
    ///
    /// Exactly forces the spec size, AtMost clips to it, Unspecified keeps the
    /// natural size. Negative natural sizes resolve to zero.
    #[must_use]
    pub fn resolve(&self, natural: i32) -> i32 {
        let natural = natural.max(0);
        match self.mode {
            MeasureSpecMode::Exactly => self.size,
            MeasureSpecMode::AtMost => natural.min(self.size),
            MeasureSpecMode::Unspecified => natural,
        }
    }

    /// Check whether a measured value honors this spec.
    #[must_use]
    pub const fn is_satisfied_by(&self, value: i32) -> bool {
        match self.mode {
            MeasureSpecMode::Exactly => value == self.size,
            MeasureSpecMode::AtMost => value >= 0 && value <= self.size,
            MeasureSpecMode::Unspecified => value >= 0,
        }
    }

    /// The same spec with its size reduced by `amount`, floored at zero.
    #[must_use]
    pub const fn shrink_by(&self, amount: i32) -> Self {
        Self::clamped(self.size - amount, self.mode)
    }

    /// Derive the spec handed to a child from this parent spec.
    ///
    /// `used` is the space the parent keeps for itself along this dimension
    /// (its padding plus the child's margin).
    #[must_use]
    pub const fn for_child(&self, used: i32, requested: RequestedSize) -> Self {
        let available = self.shrink_by(used).size;
        match (requested, self.mode) {
            (RequestedSize::Fixed(size), _) => Self::clamped(size, MeasureSpecMode::Exactly),
            (RequestedSize::MatchParent, MeasureSpecMode::Exactly) => {
                Self::clamped(available, MeasureSpecMode::Exactly)
            }
            (
                RequestedSize::MatchParent | RequestedSize::WrapContent,
                MeasureSpecMode::Exactly | MeasureSpecMode::AtMost,
            ) => Self::clamped(available, MeasureSpecMode::AtMost),
            (
                RequestedSize::MatchParent | RequestedSize::WrapContent,
                MeasureSpecMode::Unspecified,
            ) => Self::unspecified(0),
        }
    }
}

impl fmt::Display for MeasureSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self.mode, self.size)
    }
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct RawMeasureSpec {
    mode: MeasureSpecMode,
    size: i32,
}

impl TryFrom<RawMeasureSpec> for MeasureSpec {
    type Error = LayoutError;

    fn try_from(raw: RawMeasureSpec) -> Result<Self> {
        Self::new(raw.size, raw.mode)
    }
}
