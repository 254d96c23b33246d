//! The contract every laid-out item satisfies.

use crate::geometry::Size;
use crate::measure_spec::MeasureSpec;
use serde::{Deserialize, Serialize};

/// The size an item asks for along one dimension, before measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RequestedSize {
    /// As large as the content needs.
    #[default]
    WrapContent,
    /// As large as the parent allows.
    MatchParent,
    /// A fixed size in pixels.
    Fixed(i32),
}

/// A host-supplied item that can be measured.
///
/// Implementations must be synchronous and must not touch the container they
/// belong to. `measure` may cache a native handle for later placement, but
/// must not affect the output of any other `Measurable`.
pub trait Measurable {
    /// Requested width, consulted when deriving the width spec.
    fn requested_width(&self) -> RequestedSize {
        RequestedSize::WrapContent
    }

    /// Requested height, consulted when deriving the height spec.
    fn requested_height(&self) -> RequestedSize {
        RequestedSize::WrapContent
    }

    /// Smallest width flexing may shrink this item to.
    fn min_width(&self) -> i32 {
        0
    }

    /// Smallest height flexing may shrink this item to.
    fn min_height(&self) -> i32 {
        0
    }

    /// Largest width flexing may grow this item to.
    fn max_width(&self) -> i32 {
        i32::MAX
    }

    /// Largest height flexing may grow this item to.
    fn max_height(&self) -> i32 {
        i32::MAX
    }

    /// Intrinsic width for a given height.
    fn width(&self, height: i32) -> i32;

    /// Intrinsic height for a given width.
    fn height(&self, width: i32) -> i32;

    /// Authoritative measurement.
    ///
    /// The result must equal Exactly specs and stay within AtMost specs.
    fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size;
}

impl<M: Measurable + ?Sized> Measurable for Box<M> {
    fn requested_width(&self) -> RequestedSize {
        (**self).requested_width()
    }

    fn requested_height(&self) -> RequestedSize {
        (**self).requested_height()
    }

    fn min_width(&self) -> i32 {
        (**self).min_width()
    }

    fn min_height(&self) -> i32 {
        (**self).min_height()
    }

    fn max_width(&self) -> i32 {
        (**self).max_width()
    }

    fn max_height(&self) -> i32 {
        (**self).max_height()
    }

    fn width(&self, height: i32) -> i32 {
        (**self).width(height)
    }

    fn height(&self, width: i32) -> i32 {
        (**self).height(width)
    }

    fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size {
        (**self).measure(width_spec, height_spec)
    }
}
