//! Main/cross axis access without knowledge of the underlying direction.
//!
//! One algorithm serves row and column containers: every width/height access
//! in the container goes through an [`Orientation`] chosen once per pass.

use flexlay_core::{Measurable, MeasureSpec, Point, RequestedSize, Size, Spacing};

use crate::flex::FlexDirection;
use crate::item::FlexItem;

/// Which physical dimension plays the main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Main axis is width, cross axis is height.
    Horizontal,
    /// Main axis is height, cross axis is width.
    Vertical,
}

impl From<FlexDirection> for Orientation {
    fn from(direction: FlexDirection) -> Self {
        if direction.is_horizontal() {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }
}

impl Orientation {
    /// Sum of the two padding insets on the main axis.
    #[must_use]
    pub const fn main_padding(self, padding: &Spacing) -> i32 {
        match self {
            Self::Horizontal => padding.horizontal(),
            Self::Vertical => padding.vertical(),
        }
    }

    /// Sum of the two padding insets on the cross axis.
    #[must_use]
    pub const fn cross_padding(self, padding: &Spacing) -> i32 {
        self.transpose().main_padding(padding)
    }

    /// Leading padding on the main axis.
    #[must_use]
    pub const fn main_start_padding(self, padding: &Spacing) -> i32 {
        match self {
            Self::Horizontal => padding.start(),
            Self::Vertical => padding.top(),
        }
    }

    /// Leading padding on the cross axis.
    #[must_use]
    pub const fn cross_start_padding(self, padding: &Spacing) -> i32 {
        self.transpose().main_start_padding(padding)
    }

    #[must_use]
    pub fn main_margin(self, item: &FlexItem<'_>) -> i32 {
        self.main_padding(&item.margin())
    }

    #[must_use]
    pub fn cross_margin(self, item: &FlexItem<'_>) -> i32 {
        self.cross_padding(&item.margin())
    }

    #[must_use]
    pub fn main_start_margin(self, item: &FlexItem<'_>) -> i32 {
        self.main_start_padding(&item.margin())
    }

    #[must_use]
    pub fn cross_start_margin(self, item: &FlexItem<'_>) -> i32 {
        self.cross_start_padding(&item.margin())
    }

    /// Requested size along the main axis, before measurement.
    #[must_use]
    pub fn main_size(self, item: &FlexItem<'_>) -> RequestedSize {
        match self {
            Self::Horizontal => item.measurable().requested_width(),
            Self::Vertical => item.measurable().requested_height(),
        }
    }

    /// Requested size along the cross axis, before measurement.
    #[must_use]
    pub fn cross_size(self, item: &FlexItem<'_>) -> RequestedSize {
        self.transpose().main_size(item)
    }

    #[must_use]
    pub fn main_measured_size(self, item: &FlexItem<'_>) -> i32 {
        self.main(item.measured_size())
    }

    #[must_use]
    pub fn cross_measured_size(self, item: &FlexItem<'_>) -> i32 {
        self.cross(item.measured_size())
    }

    /// Measured main size plus main margins.
    #[must_use]
    pub fn main_measured_size_with_margin(self, item: &FlexItem<'_>) -> i32 {
        self.main_measured_size(item).saturating_add(self.main_margin(item))
    }

    /// Measured cross size plus cross margins.
    #[must_use]
    pub fn cross_measured_size_with_margin(self, item: &FlexItem<'_>) -> i32 {
        self.cross_measured_size(item).saturating_add(self.cross_margin(item))
    }

    /// Lower bound flexing may shrink an item to on the main axis.
    #[must_use]
    pub fn min_main(self, measurable: &dyn Measurable) -> i32 {
        match self {
            Self::Horizontal => measurable.min_width(),
            Self::Vertical => measurable.min_height(),
        }
    }

    /// Upper bound flexing may grow an item to on the main axis.
    #[must_use]
    pub fn max_main(self, measurable: &dyn Measurable) -> i32 {
        match self {
            Self::Horizontal => measurable.max_width(),
            Self::Vertical => measurable.max_height(),
        }
    }

    /// Intrinsic cross size for a given main size.
    #[must_use]
    pub fn intrinsic_cross(self, measurable: &dyn Measurable, main: i32) -> i32 {
        match self {
            Self::Horizontal => measurable.height(main),
            Self::Vertical => measurable.width(main),
        }
    }

    #[must_use]
    pub const fn main(self, size: Size) -> i32 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    #[must_use]
    pub const fn cross(self, size: Size) -> i32 {
        self.transpose().main(size)
    }

    /// Build a physical size from main and cross extents.
    #[must_use]
    pub const fn size(self, main: i32, cross: i32) -> Size {
        match self {
            Self::Horizontal => Size::new(main, cross),
            Self::Vertical => Size::new(cross, main),
        }
    }

    /// Build a physical point from main and cross positions.
    #[must_use]
    pub const fn point(self, main: i32, cross: i32) -> Point {
        match self {
            Self::Horizontal => Point::new(main, cross),
            Self::Vertical => Point::new(cross, main),
        }
    }

    /// Split `(width, height)` specs into `(main, cross)`.
    #[must_use]
    pub const fn split_specs(
        self,
        width_spec: MeasureSpec,
        height_spec: MeasureSpec,
    ) -> (MeasureSpec, MeasureSpec) {
        match self {
            Self::Horizontal => (width_spec, height_spec),
            Self::Vertical => (height_spec, width_spec),
        }
    }

    /// Join `(main, cross)` specs into `(width, height)`.
    #[must_use]
    pub const fn join_specs(
        self,
        main_spec: MeasureSpec,
        cross_spec: MeasureSpec,
    ) -> (MeasureSpec, MeasureSpec) {
        // The mapping is its own inverse.
        self.split_specs(main_spec, cross_spec)
    }

    /// The orientation with main and cross swapped.
    #[must_use]
    pub const fn transpose(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}
