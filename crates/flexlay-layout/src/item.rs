//! Flex items: one child's participation in a layout pass.

use std::fmt;

use flexlay_core::{check_flex_factor, LayoutError, Measurable, Point, Rect, Result, Size, Spacing};
use serde::{Deserialize, Serialize};

use crate::flex::{AlignSelf, FlexDirection};
use crate::properties::ItemModifier;

/// Default flex grow factor.
pub const DEFAULT_FLEX_GROW: f32 = 0.0;
/// Default flex shrink factor.
pub const DEFAULT_FLEX_SHRINK: f32 = 1.0;

/// Declared layout intent of an item, without its measurable.
///
/// Deserialization applies the same validation as the setters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawItemStyle")]
pub struct ItemStyle {
    flex_grow: f32,
    flex_shrink: f32,
    margin: Spacing,
    align_self: AlignSelf,
}

impl Default for ItemStyle {
    fn default() -> Self {
        Self {
            flex_grow: DEFAULT_FLEX_GROW,
            flex_shrink: DEFAULT_FLEX_SHRINK,
            margin: Spacing::ZERO,
            align_self: AlignSelf::Auto,
        }
    }
}

impl ItemStyle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grow factor.
    pub fn flex_grow(mut self, grow: f32) -> Result<Self> {
        self.flex_grow = check_flex_factor("flex_grow", grow)?;
        Ok(self)
    }

    /// Set the shrink factor.
    pub fn flex_shrink(mut self, shrink: f32) -> Result<Self> {
        self.flex_shrink = check_flex_factor("flex_shrink", shrink)?;
        Ok(self)
    }

    /// Set the margin.
    #[must_use]
    pub const fn margin(mut self, margin: Spacing) -> Self {
        self.margin = margin;
        self
    }

    /// Set self alignment.
    #[must_use]
    pub const fn align_self(mut self, align_self: AlignSelf) -> Self {
        self.align_self = align_self;
        self
    }
}

#[derive(Deserialize)]
#[serde(default)]
struct RawItemStyle {
    flex_grow: f32,
    flex_shrink: f32,
    margin: Spacing,
    align_self: AlignSelf,
}

impl Default for RawItemStyle {
    fn default() -> Self {
        let style = ItemStyle::default();
        Self {
            flex_grow: style.flex_grow,
            flex_shrink: style.flex_shrink,
            margin: style.margin,
            align_self: style.align_self,
        }
    }
}

impl TryFrom<RawItemStyle> for ItemStyle {
    type Error = LayoutError;

    fn try_from(raw: RawItemStyle) -> Result<Self> {
        Ok(Self::new()
            .flex_grow(raw.flex_grow)?
            .flex_shrink(raw.flex_shrink)?
            .margin(raw.margin)
            .align_self(raw.align_self))
    }
}

/// A child of a [`FlexContainer`](crate::FlexContainer).
///
/// Holds the declared style, a borrowed host [`Measurable`], and the output
/// of the last pass. Outputs are zero until the first `measure` and are
/// overwritten wholesale by every pass.
pub struct FlexItem<'a> {
    style: ItemStyle,
    measurable: &'a mut dyn Measurable,
    measured: Size,
    position: Point,
}

impl<'a> FlexItem<'a> {
    /// Wrap a measurable with the default style.
    pub fn new(measurable: &'a mut dyn Measurable) -> Self {
        Self::with_style(measurable, ItemStyle::default())
    }

    /// Wrap a measurable with an explicit style.
    pub fn with_style(measurable: &'a mut dyn Measurable, style: ItemStyle) -> Self {
        Self {
            style,
            measurable,
            measured: Size::ZERO,
            position: Point::ORIGIN,
        }
    }

    /// Build an item from host modifiers, applied in order.
    ///
    /// Alignment modifiers only take effect on the cross axis of
    /// `direction`; a horizontal alignment inside a row is ignored.
    pub fn from_modifiers(
        measurable: &'a mut dyn Measurable,
        modifiers: &[ItemModifier],
        direction: FlexDirection,
    ) -> Result<Self> {
        let mut style = ItemStyle::default();
        for modifier in modifiers {
            style = match *modifier {
                ItemModifier::Grow(grow) => style.flex_grow(grow)?,
                ItemModifier::Shrink(shrink) => style.flex_shrink(shrink)?,
                ItemModifier::Margin(margin) => style.margin(margin),
                ItemModifier::HorizontalAlignment(alignment) if direction.is_vertical() => {
                    style.align_self(alignment.into())
                }
                ItemModifier::VerticalAlignment(alignment) if direction.is_horizontal() => {
                    style.align_self(alignment.into())
                }
                ItemModifier::HorizontalAlignment(_) | ItemModifier::VerticalAlignment(_) => style,
            };
        }
        Ok(Self::with_style(measurable, style))
    }

    /// Set the grow factor (builder).
    pub fn with_flex_grow(mut self, grow: f32) -> Result<Self> {
        self.set_flex_grow(grow)?;
        Ok(self)
    }

    /// Set the shrink factor (builder).
    pub fn with_flex_shrink(mut self, shrink: f32) -> Result<Self> {
        self.set_flex_shrink(shrink)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Spacing) -> Self {
        self.style.margin = margin;
        self
    }

    #[must_use]
    pub fn with_align_self(mut self, align_self: AlignSelf) -> Self {
        self.style.align_self = align_self;
        self
    }

    pub fn set_flex_grow(&mut self, grow: f32) -> Result<()> {
        self.style.flex_grow = check_flex_factor("flex_grow", grow)?;
        Ok(())
    }

    pub fn set_flex_shrink(&mut self, shrink: f32) -> Result<()> {
        self.style.flex_shrink = check_flex_factor("flex_shrink", shrink)?;
        Ok(())
    }

    pub fn set_margin(&mut self, margin: Spacing) {
        self.style.margin = margin;
    }

    pub fn set_align_self(&mut self, align_self: AlignSelf) {
        self.style.align_self = align_self;
    }

    #[must_use]
    pub fn style(&self) -> ItemStyle {
        self.style
    }

    #[must_use]
    pub fn flex_grow(&self) -> f32 {
        self.style.flex_grow
    }

    #[must_use]
    pub fn flex_shrink(&self) -> f32 {
        self.style.flex_shrink
    }

    #[must_use]
    pub fn margin(&self) -> Spacing {
        self.style.margin
    }

    #[must_use]
    pub fn align_self(&self) -> AlignSelf {
        self.style.align_self
    }

    /// The host measurable, read-only.
    #[must_use]
    pub fn measurable(&self) -> &dyn Measurable {
        &*self.measurable
    }

    pub(crate) fn measurable_mut(&mut self) -> &mut dyn Measurable {
        &mut *self.measurable
    }

    #[must_use]
    pub fn measured_width(&self) -> i32 {
        self.measured.width
    }

    #[must_use]
    pub fn measured_height(&self) -> i32 {
        self.measured.height
    }

    #[must_use]
    pub fn measured_size(&self) -> Size {
        self.measured
    }

    /// Left edge relative to the container, margin excluded.
    #[must_use]
    pub fn x(&self) -> i32 {
        self.position.x
    }

    /// Top edge relative to the container, margin excluded.
    #[must_use]
    pub fn y(&self) -> i32 {
        self.position.y
    }

    /// Final placement: position plus measured size.
    #[must_use]
    pub fn frame(&self) -> Rect {
        Rect::from_origin_size(self.position, self.measured)
    }

    pub(crate) fn set_measured_size(&mut self, size: Size) {
        self.measured = size;
    }

    pub(crate) fn set_position(&mut self, position: Point) {
        self.position = position;
    }
}

impl fmt::Debug for FlexItem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlexItem")
            .field("style", &self.style)
            .field("measured", &self.measured)
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}
