#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::doc_markdown)]
//! Flexbox layout engine.
//!
//! A [`FlexContainer`] owns an ordered list of [`FlexItem`]s, each wrapping a
//! host-supplied [`Measurable`](flexlay_core::Measurable). Layout runs in two
//! passes:
//!
//! - **Measure**: items are measured against derived [`MeasureSpec`]s, broken
//!   into [`FlexLine`]s, and grown or shrunk to fill the main axis.
//! - **Layout**: lines and items are positioned according to
//!   [`JustifyContent`], [`AlignItems`], [`AlignSelf`] and [`AlignContent`].
//!
//! One algorithm serves rows and columns; [`Orientation`] maps main/cross
//! axis access onto width and height.
//!
//! ```
//! use flexlay_core::{MeasureSpec, Measurable, Size};
//! use flexlay_layout::{ContainerStyle, FlexContainer, FlexItem, JustifyContent};
//!
//! struct Label;
//!
//! impl Measurable for Label {
//!     fn width(&self, _height: i32) -> i32 { 20 }
//!     fn height(&self, _width: i32) -> i32 { 10 }
//!     fn measure(&mut self, w: MeasureSpec, h: MeasureSpec) -> Size {
//!         Size::new(w.resolve(20), h.resolve(10))
//!     }
//! }
//!
//! let (mut a, mut b) = (Label, Label);
//! let style = ContainerStyle::default().with_justify_content(JustifyContent::SpaceBetween);
//! let mut container = FlexContainer::new(style)
//!     .with_item(FlexItem::new(&mut a))
//!     .with_item(FlexItem::new(&mut b));
//!
//! let size = container.measure(MeasureSpec::exactly(100)?, MeasureSpec::unspecified(0));
//! container.layout(size.width, size.height);
//! assert_eq!(container.items()[1].x(), 80);
//! # Ok::<(), flexlay_core::LayoutError>(())
//! ```
//!
//! [`MeasureSpec`]: flexlay_core::MeasureSpec

mod container;
mod distribute;
mod flex;
mod item;
mod line;
mod orientation;
mod properties;

pub use container::{ContainerStyle, FlexContainer};
pub use flex::{
    AlignContent, AlignItems, AlignSelf, Distribution, FlexDirection, FlexWrap, JustifyContent,
};
pub use item::{FlexItem, ItemStyle, DEFAULT_FLEX_GROW, DEFAULT_FLEX_SHRINK};
pub use line::FlexLine;
pub use orientation::Orientation;
pub use properties::{CrossAxisAlignment, ItemModifier, MainAxisAlignment};
