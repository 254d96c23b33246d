//! Host-facing layout vocabulary and its mapping onto flex properties.
//!
//! UI toolkits describe rows and columns with start/center/end alignments and
//! per-child modifiers; these types translate that into [`JustifyContent`],
//! [`AlignItems`] and [`AlignSelf`].

use flexlay_core::Spacing;
use serde::{Deserialize, Serialize};

use crate::flex::{AlignItems, AlignSelf, JustifyContent};

/// Equivalent to `justify-content`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MainAxisAlignment {
    #[default]
    Start,
    Center,
    End,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl From<MainAxisAlignment> for JustifyContent {
    fn from(alignment: MainAxisAlignment) -> Self {
        match alignment {
            MainAxisAlignment::Start => Self::FlexStart,
            MainAxisAlignment::Center => Self::Center,
            MainAxisAlignment::End => Self::FlexEnd,
            MainAxisAlignment::SpaceBetween => Self::SpaceBetween,
            MainAxisAlignment::SpaceAround => Self::SpaceAround,
            MainAxisAlignment::SpaceEvenly => Self::SpaceEvenly,
        }
    }
}

/// Equivalent to `align-items`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CrossAxisAlignment {
    #[default]
    Start,
    Center,
    End,
    Stretch,
}

impl From<CrossAxisAlignment> for AlignItems {
    fn from(alignment: CrossAxisAlignment) -> Self {
        match alignment {
            CrossAxisAlignment::Start => Self::FlexStart,
            CrossAxisAlignment::Center => Self::Center,
            CrossAxisAlignment::End => Self::FlexEnd,
            CrossAxisAlignment::Stretch => Self::Stretch,
        }
    }
}

impl From<CrossAxisAlignment> for AlignSelf {
    fn from(alignment: CrossAxisAlignment) -> Self {
        match alignment {
            CrossAxisAlignment::Start => Self::FlexStart,
            CrossAxisAlignment::Center => Self::Center,
            CrossAxisAlignment::End => Self::FlexEnd,
            CrossAxisAlignment::Stretch => Self::Stretch,
        }
    }
}

/// A per-child layout modifier, folded into a [`FlexItem`](crate::FlexItem)
/// by [`FlexItem::from_modifiers`](crate::FlexItem::from_modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ItemModifier {
    /// Flex grow factor.
    Grow(f32),
    /// Flex shrink factor.
    Shrink(f32),
    /// Outer spacing around the child.
    Margin(Spacing),
    /// Horizontal placement; only meaningful inside a column.
    HorizontalAlignment(CrossAxisAlignment),
    /// Vertical placement; only meaningful inside a row.
    VerticalAlignment(CrossAxisAlignment),
}
