//! Flexbox property types.

use serde::{Deserialize, Serialize};

/// Direction of the main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FlexDirection {
    /// Horizontal (left to right)
    #[default]
    Row,
    /// Horizontal, items in reverse order
    RowReverse,
    /// Vertical (top to bottom)
    Column,
    /// Vertical, items in reverse order
    ColumnReverse,
}

impl FlexDirection {
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Row | Self::RowReverse)
    }

    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Column | Self::ColumnReverse)
    }

    #[must_use]
    pub const fn is_reversed(self) -> bool {
        matches!(self, Self::RowReverse | Self::ColumnReverse)
    }

    /// The direction with the same ordering on the other axis.
    #[must_use]
    pub const fn transpose(self) -> Self {
        match self {
            Self::Row => Self::Column,
            Self::RowReverse => Self::ColumnReverse,
            Self::Column => Self::Row,
            Self::ColumnReverse => Self::RowReverse,
        }
    }
}

/// Whether items may break onto multiple lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FlexWrap {
    /// All items form a single line.
    #[default]
    NoWrap,
    /// Items break onto a new line when the main axis is full.
    Wrap,
}

/// Distribution of free space along the main axis (`justify-content`).
///
/// The same vocabulary distributes lines along the cross axis as
/// [`AlignContent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum JustifyContent {
    /// Pack items at the start
    #[default]
    FlexStart,
    /// Pack items at the end
    FlexEnd,
    /// Center items
    Center,
    /// Distribute space evenly between items
    SpaceBetween,
    /// Distribute space evenly around items
    SpaceAround,
    /// Distribute space evenly, including edges
    SpaceEvenly,
}

/// Distribution of lines along the cross axis (`align-content`).
pub type AlignContent = JustifyContent;

/// Leading offset and per-gap spacing produced by [`JustifyContent::distribute`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Distribution {
    /// Space before the first entry.
    pub offset: f32,
    /// Extra space after every entry.
    pub gap: f32,
}

impl JustifyContent {
    /// Split `free_space` among `count` entries.
    ///
    /// With negative free space the spacing variants fall back to
    /// `FlexStart`; `FlexEnd` and `Center` still shift and may overflow.
    #[must_use]
    pub fn distribute(self, free_space: f32, count: usize) -> Distribution {
        if count == 0 {
            return Distribution::default();
        }
        let count = count as f32;
        match self {
            Self::FlexStart => Distribution::default(),
            Self::FlexEnd => Distribution {
                offset: free_space,
                gap: 0.0,
            },
            Self::Center => Distribution {
                offset: free_space / 2.0,
                gap: 0.0,
            },
            Self::SpaceBetween | Self::SpaceAround | Self::SpaceEvenly if free_space <= 0.0 => {
                Distribution::default()
            }
            Self::SpaceBetween => Distribution {
                offset: 0.0,
                gap: if count > 1.0 {
                    free_space / (count - 1.0)
                } else {
                    0.0
                },
            },
            Self::SpaceAround => {
                let gap = free_space / count;
                Distribution {
                    offset: gap / 2.0,
                    gap,
                }
            }
            Self::SpaceEvenly => {
                let gap = free_space / (count + 1.0);
                Distribution { offset: gap, gap }
            }
        }
    }

    /// Like [`distribute`](Self::distribute), but with the start edge at the
    /// far end, for reversed directions.
    ///
    /// Entries are still visited from the near edge, so the offset is
    /// mirrored: `FlexStart` packs against the far edge and `FlexEnd` against
    /// the near one.
    #[must_use]
    pub fn distribute_from_end(self, free_space: f32, count: usize) -> Distribution {
        let Distribution { offset, gap } = self.distribute(free_space, count);
        if count == 0 {
            return Distribution { offset, gap };
        }
        Distribution {
            offset: free_space - offset - gap * (count - 1) as f32,
            gap,
        }
    }
}

/// Default cross-axis alignment of items (`align-items`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AlignItems {
    /// Align to the cross start
    FlexStart,
    /// Align to the cross end
    FlexEnd,
    /// Center within the line
    Center,
    /// Fill the line's cross size
    #[default]
    Stretch,
}

impl AlignItems {
    /// Cross offset of an item of `item_size` (margins included) inside a
    /// line of `line_size`.
    #[must_use]
    pub fn offset(self, line_size: i32, item_size: i32) -> f32 {
        let free = (line_size - item_size) as f32;
        match self {
            Self::FlexStart | Self::Stretch => 0.0,
            Self::FlexEnd => free,
            Self::Center => free / 2.0,
        }
    }
}

/// Per-item override of [`AlignItems`] (`align-self`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AlignSelf {
    /// Defer to the container's `align_items`
    #[default]
    Auto,
    /// Align to the cross start
    FlexStart,
    /// Center within the line
    Center,
    /// Align to the cross end
    FlexEnd,
    /// Fill the line's cross size
    Stretch,
}

impl AlignSelf {
    /// The alignment actually used, given the container default.
    #[must_use]
    pub const fn resolve(self, align_items: AlignItems) -> AlignItems {
        match self {
            Self::Auto => align_items,
            Self::FlexStart => AlignItems::FlexStart,
            Self::Center => AlignItems::Center,
            Self::FlexEnd => AlignItems::FlexEnd,
            Self::Stretch => AlignItems::Stretch,
        }
    }
}
