//! Geometric primitives: `Size`, `Spacing`, `Point`, `Rect`.
//!
//! All values are integer pixels. Sizes and spacing are non-negative; positions
//! may be negative when content overflows its container.

use crate::error::{LayoutError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The result of a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: i32,
    /// Height
    pub height: i32,
}

impl Size {
    /// Zero size
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// Create a new size.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Swap width and height.
    #[must_use]
    pub const fn transpose(self) -> Self {
        Self::new(self.height, self.width)
    }

    /// Check if this size can contain another size.
    #[must_use]
    pub const fn contains(&self, other: &Self) -> bool {
        self.width >= other.width && self.height >= other.height
    }
}

/// A four-sided inset, used for item margins and container padding.
///
/// Every side is non-negative; the constructors reject anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawSpacing")]
pub struct Spacing {
    start: i32,
    end: i32,
    top: i32,
    bottom: i32,
}

impl Spacing {
    /// No spacing on any side.
    pub const ZERO: Self = Self {
        start: 0,
        end: 0,
        top: 0,
        bottom: 0,
    };

    /// Create spacing from four sides.
    pub const fn new(start: i32, end: i32, top: i32, bottom: i32) -> Result<Self> {
        if start < 0 || end < 0 || top < 0 || bottom < 0 {
            return Err(LayoutError::InvalidSpacing {
                start,
                end,
                top,
                bottom,
            });
        }
        Ok(Self {
            start,
            end,
            top,
            bottom,
        })
    }

    /// Same spacing on every side.
    pub const fn all(value: i32) -> Result<Self> {
        Self::new(value, value, value, value)
    }

    /// `horizontal` on start and end, `vertical` on top and bottom.
    pub const fn symmetric(horizontal: i32, vertical: i32) -> Result<Self> {
        Self::new(horizontal, horizontal, vertical, vertical)
    }

    #[must_use]
    pub const fn start(&self) -> i32 {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> i32 {
        self.end
    }

    #[must_use]
    pub const fn top(&self) -> i32 {
        self.top
    }

    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.bottom
    }

    /// Total horizontal spacing.
    #[must_use]
    pub const fn horizontal(&self) -> i32 {
        self.start.saturating_add(self.end)
    }

    /// Total vertical spacing.
    #[must_use]
    pub const fn vertical(&self) -> i32 {
        self.top.saturating_add(self.bottom)
    }

    /// Swap the horizontal and vertical sides.
    #[must_use]
    pub const fn transpose(self) -> Self {
        Self {
            start: self.top,
            end: self.bottom,
            top: self.start,
            bottom: self.end,
        }
    }
}

impl fmt::Display for Spacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end && self.top == self.bottom {
            if self.start == self.top {
                write!(f, "Spacing(all={})", self.start)
            } else {
                write!(
                    f,
                    "Spacing(horizontal={}, vertical={})",
                    self.start, self.top
                )
            }
        } else {
            write!(
                f,
                "Spacing(start={}, end={}, top={}, bottom={})",
                self.start, self.end, self.top, self.bottom
            )
        }
    }
}

/// Unchecked wire form of [`Spacing`].
#[derive(Default, Deserialize)]
#[serde(default)]
struct RawSpacing {
    start: i32,
    end: i32,
    top: i32,
    bottom: i32,
}

impl TryFrom<RawSpacing> for Spacing {
    type Error = LayoutError;

    fn try_from(raw: RawSpacing) -> Result<Self> {
        Self::new(raw.start, raw.end, raw.top, raw.bottom)
    }
}

/// A 2D point with x and y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0)
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    /// X position of top-left corner
    pub x: i32,
    /// Y position of top-left corner
    pub y: i32,
    /// Width
    pub width: i32,
    /// Height
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create from an origin and a size.
    #[must_use]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Get the origin (top-left corner).
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Get the size.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Check if another rectangle lies fully inside this one.
    #[must_use]
    pub const fn contains_rect(&self, other: &Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Check if this rectangle overlaps another (touching edges do not count).
    #[must_use]
    pub const fn intersects(&self, other: &Self) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Swap the axes of position and size.
    #[must_use]
    pub const fn transpose(self) -> Self {
        Self::new(self.y, self.x, self.height, self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_default() {
        assert_eq!(Size::default(), Size::ZERO);
    }

    #[test]
    fn test_size_transpose() {
        assert_eq!(Size::new(3, 7).transpose(), Size::new(7, 3));
    }

    #[test]
    fn test_spacing_rejects_negative_side() {
        let err = Spacing::new(0, 0, -1, 0).unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidSpacing {
                start: 0,
                end: 0,
                top: -1,
                bottom: 0
            }
        );
        assert!(Spacing::all(-2).is_err());
        assert!(Spacing::symmetric(1, -1).is_err());
    }

    #[test]
    fn test_spacing_sums() {
        let spacing = Spacing::new(1, 2, 3, 4).unwrap();
        assert_eq!(spacing.horizontal(), 3);
        assert_eq!(spacing.vertical(), 7);
    }

    #[test]
    fn test_spacing_display() {
        assert_eq!(Spacing::all(4).unwrap().to_string(), "Spacing(all=4)");
        assert_eq!(
            Spacing::symmetric(4, 2).unwrap().to_string(),
            "Spacing(horizontal=4, vertical=2)"
        );
        assert_eq!(
            Spacing::new(1, 2, 3, 4).unwrap().to_string(),
            "Spacing(start=1, end=2, top=3, bottom=4)"
        );
    }

    #[test]
    fn test_spacing_transpose() {
        let spacing = Spacing::new(1, 2, 3, 4).unwrap().transpose();
        assert_eq!(spacing, Spacing::new(3, 4, 1, 2).unwrap());
    }

    #[test]
    fn test_spacing_deserialize_validates() {
        let spacing: Spacing = serde_json::from_str(r#"{"start": 2, "top": 5}"#).unwrap();
        assert_eq!(spacing, Spacing::new(2, 0, 5, 0).unwrap());

        let invalid = serde_json::from_str::<Spacing>(r#"{"end": -3}"#);
        assert!(invalid.is_err());
    }

    #[test]
    fn test_rect_edges_and_containment() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = Rect::new(10, 10, 20, 20);
        assert_eq!(outer.right(), 100);
        assert_eq!(outer.bottom(), 50);
        assert!(outer.contains_rect(&inner));
        assert!(!inner.contains_rect(&outer));
    }

    #[test]
    fn test_rect_intersects_excludes_touching() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(10, 0, 10, 10);
        let c = Rect::new(5, 5, 10, 10);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&c));
    }

    #[test]
    fn test_rect_from_origin_size() {
        let rect = Rect::from_origin_size(Point::new(3, 4), Size::new(5, 6));
        assert_eq!(rect.origin(), Point::new(3, 4));
        assert_eq!(rect.size(), Size::new(5, 6));
        assert_eq!(rect.transpose(), Rect::new(4, 3, 6, 5));
    }
}
