//! A harness that owns a container's children and runs full passes.

use flexlay_core::{Measurable, MeasureSpec, MeasureSpecMode, Point, Rect, Size};
use flexlay_layout::{ContainerStyle, FlexContainer, FlexItem, ItemStyle};

/// Owns a container style plus boxed children, so tests can run
/// measure + layout without managing borrows.
pub struct LayoutHarness {
    style: ContainerStyle,
    children: Vec<(Box<dyn Measurable>, ItemStyle)>,
}

impl LayoutHarness {
    #[must_use]
    pub fn new(style: ContainerStyle) -> Self {
        Self {
            style,
            children: Vec::new(),
        }
    }

    /// Add a child with the default item style.
    #[must_use]
    pub fn child(self, measurable: impl Measurable + 'static) -> Self {
        self.child_with(measurable, ItemStyle::default())
    }

    /// Add a child with an explicit item style.
    #[must_use]
    pub fn child_with(mut self, measurable: impl Measurable + 'static, style: ItemStyle) -> Self {
        self.children.push((Box::new(measurable), style));
        self
    }

    #[must_use]
    pub const fn style(&self) -> &ContainerStyle {
        &self.style
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Measure with the given specs, then lay out at the measured size.
    pub fn run(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> LayoutSnapshot {
        let mut container = FlexContainer::new(self.style);
        for (measurable, style) in &mut self.children {
            container.add_item(FlexItem::with_style(measurable.as_mut(), *style));
        }

        let size = container.measure(width_spec, height_spec);
        container.layout(size.width, size.height);

        LayoutSnapshot {
            size,
            frames: container.items().iter().map(FlexItem::frame).collect(),
            lines: container
                .lines()
                .iter()
                .map(|line| line.items().to_vec())
                .collect(),
        }
    }

    /// Run with both dimensions fixed.
    pub fn run_exact(&mut self, width: i32, height: i32) -> LayoutSnapshot {
        self.run(
            MeasureSpec::clamped(width, MeasureSpecMode::Exactly),
            MeasureSpec::clamped(height, MeasureSpecMode::Exactly),
        )
    }

    /// Run with both dimensions unbounded.
    pub fn run_unspecified(&mut self) -> LayoutSnapshot {
        self.run(MeasureSpec::unspecified(0), MeasureSpec::unspecified(0))
    }
}

impl std::fmt::Debug for LayoutHarness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutHarness")
            .field("style", &self.style)
            .field("children", &self.children.len())
            .finish()
    }
}

/// The outcome of one harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSnapshot {
    /// The container's measured size.
    pub size: Size,
    /// Item frames, in insertion order.
    pub frames: Vec<Rect>,
    /// Item indices per line, in flow order.
    pub lines: Vec<Vec<usize>>,
}

impl LayoutSnapshot {
    /// Frame of an item.
    ///
    /// # Panics
    ///
    /// Panics if there is no item at `index`.
    #[must_use]
    pub fn frame(&self, index: usize) -> Rect {
        match self.frames.get(index) {
            Some(frame) => *frame,
            None => panic!("no item at index {index}; snapshot has {}", self.frames.len()),
        }
    }

    /// Assert an item's frame, reporting the whole snapshot on mismatch.
    pub fn assert_frame(&self, index: usize, x: i32, y: i32, width: i32, height: i32) -> &Self {
        let expected = Rect::new(x, y, width, height);
        let actual = self.frame(index);
        if actual != expected {
            panic!("item {index}: expected {expected:?}, got {actual:?}\n{self:#?}");
        }
        self
    }

    /// Assert the container's measured size.
    pub fn assert_size(&self, width: i32, height: i32) -> &Self {
        if self.size != Size::new(width, height) {
            panic!(
                "container: expected {width}x{height}, got {}x{}",
                self.size.width, self.size.height
            );
        }
        self
    }

    /// The snapshot with every width/height and x/y swapped.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self {
            size: self.size.transpose(),
            frames: self.frames.iter().map(|frame| frame.transpose()).collect(),
            lines: self.lines.clone(),
        }
    }

    /// Whether every frame lies inside the container.
    #[must_use]
    pub fn all_inside(&self) -> bool {
        let bounds = Rect::from_origin_size(Point::ORIGIN, self.size);
        self.frames.iter().all(|frame| bounds.contains_rect(frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::FixedMeasurable;
    use flexlay_layout::{AlignItems, FlexWrap, JustifyContent};

    #[test]
    fn test_harness_runs_both_passes() {
        let style = ContainerStyle::default().with_justify_content(JustifyContent::Center);
        let mut harness = LayoutHarness::new(style)
            .child(FixedMeasurable::new(20, 10))
            .child(FixedMeasurable::new(20, 10));

        let snapshot = harness.run_exact(100, 10);
        snapshot
            .assert_size(100, 10)
            .assert_frame(0, 30, 0, 20, 10)
            .assert_frame(1, 50, 0, 20, 10);
        assert_eq!(snapshot.lines, vec![vec![0, 1]]);
        assert!(snapshot.all_inside());
    }

    #[test]
    fn test_harness_child_style() {
        let style = ContainerStyle::default()
            .with_wrap(FlexWrap::Wrap)
            .with_align_items(AlignItems::FlexStart);
        let mut harness = LayoutHarness::new(style).child_with(
            FixedMeasurable::new(20, 10),
            ItemStyle::new().flex_grow(1.0).unwrap(),
        );

        let snapshot = harness.run(MeasureSpec::exactly(50).unwrap(), MeasureSpec::unspecified(0));
        snapshot.assert_frame(0, 0, 0, 50, 10);
    }

    #[test]
    fn test_snapshot_transpose() {
        let snapshot = LayoutSnapshot {
            size: Size::new(10, 20),
            frames: vec![Rect::new(1, 2, 3, 4)],
            lines: vec![vec![0]],
        };
        let transposed = snapshot.transpose();
        assert_eq!(transposed.size, Size::new(20, 10));
        assert_eq!(transposed.frame(0), Rect::new(2, 1, 4, 3));
    }

    #[test]
    #[should_panic(expected = "no item at index 3")]
    fn test_frame_out_of_range_panics() {
        let snapshot = LayoutSnapshot {
            size: Size::ZERO,
            frames: Vec::new(),
            lines: Vec::new(),
        };
        let _ = snapshot.frame(3);
    }
}
