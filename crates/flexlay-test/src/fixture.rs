//! Scripted [`Measurable`] implementations for layout tests.

use flexlay_core::{Measurable, MeasureSpec, RequestedSize, Size};

/// A box with a fixed natural size that honors every spec it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedMeasurable {
    natural: Size,
    requested_width: RequestedSize,
    requested_height: RequestedSize,
    min: Size,
    max: Size,
}

impl FixedMeasurable {
    /// A wrap-content box of the given natural size.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            natural: Size::new(width, height),
            requested_width: RequestedSize::WrapContent,
            requested_height: RequestedSize::WrapContent,
            min: Size::ZERO,
            max: Size::new(i32::MAX, i32::MAX),
        }
    }

    #[must_use]
    pub const fn with_requested_width(mut self, requested: RequestedSize) -> Self {
        self.requested_width = requested;
        self
    }

    #[must_use]
    pub const fn with_requested_height(mut self, requested: RequestedSize) -> Self {
        self.requested_height = requested;
        self
    }

    #[must_use]
    pub const fn with_min_size(mut self, width: i32, height: i32) -> Self {
        self.min = Size::new(width, height);
        self
    }

    #[must_use]
    pub const fn with_max_size(mut self, width: i32, height: i32) -> Self {
        self.max = Size::new(width, height);
        self
    }

    /// The same box with width and height swapped, bounds and requests
    /// included.
    #[must_use]
    pub const fn transpose(self) -> Self {
        Self {
            natural: self.natural.transpose(),
            requested_width: self.requested_height,
            requested_height: self.requested_width,
            min: self.min.transpose(),
            max: self.max.transpose(),
        }
    }

    #[must_use]
    pub const fn natural(&self) -> Size {
        self.natural
    }
}

impl Measurable for FixedMeasurable {
    fn requested_width(&self) -> RequestedSize {
        self.requested_width
    }

    fn requested_height(&self) -> RequestedSize {
        self.requested_height
    }

    fn min_width(&self) -> i32 {
        self.min.width
    }

    fn min_height(&self) -> i32 {
        self.min.height
    }

    fn max_width(&self) -> i32 {
        self.max.width
    }

    fn max_height(&self) -> i32 {
        self.max.height
    }

    fn width(&self, _height: i32) -> i32 {
        self.natural.width
    }

    fn height(&self, _width: i32) -> i32 {
        self.natural.height
    }

    fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size {
        Size::new(
            width_spec.resolve(self.natural.width),
            height_spec.resolve(self.natural.height),
        )
    }
}

/// Wrapping text: height grows as width shrinks.
///
/// Every glyph is `glyph_width` wide and every line `line_height` tall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextMeasurable {
    glyphs: i32,
    glyph_width: i32,
    line_height: i32,
}

impl TextMeasurable {
    #[must_use]
    pub const fn new(glyphs: i32, glyph_width: i32, line_height: i32) -> Self {
        Self {
            glyphs,
            glyph_width,
            line_height,
        }
    }

    /// Width of the text on a single line.
    #[must_use]
    pub const fn single_line_width(&self) -> i32 {
        self.glyphs * self.glyph_width
    }

    /// Number of lines needed at `width`; at least one glyph per line.
    #[must_use]
    pub fn line_count(&self, width: i32) -> i32 {
        if self.glyphs <= 0 {
            return 0;
        }
        let per_line = (width / self.glyph_width.max(1)).max(1);
        (self.glyphs + per_line - 1) / per_line
    }
}

impl Measurable for TextMeasurable {
    fn width(&self, _height: i32) -> i32 {
        self.single_line_width()
    }

    fn height(&self, width: i32) -> i32 {
        self.line_count(width) * self.line_height
    }

    fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size {
        let width = width_spec.resolve(self.single_line_width());
        Size::new(width, height_spec.resolve(self.height(width)))
    }
}

/// One `measure` call seen by a [`RecordingMeasurable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasureCall {
    pub width_spec: MeasureSpec,
    pub height_spec: MeasureSpec,
    pub result: Size,
}

/// Wraps a measurable and logs every measurement made through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingMeasurable<M> {
    inner: M,
    calls: Vec<MeasureCall>,
}

impl<M: Measurable> RecordingMeasurable<M> {
    #[must_use]
    pub const fn new(inner: M) -> Self {
        Self {
            inner,
            calls: Vec::new(),
        }
    }

    #[must_use]
    pub fn calls(&self) -> &[MeasureCall] {
        &self.calls
    }

    #[must_use]
    pub fn last_call(&self) -> Option<&MeasureCall> {
        self.calls.last()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    #[must_use]
    pub const fn inner(&self) -> &M {
        &self.inner
    }
}

impl<M: Measurable> Measurable for RecordingMeasurable<M> {
    fn requested_width(&self) -> RequestedSize {
        self.inner.requested_width()
    }

    fn requested_height(&self) -> RequestedSize {
        self.inner.requested_height()
    }

    fn min_width(&self) -> i32 {
        self.inner.min_width()
    }

    fn min_height(&self) -> i32 {
        self.inner.min_height()
    }

    fn max_width(&self) -> i32 {
        self.inner.max_width()
    }

    fn max_height(&self) -> i32 {
        self.inner.max_height()
    }

    fn width(&self, height: i32) -> i32 {
        self.inner.width(height)
    }

    fn height(&self, width: i32) -> i32 {
        self.inner.height(width)
    }

    fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size {
        let result = self.inner.measure(width_spec, height_spec);
        self.calls.push(MeasureCall {
            width_spec,
            height_spec,
            result,
        });
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_honors_specs() {
        let mut fixed = FixedMeasurable::new(30, 20);
        let size = fixed.measure(
            MeasureSpec::at_most(25).unwrap(),
            MeasureSpec::exactly(40).unwrap(),
        );
        assert_eq!(size, Size::new(25, 40));
        let size = fixed.measure(MeasureSpec::unspecified(0), MeasureSpec::unspecified(0));
        assert_eq!(size, Size::new(30, 20));
    }

    #[test]
    fn test_fixed_transpose() {
        let fixed = FixedMeasurable::new(30, 20)
            .with_requested_width(RequestedSize::Fixed(30))
            .with_min_size(5, 0)
            .transpose();
        assert_eq!(fixed.natural(), Size::new(20, 30));
        assert_eq!(fixed.requested_height(), RequestedSize::Fixed(30));
        assert_eq!(fixed.requested_width(), RequestedSize::WrapContent);
        assert_eq!(fixed.min_height(), 5);
    }

    #[test]
    fn test_text_wraps() {
        let text = TextMeasurable::new(10, 2, 5);
        assert_eq!(text.single_line_width(), 20);
        assert_eq!(text.height(20), 5);
        assert_eq!(text.height(10), 10);
        assert_eq!(text.height(7), 20);
        assert_eq!(text.height(0), 50);
    }

    #[test]
    fn test_text_measure_wraps_under_bound() {
        let mut text = TextMeasurable::new(10, 2, 5);
        let size = text.measure(MeasureSpec::at_most(8).unwrap(), MeasureSpec::unspecified(0));
        assert_eq!(size, Size::new(8, 15));
    }

    #[test]
    fn test_recording_logs_calls() {
        let mut recording = RecordingMeasurable::new(FixedMeasurable::new(10, 10));
        let spec = MeasureSpec::exactly(4).unwrap();
        recording.measure(spec, MeasureSpec::unspecified(0));
        assert_eq!(recording.calls().len(), 1);
        let call = recording.last_call().unwrap();
        assert_eq!(call.width_spec, spec);
        assert_eq!(call.result, Size::new(4, 10));
        recording.clear();
        assert!(recording.calls().is_empty());
    }
}
