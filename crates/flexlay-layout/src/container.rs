//! The flex container: owns items and runs the measure and layout passes.

use flexlay_core::{Constraints, MeasureSpec, MeasureSpecMode, RequestedSize, Size, Spacing};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, trace_span, warn};

use crate::distribute::{resolve_flexible_lengths, FlexInput};
use crate::flex::{AlignContent, AlignItems, Distribution, FlexDirection, FlexWrap, JustifyContent};
use crate::item::FlexItem;
use crate::line::FlexLine;
use crate::orientation::Orientation;
use crate::properties::{CrossAxisAlignment, MainAxisAlignment};

/// Container-level flex settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerStyle {
    pub flex_direction: FlexDirection,
    pub flex_wrap: FlexWrap,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub align_content: AlignContent,
    pub padding: Spacing,
}

impl ContainerStyle {
    /// A non-wrapping row described with host alignment vocabulary.
    #[must_use]
    pub fn row(main: MainAxisAlignment, cross: CrossAxisAlignment) -> Self {
        Self {
            flex_direction: FlexDirection::Row,
            justify_content: main.into(),
            align_items: cross.into(),
            ..Self::default()
        }
    }

    /// A non-wrapping column described with host alignment vocabulary.
    #[must_use]
    pub fn column(main: MainAxisAlignment, cross: CrossAxisAlignment) -> Self {
        Self {
            flex_direction: FlexDirection::Column,
            ..Self::row(main, cross)
        }
    }

    #[must_use]
    pub const fn with_direction(mut self, direction: FlexDirection) -> Self {
        self.flex_direction = direction;
        self
    }

    #[must_use]
    pub const fn with_wrap(mut self, wrap: FlexWrap) -> Self {
        self.flex_wrap = wrap;
        self
    }

    #[must_use]
    pub const fn with_justify_content(mut self, justify: JustifyContent) -> Self {
        self.justify_content = justify;
        self
    }

    #[must_use]
    pub const fn with_align_items(mut self, align: AlignItems) -> Self {
        self.align_items = align;
        self
    }

    #[must_use]
    pub const fn with_align_content(mut self, align: AlignContent) -> Self {
        self.align_content = align;
        self
    }

    #[must_use]
    pub const fn with_padding(mut self, padding: Spacing) -> Self {
        self.padding = padding;
        self
    }
}

/// A flexbox container.
///
/// Call [`measure`](Self::measure) and then [`layout`](Self::layout); each
/// item's measured size and position can then be read back through
/// [`items`](Self::items). Every pass recomputes everything from the current
/// configuration, so repeated passes over unchanged inputs give identical
/// results.
#[derive(Debug, Default)]
pub struct FlexContainer<'a> {
    style: ContainerStyle,
    items: Vec<FlexItem<'a>>,
    lines: Vec<FlexLine>,
}

impl<'a> FlexContainer<'a> {
    #[must_use]
    pub fn new(style: ContainerStyle) -> Self {
        Self {
            style,
            items: Vec::new(),
            lines: Vec::new(),
        }
    }

    #[must_use]
    pub const fn style(&self) -> &ContainerStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut ContainerStyle {
        &mut self.style
    }

    /// Append an item; insertion order is flow order.
    pub fn add_item(&mut self, item: FlexItem<'a>) {
        self.items.push(item);
    }

    /// Append an item (builder).
    #[must_use]
    pub fn with_item(mut self, item: FlexItem<'a>) -> Self {
        self.add_item(item);
        self
    }

    #[must_use]
    pub fn items(&self) -> &[FlexItem<'a>] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [FlexItem<'a>] {
        &mut self.items
    }

    #[must_use]
    pub fn item(&self, index: usize) -> Option<&FlexItem<'a>> {
        self.items.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove every item, releasing the borrowed measurables.
    pub fn clear_items(&mut self) {
        self.items.clear();
        self.lines.clear();
    }

    /// Lines computed by the last `measure`.
    #[must_use]
    pub fn lines(&self) -> &[FlexLine] {
        &self.lines
    }

    /// Measure against box-model constraints instead of raw specs.
    pub fn measure_with_constraints(&mut self, constraints: Constraints) -> Size {
        let (width_spec, height_spec) = constraints.to_measure_specs();
        self.measure(width_spec, height_spec)
    }

    /// Measure every item, break them into lines, resolve flexible lengths
    /// and return the container's own size.
    pub fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size {
        let style = self.style;
        let orientation = Orientation::from(style.flex_direction);
        let span = trace_span!(
            "flex_measure",
            direction = ?style.flex_direction,
            items = self.items.len()
        );
        let _enter = span.enter();

        let (main_spec, cross_spec) = orientation.split_specs(width_spec, height_spec);
        let main_padding = orientation.main_padding(&style.padding);
        let cross_padding = orientation.cross_padding(&style.padding);
        let inner_main = main_spec.shrink_by(main_padding);
        let line_cross = match (style.flex_wrap, cross_spec.mode()) {
            (FlexWrap::NoWrap, MeasureSpecMode::Exactly) => {
                Some(cross_spec.shrink_by(cross_padding).size())
            }
            _ => None,
        };

        let mut lines = Vec::new();
        let mut current = FlexLine::new();
        for index in self.flow_order() {
            let item = &mut self.items[index];
            let main_child = main_spec.for_child(
                main_padding.saturating_add(orientation.main_margin(item)),
                orientation.main_size(item),
            );
            let cross_child = match line_cross {
                Some(cross) if is_stretched(item, style.align_items, orientation) => {
                    MeasureSpec::clamped(
                        cross - orientation.cross_margin(item),
                        MeasureSpecMode::Exactly,
                    )
                }
                _ => cross_spec.for_child(
                    cross_padding.saturating_add(orientation.cross_margin(item)),
                    orientation.cross_size(item),
                ),
            };
            measure_item(item, orientation, main_child, cross_child);

            let main = orientation.main_measured_size_with_margin(item);
            if style.flex_wrap == FlexWrap::Wrap && !current.fits(main, inner_main.bound()) {
                lines.push(std::mem::take(&mut current));
            }
            current.push(index, main);
        }
        if !current.is_empty() {
            lines.push(current);
        }

        let content_main = content_main_size(&lines, style.flex_wrap);
        let target = match inner_main.mode() {
            MeasureSpecMode::Exactly => inner_main.size(),
            MeasureSpecMode::AtMost => content_main.min(inner_main.size()),
            MeasureSpecMode::Unspecified => content_main,
        };

        for (number, line) in lines.iter_mut().enumerate() {
            self.flex_line(line, orientation, cross_spec, target);
            let cross = match line_cross {
                Some(cross) if style.align_items == AlignItems::Stretch => cross,
                _ => line
                    .items()
                    .iter()
                    .map(|&index| orientation.cross_measured_size_with_margin(&self.items[index]))
                    .max()
                    .unwrap_or(0),
            };
            line.set_cross_size(cross);
            trace!(
                line = number,
                items = line.len(),
                main = line.main_size(),
                cross = line.cross_size(),
                "flex line resolved"
            );
        }

        let used_main = content_main_size(&lines, style.flex_wrap);
        let used_cross = total_cross_size(&lines);
        let size = orientation.size(
            main_spec.resolve(used_main.saturating_add(main_padding)),
            cross_spec.resolve(used_cross.saturating_add(cross_padding)),
        );

        debug!(
            lines = lines.len(),
            width = size.width,
            height = size.height,
            "flex container measured"
        );
        self.lines = lines;
        size
    }

    /// Position every item inside a container of the given outer size.
    ///
    /// Reversed directions pack against the main-end edge: `FlexStart` puts
    /// the first item at the far end. Uses the lines from the last [`measure`](Self::measure); without one,
    /// no item is placed.
    pub fn layout(&mut self, width: i32, height: i32) {
        let style = self.style;
        let orientation = Orientation::from(style.flex_direction);
        let span = trace_span!(
            "flex_layout",
            direction = ?style.flex_direction,
            items = self.items.len(),
            width,
            height
        );
        let _enter = span.enter();

        let outer = Size::new(width, height);
        let inner_main = (orientation.main(outer) - orientation.main_padding(&style.padding)).max(0);
        let inner_cross =
            (orientation.cross(outer) - orientation.cross_padding(&style.padding)).max(0);

        let mut lines = std::mem::take(&mut self.lines);
        if style.flex_wrap == FlexWrap::NoWrap {
            if let [line] = lines.as_mut_slice() {
                line.set_cross_size(inner_cross);
            }
        }

        let free_cross = inner_cross.saturating_sub(total_cross_size(&lines));
        let across = if free_cross > 0 {
            style.align_content.distribute(free_cross as f32, lines.len())
        } else {
            Distribution::default()
        };

        let mut line_offset = orientation.cross_start_padding(&style.padding) as f32 + across.offset;
        for line in &lines {
            let free_main = (inner_main - line.main_size()) as f32;
            let along = if style.flex_direction.is_reversed() {
                style.justify_content.distribute_from_end(free_main, line.len())
            } else {
                style.justify_content.distribute(free_main, line.len())
            };
            let mut cursor = orientation.main_start_padding(&style.padding) as f32 + along.offset;

            for &index in line.items() {
                let item = &mut self.items[index];
                let alignment = item.align_self().resolve(style.align_items);
                if is_stretched(item, style.align_items, orientation) {
                    let main = orientation.main_measured_size(item);
                    let cross = line.cross_size() - orientation.cross_margin(item);
                    measure_item(
                        item,
                        orientation,
                        MeasureSpec::clamped(main, MeasureSpecMode::Exactly),
                        MeasureSpec::clamped(cross, MeasureSpecMode::Exactly),
                    );
                }

                let cross_offset = alignment.offset(
                    line.cross_size(),
                    orientation.cross_measured_size_with_margin(item),
                );
                let main_position = cursor + orientation.main_start_margin(item) as f32;
                let cross_position =
                    line_offset + cross_offset + orientation.cross_start_margin(item) as f32;
                item.set_position(orientation.point(
                    main_position.round() as i32,
                    cross_position.round() as i32,
                ));
                trace!(index, x = item.x(), y = item.y(), "flex item placed");

                cursor += orientation.main_measured_size_with_margin(item) as f32 + along.gap;
            }
            line_offset += line.cross_size() as f32 + across.gap;
        }

        debug!(lines = lines.len(), "flex container laid out");
        self.lines = lines;
    }

    /// Item indices in flow order.
    fn flow_order(&self) -> Vec<usize> {
        let count = self.items.len();
        if self.style.flex_direction.is_reversed() {
            (0..count).rev().collect()
        } else {
            (0..count).collect()
        }
    }

    /// Distribute free space in one line and re-measure items whose main
    /// size changed.
    fn flex_line(
        &mut self,
        line: &mut FlexLine,
        orientation: Orientation,
        cross_spec: MeasureSpec,
        target: i32,
    ) {
        let style = self.style;
        let inputs: Vec<FlexInput> = line
            .items()
            .iter()
            .map(|&index| {
                let item = &self.items[index];
                FlexInput {
                    base: orientation.main_measured_size(item),
                    grow: item.flex_grow(),
                    shrink: item.flex_shrink(),
                    min: orientation.min_main(item.measurable()),
                    max: orientation.max_main(item.measurable()),
                }
            })
            .collect();

        let free_space = target - line.main_size();
        let sizes = resolve_flexible_lengths(&inputs, free_space);

        let mut main_size: i32 = 0;
        for ((&index, input), &size) in line.items().iter().zip(&inputs).zip(&sizes) {
            let item = &mut self.items[index];
            main_size = main_size.saturating_add(size.saturating_add(orientation.main_margin(item)));
            if size == input.base {
                continue;
            }

            if is_stretched(item, style.align_items, orientation) {
                let cross = orientation.intrinsic_cross(item.measurable(), size).max(0);
                item.set_measured_size(orientation.size(size, cross));
            } else {
                let cross_child = cross_spec.for_child(
                    orientation
                        .cross_padding(&style.padding)
                        .saturating_add(orientation.cross_margin(item)),
                    orientation.cross_size(item),
                );
                measure_item(
                    item,
                    orientation,
                    MeasureSpec::clamped(size, MeasureSpecMode::Exactly),
                    cross_child,
                );
            }
            trace!(index, base = input.base, size, "flexed item");
        }
        line.set_main_size(main_size);
    }
}

/// Main size of the content: every line's main size with wrapping, the single
/// line's otherwise.
fn content_main_size(lines: &[FlexLine], wrap: FlexWrap) -> i32 {
    match wrap {
        FlexWrap::Wrap => lines
            .iter()
            .map(FlexLine::main_size)
            .fold(0, i32::saturating_add),
        FlexWrap::NoWrap => lines.first().map_or(0, FlexLine::main_size),
    }
}

/// Sum of the lines' cross sizes, saturating at `i32::MAX`.
fn total_cross_size(lines: &[FlexLine]) -> i32 {
    lines
        .iter()
        .map(FlexLine::cross_size)
        .fold(0, i32::saturating_add)
}

/// Whether `layout` stretches this item across its line.
fn is_stretched(item: &FlexItem<'_>, align_items: AlignItems, orientation: Orientation) -> bool {
    item.align_self().resolve(align_items) == AlignItems::Stretch
        && !matches!(orientation.cross_size(item), RequestedSize::Fixed(_))
}

/// Measure with main/cross specs and store the result, coercing values that
/// break the spec contract.
fn measure_item(
    item: &mut FlexItem<'_>,
    orientation: Orientation,
    main_spec: MeasureSpec,
    cross_spec: MeasureSpec,
) {
    let (width_spec, height_spec) = orientation.join_specs(main_spec, cross_spec);
    let measured = item.measurable_mut().measure(width_spec, height_spec);
    item.set_measured_size(Size::new(
        honor_spec("width", width_spec, measured.width),
        honor_spec("height", height_spec, measured.height),
    ));
}

fn honor_spec(dimension: &'static str, spec: MeasureSpec, value: i32) -> i32 {
    if spec.is_satisfied_by(value) {
        return value;
    }
    let coerced = spec.resolve(value);
    warn!(dimension, %spec, value, coerced, "measurable ignored its measure spec");
    coerced
}
