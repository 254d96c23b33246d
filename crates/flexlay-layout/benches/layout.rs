//! Benchmarks for flex container passes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flexlay_core::{MeasureSpec, RequestedSize};
use flexlay_layout::{
    AlignItems, ContainerStyle, FlexContainer, FlexItem, FlexWrap, JustifyContent,
};
use flexlay_test::{FixedMeasurable, TextMeasurable};

fn fixed_children(count: usize) -> Vec<FixedMeasurable> {
    (0..count)
        .map(|i| FixedMeasurable::new(20 + (i % 7) as i32 * 5, 10 + (i % 3) as i32 * 4))
        .collect()
}

fn run_pass(style: ContainerStyle, children: &mut [FixedMeasurable], width: i32) {
    let mut container = FlexContainer::new(style);
    for (i, child) in children.iter_mut().enumerate() {
        let item = FlexItem::new(child);
        let item = if i % 4 == 0 {
            item.with_flex_grow(1.0).expect("valid grow factor")
        } else {
            item
        };
        container.add_item(item);
    }
    let width_spec = MeasureSpec::exactly(width).expect("non-negative width");
    let size = container.measure(width_spec, MeasureSpec::unspecified(0));
    container.layout(size.width, size.height);
    black_box(container.lines().len());
}

fn bench_single_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_line");
    let style = ContainerStyle::default().with_justify_content(JustifyContent::SpaceBetween);

    for count in [4usize, 32, 256] {
        let mut children = fixed_children(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| run_pass(style, &mut children, black_box(4_000)));
        });
    }
    group.finish();
}

fn bench_wrapped(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrapped");
    let style = ContainerStyle::default()
        .with_wrap(FlexWrap::Wrap)
        .with_align_items(AlignItems::Center);

    for count in [32usize, 256, 1024] {
        let mut children = fixed_children(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| run_pass(style, &mut children, black_box(400)));
        });
    }
    group.finish();
}

fn bench_shrinking_text(c: &mut Criterion) {
    let mut texts: Vec<TextMeasurable> = (0..64).map(|i| TextMeasurable::new(8 + i % 13, 6, 14)).collect();
    let mut icons: Vec<FixedMeasurable> = (0..64)
        .map(|_| FixedMeasurable::new(24, 24).with_requested_width(RequestedSize::Fixed(24)))
        .collect();

    let width_spec = MeasureSpec::exactly(2_000).expect("non-negative width");

    c.bench_function("shrinking_text_row", |b| {
        b.iter(|| {
            let mut container = FlexContainer::new(ContainerStyle::default());
            for (text, icon) in texts.iter_mut().zip(icons.iter_mut()) {
                container.add_item(FlexItem::new(icon));
                container.add_item(FlexItem::new(text));
            }
            let size = container.measure(black_box(width_spec), MeasureSpec::unspecified(0));
            container.layout(size.width, size.height);
            black_box(size)
        });
    });
}

criterion_group!(benches, bench_single_line, bench_wrapped, bench_shrinking_text);
criterion_main!(benches);
