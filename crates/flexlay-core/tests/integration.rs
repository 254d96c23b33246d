//! Integration tests for flexlay-core.
//!
//! Exercise the public geometry and constraint types together, the way the
//! layout crate and hosts use them.

use flexlay_core::{
    Constraints, LayoutError, Measurable, MeasureSpec, MeasureSpecMode, Rect, RequestedSize, Size,
    Spacing,
};
use proptest::prelude::*;

/// A host view that reports a fixed preferred size.
struct HostView {
    preferred: Size,
}

impl Measurable for HostView {
    fn requested_width(&self) -> RequestedSize {
        RequestedSize::MatchParent
    }

    fn width(&self, _height: i32) -> i32 {
        self.preferred.width
    }

    fn height(&self, _width: i32) -> i32 {
        self.preferred.height
    }

    fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size {
        Size::new(
            width_spec.resolve(self.preferred.width),
            height_spec.resolve(self.preferred.height),
        )
    }
}

#[test]
fn test_host_constraints_to_specs_and_back() {
    let constraints = Constraints::new(0, 320, 48, 48).unwrap();
    let (width, height) = constraints.to_measure_specs();
    assert_eq!(width, MeasureSpec::at_most(320).unwrap());
    assert_eq!(height, MeasureSpec::exactly(48).unwrap());
    assert_eq!(Constraints::from_measure_specs(width, height), constraints);
}

#[test]
fn test_unbounded_constraints_carry_minimum() {
    let constraints = Constraints::new(12, Constraints::INFINITY, 0, Constraints::INFINITY).unwrap();
    let (width, height) = constraints.to_measure_specs();
    assert_eq!(width.mode(), MeasureSpecMode::Unspecified);
    assert_eq!(width.size(), 12);
    assert_eq!(height, MeasureSpec::unspecified(0));
}

#[test]
fn test_measure_host_view_through_constraints() {
    let mut view: Box<dyn Measurable> = Box::new(HostView {
        preferred: Size::new(400, 30),
    });
    let (width, height) = Constraints::loose(Size::new(320, 480)).to_measure_specs();

    let child_width = width.for_child(16, view.requested_width());
    assert_eq!(child_width, MeasureSpec::at_most(304).unwrap());

    let size = view.measure(child_width, height);
    assert_eq!(size, Size::new(304, 30));
    assert!(child_width.is_satisfied_by(size.width));
}

#[test]
fn test_padding_shrinks_available_frame() {
    let padding = Spacing::new(8, 8, 4, 12).unwrap();
    let outer = Rect::new(0, 0, 100, 60);
    let inner = Rect::new(
        padding.start(),
        padding.top(),
        outer.width - padding.horizontal(),
        outer.height - padding.vertical(),
    );
    assert!(outer.contains_rect(&inner));
    assert_eq!(inner.size(), Size::new(84, 44));
}

#[test]
fn test_configuration_errors_surface_at_construction() {
    assert!(matches!(
        Spacing::all(-1),
        Err(LayoutError::InvalidSpacing { start: -1, .. })
    ));
    assert!(matches!(
        MeasureSpec::at_most(-3),
        Err(LayoutError::NegativeMeasureSpec {
            mode: MeasureSpecMode::AtMost,
            size: -3
        })
    ));
    assert!(matches!(
        Constraints::new(10, 5, 0, 0),
        Err(LayoutError::InvalidConstraints { .. })
    ));
}

#[test]
fn test_error_messages() {
    let err = Spacing::new(1, -2, 3, 4).unwrap_err();
    assert_eq!(err.to_string(), "Invalid spacing: [1, -2, 3, 4]");
}

#[test]
fn test_spacing_json_validation() {
    let spacing: Spacing = serde_json::from_str(r#"{"start": 2, "end": 2}"#).unwrap();
    assert_eq!(spacing, Spacing::symmetric(2, 0).unwrap());
    assert_eq!(spacing.to_string(), "Spacing(horizontal=2, vertical=0)");
    assert!(serde_json::from_str::<Spacing>(r#"{"bottom": -8}"#).is_err());
}

proptest! {
    #[test]
    fn prop_bounded_constraints_round_trip(
        max_width in 0i32..10_000,
        height in 0i32..10_000,
    ) {
        let constraints = Constraints::new(0, max_width, height, height).unwrap();
        let (w, h) = constraints.to_measure_specs();
        prop_assert_eq!(Constraints::from_measure_specs(w, h), constraints);
    }

    #[test]
    fn prop_constrain_stays_in_bounds(
        min in 0i32..500,
        extra in 0i32..500,
        width in -1_000i32..2_000,
        height in -1_000i32..2_000,
    ) {
        let constraints = Constraints::new(min, min + extra, min, min + extra).unwrap();
        let size = constraints.constrain(Size::new(width, height));
        prop_assert!(size.width >= min && size.width <= min + extra);
        prop_assert!(size.height >= min && size.height <= min + extra);
    }

    #[test]
    fn prop_child_spec_never_negative(
        parent in 0i32..1_000,
        used in 0i32..2_000,
        fixed in 0i32..500,
    ) {
        for mode in [MeasureSpecMode::Exactly, MeasureSpecMode::AtMost, MeasureSpecMode::Unspecified] {
            let spec = MeasureSpec::new(parent, mode).unwrap();
            for requested in [RequestedSize::WrapContent, RequestedSize::MatchParent, RequestedSize::Fixed(fixed)] {
                let child = spec.for_child(used, requested);
                prop_assert!(child.size() >= 0);
            }
        }
    }
}
