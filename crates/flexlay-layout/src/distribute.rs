//! Flexible length resolution: distribute a line's free space among its items.

/// One item's participation in flexible length resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FlexInput {
    /// Main size before flexing, margins excluded.
    pub(crate) base: i32,
    pub(crate) grow: f32,
    pub(crate) shrink: f32,
    pub(crate) min: i32,
    pub(crate) max: i32,
}

impl FlexInput {
    #[cfg(test)]
    pub(crate) const fn new(base: i32, grow: f32, shrink: f32) -> Self {
        Self {
            base,
            grow,
            shrink,
            min: 0,
            max: i32::MAX,
        }
    }
}

/// Resolve the main size of every item after distributing `free_space`.
///
/// Positive free space goes to items in proportion to `grow`. Negative free
/// space is taken from items in proportion to `shrink * base`. Items that hit
/// their `min`/`max` are frozen and the remainder is redistributed among the
/// rest. Fractions are rounded with a carried remainder so the total stays
/// exact. Without any growable (or shrinkable) item the base sizes are kept.
pub(crate) fn resolve_flexible_lengths(inputs: &[FlexInput], free_space: i32) -> Vec<i32> {
    let mut sizes: Vec<f32> = inputs.iter().map(|input| input.base as f32).collect();

    if free_space > 0 {
        distribute_grow(inputs, &mut sizes, free_space as f32);
    } else if free_space < 0 {
        distribute_shrink(inputs, &mut sizes, -free_space as f32);
    }

    round_with_carry(inputs, &sizes)
}

fn distribute_grow(inputs: &[FlexInput], sizes: &mut [f32], free_space: f32) {
    let mut frozen: Vec<bool> = inputs
        .iter()
        .map(|input| input.grow <= 0.0 || input.base >= input.max)
        .collect();
    let mut remaining = free_space;

    for _ in 0..inputs.len() {
        let total_grow: f32 = inputs
            .iter()
            .zip(&frozen)
            .filter(|(_, &is_frozen)| !is_frozen)
            .map(|(input, _)| input.grow)
            .sum();
        if total_grow <= 0.0 || remaining <= f32::EPSILON {
            break;
        }

        let mut applied = 0.0;
        let mut any_frozen = false;
        for ((input, size), is_frozen) in inputs.iter().zip(sizes.iter_mut()).zip(frozen.iter_mut()) {
            if *is_frozen {
                continue;
            }
            let target = *size + remaining * input.grow / total_grow;
            let clamped = target.min(input.max as f32);
            if clamped < target {
                *is_frozen = true;
                any_frozen = true;
            }
            applied += clamped - *size;
            *size = clamped;
        }

        remaining -= applied;
        if !any_frozen {
            break;
        }
    }
}

fn distribute_shrink(inputs: &[FlexInput], sizes: &mut [f32], overflow: f32) {
    let mut frozen: Vec<bool> = inputs
        .iter()
        .map(|input| input.shrink <= 0.0 || input.base <= input.min)
        .collect();
    let mut remaining = overflow;

    for _ in 0..inputs.len() {
        let total_weight: f32 = inputs
            .iter()
            .zip(&frozen)
            .filter(|(_, &is_frozen)| !is_frozen)
            .map(|(input, _)| input.shrink * input.base as f32)
            .sum();
        if total_weight <= 0.0 || remaining <= f32::EPSILON {
            break;
        }

        let mut applied = 0.0;
        let mut any_frozen = false;
        for ((input, size), is_frozen) in inputs.iter().zip(sizes.iter_mut()).zip(frozen.iter_mut()) {
            if *is_frozen {
                continue;
            }
            let weight = input.shrink * input.base as f32;
            let target = *size - remaining * weight / total_weight;
            let floor = input.min.max(0) as f32;
            let clamped = target.max(floor);
            if clamped > target {
                *is_frozen = true;
                any_frozen = true;
            }
            applied += *size - clamped;
            *size = clamped;
        }

        remaining -= applied;
        if !any_frozen {
            break;
        }
    }
}

fn round_with_carry(inputs: &[FlexInput], sizes: &[f32]) -> Vec<i32> {
    let mut carry = 0.0f32;
    inputs
        .iter()
        .zip(sizes)
        .map(|(input, &size)| {
            let exact = size + carry;
            let rounded = exact.round();
            carry = exact - rounded;
            let upper = input.max.max(0);
            (rounded as i32).clamp(input.min.max(0).min(upper), upper)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_exact_fit_keeps_bases() {
        let inputs = [FlexInput::new(50, 1.0, 1.0), FlexInput::new(50, 1.0, 1.0)];
        assert_eq!(resolve_flexible_lengths(&inputs, 0), vec![50, 50]);
    }

    #[test]
    fn test_grow_proportional() {
        let inputs = [FlexInput::new(10, 1.0, 1.0), FlexInput::new(10, 3.0, 1.0)];
        assert_eq!(resolve_flexible_lengths(&inputs, 40), vec![20, 40]);
    }

    #[test]
    fn test_grow_only_growable_items() {
        let inputs = [FlexInput::new(50, 0.0, 1.0), FlexInput::new(0, 1.0, 1.0)];
        assert_eq!(resolve_flexible_lengths(&inputs, 50), vec![50, 50]);
    }

    #[test]
    fn test_no_growable_items_leaves_free_space() {
        let inputs = [FlexInput::new(30, 0.0, 1.0), FlexInput::new(30, 0.0, 1.0)];
        assert_eq!(resolve_flexible_lengths(&inputs, 40), vec![30, 30]);
    }

    #[test]
    fn test_grow_respects_max_and_redistributes() {
        let mut capped = FlexInput::new(0, 1.0, 1.0);
        capped.max = 10;
        let inputs = [capped, FlexInput::new(0, 1.0, 1.0)];
        assert_eq!(resolve_flexible_lengths(&inputs, 100), vec![10, 90]);
    }

    #[test]
    fn test_grow_rounding_preserves_total() {
        let inputs = [
            FlexInput::new(0, 1.0, 1.0),
            FlexInput::new(0, 1.0, 1.0),
            FlexInput::new(0, 1.0, 1.0),
        ];
        let sizes = resolve_flexible_lengths(&inputs, 100);
        assert_eq!(sizes.iter().sum::<i32>(), 100);
        assert!(sizes.iter().all(|&s| s == 33 || s == 34));
    }

    #[test]
    fn test_shrink_weighted_by_base() {
        // Overflow of 60 split by shrink * base: 100 and 200.
        let inputs = [FlexInput::new(100, 1.0, 1.0), FlexInput::new(200, 1.0, 1.0)];
        assert_eq!(resolve_flexible_lengths(&inputs, -60), vec![80, 160]);
    }

    #[test]
    fn test_shrink_factor_weighting() {
        let inputs = [FlexInput::new(100, 1.0, 1.0), FlexInput::new(100, 1.0, 3.0)];
        assert_eq!(resolve_flexible_lengths(&inputs, -100), vec![75, 25]);
    }

    #[test]
    fn test_shrink_skips_rigid_items() {
        let inputs = [FlexInput::new(100, 0.0, 0.0), FlexInput::new(100, 0.0, 1.0)];
        assert_eq!(resolve_flexible_lengths(&inputs, -50), vec![100, 50]);
    }

    #[test]
    fn test_shrink_without_shrinkable_items_overflows() {
        let inputs = [FlexInput::new(80, 0.0, 0.0), FlexInput::new(80, 0.0, 0.0)];
        assert_eq!(resolve_flexible_lengths(&inputs, -60), vec![80, 80]);
    }

    #[test]
    fn test_shrink_clamps_to_zero() {
        let inputs = [FlexInput::new(30, 0.0, 1.0), FlexInput::new(20, 0.0, 1.0)];
        assert_eq!(resolve_flexible_lengths(&inputs, -500), vec![0, 0]);
    }

    #[test]
    fn test_shrink_respects_min_and_redistributes() {
        let mut floored = FlexInput::new(100, 0.0, 1.0);
        floored.min = 90;
        let inputs = [floored, FlexInput::new(100, 0.0, 1.0)];
        assert_eq!(resolve_flexible_lengths(&inputs, -50), vec![90, 60]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(resolve_flexible_lengths(&[], 100).is_empty());
    }

    proptest! {
        #[test]
        fn prop_shrink_never_negative(
            bases in prop::collection::vec(0i32..500, 1..8),
            shrinks in prop::collection::vec(0.0f32..4.0, 8),
            overflow in 1i32..5_000,
        ) {
            let inputs: Vec<FlexInput> = bases
                .iter()
                .zip(&shrinks)
                .map(|(&base, &shrink)| FlexInput::new(base, 0.0, shrink))
                .collect();
            let sizes = resolve_flexible_lengths(&inputs, -overflow);
            prop_assert!(sizes.iter().all(|&s| s >= 0));
        }

        #[test]
        fn prop_total_overflow_clamps_every_shrinkable_item_to_zero(
            bases in prop::collection::vec(1i32..500, 1..8),
        ) {
            let inputs: Vec<FlexInput> = bases.iter().map(|&b| FlexInput::new(b, 0.0, 1.0)).collect();
            let total: i32 = bases.iter().sum();
            let sizes = resolve_flexible_lengths(&inputs, -(total + 1));
            prop_assert!(sizes.iter().all(|&s| s == 0));
        }

        #[test]
        fn prop_grow_fills_free_space_exactly(
            bases in prop::collection::vec(0i32..200, 1..8),
            grows in prop::collection::vec(0.1f32..5.0, 8),
            free in 1i32..2_000,
        ) {
            let inputs: Vec<FlexInput> = bases
                .iter()
                .zip(&grows)
                .map(|(&base, &grow)| FlexInput::new(base, grow, 1.0))
                .collect();
            let sizes = resolve_flexible_lengths(&inputs, free);
            let before: i32 = bases.iter().sum();
            prop_assert_eq!(sizes.iter().sum::<i32>(), before + free);
        }
    }
}
