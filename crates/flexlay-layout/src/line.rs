//! Flex lines: runs of items laid out together along the main axis.

/// A group of items sharing one main-axis run.
///
/// Lines are rebuilt by every `measure` call and read by the following
/// `layout`. Item indices are stored in flow order, which is reversed relative
/// to the container's item list for reversed directions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlexLine {
    items: Vec<usize>,
    main_size: i32,
    cross_size: i32,
}

impl FlexLine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Indices into the container's item list, in flow order.
    #[must_use]
    pub fn items(&self) -> &[usize] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of the items' main sizes including margins.
    #[must_use]
    pub const fn main_size(&self) -> i32 {
        self.main_size
    }

    /// Largest item cross size including margins.
    #[must_use]
    pub const fn cross_size(&self) -> i32 {
        self.cross_size
    }

    /// Append an item whose main size (margins included) is `main`.
    pub(crate) fn push(&mut self, index: usize, main: i32) {
        self.items.push(index);
        self.main_size = self.main_size.saturating_add(main);
    }

    pub(crate) fn set_main_size(&mut self, main_size: i32) {
        self.main_size = main_size;
    }

    pub(crate) fn set_cross_size(&mut self, cross_size: i32) {
        self.cross_size = cross_size;
    }

    /// Whether an item of main size `main` still fits under `limit`.
    ///
    /// An empty line accepts anything so an oversized item gets a line of its
    /// own instead of being dropped.
    pub(crate) fn fits(&self, main: i32, limit: Option<i32>) -> bool {
        match limit {
            Some(limit) => self.is_empty() || self.main_size.saturating_add(main) <= limit,
            None => true,
        }
    }
}
