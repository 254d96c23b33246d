//! Core types and contracts for the flexlay engine.
//!
//! This crate provides the foundation the flex algorithm is built on:
//! - Geometric primitives: [`Size`], [`Spacing`], [`Point`], [`Rect`]
//! - Size constraints: [`MeasureSpec`] and box-model [`Constraints`]
//! - The host capability every item implements: [`Measurable`]
//! - Configuration errors: [`LayoutError`]

mod constraints;
mod error;
mod geometry;
mod measurable;
mod measure_spec;

pub use constraints::Constraints;
pub use error::{check_flex_factor, LayoutError, Result};
pub use geometry::{Point, Rect, Size, Spacing};
pub use measurable::{Measurable, RequestedSize};
pub use measure_spec::{MeasureSpec, MeasureSpecMode};
