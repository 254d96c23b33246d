#![allow(clippy::manual_assert)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::new_without_default)]
//! Testing harness for the flexlay engine.
//!
//! - [`fixture`]: scripted measurables ([`FixedMeasurable`],
//!   [`TextMeasurable`], [`RecordingMeasurable`])
//! - [`harness`]: [`LayoutHarness`], which owns a container's children and
//!   returns a [`LayoutSnapshot`] per run
//!
//! # Example
//!
//! ```
//! use flexlay_layout::{ContainerStyle, JustifyContent};
//! use flexlay_test::{FixedMeasurable, LayoutHarness};
//!
//! let style = ContainerStyle::default().with_justify_content(JustifyContent::FlexEnd);
//! let mut harness = LayoutHarness::new(style).child(FixedMeasurable::new(20, 10));
//! harness.run_exact(100, 10).assert_frame(0, 80, 0, 20, 10);
//! ```

pub mod fixture;
pub mod harness;

pub use fixture::{FixedMeasurable, MeasureCall, RecordingMeasurable, TextMeasurable};
pub use harness::{LayoutHarness, LayoutSnapshot};

/// Install a `tracing` subscriber filtered by `RUST_LOG` that writes through
/// the test output capture. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
