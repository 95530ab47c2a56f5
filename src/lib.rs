//! Analog clock face widget for `embedded-graphics` displays.
//!
//! The crate is split into a pure geometry core and thin rendering glue:
//!
//! - [`geometry`]: time and viewport size to screen coordinates (no state)
//! - [`widget`]: cached layout, redraw timer and the per-frame draw routine
//! - [`canvas`]: rendering surface trait and its `DrawTarget` adapter
//! - [`density`]: density-independent unit conversion
//! - [`timer`]: repeating redraw timer with explicit start/stop
//! - [`time_source`]: wall-clock sampling abstraction
//! - [`colors`], [`config`], [`styles`]: fixed palette, constants and paints
//! - [`profiling`]: lifecycle event ring buffer shown on the debug page
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p clock-face --lib
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), the library itself is
//! `no_std` and never allocates.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod canvas;
pub mod colors;
pub mod config;
pub mod density;
pub mod geometry;
pub mod profiling;
pub mod styles;
pub mod time_source;
pub mod timer;
pub mod widget;

// Re-export commonly used items
pub use canvas::{ClockCanvas, TargetCanvas};
pub use config::ClockConstants;
pub use density::Density;
pub use geometry::{LabeledPoint, PointF, TickLayout};
pub use time_source::{TimeSource, WallTime};
pub use widget::ClockWidget;
