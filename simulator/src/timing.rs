//! Timing constants for the simulator.
//!
//! These use `std::time::Duration`, which the `no_std` library cannot, so
//! they live here rather than next to the widget's tick period.

use std::time::Duration;

/// Target frame time (~50 FPS). The main loop sleeps if frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Duration that popups remain visible on screen.
pub const POPUP_DURATION: Duration = Duration::from_millis(1500);
