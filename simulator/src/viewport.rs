//! Placement of the square clock viewport on the simulated screen.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::{MAX_VIEWPORT, MIN_VIEWPORT, SCREEN_HEIGHT, SCREEN_WIDTH, VIEWPORT_STEP};

/// Rectangle of `size` centered on the screen.
pub fn centered_viewport(size: Size) -> Rectangle {
    let x = (SCREEN_WIDTH.saturating_sub(size.width) / 2) as i32;
    let y = (SCREEN_HEIGHT.saturating_sub(size.height) / 2) as i32;
    Rectangle::new(Point::new(x, y), size)
}

/// Next requested side after a grow or shrink key press.
pub fn step_viewport(side: u32, grow: bool) -> u32 {
    let next = if grow {
        side.saturating_add(VIEWPORT_STEP)
    } else {
        side.saturating_sub(VIEWPORT_STEP)
    };
    next.clamp(MIN_VIEWPORT, MAX_VIEWPORT)
}
