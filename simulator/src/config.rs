//! Simulated screen and viewport limits.

use clock_face::Density;

/// Simulated display width in pixels.
pub const SCREEN_WIDTH: u32 = 320;

/// Simulated display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Window pixel scale.
pub const WINDOW_SCALE: u32 = 2;

/// Screen density. Below 1.0 so a 240 px face is 320 dp and leaves compact mode.
pub const DENSITY: Density = Density::new(0.75);

/// Side of the requested viewport at startup.
pub const INITIAL_VIEWPORT: u32 = 240;

/// Smallest requested viewport side.
pub const MIN_VIEWPORT: u32 = 40;

/// Largest requested viewport side.
pub const MAX_VIEWPORT: u32 = SCREEN_HEIGHT;

/// Viewport change per key press.
pub const VIEWPORT_STEP: u32 = 20;
