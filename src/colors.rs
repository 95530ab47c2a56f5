//! Color constants for the clock face.
//!
//! The face is drawn in a single ink color on a light background. All
//! constants come from the `RgbColor` trait so they map to exact Rgb565
//! values with no conversion on the display side.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Pure black (0, 0, 0). Ink for the ring, dots, numerals and hands.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Face background.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure green (0, 63, 0). Debug page headings.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure yellow (31, 63, 0). Highlighted debug values.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Dark gray for debug page dividers.
/// RGB565: (8, 16, 8) - roughly 25% brightness.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Orange for debug log lines.
/// RGB565: (31, 32, 0) - slightly darker than yellow.
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);

/// Background the widget clears to before every frame.
pub const FACE_BACKGROUND: Rgb565 = WHITE;

/// Ink used for every face element.
pub const FACE_INK: Rgb565 = BLACK;
