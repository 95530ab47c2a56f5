//! Popup state management with time-based expiration.
//!
//! Each popup variant holds its start time for expiration checking.

use std::time::Instant;

use clock_face::colors::{GRAY, WHITE};
use clock_face::profiling::push_u32;
use clock_face::styles::{CENTERED, DEBUG_FONT};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::timing::POPUP_DURATION;

const POPUP_WIDTH: u32 = 120;
const POPUP_HEIGHT: u32 = 22;
const POPUP_X: i32 = (SCREEN_WIDTH - POPUP_WIDTH) as i32 / 2;
const POPUP_Y: i32 = SCREEN_HEIGHT as i32 - POPUP_HEIGHT as i32 - 6;

const BORDER_POS: Point = Point::new(POPUP_X - 2, POPUP_Y - 2);
const BORDER_SIZE: Size = Size::new(POPUP_WIDTH + 4, POPUP_HEIGHT + 4);
const BG_POS: Point = Point::new(POPUP_X, POPUP_Y);
const BG_SIZE: Size = Size::new(POPUP_WIDTH, POPUP_HEIGHT);
const TEXT_POS: Point = Point::new(SCREEN_WIDTH as i32 / 2, POPUP_Y + 15);

const WHITE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);
const GRAY_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(GRAY);

/// Active popup with its start time.
#[derive(Clone, Copy, Debug)]
pub enum Popup {
    /// Viewport resized to the given side in pixels.
    Resized(Instant, u32),
    /// Widget detached, timer stopped.
    Paused(Instant),
    /// Widget re-attached.
    Resumed(Instant),
}

impl Popup {
    #[inline]
    pub const fn start_time(&self) -> Instant {
        match self {
            Self::Resized(t, _) | Self::Paused(t) | Self::Resumed(t) => *t,
        }
    }

    /// Check if this popup has expired.
    #[inline]
    pub fn is_expired(&self) -> bool { self.start_time().elapsed() >= POPUP_DURATION }

    /// Popup message.
    pub fn message(&self) -> String<20> {
        let mut s = String::new();
        match self {
            Self::Resized(_, side) => {
                s.push_str("SIZE ").ok();
                push_u32(&mut s, *side);
                s.push_str("px").ok();
            }
            Self::Paused(_) => {
                s.push_str("PAUSED").ok();
            }
            Self::Resumed(_) => {
                s.push_str("RESUMED").ok();
            }
        }
        s
    }
}

/// Bordered status box near the bottom edge of the screen.
pub fn draw_popup<D>(display: &mut D, popup: &Popup)
where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(BORDER_POS, BORDER_SIZE)
        .into_styled(WHITE_FILL)
        .draw(display)
        .ok();

    Rectangle::new(BG_POS, BG_SIZE)
        .into_styled(GRAY_FILL)
        .draw(display)
        .ok();

    let style = MonoTextStyle::new(DEBUG_FONT, WHITE);
    Text::with_text_style(&popup.message(), TEXT_POS, style, CENTERED)
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let now = Instant::now();
        assert_eq!(Popup::Resized(now, 180).message().as_str(), "SIZE 180px");
        assert_eq!(Popup::Paused(now).message().as_str(), "PAUSED");
        assert_eq!(Popup::Resumed(now).message().as_str(), "RESUMED");
    }

    #[test]
    fn test_fresh_popup_not_expired() {
        assert!(!Popup::Paused(Instant::now()).is_expired());
    }
}
