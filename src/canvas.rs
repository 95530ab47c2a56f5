//! Rendering surface used by the clock widget.
//!
//! [`ClockCanvas`] is the small set of primitives the face is made of:
//! clear, circle, line and text. [`TargetCanvas`] implements it for any
//! `DrawTarget<Color = Rgb565>`, which covers the desktop simulator and any
//! display driver built on `embedded-graphics`.
//!
//! Coordinates arrive as sub-pixel [`PointF`] values and are rounded to the
//! nearest pixel here, at the last moment.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, PrimitiveStyleBuilder, StrokeAlignment};
use embedded_graphics::text::Text;
use libm::roundf;

use crate::geometry::PointF;
use crate::styles::{CENTERED, Paint, PaintStyle, StrokeCap, TextPaint};

/// Primitive draw operations issued by the clock widget.
pub trait ClockCanvas {
    type Error;

    /// Fill the whole surface.
    fn clear(&mut self, color: Rgb565) -> Result<(), Self::Error>;

    /// Circle around `center`. Stroked circles are centered on the radius.
    fn draw_circle(&mut self, center: PointF, radius: f32, paint: &Paint) -> Result<(), Self::Error>;

    /// Straight line between two points.
    fn draw_line(&mut self, start: PointF, end: PointF, paint: &Paint) -> Result<(), Self::Error>;

    /// Text horizontally centered on `anchor`, sitting on its baseline.
    fn draw_text(&mut self, text: &str, anchor: PointF, paint: &TextPaint) -> Result<(), Self::Error>;
}

/// Whole-pixel stroke width, never thinner than one pixel.
#[inline]
fn pixel_width(width: f32) -> u32 { (roundf(width) as u32).max(1) }

/// [`ClockCanvas`] over an `embedded-graphics` draw target.
pub struct TargetCanvas<'a, D> {
    target: &'a mut D,
}

impl<'a, D> TargetCanvas<'a, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: &'a mut D) -> Self { Self { target } }
}

impl<D> ClockCanvas for TargetCanvas<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    type Error = D::Error;

    fn clear(&mut self, color: Rgb565) -> Result<(), Self::Error> { self.target.clear(color) }

    fn draw_circle(&mut self, center: PointF, radius: f32, paint: &Paint) -> Result<(), Self::Error> {
        // Non-positive radius collapses the circle to nothing
        if radius <= 0.0 {
            return Ok(());
        }
        let diameter = roundf(radius * 2.0) as u32;
        let style = match paint.style {
            PaintStyle::Fill => PrimitiveStyle::with_fill(paint.color),
            PaintStyle::Stroke => PrimitiveStyleBuilder::new()
                .stroke_color(paint.color)
                .stroke_width(pixel_width(paint.stroke_width))
                .stroke_alignment(StrokeAlignment::Center)
                .build(),
        };
        Circle::with_center(center.to_point(), diameter)
            .into_styled(style)
            .draw(&mut *self.target)
    }

    fn draw_line(&mut self, start: PointF, end: PointF, paint: &Paint) -> Result<(), Self::Error> {
        let width = pixel_width(paint.stroke_width);
        Line::new(start.to_point(), end.to_point())
            .into_styled(PrimitiveStyle::with_stroke(paint.color, width))
            .draw(&mut *self.target)?;

        // embedded-graphics only draws butt caps; round ones are end discs
        if paint.cap == StrokeCap::Round && width > 2 {
            let cap_style = PrimitiveStyle::with_fill(paint.color);
            for p in [start, end] {
                Circle::with_center(p.to_point(), width)
                    .into_styled(cap_style)
                    .draw(&mut *self.target)?;
            }
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &str, anchor: PointF, paint: &TextPaint) -> Result<(), Self::Error> {
        let style = MonoTextStyle::new(paint.font, paint.color);
        Text::with_text_style(text, anchor.to_point(), style, CENTERED).draw(&mut *self.target)?;
        Ok(())
    }
}

/// Canvas that records calls instead of drawing, for widget tests.
#[cfg(test)]
pub mod testing {
    use std::string::String;
    use std::vec::Vec;

    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    pub enum DrawCall {
        Clear(Rgb565),
        Circle { center: PointF, radius: f32, paint: Paint },
        Line { start: PointF, end: PointF, paint: Paint },
        Text { text: String, anchor: PointF },
    }

    #[derive(Default)]
    pub struct RecordingCanvas {
        pub calls: Vec<DrawCall>,
    }

    impl ClockCanvas for RecordingCanvas {
        type Error = core::convert::Infallible;

        fn clear(&mut self, color: Rgb565) -> Result<(), Self::Error> {
            self.calls.push(DrawCall::Clear(color));
            Ok(())
        }

        fn draw_circle(&mut self, center: PointF, radius: f32, paint: &Paint) -> Result<(), Self::Error> {
            self.calls.push(DrawCall::Circle {
                center,
                radius,
                paint: *paint,
            });
            Ok(())
        }

        fn draw_line(&mut self, start: PointF, end: PointF, paint: &Paint) -> Result<(), Self::Error> {
            self.calls.push(DrawCall::Line {
                start,
                end,
                paint: *paint,
            });
            Ok(())
        }

        fn draw_text(&mut self, text: &str, anchor: PointF, _paint: &TextPaint) -> Result<(), Self::Error> {
            self.calls.push(DrawCall::Text {
                text: text.into(),
                anchor,
            });
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::mono_font::ascii::FONT_6X10;

    use super::*;
    use crate::colors::{BLACK, WHITE};

    fn display() -> MockDisplay<Rgb565> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        display
    }

    #[test]
    fn test_clear_fills_surface() {
        let mut display = display();
        TargetCanvas::new(&mut display).clear(WHITE).unwrap();
        assert_eq!(display.get_pixel(Point::new(0, 0)), Some(WHITE));
        assert_eq!(display.get_pixel(Point::new(63, 63)), Some(WHITE));
    }

    #[test]
    fn test_filled_circle() {
        let mut display = display();
        TargetCanvas::new(&mut display)
            .draw_circle(PointF::new(20.0, 20.0), 4.0, &Paint::fill(BLACK))
            .unwrap();
        assert_eq!(display.get_pixel(Point::new(20, 20)), Some(BLACK));
        assert_eq!(display.get_pixel(Point::new(30, 30)), None);
    }

    #[test]
    fn test_stroked_circle_leaves_center_empty() {
        let mut display = display();
        TargetCanvas::new(&mut display)
            .draw_circle(PointF::new(32.0, 32.0), 20.0, &Paint::stroke(BLACK, 2.0))
            .unwrap();
        assert_eq!(display.get_pixel(Point::new(32, 32)), None);
        assert!(!display.affected_area().is_zero_sized());
    }

    #[test]
    fn test_zero_radius_draws_nothing() {
        let mut display = display();
        TargetCanvas::new(&mut display)
            .draw_circle(PointF::new(10.0, 10.0), 0.0, &Paint::fill(BLACK))
            .unwrap();
        assert!(display.affected_area().is_zero_sized());
    }

    #[test]
    fn test_line() {
        let mut display = display();
        TargetCanvas::new(&mut display)
            .draw_line(PointF::new(2.0, 5.0), PointF::new(40.0, 5.0), &Paint::stroke(BLACK, 1.0))
            .unwrap();
        assert_eq!(display.get_pixel(Point::new(20, 5)), Some(BLACK));
        assert_eq!(display.get_pixel(Point::new(20, 6)), None);
    }

    #[test]
    fn test_round_cap_extends_past_end() {
        let mut display = display();
        let paint = Paint::stroke(BLACK, 8.0).with_round_cap();
        TargetCanvas::new(&mut display)
            .draw_line(PointF::new(20.0, 30.0), PointF::new(40.0, 30.0), &paint)
            .unwrap();
        // Butt end stops at x=40, the cap disc reaches further
        assert_eq!(display.get_pixel(Point::new(42, 30)), Some(BLACK));
    }

    #[test]
    fn test_text_draws_glyphs() {
        let mut display = display();
        TargetCanvas::new(&mut display)
            .draw_text("12", PointF::new(32.0, 32.0), &TextPaint::new(BLACK, &FONT_6X10))
            .unwrap();
        let area = display.affected_area();
        assert!(!area.is_zero_sized());
        // Centered on the anchor and above the baseline
        assert!(area.top_left.x < 32 && area.bottom_right().unwrap().x > 32);
        assert!(area.top_left.y < 32);
    }
}
