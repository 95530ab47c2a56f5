//! Clock face geometry.
//!
//! Pure functions mapping (time, viewport size, [`ClockConstants`]) to screen
//! coordinates. Nothing here keeps state: the widget calls into this module on
//! every resize (ring layout) and every frame (hands).
//!
//! # Conventions
//!
//! Screen space with y growing downward. Ring angles are measured from the
//! positive x-axis (3 o'clock) and increase clockwise on screen. Hand angles
//! are measured clockwise from 12 o'clock and converted with
//! [`compute_hand_direction`].

use core::f32::consts::TAU;

use embedded_graphics::prelude::Point;
use heapless::Vec;
use libm::{cosf, roundf, sinf, sqrtf};

use crate::config::{ClockConstants, HOURS_COUNT, MINUTE_TICKS_COUNT, POINTS_COUNT};
use crate::time_source::WallTime;

const TOTAL_DEGREES: f32 = 360.0;
const HOURS_ON_CLOCK: f32 = 12.0;
const MINUTES_IN_HOUR: f32 = 60.0;
const SECONDS_IN_MINUTE: f32 = 60.0;

// =============================================================================
// Value Types
// =============================================================================

/// Screen-space coordinate with sub-pixel precision.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }

    /// Round to the nearest pixel.
    #[inline]
    pub fn to_point(self) -> Point { Point::new(roundf(self.x) as i32, roundf(self.y) as i32) }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance_to(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        sqrtf(dx * dx + dy * dy)
    }
}

/// Hour marker: the dot position plus where its numeral goes.
///
/// `point_text` is the raw position on the numeral ring. `text` is the
/// anchor actually passed to the text renderer; it equals `point_text` until
/// [`compute_text_anchor`] applies the font baseline correction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LabeledPoint {
    pub point: PointF,
    pub text: PointF,
    pub point_text: PointF,
}

impl LabeledPoint {
    #[inline]
    pub const fn new(point: PointF, point_text: PointF) -> Self {
        Self {
            point,
            text: point_text,
            point_text,
        }
    }
}

/// Positions of every mark on the tick ring.
///
/// `hours[k]` carries numeral `k + 1`, clockwise. `minutes` order carries no
/// meaning.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickLayout {
    pub hours: Vec<LabeledPoint, HOURS_COUNT>,
    pub minutes: Vec<PointF, MINUTE_TICKS_COUNT>,
}

/// The three radii derived from the main circle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FaceRadii {
    /// Main (stroked) circle radius.
    pub main: f32,
    /// Tick ring radius. Reference length of the second hand.
    pub inner: f32,
    /// Numeral ring radius. Reference length of the hour and minute hands.
    pub text: f32,
}

/// Line segment of one clock hand.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HandSegment {
    /// Tail end, slightly behind the center.
    pub start: PointF,
    /// Tip.
    pub end: PointF,
}

/// Clock hands, in draw order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hand {
    Hour,
    Minute,
    Second,
}

impl Hand {
    /// All hands in the order they are drawn.
    pub const ALL: [Self; 3] = [Self::Hour, Self::Minute, Self::Second];

    /// Hand angle in degrees, clockwise from 12 o'clock.
    ///
    /// Hour and minute hands creep continuously (the hour hand with minutes,
    /// the minute hand with seconds). The second hand steps once per second.
    pub fn angle(self, time: WallTime) -> f32 {
        let hours = f32::from(time.hours % 12);
        let minutes = f32::from(time.minutes);
        let seconds = f32::from(time.seconds);
        match self {
            Self::Hour => {
                hours * TOTAL_DEGREES / HOURS_ON_CLOCK + minutes * TOTAL_DEGREES / (HOURS_ON_CLOCK * MINUTES_IN_HOUR)
            }
            Self::Minute => {
                minutes * TOTAL_DEGREES / MINUTES_IN_HOUR
                    + seconds * TOTAL_DEGREES / (MINUTES_IN_HOUR * SECONDS_IN_MINUTE)
            }
            Self::Second => seconds * TOTAL_DEGREES / SECONDS_IN_MINUTE,
        }
    }

    /// Hand length. Hour and minute hands scale with the numeral ring, the
    /// second hand with the tick ring.
    pub fn length(self, radii: &FaceRadii, constants: &ClockConstants) -> f32 {
        match self {
            Self::Hour => radii.text * constants.hour_hand_fraction,
            Self::Minute => radii.text * constants.minute_hand_fraction,
            Self::Second => radii.inner * constants.second_hand_fraction,
        }
    }
}

// =============================================================================
// Circle Layout
// =============================================================================

/// Main circle radius: half the smaller side minus the ring stroke.
#[inline]
pub fn compute_main_circle_radius(width: u32, height: u32, stroke_width: f32) -> f32 {
    width.min(height) as f32 / 2.0 - stroke_width
}

/// Viewport center.
#[inline]
pub fn compute_center(width: u32, height: u32) -> PointF { PointF::new(width as f32 / 2.0, height as f32 / 2.0) }

/// Derive the tick ring and numeral ring radii from the main radius.
#[inline]
pub fn compute_radii(main_radius: f32, constants: &ClockConstants) -> FaceRadii {
    let inner = main_radius * constants.main_to_inner;
    FaceRadii {
        main: main_radius,
        inner,
        text: inner * constants.inner_to_text,
    }
}

/// Lay out `point_count` evenly spaced marks on the tick ring.
///
/// Index `i` sits at angle `i * 2π / point_count`. Every
/// `hour_marker_step`-th index becomes an hour marker with a numeral anchor on
/// the inner numeral ring; the rest are minute ticks. Hour markers are built
/// starting at 3 o'clock, then rotated by `numeral_rotation` so that
/// `hours[0]` is the "1" position.
///
/// `point_count` is clamped to [`POINTS_COUNT`]; marks that do not fit the
/// fixed-capacity lists are dropped.
pub fn compute_ring_layout(
    point_count: usize,
    center: PointF,
    main_radius: f32,
    constants: &ClockConstants,
) -> TickLayout {
    let mut layout = TickLayout::default();
    let count = point_count.min(POINTS_COUNT);
    if count == 0 {
        return layout;
    }

    let angle_step = TAU / count as f32;
    let ring_radius = main_radius * constants.main_to_inner;
    let text_radius = ring_radius * constants.inner_to_text;

    for i in 0..count {
        let angle = i as f32 * angle_step;
        let cos = cosf(angle);
        let sin = sinf(angle);
        let point = PointF::new(center.x + ring_radius * cos, center.y + ring_radius * sin);

        if i.checked_rem(constants.hour_marker_step) == Some(0) {
            let point_text = PointF::new(center.x + text_radius * cos, center.y + text_radius * sin);
            layout.hours.push(LabeledPoint::new(point, point_text)).ok();
        } else {
            layout.minutes.push(point).ok();
        }
    }

    let markers = layout.hours.len();
    if markers > 0 {
        layout.hours.rotate_right(constants.numeral_rotation % markers);
    }

    layout
}

/// Move a numeral anchor down so the text is vertically centered on its ring
/// position.
///
/// `font_top` is negative (above the baseline) and `font_bottom` positive,
/// so `font_bottom - font_top` is the full font extent.
#[inline]
pub fn compute_text_anchor(
    labeled: LabeledPoint,
    font_bottom: f32,
    font_top: f32,
    constants: &ClockConstants,
) -> LabeledPoint {
    let text_height = font_bottom - font_top;
    LabeledPoint {
        text: PointF::new(
            labeled.point_text.x,
            labeled.point_text.y + text_height / constants.text_baseline_divisor,
        ),
        ..labeled
    }
}

// =============================================================================
// Hands
// =============================================================================

/// Unit direction for a hand angle in degrees, clockwise from 12 o'clock.
#[inline]
pub fn compute_hand_direction(angle_degrees: f32) -> PointF {
    let radians = (angle_degrees - 90.0).to_radians();
    PointF::new(cosf(radians), sinf(radians))
}

/// Hand segment from a tail behind the center to the tip.
#[inline]
pub fn compute_hand_segment(
    center: PointF,
    direction: PointF,
    length: f32,
    constants: &ClockConstants,
) -> HandSegment {
    let tail = length * constants.start_offset;
    HandSegment {
        start: PointF::new(center.x - direction.x * tail, center.y - direction.y * tail),
        end: PointF::new(center.x + direction.x * length, center.y + direction.y * length),
    }
}

/// Segments of all three hands for a time sample, in [`Hand::ALL`] order.
pub fn compute_hands(
    time: WallTime,
    center: PointF,
    radii: &FaceRadii,
    constants: &ClockConstants,
) -> [HandSegment; 3] {
    Hand::ALL.map(|hand| {
        let direction = compute_hand_direction(hand.angle(time));
        compute_hand_segment(center, direction, hand.length(radii, constants), constants)
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;
    const C: ClockConstants = ClockConstants::DEFAULT;

    fn assert_close(actual: f32, expected: f32) {
        assert!((actual - expected).abs() < EPS, "expected {expected}, got {actual}");
    }

    fn angle_deg(center: PointF, p: PointF) -> f32 { (p.y - center.y).atan2(p.x - center.x).to_degrees() }

    #[test]
    fn test_main_circle_radius() {
        assert_close(compute_main_circle_radius(300, 200, 8.0), 92.0);
        assert_close(compute_main_circle_radius(200, 300, 8.0), 92.0);
    }

    #[test]
    fn test_main_circle_radius_symmetric() {
        for (w, h) in [(0, 10), (17, 240), (320, 240), (1000, 999)] {
            assert_close(compute_main_circle_radius(w, h, 4.0), compute_main_circle_radius(h, w, 4.0));
        }
    }

    #[test]
    fn test_degenerate_viewport_stays_finite() {
        let r = compute_main_circle_radius(0, 0, 8.0);
        assert_close(r, -8.0);
        let layout = compute_ring_layout(60, compute_center(0, 0), r, &C);
        assert_eq!(layout.hours.len(), 12);
        assert!(layout.hours.iter().all(|h| h.point.x.is_finite() && h.point.y.is_finite()));
    }

    #[test]
    fn test_center() {
        assert_eq!(compute_center(320, 240), PointF::new(160.0, 120.0));
        assert_eq!(compute_center(5, 5), PointF::new(2.5, 2.5));
    }

    #[test]
    fn test_radii() {
        let radii = compute_radii(100.0, &C);
        assert_close(radii.main, 100.0);
        assert_close(radii.inner, 80.0);
        assert_close(radii.text, 64.0);
    }

    #[test]
    fn test_ring_layout_counts() {
        let layout = compute_ring_layout(60, PointF::new(120.0, 120.0), 100.0, &C);
        assert_eq!(layout.hours.len(), 12);
        assert_eq!(layout.minutes.len(), 48);
    }

    #[test]
    fn test_ring_layout_clamps_point_count() {
        let layout = compute_ring_layout(600, PointF::default(), 100.0, &C);
        assert_eq!(layout.hours.len() + layout.minutes.len(), POINTS_COUNT);
        assert!(compute_ring_layout(0, PointF::default(), 100.0, &C).hours.is_empty());
    }

    #[test]
    fn test_ring_points_on_tick_ring() {
        let center = PointF::new(50.0, 70.0);
        let layout = compute_ring_layout(60, center, 100.0, &C);
        for p in &layout.minutes {
            assert_close(center.distance_to(*p), 80.0);
        }
        for h in &layout.hours {
            assert_close(center.distance_to(h.point), 80.0);
            assert_close(center.distance_to(h.point_text), 64.0);
        }
    }

    #[test]
    fn test_numeral_positions() {
        let center = PointF::new(0.0, 0.0);
        let layout = compute_ring_layout(60, center, 100.0, &C);

        // "12" is index 11, straight up
        assert_close(angle_deg(center, layout.hours[11].point), -90.0);
        // "3" is index 2, 3 o'clock
        assert_close(angle_deg(center, layout.hours[2].point), 0.0);
        // "6" is index 5, straight down
        assert_close(angle_deg(center, layout.hours[5].point), 90.0);
        // "1" is index 0, one hour past twelve
        assert_close(angle_deg(center, layout.hours[0].point), -60.0);
    }

    #[test]
    fn test_numerals_run_clockwise() {
        let center = PointF::default();
        let layout = compute_ring_layout(60, center, 100.0, &C);
        for k in 0..12 {
            let expected = -60.0 + 30.0 * k as f32;
            let mut actual = angle_deg(center, layout.hours[k].point);
            if actual < -60.0 - EPS {
                actual += 360.0;
            }
            assert_close(actual, expected);
        }
    }

    #[test]
    fn test_ring_layout_idempotent() {
        let a = compute_ring_layout(60, PointF::new(160.0, 120.0), 112.0, &C);
        let b = compute_ring_layout(60, PointF::new(160.0, 120.0), 112.0, &C);
        assert_eq!(a, b);
    }

    #[test]
    fn test_unadjusted_text_matches_point_text() {
        let layout = compute_ring_layout(60, PointF::default(), 100.0, &C);
        assert!(layout.hours.iter().all(|h| h.text == h.point_text));
    }

    #[test]
    fn test_text_anchor_quarter_extent() {
        let lp = LabeledPoint::new(PointF::new(1.0, 2.0), PointF::new(10.0, 20.0));
        let adjusted = compute_text_anchor(lp, 4.0, -12.0, &C);
        assert_close(adjusted.text.x, 10.0);
        assert_close(adjusted.text.y, 24.0);
        assert_eq!(adjusted.point, lp.point);
        assert_eq!(adjusted.point_text, lp.point_text);
    }

    #[test]
    fn test_text_anchor_uses_raw_position() {
        let lp = LabeledPoint::new(PointF::default(), PointF::new(0.0, 0.0));
        let once = compute_text_anchor(lp, 8.0, 0.0, &C);
        let twice = compute_text_anchor(once, 8.0, 0.0, &C);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_hand_direction() {
        let up = compute_hand_direction(0.0);
        assert_close(up.x, 0.0);
        assert_close(up.y, -1.0);

        let right = compute_hand_direction(90.0);
        assert_close(right.x, 1.0);
        assert_close(right.y, 0.0);

        let down = compute_hand_direction(180.0);
        assert_close(down.x, 0.0);
        assert_close(down.y, 1.0);
    }

    #[test]
    fn test_hour_angle() {
        assert_close(Hand::Hour.angle(WallTime::new(3, 0, 0)), 90.0);
        assert_close(Hand::Hour.angle(WallTime::new(3, 30, 0)), 105.0);
        assert_close(Hand::Hour.angle(WallTime::new(15, 30, 0)), 105.0);
        // Seconds never move the hour hand
        assert_close(Hand::Hour.angle(WallTime::new(3, 30, 59)), 105.0);
    }

    #[test]
    fn test_minute_angle() {
        assert_close(Hand::Minute.angle(WallTime::new(0, 15, 0)), 90.0);
        assert_close(Hand::Minute.angle(WallTime::new(0, 15, 30)), 93.0);
    }

    #[test]
    fn test_second_angle() {
        assert_close(Hand::Second.angle(WallTime::new(0, 0, 45)), 270.0);
        assert_close(Hand::Second.angle(WallTime::new(0, 0, 0)), 0.0);
    }

    #[test]
    fn test_hand_lengths_reference_radii() {
        let radii = compute_radii(100.0, &C);
        assert_close(Hand::Hour.length(&radii, &C), 64.0 * 0.6);
        assert_close(Hand::Minute.length(&radii, &C), 64.0 * 0.8);
        assert_close(Hand::Second.length(&radii, &C), 80.0);
    }

    #[test]
    fn test_hand_segment_tail() {
        let seg = compute_hand_segment(PointF::new(100.0, 100.0), PointF::new(0.0, -1.0), 50.0, &C);
        assert_close(seg.start.x, 100.0);
        assert_close(seg.start.y, 110.0);
        assert_close(seg.end.x, 100.0);
        assert_close(seg.end.y, 50.0);
    }

    #[test]
    fn test_hands_within_bounds() {
        let center = PointF::new(120.0, 120.0);
        let radii = compute_radii(100.0, &C);
        for (h, m, s) in [(0, 0, 0), (3, 15, 45), (11, 59, 59), (23, 7, 31)] {
            let segments = compute_hands(WallTime::new(h, m, s), center, &radii, &C);
            for (hand, seg) in Hand::ALL.iter().zip(segments.iter()) {
                let len = hand.length(&radii, &C);
                for p in [seg.start, seg.end] {
                    assert!((p.x - center.x).abs() <= len + EPS);
                    assert!((p.y - center.y).abs() <= len + EPS);
                }
                assert_close(center.distance_to(seg.end), len);
                assert_close(center.distance_to(seg.start), len * 0.2);
            }
        }
    }

    #[test]
    fn test_to_point_rounds() {
        assert_eq!(PointF::new(1.4, 1.6).to_point(), Point::new(1, 2));
        assert_eq!(PointF::new(-1.6, 0.5).to_point(), Point::new(-2, 1));
    }
}
