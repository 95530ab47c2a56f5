//! Analog clock widget.
//!
//! [`ClockWidget`] owns everything that survives between frames: the layout
//! cached on the last resize, the redraw timer, the latest time sample and
//! the event log. The host drives it through the lifecycle calls:
//!
//! 1. [`ClockWidget::measure`]: pick a square viewport
//! 2. [`ClockWidget::on_size_changed`]: rebuild the cached layout
//! 3. [`ClockWidget::on_attached`]: start the 100 ms redraw timer
//! 4. [`ClockWidget::poll`] every frame, [`ClockWidget::draw`] when it
//!    returns `true`
//! 5. [`ClockWidget::on_detached`]: stop the timer
//!
//! # Compact Faces
//!
//! When the smaller side is under 300 dp, every stroke width and dot radius
//! is halved. The halving is applied to the dp base sizes on each rebuild, so
//! resizing back and forth never compounds it. The main circle radius always
//! subtracts the full ring stroke.

use embedded_graphics::prelude::Size;
use heapless::String;

use crate::canvas::ClockCanvas;
use crate::colors::{FACE_BACKGROUND, FACE_INK};
use crate::config::{
    COMPACT_DIVISOR,
    COMPACT_THRESHOLD_DP,
    ClockConstants,
    HOUR_DOT_RADIUS_DP,
    HOUR_HAND_WIDTH_DP,
    MAIN_CIRCLE_STROKE_DP,
    MINUTE_DOT_RADIUS_DP,
    MINUTE_HAND_WIDTH_DP,
    POINTS_COUNT,
    SECOND_HAND_WIDTH_DP,
    TICK_PERIOD_MS,
};
use crate::density::Density;
use crate::geometry::{
    FaceRadii,
    PointF,
    TickLayout,
    compute_center,
    compute_hands,
    compute_main_circle_radius,
    compute_radii,
    compute_ring_layout,
    compute_text_anchor,
};
use crate::profiling::{EventLog, FaceEvent, push_u32};
use crate::styles::{Paint, TextPaint, label_font_for, text_size_dp};
use crate::time_source::{TimeSource, WallTime};
use crate::timer::RepeatingTimer;

// =============================================================================
// Cached Layout
// =============================================================================

/// Paints and sizes for one viewport size, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceStyles {
    /// Main circle outline.
    pub ring: Paint,
    /// Fill for hour and minute dots.
    pub dot: Paint,
    pub hour_dot_radius: f32,
    pub minute_dot_radius: f32,
    /// Hour, minute and second hand, in draw order.
    pub hands: [Paint; 3],
    /// Numeral style. `None` when the face is too small for numerals.
    pub label: Option<TextPaint>,
}

/// Everything the draw routine needs that only changes on resize.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceLayout {
    pub width: u32,
    pub height: u32,
    pub center: PointF,
    pub radii: FaceRadii,
    pub ticks: TickLayout,
    pub styles: FaceStyles,
    pub text_size_dp: u32,
    pub compact: bool,
}

/// Compute the layout for a viewport. Pure: equal inputs give equal layouts.
pub fn build_layout(width: u32, height: u32, density: Density, constants: &ClockConstants) -> FaceLayout {
    let min_side_dp = density.px_to_dp(width.min(height));
    let compact = min_side_dp < COMPACT_THRESHOLD_DP;
    let divisor = if compact { COMPACT_DIVISOR } else { 1.0 };

    let ring_stroke = density.dp_to_px(MAIN_CIRCLE_STROKE_DP);
    let center = compute_center(width, height);
    let main_radius = compute_main_circle_radius(width, height, ring_stroke);
    let radii = compute_radii(main_radius, constants);

    let text_size = text_size_dp(min_side_dp);
    let label = label_font_for(density.dp_to_px(text_size)).map(|font| TextPaint::new(FACE_INK, font));

    let mut ticks = compute_ring_layout(POINTS_COUNT, center, main_radius, constants);
    if let Some(label) = &label {
        let metrics = label.metrics();
        for hour in ticks.hours.iter_mut() {
            *hour = compute_text_anchor(*hour, metrics.bottom, metrics.top, constants);
        }
    }

    let styles = FaceStyles {
        ring: Paint::stroke(FACE_INK, ring_stroke).scaled_down(divisor),
        dot: Paint::fill(FACE_INK),
        hour_dot_radius: density.dp_to_px(HOUR_DOT_RADIUS_DP) / divisor,
        minute_dot_radius: density.dp_to_px(MINUTE_DOT_RADIUS_DP) / divisor,
        hands: [
            Paint::stroke(FACE_INK, density.dp_to_px(HOUR_HAND_WIDTH_DP))
                .with_round_cap()
                .scaled_down(divisor),
            Paint::stroke(FACE_INK, density.dp_to_px(MINUTE_HAND_WIDTH_DP))
                .with_round_cap()
                .scaled_down(divisor),
            Paint::stroke(FACE_INK, density.dp_to_px(SECOND_HAND_WIDTH_DP)).scaled_down(divisor),
        ],
        label,
    };

    FaceLayout {
        width,
        height,
        center,
        radii,
        ticks,
        styles,
        text_size_dp: text_size,
        compact,
    }
}

// =============================================================================
// Widget
// =============================================================================

/// Analog clock face with hour, minute and second hands.
pub struct ClockWidget {
    constants: ClockConstants,
    density: Density,
    layout: Option<FaceLayout>,
    timer: RepeatingTimer,
    sample: Option<WallTime>,
    log: EventLog,
}

impl ClockWidget {
    /// Create a detached, unsized widget with the production constants.
    pub const fn new(density: Density) -> Self { Self::with_constants(density, ClockConstants::DEFAULT) }

    /// Create a detached, unsized widget.
    pub const fn with_constants(density: Density, constants: ClockConstants) -> Self {
        Self {
            constants,
            density,
            layout: None,
            timer: RepeatingTimer::new(TICK_PERIOD_MS),
            sample: None,
            log: EventLog::new(),
        }
    }

    /// Desired size for the offered space: always a square.
    #[inline]
    pub fn measure(&self, requested_width: u32, requested_height: u32) -> Size {
        let side = requested_width.min(requested_height);
        Size::new(side, side)
    }

    /// Rebuild the cached layout for a new viewport size.
    pub fn on_size_changed(&mut self, width: u32, height: u32) {
        let layout = build_layout(width, height, self.density, &self.constants);
        self.log.record(FaceEvent::Resized {
            width,
            height,
            text_size_dp: layout.text_size_dp,
            compact: layout.compact,
        });
        self.layout = Some(layout);
    }

    /// Start the redraw timer and take the first time sample.
    pub fn on_attached<T>(&mut self, now_ms: u64, source: &T)
    where
        T: TimeSource + ?Sized,
    {
        self.timer.start(now_ms);
        self.log.record(FaceEvent::Attached);
        self.poll(now_ms, source);
    }

    /// Stop the redraw timer. The last sample is kept for a final redraw.
    pub fn on_detached(&mut self) {
        if self.timer.is_running() {
            self.timer.stop();
            self.log.record(FaceEvent::Detached);
        }
    }

    /// Sample the time if a tick is due. Returns `true` when the face should
    /// be redrawn.
    pub fn poll<T>(&mut self, now_ms: u64, source: &T) -> bool
    where
        T: TimeSource + ?Sized,
    {
        if !self.timer.poll(now_ms) {
            return false;
        }
        self.sample = Some(source.now());
        true
    }

    /// Draw the face: background, ring, hour markers with numerals, minute
    /// ticks, then the hour, minute and second hands.
    ///
    /// Draws nothing before the first resize and omits the hands before the
    /// first time sample.
    pub fn draw<C>(&self, canvas: &mut C) -> Result<(), C::Error>
    where
        C: ClockCanvas,
    {
        let Some(layout) = &self.layout else {
            return Ok(());
        };
        let styles = &layout.styles;

        canvas.clear(FACE_BACKGROUND)?;
        canvas.draw_circle(layout.center, layout.radii.main, &styles.ring)?;

        for (idx, hour) in layout.ticks.hours.iter().enumerate() {
            canvas.draw_circle(hour.point, styles.hour_dot_radius, &styles.dot)?;
            if let Some(label) = &styles.label {
                let mut numeral: String<4> = String::new();
                push_u32(&mut numeral, idx as u32 + 1);
                canvas.draw_text(&numeral, hour.text, label)?;
            }
        }

        for minute in &layout.ticks.minutes {
            canvas.draw_circle(*minute, styles.minute_dot_radius, &styles.dot)?;
        }

        if let Some(time) = self.sample {
            let segments = compute_hands(time, layout.center, &layout.radii, &self.constants);
            for (segment, paint) in segments.iter().zip(styles.hands.iter()) {
                canvas.draw_line(segment.start, segment.end, paint)?;
            }
        }

        Ok(())
    }

    #[inline]
    pub const fn layout(&self) -> Option<&FaceLayout> { self.layout.as_ref() }

    /// Latest time sample.
    #[inline]
    pub const fn sample(&self) -> Option<WallTime> { self.sample }

    #[inline]
    pub const fn is_attached(&self) -> bool { self.timer.is_running() }

    #[inline]
    pub const fn log(&self) -> &EventLog { &self.log }

    #[inline]
    pub const fn constants(&self) -> &ClockConstants { &self.constants }

    #[inline]
    pub const fn density(&self) -> Density { self.density }
}

// =============================================================================
// Tests
// =============================================================================
