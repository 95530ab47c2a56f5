//! Debug/profiling page rendering.

use core::fmt::Write;

use clock_face::ClockWidget;
use clock_face::colors::{BLACK, GRAY, GREEN, ORANGE, WHITE, YELLOW};
use clock_face::profiling::EventLog;
use clock_face::styles::DEBUG_FONT;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::profiling::ProfilingMetrics;

const HEADER_Y: i32 = 12;
const HEADER_DIVIDER_Y: i32 = 18;
const SECTION_HEADER_Y: i32 = 28;
const STATS_Y: i32 = 40;
const LOG_DIVIDER_Y: i32 = 124;
const LOG_Y: i32 = 134;
const LOG_LINE_HEIGHT: i32 = 11;
const COL1_X: i32 = 4;
const COL2_X: i32 = 110;
const COL3_X: i32 = 215;
const STAT_LINE_HEIGHT: i32 = 13;

const DEBUG_BG: Rgb565 = BLACK;
const HEADER_COLOR: Rgb565 = GREEN;
const SECTION_COLOR: Rgb565 = GRAY;
const VALUE_COLOR: Rgb565 = WHITE;
const HIGHLIGHT_COLOR: Rgb565 = YELLOW;
const LOG_PROMPT_COLOR: Rgb565 = GREEN;
const LOG_TEXT_COLOR: Rgb565 = ORANGE;
const DIVIDER_COLOR: Rgb565 = GRAY;

pub fn draw_debug_page(
    display: &mut SimulatorDisplay<Rgb565>,
    metrics: &ProfilingMetrics,
    widget: &ClockWidget,
    fps: f32,
) {
    display.clear(DEBUG_BG).ok();
    draw_header(display, metrics, fps);
    draw_horizontal_line(display, HEADER_DIVIDER_Y);
    draw_section_headers(display);
    draw_timing_column(display, metrics);
    draw_face_column(display, metrics);
    draw_layout_column(display, widget);
    draw_horizontal_line(display, LOG_DIVIDER_Y);
    draw_log_terminal(display, widget.log());
}

fn draw_header(display: &mut SimulatorDisplay<Rgb565>, metrics: &ProfilingMetrics, fps: f32) {
    let header_style = MonoTextStyle::new(DEBUG_FONT, HEADER_COLOR);
    let info_style = MonoTextStyle::new(DEBUG_FONT, VALUE_COLOR);

    Text::new("DEBUG VIEW", Point::new(COL1_X, HEADER_Y), header_style)
        .draw(display)
        .ok();

    let uptime = metrics.uptime_string();
    let mut uptime_str: String<24> = String::new();
    let _ = write!(uptime_str, "UP {uptime}");
    Text::new(&uptime_str, Point::new(160, HEADER_Y), info_style)
        .draw(display)
        .ok();

    let mut fps_str: String<12> = String::new();
    let _ = write!(fps_str, "{fps:.0} FPS");
    Text::new(&fps_str, Point::new(270, HEADER_Y), info_style)
        .draw(display)
        .ok();
}

fn draw_section_headers(display: &mut SimulatorDisplay<Rgb565>) {
    let style = MonoTextStyle::new(DEBUG_FONT, SECTION_COLOR);
    for (title, x) in [("TIMING", COL1_X), ("FACE", COL2_X), ("LAYOUT", COL3_X)] {
        Text::new(title, Point::new(x, SECTION_HEADER_Y), style)
            .draw(display)
            .ok();
    }
}

/// Column of stat lines starting below the section headers.
fn draw_lines(display: &mut SimulatorDisplay<Rgb565>, x: i32, lines: &[(String<20>, Rgb565)]) {
    let mut y = STATS_Y;
    for (text, color) in lines {
        Text::new(text, Point::new(x, y), MonoTextStyle::new(DEBUG_FONT, *color))
            .draw(display)
            .ok();
        y += STAT_LINE_HEIGHT;
    }
}

fn ms_line(label: &str, us: u32) -> String<20> {
    let mut s = String::new();
    let _ = write!(s, "{label}{:.1}ms", us as f32 / 1000.0);
    s
}

fn draw_timing_column(display: &mut SimulatorDisplay<Rgb565>, metrics: &ProfilingMetrics) {
    let min_us = if metrics.frame_time_min_us == u32::MAX {
        0
    } else {
        metrics.frame_time_min_us
    };
    let lines = [
        (ms_line("Frame: ", metrics.frame_time_us), VALUE_COLOR),
        (ms_line("Render:", metrics.render_time_us), VALUE_COLOR),
        (ms_line("Sleep: ", metrics.sleep_time_us), VALUE_COLOR),
        (ms_line("Min:   ", min_us), HIGHLIGHT_COLOR),
        (ms_line("Max:   ", metrics.frame_time_max_us), HIGHLIGHT_COLOR),
        (ms_line("Avg:   ", metrics.frame_time_avg_us()), HIGHLIGHT_COLOR),
    ];
    draw_lines(display, COL1_X, &lines);
}

fn draw_face_column(display: &mut SimulatorDisplay<Rgb565>, metrics: &ProfilingMetrics) {
    let mut frames: String<20> = String::new();
    let _ = write!(frames, "Frames:{}", metrics.total_frames);
    let mut ticks: String<20> = String::new();
    let _ = write!(ticks, "Ticks: {}", metrics.ticks);
    let mut draws: String<20> = String::new();
    let _ = write!(draws, "Draws: {}", metrics.face_draws);
    let mut resizes: String<20> = String::new();
    let _ = write!(resizes, "Resize:{}", metrics.resizes);

    let lines = [
        (frames, VALUE_COLOR),
        (ticks, VALUE_COLOR),
        (draws, VALUE_COLOR),
        (resizes, VALUE_COLOR),
    ];
    draw_lines(display, COL2_X, &lines);
}

fn draw_layout_column(display: &mut SimulatorDisplay<Rgb565>, widget: &ClockWidget) {
    let mut size: String<20> = String::new();
    let mut text: String<20> = String::new();
    let mut mode: String<20> = String::new();
    match widget.layout() {
        Some(layout) => {
            let _ = write!(size, "{}x{}", layout.width, layout.height);
            let _ = write!(text, "Text: {}dp", layout.text_size_dp);
            let _ = write!(mode, "{}", if layout.compact { "Compact" } else { "Full" });
        }
        None => {
            let _ = write!(size, "Unsized");
        }
    }

    let mut timer: String<20> = String::new();
    let _ = write!(timer, "Timer: {}", if widget.is_attached() { "ON" } else { "OFF" });

    let mut sample: String<20> = String::new();
    match widget.sample() {
        Some(t) => {
            let _ = write!(sample, "{:02}:{:02}:{:02}", t.hours, t.minutes, t.seconds);
        }
        None => {
            let _ = write!(sample, "--:--:--");
        }
    }

    let mut density: String<20> = String::new();
    let _ = write!(density, "Dens: {:.2}", widget.density().scale);

    let lines = [
        (size, VALUE_COLOR),
        (text, VALUE_COLOR),
        (mode, VALUE_COLOR),
        (timer, HIGHLIGHT_COLOR),
        (sample, HIGHLIGHT_COLOR),
        (density, VALUE_COLOR),
    ];
    draw_lines(display, COL3_X, &lines);
}

fn draw_log_terminal(display: &mut SimulatorDisplay<Rgb565>, log: &EventLog) {
    let prompt_style = MonoTextStyle::new(DEBUG_FONT, LOG_PROMPT_COLOR);
    let text_style = MonoTextStyle::new(DEBUG_FONT, LOG_TEXT_COLOR);

    Rectangle::new(
        Point::new(0, LOG_DIVIDER_Y + 2),
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT - LOG_DIVIDER_Y as u32 - 2),
    )
    .into_styled(PrimitiveStyle::with_fill(Rgb565::new(1, 2, 1)))
    .draw(display)
    .ok();

    let mut y = LOG_Y;

    for line in log.iter() {
        Text::new(">", Point::new(COL1_X, y), prompt_style).draw(display).ok();
        Text::new(line, Point::new(COL1_X + 10, y), text_style)
            .draw(display)
            .ok();
        y += LOG_LINE_HEIGHT;
    }

    Text::new("> _", Point::new(COL1_X, y), prompt_style).draw(display).ok();
}

fn draw_horizontal_line(display: &mut SimulatorDisplay<Rgb565>, y: i32) {
    Line::new(Point::new(2, y), Point::new(SCREEN_WIDTH as i32 - 2, y))
        .into_styled(PrimitiveStyle::with_stroke(DIVIDER_COLOR, 1))
        .draw(display)
        .ok();
}
