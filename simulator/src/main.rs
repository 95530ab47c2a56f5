//! Analog clock face simulator for desktop.
//!
//! Hosts the clock widget in a centered square viewport on a simulated
//! 320x240 display, using the embedded-graphics-simulator crate.
//!
//! # Controls
//!
//! - `W` / `S`: grow / shrink the viewport
//! - `D`: detach / re-attach the widget (stops and restarts its timer)
//! - `Y`: toggle the debug page

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod config;
mod local_time;
mod pages;
mod popup;
mod profiling;
mod screens;
mod timing;
mod viewport;

use std::thread;
use std::time::Instant;

use clock_face::colors::BLACK;
use clock_face::{ClockWidget, TargetCanvas};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};

use crate::config::{DENSITY, INITIAL_VIEWPORT, SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_SCALE};
use crate::local_time::LocalClock;
use crate::pages::Page;
use crate::popup::{Popup, draw_popup};
use crate::profiling::ProfilingMetrics;
use crate::screens::draw_debug_page;
use crate::timing::FRAME_TIME;
use crate::viewport::{centered_viewport, step_viewport};

/// Measure the widget for a requested side, hand it the granted size and
/// return where it sits on screen.
fn apply_viewport(widget: &mut ClockWidget, requested_side: u32) -> Rectangle {
    let size = widget.measure(requested_side.min(SCREEN_WIDTH), requested_side.min(SCREEN_HEIGHT));
    widget.on_size_changed(size.width, size.height);
    centered_viewport(size)
}

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Analog Clock Sim", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    let clock = LocalClock;
    let mut metrics = ProfilingMetrics::new();

    let mut widget = ClockWidget::new(DENSITY);
    let mut requested_side = INITIAL_VIEWPORT;
    let mut viewport = apply_viewport(&mut widget, requested_side);
    widget.on_attached(metrics.uptime_ms(), &clock);

    let mut current_page = Page::default();
    let mut active_popup: Option<Popup> = None;
    // Full redraw needed regardless of timer ticks
    let mut dirty = true;

    let mut last_fps_calc = Instant::now();
    let mut fps_frame_count = 0u32;
    let mut current_fps = 0.0f32;

    loop {
        let frame_start = Instant::now();

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => {
                    widget.on_detached();
                    return;
                }
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::W | Keycode::S => {
                            let next = step_viewport(requested_side, keycode == Keycode::W);
                            if next != requested_side {
                                requested_side = next;
                                viewport = apply_viewport(&mut widget, requested_side);
                                metrics.inc_resizes();
                                active_popup = Some(Popup::Resized(Instant::now(), viewport.size.width));
                                dirty = true;
                            }
                        }
                        Keycode::D => {
                            if widget.is_attached() {
                                widget.on_detached();
                                active_popup = Some(Popup::Paused(Instant::now()));
                            } else {
                                widget.on_attached(metrics.uptime_ms(), &clock);
                                active_popup = Some(Popup::Resumed(Instant::now()));
                            }
                            dirty = true;
                        }
                        Keycode::Y => {
                            current_page = current_page.toggle();
                            dirty = true;
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        if let Some(popup) = active_popup
            && popup.is_expired()
        {
            active_popup = None;
            dirty = true;
        }

        let ticked = widget.poll(metrics.uptime_ms(), &clock);
        if ticked {
            metrics.inc_ticks();
        }

        fps_frame_count += 1;
        if last_fps_calc.elapsed().as_secs() >= 1 {
            current_fps = fps_frame_count as f32 / last_fps_calc.elapsed().as_secs_f32();
            fps_frame_count = 0;
            last_fps_calc = Instant::now();
        }

        match current_page {
            Page::Clock => {
                if dirty || ticked {
                    // Margins around the viewport are only touched on a full redraw
                    if dirty {
                        display.clear(BLACK).ok();
                    }
                    let mut face_target = display.cropped(&viewport);
                    widget.draw(&mut TargetCanvas::new(&mut face_target)).ok();
                    metrics.inc_face_draws();

                    if let Some(ref popup) = active_popup {
                        draw_popup(&mut display, popup);
                    }
                }
            }
            Page::Debug => {
                if dirty || ticked {
                    draw_debug_page(&mut display, &metrics, &widget, current_fps);
                }
            }
        }
        dirty = false;

        let render_time = frame_start.elapsed();

        window.update(&display);

        let pre_sleep = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(pre_sleep) {
            thread::sleep(remaining);
        }
        let sleep_time = frame_start.elapsed().saturating_sub(pre_sleep);

        metrics.record_frame(frame_start.elapsed(), render_time, sleep_time);
    }
}
