//! Profiling metrics with time-based measurements.
//!
//! Provides frame timing statistics and clock face counters.
//! The `EventLog` type is in the library since it doesn't need time.

use std::time::{Duration, Instant};

use clock_face::profiling::push_u32;
use heapless::String;

/// Frame timing and redraw statistics for profiling.
pub struct ProfilingMetrics {
    // Frame timing (microseconds)
    pub frame_time_us: u32,
    pub render_time_us: u32,
    pub sleep_time_us: u32,

    // Statistics
    pub frame_time_min_us: u32,
    pub frame_time_max_us: u32,
    frame_time_avg_us: f32,

    // Counters
    pub total_frames: u64,
    pub ticks: u32,
    pub face_draws: u32,
    pub resizes: u32,

    // Uptime tracking
    start_time: Instant,
}

impl ProfilingMetrics {
    const EMA_ALPHA: f32 = 0.1;

    pub fn new() -> Self {
        Self {
            frame_time_us: 0,
            render_time_us: 0,
            sleep_time_us: 0,
            frame_time_min_us: u32::MAX,
            frame_time_max_us: 0,
            frame_time_avg_us: 0.0,
            total_frames: 0,
            ticks: 0,
            face_draws: 0,
            resizes: 0,
            start_time: Instant::now(),
        }
    }

    /// Record frame timing for this frame.
    pub fn record_frame(&mut self, total_time: Duration, render_time: Duration, sleep_time: Duration) {
        let total_us = total_time.as_micros() as u32;

        self.frame_time_us = total_us;
        self.render_time_us = render_time.as_micros() as u32;
        self.sleep_time_us = sleep_time.as_micros() as u32;

        self.frame_time_min_us = self.frame_time_min_us.min(total_us);
        self.frame_time_max_us = self.frame_time_max_us.max(total_us);

        if self.total_frames == 0 {
            self.frame_time_avg_us = total_us as f32;
        } else {
            self.frame_time_avg_us =
                Self::EMA_ALPHA.mul_add(total_us as f32, (1.0 - Self::EMA_ALPHA) * self.frame_time_avg_us);
        }

        self.total_frames += 1;
    }

    /// Average frame time in microseconds.
    #[inline]
    pub const fn frame_time_avg_us(&self) -> u32 { self.frame_time_avg_us as u32 }

    /// Milliseconds since metrics were created. Also the widget's clock.
    #[inline]
    pub fn uptime_ms(&self) -> u64 { self.start_time.elapsed().as_millis() as u64 }

    /// Format uptime as HH:MM:SS string.
    pub fn uptime_string(&self) -> String<12> { format_hms(self.start_time.elapsed().as_secs()) }

    #[inline]
    pub fn inc_ticks(&mut self) { self.ticks += 1; }

    #[inline]
    pub fn inc_face_draws(&mut self) { self.face_draws += 1; }

    #[inline]
    pub fn inc_resizes(&mut self) { self.resizes += 1; }
}

impl Default for ProfilingMetrics {
    fn default() -> Self { Self::new() }
}

/// Zero-padded HH:MM:SS for a number of seconds.
fn format_hms(total_secs: u64) -> String<12> {
    let hours = (total_secs / 3600) as u32;
    let mins = ((total_secs % 3600) / 60) as u32;
    let secs = (total_secs % 60) as u32;

    let mut s = String::new();
    for (i, part) in [hours, mins, secs].into_iter().enumerate() {
        if i > 0 {
            s.push(':').ok();
        }
        if part < 10 {
            s.push('0').ok();
        }
        push_u32(&mut s, part);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms(0).as_str(), "00:00:00");
        assert_eq!(format_hms(3_723).as_str(), "01:02:03");
        assert_eq!(format_hms(86_399).as_str(), "23:59:59");
    }

    #[test]
    fn test_record_frame_stats() {
        let mut metrics = ProfilingMetrics::new();
        metrics.record_frame(Duration::from_millis(20), Duration::from_millis(5), Duration::from_millis(15));
        metrics.record_frame(Duration::from_millis(30), Duration::from_millis(8), Duration::from_millis(22));

        assert_eq!(metrics.total_frames, 2);
        assert_eq!(metrics.frame_time_min_us, 20_000);
        assert_eq!(metrics.frame_time_max_us, 30_000);
        assert_eq!(metrics.render_time_us, 8_000);
        // EMA moves a tenth of the way toward the new sample
        assert!((20_990..=21_010).contains(&metrics.frame_time_avg_us()));
    }
}
