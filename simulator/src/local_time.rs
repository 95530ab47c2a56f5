//! Wall clock backed by the host's local time zone.

use chrono::{Local, Timelike};
use clock_face::{TimeSource, WallTime};

/// Reads `chrono::Local::now()` on every sample.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&self) -> WallTime {
        let now = Local::now();
        // Leap seconds show up in the nanosecond field, so second() stays below 60
        WallTime::new(now.hour() as u8, now.minute() as u8, now.second() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_time_in_range() {
        let time = LocalClock.now();
        assert!(time.hours < 24);
        assert!(time.minutes < 60);
        assert!(time.seconds < 60);
    }
}
