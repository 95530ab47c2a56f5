//! Wall-clock time sampling.
//!
//! The widget never reads a clock directly. Hosts hand it a [`TimeSource`]
//! on attach and on every poll, so the face can run on a desktop clock, an
//! RTC chip, or a fixed time in tests.

/// Local time of day, as read from the host clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WallTime {
    /// 0-23
    pub hours: u8,
    /// 0-59
    pub minutes: u8,
    /// 0-59
    pub seconds: u8,
}

impl WallTime {
    /// Build a time sample. Out-of-range fields wrap into range.
    pub const fn new(hours: u8, minutes: u8, seconds: u8) -> Self {
        Self {
            hours: hours % 24,
            minutes: minutes % 60,
            seconds: seconds % 60,
        }
    }
}

/// Source of the current local time.
pub trait TimeSource {
    /// Sample the current local time of day.
    fn now(&self) -> WallTime;
}

/// Time source that always reports the same time. Useful for screenshots and
/// tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedTime(pub WallTime);

impl TimeSource for FixedTime {
    #[inline]
    fn now(&self) -> WallTime { self.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_time_wraps() {
        assert_eq!(WallTime::new(24, 60, 61), WallTime::new(0, 0, 1));
        assert_eq!(WallTime::new(23, 59, 59).hours, 23);
    }

    #[test]
    fn test_fixed_time() {
        let source = FixedTime(WallTime::new(10, 9, 30));
        assert_eq!(source.now(), WallTime::new(10, 9, 30));
    }
}
