//! Lifecycle event log.
//!
//! The widget records what happened to it (attach, detach, resize) into a
//! small ring buffer. Hosts can show the log on a debug page; on a device
//! without a debug page it costs a few hundred bytes of RAM and nothing else.
//!
//! # Usage
//!
//! ```ignore
//! let mut log = EventLog::new();
//! log.record(FaceEvent::Attached);
//!
//! for line in log.iter() {
//!     println!("{}", line);
//! }
//! ```

use core::fmt::{self, Write};

use heapless::{Deque, String};

// =============================================================================
// Event Log Configuration
// =============================================================================

/// Maximum number of log lines to keep in the ring buffer.
pub const LOG_BUFFER_SIZE: usize = 8;

/// Maximum characters per log line.
pub const LOG_LINE_LENGTH: usize = 48;

// =============================================================================
// Events
// =============================================================================

/// Something that changed the widget's lifecycle or layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaceEvent {
    /// Redraw timer started.
    Attached,
    /// Redraw timer stopped.
    Detached,
    /// Layout rebuilt for a new viewport size.
    Resized {
        width: u32,
        height: u32,
        /// Numeral size in dp (0 = numerals hidden).
        text_size_dp: u32,
        /// Strokes and dots halved for a small face.
        compact: bool,
    },
}

impl fmt::Display for FaceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attached => f.write_str("Attached, timer started"),
            Self::Detached => f.write_str("Detached, timer stopped"),
            Self::Resized {
                width,
                height,
                text_size_dp,
                compact,
            } => {
                write!(f, "Resize {width}x{height} text {text_size_dp}dp")?;
                if *compact {
                    f.write_str(" compact")?;
                }
                Ok(())
            }
        }
    }
}

// =============================================================================
// Event Log Ring Buffer
// =============================================================================

/// Ring buffer of formatted event lines.
///
/// Stores the last `LOG_BUFFER_SIZE` lines. Old lines are dropped when the
/// buffer is full; lines longer than `LOG_LINE_LENGTH - 1` are truncated.
pub struct EventLog {
    buffer: Deque<String<LOG_LINE_LENGTH>, LOG_BUFFER_SIZE>,
}

impl EventLog {
    /// Create a new empty log.
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Format and store an event.
    pub fn record(&mut self, event: FaceEvent) {
        let mut line: String<LOG_LINE_LENGTH> = String::new();
        // Overflow only truncates the line
        let _ = write!(line, "{event}");
        self.push(&line);
    }

    /// Push a free-form line. If the buffer is full, the oldest line is dropped.
    pub fn push(&mut self, msg: &str) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        let mut line: String<LOG_LINE_LENGTH> = String::new();
        for (i, c) in msg.chars().enumerate() {
            if i >= LOG_LINE_LENGTH - 1 {
                break;
            }
            line.push(c).ok();
        }

        self.buffer.push_back(line).ok();
    }

    /// Iterate over lines (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(|line| line.as_str()) }

    /// Most recent line.
    pub fn last(&self) -> Option<&str> { self.buffer.back().map(|line| line.as_str()) }

    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }
}

impl Default for EventLog {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Push a u32 value to a heapless string (no format! macro).
pub fn push_u32<const N: usize>(s: &mut String<N>, mut val: u32) {
    if val == 0 {
        s.push('0').ok();
        return;
    }

    // Build digits in reverse
    let mut digits = [0u8; 10];
    let mut i = 0;
    while val > 0 {
        digits[i] = (val % 10) as u8;
        val /= 10;
        i += 1;
    }

    while i > 0 {
        i -= 1;
        s.push((b'0' + digits[i]) as char).ok();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_formats_events() {
        let mut log = EventLog::new();
        assert!(log.is_empty());

        log.record(FaceEvent::Attached);
        assert_eq!(log.last(), Some("Attached, timer started"));

        log.record(FaceEvent::Resized {
            width: 240,
            height: 180,
            text_size_dp: 8,
            compact: true,
        });
        assert_eq!(log.last(), Some("Resize 240x180 text 8dp compact"));

        log.record(FaceEvent::Resized {
            width: 400,
            height: 400,
            text_size_dp: 32,
            compact: false,
        });
        assert_eq!(log.last(), Some("Resize 400x400 text 32dp"));
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let mut log = EventLog::new();
        for i in 0..LOG_BUFFER_SIZE {
            let mut msg: String<16> = String::new();
            push_u32(&mut msg, i as u32);
            log.push(&msg);
        }
        assert_eq!(log.len(), LOG_BUFFER_SIZE);

        log.push("New");
        assert_eq!(log.len(), LOG_BUFFER_SIZE);
        assert_eq!(log.iter().next(), Some("1"));
        assert_eq!(log.last(), Some("New"));
    }

    #[test]
    fn test_truncation() {
        let mut log = EventLog::new();
        log.push("This is a very long message that exceeds the maximum line length limit");
        assert!(log.iter().next().unwrap().len() < LOG_LINE_LENGTH);
    }

    #[test]
    fn test_push_u32() {
        let mut s: String<16> = String::new();
        push_u32(&mut s, 0);
        assert_eq!(s.as_str(), "0");

        let mut s: String<16> = String::new();
        push_u32(&mut s, 12);
        assert_eq!(s.as_str(), "12");

        let mut s: String<16> = String::new();
        push_u32(&mut s, 4_294_967_295);
        assert_eq!(s.as_str(), "4294967295");
    }
}
