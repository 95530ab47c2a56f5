//! Repeating redraw timer.
//!
//! The host loop owns the clock (milliseconds since start) and polls the
//! timer once per frame. The timer only decides whether a period has elapsed;
//! it never sleeps and never calls back.
//!
//! # Lifecycle
//!
//! - [`RepeatingTimer::start`]: arm the timer, due immediately
//! - [`RepeatingTimer::poll`]: returns `true` at most once per call when due
//! - [`RepeatingTimer::stop`]: disarm; `poll` returns `false` until restarted
//!
//! Missed periods are skipped rather than replayed: after a stall the timer
//! fires once and re-aligns to the next period boundary.

/// Fixed-period timer driven by an external millisecond clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RepeatingTimer {
    period_ms: u64,
    next_due_ms: Option<u64>,
}

impl RepeatingTimer {
    /// Create a stopped timer. A zero period is treated as 1 ms.
    pub const fn new(period_ms: u64) -> Self {
        Self {
            period_ms: if period_ms == 0 { 1 } else { period_ms },
            next_due_ms: None,
        }
    }

    /// Timer period in milliseconds.
    #[inline]
    pub const fn period_ms(&self) -> u64 { self.period_ms }

    /// Whether the timer is armed.
    #[inline]
    pub const fn is_running(&self) -> bool { self.next_due_ms.is_some() }

    /// Arm the timer. The first poll at or after `now_ms` fires.
    pub fn start(&mut self, now_ms: u64) { self.next_due_ms = Some(now_ms); }

    /// Disarm the timer.
    pub fn stop(&mut self) { self.next_due_ms = None; }

    /// Returns `true` if a period boundary was reached, and schedules the next.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let Some(due) = self.next_due_ms else {
            return false;
        };
        if now_ms < due {
            return false;
        }

        let mut next = due.saturating_add(self.period_ms);
        if next <= now_ms {
            // Stalled past one or more periods: skip them
            let behind = now_ms - due;
            next = due.saturating_add((behind / self.period_ms + 1) * self.period_ms);
        }
        self.next_due_ms = Some(next);
        true
    }
}
