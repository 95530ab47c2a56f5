//! Page navigation for the simulator window.
//!
//! Press `Y` to toggle between the clock face and the debug view.

/// Available pages.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// Clock face in its centered viewport.
    #[default]
    Clock,

    /// Frame timing, face counters and the widget's event log.
    Debug,
}

impl Page {
    /// Toggle to the other page.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Clock => Self::Debug,
            Self::Debug => Self::Clock,
        }
    }
}
