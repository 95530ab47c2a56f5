//! Clock face configuration.
//!
//! Two kinds of configuration live here:
//!
//! - [`ClockConstants`]: the scaling coefficients of the face geometry, passed
//!   explicitly into every [`geometry`](crate::geometry) function
//! - Widget sizing constants in density-independent units (dp), converted to
//!   pixels on every resize through [`Density`](crate::density::Density)

// =============================================================================
// Geometry Coefficients
// =============================================================================

/// Scaling coefficients of the clock face geometry.
///
/// Every geometry function takes these explicitly, so tests can exercise the
/// math with the production values or with variations of them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClockConstants {
    /// Tick ring radius as a fraction of the main circle radius.
    pub main_to_inner: f32,
    /// Numeral ring radius as a fraction of the tick ring radius.
    pub inner_to_text: f32,
    /// Hour hand length as a fraction of the numeral ring radius.
    pub hour_hand_fraction: f32,
    /// Minute hand length as a fraction of the numeral ring radius.
    pub minute_hand_fraction: f32,
    /// Second hand length as a fraction of the tick ring radius.
    pub second_hand_fraction: f32,
    /// Fraction of a hand's length that extends behind the center.
    pub start_offset: f32,
    /// Every n-th ring point is an hour marker.
    pub hour_marker_step: usize,
    /// Circular shift applied to hour markers so output index 0 is numeral "1".
    pub numeral_rotation: usize,
    /// Divisor of the font extent used as the numeral baseline offset.
    pub text_baseline_divisor: f32,
}

impl ClockConstants {
    /// Production coefficients.
    pub const DEFAULT: Self = Self {
        main_to_inner: 0.8,
        inner_to_text: 0.8,
        hour_hand_fraction: 0.6,
        minute_hand_fraction: 0.8,
        second_hand_fraction: 1.0,
        start_offset: 0.2,
        hour_marker_step: 5,
        numeral_rotation: 2,
        text_baseline_divisor: 4.0,
    };
}

impl Default for ClockConstants {
    fn default() -> Self { Self::DEFAULT }
}

// =============================================================================
// Ring Configuration
// =============================================================================

/// Number of positions on the tick ring (one per minute).
pub const POINTS_COUNT: usize = 60;

/// Number of hour markers on the ring.
pub const HOURS_COUNT: usize = 12;

/// Number of minute ticks (ring positions that are not hour markers).
pub const MINUTE_TICKS_COUNT: usize = POINTS_COUNT - HOURS_COUNT;

// =============================================================================
// Widget Sizes (dp)
// =============================================================================

/// Main circle stroke width. Also subtracted from the radius so the stroked
/// ring fits the viewport.
pub const MAIN_CIRCLE_STROKE_DP: u32 = 8;

/// Hour hand stroke width.
pub const HOUR_HAND_WIDTH_DP: u32 = 8;

/// Minute hand stroke width.
pub const MINUTE_HAND_WIDTH_DP: u32 = 4;

/// Second hand stroke width.
pub const SECOND_HAND_WIDTH_DP: u32 = 1;

/// Hour marker dot radius.
pub const HOUR_DOT_RADIUS_DP: u32 = MINUTE_HAND_WIDTH_DP;

/// Minute tick dot radius.
pub const MINUTE_DOT_RADIUS_DP: u32 = 1;

/// Below this smaller-side size the face switches to compact strokes.
pub const COMPACT_THRESHOLD_DP: u32 = 300;

/// Divisor applied to all strokes and dot radii in compact mode.
pub const COMPACT_DIVISOR: f32 = 2.0;

// =============================================================================
// Timing
// =============================================================================

/// Redraw period of the clock face in milliseconds (~10 updates per second).
pub const TICK_PERIOD_MS: u64 = 100;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_counts() {
        assert_eq!(POINTS_COUNT / ClockConstants::DEFAULT.hour_marker_step, HOURS_COUNT);
        assert_eq!(MINUTE_TICKS_COUNT, 48);
    }

    #[test]
    fn test_hand_widths_ordering() {
        assert!(SECOND_HAND_WIDTH_DP < MINUTE_HAND_WIDTH_DP);
        assert!(MINUTE_HAND_WIDTH_DP < HOUR_HAND_WIDTH_DP);
    }

    #[test]
    fn test_default_matches_const() {
        assert_eq!(ClockConstants::default(), ClockConstants::DEFAULT);
    }
}
