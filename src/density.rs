//! Density-independent unit conversion.
//!
//! Sizes are specified in dp and converted with the device scale factor, so a
//! face drawn at 2x density keeps the same proportions as at 1x.

/// Device pixel density.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density {
    /// Physical pixels per dp. Must be positive.
    pub scale: f32,
}

impl Density {
    /// One pixel per dp.
    pub const BASELINE: Self = Self { scale: 1.0 };

    #[inline]
    pub const fn new(scale: f32) -> Self { Self { scale } }

    /// Convert dp to pixels.
    #[inline]
    pub fn dp_to_px(self, dp: u32) -> f32 { dp as f32 * self.scale }

    /// Convert pixels to whole dp, truncating.
    #[inline]
    pub fn px_to_dp(self, px: u32) -> u32 { (px as f32 / self.scale) as u32 }
}

impl Default for Density {
    fn default() -> Self { Self::BASELINE }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_is_identity() {
        let d = Density::default();
        assert_eq!(d.dp_to_px(8), 8.0);
        assert_eq!(d.px_to_dp(240), 240);
    }

    #[test]
    fn test_dp_to_px_scales() {
        assert_eq!(Density::new(2.0).dp_to_px(8), 16.0);
        assert_eq!(Density::new(1.5).dp_to_px(4), 6.0);
    }

    #[test]
    fn test_px_to_dp_truncates() {
        assert_eq!(Density::new(2.0).px_to_dp(601), 300);
        assert_eq!(Density::new(1.5).px_to_dp(301), 200);
        assert_eq!(Density::new(3.0).px_to_dp(2), 0);
    }
}
