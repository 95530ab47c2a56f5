//! Paints, text styles and the numeral font table.
//!
//! # Paints
//!
//! A [`Paint`] describes how a primitive is drawn (fill or stroke, width,
//! cap) independent of the surface. The widget builds one set of paints per
//! resize and reuses them for every frame.
//!
//! # Numeral Size Table
//!
//! The numeral size steps with the smaller side of the widget (in dp):
//!
//! | Smaller side | Text size |
//! |--------------|-----------|
//! | 0-100        | 0 (hidden)|
//! | 101-200      | 8         |
//! | 201-300      | 16        |
//! | > 300        | 32        |
//!
//! The pixel size is then matched against the available mono fonts, picking
//! the tallest one that fits.

use embedded_graphics::{
    mono_font::{
        MonoFont,
        ascii::{FONT_5X8, FONT_6X10, FONT_9X15, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Horizontally centered on the alphabetic baseline. Used for numerals and popups.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Alphabetic)
    .build();

/// Small font for the debug page (6x10 pixels).
pub const DEBUG_FONT: &MonoFont = &FONT_6X10;

// =============================================================================
// Numeral Fonts
// =============================================================================

/// Candidate numeral fonts. Selection is by character height, so the order
/// here does not matter.
pub const LABEL_FONTS: [&MonoFont<'static>; 6] = [
    &FONT_5X8,
    &FONT_6X10,
    &FONT_9X15,
    &FONT_10X20,
    &PROFONT_18_POINT,
    &PROFONT_24_POINT,
];

/// Numeral size in dp for the widget's smaller side in dp.
pub const fn text_size_dp(min_side_dp: u32) -> u32 {
    match min_side_dp {
        0..=100 => 0,
        101..=200 => 8,
        201..=300 => 16,
        _ => 32,
    }
}

/// Tallest numeral font whose character height fits `size_px`.
///
/// Returns `None` for a non-positive size (numerals hidden). Sizes smaller
/// than every candidate fall back to the smallest font.
pub fn label_font_for(size_px: f32) -> Option<&'static MonoFont<'static>> {
    if size_px <= 0.0 {
        return None;
    }
    LABEL_FONTS
        .iter()
        .copied()
        .filter(|font| font.character_size.height as f32 <= size_px)
        .max_by_key(|font| font.character_size.height)
        .or_else(|| LABEL_FONTS.iter().copied().min_by_key(|font| font.character_size.height))
}

/// Vertical font extent relative to the baseline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontMetrics {
    /// Distance from baseline to the top of the glyph cell (negative).
    pub top: f32,
    /// Distance from baseline to the bottom of the glyph cell (positive).
    pub bottom: f32,
}

impl FontMetrics {
    /// Metrics of a mono font's glyph cell.
    pub fn of(font: &MonoFont<'_>) -> Self {
        let baseline = font.baseline as f32;
        Self {
            top: -baseline,
            bottom: font.character_size.height as f32 - baseline,
        }
    }
}

// =============================================================================
// Paints
// =============================================================================

/// Fill or outline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintStyle {
    Fill,
    Stroke,
}

/// Line end shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrokeCap {
    Butt,
    Round,
}

/// Surface-independent description of how to draw a circle or line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    pub color: Rgb565,
    pub style: PaintStyle,
    /// Stroke width in pixels. Ignored for fills.
    pub stroke_width: f32,
    pub cap: StrokeCap,
}

impl Paint {
    /// Solid fill.
    pub const fn fill(color: Rgb565) -> Self {
        Self {
            color,
            style: PaintStyle::Fill,
            stroke_width: 0.0,
            cap: StrokeCap::Butt,
        }
    }

    /// Outline of the given width with butt caps.
    pub const fn stroke(color: Rgb565, stroke_width: f32) -> Self {
        Self {
            color,
            style: PaintStyle::Stroke,
            stroke_width,
            cap: StrokeCap::Butt,
        }
    }

    /// Same paint with round line caps.
    pub const fn with_round_cap(self) -> Self {
        Self {
            cap: StrokeCap::Round,
            ..self
        }
    }

    /// Same paint with the stroke width divided by `divisor`.
    pub fn scaled_down(self, divisor: f32) -> Self {
        Self {
            stroke_width: self.stroke_width / divisor,
            ..self
        }
    }
}

/// Font and color for numerals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextPaint {
    pub color: Rgb565,
    pub font: &'static MonoFont<'static>,
}

impl TextPaint {
    #[inline]
    pub const fn new(color: Rgb565, font: &'static MonoFont<'static>) -> Self { Self { color, font } }

    #[inline]
    pub fn metrics(&self) -> FontMetrics { FontMetrics::of(self.font) }
}
