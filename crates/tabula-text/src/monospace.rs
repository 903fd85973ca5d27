#![forbid(unsafe_code)]

//! A deterministic measurer for fixed-advance faces.
//!
//! Every terminal cell of display width advances the pen by
//! `size * advance_ratio`, so wide (CJK, emoji) graphemes take two advances.
//! Like a rasterizer's ink extents, the reported width covers only the inked
//! run: leading whitespace becomes the horizontal bearing and trailing
//! whitespace is not counted.
//!
//! ```
//! use tabula_text::{FontStyle, MonospaceMeasurer, TextMeasurer};
//!
//! let measurer = MonospaceMeasurer::new().advance_ratio(0.5);
//! let font = FontStyle::default().size(10.0);
//!
//! let extents = measurer.measure("  ok", &font);
//! assert_eq!(extents.width, 10.0);
//! assert_eq!(extents.bearing_x, 10.0);
//! ```

use unicode_width::UnicodeWidthStr;

use crate::font::FontStyle;
use crate::measure::{FontExtents, TextExtents, TextMeasurer};

/// Default horizontal advance per cell, as a fraction of the font size.
pub const DEFAULT_ADVANCE_RATIO: f64 = 0.6;
/// Default ascent, as a fraction of the font size.
pub const DEFAULT_ASCENT_RATIO: f64 = 0.8;
/// Default descent, as a fraction of the font size.
pub const DEFAULT_DESCENT_RATIO: f64 = 0.2;
/// Default advance multiplier for bold faces.
pub const DEFAULT_BOLD_FACTOR: f64 = 1.1;

/// Measures text as if every cell had the same advance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasurer {
    advance_ratio: f64,
    ascent_ratio: f64,
    descent_ratio: f64,
    bold_factor: f64,
}

impl MonospaceMeasurer {
    /// Create a measurer with the default ratios.
    pub const fn new() -> Self {
        Self {
            advance_ratio: DEFAULT_ADVANCE_RATIO,
            ascent_ratio: DEFAULT_ASCENT_RATIO,
            descent_ratio: DEFAULT_DESCENT_RATIO,
            bold_factor: DEFAULT_BOLD_FACTOR,
        }
    }

    /// Set the per-cell advance as a fraction of the font size.
    #[must_use]
    pub const fn advance_ratio(mut self, ratio: f64) -> Self {
        self.advance_ratio = ratio;
        self
    }

    /// Set the ascent as a fraction of the font size.
    #[must_use]
    pub const fn ascent_ratio(mut self, ratio: f64) -> Self {
        self.ascent_ratio = ratio;
        self
    }

    /// Set the descent as a fraction of the font size.
    #[must_use]
    pub const fn descent_ratio(mut self, ratio: f64) -> Self {
        self.descent_ratio = ratio;
        self
    }

    /// Set the advance multiplier applied to bold faces.
    #[must_use]
    pub const fn bold_factor(mut self, factor: f64) -> Self {
        self.bold_factor = factor;
        self
    }

    /// Horizontal advance of one cell in `font`.
    pub fn advance(&self, font: &FontStyle) -> f64 {
        let advance = font.size * self.advance_ratio;
        if font.is_bold() {
            advance * self.bold_factor
        } else {
            advance
        }
    }
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &str, font: &FontStyle) -> TextExtents {
        let advance = self.advance(font);
        let after_lead = text.trim_start();
        let lead = &text[..text.len() - after_lead.len()];
        let ink = after_lead.trim_end();
        let metrics = self.font_extents(font);

        TextExtents {
            width: ink.width() as f64 * advance,
            ascent: metrics.ascent,
            descent: metrics.descent,
            bearing_x: lead.width() as f64 * advance,
        }
    }

    fn font_extents(&self, font: &FontStyle) -> FontExtents {
        FontExtents {
            ascent: font.size * self.ascent_ratio,
            descent: font.size * self.descent_ratio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurer() -> MonospaceMeasurer {
        MonospaceMeasurer::new()
            .advance_ratio(0.5)
            .ascent_ratio(0.75)
            .descent_ratio(0.25)
            .bold_factor(2.0)
    }

    fn font() -> FontStyle {
        FontStyle::default().size(10.0)
    }

    #[test]
    fn ascii_width_is_cells_times_advance() {
        let e = measurer().measure("Alice", &font());
        assert_eq!(e.width, 25.0);
        assert_eq!(e.bearing_x, 0.0);
    }

    #[test]
    fn vertical_metrics_scale_with_size() {
        let e = measurer().measure("x", &font());
        assert_eq!(e.ascent, 7.5);
        assert_eq!(e.descent, 2.5);
        assert_eq!(measurer().font_extents(&font()).height(), 10.0);
    }

    #[test]
    fn wide_graphemes_take_two_cells() {
        let e = measurer().measure("你好", &font());
        assert_eq!(e.width, 20.0);
    }

    #[test]
    fn leading_whitespace_becomes_bearing() {
        let e = measurer().measure("  42", &font());
        assert_eq!(e.bearing_x, 10.0);
        assert_eq!(e.width, 10.0);
    }

    #[test]
    fn trailing_whitespace_is_not_ink() {
        assert_eq!(measurer().measure("ab   ", &font()).width, 10.0);
    }

    #[test]
    fn empty_and_blank_strings_have_no_ink() {
        assert_eq!(measurer().measure("", &font()).width, 0.0);
        let blank = measurer().measure("   ", &font());
        assert_eq!(blank.width, 0.0);
        assert_eq!(blank.bearing_x, 15.0);
    }

    #[test]
    fn bold_widens_advance() {
        let bold = font().bold();
        assert_eq!(measurer().advance(&bold), 10.0);
        assert_eq!(measurer().measure("abc", &bold).width, 30.0);
    }

    #[test]
    fn measurement_is_deterministic() {
        let m = MonospaceMeasurer::default();
        let f = FontStyle::default();
        assert_eq!(m.measure("1234.500000", &f), m.measure("1234.500000", &f));
    }
}
