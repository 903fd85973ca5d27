#![forbid(unsafe_code)]

//! The text measurement contract.

use crate::font::FontStyle;

/// Extents of one string rendered in one font style.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextExtents {
    /// Width of the inked run.
    pub width: f64,
    /// Font ascent (distance from baseline to the top of the face).
    pub ascent: f64,
    /// Font descent (distance from baseline to the bottom of the face).
    pub descent: f64,
    /// Offset from the drawing origin to where the ink starts.
    pub bearing_x: f64,
}

/// Style-wide vertical font metrics.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FontExtents {
    /// Distance from baseline to the top of the face.
    pub ascent: f64,
    /// Distance from baseline to the bottom of the face.
    pub descent: f64,
}

impl FontExtents {
    /// Line height without any spacing (`ascent + descent`).
    #[inline]
    pub fn height(&self) -> f64 {
        self.ascent + self.descent
    }
}

impl From<TextExtents> for FontExtents {
    fn from(extents: TextExtents) -> Self {
        Self {
            ascent: extents.ascent,
            descent: extents.descent,
        }
    }
}

/// Measures strings for layout.
///
/// Implementations must be deterministic in `(text, font)` for the lifetime
/// of the process: a width measured when a value is inserted is reused when
/// the table is rendered later.
pub trait TextMeasurer {
    /// Measure `text` rendered with `font`.
    fn measure(&self, text: &str, font: &FontStyle) -> TextExtents;

    /// Vertical metrics of `font`, independent of any particular string.
    fn font_extents(&self, font: &FontStyle) -> FontExtents {
        self.measure("", font).into()
    }
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &M {
    #[inline]
    fn measure(&self, text: &str, font: &FontStyle) -> TextExtents {
        (**self).measure(text, font)
    }

    #[inline]
    fn font_extents(&self, font: &FontStyle) -> FontExtents {
        (**self).font_extents(font)
    }
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for Box<M> {
    #[inline]
    fn measure(&self, text: &str, font: &FontStyle) -> TextExtents {
        (**self).measure(text, font)
    }

    #[inline]
    fn font_extents(&self, font: &FontStyle) -> FontExtents {
        (**self).font_extents(font)
    }
}
