#![forbid(unsafe_code)]

//! Font style shared by every cell of a table.

use std::hash::{Hash, Hasher};

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    /// Regular weight.
    #[default]
    Normal,
    /// Bold weight.
    Bold,
}

/// Default point size.
pub const DEFAULT_FONT_SIZE: f64 = 12.0;

/// Default font family.
pub const DEFAULT_FONT_FAMILY: &str = "Open Sans";

/// A single font style: weight, size and family.
///
/// Family names are carried through to the canvas untouched; resolving them
/// to an actual face is the backend's job.
#[derive(Debug, Clone, PartialEq)]
pub struct FontStyle {
    /// Weight of the face.
    pub weight: FontWeight,
    /// Size in points.
    pub size: f64,
    /// Family name.
    pub family: String,
}

impl FontStyle {
    /// Create a new font style.
    pub fn new(weight: FontWeight, size: f64, family: impl Into<String>) -> Self {
        Self {
            weight,
            size,
            family: family.into(),
        }
    }

    /// Set the weight.
    #[must_use]
    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Set the size in points.
    #[must_use]
    pub fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Set the family name.
    #[must_use]
    pub fn family(mut self, family: impl Into<String>) -> Self {
        self.family = family.into();
        self
    }

    /// Shorthand for `weight(FontWeight::Bold)`.
    #[must_use]
    pub fn bold(self) -> Self {
        self.weight(FontWeight::Bold)
    }

    /// Check if the style is bold.
    pub fn is_bold(&self) -> bool {
        self.weight == FontWeight::Bold
    }
}

impl Default for FontStyle {
    fn default() -> Self {
        Self::new(FontWeight::Normal, DEFAULT_FONT_SIZE, DEFAULT_FONT_FAMILY)
    }
}

// Sizes hash by bit pattern so styles can key measurement caches.
impl Hash for FontStyle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.weight.hash(state);
        self.size.to_bits().hash(state);
        self.family.hash(state);
    }
}
