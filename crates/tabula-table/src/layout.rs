#![forbid(unsafe_code)]

//! Layout: incremental column widths and render-time geometry.
//!
//! Column widths are maintained as values arrive (one measurement per
//! inserted value). Everything else (row height, table size, cell
//! origins) is derived on demand from the live model by
//! [`LayoutEngine::geometry`]. There is no cached layout to invalidate:
//! the computation is linear in rows plus columns and is redone per render.

use tabula_core::geometry::{Point, Size};
use tabula_text::{FontExtents, FontStyle, TextExtents, TextMeasurer};

use crate::model::TableModel;
use crate::value::Value;

/// Default horizontal padding on each side of a cell.
pub const DEFAULT_MARGIN_H: f64 = 6.0;
/// Default vertical padding above and below each row's text.
pub const DEFAULT_MARGIN_V: f64 = 3.0;

/// Cell padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Padding left and right of every cell.
    pub margin_h: f64,
    /// Padding above and below every row.
    pub margin_v: f64,
}

impl LayoutConfig {
    /// Create a config with explicit margins.
    pub const fn new(margin_h: f64, margin_v: f64) -> Self {
        Self { margin_h, margin_v }
    }

    /// Set the horizontal margin.
    #[must_use]
    pub const fn margin_h(mut self, margin: f64) -> Self {
        self.margin_h = margin;
        self
    }

    /// Set the vertical margin.
    #[must_use]
    pub const fn margin_v(mut self, margin: f64) -> Self {
        self.margin_v = margin;
        self
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MARGIN_H, DEFAULT_MARGIN_V)
    }
}

/// Measures values and derives table geometry.
#[derive(Debug, Clone)]
pub struct LayoutEngine<M> {
    measurer: M,
    config: LayoutConfig,
}

impl<M: TextMeasurer> LayoutEngine<M> {
    /// Create an engine around a measurer.
    pub fn new(measurer: M, config: LayoutConfig) -> Self {
        Self { measurer, config }
    }

    /// The measurer.
    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    /// The margins in use.
    pub fn config(&self) -> LayoutConfig {
        self.config
    }

    /// Measure the display string of `value` in `font`.
    pub fn measure_value(&self, value: &Value, font: &FontStyle) -> TextExtents {
        self.measurer.measure(&value.to_display_string(), font)
    }

    /// Compute geometry from the model as it is right now.
    pub fn geometry(&self, model: &TableModel) -> TableGeometry {
        let LayoutConfig { margin_h, margin_v } = self.config;
        let font = self.measurer.font_extents(model.font());
        let row_height = font.height() + 2.0 * margin_v;
        let row_count = model.row_count();

        let mut column_x = Vec::with_capacity(model.column_count());
        let mut column_advance = Vec::with_capacity(model.column_count());
        let mut x = margin_h;
        let mut content_width = 0.0;
        for column in model.columns() {
            let advance = column.width() + 2.0 * margin_h;
            column_x.push(x);
            column_advance.push(advance);
            x += advance;
            content_width += advance;
        }

        let table_width = model.width_override().unwrap_or(content_width);
        let table_height = model
            .height_override()
            .unwrap_or(row_height * row_count as f64);

        TableGeometry {
            font,
            margin_v,
            row_height,
            row_count,
            table_width,
            table_height,
            column_x,
            column_advance,
        }
    }
}

/// Geometry of a table at one point in time.
///
/// Two computations over an unchanged model compare equal.
#[derive(Debug, Clone, PartialEq)]
pub struct TableGeometry {
    font: FontExtents,
    margin_v: f64,
    row_height: f64,
    row_count: usize,
    table_width: f64,
    table_height: f64,
    column_x: Vec<f64>,
    column_advance: Vec<f64>,
}

impl TableGeometry {
    /// Height shared by every row: `ascent + descent + 2 * margin_v`.
    pub fn row_height(&self) -> f64 {
        self.row_height
    }

    /// Effective width (override or sum of column advances).
    pub fn table_width(&self) -> f64 {
        self.table_width
    }

    /// Effective height (override or `row_height * row_count`).
    pub fn table_height(&self) -> f64 {
        self.table_height
    }

    /// Effective size.
    pub fn size(&self) -> Size {
        Size::new(self.table_width, self.table_height)
    }

    /// Font-wide vertical metrics used for this computation.
    pub fn font_extents(&self) -> FontExtents {
        self.font
    }

    /// Number of rows laid out.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of columns laid out.
    pub fn column_count(&self) -> usize {
        self.column_x.len()
    }

    /// X of the text start of `column`:
    /// `margin_h + Σ (width + 2 * margin_h)` over earlier columns.
    pub fn column_x(&self, column: usize) -> Option<f64> {
        self.column_x.get(column).copied()
    }

    /// Horizontal distance from `column` to the next one
    /// (`width + 2 * margin_h`).
    pub fn column_advance(&self, column: usize) -> Option<f64> {
        self.column_advance.get(column).copied()
    }

    /// Baseline of `row`: `ascent + margin_v + row * row_height`.
    pub fn baseline(&self, row: usize) -> f64 {
        self.font.ascent + self.margin_v + row as f64 * self.row_height
    }

    /// Text origin of a cell, before the per-string bearing correction.
    ///
    /// Returns `None` for cells outside the laid-out grid.
    pub fn cell_origin(&self, row: usize, column: usize) -> Option<Point> {
        if row >= self.row_count {
            return None;
        }
        let x = self.column_x(column)?;
        Some(Point::new(x, self.baseline(row)))
    }
}
