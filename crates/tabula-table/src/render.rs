#![forbid(unsafe_code)]

//! Rendering: the canvas contract and the paint pass.
//!
//! The paint pass walks rows top to bottom and cells left to right. Each
//! cell's string is measured again only for its ink bearing; horizontal
//! placement comes from the column widths tracked at insertion time.

use tabula_core::geometry::{Point, Size};
use tabula_text::{FontStyle, TextMeasurer};

use crate::table::Table;

/// An 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
}

impl Rgb {
    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// The default text grey.
    pub const TEXT_GREY: Self = Self::new(66, 66, 66);

    /// Create a colour.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Colours used by the paint pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    /// Background fill.
    pub background: Rgb,
    /// Text colour.
    pub text: Rgb,
}

impl RenderStyle {
    /// Set the background colour.
    #[must_use]
    pub const fn background(mut self, color: Rgb) -> Self {
        self.background = color;
        self
    }

    /// Set the text colour.
    #[must_use]
    pub const fn text(mut self, color: Rgb) -> Self {
        self.text = color;
        self
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: Rgb::WHITE,
            text: Rgb::TEXT_GREY,
        }
    }
}

/// Drawing primitives a render target provides.
pub trait Canvas {
    /// Fill the whole target with `color`.
    fn paint_background(&mut self, color: Rgb);
    /// Select the font for subsequent text.
    fn set_font(&mut self, font: &FontStyle);
    /// Select the colour for subsequent text.
    fn set_color(&mut self, color: Rgb);
    /// Move the pen to a baseline origin.
    fn move_to(&mut self, x: f64, y: f64);
    /// Draw `text` at the pen.
    fn show_text(&mut self, text: &str);
    /// Ask the host to size the target to `width` x `height`.
    fn request_resize(&mut self, width: f64, height: f64);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn paint_background(&mut self, color: Rgb) {
        (**self).paint_background(color);
    }

    fn set_font(&mut self, font: &FontStyle) {
        (**self).set_font(font);
    }

    fn set_color(&mut self, color: Rgb) {
        (**self).set_color(color);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        (**self).move_to(x, y);
    }

    fn show_text(&mut self, text: &str) {
        (**self).show_text(text);
    }

    fn request_resize(&mut self, width: f64, height: f64) {
        (**self).request_resize(width, height);
    }
}

/// Paint `table` onto `canvas`.
///
/// An empty table only gets its background; no resize is requested.
pub fn render_table<M, C>(table: &Table<M>, canvas: &mut C)
where
    M: TextMeasurer,
    C: Canvas + ?Sized,
{
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "table_render",
        rows = table.row_count(),
        columns = table.column_count()
    )
    .entered();

    let style = table.render_style();
    canvas.paint_background(style.background);

    if table.rows().is_empty() {
        return;
    }

    let font = table.model().font();
    let measurer = table.engine().measurer();
    canvas.set_font(font);

    let geometry = table.geometry();
    canvas.request_resize(geometry.table_width(), geometry.table_height());
    canvas.set_color(style.text);

    let margin_h = table.engine().config().margin_h;
    for (row_index, row) in table.rows().iter().enumerate() {
        let y = geometry.baseline(row_index);
        let mut x = margin_h;

        for (column, value) in table.columns().iter().zip(row.values()) {
            let text = value.to_display_string();
            let bearing = measurer.measure(&text, font).bearing_x;
            canvas.move_to(x - bearing, y);
            canvas.show_text(&text);
            x += column.width() + 2.0 * margin_h;
        }
    }
}

/// One recorded canvas call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// `paint_background`
    PaintBackground(Rgb),
    /// `set_font`
    SetFont(FontStyle),
    /// `set_color`
    SetColor(Rgb),
    /// `move_to`
    MoveTo(Point),
    /// `show_text`
    ShowText(String),
    /// `request_resize`
    RequestResize(Size),
}

/// A headless canvas that records every call.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded calls in order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Take the recorded calls, leaving the recorder empty.
    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    /// Forget recorded calls.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Strings drawn, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::ShowText(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Each drawn string paired with the pen position it was drawn at.
    pub fn placed_texts(&self) -> Vec<(Point, &str)> {
        let mut pen = Point::ZERO;
        let mut placed = Vec::new();
        for op in &self.ops {
            match op {
                DrawOp::MoveTo(p) => pen = *p,
                DrawOp::ShowText(text) => placed.push((pen, text.as_str())),
                _ => {}
            }
        }
        placed
    }

    /// The last requested size, if any.
    pub fn requested_size(&self) -> Option<Size> {
        self.ops.iter().rev().find_map(|op| match op {
            DrawOp::RequestResize(size) => Some(*size),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn paint_background(&mut self, color: Rgb) {
        self.ops.push(DrawOp::PaintBackground(color));
    }

    fn set_font(&mut self, font: &FontStyle) {
        self.ops.push(DrawOp::SetFont(font.clone()));
    }

    fn set_color(&mut self, color: Rgb) {
        self.ops.push(DrawOp::SetColor(color));
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::MoveTo(Point::new(x, y)));
    }

    fn show_text(&mut self, text: &str) {
        self.ops.push(DrawOp::ShowText(text.to_owned()));
    }

    fn request_resize(&mut self, width: f64, height: f64) {
        self.ops.push(DrawOp::RequestResize(Size::new(width, height)));
    }
}
