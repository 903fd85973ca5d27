#![forbid(unsafe_code)]

//! The table: model plus layout engine, and row-by-row construction.

use tabula_core::{debug, trace, warn};
use tabula_text::{FontStyle, TextMeasurer};

use crate::error::TableError;
use crate::layout::{LayoutConfig, LayoutEngine, TableGeometry};
use crate::model::{Column, Row, TableModel};
use crate::render::{Canvas, RenderStyle, render_table};
use crate::value::{Payload, Value};

/// Construction-time settings for a [`Table`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableOptions {
    width: f64,
    height: f64,
    font: FontStyle,
    layout: LayoutConfig,
    render_style: RenderStyle,
}

impl TableOptions {
    /// Default options: content-sized, `Normal 12 "Open Sans"`, 6/3 margins.
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicit table width. Zero means "compute from content".
    #[must_use]
    pub fn width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Explicit table height. Zero means "compute from content".
    #[must_use]
    pub fn height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Font used for every cell.
    #[must_use]
    pub fn font(mut self, font: FontStyle) -> Self {
        self.font = font;
        self
    }

    /// Cell margins.
    #[must_use]
    pub fn layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Background and text colours.
    #[must_use]
    pub fn render_style(mut self, style: RenderStyle) -> Self {
        self.render_style = style;
        self
    }
}

/// Position of the row under construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RowCursor {
    row: usize,
    column: usize,
}

/// An incrementally built table.
///
/// ```
/// use tabula_table::Table;
/// use tabula_text::MonospaceMeasurer;
///
/// let mut table = Table::new(MonospaceMeasurer::new());
///
/// let mut row = table.begin_row();
/// row.set_value("Name", "Alice")?.set_value("Score", 42.0)?;
/// row.end_row()?;
///
/// let mut row = table.begin_row();
/// row.set_value("Name", "Bob")?.set_value("Score", 1234.5)?;
/// row.end_row()?;
///
/// assert_eq!(table.column_count(), 2);
/// assert_eq!(table.columns()[1].name(), "Score");
/// # Ok::<(), tabula_table::TableError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Table<M> {
    model: TableModel,
    engine: LayoutEngine<M>,
    render_style: RenderStyle,
}

impl<M: TextMeasurer> Table<M> {
    /// Create a table with default options.
    pub fn new(measurer: M) -> Self {
        Self::with_options(measurer, TableOptions::default())
    }

    /// Create a table with explicit options.
    pub fn with_options(measurer: M, options: TableOptions) -> Self {
        Self {
            model: TableModel::new(options.font, options.width, options.height),
            engine: LayoutEngine::new(measurer, options.layout),
            render_style: options.render_style,
        }
    }

    /// Start a new row at the end of the table.
    pub fn begin_row(&mut self) -> RowBuilder<'_, M> {
        let cursor = self.open_row();
        RowBuilder {
            table: self,
            cursor: Some(cursor),
        }
    }

    /// The underlying model.
    pub fn model(&self) -> &TableModel {
        &self.model
    }

    /// The layout engine.
    pub fn engine(&self) -> &LayoutEngine<M> {
        &self.engine
    }

    /// Colours used when rendering.
    pub fn render_style(&self) -> RenderStyle {
        self.render_style
    }

    /// Columns in display order.
    pub fn columns(&self) -> &[Column] {
        self.model.columns()
    }

    /// Rows in insertion order.
    pub fn rows(&self) -> &[Row] {
        self.model.rows()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.model.column_count()
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.model.row_count()
    }

    /// Geometry computed from the current contents.
    pub fn geometry(&self) -> TableGeometry {
        self.engine.geometry(&self.model)
    }

    /// Row height for the table's font.
    pub fn row_height(&self) -> f64 {
        self.geometry().row_height()
    }

    /// Effective table width.
    pub fn table_width(&self) -> f64 {
        self.geometry().table_width()
    }

    /// Effective table height.
    pub fn table_height(&self) -> f64 {
        self.geometry().table_height()
    }

    /// Paint the table onto `canvas`.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        render_table(self, canvas);
    }

    pub(crate) fn open_row(&mut self) -> RowCursor {
        RowCursor {
            row: self.model.push_row(),
            column: 0,
        }
    }

    pub(crate) fn insert_value(
        &mut self,
        cursor: &mut RowCursor,
        hint: &str,
        value: Value,
    ) -> Result<(), TableError> {
        let column = if self.model.are_columns_closed() {
            let expected = self.model.column_count();
            if cursor.column >= expected {
                warn!(
                    row = cursor.row,
                    expected, "value rejected: row already has a value for every column"
                );
                return Err(TableError::ColumnCountMismatch {
                    expected,
                    found: cursor.column + 1,
                });
            }
            cursor.column
        } else {
            self.model.push_column(hint)
        };

        let measured = self.engine.measure_value(&value, self.model.font()).width;
        if self.model.grow_column(column, measured) {
            trace!(column, width = measured, "column width grew");
        }
        self.model.push_value(cursor.row, value);
        cursor.column += 1;
        Ok(())
    }

    pub(crate) fn close_row(&mut self, cursor: RowCursor) -> Result<(), TableError> {
        if !self.model.are_columns_closed() {
            self.model.close_columns();
            debug!(columns = self.model.column_count(), "column set closed");
            return Ok(());
        }

        let expected = self.model.column_count();
        if cursor.column != expected {
            self.model.discard_last_row();
            warn!(
                row = cursor.row,
                expected,
                found = cursor.column,
                "short row discarded"
            );
            return Err(TableError::ColumnCountMismatch {
                expected,
                found: cursor.column,
            });
        }
        Ok(())
    }

    pub(crate) fn abandon_row(&mut self, cursor: RowCursor) {
        debug_assert_eq!(cursor.row + 1, self.model.row_count());
        warn!(row = cursor.row, "unfinished row rolled back");
        self.model.discard_last_row();
    }
}

/// Builds one row. Returned by [`Table::begin_row`].
///
/// Values are appended left to right. While the first row is being built
/// each value also defines a new column named by its hint; afterwards the
/// hints are ignored and values fill the locked columns in order.
///
/// Dropping a builder without [`end_row`](RowBuilder::end_row) discards
/// the row (and, for the first row, the columns it defined). Widths
/// already grown by its values stay grown.
#[derive(Debug)]
pub struct RowBuilder<'t, M: TextMeasurer> {
    table: &'t mut Table<M>,
    cursor: Option<RowCursor>,
}

impl<M: TextMeasurer> RowBuilder<'_, M> {
    /// Append a typed value.
    ///
    /// Fails with [`TableError::ColumnCountMismatch`] if every locked column
    /// already has a value in this row.
    pub fn set_value(
        &mut self,
        hint: &str,
        value: impl Into<Value>,
    ) -> Result<&mut Self, TableError> {
        let cursor = self.cursor.as_mut().ok_or(TableError::InvalidState)?;
        self.table.insert_value(cursor, hint, value.into())?;
        Ok(self)
    }

    /// Append a value given as a numeric type tag and payload.
    ///
    /// Fails with [`TableError::InvalidType`] before anything is measured
    /// if the tag is unknown or does not match the payload.
    pub fn set_tagged(
        &mut self,
        hint: &str,
        tag: u32,
        payload: Payload<'_>,
    ) -> Result<&mut Self, TableError> {
        let value = Value::from_tagged(tag, payload)?;
        self.set_value(hint, value)
    }

    /// Number of values supplied so far.
    pub fn len(&self) -> usize {
        self.cursor.map_or(0, |c| c.column)
    }

    /// Check if no value has been supplied yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Finish the row.
    ///
    /// The first finished row locks the column set. Later rows must supply
    /// one value per column; a short row fails with
    /// [`TableError::ColumnCountMismatch`] and is discarded.
    pub fn end_row(mut self) -> Result<(), TableError> {
        match self.cursor.take() {
            Some(cursor) => self.table.close_row(cursor),
            None => Ok(()),
        }
    }
}

impl<M: TextMeasurer> Drop for RowBuilder<'_, M> {
    fn drop(&mut self) {
        if let Some(cursor) = self.cursor.take() {
            self.table.abandon_row(cursor);
        }
    }
}
