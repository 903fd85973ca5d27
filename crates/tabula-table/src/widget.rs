#![forbid(unsafe_code)]

//! Stateful embedding surface.
//!
//! [`TableWidget`] exposes the call-sequence API a host toolkit drives:
//! `begin_row`, any number of `set_value`, `end_row`, and `draw` from the
//! host's paint callback. Values arrive as a numeric type tag plus an
//! untyped [`Payload`], so misuse (values outside a row, unknown tags) is
//! reported as a [`TableError`] instead of being ruled out by types.

use tabula_core::warn;
use tabula_text::TextMeasurer;

use crate::error::TableError;
use crate::render::Canvas;
use crate::table::{RowCursor, Table, TableOptions};
use crate::value::{Payload, Value};

/// A table driven through begin/set/end calls.
#[derive(Debug, Clone)]
pub struct TableWidget<M> {
    table: Table<M>,
    cursor: Option<RowCursor>,
}

impl<M: TextMeasurer> TableWidget<M> {
    /// Create a widget. Zero overrides mean "size to content".
    pub fn create(measurer: M, width_override: f64, height_override: f64) -> Self {
        Self::with_options(
            measurer,
            TableOptions::new()
                .width(width_override)
                .height(height_override),
        )
    }

    /// Create a widget with explicit options.
    pub fn with_options(measurer: M, options: TableOptions) -> Self {
        Self {
            table: Table::with_options(measurer, options),
            cursor: None,
        }
    }

    /// Start a new row.
    ///
    /// A row still open from an earlier `begin_row` is rolled back first.
    pub fn begin_row(&mut self) {
        if let Some(open) = self.cursor.take() {
            self.table.abandon_row(open);
        }
        self.cursor = Some(self.table.open_row());
    }

    /// Append a value to the open row.
    ///
    /// # Errors
    /// - [`TableError::InvalidState`] if no row is open.
    /// - [`TableError::InvalidType`] if `tag` is unknown or does not match
    ///   `payload`.
    /// - [`TableError::ColumnCountMismatch`] if the row already has a value
    ///   for every locked column.
    pub fn set_value(
        &mut self,
        column_hint: &str,
        tag: u32,
        payload: Payload<'_>,
    ) -> Result<(), TableError> {
        let Some(cursor) = self.cursor.as_mut() else {
            warn!(hint = column_hint, "set_value called outside a row");
            return Err(TableError::InvalidState);
        };
        let value = Value::from_tagged(tag, payload)?;
        self.table.insert_value(cursor, column_hint, value)
    }

    /// Finish the open row. Without an open row this does nothing.
    ///
    /// # Errors
    /// [`TableError::ColumnCountMismatch`] if a row after the first is short;
    /// the row is discarded.
    pub fn end_row(&mut self) -> Result<(), TableError> {
        match self.cursor.take() {
            Some(cursor) => self.table.close_row(cursor),
            None => Ok(()),
        }
    }

    /// Check if a row is open.
    pub fn is_row_open(&self) -> bool {
        self.cursor.is_some()
    }

    /// Paint onto the host's canvas.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        self.table.render(canvas);
    }

    /// The table being built.
    pub fn table(&self) -> &Table<M> {
        &self.table
    }

    /// Release the widget and everything it owns.
    pub fn destroy(self) {}
}
