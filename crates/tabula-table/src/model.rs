#![forbid(unsafe_code)]

//! The table model: columns, rows and their values.
//!
//! The model owns everything a table holds. Rows are append-only; the
//! column set is defined by the first completed row and locked after it.
//! Mutation goes through [`Table`](crate::Table) and its
//! [`RowBuilder`](crate::RowBuilder), which keep the model's invariants.

use tabula_text::FontStyle;

use crate::value::Value;

/// A column: its name and its running-maximum content width.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    width: f64,
}

impl Column {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            width: 0.0,
        }
    }

    /// Column name, taken from the first row's hints.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Widest measured value seen in this column.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Raise the width to `measured` if it is wider. Returns true on growth.
    fn grow(&mut self, measured: f64) -> bool {
        if measured > self.width {
            self.width = measured;
            true
        } else {
            false
        }
    }
}

/// A row of values in column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    values: Vec<Value>,
}

impl Row {
    /// Values in column order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Value at `column`, if present.
    pub fn get(&self, column: usize) -> Option<&Value> {
        self.values.get(column)
    }

    /// Number of values in the row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the row holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Ordered columns and rows plus table-wide presentation settings.
#[derive(Debug, Clone, PartialEq)]
pub struct TableModel {
    columns: Vec<Column>,
    rows: Vec<Row>,
    font: FontStyle,
    width_override: Option<f64>,
    height_override: Option<f64>,
    columns_closed: bool,
}

impl TableModel {
    /// Create an empty model.
    ///
    /// Overrides that are zero, negative or NaN mean "compute from content".
    pub fn new(font: FontStyle, width_override: f64, height_override: f64) -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            font,
            width_override: explicit(width_override),
            height_override: explicit(height_override),
            columns_closed: false,
        }
    }

    /// Columns in display order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Rows in insertion order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows, including one still under construction.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Value at `(row, column)`, if present.
    pub fn value(&self, row: usize, column: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// The table's font style.
    pub fn font(&self) -> &FontStyle {
        &self.font
    }

    /// Explicit width, if one was set.
    pub fn width_override(&self) -> Option<f64> {
        self.width_override
    }

    /// Explicit height, if one was set.
    pub fn height_override(&self) -> Option<f64> {
        self.height_override
    }

    /// Check if the column set is locked.
    pub fn are_columns_closed(&self) -> bool {
        self.columns_closed
    }

    pub(crate) fn push_row(&mut self) -> usize {
        self.rows.push(Row::default());
        self.rows.len() - 1
    }

    pub(crate) fn push_column(&mut self, name: &str) -> usize {
        self.columns.push(Column::new(name));
        self.columns.len() - 1
    }

    pub(crate) fn push_value(&mut self, row: usize, value: Value) {
        if let Some(r) = self.rows.get_mut(row) {
            r.values.push(value);
        }
    }

    pub(crate) fn grow_column(&mut self, column: usize, measured: f64) -> bool {
        self.columns
            .get_mut(column)
            .is_some_and(|c| c.grow(measured))
    }

    pub(crate) fn close_columns(&mut self) {
        self.columns_closed = true;
    }

    /// Drop the most recent row. While the column set is still open the
    /// columns belong to that row alone, so they go too.
    pub(crate) fn discard_last_row(&mut self) {
        self.rows.pop();
        if !self.columns_closed {
            self.columns.clear();
        }
    }
}

impl Default for TableModel {
    fn default() -> Self {
        Self::new(FontStyle::default(), 0.0, 0.0)
    }
}

fn explicit(size: f64) -> Option<f64> {
    (size > 0.0).then_some(size)
}
