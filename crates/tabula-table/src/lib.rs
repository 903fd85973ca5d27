#![forbid(unsafe_code)]

//! Incremental table layout.
//!
//! Rows of typed values are inserted one at a time. Each inserted value is
//! measured once and may widen its column; geometry (row height, table
//! size, cell origins) is derived from the live table whenever it is asked
//! for, so rows appended after a render simply show up in the next one.
//!
//! - [`Table`] / [`RowBuilder`] - typed, borrow-checked construction
//! - [`TableWidget`] - the stateful begin/set/end embedding surface
//! - [`LayoutEngine`] / [`TableGeometry`] - width tracking and geometry
//! - [`Canvas`] / [`render_table`] - the paint pass
//!
//! # Example
//! ```
//! use tabula_table::{RecordingCanvas, Table};
//! use tabula_text::MonospaceMeasurer;
//!
//! let mut table = Table::new(MonospaceMeasurer::new());
//! let mut row = table.begin_row();
//! row.set_value("Name", "Alice")?.set_value("Score", 42.0)?;
//! row.end_row()?;
//!
//! let mut canvas = RecordingCanvas::new();
//! table.render(&mut canvas);
//! assert_eq!(canvas.texts(), ["Alice", "42.000000"]);
//! # Ok::<(), tabula_table::TableError>(())
//! ```

pub mod error;
pub mod layout;
pub mod model;
pub mod render;
pub mod table;
pub mod value;
pub mod widget;

pub use error::TableError;
pub use layout::{DEFAULT_MARGIN_H, DEFAULT_MARGIN_V, LayoutConfig, LayoutEngine, TableGeometry};
pub use model::{Column, Row, TableModel};
pub use render::{Canvas, DrawOp, RecordingCanvas, RenderStyle, Rgb, render_table};
pub use table::{RowBuilder, Table, TableOptions};
pub use value::{Payload, Value, ValueType};
pub use widget::TableWidget;
