#![forbid(unsafe_code)]

//! End-to-end construction, layout and render scenarios.

use tabula_core::geometry::Point;
use tabula_table::{
    DrawOp, LayoutConfig, Payload, RecordingCanvas, Table, TableError, TableOptions, TableWidget,
    ValueType,
};
use tabula_text::{CachedMeasurer, FontStyle, MonospaceMeasurer, TextMeasurer};

fn measurer() -> MonospaceMeasurer {
    MonospaceMeasurer::new()
}

fn width_of(text: &str) -> f64 {
    measurer().measure(text, &FontStyle::default()).width
}

fn widths<M: TextMeasurer>(table: &Table<M>) -> Vec<f64> {
    table.columns().iter().map(|c| c.width()).collect()
}

// ============================================================================
// Scenario A: widths are running maxima of measured display strings
// ============================================================================

#[test]
fn scenario_a_running_max_widths() {
    let mut table = Table::new(measurer());

    let mut row = table.begin_row();
    row.set_value("Name", "Alice").unwrap();
    row.set_value("Score", 42.0).unwrap();
    row.end_row().unwrap();

    assert_eq!(
        widths(&table),
        [width_of("Alice"), width_of("42.000000")]
    );

    let mut row = table.begin_row();
    row.set_value("Name", "Bob").unwrap();
    row.set_value("Score", 1234.5).unwrap();
    row.end_row().unwrap();

    assert_eq!(
        widths(&table),
        [
            width_of("Alice").max(width_of("Bob")),
            width_of("42.000000").max(width_of("1234.500000")),
        ]
    );
    let names: Vec<_> = table.columns().iter().map(|c| c.name()).collect();
    assert_eq!(names, ["Name", "Score"]);
}

// ============================================================================
// Scenario B: set_value before begin_row
// ============================================================================

#[test]
fn scenario_b_value_without_row() {
    let mut widget = TableWidget::create(measurer(), 0.0, 0.0);
    let err = widget
        .set_value("Name", ValueType::STR_TAG, Payload::Text("Alice"))
        .unwrap_err();
    assert_eq!(err, TableError::InvalidState);
}

// ============================================================================
// Scenario C: width override
// ============================================================================

#[test]
fn scenario_c_width_override() {
    let mut table = Table::with_options(measurer(), TableOptions::new().width(300.0));
    assert_eq!(table.table_width(), 300.0);

    for text in ["short", "a considerably longer cell value than the override"] {
        let mut row = table.begin_row();
        row.set_value("Text", text).unwrap();
        row.end_row().unwrap();
        assert_eq!(table.table_width(), 300.0);
    }

    let mut canvas = RecordingCanvas::new();
    table.render(&mut canvas);
    assert_eq!(canvas.requested_size().map(|s| s.width), Some(300.0));
}

#[test]
fn height_override_ignores_row_count() {
    let mut table = Table::with_options(measurer(), TableOptions::new().height(50.0));
    for i in 0..10 {
        let mut row = table.begin_row();
        row.set_value("n", f64::from(i)).unwrap();
        row.end_row().unwrap();
    }
    assert_eq!(table.table_height(), 50.0);
}

// ============================================================================
// Scenario D: unrecognized type tag
// ============================================================================

#[test]
fn scenario_d_invalid_type() {
    let mut widget = TableWidget::create(measurer(), 0.0, 0.0);
    widget.begin_row();
    widget
        .set_value("Name", ValueType::STR_TAG, Payload::Text("Al"))
        .unwrap();
    widget.end_row().unwrap();

    let before = widths(widget.table());
    widget.begin_row();
    let err = widget
        .set_value("Name", 77, Payload::Text("much much wider text"))
        .unwrap_err();
    assert_eq!(err, TableError::InvalidType { tag: 77 });
    assert_eq!(widths(widget.table()), before);
    assert!(widget.table().rows()[1].is_empty());
}

// ============================================================================
// Scenario E: surplus values against locked columns
// ============================================================================

#[test]
fn scenario_e_column_count_mismatch() {
    let mut table = Table::new(measurer());
    let mut row = table.begin_row();
    row.set_value("Name", "Alice").unwrap();
    row.set_value("Score", 42.0).unwrap();
    row.end_row().unwrap();

    let mut row = table.begin_row();
    row.set_value("Name", "Bob").unwrap();
    row.set_value("Score", 7.0).unwrap();
    let err = row.set_value("Extra", "surplus").unwrap_err();
    assert_eq!(
        err,
        TableError::ColumnCountMismatch {
            expected: 2,
            found: 3
        }
    );
    row.end_row().unwrap();

    assert_eq!(table.column_count(), 2);
    assert!(table.rows().iter().all(|r| r.len() == 2));
}

// ============================================================================
// Geometry follows live state
// ============================================================================

#[test]
fn appending_after_render_changes_next_render() {
    let mut table = Table::new(measurer());
    let mut row = table.begin_row();
    row.set_value("Name", "Al").unwrap();
    row.end_row().unwrap();

    let mut first = RecordingCanvas::new();
    table.render(&mut first);
    let first_size = first.requested_size().unwrap();

    let mut row = table.begin_row();
    row.set_value("Name", "Bartholomew").unwrap();
    row.end_row().unwrap();

    let mut second = RecordingCanvas::new();
    table.render(&mut second);
    let second_size = second.requested_size().unwrap();

    let margin_h = LayoutConfig::default().margin_h;
    assert_eq!(second_size.height, 2.0 * first_size.height);
    assert_eq!(second_size.width, width_of("Bartholomew") + 2.0 * margin_h);
    assert_eq!(second.texts(), ["Al", "Bartholomew"]);
}

#[test]
fn wider_value_shifts_every_row() {
    let mut table = Table::new(measurer());
    for (a, b) in [("x", "first"), ("y", "second")] {
        let mut row = table.begin_row();
        row.set_value("A", a).unwrap();
        row.set_value("B", b).unwrap();
        row.end_row().unwrap();
    }
    let before = table.geometry().cell_origin(0, 1).unwrap();

    let mut row = table.begin_row();
    row.set_value("A", "a much wider value").unwrap();
    row.set_value("B", "third").unwrap();
    row.end_row().unwrap();

    let geometry = table.geometry();
    let after0 = geometry.cell_origin(0, 1).unwrap();
    let after1 = geometry.cell_origin(1, 1).unwrap();
    assert!(after0.x > before.x);
    assert_eq!(after0.x, after1.x);
}

#[test]
fn geometry_is_idempotent() {
    let mut table = Table::new(measurer());
    let mut row = table.begin_row();
    row.set_value("A", "a").unwrap();
    row.set_value("B", 3.25).unwrap();
    row.end_row().unwrap();

    assert_eq!(table.geometry(), table.geometry());

    let mut a = RecordingCanvas::new();
    let mut b = RecordingCanvas::new();
    table.render(&mut a);
    table.render(&mut b);
    assert_eq!(a.ops(), b.ops());
}

#[test]
fn first_cell_origin_uses_margins() {
    let config = LayoutConfig::new(4.0, 2.0);
    let font = FontStyle::default().size(10.0);
    let m = MonospaceMeasurer::new()
        .advance_ratio(0.5)
        .ascent_ratio(0.75)
        .descent_ratio(0.25);
    let mut table = Table::with_options(m, TableOptions::new().layout(config).font(font));
    let mut row = table.begin_row();
    row.set_value("A", "abc").unwrap();
    row.end_row().unwrap();

    let geometry = table.geometry();
    assert_eq!(geometry.row_height(), 7.5 + 2.5 + 4.0);
    assert_eq!(geometry.cell_origin(0, 0), Some(Point::new(4.0, 9.5)));
    assert_eq!(geometry.table_width(), 15.0 + 8.0);
}

fn fill_scores<M: TextMeasurer>(table: &mut Table<M>) {
    for (name, score) in [("Alice", 42.0), ("Bob", 1234.5)] {
        let mut row = table.begin_row();
        row.set_value("Name", name).unwrap();
        row.set_value("Score", score).unwrap();
        row.end_row().unwrap();
    }
}

#[test]
fn cached_measurer_renders_identically() {
    let mut plain = Table::new(measurer());
    fill_scores(&mut plain);
    let mut cached = Table::new(CachedMeasurer::new(measurer(), 64));
    fill_scores(&mut cached);

    let mut a = RecordingCanvas::new();
    let mut b = RecordingCanvas::new();
    plain.render(&mut a);
    cached.render(&mut b);
    assert_eq!(a.ops(), b.ops());

    cached.render(&mut b);
    let stats = cached.engine().measurer().stats();
    assert!(stats.hits >= 8, "render passes should hit the cache: {stats:?}");
    assert_eq!(stats.misses, 4);
}

#[test]
fn empty_table_only_paints_background() {
    let table = Table::new(measurer());
    let mut canvas = RecordingCanvas::new();
    table.render(&mut canvas);
    assert!(matches!(canvas.ops(), [DrawOp::PaintBackground(_)]));
}
