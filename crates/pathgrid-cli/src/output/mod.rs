//! Output formatting for CLI commands.

use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};
use pathgrid_common::types::{DistanceMatrix, Weight};

/// Output format selection.
#[derive(Clone, Copy)]
pub enum Format {
    Table,
    Json,
}

impl From<crate::OutputFormat> for Format {
    fn from(f: crate::OutputFormat) -> Self {
        match f {
            crate::OutputFormat::Table => Format::Table,
            crate::OutputFormat::Json => Format::Json,
        }
    }
}

/// Create a styled table with consistent formatting.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.load_preset(comfy_table::presets::UTF8_FULL_CONDENSED);
    table
}

/// Add a header row to a table.
pub fn add_header<S: AsRef<str>>(table: &mut Table, headers: &[S]) {
    table.set_header(
        headers
            .iter()
            .map(|h| Cell::new(h.as_ref()).fg(Color::Cyan))
            .collect::<Vec<_>>(),
    );
}

/// Text for one distance cell; a missing value is blank.
pub fn format_weight(weight: Option<Weight>) -> String {
    weight.map(|w| w.to_string()).unwrap_or_default()
}

fn weight_cell(weight: Option<Weight>) -> Cell {
    Cell::new(format_weight(weight)).set_alignment(CellAlignment::Right)
}

/// Table with one row per vertex.
pub fn distance_table(distances: &[Option<Weight>]) -> Table {
    let mut table = create_table();
    add_header(&mut table, &["Vertex", "Distance"]);
    for (vertex, distance) in distances.iter().enumerate() {
        table.add_row(vec![
            Cell::new(vertex).fg(Color::Green),
            weight_cell(*distance),
        ]);
    }
    table
}

/// Table with a labelled row and column per vertex.
pub fn matrix_table(matrix: &DistanceMatrix) -> Table {
    let mut table = create_table();
    let headers: Vec<String> = std::iter::once(String::new())
        .chain((0..matrix.size()).map(|v| v.to_string()))
        .collect();
    add_header(&mut table, &headers);
    for (vertex, row) in matrix.rows().enumerate() {
        let mut cells = vec![Cell::new(vertex).fg(Color::Green)];
        cells.extend(row.iter().map(|d| weight_cell(*d)));
        table.add_row(cells);
    }
    table
}

/// Print a key-value table (for info displays).
pub fn print_key_value_table(items: &[(&str, String)], quiet: bool) {
    if quiet {
        return;
    }

    let mut table = create_table();
    add_header(&mut table, &["Property", "Value"]);
    for (key, value) in items {
        table.add_row(vec![Cell::new(key).fg(Color::Green), Cell::new(value)]);
    }
    println!("{table}");
}

/// Print a status message (respects quiet mode).
pub fn status(msg: &str, quiet: bool) {
    if !quiet {
        println!("{msg}");
    }
}
