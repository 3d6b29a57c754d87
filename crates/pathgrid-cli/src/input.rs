//! Reading adjacency matrices from files.
//!
//! Two layouts are accepted:
//!
//! - JSON: an array of rows, `null` for a missing edge.
//! - Grid: one comma-separated row per line. An empty cell is a missing edge.
//!   Blank lines and lines starting with `#` are skipped, so a single vertex
//!   is written as `0` (its diagonal cell) or as JSON `[[null]]`.

use std::io::Read;
use std::path::Path;

use pathgrid_common::types::{AdjacencyMatrix, Weight};
use pathgrid_common::utils::error::{Error, Result};

/// Reads and parses the matrix at `path`; `-` reads stdin.
pub fn load_matrix(path: &Path, max_vertices: usize) -> Result<AdjacencyMatrix> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };

    let is_json = path.extension().is_some_and(|ext| ext == "json")
        || text.trim_start().starts_with('[');
    let matrix = if is_json {
        parse_json(&text)?
    } else {
        parse_grid(&text)?
    };

    if matrix.size() > max_vertices {
        return Err(Error::TooManyVertices {
            vertex_count: matrix.size(),
            limit: max_vertices,
        });
    }

    tracing::info!(
        vertices = matrix.size(),
        path = %path.display(),
        "loaded matrix"
    );
    Ok(matrix)
}

/// Parses a JSON array of rows.
pub fn parse_json(text: &str) -> Result<AdjacencyMatrix> {
    serde_json::from_str(text).map_err(|e| Error::Json(e.to_string()))
}

/// Parses a comma-separated grid.
pub fn parse_grid(text: &str) -> Result<AdjacencyMatrix> {
    let rows = text
        .lines()
        .filter(|line| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .enumerate()
        .map(|(row, line)| {
            line.split(',')
                .enumerate()
                .map(|(col, cell)| parse_cell(cell, row, col))
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    AdjacencyMatrix::from_rows(rows)
}

/// Reads one cell: blank is no edge, anything else must be a finite number.
pub fn parse_cell(text: &str, row: usize, col: usize) -> Result<Option<Weight>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<Weight>() {
        Ok(weight) if weight.is_finite() => Ok(Some(weight)),
        _ => Err(Error::InvalidWeight {
            text: trimmed.to_string(),
            row,
            col,
        }),
    }
}
