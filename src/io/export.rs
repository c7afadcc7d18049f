//! Plain-text output of generated grids and tile catalogs

use std::fmt::Write as _;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::io::configuration::UNDECIDED_GLYPH;
use crate::io::error::{Result, WfcError};
use crate::spatial::grid::{Cell, Grid};
use crate::spatial::tiles::TileCatalog;

fn glyph_width(tile_count: usize) -> usize {
    tile_count
        .saturating_sub(1)
        .to_string()
        .len()
        .max(UNDECIDED_GLYPH.len())
}

fn cell_glyph(cell: &Cell) -> String {
    cell.chosen_tile()
        .map_or_else(|| UNDECIDED_GLYPH.to_string(), |tile| tile.to_string())
}

/// Render the grid as one line per row of right-aligned tile indices
///
/// Undecided cells are drawn as [`UNDECIDED_GLYPH`].
pub fn render_grid(grid: &Grid) -> String {
    let width = glyph_width(grid.tile_count());
    let mut output = String::with_capacity(grid.len() * (width + 1));

    for row in 0..grid.dimension() {
        let line = grid
            .row(row)
            .map(|cell| format!("{:>width$}", cell_glyph(cell)))
            .collect::<Vec<_>>()
            .join(" ");
        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// List every catalog tile as `id source rotation signature`
pub fn render_catalog(catalog: &TileCatalog) -> String {
    let mut output = String::new();
    for tile in catalog.tiles() {
        // Writing to a String cannot fail
        let _ = writeln!(
            output,
            "{:>3} {:>3} {:>3} {}",
            tile.id(),
            tile.source(),
            tile.rotation().degrees(),
            tile.edges()
        );
    }
    output
}

/// Write the rendered grid to a file, creating parent directories
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written
pub fn export_grid(grid: &Grid, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| WfcError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    std::fs::write(output_path, render_grid(grid)).map_err(|e| WfcError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "write grid",
        source: e,
    })
}

/// Write rendered text to an output stream such as stdout
///
/// `label` names the stream in the error, since it has no path.
///
/// # Errors
///
/// Returns an error if writing or flushing the stream fails
pub fn write_stream(writer: &mut impl Write, label: &str, text: &str) -> Result<()> {
    writer
        .write_all(text.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| WfcError::FileSystem {
            path: PathBuf::from(label),
            operation: "write output",
            source: e,
        })
}
