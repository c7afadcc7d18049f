//! Single-hop constraint propagation from a freshly collapsed cell
//!
//! Only the four direct neighbours are narrowed. A neighbour left with a
//! single option stays undecided until the selector picks it, and nothing
//! cascades further; cells that end up empty are caught by the run
//! controller when selected.

use crate::spatial::direction::Direction;
use crate::spatial::grid::{Cell, Grid};
use crate::spatial::tiles::TileCatalog;

/// What one propagation pass changed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Propagation {
    /// Undecided neighbours that were filtered
    pub neighbors_visited: usize,
    /// Options removed across all neighbours
    pub options_removed: usize,
    /// Neighbours left with no options
    pub contradictions: usize,
}

/// Narrow the neighbours of the collapsed cell at `position`
///
/// Each existing, undecided neighbour keeps only the options that fit the
/// collapsed cell's tile across their shared edge. Does nothing if the cell
/// at `position` is missing or not collapsed.
pub fn propagate(grid: &mut Grid, catalog: &TileCatalog, position: [usize; 2]) -> Propagation {
    let mut summary = Propagation::default();

    let Some(tile) = grid.cell(position).and_then(Cell::chosen_tile) else {
        return summary;
    };

    for direction in Direction::ALL {
        let Some(neighbor_position) = grid.neighbor(position, direction) else {
            continue;
        };
        let Some(allowed) = catalog.compatible_with(tile, direction) else {
            continue;
        };
        let Some(neighbor) = grid.cell_mut(neighbor_position) else {
            continue;
        };
        if neighbor.is_collapsed() {
            continue;
        }

        summary.neighbors_visited += 1;
        summary.options_removed += neighbor.restrict(allowed);
        if neighbor.is_contradicted() {
            summary.contradictions += 1;
        }
    }

    summary
}
