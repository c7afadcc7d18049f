//! Minimum-entropy cell selection
//!
//! The next cell to collapse is drawn uniformly from the undecided cells with
//! the fewest remaining options. A random tie-break keeps patterns from
//! growing in a fixed scan order.

use rand::Rng;
use std::cmp::Ordering;

use crate::spatial::grid::Grid;

/// Positions of the undecided cells sharing the lowest option count
///
/// Empty when every cell is collapsed. Cells with zero options count as the
/// lowest possible entropy, so a contradiction is always selected first.
pub fn minimum_entropy_frontier(grid: &Grid) -> Vec<[usize; 2]> {
    let mut frontier = Vec::new();
    let mut minimum = usize::MAX;

    for cell in grid.cells().filter(|cell| !cell.is_collapsed()) {
        let count = cell.option_count();
        match count.cmp(&minimum) {
            Ordering::Less => {
                minimum = count;
                frontier.clear();
                frontier.push(cell.position());
            }
            Ordering::Equal => frontier.push(cell.position()),
            Ordering::Greater => {}
        }
    }

    frontier
}

/// Pick the next cell to collapse
///
/// Returns `None` once every cell is collapsed, signalling completion.
pub fn select_next(grid: &Grid, rng: &mut impl Rng) -> Option<[usize; 2]> {
    let frontier = minimum_entropy_frontier(grid);
    if frontier.is_empty() {
        return None;
    }
    let pick = rng.random_range(0..frontier.len());
    frontier.get(pick).copied()
}
