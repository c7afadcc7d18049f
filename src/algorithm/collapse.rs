use rand::Rng;

use crate::spatial::grid::Cell;

/// Fix a cell to one of its remaining options, chosen uniformly at random
///
/// Returns the chosen tile. A collapsed cell or one without options is left
/// as it is and yields `None`; the caller decides how to treat the
/// contradiction.
pub fn collapse(cell: &mut Cell, rng: &mut impl Rng) -> Option<usize> {
    if cell.is_collapsed() || cell.is_contradicted() {
        return None;
    }
    let choice = rng.random_range(0..cell.option_count());
    let tile = cell.options().nth(choice)?;
    cell.collapse_to(tile).then_some(tile)
}
