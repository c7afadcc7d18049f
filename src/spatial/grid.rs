//! Fixed-size square grid of cells for wave function collapse
//!
//! Each cell tracks the catalog tiles it may still become. Positions are
//! `[row, col]` with row 0 on the northern edge; the grid does not wrap, so
//! edge cells have fewer than four neighbours.

use ndarray::Array2;

use crate::algorithm::bitset::TileBitset;
use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, invalid_configuration};
use crate::spatial::direction::Direction;

/// Per-position state: remaining tile options and whether it was collapsed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    position: [usize; 2],
    options: TileBitset,
    collapsed: bool,
}

impl Cell {
    /// Create an undecided cell where every tile is still possible
    pub fn new(position: [usize; 2], tile_count: usize) -> Self {
        Self {
            position,
            options: TileBitset::all(tile_count),
            collapsed: false,
        }
    }

    /// Grid coordinates as `[row, col]`
    pub const fn position(&self) -> [usize; 2] {
        self.position
    }

    /// Row index
    pub const fn row(&self) -> usize {
        self.position[0]
    }

    /// Column index
    pub const fn col(&self) -> usize {
        self.position[1]
    }

    /// Tiles still consistent with every constraint seen so far
    pub const fn options(&self) -> &TileBitset {
        &self.options
    }

    /// Number of remaining options, the cell's entropy
    pub fn option_count(&self) -> usize {
        self.options.count()
    }

    /// Whether the cell has been explicitly collapsed
    pub const fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Whether no tile fits here any more
    pub fn is_contradicted(&self) -> bool {
        self.options.is_empty()
    }

    /// The tile this cell was collapsed to
    ///
    /// `None` until the cell is collapsed, even when propagation has already
    /// narrowed it to a single option.
    pub fn chosen_tile(&self) -> Option<usize> {
        if self.collapsed {
            self.options.nth(0)
        } else {
            None
        }
    }

    /// Narrow the options to those also present in `allowed`
    ///
    /// Collapsed cells are left untouched. Returns how many options were
    /// removed.
    pub fn restrict(&mut self, allowed: &TileBitset) -> usize {
        if self.collapsed {
            return 0;
        }
        let before = self.options.count();
        self.options.intersect_with(allowed);
        before - self.options.count()
    }

    /// Fix the cell to a single tile
    ///
    /// Ignored if the cell is already collapsed or `tile` is not among its
    /// options. Returns whether the cell changed.
    pub fn collapse_to(&mut self, tile: usize) -> bool {
        if self.collapsed || !self.options.contains(tile) {
            return false;
        }
        self.options = TileBitset::only(self.options.capacity(), tile);
        self.collapsed = true;
        true
    }
}

/// Square D×D collection of cells addressed by `[row, col]`
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Array2<Cell>,
    dimension: usize,
    tile_count: usize,
}

impl Grid {
    /// Allocate a grid where every cell may hold any of `tile_count` tiles
    ///
    /// # Errors
    ///
    /// Returns an error if `dimension` is zero or above
    /// [`MAX_GRID_DIMENSION`], or if `tile_count` is zero
    pub fn new(dimension: usize, tile_count: usize) -> Result<Self> {
        if dimension == 0 || dimension > MAX_GRID_DIMENSION {
            return Err(invalid_configuration(
                "dimension",
                &dimension,
                &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
            ));
        }
        if tile_count == 0 {
            return Err(invalid_configuration(
                "tile_count",
                &tile_count,
                &"a grid needs at least one tile option",
            ));
        }

        Ok(Self {
            cells: Self::fresh_cells(dimension, tile_count),
            dimension,
            tile_count,
        })
    }

    fn fresh_cells(dimension: usize, tile_count: usize) -> Array2<Cell> {
        Array2::from_shape_fn((dimension, dimension), |(row, col)| {
            Cell::new([row, col], tile_count)
        })
    }

    /// Replace every cell with an undecided one holding all options
    pub fn reset(&mut self) {
        self.cells = Self::fresh_cells(self.dimension, self.tile_count);
    }

    /// Side length of the grid
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of tiles each fresh cell may hold
    pub const fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// Total number of cells
    pub const fn len(&self) -> usize {
        self.dimension * self.dimension
    }

    /// Always false; a grid has at least one cell
    pub const fn is_empty(&self) -> bool {
        self.dimension == 0
    }

    /// Cell at `[row, col]`, if inside the grid
    pub fn cell(&self, position: [usize; 2]) -> Option<&Cell> {
        self.cells.get(position)
    }

    /// Mutable cell at `[row, col]`, if inside the grid
    pub fn cell_mut(&mut self, position: [usize; 2]) -> Option<&mut Cell> {
        self.cells.get_mut(position)
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Cells of one row, west to east
    pub fn row(&self, row: usize) -> impl Iterator<Item = &Cell> + '_ {
        (0..self.dimension).filter_map(move |col| self.cell([row, col]))
    }

    /// Row-major linear index of a position
    pub fn linear_index(&self, position: [usize; 2]) -> Option<usize> {
        let [row, col] = position;
        (row < self.dimension && col < self.dimension).then(|| row * self.dimension + col)
    }

    /// Position of a row-major linear index
    pub fn position_of(&self, index: usize) -> Option<[usize; 2]> {
        (index < self.len()).then(|| [index / self.dimension, index % self.dimension])
    }

    /// Position one step from `position` in `direction`
    ///
    /// Returns `None` when that step leaves the grid.
    pub fn neighbor(&self, position: [usize; 2], direction: Direction) -> Option<[usize; 2]> {
        let [row, col] = position;
        if row >= self.dimension || col >= self.dimension {
            return None;
        }
        let [d_row, d_col] = direction.offset();
        let next_row = row.checked_add_signed(d_row)?;
        let next_col = col.checked_add_signed(d_col)?;
        (next_row < self.dimension && next_col < self.dimension).then_some([next_row, next_col])
    }

    /// Whether every cell has been collapsed
    pub fn all_collapsed(&self) -> bool {
        self.cells.iter().all(Cell::is_collapsed)
    }

    /// Number of collapsed cells
    pub fn collapsed_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_collapsed()).count()
    }
}
