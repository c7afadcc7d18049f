use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info, trace};

use crate::{
    algorithm::collapse::collapse,
    algorithm::propagation::propagate,
    algorithm::selection::select_next,
    io::error::{Result, WfcError, invalid_configuration},
    spatial::grid::{Cell, Grid},
    spatial::tiles::TileCatalog,
};

/// Externally visible state of a run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunStatus {
    /// Some cells are still undecided
    Running,
    /// Every cell is collapsed; further steps do nothing
    Done,
}

/// What the most recent step did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepEvent {
    /// A cell was fixed to a tile and its neighbours narrowed
    Collapsed {
        /// Grid position of the collapsed cell
        position: [usize; 2],
        /// Catalog index of the chosen tile
        tile: usize,
    },
    /// The selected cell had no options left and the grid was rebuilt
    Restarted {
        /// Grid position of the contradicted cell
        position: [usize; 2],
        /// Restarts so far in this run, including this one
        restart: usize,
    },
    /// Selection found no undecided cells
    ///
    /// A fallback for a complete grid that was not marked done. `step`
    /// marks the run done on the same call that collapses the last cell,
    /// which reports `Collapsed`, so normal runs never end with this event.
    Finished,
}

/// Counters accumulated over a run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Steps that did work (steps after completion are not counted)
    pub steps: usize,
    /// Cells collapsed, including those discarded by restarts
    pub collapses: usize,
    /// Grid resets caused by contradictions
    pub restarts: usize,
    /// Options removed by propagation
    pub options_removed: usize,
    /// Runs started on this controller, the first included
    pub runs: usize,
}

/// Step-driven wave function collapse over a shared tile catalog
///
/// Each [`WaveRun::step`] selects the undecided cell with the fewest
/// options, collapses it and narrows its direct neighbours. A selected cell
/// with no options means the run has contradicted itself; the whole grid is
/// then rebuilt and generation continues from scratch. There is no
/// backtracking, so a pathological tileset may never finish.
pub struct WaveRun<'c> {
    catalog: &'c TileCatalog,
    grid: Grid,
    rng: StdRng,
    status: RunStatus,
    stats: RunStats,
    last_event: Option<StepEvent>,
}

impl<'c> WaveRun<'c> {
    /// Start a run on a fresh `dimension`×`dimension` grid
    ///
    /// The seed makes the run reproducible for a given catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog is empty or the dimension is zero or
    /// too large
    pub fn new(dimension: usize, catalog: &'c TileCatalog, seed: u64) -> Result<Self> {
        if catalog.is_empty() {
            return Err(invalid_configuration(
                "catalog",
                &catalog.len(),
                &"a run needs at least one tile",
            ));
        }
        let grid = Grid::new(dimension, catalog.len())?;

        info!(dimension, tiles = catalog.len(), seed, "starting run");

        Ok(Self {
            catalog,
            grid,
            rng: StdRng::seed_from_u64(seed),
            status: RunStatus::Running,
            stats: RunStats {
                runs: 1,
                ..RunStats::default()
            },
            last_event: None,
        })
    }

    /// Grid being generated
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Take the grid, ending the run
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Catalog the run draws tiles from
    pub const fn catalog(&self) -> &'c TileCatalog {
        self.catalog
    }

    /// Current status
    pub const fn status(&self) -> RunStatus {
        self.status
    }

    /// Counters for the current run
    pub const fn stats(&self) -> RunStats {
        self.stats
    }

    /// What the most recent step did, if any step has run
    pub const fn last_event(&self) -> Option<StepEvent> {
        self.last_event
    }

    /// Advance generation by one cell
    ///
    /// Returns [`RunStatus::Done`] once every cell is collapsed. Calling
    /// this after completion changes nothing. A contradiction is resolved
    /// within the same call by resetting the grid, and the run stays
    /// [`RunStatus::Running`].
    pub fn step(&mut self) -> RunStatus {
        if self.status == RunStatus::Done {
            return RunStatus::Done;
        }
        self.stats.steps += 1;

        // Unreachable while completion is detected right after each collapse
        let Some(position) = select_next(&self.grid, &mut self.rng) else {
            self.last_event = Some(StepEvent::Finished);
            self.finish();
            return self.status;
        };

        let contradicted = self
            .grid
            .cell(position)
            .is_none_or(Cell::is_contradicted);
        if contradicted {
            self.restart_after_contradiction(position);
            return self.status;
        }

        let chosen = self
            .grid
            .cell_mut(position)
            .and_then(|cell| collapse(cell, &mut self.rng));
        if let Some(tile) = chosen {
            let summary = propagate(&mut self.grid, self.catalog, position);
            self.stats.collapses += 1;
            self.stats.options_removed += summary.options_removed;
            self.last_event = Some(StepEvent::Collapsed { position, tile });

            let [row, col] = position;
            trace!(
                row,
                col,
                tile,
                narrowed = summary.neighbors_visited,
                emptied = summary.contradictions,
                "collapsed cell"
            );
        }

        if self.grid.all_collapsed() {
            self.finish();
        }
        self.status
    }

    /// Step until done or until `max_steps` steps have been taken
    pub fn run(&mut self, max_steps: usize) -> RunStatus {
        for _ in 0..max_steps {
            if self.step() == RunStatus::Done {
                break;
            }
        }
        self.status
    }

    /// Step until done, calling `on_step` after every step
    ///
    /// # Errors
    ///
    /// Returns [`WfcError::StepLimitReached`] if the grid is still incomplete
    /// after `max_steps` steps
    pub fn run_until_done(
        &mut self,
        max_steps: usize,
        mut on_step: impl FnMut(&Self),
    ) -> Result<()> {
        for _ in 0..max_steps {
            let status = self.step();
            on_step(self);
            if status == RunStatus::Done {
                return Ok(());
            }
        }
        if self.status == RunStatus::Done {
            return Ok(());
        }
        Err(WfcError::StepLimitReached {
            steps: self.stats.steps,
            restarts: self.stats.restarts,
        })
    }

    /// Discard the grid and begin a new run with the same catalog
    ///
    /// Counters are cleared except for the number of runs started.
    pub fn restart(&mut self) {
        self.grid.reset();
        self.status = RunStatus::Running;
        self.stats = RunStats {
            runs: self.stats.runs + 1,
            ..RunStats::default()
        };
        self.last_event = None;
        info!(run = self.stats.runs, "restarting run");
    }

    fn restart_after_contradiction(&mut self, position: [usize; 2]) {
        self.grid.reset();
        self.stats.restarts += 1;
        self.last_event = Some(StepEvent::Restarted {
            position,
            restart: self.stats.restarts,
        });

        let [row, col] = position;
        debug!(
            row,
            col,
            restarts = self.stats.restarts,
            step = self.stats.steps,
            "contradiction, resetting grid"
        );
    }

    fn finish(&mut self) {
        self.status = RunStatus::Done;
        info!(
            steps = self.stats.steps,
            restarts = self.stats.restarts,
            "generation complete"
        );
    }
}
