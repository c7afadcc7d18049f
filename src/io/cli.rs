//! Command-line interface for generating a tiled grid from edge signatures

use crate::algorithm::executor::WaveRun;
use crate::io::configuration::{
    DEFAULT_DIMENSION, DEFAULT_LOG_LEVEL, DEFAULT_MAX_STEPS, DEFAULT_SEED, DEFAULT_TILESET,
};
use crate::io::error::Result;
use crate::io::export::{export_grid, render_catalog, render_grid, write_stream};
use crate::io::progress::ProgressReporter;
use crate::spatial::grid::Grid;
use crate::spatial::tiles::{EdgeSignature, TileCatalog};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

const STDOUT_LABEL: &str = "<stdout>";

#[derive(Parser, Debug)]
#[command(name = "wavetile")]
#[command(
    author,
    version,
    about = "Generate a tiled grid by wave function collapse over edge sockets"
)]
/// Command-line arguments for the tiling tool
pub struct Cli {
    /// Side length of the square grid
    #[arg(short, long, default_value_t = DEFAULT_DIMENSION)]
    pub dimension: usize,

    /// Base tile as NORTH,EAST,SOUTH,WEST sockets; repeat for more tiles
    #[arg(short = 't', long = "tile", value_name = "N,E,S,W")]
    pub tiles: Vec<EdgeSignature>,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Steps to attempt before giving up
    #[arg(short, long, default_value_t = DEFAULT_MAX_STEPS)]
    pub max_steps: usize,

    /// Write the grid to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the rotation-expanded catalog before generating
    #[arg(long)]
    pub list_tiles: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log filter directive (trace, debug, info, warn, error)
    #[arg(short, long, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Builds the catalog, drives a run to completion and writes the result
pub struct Generator {
    cli: Cli,
}

impl Generator {
    /// Create a generator with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Base tiles from the command line, or the default tileset
    ///
    /// # Errors
    ///
    /// Returns an error if the default tileset contains an invalid socket
    pub fn base_tiles(&self) -> Result<Vec<EdgeSignature>> {
        if !self.cli.tiles.is_empty() {
            return Ok(self.cli.tiles.clone());
        }
        DEFAULT_TILESET
            .iter()
            .map(|codes| EdgeSignature::from_codes(*codes))
            .collect()
    }

    /// Build the catalog described by the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the tileset is empty or invalid
    pub fn catalog(&self) -> Result<TileCatalog> {
        TileCatalog::build(&self.base_tiles()?)
    }

    /// Run generation until every cell is collapsed
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the step limit is
    /// reached first
    pub fn generate(&self, catalog: &TileCatalog) -> Result<Grid> {
        let mut run = WaveRun::new(self.cli.dimension, catalog, self.cli.seed)?;

        let cells = run.grid().len();
        let progress = if self.cli.should_show_progress() {
            ProgressReporter::new(cells)
        } else {
            ProgressReporter::hidden(cells)
        };

        let outcome = run.run_until_done(self.cli.max_steps, |run| progress.update(run));
        progress.finish();
        outcome?;

        let stats = run.stats();
        info!(
            steps = stats.steps,
            restarts = stats.restarts,
            options_removed = stats.options_removed,
            "grid complete"
        );
        Ok(run.into_grid())
    }

    /// Generate and write output according to the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if catalog building, generation or writing fails
    pub fn process(&self) -> Result<()> {
        let catalog = self.catalog()?;

        if self.cli.list_tiles {
            write_stream(&mut std::io::stdout().lock(), STDOUT_LABEL, &render_catalog(&catalog))?;
        }

        let grid = self.generate(&catalog)?;

        match &self.cli.output {
            Some(path) => export_grid(&grid, path),
            None => write_stream(&mut std::io::stdout().lock(), STDOUT_LABEL, &render_grid(&grid)),
        }
    }
}
