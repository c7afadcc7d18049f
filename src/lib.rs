//! Wave function collapse over socket-matched square tiles
//!
//! Base tiles are described by the sockets on their four edges and expanded
//! into their distinct rotations. Generation repeatedly collapses the
//! least-uncertain cell of a square grid, narrows its neighbours to tiles
//! whose facing sockets match, and rebuilds the grid whenever a cell runs
//! out of options.

#![forbid(unsafe_code)]

/// Selection, collapse, propagation and the run controller
pub mod algorithm;
/// Command-line shell, configuration, output and error handling
pub mod io;
/// Directions, grid state and the tile catalog
pub mod spatial;

pub use algorithm::executor::{RunStats, RunStatus, StepEvent, WaveRun};
pub use io::error::{Result, WfcError};
pub use spatial::{Direction, EdgeSignature, Grid, TileCatalog};
