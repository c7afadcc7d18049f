//! Generation constants and runtime configuration defaults

/// Side length of the square grid when none is given
pub const DEFAULT_DIMENSION: usize = 10;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Restart-on-contradiction has no termination guarantee
/// Maximum steps before a bounded run gives up
pub const DEFAULT_MAX_STEPS: usize = 1_000_000;

/// Base tileset used when no tiles are supplied, as North, East, South, West sockets
///
/// A blank tile plus a three-armed junction; the junction expands to four
/// rotations, giving a five tile catalog.
pub const DEFAULT_TILESET: [[&str; 4]; 2] = [
    ["AAA", "AAA", "AAA", "AAA"],
    ["ABA", "ABA", "AAA", "ABA"],
];

/// Separator between sockets in a textual edge signature
pub const SIGNATURE_SEPARATOR: char = ',';

/// Text drawn for a cell that has not been collapsed yet
pub const UNDECIDED_GLYPH: &str = ".";

/// Default filter directive for the log subscriber
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Steps between progress bar redraws
pub const PROGRESS_REFRESH_STEPS: usize = 16;
