/// Command-line driver for catalog building and generation
pub mod cli;
/// Generation constants and defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Text rendering of grids and catalogs
pub mod export;
/// Terminal progress display
pub mod progress;
