//! Spatial data structures for the tiling grid
//!
//! This module contains spatial-related functionality including:
//! - Compass directions and neighbour offsets
//! - Cell and grid state
//! - Tile sockets, rotations and the tile catalog

/// Compass directions on the grid
pub mod direction;
/// Cell and grid state management
pub mod grid;
/// Tile signatures and rotation-expanded catalog
pub mod tiles;

pub use direction::Direction;
pub use grid::{Cell, Grid};
pub use tiles::{EdgeSignature, Rotation, Socket, Tile, TileCatalog};
