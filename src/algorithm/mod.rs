/// Fixed-capacity tile option sets
pub mod bitset;
/// Fixing a cell to a single random tile
pub mod collapse;
/// Run controller driving select, collapse and propagate
pub mod executor;
/// Single-hop neighbour filtering after a collapse
pub mod propagation;
/// Minimum-entropy cell selection
pub mod selection;
