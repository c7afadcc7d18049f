//! Compass directions on the square grid
//!
//! Row 0 is the northern edge and column 0 the western edge, so North
//! decreases the row and East increases the column.

use std::fmt;

/// One of the four sides of a cell or tile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 0
    North,
    /// Towards the last column
    East,
    /// Towards the last row
    South,
    /// Towards column 0
    West,
}

impl Direction {
    /// All directions in signature order
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The side facing this one across a shared edge
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Next direction a quarter turn counter-clockwise
    pub const fn counter_clockwise(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::East => Self::North,
            Self::South => Self::East,
            Self::West => Self::South,
        }
    }

    /// Position of this side within an edge signature
    pub const fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    /// Row and column step taken when moving one cell this way
    pub const fn offset(self) -> [isize; 2] {
        match self {
            Self::North => [-1, 0],
            Self::East => [0, 1],
            Self::South => [1, 0],
            Self::West => [0, -1],
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        f.write_str(name)
    }
}
