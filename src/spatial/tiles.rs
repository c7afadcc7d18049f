//! Tile sockets, edge signatures and the rotation-expanded catalog
//!
//! Each tile exposes one socket per side, read clockwise around the tile.
//! Neighbouring tiles read a shared edge in opposite directions, so two
//! sockets match when one equals the character reversal of the other.
//! The catalog expands every base tile into its distinct quarter-turn
//! rotations and precomputes, per tile and side, the set of tiles that may
//! sit there.

use std::fmt;
use std::str::FromStr;

use crate::algorithm::bitset::TileBitset;
use crate::io::configuration::SIGNATURE_SEPARATOR;
use crate::io::error::{Result, invalid_configuration, invalid_signature};
use crate::spatial::direction::Direction;

/// Symbolic code on one edge of a tile, such as `"ABA"`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Socket(String);

impl Socket {
    /// Create a socket from its code
    ///
    /// # Errors
    ///
    /// Returns an error if the code is empty or contains whitespace or the
    /// signature separator
    pub fn new(code: &str) -> Result<Self> {
        if code.is_empty() {
            return Err(invalid_signature(code, &"socket code is empty"));
        }
        if code
            .chars()
            .any(|c| c.is_whitespace() || c == SIGNATURE_SEPARATOR)
        {
            return Err(invalid_signature(
                code,
                &"socket code contains whitespace or a separator",
            ));
        }
        Ok(Self(code.to_string()))
    }

    /// The socket code
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The same code read from the opposite end
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self(self.0.chars().rev().collect())
    }

    /// Whether a neighbour exposing `other` back across the edge fits this socket
    pub fn matches(&self, other: &Self) -> bool {
        self.0.chars().eq(other.0.chars().rev())
    }
}

impl fmt::Display for Socket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Socket {
    type Err = crate::io::error::WfcError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.trim())
    }
}

/// Quarter-turn rotation applied to a base tile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// Unrotated base tile
    R0,
    /// One clockwise quarter turn
    R90,
    /// Half turn
    R180,
    /// Three clockwise quarter turns
    R270,
}

impl Rotation {
    /// All rotations in generation order
    pub const ALL: [Self; 4] = [Self::R0, Self::R90, Self::R180, Self::R270];

    /// Number of clockwise quarter turns
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Self::R0 => 0,
            Self::R90 => 1,
            Self::R180 => 2,
            Self::R270 => 3,
        }
    }

    /// Rotation angle in degrees
    pub const fn degrees(self) -> u16 {
        self.quarter_turns() as u16 * 90
    }
}

/// Sockets on the four sides of a tile
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EdgeSignature {
    north: Socket,
    east: Socket,
    south: Socket,
    west: Socket,
}

impl EdgeSignature {
    /// Create a signature from sockets listed North, East, South, West
    pub const fn new(north: Socket, east: Socket, south: Socket, west: Socket) -> Self {
        Self {
            north,
            east,
            south,
            west,
        }
    }

    /// Create a signature from socket codes listed North, East, South, West
    ///
    /// # Errors
    ///
    /// Returns an error if any code is not a valid socket
    pub fn from_codes(codes: [&str; 4]) -> Result<Self> {
        let [north, east, south, west] = codes;
        Ok(Self::new(
            Socket::new(north)?,
            Socket::new(east)?,
            Socket::new(south)?,
            Socket::new(west)?,
        ))
    }

    fn from_fn(mut socket_for: impl FnMut(Direction) -> Socket) -> Self {
        Self::new(
            socket_for(Direction::North),
            socket_for(Direction::East),
            socket_for(Direction::South),
            socket_for(Direction::West),
        )
    }

    /// Socket exposed on the given side
    pub const fn socket(&self, direction: Direction) -> &Socket {
        match direction {
            Direction::North => &self.north,
            Direction::East => &self.east,
            Direction::South => &self.south,
            Direction::West => &self.west,
        }
    }

    /// Signature of the tile turned clockwise by `rotation`
    ///
    /// Sockets move with their side: after a quarter turn the western socket
    /// faces north.
    #[must_use]
    pub fn rotated(&self, rotation: Rotation) -> Self {
        Self::from_fn(|direction| {
            let mut source = direction;
            for _ in 0..rotation.quarter_turns() {
                source = source.counter_clockwise();
            }
            self.socket(source).clone()
        })
    }

    /// Whether a tile with signature `other` may sit on side `direction` of this one
    pub fn accepts(&self, direction: Direction, other: &Self) -> bool {
        self.socket(direction)
            .matches(other.socket(direction.opposite()))
    }
}

impl fmt::Display for EdgeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{SIGNATURE_SEPARATOR}{}{SIGNATURE_SEPARATOR}{}{SIGNATURE_SEPARATOR}{}",
            self.north, self.east, self.south, self.west
        )
    }
}

impl FromStr for EdgeSignature {
    type Err = crate::io::error::WfcError;

    /// Parse four separator-delimited sockets, e.g. `ABA,ABA,AAA,ABA`
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(SIGNATURE_SEPARATOR).map(str::trim).collect();
        match parts.as_slice() {
            &[north, east, south, west] => Self::from_codes([north, east, south, west])
                .map_err(|err| invalid_signature(s, &err)),
            _ => Err(invalid_signature(
                s,
                &format!("expected 4 sockets, found {}", parts.len()),
            )),
        }
    }
}

/// A catalog entry: one orientation of one base tile
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    id: usize,
    source: usize,
    rotation: Rotation,
    edges: EdgeSignature,
}

impl Tile {
    /// Index of this tile in the catalog
    pub const fn id(&self) -> usize {
        self.id
    }

    /// Index of the base tile this entry was derived from
    pub const fn source(&self) -> usize {
        self.source
    }

    /// Rotation applied to the base tile
    ///
    /// Together with [`Tile::source`] this identifies the artwork to draw.
    pub const fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Sockets on each side
    pub const fn edges(&self) -> &EdgeSignature {
        &self.edges
    }
}

/// Immutable, ordered set of tile orientations with adjacency rules
#[derive(Clone, Debug)]
pub struct TileCatalog {
    tiles: Vec<Tile>,
    base_count: usize,
    /// Per tile, per side: tiles allowed to sit on that side
    adjacency: Vec<[TileBitset; 4]>,
}

impl TileCatalog {
    /// Build a catalog for generation from base tile signatures
    ///
    /// # Errors
    ///
    /// Returns an error if no base tiles are given
    pub fn build(base_tiles: &[EdgeSignature]) -> Result<Self> {
        if base_tiles.is_empty() {
            return Err(invalid_configuration(
                "tileset",
                &"[]",
                &"at least one base tile is required",
            ));
        }
        Ok(Self::expand(base_tiles))
    }

    /// Expand base tiles into their distinct rotations
    ///
    /// Each base tile is followed by those of its 90°, 180° and 270°
    /// rotations whose signature differs from every orientation already
    /// produced for it. Empty input gives an empty catalog.
    pub fn expand(base_tiles: &[EdgeSignature]) -> Self {
        let mut tiles: Vec<Tile> = Vec::with_capacity(base_tiles.len() * Rotation::ALL.len());

        for (source, edges) in base_tiles.iter().enumerate() {
            let family_start = tiles.len();
            for rotation in Rotation::ALL {
                let rotated = edges.rotated(rotation);
                let duplicate = tiles
                    .get(family_start..)
                    .is_some_and(|family| family.iter().any(|tile| tile.edges == rotated));
                if duplicate {
                    continue;
                }
                tiles.push(Tile {
                    id: tiles.len(),
                    source,
                    rotation,
                    edges: rotated,
                });
            }
        }

        let adjacency = Self::build_adjacency(&tiles);

        Self {
            tiles,
            base_count: base_tiles.len(),
            adjacency,
        }
    }

    fn build_adjacency(tiles: &[Tile]) -> Vec<[TileBitset; 4]> {
        let count = tiles.len();
        tiles
            .iter()
            .map(|tile| {
                Direction::ALL.map(|direction| {
                    TileBitset::from_indices(
                        tiles
                            .iter()
                            .filter(|other| tile.edges.accepts(direction, &other.edges))
                            .map(Tile::id),
                        count,
                    )
                })
            })
            .collect()
    }

    /// Number of tiles after rotation expansion
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the catalog holds no tiles
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of base tiles the catalog was expanded from
    pub const fn base_count(&self) -> usize {
        self.base_count
    }

    /// All tiles in catalog order
    pub const fn tiles(&self) -> &[Tile] {
        self.tiles.as_slice()
    }

    /// Look up a tile by index
    pub fn tile(&self, id: usize) -> Option<&Tile> {
        self.tiles.get(id)
    }

    /// Orientations derived from one base tile, in rotation order
    pub fn variants_of(&self, source: usize) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.iter().filter(move |tile| tile.source == source)
    }

    /// Tiles allowed on side `direction` of tile `id`
    pub fn compatible_with(&self, id: usize, direction: Direction) -> Option<&TileBitset> {
        self.adjacency
            .get(id)
            .and_then(|sides| sides.get(direction.index()))
    }

    /// Whether tile `b` may sit on side `direction` of tile `a`
    pub fn compatible(&self, a: usize, direction: Direction, b: usize) -> bool {
        self.compatible_with(a, direction)
            .is_some_and(|allowed| allowed.contains(b))
    }
}
