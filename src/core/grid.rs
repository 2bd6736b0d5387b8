//! Grid positions and the tile grid.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::direction::Direction;
use super::tile::Tile;

/// A grid coordinate.
///
/// Signed so unit-step arithmetic can land outside the grid; bounds are
/// checked at the `Grid` boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    /// Create a position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This position shifted by `(dx, dy)`.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// This position one unit step in `dir`.
    #[must_use]
    pub const fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        self.offset(dx, dy)
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The rectangular playfield, row-major.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Assemble a grid from row-major tiles.
    pub(crate) fn from_tiles(width: usize, height: usize, tiles: Vec<Tile>) -> Self {
        assert_eq!(tiles.len(), width * height, "tile count must match dimensions");
        Self { width, height, tiles }
    }

    /// Grid width in tiles.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in tiles.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `pos` lies on the grid.
    #[must_use]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    fn index(&self, pos: Pos) -> usize {
        assert!(self.in_bounds(pos), "position {pos} out of bounds");
        pos.y as usize * self.width + pos.x as usize
    }

    /// Get the tile at `pos`, or `None` out of bounds.
    #[must_use]
    pub fn get(&self, pos: Pos) -> Option<&Tile> {
        self.in_bounds(pos).then(|| &self.tiles[self.index(pos)])
    }

    /// Get the tile at `pos`.
    ///
    /// # Panics
    /// If `pos` is out of bounds. Callers validate with `in_bounds`/`get`.
    #[must_use]
    pub fn tile(&self, pos: Pos) -> &Tile {
        &self.tiles[self.index(pos)]
    }

    /// Get the tile at `pos`, mutably.
    ///
    /// # Panics
    /// If `pos` is out of bounds.
    pub fn tile_mut(&mut self, pos: Pos) -> &mut Tile {
        let index = self.index(pos);
        &mut self.tiles[index]
    }

    /// In-bounds 4-neighbors of `pos`, in north/east/south/west order.
    #[must_use]
    pub fn neighbors(&self, pos: Pos) -> SmallVec<[Pos; 4]> {
        let mut out = SmallVec::new();
        for dir in Direction::ALL {
            let next = pos.step(dir);
            if self.in_bounds(next) {
                out.push(next);
            }
        }
        out
    }

    /// Iterate over all `(Pos, &Tile)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, &Tile)> {
        let width = self.width;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, tile)| (Pos::new((i % width) as i32, (i / width) as i32), tile))
    }

    /// Iterate over all tiles, mutably. Used by presentation decay.
    pub(crate) fn tiles_mut(&mut self) -> impl Iterator<Item = &mut Tile> {
        self.tiles.iter_mut()
    }
}
