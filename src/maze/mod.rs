//! Maze generation: archetype pool, thresholds, tile assignment, placement.
//!
//! Generation spends the session's randomness in a fixed order — pool
//! shuffle, threshold rolls, then per-tile archetype draws in row-major
//! order — so a seed reproduces the exact same layout.

use crate::core::config::{Thresholds, MIN_GRID_SIDE};
use crate::core::grid::{Grid, Pos};
use crate::core::rng::GameRng;
use crate::core::tile::{Archetype, Tile, TileState};

/// Number of archetypes in play per session, drawn from the full set of 5.
pub const POOL_SIZE: usize = 4;

/// Everything the generator produces for a fresh session.
#[derive(Clone, Debug)]
pub struct MazeLayout {
    /// The populated playfield.
    pub grid: Grid,
    /// This session's archetype pool.
    pub pool: [Archetype; POOL_SIZE],
    /// This session's rule parameters.
    pub thresholds: Thresholds,
    /// Player start cell.
    pub player: Pos,
    /// Exit cell.
    pub exit: Pos,
}

/// Generate a maze layout.
///
/// Every cell draws its archetype uniformly from the session pool and starts
/// neutral; the start cell is marked safe and the exit cell marked exit, so
/// both begin clear of walls.
///
/// # Panics
/// If either dimension is below [`MIN_GRID_SIDE`] — anything smaller cannot
/// hold distinct start and exit cells off the border.
#[must_use]
pub fn generate(rng: &mut GameRng, width: usize, height: usize) -> MazeLayout {
    assert!(
        width >= MIN_GRID_SIDE && height >= MIN_GRID_SIDE,
        "grid must be at least {MIN_GRID_SIDE}x{MIN_GRID_SIDE}"
    );

    let mut kinds = Archetype::ALL;
    rng.shuffle(&mut kinds);
    let pool = [kinds[0], kinds[1], kinds[2], kinds[3]];

    let thresholds = Thresholds::roll(rng);

    let tiles = (0..width * height)
        .map(|_| Tile::new(pool[rng.gen_range_usize(0..POOL_SIZE)]))
        .collect();
    let mut grid = Grid::from_tiles(width, height, tiles);

    let player = Pos::new(1, 1);
    let exit = Pos::new(width as i32 - 2, height as i32 - 2);
    grid.tile_mut(player).state = TileState::Safe;
    grid.tile_mut(exit).state = TileState::Exit;

    MazeLayout {
        grid,
        pool,
        thresholds,
        player,
        exit,
    }
}
