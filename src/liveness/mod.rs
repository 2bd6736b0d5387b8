//! Maze liveness: exit reachability and local entrapment.
//!
//! Both checks are pure reads over the grid. The move processor runs them
//! after every accepted, non-winning move; their results only set the status
//! message and never end the game on their own.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::core::grid::{Grid, Pos};

/// Breadth-first search from `from` to `exit` over non-wall tiles.
///
/// 4-directional adjacency, grid-bounded.
#[must_use]
pub fn exit_reachable(grid: &Grid, from: Pos, exit: Pos) -> bool {
    let mut visited: FxHashSet<Pos> = FxHashSet::default();
    let mut queue = VecDeque::new();
    visited.insert(from);
    queue.push_back(from);

    while let Some(pos) = queue.pop_front() {
        if pos == exit {
            return true;
        }
        for next in grid.neighbors(pos) {
            if grid.tile(next).state.is_passable() && visited.insert(next) {
                queue.push_back(next);
            }
        }
    }
    false
}

/// True when every neighbor of `pos` is a wall or off-grid.
#[must_use]
pub fn is_entrapped(grid: &Grid, pos: Pos) -> bool {
    grid.neighbors(pos)
        .iter()
        .all(|&next| !grid.tile(next).state.is_passable())
}
