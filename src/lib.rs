//! # crystal-maze
//!
//! Core engine for a tile-hardening maze puzzle: the player crosses a grid
//! whose tiles crystallize into walls according to per-tile behavioral
//! rules, racing to the exit before the path seals.
//!
//! ## Design Principles
//!
//! 1. **Explicit sessions**: All state lives in a [`Session`] passed into
//!    every operation. No module-level singleton, no hidden globals.
//!
//! 2. **Deterministic**: A session is fully determined by its seed and move
//!    sequence. Generation randomness comes from a seedable ChaCha8 stream
//!    that is identical across runs and platforms.
//!
//! 3. **Presentation-free**: Rendering, input and timers live in the shell.
//!    The shell calls [`Session::attempt_move`] on input and
//!    [`Session::tick`] on its animation cadence; the two touch disjoint
//!    state, so the core runs under a synchronous test harness unchanged.
//!
//! ## Modules
//!
//! - `core`: RNG, grid, tiles, history windows, configuration, messages
//! - `maze`: grid generation, archetype pool and threshold rolls
//! - `rules`: the five tile-hardening predicates
//! - `liveness`: exit reachability and entrapment checks
//! - `session`: the session object and the move processor

pub mod core;
pub mod liveness;
pub mod maze;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Archetype, Direction, Flash, GameRng, GameRngState, Grid, History, Pos, StatusMessage,
    Thresholds, Tile, TileState, GRID_HEIGHT, GRID_WIDTH,
};

pub use crate::liveness::{exit_reachable, is_entrapped};
pub use crate::maze::{MazeLayout, POOL_SIZE};
pub use crate::rules::{should_harden, RuleContext};
pub use crate::session::{MoveOutcome, Session};
