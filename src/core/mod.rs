//! Core building blocks: RNG, grid, tiles, histories, configuration, messages.
//!
//! Everything here is a plain value type with no game-flow logic; the move
//! processor in `session` and the predicates in `rules` are built on top.

pub mod config;
pub mod direction;
pub mod grid;
pub mod history;
pub mod message;
pub mod rng;
pub mod tile;

pub use config::{Thresholds, GRID_HEIGHT, GRID_WIDTH};
pub use direction::Direction;
pub use grid::{Grid, Pos};
pub use history::History;
pub use message::{Flash, StatusMessage};
pub use rng::{GameRng, GameRngState};
pub use tile::{Archetype, Tile, TileState};
