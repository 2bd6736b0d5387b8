//! Tiles and their behavioral archetypes.
//!
//! ## Archetype
//!
//! Every tile carries exactly one of five archetypes. The archetype names the
//! single hardening predicate that applies to the tile; rules never stack.
//! Each session plays with a 4-of-5 subset (see `maze`).
//!
//! ## TileState
//!
//! What the tile currently is from the mover's point of view. `Wall` is
//! terminal: nothing transitions a wall back to any other state.

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// The five tile behaviors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    /// Hardens after being vacated a session-fixed number of times.
    ThirdExit,
    /// Hardens when it was last entered from the north.
    NorthEntry,
    /// Hardens when the last two recorded directions repeat.
    Sequence,
    /// Hardens when its own kind dominates the recent archetype window.
    Frequency,
    /// Hardens when its cell reappears in the recent position window.
    Backtrack,
}

impl Archetype {
    /// The full archetype set.
    pub const ALL: [Archetype; 5] = [
        Archetype::ThirdExit,
        Archetype::NorthEntry,
        Archetype::Sequence,
        Archetype::Frequency,
        Archetype::Backtrack,
    ];
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Archetype::ThirdExit => "third-exit",
            Archetype::NorthEntry => "north-entry",
            Archetype::Sequence => "sequence",
            Archetype::Frequency => "frequency",
            Archetype::Backtrack => "backtrack",
        };
        f.write_str(name)
    }
}

/// Current state of a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileState {
    /// Untouched ground.
    Neutral,
    /// Visited ground; still passable.
    Safe,
    /// Crystallized. Permanently impassable.
    Wall,
    /// The goal cell. Never hardens.
    Exit,
}

impl TileState {
    /// Whether a player may stand on or cross this tile.
    #[must_use]
    pub const fn is_passable(self) -> bool {
        !matches!(self, TileState::Wall)
    }
}

/// One cell of the playfield.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// Which hardening rule applies to this tile.
    pub archetype: Archetype,
    /// Current state; see `TileState`.
    pub state: TileState,
    /// Times the player has vacated this tile.
    pub leave_count: u32,
    /// Times the player has entered this tile.
    pub visits: u32,
    /// Direction this tile was last entered from.
    pub last_entry: Option<Direction>,
    /// Presentation-only reveal intensity, decayed by `Session::tick`.
    pub reveal: f32,
}

impl Tile {
    /// A fresh neutral tile of the given archetype.
    #[must_use]
    pub fn new(archetype: Archetype) -> Self {
        Self {
            archetype,
            state: TileState::Neutral,
            leave_count: 0,
            visits: 0,
            last_entry: None,
            reveal: 0.0,
        }
    }
}
