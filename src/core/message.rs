//! User-facing status and flash messages.
//!
//! The enum variants are the stable API the presentation layer matches on;
//! the `Display` strings are what it shows.

use serde::{Deserialize, Serialize};

use super::grid::Pos;
use super::tile::Archetype;

/// The session's current status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusMessage {
    /// Fresh session, no move made yet.
    Ready,
    /// A move was accepted and the game continues.
    InProgress,
    /// The attempted move ran into a crystallized wall.
    Blocked,
    /// No route to the exit remains. Advisory; the game continues.
    RouteSealed,
    /// Every neighbor of the player is a wall or off-grid.
    Trapped,
    /// The player reached the exit.
    Escaped,
}

impl std::fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            StatusMessage::Ready => "find the exit before the maze seals",
            StatusMessage::InProgress => "the maze hardens behind you",
            StatusMessage::Blocked => "blocked: that way has crystallized",
            StatusMessage::RouteSealed => "the maze is sealed, no route remains",
            StatusMessage::Trapped => "sealed inside your own pattern",
            StatusMessage::Escaped => "you reached the exit",
        };
        f.write_str(text)
    }
}

/// Transient note emitted when a tile crystallizes.
///
/// The presentation layer flashes it; `Session::tick` decays the intensity
/// and drops the note at zero. Purely presentational.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Flash {
    /// The cell that hardened.
    pub pos: Pos,
    /// The archetype whose rule fired.
    pub archetype: Archetype,
    /// Remaining display intensity in `[0, 1]`.
    pub intensity: f32,
}

impl std::fmt::Display for Flash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "a {} tile crystallized at {}", self.archetype, self.pos)
    }
}
