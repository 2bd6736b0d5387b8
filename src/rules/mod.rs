//! The tile-hardening rule engine.
//!
//! Every tile carries one of five archetypes, and the archetype names the
//! single predicate that decides whether the tile crystallizes into a wall
//! at the moment the player vacates it. The archetype set is closed, so
//! dispatch is a `match` over pure predicates — no trait objects, no runtime
//! registration.
//!
//! ## Evaluation timing
//!
//! The move processor calls `should_harden` after the vacated tile's leave
//! count increments and before the move's history pushes, so a rule never
//! observes the move that triggers it. Rules run only on the tile being
//! vacated, never on the tile being entered: hardening always trails one
//! step behind the player.

use crate::core::config::Thresholds;
use crate::core::direction::Direction;
use crate::core::grid::Pos;
use crate::core::history::History;
use crate::core::tile::{Archetype, Tile, TileState};

/// Read-only view of the session state a rule may consult.
pub struct RuleContext<'a> {
    /// Session-fixed rule parameters.
    pub thresholds: &'a Thresholds,
    /// Directions of recent accepted moves, oldest first.
    pub directions: &'a History<Direction>,
    /// Archetypes of recently vacated tiles, oldest first.
    pub archetypes: &'a History<Archetype>,
    /// Recently vacated cells, oldest first.
    pub positions: &'a History<Pos>,
}

/// Decide whether the tile being vacated at `pos` crystallizes.
///
/// Wall and exit tiles never re-evaluate.
#[must_use]
pub fn should_harden(tile: &Tile, pos: Pos, ctx: &RuleContext<'_>) -> bool {
    if matches!(tile.state, TileState::Wall | TileState::Exit) {
        return false;
    }

    match tile.archetype {
        // Cumulative vacates of this specific tile across the session.
        Archetype::ThirdExit => tile.leave_count >= ctx.thresholds.third_exit,

        // The direction this tile was last entered from, not the direction
        // of the current exit.
        Archetype::NorthEntry => tile.last_entry == Some(Direction::North),

        // Global repeat-direction detector; ignores the tile entirely.
        Archetype::Sequence => {
            let len = ctx.directions.len();
            len >= 2 && ctx.directions.get(len - 1) == ctx.directions.get(len - 2)
        }

        Archetype::Frequency => {
            let hits = ctx
                .archetypes
                .recent(ctx.thresholds.frequency_window)
                .filter(|&&a| a == tile.archetype)
                .count();
            hits >= ctx.thresholds.frequency_count as usize
        }

        // Revisiting a cell occupied within a short horizon.
        Archetype::Backtrack => ctx
            .positions
            .recent(ctx.thresholds.backtrack_window)
            .any(|&p| p == pos),
    }
}
