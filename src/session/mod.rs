//! Game sessions and the move processor.
//!
//! A `Session` owns the grid, the player, the history windows and the
//! counters. It is created fresh per game, mutated in place by every move,
//! and dropped wholesale on reset. There is no module-level current session:
//! the presentation layer holds the `Session` and passes it into every call,
//! which keeps the core callable from a synchronous test harness with no
//! timer or DOM dependency.
//!
//! ## Move processing order
//!
//! For an accepted move: the vacated tile's leave count increments and its
//! hardening rule runs; the destination records the entry direction and a
//! visit; the player moves; the three history windows record the move; the
//! move counter and status update; a winning move returns immediately;
//! otherwise the destination is promoted from neutral to safe and the
//! liveness checks run. Rules therefore never observe the move that
//! triggers them, and hardening trails one step behind the player.

use crate::core::config::{
    Thresholds, ARCHETYPE_HISTORY_CAP, DIRECTION_HISTORY_CAP, FLASH_DECAY, GRID_HEIGHT,
    GRID_WIDTH, POSITION_HISTORY_CAP, REVEAL_DECAY, REVEAL_FULL, REVEAL_TICKS,
};
use crate::core::direction::Direction;
use crate::core::grid::{Grid, Pos};
use crate::core::history::History;
use crate::core::message::{Flash, StatusMessage};
use crate::core::rng::GameRng;
use crate::core::tile::{Archetype, TileState};
use crate::liveness;
use crate::maze::{self, MazeLayout, POOL_SIZE};
use crate::rules::{self, RuleContext};

/// Result of an attempted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether the player actually moved.
    pub moved: bool,
    /// The session status after the attempt.
    pub message: StatusMessage,
}

/// A single game in progress.
#[derive(Clone, Debug)]
pub struct Session {
    grid: Grid,
    player: Pos,
    exit: Pos,
    move_count: u32,
    crystallized_count: u32,
    recent_directions: History<Direction>,
    recent_archetypes: History<Archetype>,
    recent_positions: History<Pos>,
    thresholds: Thresholds,
    pool: [Archetype; POOL_SIZE],
    message: StatusMessage,
    flash: Option<Flash>,
    reveal_timer: u32,
    seed: u64,
}

impl Session {
    /// Create a session on the default 18x18 grid.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_size(seed, GRID_WIDTH, GRID_HEIGHT)
    }

    /// Create a session with a freshly drawn seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Create a session on a custom grid.
    ///
    /// # Panics
    /// If either dimension is below 4 (see [`maze::generate`]).
    #[must_use]
    pub fn with_size(seed: u64, width: usize, height: usize) -> Self {
        let mut rng = GameRng::new(seed);
        let layout = maze::generate(&mut rng, width, height);
        Self::from_layout(layout, seed)
    }

    fn from_layout(layout: MazeLayout, seed: u64) -> Self {
        Self {
            grid: layout.grid,
            player: layout.player,
            exit: layout.exit,
            move_count: 0,
            crystallized_count: 0,
            recent_directions: History::new(DIRECTION_HISTORY_CAP),
            recent_archetypes: History::new(ARCHETYPE_HISTORY_CAP),
            recent_positions: History::new(POSITION_HISTORY_CAP),
            thresholds: layout.thresholds,
            pool: layout.pool,
            message: StatusMessage::Ready,
            flash: None,
            reveal_timer: 0,
            seed,
        }
    }

    // === Move processing ===

    /// Attempt a unit-step move.
    ///
    /// A delta that is not one of the four unit directions, or a destination
    /// off the grid, is a silent no-op. A destination that is currently a
    /// wall is rejected with [`StatusMessage::Blocked`] and mutates nothing.
    /// Anything else is an accepted move.
    pub fn attempt_move(&mut self, dx: i32, dy: i32) -> MoveOutcome {
        let Some(dir) = Direction::from_delta(dx, dy) else {
            return self.rejected();
        };
        let dest = self.player.offset(dx, dy);
        if !self.grid.in_bounds(dest) {
            return self.rejected();
        }
        if self.grid.tile(dest).state == TileState::Wall {
            self.message = StatusMessage::Blocked;
            return self.rejected();
        }

        let vacated_pos = self.player;
        let vacated_archetype = self.grid.tile(vacated_pos).archetype;

        // Harden check on the tile being left. The player has already safely
        // left it, so walling it behind them is permitted.
        self.grid.tile_mut(vacated_pos).leave_count += 1;
        let ctx = RuleContext {
            thresholds: &self.thresholds,
            directions: &self.recent_directions,
            archetypes: &self.recent_archetypes,
            positions: &self.recent_positions,
        };
        if rules::should_harden(self.grid.tile(vacated_pos), vacated_pos, &ctx) {
            self.crystallize(vacated_pos, vacated_archetype);
        }

        let entered = self.grid.tile_mut(dest);
        entered.last_entry = Some(dir);
        entered.visits += 1;
        self.player = dest;

        self.recent_directions.push(dir);
        self.recent_archetypes.push(vacated_archetype);
        self.recent_positions.push(vacated_pos);

        self.move_count += 1;
        self.message = StatusMessage::InProgress;

        if self.player == self.exit {
            self.message = StatusMessage::Escaped;
            return MoveOutcome {
                moved: true,
                message: self.message,
            };
        }

        let entered = self.grid.tile_mut(dest);
        if entered.state == TileState::Neutral {
            entered.state = TileState::Safe;
        }

        if !liveness::exit_reachable(&self.grid, self.player, self.exit) {
            self.message = StatusMessage::RouteSealed;
        }
        if liveness::is_entrapped(&self.grid, self.player) {
            self.message = StatusMessage::Trapped;
        }

        MoveOutcome {
            moved: true,
            message: self.message,
        }
    }

    fn rejected(&self) -> MoveOutcome {
        MoveOutcome {
            moved: false,
            message: self.message,
        }
    }

    fn crystallize(&mut self, pos: Pos, archetype: Archetype) {
        let tile = self.grid.tile_mut(pos);
        tile.state = TileState::Wall;
        tile.reveal = REVEAL_FULL;
        self.crystallized_count += 1;
        self.flash = Some(Flash {
            pos,
            archetype,
            intensity: REVEAL_FULL,
        });
    }

    // === Presentation hooks ===

    /// Advance presentation decay by one animation tick.
    ///
    /// Touches only reveal floats, the flash note and the reveal countdown —
    /// state disjoint from everything the move processor reads — so the
    /// shell may call it at any cadence relative to moves, or skip it.
    pub fn tick(&mut self) {
        for tile in self.grid.tiles_mut() {
            tile.reveal = (tile.reveal - REVEAL_DECAY).max(0.0);
        }
        if let Some(flash) = &mut self.flash {
            flash.intensity -= FLASH_DECAY;
            if flash.intensity <= 0.0 {
                self.flash = None;
            }
        }
        self.reveal_timer = self.reveal_timer.saturating_sub(1);
    }

    /// Start the archetype-reveal countdown. No gameplay effect.
    pub fn trigger_reveal(&mut self) {
        self.reveal_timer = REVEAL_TICKS;
    }

    // === Read-only accessors for rendering ===

    /// The playfield.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current player cell.
    #[must_use]
    pub fn player(&self) -> Pos {
        self.player
    }

    /// The exit cell, fixed at generation.
    #[must_use]
    pub fn exit(&self) -> Pos {
        self.exit
    }

    /// Accepted moves so far.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Tiles crystallized so far.
    #[must_use]
    pub fn crystallized_count(&self) -> u32 {
        self.crystallized_count
    }

    /// Current status line.
    #[must_use]
    pub fn message(&self) -> StatusMessage {
        self.message
    }

    /// Crystallization note still flashing, if any.
    #[must_use]
    pub fn flash(&self) -> Option<Flash> {
        self.flash
    }

    /// Whether the archetype-reveal countdown is live.
    #[must_use]
    pub fn reveal_active(&self) -> bool {
        self.reveal_timer > 0
    }

    /// This session's rule parameters.
    #[must_use]
    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// This session's archetype pool.
    #[must_use]
    pub fn archetype_pool(&self) -> [Archetype; POOL_SIZE] {
        self.pool
    }

    /// The seed this session was generated from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
