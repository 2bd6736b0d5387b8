//! Session constants and the randomized rule thresholds.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Default playfield width in tiles.
pub const GRID_WIDTH: usize = 18;
/// Default playfield height in tiles.
pub const GRID_HEIGHT: usize = 18;

/// Smallest grid that keeps start and exit distinct and off the border.
pub const MIN_GRID_SIDE: usize = 4;

/// Capacity of the recent-directions window.
pub const DIRECTION_HISTORY_CAP: usize = 12;
/// Capacity of the recent-archetypes window.
pub const ARCHETYPE_HISTORY_CAP: usize = 20;
/// Capacity of the recent-positions window.
pub const POSITION_HISTORY_CAP: usize = 14;

/// Reveal intensity assigned to a freshly crystallized tile.
pub const REVEAL_FULL: f32 = 1.0;
/// Reveal intensity lost per animation tick.
pub const REVEAL_DECAY: f32 = 0.02;
/// Flash intensity lost per animation tick.
pub const FLASH_DECAY: f32 = 0.04;
/// Ticks the archetype reveal stays active after `trigger_reveal`
/// (roughly three seconds at the shell's ~33ms cadence).
pub const REVEAL_TICKS: u32 = 90;

/// Session-fixed rule parameters, rolled once at generation.
///
/// Each value is a small base plus a floored random offset, so sessions with
/// different seeds play by slightly different rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Vacate count at which a third-exit tile hardens (3..=4).
    pub third_exit: u32,
    /// How many recent archetypes the frequency rule examines (6..=9).
    pub frequency_window: usize,
    /// Matches within the window that trigger the frequency rule (3..=4).
    pub frequency_count: u32,
    /// How many recent positions the backtrack rule examines (4..=6).
    pub backtrack_window: usize,
}

impl Thresholds {
    /// Roll a fresh set of thresholds from the session RNG.
    #[must_use]
    pub fn roll(rng: &mut GameRng) -> Self {
        Self {
            third_exit: 3 + (rng.next_float() * 2.0) as u32,
            frequency_window: 6 + (rng.next_float() * 4.0) as usize,
            frequency_count: 3 + (rng.next_float() * 2.0) as u32,
            backtrack_window: 4 + (rng.next_float() * 3.0) as usize,
        }
    }
}
