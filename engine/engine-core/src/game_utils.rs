//! Shared utilities for two-player game implementations
//!
//! This module provides common functionality used across multiple game implementations
//! to reduce code duplication and ensure consistent behavior.

use rand::Rng;

use crate::player::{Outcome, Player};

/// Value of a win for the winning player.
pub const WIN_VALUE: f64 = 1.0;
/// Value of a loss for the losing player.
pub const LOSS_VALUE: f64 = 0.0;
/// Value of a draw, and the neutral estimate for an unfinished game.
pub const NEUTRAL_VALUE: f64 = 0.5;

/// Terminal test plus per-player value vector.
///
/// Values are indexed by [`Player::index`]. Larger is better for that player;
/// the only requirement is a consistent scale within one search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateValue {
    /// Whether the game is still being played.
    pub ongoing: bool,
    /// Value for each player.
    pub values: [f64; 2],
}

impl StateValue {
    pub fn new(ongoing: bool, values: [f64; 2]) -> Self {
        Self { ongoing, values }
    }

    /// Reference normalisation used by the bundled games.
    ///
    /// # Example
    /// ```
    /// use engine_core::{Outcome, Player, StateValue};
    ///
    /// let won = StateValue::from_outcome(Outcome::Won(Player::Left));
    /// assert!(!won.ongoing);
    /// assert_eq!(won.values, [1.0, 0.0]);
    ///
    /// let open = StateValue::from_outcome(Outcome::Ongoing);
    /// assert!(open.ongoing);
    /// assert_eq!(open.values, [0.5, 0.5]);
    /// ```
    pub fn from_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Won(Player::Left) => Self::new(false, [WIN_VALUE, LOSS_VALUE]),
            Outcome::Won(Player::Right) => Self::new(false, [LOSS_VALUE, WIN_VALUE]),
            Outcome::Draw => Self::new(false, [NEUTRAL_VALUE, NEUTRAL_VALUE]),
            Outcome::Ongoing => Self::new(true, [NEUTRAL_VALUE, NEUTRAL_VALUE]),
        }
    }

    /// Value from `player`'s point of view.
    #[inline]
    pub fn for_player(&self, player: Player) -> f64 {
        self.values[player.index()]
    }
}

/// Pick one element uniformly at random.
///
/// Returns `None` for an empty slice so callers can surface the
/// "no legal moves" precondition instead of panicking.
pub fn choose_uniform<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    Some(&items[rng.gen_range(0..items.len())])
}
