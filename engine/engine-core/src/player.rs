//! Players and game outcomes for two-player zero-sum games.

use rand::Rng;
use std::fmt;

/// One of the two sides of a game.
///
/// The discriminant doubles as the index into per-player value arrays
/// (see [`crate::StateValue`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Left = 0,
    Right = 1,
}

impl Player {
    /// Both players in index order.
    pub const ALL: [Player; 2] = [Player::Left, Player::Right];

    /// Index of this player in per-player arrays.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The other player.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Left => Player::Right,
            Player::Right => Player::Left,
        }
    }

    /// Pick a player uniformly at random (used to randomize who opens a game).
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Player {
        if rng.gen_bool(0.5) {
            Player::Left
        } else {
            Player::Right
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Left => write!(f, "left"),
            Player::Right => write!(f, "right"),
        }
    }
}

/// Terminal check result for a game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The game is still being played.
    Ongoing,
    /// The game ended and this player won.
    Won(Player),
    /// The game ended without a winner.
    Draw,
}

impl Outcome {
    #[inline]
    pub fn is_ongoing(self) -> bool {
        matches!(self, Outcome::Ongoing)
    }

    /// Winner of a finished game, `None` for draws and ongoing games.
    #[inline]
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(player),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }

    /// `(still_ongoing, winner)` pair, the shape host adapters expose.
    ///
    /// An empty tic-tac-toe board is `(true, None)`; a completed line is
    /// `(false, Some(player))`; a full board with no line is `(false, None)`.
    pub fn as_pair(self) -> (bool, Option<Player>) {
        (self.is_ongoing(), self.winner())
    }
}
