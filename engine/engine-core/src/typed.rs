//! Typed Game trait: the rules interface every search algorithm consumes.
//!
//! A rules engine is stateless. Every function takes a state by reference and
//! returns a new value; nothing is mutated in place from the caller's point of
//! view. Search loops are generic over [`Game`], so each game gets its own
//! monomorphised copy of MCTS and minimax.

use rand::Rng;
use std::fmt::Debug;

use crate::game_utils::{choose_uniform, StateValue};
use crate::player::{Outcome, Player};

/// A point in a game. Immutable once produced by [`Game::apply_move`].
pub trait GameState: Clone + Debug + Send + Sync + 'static {
    /// Whose turn it is.
    fn current_player(&self) -> Player;
}

/// Rules of a two-player, perfect-information, zero-sum game.
///
/// # Example
///
/// ```rust
/// use engine_core::{Game, GameState, Outcome, Player};
///
/// /// Players alternately take one or two stones; taking the last stone wins.
/// #[derive(Debug, Clone)]
/// struct Pile {
///     stones: u8,
///     player: Player,
///     last_mover: Option<Player>,
/// }
///
/// impl GameState for Pile {
///     fn current_player(&self) -> Player {
///         self.player
///     }
/// }
///
/// struct Nim;
///
/// impl Game for Nim {
///     type State = Pile;
///     type Move = u8;
///
///     fn list_moves(state: &Pile) -> Vec<u8> {
///         (1..=state.stones.min(2)).collect()
///     }
///
///     fn apply_move(state: &Pile, take: &u8) -> Pile {
///         Pile {
///             stones: state.stones - take,
///             player: state.player.opponent(),
///             last_mover: Some(state.player),
///         }
///     }
///
///     fn winner(state: &Pile) -> Outcome {
///         match (state.stones, state.last_mover) {
///             (0, Some(player)) => Outcome::Won(player),
///             (0, None) => Outcome::Draw,
///             _ => Outcome::Ongoing,
///         }
///     }
/// }
///
/// let start = Pile { stones: 3, player: Player::Left, last_mover: None };
/// assert_eq!(Nim::list_moves(&start), vec![1, 2]);
/// assert!(Nim::state_value(&start, 0).ongoing);
/// ```
pub trait Game: Send + Sync + 'static {
    /// Game state type
    type State: GameState;

    /// Move type, small and cheap to clone
    type Move: Clone + PartialEq + Debug + Send + Sync + 'static;

    /// All legal moves from `state`.
    ///
    /// The order must be deterministic: two independently built, identical
    /// states must list the same moves in the same order. MCTS aggregates
    /// replica votes by child position and relies on this.
    fn list_moves(state: &Self::State) -> Vec<Self::Move>;

    /// Pure transition. Must hand the turn to the next player per the rules.
    fn apply_move(state: &Self::State, mv: &Self::Move) -> Self::State;

    /// Terminal check: ongoing, won by a player, or drawn.
    fn winner(state: &Self::State) -> Outcome;

    /// Terminal test plus per-player values.
    ///
    /// `depth` is the distance from the search root; games may use it to
    /// prefer faster wins. The default ignores it and normalises the outcome
    /// to `{loss 0.0, draw/ongoing 0.5, win 1.0}`.
    fn state_value(state: &Self::State, _depth: u32) -> StateValue {
        StateValue::from_outcome(Self::winner(state))
    }

    /// One rollout step. Defaults to a uniformly random legal move.
    ///
    /// Returns `None` when there is no legal move, which for an ongoing state
    /// is a rules violation the caller reports as [`crate::SearchError::NoLegalMoves`].
    fn simulation_policy<R: Rng + ?Sized>(state: &Self::State, rng: &mut R) -> Option<Self::State> {
        let moves = Self::list_moves(state);
        choose_uniform(&moves, rng).map(|mv| Self::apply_move(state, mv))
    }
}
