//! Decision algorithm contract and the errors every algorithm may raise.

use thiserror::Error;

use crate::typed::Game;

/// Errors that can occur while choosing or applying a move.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Cannot search from a terminal state")]
    TerminalState,

    #[error("No legal moves available from a non-terminal state")]
    NoLegalMoves,

    #[error("Illegal move: {0}")]
    IllegalMove(String),

    #[error("Failed to spawn search worker: {0}")]
    WorkerSpawn(#[source] std::io::Error),

    #[error("Search worker for replica {replica} panicked")]
    WorkerPanicked { replica: usize },

    #[error("Replica root has {actual} children, expected {expected}")]
    ReplicaMismatch { expected: usize, actual: usize },
}

/// A decision procedure that picks the next state for the player to move.
///
/// Implementations are generic over the game so a single algorithm value can
/// drive any rules engine; the search itself is monomorphised per game.
pub trait Algorithm<G: Game> {
    /// Choose the successor of `state`.
    ///
    /// `state` must be ongoing; calling this on a finished game returns
    /// [`SearchError::TerminalState`].
    fn compute(&mut self, state: &G::State) -> Result<G::State, SearchError>;
}

impl<G: Game, A: Algorithm<G> + ?Sized> Algorithm<G> for Box<A> {
    fn compute(&mut self, state: &G::State) -> Result<G::State, SearchError> {
        (**self).compute(state)
    }
}

/// Fail fast unless `state` is an ongoing position with at least one move.
///
/// Shared precondition check for algorithm entry points.
pub fn ensure_playable<G: Game>(state: &G::State) -> Result<Vec<G::Move>, SearchError> {
    if !G::state_value(state, 0).ongoing {
        return Err(SearchError::TerminalState);
    }
    let moves = G::list_moves(state);
    if moves.is_empty() {
        return Err(SearchError::NoLegalMoves);
    }
    Ok(moves)
}
