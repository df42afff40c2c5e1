//! Depth-bounded minimax with alpha-beta pruning.

use engine_core::{ensure_playable, Algorithm, Game, GameState, Player, SearchError};
use tracing::trace;

/// Minimax search maximizing for the player to move at the root.
///
/// Whether a node maximizes or minimizes is read from the node's own state,
/// so games that do not strictly alternate turns are handled.
#[derive(Debug, Clone)]
pub struct MinMax {
    max_depth: u32,
}

impl MinMax {
    /// Search at most `max_depth` plies deep. A depth of 0 is raised to 1 so
    /// a move is always chosen.
    pub fn new(max_depth: u32) -> Self {
        Self {
            max_depth: max_depth.max(1),
        }
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Best successor of `state` for its player to move.
    pub fn search<G: Game>(&self, state: &G::State) -> Result<G::State, SearchError> {
        ensure_playable::<G>(state)?;

        let root_player = state.current_player();
        let mut visited = 0u64;
        let (best, value) = self.alpha_beta::<G>(
            state,
            root_player,
            f64::NEG_INFINITY,
            f64::INFINITY,
            0,
            &mut visited,
        )?;

        trace!(
            player = %root_player,
            value,
            visited,
            max_depth = self.max_depth,
            "Minimax search complete"
        );

        best.ok_or(SearchError::NoLegalMoves)
    }

    /// Value of `state` for `maximizing`, plus the child reaching it.
    /// The child is `None` at a terminal or cut-off node.
    fn alpha_beta<G: Game>(
        &self,
        state: &G::State,
        maximizing: Player,
        mut alpha: f64,
        mut beta: f64,
        depth: u32,
        visited: &mut u64,
    ) -> Result<(Option<G::State>, f64), SearchError> {
        *visited += 1;

        let value = G::state_value(state, depth);
        if !value.ongoing || depth >= self.max_depth {
            return Ok((None, value.for_player(maximizing)));
        }

        let moves = G::list_moves(state);
        if moves.is_empty() {
            return Err(SearchError::NoLegalMoves);
        }

        let maximize = state.current_player() == maximizing;
        let mut best: Option<(G::State, f64)> = None;

        for mv in &moves {
            let next = G::apply_move(state, mv);
            let (_, child_value) =
                self.alpha_beta::<G>(&next, maximizing, alpha, beta, depth + 1, visited)?;

            let improves = match &best {
                None => true,
                Some((_, best_value)) if maximize => child_value > *best_value,
                Some((_, best_value)) => child_value < *best_value,
            };
            if improves {
                best = Some((next, child_value));
            }

            let best_value = best.as_ref().map_or(child_value, |(_, v)| *v);
            if maximize {
                alpha = alpha.max(best_value);
            } else {
                beta = beta.min(best_value);
            }
            if alpha >= beta {
                break;
            }
        }

        Ok(match best {
            Some((next, value)) => (Some(next), value),
            None => (None, value.for_player(maximizing)),
        })
    }
}

impl Default for MinMax {
    fn default() -> Self {
        Self::new(u32::MAX)
    }
}

impl<G: Game> Algorithm<G> for MinMax {
    fn compute(&mut self, state: &G::State) -> Result<G::State, SearchError> {
        self.search::<G>(state)
    }
}
