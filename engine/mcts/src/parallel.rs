//! Root-parallel MCTS: independent replicas merged by a visit-count vote.
//!
//! Each `compute` call spawns one scoped OS thread per replica. A replica
//! builds its own tree with its own seeded generator, so the search loop
//! needs no locks. The calling thread blocks until every replica is done,
//! sums root-child visits by position and returns the winning child's state
//! from the first replica. All trees are dropped before returning.

use std::thread;
use std::time::Instant;

use engine_core::{Algorithm, Game, SearchError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::config::MctsConfig;
use crate::search::MctsSearch;
use crate::tree::MctsTree;
use crate::vote::{pick_most_visited, tally};

/// Non-persistent, root-parallel Monte Carlo Tree Search.
#[derive(Debug, Clone)]
pub struct MonteCarloTreeSearch {
    config: MctsConfig,
}

impl MonteCarloTreeSearch {
    pub fn new(config: MctsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Number of replicas each search runs.
    pub fn thread_count(&self) -> usize {
        self.config.resolved_threads()
    }

    /// Search from `state` with replica seeds drawn from the thread-local
    /// entropy source. Repeated calls are not reproducible.
    pub fn search<G: Game>(&self, state: &G::State) -> Result<G::State, SearchError> {
        self.search_with_rng::<G, _>(state, &mut rand::thread_rng())
    }

    /// Search from `state`, drawing every replica seed and the tie-break
    /// seed from `rng`. A seeded `rng` makes the whole call reproducible.
    pub fn search_with_rng<G: Game, R: Rng + ?Sized>(
        &self,
        state: &G::State,
        rng: &mut R,
    ) -> Result<G::State, SearchError> {
        if !G::state_value(state, 0).ongoing {
            return Err(SearchError::TerminalState);
        }

        let started = Instant::now();
        let seeds: Vec<u64> = (0..self.thread_count()).map(|_| rng.gen()).collect();
        let mut coin = ChaCha20Rng::seed_from_u64(rng.gen());

        let trees = self.run_replicas::<G>(state, &seeds)?;
        let totals = tally(&trees)?;
        let index = pick_most_visited(&totals, &mut coin).ok_or(SearchError::NoLegalMoves)?;

        let tree = trees
            .into_iter()
            .next()
            .ok_or(SearchError::NoLegalMoves)?;
        let chosen = tree.get(tree.root_children()[index]).state.clone();

        debug!(
            replicas = seeds.len(),
            chosen = index,
            votes = ?totals,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "MCTS search complete"
        );

        Ok(chosen)
    }

    /// Run one full search per seed, each on its own scoped thread.
    fn run_replicas<G: Game>(
        &self,
        state: &G::State,
        seeds: &[u64],
    ) -> Result<Vec<MctsTree<G::State>>, SearchError> {
        thread::scope(|scope| -> Result<Vec<MctsTree<G::State>>, SearchError> {
            let handles = seeds
                .iter()
                .enumerate()
                .map(|(replica, &seed)| {
                    let root = state.clone();
                    let config = self.config.clone();
                    thread::Builder::new()
                        .name(format!("mcts-replica-{replica}"))
                        .spawn_scoped(scope, move || {
                            let mut rng = ChaCha20Rng::seed_from_u64(seed);
                            MctsSearch::<G>::new(root, config).run(&mut rng)
                        })
                        .map_err(SearchError::WorkerSpawn)
                })
                .collect::<Result<Vec<_>, _>>()?;

            // Join every replica before looking at results: a panicked
            // handle left unjoined would make the scope itself panic.
            let joined: Vec<_> = handles.into_iter().map(|handle| handle.join()).collect();

            joined
                .into_iter()
                .enumerate()
                .map(|(replica, outcome)| {
                    outcome
                        .map_err(|_| SearchError::WorkerPanicked { replica })
                        .and_then(|result| result)
                })
                .collect()
        })
    }
}

impl Default for MonteCarloTreeSearch {
    fn default() -> Self {
        Self::new(MctsConfig::default())
    }
}

impl<G: Game> Algorithm<G> for MonteCarloTreeSearch {
    fn compute(&mut self, state: &G::State) -> Result<G::State, SearchError> {
        self.search::<G>(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::Player;
    use games_connect4::Connect4;
    use games_tictactoe::{Action, State, TicTacToe};

    fn winning_position() -> State {
        let mut state = State::new(Player::Left);
        for cell in [0, 3, 1, 4] {
            state = TicTacToe::apply_move(&state, &Action::Place(cell));
        }
        state
    }

    #[test]
    fn test_thread_count() {
        let mcts = MonteCarloTreeSearch::new(MctsConfig::new(10).with_threads(3));
        assert_eq!(mcts.thread_count(), 3);
        assert!(MonteCarloTreeSearch::default().thread_count() >= 1);
    }

    #[test]
    fn test_compute_finds_winning_move() {
        let mut mcts = MonteCarloTreeSearch::new(MctsConfig::for_testing().with_iterations(500));
        let next = Algorithm::<TicTacToe>::compute(&mut mcts, &winning_position()).unwrap();

        assert_eq!(next.board[2], Some(Player::Left));
        assert_eq!(TicTacToe::winner(&next).winner(), Some(Player::Left));
    }

    #[test]
    fn test_zero_iterations_returns_legal_successor() {
        let mcts = MonteCarloTreeSearch::new(MctsConfig::new(0).with_threads(2));
        let start = State::new(Player::Left);
        let next = mcts.search::<TicTacToe>(&start).unwrap();

        let successors: Vec<State> = TicTacToe::list_moves(&start)
            .iter()
            .map(|mv| TicTacToe::apply_move(&start, mv))
            .collect();
        assert!(successors.contains(&next));
    }

    #[test]
    fn test_terminal_state_is_rejected() {
        let finished = TicTacToe::apply_move(&winning_position(), &Action::Place(2));
        let mcts = MonteCarloTreeSearch::new(MctsConfig::for_testing());
        let err = mcts.search::<TicTacToe>(&finished).unwrap_err();
        assert!(matches!(err, SearchError::TerminalState));
    }

    #[test]
    fn test_ongoing_state_without_moves_is_rejected() {
        use crate::test_utils::{Frozen, Stuck};

        let mcts = MonteCarloTreeSearch::new(MctsConfig::new(10).with_threads(2));
        let err = mcts.search::<Stuck>(&Frozen(Player::Right)).unwrap_err();
        assert!(matches!(err, SearchError::NoLegalMoves));
    }

    #[test]
    fn test_replica_panic_is_reported() {
        use crate::test_utils::{Faulty, Frozen};

        let mcts = MonteCarloTreeSearch::new(MctsConfig::new(10).with_threads(3));
        let err = mcts.search::<Faulty>(&Frozen(Player::Left)).unwrap_err();
        assert!(matches!(err, SearchError::WorkerPanicked { replica: 0 }));
    }

    #[test]
    fn test_seeded_search_is_reproducible() {
        let mcts = MonteCarloTreeSearch::new(MctsConfig::new(50).with_threads(4));
        let start = State::new(Player::Right);

        let a = mcts
            .search_with_rng::<TicTacToe, _>(&start, &mut ChaCha20Rng::seed_from_u64(17))
            .unwrap();
        let b = mcts
            .search_with_rng::<TicTacToe, _>(&start, &mut ChaCha20Rng::seed_from_u64(17))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_connect4_takes_vertical_win() {
        // Left stacks column 0 three times, Right answers in column 1.
        let mut state = games_connect4::State::new(Player::Left);
        for column in [0, 1, 0, 1, 0, 1] {
            state = Connect4::apply_move(&state, &games_connect4::Action::Drop(column));
        }

        let mcts = MonteCarloTreeSearch::new(MctsConfig::new(400).with_threads(2));
        let next = mcts
            .search_with_rng::<Connect4, _>(&state, &mut ChaCha20Rng::seed_from_u64(3))
            .unwrap();
        assert_eq!(Connect4::winner(&next).winner(), Some(Player::Left));
    }
}
