//! Simulation harness: plays a game between two algorithms and records history.
//!
//! The harness owns the current state, one algorithm per side and the
//! append-only list of states seen so far. Whose turn it is always comes from
//! the current state, never from a ply counter.

use tracing::debug;

use crate::algorithm::{Algorithm, SearchError};
use crate::player::{Outcome, Player};
use crate::typed::{Game, GameState};

/// Two algorithms playing one game, with full history.
#[derive(Debug)]
pub struct Simulation<G: Game, L, R> {
    state: G::State,
    left: L,
    right: R,
    history: Vec<G::State>,
}

impl<G, L, R> Simulation<G, L, R>
where
    G: Game,
    L: Algorithm<G>,
    R: Algorithm<G>,
{
    /// Create a harness starting at `initial_state`.
    pub fn new(initial_state: G::State, left: L, right: R) -> Self {
        let history = vec![initial_state.clone()];
        Self {
            state: initial_state,
            left,
            right,
            history,
        }
    }

    /// Reset to a new starting position, keeping the same algorithms.
    ///
    /// History becomes the single-element sequence `[state]`.
    pub fn initialize(&mut self, state: G::State) {
        self.history.clear();
        self.history.push(state.clone());
        self.state = state;
    }

    /// Let the side to move pick the next state.
    ///
    /// Returns the terminal check of the new state.
    pub fn play(&mut self) -> Result<Outcome, SearchError> {
        if !G::winner(&self.state).is_ongoing() {
            return Err(SearchError::TerminalState);
        }

        let mover = self.state.current_player();
        let next = match mover {
            Player::Left => self.left.compute(&self.state)?,
            Player::Right => self.right.compute(&self.state)?,
        };
        Ok(self.advance(mover, next))
    }

    /// Apply an externally chosen move (human or UI driven play).
    ///
    /// The move must be one of [`Simulation::legal_moves`].
    pub fn apply(&mut self, mv: &G::Move) -> Result<Outcome, SearchError> {
        if !G::winner(&self.state).is_ongoing() {
            return Err(SearchError::TerminalState);
        }
        if !G::list_moves(&self.state).contains(mv) {
            return Err(SearchError::IllegalMove(format!("{mv:?}")));
        }

        let mover = self.state.current_player();
        let next = G::apply_move(&self.state, mv);
        Ok(self.advance(mover, next))
    }

    /// Play until the game ends. Returns the winner, `None` for a draw.
    pub fn run(&mut self) -> Result<Option<Player>, SearchError> {
        loop {
            let outcome = self.play()?;
            if !outcome.is_ongoing() {
                return Ok(outcome.winner());
            }
        }
    }

    /// Play `games` complete games, each from a fresh `initial_state()`.
    pub fn run_series<F>(&mut self, games: u32, mut initial_state: F) -> Result<SeriesReport, SearchError>
    where
        F: FnMut() -> G::State,
    {
        let mut report = SeriesReport::default();
        for _ in 0..games {
            self.initialize(initial_state());
            let winner = self.run()?;
            report.record(winner, self.total_moves());
        }
        Ok(report)
    }

    /// Number of states recorded so far, including the starting state.
    pub fn total_moves(&self) -> usize {
        self.history.len()
    }

    /// Current state.
    pub fn state(&self) -> &G::State {
        &self.state
    }

    /// Every state of the current game, oldest first.
    pub fn history(&self) -> &[G::State] {
        &self.history
    }

    /// Terminal check of the current state.
    pub fn outcome(&self) -> Outcome {
        G::winner(&self.state)
    }

    /// Legal moves from the current state, for move pickers.
    pub fn legal_moves(&self) -> Vec<G::Move> {
        G::list_moves(&self.state)
    }

    fn advance(&mut self, mover: Player, next: G::State) -> Outcome {
        self.history.push(next.clone());
        self.state = next;
        let outcome = G::winner(&self.state);
        debug!(
            player = %mover,
            total_moves = self.history.len(),
            ?outcome,
            "Ply complete"
        );
        outcome
    }
}

/// Tally of a series of games.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesReport {
    pub left_wins: u32,
    pub right_wins: u32,
    pub draws: u32,
    /// Sum of [`Simulation::total_moves`] over all games.
    pub total_moves: usize,
}

impl SeriesReport {
    fn record(&mut self, winner: Option<Player>, moves: usize) {
        match winner {
            Some(Player::Left) => self.left_wins += 1,
            Some(Player::Right) => self.right_wins += 1,
            None => self.draws += 1,
        }
        self.total_moves += moves;
    }

    pub fn games(&self) -> u32 {
        self.left_wins + self.right_wins + self.draws
    }

    /// Mean number of recorded states per game (0 for an empty series).
    pub fn average_moves(&self) -> f64 {
        match self.games() {
            0 => 0.0,
            n => self.total_moves as f64 / n as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{Nim, Pile, TakeOne, TakeTwo};

    #[test]
    fn test_new_records_initial_state() {
        let sim: Simulation<Nim, _, _> = Simulation::new(Pile::new(4, Player::Left), TakeOne, TakeOne);
        assert_eq!(sim.total_moves(), 1);
        assert_eq!(sim.state().stones, 4);
        assert_eq!(sim.outcome(), Outcome::Ongoing);
    }

    #[test]
    fn test_play_uses_side_to_move() {
        // Left takes one, right takes two.
        let mut sim: Simulation<Nim, _, _> = Simulation::new(Pile::new(6, Player::Right), TakeOne, TakeTwo);

        sim.play().unwrap();
        assert_eq!(sim.state().stones, 4);
        assert_eq!(sim.state().current_player(), Player::Left);

        sim.play().unwrap();
        assert_eq!(sim.state().stones, 3);
        assert_eq!(sim.total_moves(), 3);
    }

    #[test]
    fn test_run_reports_winner_and_history() {
        // 3 stones, both take one: L, R, L -> left takes the last stone.
        let mut sim: Simulation<Nim, _, _> = Simulation::new(Pile::new(3, Player::Left), TakeOne, TakeOne);
        let winner = sim.run().unwrap();

        assert_eq!(winner, Some(Player::Left));
        assert_eq!(sim.total_moves(), 4);
        let stones: Vec<u8> = sim.history().iter().map(|s| s.stones).collect();
        assert_eq!(stones, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_play_after_game_over_fails() {
        let mut sim: Simulation<Nim, _, _> = Simulation::new(Pile::new(1, Player::Left), TakeOne, TakeOne);
        assert_eq!(sim.play().unwrap(), Outcome::Won(Player::Left));

        let err = sim.play().unwrap_err();
        assert!(matches!(err, SearchError::TerminalState));
        assert_eq!(sim.total_moves(), 2);
    }

    #[test]
    fn test_apply_explicit_move() {
        let mut sim: Simulation<Nim, _, _> = Simulation::new(Pile::new(5, Player::Left), TakeOne, TakeOne);
        assert_eq!(sim.legal_moves(), vec![1, 2]);

        let outcome = sim.apply(&2).unwrap();
        assert_eq!(outcome, Outcome::Ongoing);
        assert_eq!(sim.state().stones, 3);
        assert_eq!(sim.state().current_player(), Player::Right);
        assert_eq!(sim.total_moves(), 2);
    }

    #[test]
    fn test_apply_rejects_illegal_move() {
        let mut sim: Simulation<Nim, _, _> = Simulation::new(Pile::new(5, Player::Left), TakeOne, TakeOne);
        let err = sim.apply(&3).unwrap_err();
        assert!(matches!(err, SearchError::IllegalMove(_)));
        // nothing recorded
        assert_eq!(sim.total_moves(), 1);
    }

    #[test]
    fn test_initialize_resets_history() {
        let mut sim: Simulation<Nim, _, _> = Simulation::new(Pile::new(3, Player::Left), TakeOne, TakeOne);
        sim.run().unwrap();
        assert!(sim.total_moves() > 1);

        sim.initialize(Pile::new(7, Player::Right));
        assert_eq!(sim.total_moves(), 1);
        assert_eq!(sim.state().stones, 7);
        assert_eq!(sim.history().len(), 1);
    }

    #[test]
    fn test_run_series_tallies_games() {
        let mut sim: Simulation<Nim, _, _> = Simulation::new(Pile::new(3, Player::Left), TakeOne, TakeOne);
        let mut openers = [Player::Left, Player::Right].into_iter().cycle();

        let report = sim
            .run_series(4, || Pile::new(3, openers.next().unwrap()))
            .unwrap();

        // With 3 stones and single takes, whoever opens also finishes.
        assert_eq!(report.left_wins, 2);
        assert_eq!(report.right_wins, 2);
        assert_eq!(report.draws, 0);
        assert_eq!(report.games(), 4);
        assert_eq!(report.total_moves, 16);
        assert!((report.average_moves() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_series_average() {
        assert_eq!(SeriesReport::default().average_moves(), 0.0);
    }
}
