//! Algorithms selectable by name at the process boundary.

use std::str::FromStr;

use anyhow::{anyhow, Result};
use baselines::{MinMax, RandomPlay};
use engine_core::{Algorithm, Game, SearchError};
use mcts::MonteCarloTreeSearch;

use crate::config::Config;

/// Algorithm names accepted on the command line and in config.toml.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContenderKind {
    Mcts,
    MinMax,
    Random,
}

impl FromStr for ContenderKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "mcts" => Ok(Self::Mcts),
            "minimax" => Ok(Self::MinMax),
            "random" => Ok(Self::Random),
            other => Err(anyhow!(
                "unknown algorithm '{other}', expected one of mcts, minimax, random"
            )),
        }
    }
}

/// One side of a match. Dispatches to the concrete algorithm, whose search
/// stays monomorphised per game.
#[derive(Debug, Clone)]
pub enum Contender {
    Mcts(MonteCarloTreeSearch),
    MinMax(MinMax),
    Random(RandomPlay),
}

impl Contender {
    pub fn build(kind: ContenderKind, config: &Config) -> Self {
        match kind {
            ContenderKind::Mcts => Self::Mcts(MonteCarloTreeSearch::new(config.mcts_config())),
            ContenderKind::MinMax => Self::MinMax(MinMax::new(config.max_depth)),
            ContenderKind::Random => Self::Random(RandomPlay::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Mcts(_) => "mcts",
            Self::MinMax(_) => "minimax",
            Self::Random(_) => "random",
        }
    }
}

impl<G: Game> Algorithm<G> for Contender {
    fn compute(&mut self, state: &G::State) -> Result<G::State, SearchError> {
        match self {
            Self::Mcts(search) => search.search::<G>(state),
            Self::MinMax(search) => search.search::<G>(state),
            Self::Random(player) => Algorithm::<G>::compute(player, state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::{GameState, Player};
    use games_tictactoe::{State, TicTacToe};

    #[test]
    fn test_parse_kinds() {
        assert_eq!("mcts".parse::<ContenderKind>().unwrap(), ContenderKind::Mcts);
        assert_eq!(
            "minimax".parse::<ContenderKind>().unwrap(),
            ContenderKind::MinMax
        );
        assert_eq!(
            "random".parse::<ContenderKind>().unwrap(),
            ContenderKind::Random
        );
        assert!("MCTS".parse::<ContenderKind>().is_err());
    }

    #[test]
    fn test_every_contender_plays_a_legal_move() {
        let state = State::new(Player::Left);
        let contenders = [
            Contender::Mcts(MonteCarloTreeSearch::new(mcts::MctsConfig::for_testing())),
            Contender::MinMax(MinMax::new(2)),
            Contender::Random(RandomPlay::with_seed(3)),
        ];

        for mut contender in contenders {
            let next = Algorithm::<TicTacToe>::compute(&mut contender, &state).unwrap();
            let placed = next.board.iter().filter(|cell| cell.is_some()).count();
            assert_eq!(placed, 1, "{}", contender.name());
            assert_eq!(next.current_player(), Player::Right);
        }
    }

    #[test]
    fn test_terminal_state_is_rejected() {
        // X X X on the top row
        let state = [0, 3, 1, 4, 2]
            .iter()
            .fold(State::new(Player::Left), |state, &cell| state.make_move(cell));
        let mut contender = Contender::Random(RandomPlay::with_seed(1));
        let result = Algorithm::<TicTacToe>::compute(&mut contender, &state);
        assert!(matches!(result, Err(SearchError::TerminalState)));
    }
}
