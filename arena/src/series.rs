//! Game selection and match-series driver.

use std::str::FromStr;
use std::time::Instant;

use anyhow::{anyhow, Result};
use engine_core::{Game, Player, SeriesReport, Simulation};
use games_connect4::Connect4;
use games_morris::NineMenMorris;
use games_tictactoe::TicTacToe;
use tracing::info;

use crate::contender::Contender;

/// Games the arena can host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    TicTacToe,
    Connect4,
    Morris,
}

impl FromStr for GameKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "tictactoe" => Ok(Self::TicTacToe),
            "connect4" => Ok(Self::Connect4),
            "morris" => Ok(Self::Morris),
            other => Err(anyhow!(
                "unknown game '{other}', expected one of tictactoe, connect4, morris"
            )),
        }
    }
}

/// Rule for choosing who opens each game of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstPlayer {
    Random,
    Fixed(Player),
}

impl FirstPlayer {
    pub fn pick(self) -> Player {
        match self {
            Self::Random => Player::random(&mut rand::thread_rng()),
            Self::Fixed(player) => player,
        }
    }
}

impl FromStr for FirstPlayer {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "random" => Ok(Self::Random),
            "left" => Ok(Self::Fixed(Player::Left)),
            "right" => Ok(Self::Fixed(Player::Right)),
            other => Err(anyhow!(
                "unknown first player '{other}', expected one of random, left, right"
            )),
        }
    }
}

/// Play `games` games of `kind` between `left` and `right`.
pub fn run(
    kind: GameKind,
    games: u32,
    first: FirstPlayer,
    left: Contender,
    right: Contender,
) -> Result<SeriesReport> {
    match kind {
        GameKind::TicTacToe => play_series::<TicTacToe, _>(games, left, right, || {
            games_tictactoe::State::new(first.pick())
        }),
        GameKind::Connect4 => play_series::<Connect4, _>(games, left, right, || {
            games_connect4::State::new(first.pick())
        }),
        GameKind::Morris => play_series::<NineMenMorris, _>(games, left, right, || {
            games_morris::State::new(first.pick())
        }),
    }
}

fn play_series<G, F>(
    games: u32,
    left: Contender,
    right: Contender,
    mut initial: F,
) -> Result<SeriesReport>
where
    G: Game,
    F: FnMut() -> G::State,
{
    let left_name = left.name();
    let right_name = right.name();
    let start = Instant::now();

    let mut simulation = Simulation::<G, _, _>::new(initial(), left, right);
    let report = simulation.run_series(games, &mut initial)?;

    info!(
        left = left_name,
        right = right_name,
        games = report.games(),
        left_wins = report.left_wins,
        right_wins = report.right_wins,
        draws = report.draws,
        average_moves = report.average_moves(),
        elapsed_secs = start.elapsed().as_secs_f64(),
        "Series complete"
    );
    Ok(report)
}
