//! Configuration for the arena binary
//!
//! Configuration is loaded from config.toml with environment variable overrides.
//! CLI arguments take highest priority, followed by env vars, then config.toml.

use anyhow::{anyhow, Result};
use clap::Parser;
use engine_config::{load_config, CentralConfig};
use mcts::MctsConfig;
use once_cell::sync::Lazy;
use tracing::level_filters::LevelFilter;

use crate::contender::ContenderKind;
use crate::series::{FirstPlayer, GameKind};

/// Deepest minimax search accepted for nine men's morris.
pub const MORRIS_MINIMAX_DEPTH_LIMIT: u32 = 8;

// Load central config once at startup
static CENTRAL_CONFIG: Lazy<CentralConfig> = Lazy::new(load_config);

fn default_game() -> String {
    CENTRAL_CONFIG.common.game.clone()
}

fn default_log_level() -> String {
    CENTRAL_CONFIG.common.log_level.clone()
}

fn default_games() -> u32 {
    CENTRAL_CONFIG.arena.games
}

fn default_left() -> String {
    CENTRAL_CONFIG.arena.left.clone()
}

fn default_right() -> String {
    CENTRAL_CONFIG.arena.right.clone()
}

fn default_first_player() -> String {
    CENTRAL_CONFIG.arena.first_player.clone()
}

fn default_iterations() -> u32 {
    CENTRAL_CONFIG.mcts.max_iterations
}

fn default_time_ms() -> u64 {
    CENTRAL_CONFIG.mcts.max_time_ms
}

fn default_exploration() -> f64 {
    CENTRAL_CONFIG.mcts.exploration
}

fn default_threads() -> usize {
    CENTRAL_CONFIG.mcts.threads
}

fn default_rollout_plies() -> u32 {
    CENTRAL_CONFIG.mcts.max_rollout_plies
}

fn default_max_depth() -> u32 {
    CENTRAL_CONFIG.minimax.max_depth
}

#[derive(Parser, Debug, Clone)]
#[command(name = "arena")]
#[command(about = "Gambit arena - plays search algorithms against each other")]
#[command(
    long_about = "Plays a series of games between two decision algorithms and logs
how many games each side won.

Configuration is loaded from config.toml with GAMBIT_* environment variable
overrides. CLI arguments take highest priority."
)]
pub struct Config {
    /// Game to play (tictactoe, connect4, morris)
    #[arg(long, default_value_t = default_game())]
    pub game: String,

    /// Number of games in the series
    #[arg(long, default_value_t = default_games())]
    pub games: u32,

    /// Algorithm playing Left (mcts, minimax, random)
    #[arg(long, default_value_t = default_left())]
    pub left: String,

    /// Algorithm playing Right (mcts, minimax, random)
    #[arg(long, default_value_t = default_right())]
    pub right: String,

    /// Who opens each game (random, left, right)
    #[arg(long, default_value_t = default_first_player())]
    pub first_player: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value_t = default_log_level())]
    pub log_level: String,

    /// MCTS iterations per replica and move
    #[arg(long, default_value_t = default_iterations())]
    pub max_iterations: u32,

    /// MCTS time budget per replica and move in milliseconds (0 for unbounded)
    #[arg(long, default_value_t = default_time_ms())]
    pub max_time_ms: u64,

    /// MCTS exploration constant
    #[arg(long, default_value_t = default_exploration())]
    pub exploration: f64,

    /// MCTS replicas (0 for one per hardware thread)
    #[arg(long, default_value_t = default_threads())]
    pub threads: usize,

    /// Cap on MCTS rollout length in plies (0 to play rollouts out)
    #[arg(long, default_value_t = default_rollout_plies())]
    pub max_rollout_plies: u32,

    /// Minimax search depth
    #[arg(long, default_value_t = default_max_depth())]
    pub max_depth: u32,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.game_kind()?;
        self.left_kind()?;
        self.right_kind()?;
        self.first_player_rule()?;

        if self.games == 0 {
            return Err(anyhow!("games must be greater than 0"));
        }

        if !self.exploration.is_finite() || self.exploration < 0.0 {
            return Err(anyhow!(
                "exploration must be a non-negative number, got {}",
                self.exploration
            ));
        }

        if self.max_depth == 0 {
            return Err(anyhow!("max_depth must be greater than 0"));
        }

        // Morris has no draw rule, so its game tree is unbounded.
        let plays_minimax =
            [self.left_kind()?, self.right_kind()?].contains(&ContenderKind::MinMax);
        if plays_minimax
            && self.game_kind()? == GameKind::Morris
            && self.max_depth > MORRIS_MINIMAX_DEPTH_LIMIT
        {
            return Err(anyhow!(
                "max_depth {} is too deep for minimax on morris, use at most {}",
                self.max_depth,
                MORRIS_MINIMAX_DEPTH_LIMIT
            ));
        }

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        Ok(())
    }

    pub fn game_kind(&self) -> Result<GameKind> {
        self.game.parse()
    }

    pub fn left_kind(&self) -> Result<ContenderKind> {
        self.left.parse()
    }

    pub fn right_kind(&self) -> Result<ContenderKind> {
        self.right.parse()
    }

    pub fn first_player_rule(&self) -> Result<FirstPlayer> {
        self.first_player.parse()
    }

    /// Engine-level MCTS settings, with the 0 sentinels resolved.
    pub fn mcts_config(&self) -> MctsConfig {
        let mut config = MctsConfig::new(self.max_iterations)
            .with_exploration(self.exploration)
            .with_threads(self.threads);
        if self.max_time_ms > 0 {
            config = config.with_time_limit(self.max_time_ms);
        }
        if self.max_rollout_plies > 0 {
            config = config.with_max_rollout_plies(self.max_rollout_plies);
        }
        config
    }
}
