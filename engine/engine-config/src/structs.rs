//! Configuration struct definitions.
//!
//! All config structs with serde deserialization support and default values.

use crate::defaults;
use serde::Deserialize;

// ============================================================================
// Serde default functions (required for #[serde(default = "...")])
// These call the accessor functions from defaults module
// ============================================================================

fn d_log_level() -> String {
    defaults::log_level().into()
}
fn d_game() -> String {
    defaults::game().into()
}
fn d_max_iterations() -> u32 {
    defaults::max_iterations()
}
fn d_max_time_ms() -> u64 {
    defaults::max_time_ms()
}
fn d_exploration() -> f64 {
    defaults::exploration()
}
fn d_threads() -> usize {
    defaults::threads()
}
fn d_max_rollout_plies() -> u32 {
    defaults::max_rollout_plies()
}
fn d_max_depth() -> u32 {
    defaults::max_depth()
}
fn d_games() -> u32 {
    defaults::games()
}
fn d_left() -> String {
    defaults::left().into()
}
fn d_right() -> String {
    defaults::right().into()
}
fn d_first_player() -> String {
    defaults::first_player().into()
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Root configuration structure matching config.toml
#[derive(Debug, Deserialize, Default, Clone)]
pub struct CentralConfig {
    #[serde(default)]
    pub common: CommonConfig,
    #[serde(default)]
    pub mcts: MctsConfig,
    #[serde(default)]
    pub minimax: MinimaxConfig,
    #[serde(default)]
    pub arena: ArenaConfig,
}

/// Common configuration shared by all components
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CommonConfig {
    #[serde(default = "d_log_level")]
    pub log_level: String,
    /// Game to play: tictactoe, connect4 or morris
    #[serde(default = "d_game")]
    pub game: String,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::log_level().into(),
            game: defaults::game().into(),
        }
    }
}

/// MCTS (Monte Carlo Tree Search) configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MctsConfig {
    #[serde(default = "d_max_iterations")]
    pub max_iterations: u32,
    /// Per-replica time budget in milliseconds (0 = unbounded)
    #[serde(default = "d_max_time_ms")]
    pub max_time_ms: u64,
    #[serde(default = "d_exploration")]
    pub exploration: f64,
    /// Replica count (0 = hardware parallelism)
    #[serde(default = "d_threads")]
    pub threads: usize,
    /// Rollout length cap (0 = unbounded)
    #[serde(default = "d_max_rollout_plies")]
    pub max_rollout_plies: u32,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            max_iterations: defaults::max_iterations(),
            max_time_ms: defaults::max_time_ms(),
            exploration: defaults::exploration(),
            threads: defaults::threads(),
            max_rollout_plies: defaults::max_rollout_plies(),
        }
    }
}

/// Minimax configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MinimaxConfig {
    #[serde(default = "d_max_depth")]
    pub max_depth: u32,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self {
            max_depth: defaults::max_depth(),
        }
    }
}

/// Match series configuration for the arena binary
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ArenaConfig {
    /// Number of games in the series
    #[serde(default = "d_games")]
    pub games: u32,
    /// Algorithm playing Left: mcts, minimax or random
    #[serde(default = "d_left")]
    pub left: String,
    /// Algorithm playing Right: mcts, minimax or random
    #[serde(default = "d_right")]
    pub right: String,
    /// Who opens each game: random, left or right
    #[serde(default = "d_first_player")]
    pub first_player: String,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            games: defaults::games(),
            left: defaults::left().into(),
            right: defaults::right().into(),
            first_player: defaults::first_player().into(),
        }
    }
}
