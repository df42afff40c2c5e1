//! Default configuration values loaded from config.defaults.toml.
//!
//! The file is embedded at compile time so every binary agrees on the
//! defaults without shipping the file alongside it.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// The embedded defaults TOML file (loaded at compile time)
const DEFAULTS_TOML: &str = include_str!("../../../config.defaults.toml");

/// Parsed defaults structure (parsed once at first use)
static DEFAULTS: Lazy<DefaultsConfig> = Lazy::new(|| {
    toml::from_str(DEFAULTS_TOML).expect("config.defaults.toml should be valid TOML")
});

// ============================================================================
// Internal structs for parsing config.defaults.toml
// ============================================================================

#[derive(Debug, Deserialize)]
struct DefaultsConfig {
    common: CommonDefaults,
    mcts: MctsDefaults,
    minimax: MinimaxDefaults,
    arena: ArenaDefaults,
}

#[derive(Debug, Deserialize)]
struct CommonDefaults {
    log_level: String,
    game: String,
}

#[derive(Debug, Deserialize)]
struct MctsDefaults {
    max_iterations: u32,
    max_time_ms: u64,
    exploration: f64,
    threads: usize,
    max_rollout_plies: u32,
}

#[derive(Debug, Deserialize)]
struct MinimaxDefaults {
    max_depth: u32,
}

#[derive(Debug, Deserialize)]
struct ArenaDefaults {
    games: u32,
    left: String,
    right: String,
    first_player: String,
}

// ============================================================================
// Public accessor functions
// ============================================================================

// Common
pub fn log_level() -> &'static str {
    &DEFAULTS.common.log_level
}
pub fn game() -> &'static str {
    &DEFAULTS.common.game
}

// MCTS
pub fn max_iterations() -> u32 {
    DEFAULTS.mcts.max_iterations
}
pub fn max_time_ms() -> u64 {
    DEFAULTS.mcts.max_time_ms
}
pub fn exploration() -> f64 {
    DEFAULTS.mcts.exploration
}
pub fn threads() -> usize {
    DEFAULTS.mcts.threads
}
pub fn max_rollout_plies() -> u32 {
    DEFAULTS.mcts.max_rollout_plies
}

// Minimax
pub fn max_depth() -> u32 {
    DEFAULTS.minimax.max_depth
}

// Arena
pub fn games() -> u32 {
    DEFAULTS.arena.games
}
pub fn left() -> &'static str {
    &DEFAULTS.arena.left
}
pub fn right() -> &'static str {
    &DEFAULTS.arena.right
}
pub fn first_player() -> &'static str {
    &DEFAULTS.arena.first_player
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse() {
        // Just accessing these will verify the TOML parses correctly
        assert_eq!(log_level(), "info");
        assert_eq!(game(), "tictactoe");
    }

    #[test]
    fn test_mcts_defaults() {
        assert_eq!(max_iterations(), 1000);
        assert_eq!(max_time_ms(), 0);
        assert!((exploration() - 1.0).abs() < f64::EPSILON);
        assert_eq!(threads(), 0);
        assert_eq!(max_rollout_plies(), 0);
    }

    #[test]
    fn test_minimax_defaults() {
        assert_eq!(max_depth(), u32::MAX);
    }

    #[test]
    fn test_arena_defaults() {
        assert_eq!(games(), 100);
        assert_eq!(left(), "mcts");
        assert_eq!(right(), "mcts");
        assert_eq!(first_player(), "random");
    }
}
