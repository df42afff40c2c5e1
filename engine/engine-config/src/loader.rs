//! Configuration loading logic.
//!
//! Handles loading config from files and applying environment variable overrides.

use crate::CentralConfig;
use std::path::Path;
use tracing::{debug, info, warn};

/// Standard locations to search for config.toml
pub const CONFIG_SEARCH_PATHS: &[&str] = &[
    "config.toml",    // Current directory
    "../config.toml", // Parent directory (when running from a crate directory)
];

/// Load the central configuration from config.toml.
///
/// Searches for config.toml in the following order:
/// 1. Path specified by the GAMBIT_CONFIG environment variable
/// 2. Current directory (config.toml)
/// 3. Parent directory (../config.toml)
///
/// After loading, environment variable overrides are applied.
pub fn load_config() -> CentralConfig {
    if let Ok(path) = std::env::var("GAMBIT_CONFIG") {
        let path = Path::new(&path);
        if path.exists() {
            info!("Loading config from GAMBIT_CONFIG: {}", path.display());
            return load_from_path(path);
        }
        warn!(
            "GAMBIT_CONFIG={} not found, searching defaults",
            path.display()
        );
    }

    for path_str in CONFIG_SEARCH_PATHS {
        let path = Path::new(path_str);
        if path.exists() {
            info!("Loading config from {}", path.display());
            return load_from_path(path);
        }
    }

    debug!("No config.toml found, using built-in defaults");
    apply_env_overrides(CentralConfig::default())
}

/// Load configuration from a specific path.
///
/// A file that cannot be read or parsed is reported and replaced by the
/// built-in defaults.
pub fn load_from_path(path: &Path) -> CentralConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => apply_env_overrides(config),
            Err(e) => {
                warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                apply_env_overrides(CentralConfig::default())
            }
        },
        Err(e) => {
            warn!("Failed to read {}: {}, using defaults", path.display(), e);
            apply_env_overrides(CentralConfig::default())
        }
    }
}

/// Macro to reduce env override boilerplate
macro_rules! env_override {
    // String field
    ($config:expr, $section:ident . $field:ident, $key:expr) => {
        if let Ok(v) = std::env::var($key) {
            $config.$section.$field = v;
        }
    };
    // Parseable field (u32, u64, f64, etc.)
    ($config:expr, $section:ident . $field:ident, $key:expr, parse) => {
        match std::env::var($key).map(|s| s.parse()) {
            Ok(Ok(v)) => $config.$section.$field = v,
            Ok(Err(_)) => warn!("Ignoring {}: not a valid value", $key),
            Err(_) => {}
        }
    };
}

/// Apply environment variable overrides to a configuration.
///
/// Environment variables follow the pattern: GAMBIT_<SECTION>_<KEY>
pub fn apply_env_overrides(mut config: CentralConfig) -> CentralConfig {
    // Common
    env_override!(config, common.log_level, "GAMBIT_COMMON_LOG_LEVEL");
    env_override!(config, common.game, "GAMBIT_COMMON_GAME");

    // MCTS
    env_override!(
        config,
        mcts.max_iterations,
        "GAMBIT_MCTS_MAX_ITERATIONS",
        parse
    );
    env_override!(config, mcts.max_time_ms, "GAMBIT_MCTS_MAX_TIME_MS", parse);
    env_override!(config, mcts.exploration, "GAMBIT_MCTS_EXPLORATION", parse);
    env_override!(config, mcts.threads, "GAMBIT_MCTS_THREADS", parse);
    env_override!(
        config,
        mcts.max_rollout_plies,
        "GAMBIT_MCTS_MAX_ROLLOUT_PLIES",
        parse
    );

    // Minimax
    env_override!(config, minimax.max_depth, "GAMBIT_MINIMAX_MAX_DEPTH", parse);

    // Arena
    env_override!(config, arena.games, "GAMBIT_ARENA_GAMES", parse);
    env_override!(config, arena.left, "GAMBIT_ARENA_LEFT");
    env_override!(config, arena.right, "GAMBIT_ARENA_RIGHT");
    env_override!(config, arena.first_player, "GAMBIT_ARENA_FIRST_PLAYER");

    config
}
