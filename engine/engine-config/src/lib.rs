//! Centralized configuration loading from config.toml.
//!
//! This crate provides the configuration structs and loading logic shared by
//! the gambit binaries.
//!
//! # Configuration Priority
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Environment variables (`GAMBIT_<SECTION>_<KEY>`)
//! 2. config.toml file
//! 3. Built-in defaults (`config.defaults.toml`, embedded at compile time)
//!
//! Command-line flags of a binary sit above all of these.
//!
//! # Environment Variable Override Pattern
//!
//! ```text
//! GAMBIT_<SECTION>_<KEY>=value
//!
//! Examples:
//!     GAMBIT_COMMON_GAME=connect4
//!     GAMBIT_MCTS_THREADS=8
//!     GAMBIT_MCTS_MAX_ITERATIONS=5000
//!     GAMBIT_ARENA_LEFT=minimax
//! ```

mod defaults;
mod loader;
mod structs;

pub use defaults::*;
pub use loader::{apply_env_overrides, load_config, load_from_path, CONFIG_SEARCH_PATHS};
pub use structs::*;
