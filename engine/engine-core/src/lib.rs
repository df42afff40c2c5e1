//! Core traits and types for the gambit game-search engine
//!
//! This crate provides the fundamental abstractions shared by every algorithm
//! and every game:
//! - `Game`: stateless rules interface (list, apply, evaluate, roll out)
//! - `GameState`: a point in a game, carrying whose turn it is
//! - `Algorithm`: a decision procedure mapping a state to its successor
//! - `Simulation`: harness that plays two algorithms against each other

pub mod algorithm;
pub mod game_utils;
pub mod player;
pub mod simulation;
pub mod typed;

// Re-export main types for convenience
pub use algorithm::{ensure_playable, Algorithm, SearchError};
pub use game_utils::{choose_uniform, StateValue};
pub use player::{Outcome, Player};
pub use simulation::{SeriesReport, Simulation};
pub use typed::{Game, GameState};
