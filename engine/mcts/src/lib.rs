//! Monte Carlo Tree Search (MCTS) over any `engine-core` game.
//!
//! # Overview
//!
//! Each search replica builds a tree by running iterations of four phases:
//!
//! 1. **Selection**: descend from the root using UCB1,
//!    `q + c * sqrt(2 ln N_parent / N)`, where an unvisited child scores
//!    `+inf` and ties keep the earliest child
//! 2. **Expansion**: give a non-terminal leaf one child per legal move
//! 3. **Simulation**: play the game's simulation policy from the leaf until
//!    the game ends
//! 4. **Backpropagation**: update each node on the path with the value of
//!    the player whose move led to it
//!
//! The root is expanded once before the loop, so a search with a zero
//! budget still has one child per legal move.
//!
//! [`MonteCarloTreeSearch`] runs several replicas on scoped threads with
//! independent seeds and combines them with a root-level vote: visit counts
//! are summed per child position and the largest total wins, with exact ties
//! settled by a fair coin flip. Trees never outlive the call.
//!
//! # Usage
//!
//! ```rust
//! use engine_core::{Algorithm, Player};
//! use games_tictactoe::{State, TicTacToe};
//! use mcts::{MctsConfig, MonteCarloTreeSearch};
//!
//! let mut mcts = MonteCarloTreeSearch::new(MctsConfig::new(200).with_threads(2));
//! let start = State::new(Player::Left);
//! let next = Algorithm::<TicTacToe>::compute(&mut mcts, &start).unwrap();
//! assert_eq!(next.current_player, Player::Right);
//! ```
//!
//! # Configuration
//!
//! The [`MctsConfig`] struct controls search behavior:
//!
//! - `max_iterations`: iterations per replica (default: 100)
//! - `max_time_ms`: wall-clock budget per replica (default: unbounded)
//! - `exploration`: UCB1 exploration constant `c` (default: 1.0)
//! - `threads`: replica count, 0 for hardware parallelism (default: 0)
//! - `max_rollout_plies`: optional rollout length cap (default: none)

pub mod config;
pub mod node;
pub mod parallel;
pub mod search;
pub mod tree;
pub mod vote;

// Re-export main types
pub use config::MctsConfig;
pub use node::{MctsNode, NodeId};
pub use parallel::MonteCarloTreeSearch;
pub use search::MctsSearch;
pub use tree::{MctsTree, TreeStats};
pub use vote::{pick_most_visited, tally};
