//! Baseline decision algorithms for `engine-core` games.
//!
//! - [`MinMax`]: depth-bounded minimax with alpha-beta pruning
//! - [`RandomPlay`]: one step of the game's simulation policy
//!
//! Both implement [`engine_core::Algorithm`] for every game, so they can sit
//! on either side of a [`engine_core::Simulation`] opposite MCTS.

pub mod minimax;
pub mod random_play;

pub use minimax::MinMax;
pub use random_play::RandomPlay;
