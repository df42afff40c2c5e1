//! Random rollout player: one step of the game's simulation policy.

use engine_core::{ensure_playable, Algorithm, Game, SearchError};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Plays whatever the game's simulation policy picks. No tree, no statistics.
#[derive(Debug, Clone)]
pub struct RandomPlay {
    rng: ChaCha20Rng,
}

impl RandomPlay {
    /// Seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: ChaCha20Rng::from_entropy(),
        }
    }

    /// Reproducible sequence of choices.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPlay {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Game> Algorithm<G> for RandomPlay {
    fn compute(&mut self, state: &G::State) -> Result<G::State, SearchError> {
        ensure_playable::<G>(state)?;
        G::simulation_policy(state, &mut self.rng).ok_or(SearchError::NoLegalMoves)
    }
}
