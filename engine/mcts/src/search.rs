//! Single-replica MCTS search.
//!
//! Implements the core MCTS loop over one tree:
//! 1. Selection: descend with UCB1 until a node without children
//! 2. Expansion: add one child per legal move of a non-terminal leaf
//! 3. Simulation: roll out from the leaf with the game's simulation policy
//! 4. Backpropagation: update statistics along the path to the root
//!
//! A replica owns its tree and its random generator. Nothing is shared with
//! other replicas while the loop runs.

use std::marker::PhantomData;
use std::time::Instant;

use engine_core::{Game, SearchError, StateValue};
use rand_chacha::ChaCha20Rng;
use tracing::trace;

use crate::config::MctsConfig;
use crate::node::NodeId;
use crate::tree::MctsTree;

/// MCTS search state for one replica.
pub struct MctsSearch<G: Game> {
    tree: MctsTree<G::State>,
    config: MctsConfig,
    _game: PhantomData<fn() -> G>,
}

impl<G: Game> MctsSearch<G> {
    /// Create a new MCTS search rooted at `state`.
    pub fn new(state: G::State, config: MctsConfig) -> Self {
        Self {
            tree: MctsTree::new(state),
            config,
            _game: PhantomData,
        }
    }

    /// Run the search until the iteration or time budget is spent.
    ///
    /// The root is expanded once before the loop, so even a zero-iteration
    /// search returns a root with one child per legal move. Fails with
    /// [`SearchError::TerminalState`] if the root is already finished and
    /// with [`SearchError::NoLegalMoves`] if an ongoing state offers no move.
    pub fn run(mut self, rng: &mut ChaCha20Rng) -> Result<MctsTree<G::State>, SearchError> {
        let started = Instant::now();
        let root = self.tree.root();

        if !G::state_value(&self.tree.get(root).state, 0).ongoing {
            return Err(SearchError::TerminalState);
        }
        self.expand(root)?;

        let budget = self.config.time_budget();
        let mut iterations = 0u32;
        while iterations < self.config.max_iterations && started.elapsed() < budget {
            self.iterate(rng)?;
            iterations += 1;
        }

        let stats = self.tree.stats();
        trace!(
            iterations,
            elapsed_ms = started.elapsed().as_millis() as u64,
            nodes = stats.total_nodes,
            root_visits = stats.root_visits,
            root_value = stats.root_value,
            max_depth = stats.max_depth,
            "MCTS replica finished"
        );

        Ok(self.tree)
    }

    /// One select -> expand -> simulate -> backpropagate pass.
    fn iterate(&mut self, rng: &mut ChaCha20Rng) -> Result<(), SearchError> {
        let (leaf_id, depth) = self.select();

        if G::state_value(&self.tree.get(leaf_id).state, depth).ongoing {
            self.expand(leaf_id)?;
        }

        let value = self.simulate(leaf_id, depth, rng)?;
        self.tree.backpropagate(leaf_id, &value.values);

        trace!(
            leaf = leaf_id.0,
            depth,
            left = value.values[0],
            right = value.values[1],
            "MCTS iteration complete"
        );

        Ok(())
    }

    /// Descend from the root to the first node without children.
    /// Returns the leaf and its distance from the root.
    fn select(&self) -> (NodeId, u32) {
        let mut current = self.tree.root();
        let mut depth = 0;

        while let Some(child_id) = self.tree.select_child(current, self.config.exploration) {
            current = child_id;
            depth += 1;
        }

        (current, depth)
    }

    /// Add one child per legal move, in enumeration order.
    fn expand(&mut self, node_id: NodeId) -> Result<(), SearchError> {
        let state = self.tree.get(node_id).state.clone();
        let moves = G::list_moves(&state);
        if moves.is_empty() {
            return Err(SearchError::NoLegalMoves);
        }

        for mv in &moves {
            self.tree.add_child(node_id, G::apply_move(&state, mv));
        }
        Ok(())
    }

    /// Play the simulation policy from the node's state until the game ends
    /// or the rollout cap is reached, then evaluate.
    fn simulate(
        &self,
        node_id: NodeId,
        depth: u32,
        rng: &mut ChaCha20Rng,
    ) -> Result<StateValue, SearchError> {
        let mut state = self.tree.get(node_id).state.clone();
        let mut plies = 0u32;

        loop {
            let value = G::state_value(&state, depth + plies);
            let capped = self
                .config
                .max_rollout_plies
                .is_some_and(|cap| plies >= cap);
            if !value.ongoing || capped {
                return Ok(value);
            }

            state = G::simulation_policy(&state, rng).ok_or(SearchError::NoLegalMoves)?;
            plies += 1;
        }
    }
}
