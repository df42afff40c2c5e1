//! MCTS tree node representation.
//!
//! Each node represents a game state reached by one move from its parent.
//! Nodes store the running mean value and visit count used for UCB1 selection
//! and for the final visit-count vote.

/// Index into the node arena. Using a newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const NONE: NodeId = NodeId(u32::MAX);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    pub fn is_some(self) -> bool {
        !self.is_none()
    }
}

/// A node in the MCTS tree.
#[derive(Debug, Clone)]
pub struct MctsNode<S> {
    /// Parent node index (NONE for root). Only used to walk upwards.
    pub parent: NodeId,

    /// Game state at this node
    pub state: S,

    /// Mean of every value backed up through this node.
    pub q: f64,

    /// Number of times this node has been visited
    pub visit_count: u32,

    /// Children in move enumeration order.
    /// Empty until the node is expanded, and forever for terminal states.
    pub children: Vec<NodeId>,
}

impl<S> MctsNode<S> {
    /// Create a new root node.
    pub fn new_root(state: S) -> Self {
        Self::new_child(NodeId::NONE, state)
    }

    /// Create a new child node.
    pub fn new_child(parent: NodeId, state: S) -> Self {
        Self {
            parent,
            state,
            q: 0.0,
            visit_count: 0,
            children: Vec::new(),
        }
    }

    /// Record one backed-up value.
    ///
    /// Cumulative moving average: after `n` updates `q` is the mean of the
    /// `n` values.
    #[inline]
    pub fn update(&mut self, value: f64) {
        self.visit_count += 1;
        self.q += (value - self.q) / self.visit_count as f64;
    }

    /// Exploration bonus `c * sqrt(2 ln N_parent / N)`.
    ///
    /// An unvisited node gets `+inf` so every child is tried once before
    /// values are compared.
    #[inline]
    pub fn exploration(&self, parent_visits: u32, c: f64) -> f64 {
        if self.visit_count == 0 {
            return f64::INFINITY;
        }
        debug_assert!(
            parent_visits > 0,
            "visited child below an unvisited parent"
        );
        c * (2.0 * (parent_visits as f64).ln() / self.visit_count as f64).sqrt()
    }

    /// UCB1 score used during selection.
    #[inline]
    pub fn ucb_score(&self, parent_visits: u32, c: f64) -> f64 {
        self.q + self.exploration(parent_visits, c)
    }

    /// Check if this node has been expanded (has children).
    #[inline]
    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }

    /// Check if this is a leaf of the current tree.
    /// Not necessarily terminal in the game.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_none() {
        assert!(NodeId::NONE.is_none());
        assert!(!NodeId::NONE.is_some());
        assert!(!NodeId(0).is_none());
        assert!(NodeId(0).is_some());
    }

    #[test]
    fn test_new_root() {
        let node = MctsNode::new_root(7u8);

        assert!(node.parent.is_none());
        assert_eq!(node.visit_count, 0);
        assert_eq!(node.q, 0.0);
        assert!(node.children.is_empty());
        assert_eq!(node.state, 7);
    }

    #[test]
    fn test_update_is_running_mean() {
        let mut node = MctsNode::new_root(());
        let values = [1.0, 0.0, 0.5, 1.0, 1.0, 0.0, 0.5];

        for (n, &value) in values.iter().enumerate() {
            node.update(value);
            let expected: f64 = values[..=n].iter().sum::<f64>() / (n + 1) as f64;
            assert!((node.q - expected).abs() < 1e-12);
        }
        assert_eq!(node.visit_count, values.len() as u32);
    }

    #[test]
    fn test_unvisited_exploration_is_infinite() {
        let node = MctsNode::new_root(());
        assert_eq!(node.exploration(10, 1.0), f64::INFINITY);
        // q does not matter for an unvisited node
        assert_eq!(node.ucb_score(10, 1.0), f64::INFINITY);
    }

    #[test]
    fn test_ucb_score() {
        let mut node = MctsNode::new_root(());
        node.update(1.0);
        node.update(0.0);
        node.update(0.5);
        node.update(0.5); // q = 0.5, N = 4

        // UCB = 0.5 + 1.0 * sqrt(2 * ln(100) / 4) = 0.5 + 1.5174...
        let ucb = node.ucb_score(100, 1.0);
        let expected = 0.5 + (2.0 * 100f64.ln() / 4.0).sqrt();
        assert!((ucb - expected).abs() < 1e-12);
        assert!((ucb - 2.0174).abs() < 1e-3);
    }

    #[test]
    fn test_exploration_with_single_parent_visit() {
        let mut node = MctsNode::new_root(());
        node.update(1.0);
        // ln(1) = 0, so no bonus
        assert_eq!(node.exploration(1, 2.0), 0.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "unvisited parent")]
    fn test_visited_child_requires_visited_parent() {
        let mut node = MctsNode::new_root(());
        node.update(0.5);
        node.exploration(0, 1.0);
    }

    #[test]
    fn test_is_leaf() {
        let mut node = MctsNode::new_root(());
        assert!(node.is_leaf());
        assert!(!node.is_expanded());

        node.children.push(NodeId(1));
        assert!(!node.is_leaf());
        assert!(node.is_expanded());
    }
}
