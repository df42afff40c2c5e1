//! MCTS tree structure with arena allocation.
//!
//! The tree uses arena allocation for efficient node storage and
//! cache-friendly traversal. Nodes are stored in a contiguous Vec
//! and referenced by NodeId indices. Parent links are plain indices, so the
//! whole tree is released at once when the arena is dropped.

use engine_core::GameState;

use crate::node::{MctsNode, NodeId};

/// MCTS tree with arena-based node storage.
#[derive(Debug, Clone)]
pub struct MctsTree<S> {
    /// Arena storing all nodes
    nodes: Vec<MctsNode<S>>,

    /// Root node index (always 0 after initialization)
    root: NodeId,
}

impl<S> MctsTree<S> {
    /// Create a new tree holding only the root state.
    pub fn new(root_state: S) -> Self {
        Self {
            nodes: vec![MctsNode::new_root(root_state)],
            root: NodeId(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a reference to a node by ID.
    #[inline]
    pub fn get(&self, id: NodeId) -> &MctsNode<S> {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable reference to a node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MctsNode<S> {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node and return its ID.
    pub fn allocate(&mut self, node: MctsNode<S>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get the total number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty (should never be true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the arena slice for read access.
    #[inline]
    pub fn arena(&self) -> &[MctsNode<S>] {
        &self.nodes
    }

    /// Children of the root, in move enumeration order.
    #[inline]
    pub fn root_children(&self) -> &[NodeId] {
        &self.get(self.root).children
    }

    /// Visit count of each root child, in move enumeration order.
    pub fn root_child_visits(&self) -> Vec<u32> {
        self.root_children()
            .iter()
            .map(|&id| self.get(id).visit_count)
            .collect()
    }

    /// Add a child to a parent node.
    /// Returns the new child's NodeId.
    pub fn add_child(&mut self, parent_id: NodeId, state: S) -> NodeId {
        let child_id = self.allocate(MctsNode::new_child(parent_id, state));
        self.get_mut(parent_id).children.push(child_id);
        child_id
    }

    /// Select the child of `node_id` maximizing `q + exploration`.
    ///
    /// Ties keep the earliest child in enumeration order. Returns `None` for
    /// a leaf.
    pub fn select_child(&self, node_id: NodeId, c: f64) -> Option<NodeId> {
        let node = self.get(node_id);
        let parent_visits = node.visit_count;

        let mut best: Option<(NodeId, f64)> = None;
        for &child_id in &node.children {
            let score = self.get(child_id).ucb_score(parent_visits, c);
            match best {
                Some((_, best_score)) if score > best_score => best = Some((child_id, score)),
                None => best = Some((child_id, score)),
                _ => {}
            }
        }
        best.map(|(id, _)| id)
    }

    /// Get statistics about the tree for debugging.
    pub fn stats(&self) -> TreeStats {
        let root = self.get(self.root);
        TreeStats {
            total_nodes: self.nodes.len(),
            root_visits: root.visit_count,
            root_value: root.q,
            max_depth: self.compute_max_depth(self.root, 0),
        }
    }

    fn compute_max_depth(&self, node_id: NodeId, current_depth: u32) -> u32 {
        let node = self.get(node_id);
        if node.children.is_empty() {
            return current_depth;
        }

        node.children
            .iter()
            .map(|id| self.compute_max_depth(*id, current_depth + 1))
            .max()
            .unwrap_or(current_depth)
    }
}

impl<S: GameState> MctsTree<S> {
    /// Backpropagate terminal values from a leaf to the root.
    ///
    /// A non-root node is credited with the value of the player who moved
    /// into it, i.e. its parent's player to move. The root is credited with
    /// its own player's value.
    pub fn backpropagate(&mut self, leaf_id: NodeId, values: &[f64; 2]) {
        let mut current_id = leaf_id;

        loop {
            let parent_id = self.get(current_id).parent;
            let credited = if parent_id.is_some() {
                self.get(parent_id).state.current_player()
            } else {
                self.get(current_id).state.current_player()
            };

            self.get_mut(current_id).update(values[credited.index()]);

            if parent_id.is_none() {
                break;
            }
            current_id = parent_id;
        }
    }
}

/// Statistics about an MCTS tree.
#[derive(Debug, Clone)]
pub struct TreeStats {
    pub total_nodes: usize,
    pub root_visits: u32,
    pub root_value: f64,
    pub max_depth: u32,
}
