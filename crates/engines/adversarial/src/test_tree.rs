//! Explicit game trees with known leaf values, for exercising the engines
//! without a real game.

use std::sync::Arc;

use grid_core::{AgentIndex, GameError, GameState};

/// Child index that fails to produce a successor.
pub const BROKEN: usize = usize::MAX;

#[derive(Debug, Clone)]
struct TreeNode {
    value: f64,
    children: Vec<usize>,
}

/// A node in a shared tree. Actions are child positions `0..children.len()`.
#[derive(Debug, Clone)]
pub struct TreeState {
    nodes: Arc<Vec<TreeNode>>,
    at: usize,
    agents: usize,
}

impl GameState for TreeState {
    type Action = usize;

    fn legal_actions(&self, _agent: AgentIndex) -> Vec<usize> {
        (0..self.nodes[self.at].children.len()).collect()
    }

    fn successor(&self, _agent: AgentIndex, action: usize) -> Result<Self, GameError> {
        match self.nodes[self.at].children.get(action) {
            Some(&child) if child != BROKEN => Ok(Self {
                nodes: Arc::clone(&self.nodes),
                at: child,
                agents: self.agents,
            }),
            _ => Err(GameError::TerminalState),
        }
    }

    fn is_win(&self) -> bool {
        false
    }

    fn is_lose(&self) -> bool {
        false
    }

    fn num_agents(&self) -> usize {
        self.agents
    }

    fn score(&self) -> f64 {
        self.nodes[self.at].value
    }
}

/// Builds trees bottom-up: leaves first, the root last.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<TreeNode>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn leaf(&mut self, value: f64) -> usize {
        self.nodes.push(TreeNode {
            value,
            children: Vec::new(),
        });
        self.nodes.len() - 1
    }

    pub fn leaves(&mut self, values: &[f64]) -> Vec<usize> {
        values.iter().map(|&v| self.leaf(v)).collect()
    }

    /// Internal node. Its own value is only seen if depth runs out on it.
    pub fn node(&mut self, children: Vec<usize>) -> usize {
        self.nodes.push(TreeNode {
            value: 0.0,
            children,
        });
        self.nodes.len() - 1
    }

    pub fn build(self, root: usize, agents: usize) -> TreeState {
        TreeState {
            nodes: Arc::new(self.nodes),
            at: root,
            agents,
        }
    }
}

/// Root max node over min nodes, each holding the given leaf values.
pub fn max_of_mins(groups: &[&[f64]]) -> TreeState {
    let mut b = TreeBuilder::new();
    let mins: Vec<usize> = groups
        .iter()
        .map(|values| {
            let leaves = b.leaves(values);
            b.node(leaves)
        })
        .collect();
    let root = b.node(mins);
    b.build(root, 2)
}

/// Uniform random tree of `levels` turns with 1..=max_branching children.
pub fn random_tree(
    rng: &mut impl rand::Rng,
    levels: u32,
    max_branching: usize,
    agents: usize,
) -> TreeState {
    fn grow(b: &mut TreeBuilder, rng: &mut impl rand::Rng, levels: u32, max_branching: usize) -> usize {
        if levels == 0 {
            return b.leaf(rng.gen_range(-50..=50) as f64);
        }
        let width = rng.gen_range(1..=max_branching);
        let children = (0..width)
            .map(|_| grow(b, rng, levels - 1, max_branching))
            .collect();
        b.node(children)
    }

    let mut b = TreeBuilder::new();
    let root = grow(&mut b, rng, levels, max_branching);
    b.build(root, agents)
}
